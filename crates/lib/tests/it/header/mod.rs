//! Header store integration tests
//!
//! Tests are organized by concern: naming and directory rules, whole sub-tree operations,
//! name searches, text printing and the binary codec.

mod codec_tests;
mod directory_tests;
mod print_tests;
