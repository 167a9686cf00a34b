//! Date and time integration tests.

use astrosubs::time::{Date, Time};
use chrono::Weekday;

#[test]
fn test_day_of_week() {
    let date: Date = "17 Nov 1961".parse().unwrap();
    assert_eq!(date.weekday(), Weekday::Fri);
    assert_eq!(date.day_of_week(), "Friday");
    assert_eq!(format!("{date} ---> {}", date.day_of_week()), "17 Nov 1961 ---> Friday");
}

#[test]
fn test_mjd_epoch() {
    let epoch = Date::new(1858, 11, 17).unwrap();
    assert_eq!(epoch.mjd(), 0);
    assert_eq!(Date::from_mjd(51_544).unwrap(), Date::new(2000, 1, 1).unwrap());
}

#[test]
fn test_time_text_round_trip() {
    let time: Time = "29 Sep 2002, 13:01:34.25".parse().unwrap();
    let hms = time.hms();
    assert_eq!((hms.hour, hms.min, hms.sec), (13, 1, 34));
    assert!((hms.fsec - 0.25).abs() < 1e-6);
    assert!(time.to_string().starts_with("29 Sep 2002, 13:01:34.2"));
}

#[test]
fn test_time_arithmetic() {
    let start = Time::from_hms(Date::new(2002, 9, 29).unwrap(), 23, 30, 0.0).unwrap();
    let later = start.add_seconds(3600.0).unwrap();
    assert_eq!(later.date(), Date::new(2002, 9, 30).unwrap());
    assert!((later.hour() - 0.5).abs() < 1e-6);
    assert!((later.seconds_since(&start) - 3600.0).abs() < 1e-3);
}

#[test]
fn test_invalid_times() {
    assert!(Date::new(2002, 2, 30).is_err());
    assert!("31 Feb 2002".parse::<Date>().is_err());
    assert!(Time::from_hms(Date::new(2002, 1, 1).unwrap(), 24, 0, 0.0).is_err());
    let err = Time::new(Date::new(2002, 1, 1).unwrap(), 25.0).unwrap_err();
    assert_eq!(err.kind(), astrosubs::ErrorKind::InvalidTime);
}
