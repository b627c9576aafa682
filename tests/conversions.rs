use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use jalali::{Converter, Fields, JalaliDateTime, LeapRule, Locale, Weekday};

fn gregorian_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[test]
fn known_gregorian_dates() {
    struct TestCase {
        gregorian: (i32, u32, u32),
        jalali:    (u16, u8, u8),
    }

    let cases = [
        TestCase {
            gregorian: (1921, 3, 21),
            jalali:    (1300, 1, 1),
        },
        TestCase {
            gregorian: (1970, 1, 1),
            jalali:    (1348, 10, 11),
        },
        TestCase {
            gregorian: (2000, 1, 1),
            jalali:    (1378, 10, 11),
        },
        TestCase {
            gregorian: (2023, 7, 19),
            jalali:    (1402, 4, 28),
        },
        TestCase {
            gregorian: (2024, 3, 20),
            jalali:    (1403, 1, 1),
        },
        TestCase {
            gregorian: (2025, 3, 20),
            jalali:    (1404, 1, 1),
        },
    ];

    for case in &cases {
        let (gy, gm, gd) = case.gregorian;
        let (jy, jm, jd) = case.jalali;
        let date = midnight(gregorian_date(gy, gm, gd));

        let converted = JalaliDateTime::from_naive(&date).unwrap();
        assert_eq!(converted, JalaliDateTime::from_date(jy, jm, jd).unwrap(), "{date}");
        assert_eq!(converted.to_naive().unwrap(), date);
    }
}

#[test]
fn every_day_of_two_centuries_round_trips() {
    let start = gregorian_date(1900, 1, 1);
    let end = gregorian_date(2100, 12, 31);

    let mut previous: Option<JalaliDateTime> = None;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let wall_clock = midnight(date);
        let jalali = JalaliDateTime::from_naive(&wall_clock).unwrap();
        assert_eq!(jalali.to_naive().unwrap(), wall_clock);

        if let Some(previous) = previous {
            assert_eq!(previous.tomorrow().unwrap(), jalali, "{date}");
            assert_eq!(jalali.weekday(), previous.weekday().succ());
        }
        previous = Some(jalali);
    }
}

#[test]
fn every_rule_round_trips_through_gregorian() {
    let start = gregorian_date(1990, 1, 1);
    for rule in LeapRule::ALL {
        let converter = Converter::new(rule);
        for date in start.iter_days().take(366 * 40) {
            let wall_clock = midnight(date);
            let fields = converter.from_naive(&wall_clock).unwrap();
            assert_eq!(converter.to_naive(&fields).unwrap(), wall_clock, "{rule} {date}");
        }
    }
}

#[test]
fn reference_scenario() {
    let datetime = JalaliDateTime::new(1402, 4, 28, 9, 0, 0)
        .unwrap()
        .with_locale(Locale::Persian);

    let instant = datetime.to_gregorian().unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2023, 7, 19, 5, 30, 0).unwrap());

    assert_eq!(datetime.weekday(), Weekday::Wednesday);
    assert_eq!(datetime.weekday_name(), "چهارشنبه");
    assert_eq!(datetime.yesterday().unwrap().day_of_month(), 27);
    assert_eq!(datetime.tomorrow().unwrap().day_of_month(), 29);
    assert_eq!(datetime.day_of_month(), 28);

    let back = JalaliDateTime::from_gregorian(&instant).unwrap();
    assert_eq!(back.fields(), datetime.fields());
}

#[test]
fn instants_in_other_zones_land_on_iran_wall_clock() {
    let tokyo = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
    let instant = tokyo.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let datetime = JalaliDateTime::from_gregorian(&instant).unwrap();
    assert_eq!(datetime.fields(), Fields::new(1403, 1, 1, 6, 30, 0));
}

#[test]
fn persian_text_round_trips() {
    let text = "۱۴۰۲-۰۴-۲۹ ۱۴:۱۵:۲۵";
    let datetime: JalaliDateTime = text.parse().unwrap();
    assert_eq!(datetime.locale(), Locale::Persian);
    assert_eq!(datetime.to_string(), text);
    assert_eq!(datetime.month_name(), "تیر");
}

#[test]
fn supported_range_edges() {
    let first = JalaliDateTime::from_date(1, 1, 1).unwrap();
    assert_eq!(first.elapsed_seconds(), 0);
    assert_eq!(first.to_naive().unwrap(), midnight(gregorian_date(622, 3, 22)));
    assert!(first.yesterday().is_err());

    let last = JalaliDateTime::new(9999, 12, 29, 23, 59, 59).unwrap();
    assert_eq!(last.elapsed_seconds(), Converter::CANONICAL.max_elapsed_seconds());
    assert!(last.tomorrow().is_err());
    assert!(JalaliDateTime::from_elapsed_seconds(last.elapsed_seconds() + 1).is_err());
}
