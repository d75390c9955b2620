use chrono::{Datelike, Days, NaiveTime};
use subtracker::core::calculator::{
    NotificationWindow, add_months_rolling, add_years_rolling, compute_next_renewal, days_until,
    evaluate_notification, evaluate_notification_at,
};
use subtracker::models::{Notification, NotificationSource, RenewalType};

mod common;
use common::{date, sub};

#[test]
fn monthly_renewal_inside_window_is_not_urgent() {
    let s = sub(1, RenewalType::Monthly, Some("2024-01-15"), Some("15.99"));
    let reference = date("2024-06-10");

    assert_eq!(
        compute_next_renewal(s.start_date, s.renewal_type, reference),
        date("2024-06-15")
    );
    assert_eq!(
        evaluate_notification(&s, reference),
        Some(Notification {
            urgent: false,
            days_until: 5
        })
    );
}

#[test]
fn monthly_renewal_two_days_away_is_urgent() {
    let s = sub(1, RenewalType::Monthly, Some("2024-01-15"), Some("15.99"));

    assert_eq!(
        evaluate_notification(&s, date("2024-06-13")),
        Some(Notification {
            urgent: true,
            days_until: 2
        })
    );
}

#[test]
fn yearly_renewal_across_leap_february() {
    let s = sub(2, RenewalType::Yearly, Some("2023-03-01"), Some("12.00"));
    let reference = date("2024-02-10");

    assert_eq!(
        compute_next_renewal(s.start_date, s.renewal_type, reference),
        date("2024-03-01")
    );
    assert_eq!(
        evaluate_notification(&s, reference),
        Some(Notification {
            urgent: false,
            days_until: 20
        })
    );
}

#[test]
fn month_end_start_rolls_over_and_keeps_new_day() {
    let s = sub(3, RenewalType::Monthly, Some("2023-01-31"), None);

    let next = compute_next_renewal(s.start_date, s.renewal_type, date("2023-02-20"));
    assert_eq!(next, date("2023-03-03"));
    assert_eq!(evaluate_notification(&s, date("2023-02-20")), None);

    // later steps start from the rolled-over date
    assert_eq!(
        compute_next_renewal(s.start_date, s.renewal_type, date("2023-03-10")),
        date("2023-04-03")
    );
    assert_eq!(
        compute_next_renewal(s.start_date, s.renewal_type, date("2023-06-01")),
        date("2023-06-03")
    );
}

#[test]
fn rolling_month_and_year_addition() {
    assert_eq!(add_months_rolling(date("2023-01-31"), 1), Some(date("2023-03-03")));
    assert_eq!(add_months_rolling(date("2024-01-31"), 1), Some(date("2024-03-02")));
    assert_eq!(add_months_rolling(date("2024-03-15"), 1), Some(date("2024-04-15")));
    assert_eq!(add_months_rolling(date("2024-12-10"), 1), Some(date("2025-01-10")));
    assert_eq!(add_years_rolling(date("2024-02-29"), 1), Some(date("2025-03-01")));
    assert_eq!(add_years_rolling(date("2023-07-04"), 1), Some(date("2024-07-04")));
}

#[test]
fn start_after_reference_is_returned_unchanged() {
    let reference = date("2024-06-10");
    for start in ["2024-06-11", "2024-12-31", "2030-01-01"] {
        for cadence in [RenewalType::Monthly, RenewalType::Yearly] {
            assert_eq!(
                compute_next_renewal(Some(date(start)), cadence, reference),
                date(start)
            );
        }
    }
}

#[test]
fn start_on_reference_advances_one_period() {
    let reference = date("2024-06-10");
    assert_eq!(
        compute_next_renewal(Some(reference), RenewalType::Monthly, reference),
        date("2024-07-10")
    );
    assert_eq!(
        compute_next_renewal(Some(reference), RenewalType::Yearly, reference),
        date("2025-06-10")
    );
}

#[test]
fn missing_start_date_renews_now() {
    let reference = date("2024-06-10");
    let s = sub(4, RenewalType::Monthly, None, Some("5.00"));

    assert_eq!(
        compute_next_renewal(None, RenewalType::Yearly, reference),
        reference
    );
    assert_eq!(
        evaluate_notification(&s, reference),
        Some(Notification {
            urgent: true,
            days_until: 0
        })
    );
}

#[test]
fn result_is_after_reference_and_reachable_from_start() {
    let reference = date("2024-06-10");
    let mut start = date("2019-01-01");

    while start <= reference {
        for cadence in [RenewalType::Monthly, RenewalType::Yearly] {
            let next = compute_next_renewal(Some(start), cadence, reference);
            assert!(next > reference, "{start} {cadence:?} -> {next}");

            // walk forward from start until next is hit
            let mut step = start;
            while step < next {
                step = match cadence {
                    RenewalType::Monthly => add_months_rolling(step, 1),
                    RenewalType::Yearly => add_years_rolling(step, 1),
                }
                .expect("in range");
            }
            assert_eq!(step, next, "{start} {cadence:?}");
        }
        start = start + Days::new(17);
    }
}

#[test]
fn non_decreasing_in_start_within_one_period_before_reference() {
    let reference = date("2024-06-10");
    let mut previous = None;
    let mut start = date("2024-05-11");

    while start <= reference {
        if start.day() <= 28 {
            let next = compute_next_renewal(Some(start), RenewalType::Monthly, reference);
            if let Some(prev) = previous {
                assert!(next >= prev, "{start} -> {next} < {prev}");
            }
            previous = Some(next);
        }
        start = start + Days::new(1);
    }
}

#[test]
fn non_decreasing_in_start_after_reference() {
    let reference = date("2024-06-10");
    let mut previous = reference;
    let mut start = date("2024-06-11");

    while start <= date("2025-06-10") {
        let next = compute_next_renewal(Some(start), RenewalType::Yearly, reference);
        assert!(next >= previous);
        previous = next;
        start = start + Days::new(1);
    }
}

#[test]
fn partial_days_round_up() {
    let renewal = date("2024-06-15");

    // 2.1 days before midnight of the renewal
    let now = date("2024-06-12").and_time(NaiveTime::from_hms_opt(21, 36, 0).expect("valid"));
    assert_eq!(days_until(renewal, now), 3);

    let midnight = date("2024-06-13").and_time(NaiveTime::MIN);
    assert_eq!(days_until(renewal, midnight), 2);

    let s = sub(5, RenewalType::Monthly, Some("2024-01-15"), None);
    assert_eq!(
        evaluate_notification_at(&s, now),
        Some(Notification {
            urgent: true,
            days_until: 3
        })
    );
}

#[test]
fn window_boundaries_per_cadence() {
    let monthly = NotificationWindow::for_renewal_type(RenewalType::Monthly);
    assert_eq!(monthly.classify(8), None);
    assert_eq!(
        monthly.classify(7),
        Some(Notification {
            urgent: false,
            days_until: 7
        })
    );
    assert_eq!(monthly.classify(4).map(|n| n.urgent), Some(false));
    assert_eq!(monthly.classify(3).map(|n| n.urgent), Some(true));

    let yearly = NotificationWindow::for_renewal_type(RenewalType::Yearly);
    assert_eq!(yearly.classify(31), None);
    assert_eq!(yearly.classify(30).map(|n| n.urgent), Some(false));
    assert_eq!(yearly.classify(8).map(|n| n.urgent), Some(false));
    assert_eq!(yearly.classify(7).map(|n| n.urgent), Some(true));
}

#[test]
fn no_notification_outside_window() {
    // monthly renewal 8 days away
    let s = sub(6, RenewalType::Monthly, Some("2024-01-18"), None);
    assert_eq!(evaluate_notification(&s, date("2024-06-10")), None);
    assert_eq!(
        evaluate_notification(&s, date("2024-06-11")).map(|n| n.days_until),
        Some(7)
    );

    // yearly renewal 31 days away
    let y = sub(7, RenewalType::Yearly, Some("2023-03-12"), None);
    assert_eq!(evaluate_notification(&y, date("2024-02-10")), None);
    assert_eq!(
        evaluate_notification(&y, date("2024-02-11")).map(|n| n.days_until),
        Some(30)
    );
}

#[test]
fn precomputed_notification_wins() {
    let mut s = sub(8, RenewalType::Monthly, Some("2024-01-15"), None);
    let stored = Notification {
        urgent: true,
        days_until: 42,
    };
    s.notification = NotificationSource::Precomputed(stored);

    // dates alone would give no notification on this day
    assert_eq!(evaluate_notification(&s, date("2024-06-01")), Some(stored));
}
