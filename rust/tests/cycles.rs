use crate::scheduling::{
    can_schedule_times, dates_to_schedule, hm, ndt, ndt_hm, CalendarConfig, CycleBoundary,
    EsmSchedule, Instant, Recurrence, TimesOfDay,
};

#[test]
fn friday_daily_cycle_rolls_to_monday() {
    let cal = CalendarConfig::default();
    let friday = ndt_hm(2025, 3, 14, 18, 0);
    assert_eq!(
        cal.daily_esm_next_cycle_start_date(&friday, false).unwrap(),
        ndt(2025, 3, 17)
    );
}

#[test]
fn anchor_on_31st_clamps_to_30_day_month() {
    let cal = CalendarConfig::default();
    let anchor = ndt(2025, 1, 31);
    for month in [4, 6, 9, 11] {
        assert_eq!(
            cal.cycle_start_date_of_month_with_original_start_date(&ndt(2025, month, 12), &anchor)
                .unwrap(),
            ndt(2025, month, 30)
        );
    }
}

#[test]
fn weekly_cycles_are_seven_days_apart() {
    let cal = CalendarConfig::default();
    let mut today = ndt_hm(2024, 2, 20, 11, 0);
    let mut previous: Option<Instant> = None;
    for _ in 0..10 {
        let next = cal.weekly_esm_next_cycle_start_date(&today).unwrap();
        if let Some(p) = previous {
            assert_eq!(next, p.add_day_interval(7).unwrap());
        }
        previous = Some(next);
        today = next.add_minutes(90).unwrap();
    }
}

#[test]
fn two_day_schedule_has_four_triggers() {
    let dates = dates_to_schedule(&[hm(8, 0), hm(20, 0)], &ndt(2025, 1, 1), &ndt(2025, 1, 3))
        .unwrap();
    assert_eq!(dates.len(), 4);
    assert!(dates.iter().all(|d| d.earlier_than(&ndt(2025, 1, 3))));
}

#[test]
fn passed_slots_cannot_be_scheduled() {
    let times = [hm(8, 0), hm(20, 0)];
    assert!(!can_schedule_times(&times, &ndt_hm(2025, 1, 1, 21, 0)).unwrap());
    assert!(can_schedule_times(&times, &ndt_hm(2025, 1, 1, 10, 0)).unwrap());
}

#[test]
fn daily_schedule_over_consecutive_cycles() {
    let schedule = EsmSchedule::new(
        Recurrence::Daily {
            include_weekends: false,
        },
        TimesOfDay::try_new(vec![hm(10, 0), hm(16, 0)]).unwrap(),
        Some(ndt(2024, 1, 4)),
        Some(ndt(2024, 1, 10)),
    );
    // walk cycle by cycle from the start date, collecting triggers
    let mut now = ndt(2024, 1, 4);
    let mut triggers: Vec<Instant> = vec![];
    while now.earlier_than(&ndt(2024, 1, 10)) {
        triggers.extend(schedule.current_cycle_triggers(&now).unwrap());
        now = schedule.next_cycle_start(&now).unwrap();
    }
    assert_eq!(
        triggers,
        vec![
            ndt_hm(2024, 1, 4, 10, 0),
            ndt_hm(2024, 1, 4, 16, 0),
            ndt_hm(2024, 1, 5, 10, 0),
            ndt_hm(2024, 1, 5, 16, 0),
            ndt_hm(2024, 1, 8, 10, 0),
            ndt_hm(2024, 1, 8, 16, 0),
            ndt_hm(2024, 1, 9, 10, 0),
            ndt_hm(2024, 1, 9, 16, 0),
        ]
    );
}
