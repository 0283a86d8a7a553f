#![forbid(unsafe_code)]
use chrono::Weekday;
use roulement::{
    generate_schedule, partition_weeks, month_days,
    scheduler::{assign_day, off_worker, role_for},
    RotationScheduler, ScoringOptions, ShiftCode, ShiftCounts, WorkerId, YearMonth,
};
use std::collections::HashSet;

fn w(i: usize) -> WorkerId {
    WorkerId::new(i).unwrap()
}

#[test]
fn every_day_has_one_off_and_three_distinct_shifts() {
    for month in 1..=12 {
        let schedule = generate_schedule(YearMonth::new(2026, month)).unwrap();
        schedule.validate().unwrap();
        for day in schedule.iter() {
            let shifts: HashSet<ShiftCode> = day.assignments.iter().map(|a| a.shift).collect();
            assert_eq!(shifts.len(), 3);
            assert!(day.assignments.iter().all(|a| a.worker != day.off));
        }
    }
}

#[test]
fn off_days_follow_role_patterns() {
    let schedule = generate_schedule(YearMonth::new(2026, 9)).unwrap();
    for day in schedule.iter() {
        for worker in WorkerId::ALL {
            let role = role_for(worker, day.week_index);
            assert_eq!(role.value() as usize, (worker.index() + day.week_index) % 4);
            assert_eq!(day.is_off(worker), role.rests_on(day.day.weekday));
        }
    }
}

#[test]
fn four_full_weeks_give_seven_rest_days_each() {
    // février 2026 : 28 jours, commence un dimanche
    let schedule = generate_schedule(YearMonth::new(2026, 2)).unwrap();
    assert_eq!(schedule.len(), 28);
    for worker in WorkerId::ALL {
        let off = schedule.iter().filter(|d| d.is_off(worker)).count();
        assert_eq!(off, 7, "worker {worker}");
        assert_eq!(schedule.len() - off, 21);
    }
}

#[test]
fn saturday_holder_rests_three_days_across_week_boundary() {
    // octobre 2026 : jeudi 1er, samedi 3, dimanche 4, lundi 5
    let schedule = generate_schedule(YearMonth::new(2026, 10)).unwrap();
    let sat = schedule.get(3).unwrap();
    assert_eq!(sat.day.weekday, Weekday::Sat);
    assert_eq!(sat.off, w(3));
    assert_eq!(schedule.get(4).unwrap().off, w(3));
    assert_eq!(schedule.get(5).unwrap().off, w(3));
    assert_eq!(role_for(w(3), 0).value(), 3);
    assert_eq!(role_for(w(3), 1).value(), 0);
}

#[test]
fn short_first_week_keeps_index_zero() {
    let days = month_days(YearMonth::new(2026, 10)).unwrap();
    let weeks = partition_weeks(&days);
    assert_eq!(weeks[0].days.len(), 3);
    assert_eq!(weeks[0].index, 0);

    let schedule = generate_schedule(YearMonth::new(2026, 10)).unwrap();
    let first = schedule.get(1).unwrap();
    assert_eq!(first.week_index, 0);
    // jeudi, semaine 0 : rôle 2 => agent 2
    assert_eq!(first.off, w(2));
    assert_eq!(off_worker(Weekday::Thu, 0), Some(w(2)));
}

#[test]
fn february_2026_first_days() {
    let schedule = generate_schedule(YearMonth::new(2026, 2)).unwrap();

    let d1 = schedule.get(1).unwrap();
    assert_eq!(d1.day.weekday, Weekday::Sun);
    assert_eq!(d1.off, w(0));
    assert_eq!(d1.shift_of(w(1)), Some(ShiftCode::Early));
    assert_eq!(d1.shift_of(w(2)), Some(ShiftCode::Mid));
    assert_eq!(d1.shift_of(w(3)), Some(ShiftCode::Late));

    let d2 = schedule.get(2).unwrap();
    assert_eq!(d2.off, w(0));
    assert_eq!(d2.worker_on(ShiftCode::Early), Some(w(2)));
    assert_eq!(d2.worker_on(ShiftCode::Mid), Some(w(3)));
    assert_eq!(d2.worker_on(ShiftCode::Late), Some(w(1)));

    let d3 = schedule.get(3).unwrap();
    assert_eq!(d3.off, w(1));
    assert_eq!(d3.worker_on(ShiftCode::Early), Some(w(3)));
    assert_eq!(d3.worker_on(ShiftCode::Mid), Some(w(0)));
    assert_eq!(d3.worker_on(ShiftCode::Late), Some(w(2)));
}

#[test]
fn counts_after_first_day_have_one_increment_per_pair() {
    let days = month_days(YearMonth::new(2026, 2)).unwrap();
    let mut counts = ShiftCounts::new();
    let off = off_worker(days[0].weekday, 0).unwrap();
    let planned = assign_day(&mut counts, days[0], 0, off, ScoringOptions::default()).unwrap();

    assert_eq!(counts.total(), 3);
    assert_eq!(counts.of(w(0)), [0, 0, 0]);
    for a in &planned.assignments {
        assert_eq!(counts.get(a.worker, a.shift), 1);
    }
}

#[test]
fn generation_is_deterministic() {
    let month = YearMonth::new(2027, 5);
    let a = generate_schedule(month).unwrap();
    let b = RotationScheduler::new().generate(month).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_month_is_an_error() {
    assert!(generate_schedule(YearMonth::new(2026, 13)).is_err());
    assert!(generate_schedule(YearMonth::new(2026, 0)).is_err());
}
