use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use tracing::{debug, instrument};

use crate::config::{CHECK_IN_HOUR, Config, SHIFT_MAX_HOURS, SHIFT_MIN_HOURS};
use crate::model::{
    shift_note::ShiftNote,
    staff::{StaffId, StaffStat},
    timesheet::{TimeSheet, round_hours},
};

/// Monday to Friday
pub fn is_working_day(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() <= 5
}

/// Check-in at `CHECK_IN_HOUR` plus a random minute in [0, 59), second zero
pub fn generate_check_in<R: Rng>(date: NaiveDate, rng: &mut R) -> NaiveDateTime {
    let minute = rng.gen_range(0..59);
    date.and_time(NaiveTime::MIN) + Duration::hours(CHECK_IN_HOUR) + Duration::minutes(minute)
}

/// Check-out a random [8.0, 9.5) hours after check-in.
/// The shift is cut to whole seconds so the written timestamps carry it exactly.
pub fn generate_check_out<R: Rng>(check_in: NaiveDateTime, rng: &mut R) -> NaiveDateTime {
    let shift_hours = rng.gen_range(SHIFT_MIN_HOURS..SHIFT_MAX_HOURS);
    check_in + Duration::seconds((shift_hours * 3600.0) as i64)
}

pub fn calculate_hours(check_in: NaiveDateTime, check_out: NaiveDateTime) -> f64 {
    let seconds = (check_out - check_in).num_seconds();
    round_hours(seconds as f64 / 3600.0)
}

#[derive(Debug, Default)]
pub struct Generated {
    pub records: Vec<TimeSheet>,
    pub stats: BTreeMap<StaffId, StaffStat>,
}

impl Generated {
    pub fn stat(&self, staff_id: StaffId) -> StaffStat {
        self.stats.get(&staff_id).cloned().unwrap_or_default()
    }
}

pub struct Generator<'a, R: Rng> {
    config: &'a Config,
    rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
    pub fn new(config: &'a Config, rng: R) -> Self {
        Self { config, rng }
    }

    /// Walk the configured window and produce every timesheet row
    #[instrument(skip_all)]
    pub fn generate(&mut self) -> Generated {
        let config = self.config;
        debug!(
            start = %config.start_date,
            end = %config.end_date,
            staff = config.staff.len(),
            "generating timesheets"
        );

        let mut generated = Generated::default();
        for staff in &config.staff {
            generated.stats.insert(staff.id, StaffStat::default());
        }

        for date in config
            .start_date
            .iter_days()
            .take_while(|date| *date <= config.end_date)
        {
            if !is_working_day(date) {
                continue;
            }

            if self.rng.gen_bool(config.absence_rate) {
                debug!(%date, "absence day, no timesheets");
                continue;
            }

            for staff in &config.staff {
                let record = self.timesheet_for(staff.id, date);
                generated
                    .stats
                    .entry(staff.id)
                    .or_default()
                    .record(record.hours_worked);
                generated.records.push(record);
            }
        }

        debug!(records = generated.records.len(), "generation finished");
        generated
    }

    fn timesheet_for(&mut self, staff_id: StaffId, date: NaiveDate) -> TimeSheet {
        let check_in = generate_check_in(date, &mut self.rng);
        let check_out = generate_check_out(check_in, &mut self.rng);

        TimeSheet {
            staff_id,
            check_in,
            check_out,
            date,
            hours_worked: calculate_hours(check_in, check_out),
            notes: ShiftNote::draw(&mut self.rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ABSENCE_RATE;
    use chrono::{Timelike, Weekday};
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate, absence_rate: f64) -> Config {
        Config {
            start_date: start,
            end_date: end,
            absence_rate,
            ..Config::default()
        }
    }

    #[test]
    fn test_is_working_day() {
        // 2025-04-07 is a Monday
        let monday = ymd(2025, 4, 7);
        for offset in 0..7 {
            let date = monday + Duration::days(offset);
            let expected = !matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            assert_eq!(is_working_day(date), expected, "{}", date);
        }
    }

    #[test]
    fn test_check_in_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let date = ymd(2025, 4, 1);

        for _ in 0..500 {
            let check_in = generate_check_in(date, &mut rng);
            assert_eq!(check_in.date(), date);
            assert_eq!(check_in.hour(), 8);
            assert!(check_in.minute() < 59);
            assert_eq!(check_in.second(), 0);
        }
    }

    #[test]
    fn test_calculate_hours() {
        let date = ymd(2025, 4, 1);
        let check_in = date.and_hms_opt(8, 30, 0).unwrap();

        assert_eq!(calculate_hours(check_in, date.and_hms_opt(16, 30, 0).unwrap()), 8.0);
        assert_eq!(calculate_hours(check_in, date.and_hms_opt(17, 45, 0).unwrap()), 9.25);
        // 8h 20m 30s = 8.341666...
        assert_eq!(calculate_hours(check_in, date.and_hms_opt(16, 50, 30).unwrap()), 8.34);
    }

    #[test]
    fn test_single_working_day_with_full_attendance() {
        let day = ymd(2025, 4, 1);
        let config = window(day, day, 0.0);
        let generated = Generator::new(&config, StdRng::seed_from_u64(3)).generate();

        assert_eq!(generated.records.len(), 2);
        let staff_ids: Vec<StaffId> = generated.records.iter().map(|r| r.staff_id).collect();
        assert_eq!(staff_ids, vec![StaffId(6), StaffId(7)]);
        assert!(generated.records.iter().all(|r| r.date == day));
    }

    #[test]
    fn test_weekend_only_window_is_empty() {
        // Saturday and Sunday
        let config = window(ymd(2025, 4, 5), ymd(2025, 4, 6), 0.0);
        let generated = Generator::new(&config, StdRng::seed_from_u64(3)).generate();

        assert!(generated.records.is_empty());
        assert_eq!(generated.stat(StaffId(6)), StaffStat::default());
        assert_eq!(generated.stat(StaffId(7)), StaffStat::default());
    }

    #[test]
    fn test_full_absence_yields_nothing() {
        let config = window(ymd(2025, 4, 1), ymd(2025, 4, 30), 1.0);
        let generated = Generator::new(&config, StdRng::seed_from_u64(3)).generate();

        assert!(generated.records.is_empty());
    }

    #[test]
    fn test_full_attendance_covers_every_weekday() {
        // April 2025 has 22 weekdays
        let config = window(ymd(2025, 4, 1), ymd(2025, 4, 30), 0.0);
        let generated = Generator::new(&config, StdRng::seed_from_u64(9)).generate();

        assert_eq!(generated.records.len(), 44);
        assert_eq!(generated.stat(StaffId(6)).days, 22);
        assert_eq!(generated.stat(StaffId(7)).days, 22);
    }

    #[test]
    fn test_same_seed_reproduces_output() {
        let config = Config::default();
        let first = Generator::new(&config, StdRng::seed_from_u64(2025)).generate();
        let second = Generator::new(&config, StdRng::seed_from_u64(2025)).generate();

        assert_eq!(first.records, second.records);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_stats_match_records() {
        let config = Config::default();
        let generated = Generator::new(&config, StdRng::seed_from_u64(11)).generate();

        for staff in &config.staff {
            let records: Vec<&TimeSheet> = generated
                .records
                .iter()
                .filter(|r| r.staff_id == staff.id)
                .collect();
            let stat = generated.stat(staff.id);

            assert_eq!(stat.days as usize, records.len());
            let hours: f64 = records.iter().map(|r| r.hours_worked).sum();
            assert_eq!(stat.total_hours(), round_hours(hours));
        }
    }

    proptest! {
        #[test]
        fn test_records_hold_invariants(seed in any::<u64>(), start_offset in 0i64..120, span in 0i64..60) {
            let start = ymd(2025, 4, 1) + Duration::days(start_offset);
            let end = start + Duration::days(span);
            let config = window(start, end, DEFAULT_ABSENCE_RATE);
            let generated = Generator::new(&config, StdRng::seed_from_u64(seed)).generate();

            for record in &generated.records {
                prop_assert!(record.check_out > record.check_in);
                prop_assert!(record.hours_worked >= 8.0 && record.hours_worked <= 9.5);
                prop_assert_eq!(record.hours_worked, calculate_hours(record.check_in, record.check_out));
                prop_assert!(is_working_day(record.date));
                prop_assert!(record.date >= start && record.date <= end);
                prop_assert_eq!(record.check_in.date(), record.date);
            }
        }
    }
}
