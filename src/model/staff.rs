use derive_more::{Display, From};

use crate::model::timesheet::round_hours;

/// Matches `Users.id` / `TimeSheets.staff_id`
#[derive(Debug, Display, From, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StaffId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
}

impl Staff {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id: StaffId(id),
            name: name.to_string(),
        }
    }
}

/// Running totals for one staff member
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StaffStat {
    pub days: u32,
    pub hours: f64,
}

impl StaffStat {
    pub fn record(&mut self, hours_worked: f64) {
        self.days += 1;
        self.hours += hours_worked;
    }

    pub fn total_hours(&self) -> f64 {
        round_hours(self.hours)
    }

    pub fn average_hours(&self) -> f64 {
        if self.days == 0 {
            return 0.0;
        }
        round_hours(self.total_hours() / self.days as f64)
    }
}
