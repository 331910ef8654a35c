use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{shift_note::ShiftNote, staff::StaffId};
use crate::utils::sql_value::SqlValue;

pub const TIMESHEET_COLUMNS: [&str; 6] = [
    "staff_id",
    "check_in",
    "check_out",
    "date",
    "hours_worked",
    "notes",
];

/// One row of the `TimeSheets` table
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheet {
    pub staff_id: StaffId,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub notes: Option<ShiftNote>,
}

impl TimeSheet {
    /// Column values in `TIMESHEET_COLUMNS` order
    pub fn sql_values(&self) -> [SqlValue; 6] {
        [
            SqlValue::U64(self.staff_id.0),
            SqlValue::DateTime(self.check_in),
            SqlValue::DateTime(self.check_out),
            SqlValue::Date(self.date),
            SqlValue::Decimal(self.hours_worked),
            self.notes
                .map(|note| SqlValue::String(note.to_string()))
                .unwrap_or(SqlValue::Null),
        ]
    }
}

/// Round to two decimals, the scale of `hours_worked`
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
