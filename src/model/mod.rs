pub mod shift_note;
pub mod staff;
pub mod timesheet;
