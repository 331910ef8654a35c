use std::fmt;

use crate::config::Config;
use crate::generator::Generated;
use crate::model::timesheet::{TIMESHEET_COLUMNS, TimeSheet};
use crate::utils::sql_value::values_tuple;

const RULE_WIDTH: usize = 60;

/// The SQL seed file: header, batched INSERTs, a verification query and
/// a statistics comment block.
pub struct SqlScript<'a> {
    config: &'a Config,
    generated: &'a Generated,
}

impl<'a> SqlScript<'a> {
    pub fn new(config: &'a Config, generated: &'a Generated) -> Self {
        Self { config, generated }
    }

    pub fn batch_count(&self) -> usize {
        self.generated.records.len().div_ceil(self.config.batch_size)
    }

    fn staff_line(&self) -> String {
        self.config
            .staff
            .iter()
            .map(|s| format!("{} (ID={})", s.name, s.id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rule(f)?;
        writeln!(f, "-- TIMESHEET DATA - GENERATED")?;
        writeln!(f, "-- From {} to {}", self.config.start_date, self.config.end_date)?;
        writeln!(f, "-- Staff: {}", self.staff_line())?;
        write_rule(f)?;
        writeln!(f)
    }

    fn write_batch(f: &mut fmt::Formatter<'_>, batch: &[TimeSheet]) -> fmt::Result {
        writeln!(
            f,
            "INSERT INTO TimeSheets ({}) VALUES",
            TIMESHEET_COLUMNS.join(", ")
        )?;

        let rows = batch
            .iter()
            .map(|record| values_tuple(&record.sql_values()))
            .collect::<Vec<_>>()
            .join(",\n");
        writeln!(f, "{};", rows)?;
        writeln!(f)
    }

    fn write_verification(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- Verify data")?;
        writeln!(f, "SELECT ")?;
        writeln!(f, "    u.firstname || ' ' || u.lastname as staff_name,")?;
        writeln!(f, "    COUNT(*) as total_days,")?;
        writeln!(f, "    ROUND(SUM(t.hours_worked), 2) as total_hours,")?;
        writeln!(f, "    ROUND(AVG(t.hours_worked), 2) as avg_hours_per_day")?;
        writeln!(f, "FROM TimeSheets t")?;
        writeln!(f, "JOIN Users u ON t.staff_id = u.id")?;
        writeln!(
            f,
            "WHERE t.date >= '{}' AND t.date <= '{}'",
            self.config.start_date, self.config.end_date
        )?;
        writeln!(f, "GROUP BY u.id, u.firstname, u.lastname")?;
        writeln!(f, "ORDER BY u.id;")?;
        writeln!(f)
    }

    fn write_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rule(f)?;
        writeln!(f, "-- STATISTICS")?;
        write_rule(f)?;

        for staff in &self.config.staff {
            let stat = self.generated.stat(staff.id);
            writeln!(f, "-- {} (ID={}):", staff.name, staff.id)?;
            writeln!(f, "--   Total days: {}", stat.days)?;
            writeln!(f, "--   Total hours: {:.2}", stat.total_hours())?;
            writeln!(f, "--   Average hours/day: {:.2}", stat.average_hours())?;
        }

        write!(f, "-- {}", "=".repeat(RULE_WIDTH))
    }
}

impl fmt::Display for SqlScript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        writeln!(f, "BEGIN;")?;
        writeln!(f)?;

        for batch in self.generated.records.chunks(self.config.batch_size) {
            Self::write_batch(f, batch)?;
        }

        self.write_verification(f)?;
        writeln!(f, "COMMIT;")?;
        writeln!(f)?;

        self.write_statistics(f)
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "-- {}", "=".repeat(RULE_WIDTH))
}
