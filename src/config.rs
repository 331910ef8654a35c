use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use dotenvy::dotenv;

use crate::model::staff::Staff;
use crate::utils::sql_value::DATE_FORMAT;

pub const DEFAULT_OUTPUT_PATH: &str = "docker/init/06_timesheet_data.sql";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_BATCH_SIZE: usize = 100;
// 5% sick leave / vacation
pub const DEFAULT_ABSENCE_RATE: f64 = 0.05;

pub const CHECK_IN_HOUR: i64 = 8;
pub const SHIFT_MIN_HOURS: f64 = 8.0;
pub const SHIFT_MAX_HOURS: f64 = 9.5;

const STAFF_ROSTER: [(u64, &str); 2] = [(6, "Hoàng Lan"), (7, "Đỗ Minh")];

#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub log_dir: String,

    // Generation window, both ends inclusive
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub staff: Vec<Staff>,
    pub seed: Option<u64>,
    pub batch_size: usize,
    pub absence_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_dir: DEFAULT_LOG_DIR.to_string(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            staff: STAFF_ROSTER
                .iter()
                .map(|(id, name)| Staff::new(*id, name))
                .collect(),
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            absence_rate: DEFAULT_ABSENCE_RATE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let start_date = parse_date(&lookup, "TIMESHEET_START_DATE")?.unwrap_or(defaults.start_date);
        let end_date = parse_date(&lookup, "TIMESHEET_END_DATE")?.unwrap_or(defaults.end_date);
        if start_date > end_date {
            bail!(
                "TIMESHEET_START_DATE ({}) must not be after TIMESHEET_END_DATE ({})",
                start_date,
                end_date
            );
        }

        let batch_size = parse_var(&lookup, "TIMESHEET_BATCH_SIZE")?.unwrap_or(defaults.batch_size);
        if batch_size == 0 {
            bail!("TIMESHEET_BATCH_SIZE must be greater than 0");
        }

        let absence_rate: f64 =
            parse_var(&lookup, "TIMESHEET_ABSENCE_RATE")?.unwrap_or(defaults.absence_rate);
        if !(0.0..=1.0).contains(&absence_rate) {
            bail!("TIMESHEET_ABSENCE_RATE must be within [0, 1], got {}", absence_rate);
        }

        Ok(Self {
            output_path: lookup("TIMESHEET_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            start_date,
            end_date,
            staff: defaults.staff,
            seed: parse_var(&lookup, "TIMESHEET_SEED")?,
            batch_size,
            absence_rate,
        })
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid default start date")
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 26).expect("valid default end date")
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| anyhow!("{} has invalid value {:?}: {}", key, raw, e))
        })
        .transpose()
}

fn parse_date<F>(lookup: &F, key: &str) -> Result<Option<NaiveDate>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .with_context(|| format!("{} must be a YYYY-MM-DD date, got {:?}", key, raw))
        })
        .transpose()
}
