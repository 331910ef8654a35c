pub mod sql_value;
