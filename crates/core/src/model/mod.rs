pub mod dataset;

pub use dataset::{MONTHS, MonthlyRecord, TemperatureDataset, month_name};
