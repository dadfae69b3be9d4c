//! Domain types shared by the dashboard server and the cleanup job.

mod category;
mod reading;

pub use category::{Category, UnknownCategory};
pub use reading::{SensorReading, parse_snapshot};
