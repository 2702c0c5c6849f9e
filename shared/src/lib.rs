pub mod confirmation;
pub mod dates;
pub mod telemetry;
pub mod types;
