//! IO utilities for loading passenger files.

pub mod passenger_csv;

pub use passenger_csv::{read_passengers, read_passengers_csv};
