//! Conversion services behind the keyword query.

pub mod format;
pub mod timestamp;

pub use timestamp::{interpret, interpret_at, Conversion, ConversionKind, DatePrecision, Unit};
