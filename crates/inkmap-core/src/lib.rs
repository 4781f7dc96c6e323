#![forbid(unsafe_code)]

//! Reading-log semantic model (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (grouping order is part of the contract
//!   and drives downstream placement order)
//! - no UI concerns: records in, semantic JSON out

pub mod country;
pub mod error;
pub mod geom;
pub mod records;

pub use error::{Error, Result};
pub use records::{BookInfo, ReadingLog, ReadingRecord, ReadingStats, RecordDraft};
