#![forbid(unsafe_code)]

//! Headless layout stage for the reading world map.
//!
//! Takes the semantic model produced by `inkmap-core` (countries with their
//! book records, in grouping order) and computes a non-overlapping cluster
//! placement for every country. No drawing happens here; consumers render
//! the returned positions.

pub mod model;
pub mod worldmap;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid semantic model: {message}")]
    InvalidModel { message: String },
    #[error("semantic model JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub use model::{Bounds, ClusterLayout, ItemLayout, LayoutPoint, MapLayout};
pub use worldmap::{MapConfig, layout_reading_map};
