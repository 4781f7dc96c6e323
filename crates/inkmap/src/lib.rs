#![forbid(unsafe_code)]

//! `inkmap` is a headless reading-log world-map engine.
//!
//! Records of read books, each tagged with the author's country, come in;
//! per-country cluster placements for a world-map view come out. No drawing
//! happens here — a rendering consumer draws the map, the connector lines and
//! the cover thumbnails from the computed positions.
//!
//! # Features
//!
//! - `layout`: enable cluster placement (`inkmap::layout`)

pub use inkmap_core::*;

#[cfg(feature = "layout")]
pub mod layout {
    pub use inkmap_layout::Error as LayoutError;
    pub use inkmap_layout::model::{Bounds, ClusterLayout, ItemLayout, LayoutPoint, MapLayout};
    pub use inkmap_layout::worldmap::{MapConfig, cluster_radius, grid_offsets, layout_reading_map};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Records(#[from] inkmap_core::Error),
        #[error(transparent)]
        Layout(#[from] inkmap_layout::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Computes the world-map layout for a reading log with default
    /// placement configuration.
    pub fn layout_log(log: &inkmap_core::ReadingLog) -> Result<MapLayout> {
        layout_log_with_config(log, &serde_json::Value::Null)
    }

    /// Computes the world-map layout, honoring `worldMap.*` overrides from
    /// an effective-config JSON value.
    pub fn layout_log_with_config(
        log: &inkmap_core::ReadingLog,
        effective_config: &serde_json::Value,
    ) -> Result<MapLayout> {
        let model = log.world_map_model();
        Ok(layout_reading_map(&model, effective_config)?)
    }
}
