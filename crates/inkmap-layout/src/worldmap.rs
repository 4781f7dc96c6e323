//! Ocean label placement for the reading world map.
//!
//! Each country with at least one book gets a cluster of book-cover slots,
//! pushed out from the country's anchor into open map space so that it
//! overlaps neither other clusters nor any country's name-label zone, while
//! staying as close to its own anchor as the search allows.
//!
//! Placement is greedy and order-dependent: clusters are processed strictly
//! in input order, each committed region is reserved for the rest of the
//! pass, and committed placements are never revisited. The pass is
//! deterministic for identical input (including order); reordering the input
//! may change placements.

use crate::model::{Bounds, ClusterLayout, ItemLayout, LayoutPoint, MapLayout};
use crate::{Error, Result};
use inkmap_core::country;
use inkmap_core::geom::{MapPoint, MapVector, distance, map_vector};
use serde::Deserialize;
use serde_json::Value;

/// Candidate placement directions, tried in rotation starting at the
/// cluster's index. The diagonals are deliberately longer than the vertical
/// steps; offsets are multiples of these raw vectors, not of unit vectors.
const DIRECTIONS: [(f64, f64); 6] = [
    (0.0, -1.0),  // N
    (1.0, -0.5),  // NE
    (1.0, 0.5),   // SE
    (0.0, 1.0),   // S
    (-1.0, 0.5),  // SW
    (-1.0, -0.5), // NW
];

const MAX_ATTEMPTS_PER_DIRECTION: usize = 5;
/// Offset increment while the candidate is still under its own name tag.
const OFFSET_STEP_NEAR_LABEL: f64 = 1.0;
/// Offset increment after a collision with a reserved region or label zone.
const OFFSET_STEP_COLLISION: f64 = 1.5;
/// Extra distance added to the base offset by the unconditional fallback.
const FALLBACK_EXTRA_OFFSET: f64 = 3.0;

#[derive(Debug, Clone, Deserialize)]
struct BookRefModel {
    id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryBooksModel {
    code: String,
    #[serde(default)]
    books: Vec<BookRefModel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorldMapModel {
    #[serde(default)]
    countries: Vec<CountryBooksModel>,
}

fn json_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
}

fn config_f64(cfg: &Value, path: &[&str]) -> Option<f64> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    json_f64(cur)
}

/// Every tuned constant of the placement heuristic, defaulting to the values
/// the map's visual behavior was calibrated with. Overridable via
/// `worldMap.*` keys of the effective-config JSON.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Book cover width in the consumer's screen units.
    pub item_width: f64,
    /// Book cover height in the consumer's screen units.
    pub item_height: f64,
    /// Horizontal gap between covers in a row.
    pub item_spacing: f64,
    /// Maximum covers per grid row.
    pub items_per_row: usize,
    /// Vertical distance between grid rows.
    pub row_spacing: f64,
    /// Radius, in degrees, of the zone reserved around every anchor for the
    /// country's name tag.
    pub label_radius: f64,
    /// First offset tried along each direction, in degrees.
    pub base_offset: f64,
    /// Hard ceiling on the offset along one direction.
    pub max_offset: f64,
    /// Screen units per map degree; converts the grid footprint to degrees.
    pub degree_scale: f64,
    /// Safety margin, in degrees, added to every cluster's exclusion radius.
    pub radius_margin: f64,
    /// Fallback scoring: weight of the distance to the nearest other anchor.
    pub score_anchor_distance_weight: f64,
    /// Fallback scoring: penalty for landing inside any label zone.
    pub score_label_penalty: f64,
    /// Fallback scoring: weight of the stay-near-own-anchor bonus.
    pub score_near_own_weight: f64,
    /// Fallback scoring: distance at which the stay-near bonus reaches zero.
    pub score_near_own_bias: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            item_width: 20.0,
            item_height: 30.0,
            item_spacing: 3.0,
            items_per_row: 6,
            row_spacing: 35.0,
            label_radius: 3.5,
            base_offset: 5.5,
            max_offset: 10.0,
            degree_scale: 100.0,
            radius_margin: 3.0,
            score_anchor_distance_weight: 0.5,
            score_label_penalty: -1000.0,
            score_near_own_weight: 0.1,
            score_near_own_bias: 20.0,
        }
    }
}

impl MapConfig {
    pub fn from_config(effective_config: &Value) -> Self {
        let d = Self::default();
        let f = |key: &str, default: f64| {
            config_f64(effective_config, &["worldMap", key]).unwrap_or(default)
        };
        Self {
            item_width: f("itemWidth", d.item_width).max(1.0),
            item_height: f("itemHeight", d.item_height).max(1.0),
            item_spacing: f("itemSpacing", d.item_spacing).max(0.0),
            items_per_row: f("itemsPerRow", d.items_per_row as f64).max(1.0) as usize,
            row_spacing: f("rowSpacing", d.row_spacing).max(1.0),
            label_radius: f("labelRadius", d.label_radius).max(0.0),
            base_offset: f("baseOffset", d.base_offset),
            max_offset: f("maxOffset", d.max_offset),
            degree_scale: f("degreeScale", d.degree_scale).max(1.0),
            radius_margin: f("radiusMargin", d.radius_margin).max(0.0),
            score_anchor_distance_weight: f(
                "scoreAnchorDistanceWeight",
                d.score_anchor_distance_weight,
            ),
            score_label_penalty: f("scoreLabelPenalty", d.score_label_penalty),
            score_near_own_weight: f("scoreNearOwnWeight", d.score_near_own_weight),
            score_near_own_bias: f("scoreNearOwnBias", d.score_near_own_bias),
        }
    }
}

/// Circular region reserved by a committed cluster placement.
#[derive(Debug, Clone, Copy)]
struct Region {
    center: MapPoint,
    radius: f64,
}

/// Local cover offsets for a cluster of `count` items: rows of at most
/// `items_per_row`, each row centered around x=0, rows stacked from
/// `-row_count·row_spacing/2` downward. Pure in `count`.
pub fn grid_offsets(config: &MapConfig, count: usize) -> Vec<LayoutPoint> {
    let per_row = config.items_per_row.max(1);
    let row_count = count.div_ceil(per_row);
    let mut offsets = Vec::with_capacity(count);
    for i in 0..count {
        let row = i / per_row;
        let col = i % per_row;
        let in_row = per_row.min(count - row * per_row);
        let row_width =
            in_row as f64 * config.item_width + (in_row as f64 - 1.0) * config.item_spacing;
        let start_x = -row_width / 2.0 + config.item_width / 2.0;
        offsets.push(LayoutPoint {
            x: start_x + col as f64 * (config.item_width + config.item_spacing),
            y: -(row_count as f64) * config.row_spacing / 2.0 + row as f64 * config.row_spacing,
        });
    }
    offsets
}

/// Exclusion radius for a cluster with `row_count` rows: the larger of the
/// full-row width and the stacked-row height, converted to degrees, plus the
/// safety margin. Over-estimates single-row clusters on purpose.
pub fn cluster_radius(config: &MapConfig, row_count: usize) -> f64 {
    let per_row = config.items_per_row.max(1) as f64;
    let max_width = per_row * config.item_width + (per_row - 1.0) * config.item_spacing;
    let max_height = row_count as f64 * config.row_spacing;
    max_width.max(max_height) / config.degree_scale + config.radius_margin
}

fn position_is_free(
    config: &MapConfig,
    candidate: MapPoint,
    radius: f64,
    own_anchor: MapPoint,
    label_anchors: &[MapPoint],
    reserved: &[Region],
) -> bool {
    for region in reserved {
        if distance(candidate, region.center) < radius + region.radius {
            return false;
        }
    }
    for &anchor in label_anchors {
        // A cluster may crowd its own name tag; the caller enforces the
        // own-label distance separately.
        if anchor == own_anchor {
            continue;
        }
        if distance(candidate, anchor) < radius + config.label_radius {
            return false;
        }
    }
    true
}

/// Scores every direction at the given offset and returns the best one.
/// Higher is better: far from reserved regions, far from other anchors
/// (heavily penalized inside a label zone), mildly rewarded for staying
/// near the cluster's own anchor. Ties keep direction order.
fn best_direction(
    config: &MapConfig,
    anchor: MapPoint,
    offset: f64,
    radius: f64,
    label_anchors: &[MapPoint],
    reserved: &[Region],
) -> MapVector {
    let mut scored: Vec<(MapVector, f64)> = DIRECTIONS
        .iter()
        .map(|&(dx, dy)| {
            let dir = map_vector(dx, dy);
            let candidate = anchor + dir * offset;

            let mut min_region_distance = f64::INFINITY;
            for region in reserved {
                min_region_distance = min_region_distance.min(distance(candidate, region.center));
            }

            let mut min_anchor_distance = f64::INFINITY;
            for &other in label_anchors {
                if other == anchor {
                    continue;
                }
                min_anchor_distance = min_anchor_distance.min(distance(candidate, other));
            }

            let label_penalty = if min_anchor_distance < radius + config.label_radius {
                config.score_label_penalty
            } else {
                0.0
            };
            let own_distance = distance(candidate, anchor);
            let score = min_region_distance
                + min_anchor_distance * config.score_anchor_distance_weight
                + label_penalty
                + (config.score_near_own_bias - own_distance) * config.score_near_own_weight;
            (dir, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored[0].0
}

fn direction(index: usize) -> MapVector {
    let (dx, dy) = DIRECTIONS[index % DIRECTIONS.len()];
    map_vector(dx, dy)
}

/// Finds and commits a center for one cluster. Always returns a position;
/// the final fallback commits without validation rather than fail.
fn place_cluster(
    config: &MapConfig,
    anchor: MapPoint,
    radius: f64,
    cluster_index: usize,
    label_anchors: &[MapPoint],
    reserved: &mut Vec<Region>,
) -> MapPoint {
    let min_from_label = radius + config.label_radius;

    for turn in 0..DIRECTIONS.len() {
        let dir = direction(cluster_index + turn);
        let mut offset = config.base_offset;
        for _attempt in 0..MAX_ATTEMPTS_PER_DIRECTION {
            let candidate = anchor + dir * offset;

            // Still under the cluster's own name tag: push further out.
            if distance(candidate, anchor) < min_from_label {
                offset += OFFSET_STEP_NEAR_LABEL;
                continue;
            }

            if position_is_free(config, candidate, radius, anchor, label_anchors, reserved) {
                reserved.push(Region {
                    center: candidate,
                    radius,
                });
                return candidate;
            }

            offset += OFFSET_STEP_COLLISION;
            if offset > config.max_offset {
                break;
            }
        }
    }

    // Every direction exhausted its offset range. Score the directions and
    // take the winner, still subject to the hard checks.
    if !reserved.is_empty() {
        let offset = config.base_offset.max(min_from_label);
        let dir = best_direction(config, anchor, offset, radius, label_anchors, reserved);
        let candidate = anchor + dir * offset;
        if distance(candidate, anchor) >= min_from_label
            && position_is_free(config, candidate, radius, anchor, label_anchors, reserved)
        {
            reserved.push(Region {
                center: candidate,
                radius,
            });
            return candidate;
        }
    }

    // Last resort: the cluster's default direction at a safe distance from
    // its own label, committed without validation. On crowded maps this can
    // leave a mild overlap; the map stays usable either way.
    let dir = direction(cluster_index);
    let offset = (config.base_offset + FALLBACK_EXTRA_OFFSET).max(min_from_label);
    let candidate = anchor + dir * offset;
    reserved.push(Region {
        center: candidate,
        radius,
    });
    candidate
}

fn compute_bounds(clusters: &[ClusterLayout]) -> Option<Bounds> {
    let mut pts: Vec<(f64, f64)> = Vec::new();
    for c in clusters {
        pts.push((c.center.x - c.radius, c.center.y - c.radius));
        pts.push((c.center.x + c.radius, c.center.y + c.radius));
        pts.push((c.anchor.x, c.anchor.y));
    }
    Bounds::from_points(pts)
}

/// Computes cluster placements for the semantic world-map model.
///
/// Countries with no books and countries absent from the anchor table are
/// skipped silently. Every remaining country receives exactly one placement.
pub fn layout_reading_map(model: &Value, effective_config: &Value) -> Result<MapLayout> {
    let model: WorldMapModel = WorldMapModel::deserialize(model)?;
    let config = MapConfig::from_config(effective_config);
    layout_model(&model, &config)
}

fn layout_model(model: &WorldMapModel, config: &MapConfig) -> Result<MapLayout> {
    let mut seen: Vec<String> = Vec::new();
    for country_model in &model.countries {
        let code = country_model.code.to_ascii_uppercase();
        if seen.contains(&code) {
            return Err(Error::InvalidModel {
                message: format!("duplicate country code: {code}"),
            });
        }
        seen.push(code);
    }

    // Label zones apply to the anchors of every placeable input country,
    // including ones placed later in the pass.
    let mut label_anchors: Vec<MapPoint> = Vec::new();
    for country_model in &model.countries {
        if country_model.books.is_empty() {
            continue;
        }
        if let Some(anchor) = country::anchor(&country_model.code) {
            label_anchors.push(anchor);
        }
    }

    let mut reserved: Vec<Region> = Vec::new();
    let mut clusters: Vec<ClusterLayout> = Vec::new();
    let mut cluster_index = 0usize;

    for country_model in &model.countries {
        if country_model.books.is_empty() {
            continue;
        }
        let Some(anchor) = country::anchor(&country_model.code) else {
            continue;
        };

        let row_count = country_model
            .books
            .len()
            .div_ceil(config.items_per_row.max(1));
        let radius = cluster_radius(config, row_count);
        let center = place_cluster(
            config,
            anchor,
            radius,
            cluster_index,
            &label_anchors,
            &mut reserved,
        );

        let items: Vec<ItemLayout> = country_model
            .books
            .iter()
            .zip(grid_offsets(config, country_model.books.len()))
            .map(|(book, offset)| ItemLayout {
                id: book.id.clone(),
                x: offset.x,
                y: offset.y,
            })
            .collect();

        clusters.push(ClusterLayout {
            code: country_model.code.to_ascii_uppercase(),
            anchor: LayoutPoint {
                x: anchor.x,
                y: anchor.y,
            },
            center: LayoutPoint {
                x: center.x,
                y: center.y,
            },
            radius,
            row_count,
            items,
        });
        cluster_index += 1;
    }

    let bounds = compute_bounds(&clusters);
    Ok(MapLayout {
        clusters,
        item_width: config.item_width,
        item_height: config.item_height,
        bounds,
    })
}
