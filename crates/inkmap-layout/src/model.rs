use serde::{Deserialize, Serialize};

/// Axis-aligned extents of a computed layout, in map degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// One placed book cover: offset relative to the cluster center, in the
/// consumer's screen units (the grid cell size of [`MapLayout`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLayout {
    /// Id of the reading record this cover belongs to.
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Placement of one country's cluster of book covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterLayout {
    pub code: String,
    /// The country's true anchor; consumers draw the connector from here.
    pub anchor: LayoutPoint,
    /// Chosen cluster center in map degrees.
    pub center: LayoutPoint,
    /// Radius of the reserved circular region around `center`, in degrees.
    pub radius: f64,
    pub row_count: usize,
    pub items: Vec<ItemLayout>,
}

/// Full placement result for one pass over the input countries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayout {
    /// One entry per placeable input country, in input order.
    pub clusters: Vec<ClusterLayout>,
    /// Grid cell size the item offsets were computed for.
    pub item_width: f64,
    pub item_height: f64,
    pub bounds: Option<Bounds>,
}
