//! Side classifier: which side of the road is a query point on?
//!
//! # Convention
//!
//! Work in a local plane with `x = longitude` (east) and `y = latitude`
//! (north).  Let `h` be the outward heading of the reference edge, from the
//! node toward the edge's first shape point, and `q` the offset from the
//! node to the query point.  Traffic arriving at the node along the
//! reference edge travels in direction `-h`.  The query lies on that
//! traffic's **right** iff
//!
//! ```text
//! cross(h, q) = h.x * q.y - h.y * q.x  >  0
//! ```
//!
//! Example: road running east–west, reference edge leaving the node to the
//! east (`h = (1, 0)`), so arriving traffic heads west.  A query to the
//! north (`q = (0, 1)`) gives `cross = 1` → right, which matches a driver
//! heading west with north on their right-hand side.
//!
//! Scaling the x axis by `cos(lat)` would turn degrees into an
//! equirectangular projection, but multiplies the cross product by a
//! positive factor, so the sign (all that is used) is unchanged.

use std::fmt;

use curb_core::GeoPoint;

use crate::ResolverConfig;

// ── Side ──────────────────────────────────────────────────────────────────────

/// Side of the road relative to the direction of travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Right,
    Left,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Right => Side::Left,
            Side::Left => Side::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Right => "right",
            Side::Left => "left",
        })
    }
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// Planar direction vector in degree space (`dx` east, `dy` north).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heading {
    pub dx: f64,
    pub dy: f64,
}

impl Heading {
    /// Vector from `from` to `to`.
    #[inline]
    pub fn between(from: GeoPoint, to: GeoPoint) -> Self {
        Self { dx: to.lon - from.lon, dy: to.lat - from.lat }
    }

    /// 2-D cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Heading) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

// ── Classifier ────────────────────────────────────────────────────────────────

/// Classify `query` relative to the road at `node`.
///
/// `heading` is the reference edge's outward heading (see the module docs).
/// Degenerate input (zero heading, query on the node, or query on the
/// heading line within `config.collinear_epsilon`) returns
/// `config.tie_side` rather than failing.
pub fn side_of(node: GeoPoint, heading: Heading, query: GeoPoint, config: &ResolverConfig) -> Side {
    let offset = Heading::between(node, query);
    let cross = heading.cross(offset);

    if heading.is_zero()
        || offset.is_zero()
        || !cross.is_finite()
        || cross.abs() <= config.collinear_epsilon
    {
        return config.tie_side;
    }
    if cross > 0.0 { Side::Right } else { Side::Left }
}
