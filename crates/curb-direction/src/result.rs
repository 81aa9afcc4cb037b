//! Resolution outcome.
//!
//! [`ResolvedDirections`] is a closed sum type: a restricted outcome always
//! carries all of its edges, and the non-restricted outcomes carry none.
//! Fields are positional: swapping right/left or in/out yields a different,
//! non-equal value.

use std::fmt;

use curb_core::EdgeId;

use crate::{Curbside, Side};

// ── ResolvedDirections ────────────────────────────────────────────────────────

/// Legal arrive/depart edge pairings at a node for one query location.
///
/// Every edge in an `in` slot is usable to arrive at the node; every edge in
/// an `out` slot is usable to leave it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ResolvedDirections {
    /// No through traffic is possible at this node.
    Impossible,

    /// No restriction can be derived; every direction stays allowed.
    Unrestricted,

    /// Two side-specific pairings.
    Restricted {
        right_in: EdgeId,
        right_out: EdgeId,
        left_in: EdgeId,
        left_out: EdgeId,
    },

    /// A single pairing, attributed to the right side.
    OnlyRight { in_edge: EdgeId, out_edge: EdgeId },

    /// A single pairing, attributed to the left side.
    OnlyLeft { in_edge: EdgeId, out_edge: EdgeId },
}

impl ResolvedDirections {
    // ── Constructors ──────────────────────────────────────────────────────

    pub fn restricted(right_in: EdgeId, right_out: EdgeId, left_in: EdgeId, left_out: EdgeId) -> Self {
        ResolvedDirections::Restricted { right_in, right_out, left_in, left_out }
    }

    pub fn only_right(in_edge: EdgeId, out_edge: EdgeId) -> Self {
        ResolvedDirections::OnlyRight { in_edge, out_edge }
    }

    pub fn only_left(in_edge: EdgeId, out_edge: EdgeId) -> Self {
        ResolvedDirections::OnlyLeft { in_edge, out_edge }
    }

    /// The single pairing `(in_edge, out_edge)` attributed to `side`.
    pub fn only(side: Side, in_edge: EdgeId, out_edge: EdgeId) -> Self {
        match side {
            Side::Right => Self::only_right(in_edge, out_edge),
            Side::Left => Self::only_left(in_edge, out_edge),
        }
    }

    /// `on_side` applies on `side`, `other` on the opposite side.
    pub fn paired(side: Side, on_side: (EdgeId, EdgeId), other: (EdgeId, EdgeId)) -> Self {
        let (right, left) = match side {
            Side::Right => (on_side, other),
            Side::Left => (other, on_side),
        };
        Self::restricted(right.0, right.1, left.0, left.1)
    }

    // ── Predicates ────────────────────────────────────────────────────────

    pub fn is_impossible(&self) -> bool {
        matches!(self, ResolvedDirections::Impossible)
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, ResolvedDirections::Unrestricted)
    }

    /// `true` for `Restricted`, `OnlyRight` and `OnlyLeft`.
    pub fn is_restricted(&self) -> bool {
        !self.is_impossible() && !self.is_unrestricted()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The `(in, out)` pairing that applies on `side`, if there is one.
    pub fn pair(&self, side: Side) -> Option<(EdgeId, EdgeId)> {
        use ResolvedDirections::*;
        match (*self, side) {
            (Restricted { right_in, right_out, .. }, Side::Right) => Some((right_in, right_out)),
            (Restricted { left_in, left_out, .. }, Side::Left) => Some((left_in, left_out)),
            (OnlyRight { in_edge, out_edge }, Side::Right)
            | (OnlyLeft { in_edge, out_edge }, Side::Left) => Some((in_edge, out_edge)),
            _ => None,
        }
    }

    /// Edge a route must arrive on to reach the location at `curbside`.
    pub fn in_edge(&self, curbside: Curbside) -> EdgeConstraint {
        self.constraint(curbside, |(in_edge, _)| in_edge)
    }

    /// Edge a route must leave on when starting from the location at
    /// `curbside`.
    pub fn out_edge(&self, curbside: Curbside) -> EdgeConstraint {
        self.constraint(curbside, |(_, out_edge)| out_edge)
    }

    fn constraint(&self, curbside: Curbside, pick: fn((EdgeId, EdgeId)) -> EdgeId) -> EdgeConstraint {
        let side = match curbside {
            Curbside::Any => return EdgeConstraint::Any,
            Curbside::Right => Side::Right,
            Curbside::Left => Side::Left,
        };
        match self {
            ResolvedDirections::Unrestricted => EdgeConstraint::Any,
            _ => self
                .pair(side)
                .map_or(EdgeConstraint::Forbidden, |p| EdgeConstraint::Exactly(pick(p))),
        }
    }

    /// Every referenced edge in slot order (right before left, in before out).
    pub fn edges(&self) -> Vec<EdgeId> {
        match *self {
            ResolvedDirections::Impossible | ResolvedDirections::Unrestricted => Vec::new(),
            ResolvedDirections::Restricted { right_in, right_out, left_in, left_out } => {
                vec![right_in, right_out, left_in, left_out]
            }
            ResolvedDirections::OnlyRight { in_edge, out_edge }
            | ResolvedDirections::OnlyLeft { in_edge, out_edge } => vec![in_edge, out_edge],
        }
    }
}

impl fmt::Display for ResolvedDirections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedDirections::Impossible => f.write_str("impossible"),
            ResolvedDirections::Unrestricted => f.write_str("unrestricted"),
            ResolvedDirections::Restricted { right_in, right_out, left_in, left_out } => write!(
                f,
                "restricted: right = (in: {}, out: {}), left = (in: {}, out: {})",
                right_in.0, right_out.0, left_in.0, left_out.0
            ),
            ResolvedDirections::OnlyRight { in_edge, out_edge } => {
                write!(f, "only right: (in: {}, out: {})", in_edge.0, out_edge.0)
            }
            ResolvedDirections::OnlyLeft { in_edge, out_edge } => {
                write!(f, "only left: (in: {}, out: {})", in_edge.0, out_edge.0)
            }
        }
    }
}

// ── EdgeConstraint ────────────────────────────────────────────────────────────

/// What a resolution demands of the edge used at one curbside.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeConstraint {
    /// Any incident edge will do.
    Any,
    /// The curbside cannot be served at all.
    Forbidden,
    /// Exactly this edge.
    Exactly(EdgeId),
}

impl EdgeConstraint {
    /// The required edge, if the constraint names one.
    pub fn edge(self) -> Option<EdgeId> {
        match self {
            EdgeConstraint::Exactly(edge) => Some(edge),
            _ => None,
        }
    }
}
