//! Caller-requested curbside for a snapped location.

use std::fmt;
use std::str::FromStr;

use curb_core::CurbError;

use crate::Side;

/// Which side of the road the caller wants to arrive at or depart from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Curbside {
    Right,
    Left,
    /// No preference; every resolution yields `EdgeConstraint::Any`.
    #[default]
    Any,
}

impl From<Side> for Curbside {
    fn from(side: Side) -> Self {
        match side {
            Side::Right => Curbside::Right,
            Side::Left => Curbside::Left,
        }
    }
}

impl FromStr for Curbside {
    type Err = CurbError;

    /// Accepts `right`, `left`, `any` in any case; blank means `any`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            Ok(Curbside::Any)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Curbside::Right)
        } else if s.eq_ignore_ascii_case("left") {
            Ok(Curbside::Left)
        } else {
            Err(CurbError::Parse(format!(
                "unknown curbside '{s}', allowed: right, left, any"
            )))
        }
    }
}

impl fmt::Display for Curbside {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Curbside::Right => "right",
            Curbside::Left => "left",
            Curbside::Any => "any",
        })
    }
}
