//! `curb-core` — foundational types for the curb direction resolver.
//!
//! This crate is a dependency of every other `curb-*` crate.  It has no
//! `curb-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`                                        |
//! | [`geo`]     | `GeoPoint`, coordinate validation                         |
//! | [`graph`]   | `RoadGraph`, `EdgeAccess`, `IncidentEdge`                 |
//! | [`error`]   | `CurbError`, `CurbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod graph;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CurbError, CurbResult};
pub use geo::GeoPoint;
pub use graph::{EdgeAccess, IncidentEdge, RoadGraph};
pub use ids::{EdgeId, NodeId};
