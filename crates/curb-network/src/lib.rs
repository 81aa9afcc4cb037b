//! `curb-network` — in-memory road network for direction resolution.
//!
//! Implements both collaborator traits from `curb-core`:
//! [`RoadGraph`](curb_core::RoadGraph) (incidence + coordinates + edge
//! geometry) and [`EdgeAccess`](curb_core::EdgeAccess) (stored per-direction
//! access flags).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`, `AccessFlags` |
//! | [`osm`]     | `load_from_pbf` (feature = `"osm"` only)                   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::{AccessFlags, RoadNetwork, RoadNetworkBuilder};
