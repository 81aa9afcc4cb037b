//! `curb-direction` — direction resolution at a snapped road node.
//!
//! Given a node and a query location beside it, decide which
//! "arrive via X, depart via Y" edge pairings are legal, and on which side
//! of the road each pairing applies.  A query-time graph augmentor uses the
//! result to attach virtual connector edges so a route snapped next to a
//! road cannot U-turn illegally or drive a one-way the wrong way.
//!
//! # Pipeline
//!
//! ```text
//! resolve_directions(node, query)
//!   ① scan      — list incident edges, evaluate access both ways → EdgeRole
//!   ② classify  — impossible / junction / duplicate / through-road / dead end
//!   ③ side_of   — (two-edge cases only) which side of the road is `query` on?
//!   → ResolvedDirections
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`scan`]      | `scan`, `Topology`, `ScannedEdge`, `EdgeRole`           |
//! | [`side`]      | `side_of`, `Side`, `Heading`                            |
//! | [`resolver`]  | `DirectionResolver`                                     |
//! | [`result`]    | `ResolvedDirections`, `EdgeConstraint`                  |
//! | [`curbside`]  | `Curbside`                                              |
//! | [`config`]    | `ResolverConfig`                                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `resolve_all` runs on Rayon's thread pool.             |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.     |
//!
//! # Quick-start
//!
//! ```
//! use curb_core::GeoPoint;
//! use curb_direction::{DirectionResolver, ResolvedDirections};
//! use curb_network::RoadNetworkBuilder;
//!
//! // 0 - 1 - 2, dead end at 2.
//! let mut b = RoadNetworkBuilder::new();
//! let n0 = b.add_node(GeoPoint::new(1.0, 0.0));
//! let n1 = b.add_node(GeoPoint::new(1.0, 1.0));
//! let n2 = b.add_node(GeoPoint::new(1.0, 2.0));
//! b.add_road(n0, n1).unwrap();
//! let last = b.add_road(n1, n2).unwrap();
//! let net = b.build();
//!
//! let resolver = DirectionResolver::new(&net, &net);
//! let res = resolver.resolve_directions(n2, GeoPoint::new(1.01, 2.0)).unwrap();
//! assert_eq!(res, ResolvedDirections::restricted(last, last, last, last));
//! ```

pub mod config;
pub mod curbside;
pub mod resolver;
pub mod result;
pub mod scan;
pub mod side;


pub use config::ResolverConfig;
pub use curbside::Curbside;
pub use resolver::DirectionResolver;
pub use result::{EdgeConstraint, ResolvedDirections};
pub use scan::{EdgeRole, ScannedEdge, Topology, scan};
pub use side::{Heading, Side, side_of};
