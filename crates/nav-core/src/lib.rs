//! `nav-core`: foundational types for the `rust_nav` map routing workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and only `thiserror` (plus optional `serde`) from
//! the outside world.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `VertexId`, `WayId`, `NodeIdx`                          |
//! | [`geo`]      | `GeoPoint`, haversine distance, initial bearing         |
//! | [`config`]   | `NavConfig` (search budget, turn thresholds)            |
//! | [`error`]    | `NavError`, `NavResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use geo::{normalize_turn, GeoPoint, EARTH_RADIUS_MILES};
pub use ids::{NodeIdx, VertexId, WayId};
