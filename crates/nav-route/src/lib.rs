//! `nav-route`: shortest paths and the directions that describe them.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`router`]     | `Router` trait, `Route`, `AStarRouter`                    |
//! | [`maneuver`]   | `ManeuverKind`, `Maneuver` (text format and parse)        |
//! | [`directions`] | `route_directions`                                        |
//! | [`error`]      | `RouteError`, `ManeuverParseError`                        |
//!
//! All functions here are pure over a shared `&MapGraph`; nothing is cached
//! between calls.

pub mod directions;
pub mod error;
pub mod maneuver;
pub mod router;


pub use directions::route_directions;
pub use error::{ManeuverParseError, RouteError, RouteResult};
pub use maneuver::{Maneuver, ManeuverKind, UNNAMED_WAY};
pub use router::{AStarRouter, Route, Router};
