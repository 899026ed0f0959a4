//! `nav-service`: the query surface a serving layer talks to.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`builder`] | `MapServiceBuilder` (build phase)                           |
//! | [`service`] | `MapService`, `RouteQuery` (query phase)                    |
//! | [`error`]   | `ServiceError`, `ServiceResult<T>`                         |
//!
//! # Two phases
//!
//! `MapServiceBuilder` owns all mutable state while records are loaded.
//! `build` consumes it and returns a `MapService` whose graph and name index
//! can no longer change, so queries need no locking.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `MapService::shortest_paths` fans out over Rayon.         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod builder;
pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use builder::MapServiceBuilder;
pub use error::{ServiceError, ServiceResult};
pub use service::{MapService, RouteQuery};
