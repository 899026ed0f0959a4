//! `nav-graph`: the connectivity graph every query runs against.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`records`] | `VertexRecord`, `WayRecord` (build input)                   |
//! | [`network`] | `MapGraph` (CSR adjacency + R-tree), `MapGraphBuilder`      |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                             |
//!
//! # Lifecycle
//!
//! A graph is built exactly once from a finite batch of records and is
//! immutable afterwards.  `MapGraph` has no interior mutability, so a shared
//! reference can be handed to any number of threads.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the record types.       |

pub mod error;
pub mod network;
pub mod records;


pub use error::{GraphError, GraphResult};
pub use network::{MapGraph, MapGraphBuilder};
pub use records::{VertexRecord, WayRecord};
