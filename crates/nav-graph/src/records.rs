//! Raw map records handed over by the map-data parser.
//!
//! These are plain data: no validation happens here.  Malformed ways are
//! dealt with (skipped) by [`MapGraphBuilder::build`](crate::MapGraphBuilder::build).

use nav_core::{GeoPoint, VertexId, WayId};

/// One map vertex: an intersection, a shape point, or a named place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexRecord {
    pub id:   VertexId,
    pub pos:  GeoPoint,
    /// Display name for places (e.g. "Golden Gate Park").  Plain road
    /// vertices usually have none.
    pub name: Option<String>,
}

impl VertexRecord {
    pub fn new(id: u64, lon: f64, lat: f64) -> Self {
        Self { id: VertexId(id), pos: GeoPoint::new(lon, lat), name: None }
    }

    pub fn named(id: u64, lon: f64, lat: f64, name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::new(id, lon, lat) }
    }
}

/// One way: an ordered run of vertices sharing a name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WayRecord {
    pub id:        WayId,
    /// `None` for unnamed ways; their segments have no path name.
    pub name:      Option<String>,
    /// Raw `maxspeed` tag as it appeared in the source.  Carried for the
    /// serving layer; routing cost is distance only.
    pub max_speed: Option<String>,
    /// Set by the parser when the way is a routable road.
    pub valid:     bool,
    pub nodes:     Vec<VertexId>,
}

impl WayRecord {
    /// A valid, named way through `nodes`.
    pub fn road(id: u64, name: impl Into<String>, nodes: &[u64]) -> Self {
        Self {
            id:        WayId(id),
            name:      Some(name.into()),
            max_speed: None,
            valid:     true,
            nodes:     nodes.iter().copied().map(VertexId).collect(),
        }
    }

    /// Whether the builder will link this way at all.
    pub fn is_routable(&self) -> bool {
        self.valid && self.nodes.len() >= 2
    }
}
