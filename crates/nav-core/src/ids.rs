//! Strongly typed identifier wrappers.
//!
//! Two id spaces exist:
//!
//! - **External ids** (`VertexId`, `WayId`) come from the map-data parser.
//!   They are stable across builds but sparse, so they are never used as
//!   `Vec` indices.
//! - **Internal slots** (`NodeIdx`) are dense positions assigned by the graph
//!   builder.  Search scratch arrays are indexed by `NodeIdx`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Stable id of a map vertex as assigned by the map-data source.
    pub struct VertexId(u64);
}

typed_id! {
    /// Stable id of a way (a named, ordered run of vertices).
    pub struct WayId(u64);
}

typed_id! {
    /// Dense slot of a vertex inside a built graph.  Max ~4.3 billion vertices.
    pub struct NodeIdx(u32);
}

impl NodeIdx {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for NodeIdx {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeIdx, Self::Error> {
        u32::try_from(n).map(NodeIdx)
    }
}
