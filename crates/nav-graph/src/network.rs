//! Connectivity graph and its builder.
//!
//! # Data layout
//!
//! Vertices that survive pruning get a dense [`NodeIdx`] slot in input order.
//! Adjacency is stored in **Compressed Sparse Row (CSR)** form:
//!
//! ```text
//! adj[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Edges are undirected, so every neighbour list is mirrored: if `v` appears
//! in `u`'s slice then `u` appears in `v`'s.  Each slice is sorted and free of
//! duplicates even when several ways share a segment.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over unit-sphere vectors answers closest-vertex
//! queries.  Chord distance is monotonic in great-circle distance, so the
//! Euclidean nearest neighbour is also the haversine nearest neighbour.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use nav_core::{GeoPoint, NodeIdx, VertexId, EARTH_RADIUS_MILES};

use crate::records::{VertexRecord, WayRecord};
use crate::{GraphError, GraphResult};

/// Relative slack on squared chord length when collecting near-tied
/// closest-vertex candidates.
const CHORD_TIE_REL: f64 = 1e-9;
/// Absolute slack, for queries sitting (almost) on a vertex.
const CHORD_TIE_ABS: f64 = 1e-24;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct VertexEntry {
    point: [f64; 3],
    idx:   NodeIdx,
}

impl RTreeObject for VertexEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VertexEntry {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        (0..3).map(|i| (self.point[i] - point[i]).powi(2)).sum()
    }
}

// ── MapGraph ──────────────────────────────────────────────────────────────────

/// Read-only road connectivity graph.
///
/// Do not construct directly; use [`MapGraphBuilder`].  Every query taking a
/// [`VertexId`] fails with [`GraphError::UnknownVertex`] when the id is not
/// part of the graph (never added, or pruned for having no roads).
pub struct MapGraph {
    // ── Per-vertex data, indexed by NodeIdx ───────────────────────────────
    ids:       Vec<VertexId>,
    positions: Vec<GeoPoint>,
    names:     Vec<Option<String>>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    adj_start: Vec<u32>,
    adj:       Vec<NodeIdx>,

    // ── Lookups ───────────────────────────────────────────────────────────
    slot_of:    FxHashMap<VertexId, NodeIdx>,
    /// Directed (from, to) pair → index into `way_names`.
    path_names: FxHashMap<(NodeIdx, NodeIdx), u32>,
    way_names:  Vec<String>,

    spatial_idx:  RTree<VertexEntry>,
    radius_miles: f64,
}

impl MapGraph {
    /// A graph with no vertices.  `closest_vertex` on it fails with
    /// [`GraphError::EmptyGraph`].
    pub fn empty() -> Self {
        MapGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.slot_of.contains_key(&id)
    }

    /// All vertex ids in slot order, which is the order they were first
    /// added to the builder.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    // ── Slot-level access (hot paths) ─────────────────────────────────────

    /// Resolve an external id to its dense slot.
    #[inline]
    pub fn slot(&self, id: VertexId) -> GraphResult<NodeIdx> {
        self.slot_of.get(&id).copied().ok_or(GraphError::UnknownVertex(id))
    }

    /// External id of a slot.
    ///
    /// # Panics
    /// Panics if `idx` did not come from this graph.
    #[inline]
    pub fn id_of(&self, idx: NodeIdx) -> VertexId {
        self.ids[idx.index()]
    }

    /// Neighbour slots of `idx` as a contiguous slice (no allocation).
    #[inline]
    pub fn neighbors(&self, idx: NodeIdx) -> &[NodeIdx] {
        let start = self.adj_start[idx.index()] as usize;
        let end   = self.adj_start[idx.index() + 1] as usize;
        &self.adj[start..end]
    }

    /// Great-circle distance between two slots, in miles.
    #[inline]
    pub fn slot_distance(&self, a: NodeIdx, b: NodeIdx) -> f64 {
        self.positions[a.index()].distance_on_sphere(self.positions[b.index()], self.radius_miles)
    }

    // ── Vertex queries ────────────────────────────────────────────────────

    pub fn position(&self, id: VertexId) -> GraphResult<GeoPoint> {
        Ok(self.positions[self.slot(id)?.index()])
    }

    pub fn lon(&self, id: VertexId) -> GraphResult<f64> {
        self.position(id).map(|p| p.lon)
    }

    pub fn lat(&self, id: VertexId) -> GraphResult<f64> {
        self.position(id).map(|p| p.lat)
    }

    /// Display name of the vertex itself (not of the roads through it).
    pub fn vertex_name(&self, id: VertexId) -> GraphResult<Option<&str>> {
        Ok(self.names[self.slot(id)?.index()].as_deref())
    }

    /// Ids adjacent to `id`.
    pub fn adjacent(&self, id: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        let idx = self.slot(id)?;
        Ok(self.neighbors(idx).iter().map(|&n| self.id_of(n)))
    }

    /// Great-circle distance in miles.  `distance(v, v) == 0`.
    pub fn distance(&self, u: VertexId, v: VertexId) -> GraphResult<f64> {
        Ok(self.slot_distance(self.slot(u)?, self.slot(v)?))
    }

    /// Initial bearing from `u` towards `v` in degrees, within `(-180, 180]`.
    pub fn bearing(&self, u: VertexId, v: VertexId) -> GraphResult<f64> {
        let from = self.positions[self.slot(u)?.index()];
        let to = self.positions[self.slot(v)?.index()];
        Ok(from.bearing_deg(to))
    }

    /// Name of the way linking `u` to `v`.
    ///
    /// `Ok(None)` is the "no name" answer: the two vertices are not adjacent,
    /// or every way linking them is unnamed.  When several named ways share
    /// the segment, the one added to the builder last wins; an unnamed way
    /// never clears a name.
    pub fn path_name(&self, u: VertexId, v: VertexId) -> GraphResult<Option<&str>> {
        let key = (self.slot(u)?, self.slot(v)?);
        Ok(self.path_names.get(&key).map(|&i| self.way_names[i as usize].as_str()))
    }

    /// Sum of consecutive great-circle distances along `path`, in miles.
    pub fn path_length(&self, path: &[VertexId]) -> GraphResult<f64> {
        let slots = path.iter().map(|&v| self.slot(v)).collect::<GraphResult<Vec<_>>>()?;
        Ok(slots.windows(2).map(|w| self.slot_distance(w[0], w[1])).sum())
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The vertex nearest to `(lon, lat)` by great-circle distance.
    ///
    /// Ties are broken in favour of the vertex that was added to the builder
    /// first.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidCoordinate`] for a NaN or infinite coordinate and
    /// [`GraphError::EmptyGraph`] if there are no vertices.
    pub fn closest_vertex(&self, lon: f64, lat: f64) -> GraphResult<VertexId> {
        if !(lon.is_finite() && lat.is_finite()) {
            return Err(GraphError::InvalidCoordinate { lon, lat });
        }
        let target = GeoPoint::new(lon, lat);
        let query = target.unit_vector();
        let mut candidates = self.spatial_idx.nearest_neighbor_iter_with_distance_2(&query);
        let (first, best) = candidates.next().ok_or(GraphError::EmptyGraph)?;

        // Chord and haversine round differently, so the R-tree only shortlists
        // near-ties; the haversine distance and then the slot decide.
        let limit = best * (1.0 + CHORD_TIE_REL) + CHORD_TIE_ABS;
        let haversine = |idx: NodeIdx| {
            self.positions[idx.index()].distance_on_sphere(target, self.radius_miles)
        };
        let (_, winner) = candidates
            .take_while(|&(_, d2)| d2 <= limit)
            .map(|(e, _)| (haversine(e.idx), e.idx))
            .fold((haversine(first.idx), first.idx), |acc, cand| {
                if cand.0.total_cmp(&acc.0).then(cand.1.cmp(&acc.1)).is_lt() { cand } else { acc }
            });
        Ok(self.id_of(winner))
    }
}

// ── MapGraphBuilder ───────────────────────────────────────────────────────────

/// Collect vertex and way records, then call [`build`](Self::build).
///
/// Records may arrive in any order: ways are linked only at build time, so a
/// way may reference vertices that are added after it.
///
/// # Example
///
/// ```
/// use nav_graph::{MapGraphBuilder, VertexRecord, WayRecord};
///
/// let mut b = MapGraphBuilder::new();
/// b.add_vertex(VertexRecord::new(1, -122.26, 37.87));
/// b.add_vertex(VertexRecord::new(2, -122.25, 37.87));
/// b.add_vertex(VertexRecord::new(3, -122.24, 37.90)); // no roads → pruned
/// b.add_way(WayRecord::road(10, "Bancroft Way", &[1, 2]));
/// let graph = b.build();
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct MapGraphBuilder {
    vertices:     Vec<VertexRecord>,
    vertex_slot:  FxHashMap<VertexId, usize>,
    ways:         Vec<WayRecord>,
    radius_miles: f64,
}

/// Outcome counters logged at the end of [`MapGraphBuilder::build`].
#[derive(Default, Debug)]
struct BuildStats {
    skipped_ways:    usize,
    dangling_pairs:  usize,
    pruned_vertices: usize,
}

impl MapGraphBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for the expected number of vertices and ways.
    pub fn with_capacity(vertices: usize, ways: usize) -> Self {
        Self {
            vertices:     Vec::with_capacity(vertices),
            vertex_slot:  FxHashMap::default(),
            ways:         Vec::with_capacity(ways),
            radius_miles: EARTH_RADIUS_MILES,
        }
    }

    /// Override the sphere radius used by the built graph's distances.
    pub fn set_earth_radius(&mut self, radius_miles: f64) {
        self.radius_miles = radius_miles;
    }

    /// Add a vertex.  Re-adding an id replaces its position and name but
    /// keeps its original place in the iteration order.
    pub fn add_vertex(&mut self, record: VertexRecord) {
        match self.vertex_slot.get(&record.id) {
            Some(&i) => self.vertices[i] = record,
            None => {
                self.vertex_slot.insert(record.id, self.vertices.len());
                self.vertices.push(record);
            }
        }
    }

    /// Queue a way for linking.  Invalid or too-short ways are accepted here
    /// and skipped by [`build`](Self::build).
    pub fn add_way(&mut self, way: WayRecord) {
        self.ways.push(way);
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn way_count(&self) -> usize { self.ways.len() }

    /// Consume the builder and produce an immutable [`MapGraph`].
    ///
    /// 1. Every routable way links each consecutive vertex pair in both
    ///    directions and records its name for both directions.  Invalid ways
    ///    and ways with fewer than two vertices are skipped; so are pairs
    ///    that repeat a vertex or reference an unknown id.
    /// 2. Vertices left without any neighbour are pruned.  Road networks are
    ///    assumed connected, so pruning isolated vertices does not split the
    ///    remaining graph.
    /// 3. CSR adjacency and the R-tree are built over the survivors.
    pub fn build(self) -> MapGraph {
        let mut stats = BuildStats::default();
        let n_input = self.vertices.len();

        // ── Phase 1: link ways over input positions ───────────────────────
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        let mut named: Vec<(usize, usize, u32)> = Vec::new();
        let mut way_names: Vec<String> = Vec::new();
        let mut name_slot: FxHashMap<String, u32> = FxHashMap::default();

        for way in &self.ways {
            if !way.valid {
                log::debug!("skipping non-road way {}", way.id);
                stats.skipped_ways += 1;
                continue;
            }
            if !way.is_routable() {
                log::warn!("skipping way {}: {} vertices, need at least 2", way.id, way.nodes.len());
                stats.skipped_ways += 1;
                continue;
            }
            let name_idx = way.name.as_ref().map(|name| {
                *name_slot.entry(name.clone()).or_insert_with(|| {
                    way_names.push(name.clone());
                    (way_names.len() - 1) as u32
                })
            });

            for w in way.nodes.windows(2) {
                if w[0] == w[1] {
                    continue;
                }
                let (Some(&a), Some(&b)) = (self.vertex_slot.get(&w[0]), self.vertex_slot.get(&w[1])) else {
                    log::warn!("way {} references unknown vertex in segment {} -> {}", way.id, w[0], w[1]);
                    stats.dangling_pairs += 1;
                    continue;
                };
                pairs.push((a, b));
                pairs.push((b, a));
                if let Some(i) = name_idx {
                    named.push((a, b, i));
                }
            }
        }

        // ── Phase 2: prune vertices with no neighbours ────────────────────
        let mut connected = vec![false; n_input];
        for &(a, _) in &pairs {
            connected[a] = true;
        }
        let mut remap = vec![NodeIdx::INVALID; n_input];
        let mut ids       = Vec::new();
        let mut positions = Vec::new();
        let mut names     = Vec::new();
        for (i, record) in self.vertices.into_iter().enumerate() {
            if !connected[i] {
                stats.pruned_vertices += 1;
                continue;
            }
            remap[i] = NodeIdx(ids.len() as u32);
            ids.push(record.id);
            positions.push(record.pos);
            names.push(record.name);
        }
        let node_count = ids.len();

        // ── Phase 3: CSR adjacency ────────────────────────────────────────
        let mut directed: Vec<(NodeIdx, NodeIdx)> =
            pairs.iter().map(|&(a, b)| (remap[a], remap[b])).collect();
        directed.sort_unstable();
        directed.dedup();

        let mut adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &directed {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[node_count] as usize, directed.len());
        let adj: Vec<NodeIdx> = directed.iter().map(|&(_, to)| to).collect();

        let mut path_names = FxHashMap::default();
        for (a, b, name) in named {
            path_names.insert((remap[a], remap[b]), name);
            path_names.insert((remap[b], remap[a]), name);
        }

        // ── Phase 4: lookups and spatial index ────────────────────────────
        let slot_of: FxHashMap<VertexId, NodeIdx> = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, NodeIdx(i as u32)))
            .collect();

        let entries: Vec<VertexEntry> = positions
            .iter()
            .enumerate()
            .map(|(i, pos)| VertexEntry { point: pos.unit_vector(), idx: NodeIdx(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::info!(
            "built map graph: {} vertices ({} pruned), {} edges, {} ways ({} skipped, {} dangling segments)",
            node_count,
            stats.pruned_vertices,
            adj.len() / 2,
            self.ways.len(),
            stats.skipped_ways,
            stats.dangling_pairs,
        );

        MapGraph {
            ids,
            positions,
            names,
            adj_start,
            adj,
            slot_of,
            path_names,
            way_names,
            spatial_idx,
            radius_miles: self.radius_miles,
        }
    }
}

impl Default for MapGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
