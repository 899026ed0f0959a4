//! Fluent builder for constructing a [`MapService`].

use rustc_hash::FxHashMap;

use nav_core::{NavConfig, VertexId};
use nav_graph::{MapGraphBuilder, VertexRecord, WayRecord};
use nav_route::{AStarRouter, Router};
use nav_search::{PlaceMatch, PrefixIndexBuilder};

use crate::{MapService, ServiceResult};

/// Fluent builder for [`MapService`].
///
/// Every vertex record feeds both the road graph and the name index.  A named
/// vertex that ends up with no roads is pruned from the graph but stays
/// searchable by name.  Re-adding a vertex id replaces the earlier record in
/// both, so only the latest name is searchable.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                       |
/// |-----------------|-----------------------------------------------|
/// | `.config(c)`    | `NavConfig::default()`                        |
/// | router          | `AStarRouter::from_config(&config)` via `build` |
///
/// # Example
///
/// ```
/// use nav_graph::{VertexRecord, WayRecord};
/// use nav_service::MapServiceBuilder;
///
/// let service = MapServiceBuilder::new()
///     .vertices([
///         VertexRecord::new(1, -122.26, 37.87),
///         VertexRecord::named(2, -122.25, 37.87, "Sather Gate"),
///     ])
///     .ways([WayRecord::road(10, "Bancroft Way", &[1, 2])])
///     .build()
///     .unwrap();
/// assert_eq!(service.prefix_search("sather"), vec!["Sather Gate".to_owned()]);
/// ```
pub struct MapServiceBuilder {
    config:     NavConfig,
    graph:      MapGraphBuilder,
    /// Named places in first-added order; `None` once a re-added record
    /// drops the name.
    places:     Vec<Option<PlaceMatch>>,
    place_slot: FxHashMap<VertexId, usize>,
}

impl MapServiceBuilder {
    pub fn new() -> Self {
        Self {
            config:     NavConfig::default(),
            graph:      MapGraphBuilder::new(),
            places:     Vec::new(),
            place_slot: FxHashMap::default(),
        }
    }

    /// Replace the default configuration.  Validated by `build`.
    pub fn config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    pub fn vertices(mut self, records: impl IntoIterator<Item = VertexRecord>) -> Self {
        for record in records {
            self.add_vertex(record);
        }
        self
    }

    pub fn ways(mut self, records: impl IntoIterator<Item = WayRecord>) -> Self {
        for record in records {
            self.add_way(record);
        }
        self
    }

    /// Non-consuming form of [`vertices`](Self::vertices) for streaming loaders.
    pub fn add_vertex(&mut self, record: VertexRecord) {
        let place = record.name.as_deref().map(|name| PlaceMatch::new(record.id, record.pos, name));
        match self.place_slot.get(&record.id).copied() {
            Some(slot) => self.places[slot] = place,
            None if place.is_some() => {
                self.place_slot.insert(record.id, self.places.len());
                self.places.push(place);
            }
            None => {}
        }
        self.graph.add_vertex(record);
    }

    pub fn add_way(&mut self, record: WayRecord) {
        self.graph.add_way(record);
    }

    /// Build with the default A* router, budgeted by `config.max_expansions`.
    pub fn build(self) -> ServiceResult<MapService<AStarRouter>> {
        let router = AStarRouter::from_config(&self.config);
        self.build_with_router(router)
    }

    /// Build with a caller-supplied routing engine.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Config`](crate::ServiceError::Config) if the
    /// configuration does not validate.
    pub fn build_with_router<R: Router>(self, router: R) -> ServiceResult<MapService<R>> {
        self.config.validate()?;

        let mut graph = self.graph;
        graph.set_earth_radius(self.config.earth_radius_miles);
        let graph = graph.build();
        let mut index = PrefixIndexBuilder::new();
        for place in self.places.into_iter().flatten() {
            index.insert(&place.name.clone(), place);
        }
        let index = index.build();

        log::info!(
            "map service ready: {} vertices, {} edges, {} searchable names",
            graph.vertex_count(),
            graph.edge_count(),
            index.len(),
        );
        Ok(MapService::new(graph, index, router, self.config))
    }
}

impl Default for MapServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
