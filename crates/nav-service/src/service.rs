//! Read-only query facade.

use nav_core::{GeoPoint, NavConfig, VertexId};
use nav_graph::MapGraph;
use nav_route::{route_directions, AStarRouter, Maneuver, Router};
use nav_search::{PlaceMatch, PrefixIndex};

use crate::ServiceResult;

/// One shortest-path request by raw coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteQuery {
    pub start: GeoPoint,
    pub end:   GeoPoint,
}

impl RouteQuery {
    pub fn new(start_lon: f64, start_lat: f64, end_lon: f64, end_lat: f64) -> Self {
        Self {
            start: GeoPoint::new(start_lon, start_lat),
            end:   GeoPoint::new(end_lon, end_lat),
        }
    }
}

/// Routing and search over one immutable map snapshot.
///
/// Construct with [`MapServiceBuilder`](crate::MapServiceBuilder).  Every
/// method takes `&self` and touches no shared mutable state, so one instance
/// can serve any number of threads.
pub struct MapService<R: Router = AStarRouter> {
    graph:  MapGraph,
    index:  PrefixIndex,
    router: R,
    config: NavConfig,
}

impl<R: Router> MapService<R> {
    pub(crate) fn new(graph: MapGraph, index: PrefixIndex, router: R, config: NavConfig) -> Self {
        Self { graph, index, router, config }
    }

    pub fn graph(&self) -> &MapGraph {
        &self.graph
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Shortest path between the vertices closest to the two coordinates.
    ///
    /// # Errors
    ///
    /// - `Graph(EmptyGraph)` if the map has no roads.
    /// - `Route(NoRoute)` if the snapped endpoints are disconnected.
    /// - `Route(SearchBudgetExceeded)` if the search hit the configured budget.
    pub fn shortest_path(
        &self,
        start_lon: f64,
        start_lat: f64,
        end_lon: f64,
        end_lat: f64,
    ) -> ServiceResult<Vec<VertexId>> {
        let from = self.graph.closest_vertex(start_lon, start_lat)?;
        let to = self.graph.closest_vertex(end_lon, end_lat)?;
        let route = self.router.route(&self.graph, from, to)?;
        Ok(route.vertices)
    }

    /// Run many [`shortest_path`](Self::shortest_path) queries, preserving
    /// order.  Runs on Rayon with the `parallel` feature.
    pub fn shortest_paths(&self, queries: &[RouteQuery]) -> Vec<ServiceResult<Vec<VertexId>>> {
        let run = |q: &RouteQuery| self.shortest_path(q.start.lon, q.start.lat, q.end.lon, q.end.lat);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries.par_iter().map(run).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(run).collect()
        }
    }

    /// Turn-by-turn maneuvers for a route of at least two vertices.
    pub fn route_directions(&self, route: &[VertexId]) -> ServiceResult<Vec<Maneuver>> {
        Ok(route_directions(&self.graph, route, &self.config)?)
    }

    /// [`route_directions`](Self::route_directions) rendered as
    /// `"<Verb> on <Way> and continue for <d> miles."` lines.
    pub fn route_directions_text(&self, route: &[VertexId]) -> ServiceResult<Vec<String>> {
        Ok(self.route_directions(route)?.iter().map(ToString::to_string).collect())
    }

    /// Display names of places whose normalised name starts with `prefix`.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        self.index.prefix_search(prefix)
    }

    /// All places whose normalised name equals `name`.
    pub fn exact_lookup(&self, name: &str) -> Vec<PlaceMatch> {
        self.index.exact_lookup(name)
    }
}
