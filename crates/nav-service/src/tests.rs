//! Unit tests for nav-service: the serving surface end to end.

#[cfg(test)]
mod helpers {
    use nav_graph::{VertexRecord, WayRecord};

    use crate::{MapService, MapServiceBuilder};

    /// Main St runs A(0,0) → B(0,1) → C(1,1); a named park with no roads
    /// sits off to the side, and a separate island road lies far east.
    pub fn town() -> MapService {
        MapServiceBuilder::new()
            .vertices([
                VertexRecord::new(1, 0.0, 0.0),
                VertexRecord::new(2, 0.0, 1.0),
                VertexRecord::new(3, 1.0, 1.0),
                VertexRecord::named(4, 0.5, 0.5, "Golden Gate Park"),
                VertexRecord::named(5, 10.0, 0.0, "Island Pier"),
                VertexRecord::new(6, 10.0, 0.1),
                VertexRecord::named(7, 0.0, 1.0, "O'Brien Ave"),
                VertexRecord::named(8, 0.0, 1.0, "OBrien Ave"),
            ])
            .ways([
                WayRecord::road(100, "Main St", &[1, 2, 3]),
                WayRecord::road(101, "Island Rd", &[5, 6]),
            ])
            .build()
            .unwrap()
    }
}

// ── Routing surface ───────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use nav_core::VertexId;
    use nav_graph::GraphError;
    use nav_route::RouteError;

    use super::helpers::town;
    use crate::{MapServiceBuilder, RouteQuery, ServiceError};

    #[test]
    fn snaps_and_routes() {
        let svc = town();
        let path = svc.shortest_path(0.01, -0.01, 0.99, 1.02).unwrap();
        assert_eq!(path, vec![VertexId(1), VertexId(2), VertexId(3)]);
    }

    #[test]
    fn same_snap_point_is_single_vertex() {
        let svc = town();
        assert_eq!(svc.shortest_path(0.0, 1.0, 0.01, 1.01).unwrap(), vec![VertexId(2)]);
    }

    #[test]
    fn disconnected_endpoints_report_no_route() {
        let svc = town();
        let err = svc.shortest_path(0.0, 0.0, 10.0, 0.0).unwrap_err();
        assert!(err.is_no_route(), "{err}");
        assert_eq!(
            err,
            ServiceError::Route(RouteError::NoRoute { from: VertexId(1), to: VertexId(5) })
        );
    }

    #[test]
    fn empty_map_reports_empty_graph() {
        let svc = MapServiceBuilder::new().build().unwrap();
        assert_eq!(
            svc.shortest_path(0.0, 0.0, 1.0, 1.0),
            Err(ServiceError::Graph(GraphError::EmptyGraph))
        );
    }

    #[test]
    fn non_finite_coordinates_are_errors() {
        let svc = town();
        for (lon, lat) in [(f64::NAN, 0.0), (0.0, f64::INFINITY)] {
            let err = svc.shortest_path(lon, lat, 1.0, 1.0).unwrap_err();
            assert!(matches!(err, ServiceError::Graph(GraphError::InvalidCoordinate { .. })), "{err}");
            let err = svc.shortest_path(0.0, 0.0, lon, lat).unwrap_err();
            assert!(matches!(err, ServiceError::Graph(GraphError::InvalidCoordinate { .. })), "{err}");
        }
        let results = svc.shortest_paths(&[RouteQuery::new(f64::NAN, 0.0, 1.0, 1.0)]);
        assert!(results[0].is_err());
    }

    #[test]
    fn batch_preserves_order() {
        let svc = town();
        let results = svc.shortest_paths(&[
            RouteQuery::new(0.0, 0.0, 1.0, 1.0),
            RouteQuery::new(0.0, 0.0, 10.0, 0.0),
            RouteQuery::new(1.0, 1.0, 0.0, 0.0),
        ]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref().unwrap(), &[VertexId(1), VertexId(2), VertexId(3)]);
        assert!(results[1].as_ref().unwrap_err().is_no_route());
        assert_eq!(results[2].as_deref().unwrap(), &[VertexId(3), VertexId(2), VertexId(1)]);
    }
}

// ── Directions surface ────────────────────────────────────────────────────────

#[cfg(test)]
mod directions {
    use nav_core::VertexId;
    use nav_route::{Maneuver, RouteError};

    use super::helpers::town;
    use crate::ServiceError;

    #[test]
    fn main_street_is_one_start_maneuver() {
        let svc = town();
        let path = svc.shortest_path(0.0, 0.0, 1.0, 1.0).unwrap();
        let g = svc.graph();
        let total = g.distance(VertexId(1), VertexId(2)).unwrap()
            + g.distance(VertexId(2), VertexId(3)).unwrap();

        let lines = svc.route_directions_text(&path).unwrap();
        assert_eq!(lines, vec![format!("Start on Main St and continue for {total:.3} miles.")]);

        // The rendered line parses back to the same verb and way.
        let parsed: Maneuver = lines[0].parse().unwrap();
        let direct = svc.route_directions(&path).unwrap();
        assert_eq!(parsed.kind, direct[0].kind);
        assert_eq!(parsed.way, direct[0].way);
        assert!((parsed.distance_miles - direct[0].distance_miles).abs() < 5e-4);
    }

    #[test]
    fn single_vertex_route_is_invalid() {
        let svc = town();
        assert_eq!(
            svc.route_directions(&[VertexId(1)]),
            Err(ServiceError::Route(RouteError::InvalidRoute { len: 1 }))
        );
    }
}

// ── Search surface ────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use nav_core::VertexId;
    use nav_graph::{VertexRecord, WayRecord};

    use super::helpers::town;
    use crate::MapServiceBuilder;

    #[test]
    fn prefix_search_finds_pruned_places() {
        let svc = town();
        // Vertex 4 has no roads and is pruned from the graph, but is a place.
        assert!(!svc.graph().contains(VertexId(4)));
        assert_eq!(svc.prefix_search("golden"), vec!["Golden Gate Park".to_owned()]);
        assert!(svc.prefix_search("xyz").is_empty());
    }

    #[test]
    fn exact_lookup_normalises_punctuation() {
        let svc = town();
        let a = svc.exact_lookup("O'Brien Ave");
        let b = svc.exact_lookup("OBrien Ave");
        assert_eq!(a, b);
        let ids: Vec<VertexId> = a.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![VertexId(7), VertexId(8)]);
        assert_eq!((a[0].lon, a[0].lat), (0.0, 1.0));
    }

    #[test]
    fn re_added_vertex_replaces_its_place() {
        let svc = MapServiceBuilder::new()
            .vertices([
                VertexRecord::named(1, 0.0, 0.0, "Old Hall"),
                VertexRecord::named(2, 0.0, 0.01, "Gym"),
                VertexRecord::named(1, 0.0, 0.0, "New Hall"),
                VertexRecord::new(2, 0.0, 0.01),
            ])
            .ways([WayRecord::road(10, "Quad Walk", &[1, 2])])
            .build()
            .unwrap();
        assert!(svc.exact_lookup("Old Hall").is_empty());
        assert!(svc.prefix_search("old").is_empty());
        assert!(svc.prefix_search("gym").is_empty());
        let ids: Vec<VertexId> = svc.exact_lookup("New Hall").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![VertexId(1)]);
        assert_eq!(svc.index().place_count(), 1);
    }

    #[test]
    fn exact_lookup_miss_is_empty() {
        let svc = town();
        assert!(svc.exact_lookup("Golden").is_empty());
    }
}

// ── Configuration & pluggable routers ─────────────────────────────────────────

#[cfg(test)]
mod config {
    use nav_core::{NavConfig, NavError, VertexId};
    use nav_graph::{MapGraph, VertexRecord, WayRecord};
    use nav_route::{Route, RouteError, RouteResult, Router};

    use crate::{MapServiceBuilder, ServiceError};

    fn line() -> MapServiceBuilder {
        MapServiceBuilder::new()
            .vertices((0..20).map(|i| VertexRecord::new(i, i as f64 * 0.001, 0.0)))
            .ways([WayRecord::road(1, "Long Line", &(0..20).collect::<Vec<u64>>())])
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = NavConfig { max_expansions: Some(0), ..NavConfig::default() };
        let err = line().config(cfg).build().err();
        assert!(matches!(err, Some(ServiceError::Config(NavError::Config(_)))));
    }

    #[test]
    fn budget_from_config_applies() {
        let cfg = NavConfig { max_expansions: Some(5), ..NavConfig::default() };
        let svc = line().config(cfg).build().unwrap();
        assert_eq!(
            svc.shortest_path(0.0, 0.0, 0.019, 0.0),
            Err(ServiceError::Route(RouteError::SearchBudgetExceeded { expansions: 5 }))
        );
        let svc = line().build().unwrap();
        assert_eq!(svc.shortest_path(0.0, 0.0, 0.019, 0.0).unwrap().len(), 20);
    }

    #[test]
    fn custom_router_is_used() {
        struct Refuse;
        impl Router for Refuse {
            fn route(&self, _: &MapGraph, from: VertexId, to: VertexId) -> RouteResult<Route> {
                Err(RouteError::NoRoute { from, to })
            }
        }
        let svc = line().build_with_router(Refuse).unwrap();
        assert!(svc.shortest_path(0.0, 0.0, 0.019, 0.0).unwrap_err().is_no_route());
    }
}

// ── Concurrency ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod concurrency {
    use crate::MapService;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn service_is_shareable() {
        assert_send_sync::<MapService>();
    }

    #[test]
    fn concurrent_queries_agree() {
        let svc = super::helpers::town();
        let expected = svc.shortest_path(0.0, 0.0, 1.0, 1.0).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        for _ in 0..50 {
                            assert_eq!(svc.shortest_path(0.0, 0.0, 1.0, 1.0).unwrap(), expected);
                            assert_eq!(svc.prefix_search("gol").len(), 1);
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
        });
    }
}
