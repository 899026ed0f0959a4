//! Synthetic campus map.
//!
//! A handful of streets around a university campus, loosely following the
//! south edge of Berkeley.  Small enough to reason about by hand: the route
//! from the west end of Bancroft Way to the south end of College Ave runs
//! east along Bancroft and turns right onto College.

use nav_graph::{VertexRecord, WayRecord};

/// Records the demo routes between.
pub struct Landmarks {
    pub bancroft_west: VertexRecord,
    pub college_south: VertexRecord,
    pub sather_gate:   VertexRecord,
}

/// Returns every vertex record, every way record, and the landmarks.
pub fn build_campus() -> (Vec<VertexRecord>, Vec<WayRecord>, Landmarks) {
    let bancroft_west = VertexRecord::new(1, -122.2650, 37.8687);
    let telegraph_x   = VertexRecord::named(2, -122.2600, 37.8687, "Sproul Plaza");
    let college_x     = VertexRecord::new(3, -122.2550, 37.8687);
    let telegraph_s   = VertexRecord::new(10, -122.2600, 37.8640);
    let sather_gate   = VertexRecord::named(11, -122.2600, 37.8702, "Sather Gate");
    let college_south = VertexRecord::new(12, -122.2550, 37.8640);

    let vertices = vec![
        bancroft_west.clone(),
        telegraph_x,
        college_x,
        telegraph_s,
        sather_gate.clone(),
        college_south.clone(),
        // Off-road landmarks: pruned from the road graph, still searchable.
        VertexRecord::named(20, -122.2578, 37.8721, "Sather Tower"),
        VertexRecord::named(21, -122.2595, 37.8722, "Doe Library"),
        VertexRecord::named(22, -122.2540, 37.8697, "Hearst Gym"),
        // Stray node referenced by no way.
        VertexRecord::new(99, -122.2700, 37.8800),
    ];

    let ways = vec![
        WayRecord::road(100, "Bancroft Way", &[1, 2, 3]),
        WayRecord::road(101, "Telegraph Ave", &[10, 2, 11]),
        WayRecord::road(102, "College Ave", &[3, 12]),
        // References a node that was never loaded; skipped with a warning.
        WayRecord::road(103, "Durant Ave", &[10, 404]),
    ];

    let landmarks = Landmarks { bancroft_west, college_south, sather_gate };
    (vertices, ways, landmarks)
}
