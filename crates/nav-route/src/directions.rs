//! Turn a vertex route into turn-by-turn maneuvers.

use nav_core::{normalize_turn, NavConfig, VertexId};
use nav_graph::MapGraph;

use crate::maneuver::{Maneuver, ManeuverKind, UNNAMED_WAY};
use crate::{RouteError, RouteResult};

/// Describe `route` as an ordered list of maneuvers.
///
/// The first maneuver is always [`ManeuverKind::Start`] on the way between
/// the first two vertices.  Consecutive segments with the same path name are
/// merged into one maneuver; nameless segments form their own class and merge
/// with each other like any other name.  When the name changes, the heading
/// change at the pivot vertex picks the verb of the next maneuver.
///
/// Hops between vertices at the same position (including a repeated vertex)
/// are zero-length: they add no distance, never open a maneuver and are not
/// used for bearings.
///
/// # Errors
///
/// [`RouteError::InvalidRoute`] for routes shorter than two vertices, and
/// [`RouteError::Graph`] if a vertex is not in `graph`.
pub fn route_directions(
    graph: &MapGraph,
    route: &[VertexId],
    config: &NavConfig,
) -> RouteResult<Vec<Maneuver>> {
    if route.len() < 2 {
        return Err(RouteError::InvalidRoute { len: route.len() });
    }

    let mut maneuvers = Vec::new();
    let mut current_name = graph.path_name(route[0], route[1])?;
    let first_length = graph.distance(route[0], route[1])?;
    let mut current = Maneuver::new(ManeuverKind::Start, current_name.unwrap_or(UNNAMED_WAY), first_length);
    // Tail of the last non-degenerate segment, for the incoming bearing.
    let mut incoming_from = (first_length > 0.0).then_some(route[0]);

    for hop in route.windows(2).skip(1) {
        let (pivot, next) = (hop[0], hop[1]);
        let length = graph.distance(pivot, next)?;
        if length == 0.0 {
            continue;
        }
        let name = graph.path_name(pivot, next)?;

        match incoming_from {
            Some(_) if name == current_name => current.distance_miles += length,
            // Only zero-length hops so far: the start maneuver takes this way.
            None => {
                current.way = name.unwrap_or(UNNAMED_WAY).to_owned();
                current.distance_miles += length;
                current_name = name;
            }
            Some(prev) => {
                let delta = normalize_turn(graph.bearing(prev, pivot)?, graph.bearing(pivot, next)?);
                let kind = ManeuverKind::classify(delta, config);
                maneuvers.push(current);
                current = Maneuver::new(kind, name.unwrap_or(UNNAMED_WAY), length);
                current_name = name;
            }
        }
        incoming_from = Some(pivot);
    }

    maneuvers.push(current);
    Ok(maneuvers)
}
