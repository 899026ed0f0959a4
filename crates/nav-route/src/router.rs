//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! The service facade calls routing through the [`Router`] trait, so a
//! serving application can swap in another engine (bidirectional search,
//! contraction hierarchies) without touching the rest of the stack.
//!
//! # Cost units
//!
//! Costs are great-circle miles summed along the path.  The heuristic is the
//! straight great-circle distance to the goal, which never exceeds the road
//! distance, so the first time the goal leaves the frontier its path is
//! optimal.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use nav_core::{NavConfig, NodeIdx, VertexId};
use nav_graph::MapGraph;

use crate::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Vertices from start to end inclusive.
    pub vertices: Vec<VertexId>,
    /// Cumulative great-circle length in miles.
    pub total_miles: f64,
    /// Vertices finalised by the search.  Useful for tuning the budget.
    pub expansions: usize,
}

impl Route {
    /// `true` if the source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one router instance serves
/// concurrent queries against the same immutable graph.
pub trait Router: Send + Sync {
    /// Compute the shortest route from `from` to `to`.
    ///
    /// `from == to` yields a single-vertex route.  A disconnected pair yields
    /// [`RouteError::NoRoute`].
    fn route(&self, graph: &MapGraph, from: VertexId, to: VertexId) -> RouteResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* with a closed set and an optional expansion budget.
///
/// Each pop from the frontier is handled as:
///
/// 1. goal → reconstruct and return;
/// 2. already closed → stale entry, discard;
/// 3. otherwise close it, then relax every neighbour that is not closed.
///
/// A vertex is closed before its neighbours are scanned, so a finalised
/// vertex is never re-relaxed through a later, worse entry.
#[derive(Debug, Clone)]
pub struct AStarRouter {
    max_expansions: Option<usize>,
}

impl AStarRouter {
    /// Router without an expansion budget.
    pub fn unbounded() -> Self {
        Self { max_expansions: None }
    }

    /// Router that gives up with [`RouteError::SearchBudgetExceeded`] once
    /// `max_expansions` vertices have been closed without reaching the goal.
    pub fn with_budget(max_expansions: usize) -> Self {
        Self { max_expansions: Some(max_expansions) }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        Self { max_expansions: config.max_expansions }
    }

    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

impl Default for AStarRouter {
    fn default() -> Self {
        Self::from_config(&NavConfig::default())
    }
}

impl Router for AStarRouter {
    fn route(&self, graph: &MapGraph, from: VertexId, to: VertexId) -> RouteResult<Route> {
        let start = graph.slot(from)?;
        let goal = graph.slot(to)?;
        let route = astar(graph, start, goal, self.max_expansions)?;
        log::debug!(
            "routed {from} -> {to}: {} vertices, {:.3} miles, {} expansions",
            route.vertices.len(),
            route.total_miles,
            route.expansions,
        );
        Ok(route)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Frontier entry ordered by `f = g + h`, then slot for deterministic ties.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f:   f64,
    idx: NodeIdx,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f).then(self.idx.cmp(&other.idx))
    }
}

fn astar(
    graph: &MapGraph,
    start: NodeIdx,
    goal: NodeIdx,
    max_expansions: Option<usize>,
) -> RouteResult<Route> {
    if start == goal {
        return Ok(Route { vertices: vec![graph.id_of(start)], total_miles: 0.0, expansions: 0 });
    }

    let n = graph.vertex_count();
    // best[v] = best known cost (miles) from start to v.
    let mut best   = vec![f64::INFINITY; n];
    // parent[v] = slot that reached v; INVALID for unreached slots.
    let mut parent = vec![NodeIdx::INVALID; n];
    let mut closed = vec![false; n];
    let mut expansions = 0usize;

    best[start.index()] = 0.0;

    // Reverse turns the max-heap into a min-heap on f.
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry { f: graph.slot_distance(start, goal), idx: start }));

    while let Some(Reverse(FrontierEntry { idx: node, .. })) = frontier.pop() {
        if node == goal {
            return Ok(reconstruct(graph, &parent, goal, best[goal.index()], expansions));
        }
        if closed[node.index()] {
            continue;
        }
        if max_expansions.is_some_and(|max| expansions >= max) {
            return Err(RouteError::SearchBudgetExceeded { expansions });
        }
        closed[node.index()] = true;
        expansions += 1;

        let cost = best[node.index()];
        for &neighbor in graph.neighbors(node) {
            if closed[neighbor.index()] {
                continue;
            }
            let new_cost = cost + graph.slot_distance(node, neighbor);
            if new_cost < best[neighbor.index()] {
                best[neighbor.index()] = new_cost;
                parent[neighbor.index()] = node;
                let f = new_cost + graph.slot_distance(neighbor, goal);
                frontier.push(Reverse(FrontierEntry { f, idx: neighbor }));
            }
        }
    }

    Err(RouteError::NoRoute { from: graph.id_of(start), to: graph.id_of(goal) })
}

fn reconstruct(
    graph: &MapGraph,
    parent: &[NodeIdx],
    goal: NodeIdx,
    total_miles: f64,
    expansions: usize,
) -> Route {
    let mut vertices = vec![graph.id_of(goal)];
    let mut cur = goal;
    while parent[cur.index()] != NodeIdx::INVALID {
        cur = parent[cur.index()];
        vertices.push(graph.id_of(cur));
    }
    vertices.reverse();
    Route { vertices, total_miles, expansions }
}
