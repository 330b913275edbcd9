use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use pathgrid_core::{CellStatus, OccupancyMatrix, Pos};

use crate::error::{Endpoint, PathError};
use crate::heuristic::SquaredEuclidean;
use crate::neighbors::Neighbors;
use crate::node::{Frontier, SearchNode};
use crate::traits::Heuristic;

/// How a search treats a neighbor whose position was already discovered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Revisit {
    /// Append every open neighbor to the frontier, even if its position was
    /// expanded or is already queued. Positions may be expanded several
    /// times, and when the goal is unreachable the frontier never drains:
    /// pair this with an expansion budget.
    Faithful,
    /// Skip neighbors whose position was already expanded. A neighbor that
    /// is already queued only updates the queued entry in place, and only
    /// when it arrives with a strictly lower cost.
    #[default]
    SkipClosed,
}

/// Tuning knobs for [`PathEngine`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub revisit: Revisit,
    /// Stop with [`PathError::BudgetExhausted`] after this many expansions.
    /// `None` means unlimited.
    pub max_expansions: Option<usize>,
}

impl EngineConfig {
    /// Reference behaviour: unconditional re-adds, bounded by `budget`.
    pub fn faithful(budget: usize) -> Self {
        Self {
            revisit: Revisit::Faithful,
            max_expansions: Some(budget),
        }
    }
}

/// Counters from one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded (the goal is not counted).
    pub expanded: usize,
    /// Nodes added to the frontier, the root included.
    pub generated: usize,
    /// Largest frontier length seen.
    pub peak_frontier: usize,
}

/// Best-first search over an 8-connected, unit-cost occupancy matrix.
///
/// The engine keeps no state between calls: every frontier, closed set and
/// node arena lives only for the duration of one
/// [`find_path`](PathEngine::find_path).
#[derive(Clone, Debug, Default)]
pub struct PathEngine<H = SquaredEuclidean> {
    heuristic: H,
    config: EngineConfig,
}

impl PathEngine {
    /// Engine with the squared-Euclidean heuristic and default config.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> PathEngine<H> {
    pub fn with_heuristic(heuristic: H, config: EngineConfig) -> Self {
        Self { heuristic, config }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Find a route from `start` to `end`, both included.
    ///
    /// Only cells with code 0 are traversable. Both endpoints must be on
    /// the matrix, must not be walls, and must already be reset to 0 (see
    /// [`OccupancyMatrix::cleared`]).
    ///
    /// Returns `Ok(None)` when the frontier empties without reaching `end`.
    pub fn find_path(
        &self,
        matrix: &OccupancyMatrix,
        start: Pos,
        end: Pos,
    ) -> Result<Option<Vec<Pos>>, PathError> {
        self.find_path_with_stats(matrix, start, end)
            .map(|(path, _)| path)
    }

    /// Like [`find_path`](PathEngine::find_path), also returning counters.
    pub fn find_path_with_stats(
        &self,
        matrix: &OccupancyMatrix,
        start: Pos,
        end: Pos,
    ) -> Result<(Option<Vec<Pos>>, SearchStats), PathError> {
        check_endpoint(matrix, Endpoint::Start, start)?;
        check_endpoint(matrix, Endpoint::End, end)?;

        let mut stats = SearchStats::default();
        if start == end {
            return Ok((Some(vec![start]), stats));
        }

        let mut search = Search::default();
        search.open(SearchNode::root(start));
        stats.generated = 1;
        stats.peak_frontier = 1;

        let mut nbuf = Neighbors::new();

        while let Some(ci) = search.frontier.pop_min(&search.nodes) {
            let current = search.nodes[ci];
            search.open_index.remove(&current.pos);
            search.closed.insert(current.pos);

            if current.pos == end {
                let path = search.reconstruct(ci);
                debug!(
                    "path {start} -> {end}: {} steps, {} expanded",
                    path.len() - 1,
                    stats.expanded
                );
                return Ok((Some(path), stats));
            }

            if let Some(max) = self.config.max_expansions {
                if stats.expanded >= max {
                    debug!("search {start} -> {end} hit its budget of {max} expansions");
                    return Err(PathError::BudgetExhausted {
                        expanded: stats.expanded,
                    });
                }
            }
            stats.expanded += 1;
            trace!("expand {} g={} f={}", current.pos, current.g, current.f);

            let g = current.g + 1;
            for &np in nbuf.all(current.pos, |n| matrix.is_open(n)) {
                let h = self.heuristic.estimate(np, end);
                if self.config.revisit == Revisit::SkipClosed {
                    if search.closed.contains(&np) {
                        continue;
                    }
                    if let Some(&qi) = search.open_index.get(&np) {
                        let queued = &mut search.nodes[qi];
                        if g < queued.g {
                            *queued = SearchNode::child(np, ci, g, h);
                        }
                        continue;
                    }
                }
                search.open(SearchNode::child(np, ci, g, h));
                stats.generated += 1;
            }
            stats.peak_frontier = stats.peak_frontier.max(search.frontier.len());
        }

        debug!(
            "no path {start} -> {end} after {} expansions",
            stats.expanded
        );
        Ok((None, stats))
    }
}

/// Find a route with the default engine. See [`PathEngine::find_path`].
pub fn find_path(
    matrix: &OccupancyMatrix,
    start: Pos,
    end: Pos,
) -> Result<Option<Vec<Pos>>, PathError> {
    PathEngine::new().find_path(matrix, start, end)
}

fn check_endpoint(matrix: &OccupancyMatrix, endpoint: Endpoint, pos: Pos) -> Result<(), PathError> {
    let code = matrix.get(pos).ok_or(PathError::OutOfBounds {
        endpoint,
        pos,
        bounds: matrix.bounds(),
    })?;
    match CellStatus::from_code(code) {
        Some(CellStatus::Free) => Ok(()),
        Some(CellStatus::Wall) => Err(PathError::Blocked { endpoint, pos }),
        _ => Err(PathError::UnclearedEndpoint {
            endpoint,
            pos,
            code,
        }),
    }
}

/// Per-call search state.
#[derive(Default)]
struct Search {
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    closed: HashSet<Pos>,
    // queued position -> arena index, kept for `Revisit::SkipClosed`
    open_index: HashMap<Pos, usize>,
}

impl Search {
    fn open(&mut self, node: SearchNode) {
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.frontier.push(idx);
        self.open_index.insert(node.pos, idx);
    }

    fn reconstruct(&self, goal: usize) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(i) = cur {
            let n = &self.nodes[i];
            path.push(n.pos);
            cur = n.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{Chebyshev, HeuristicKind};
    use pathgrid_core::GridModel;

    fn open(size: usize) -> OccupancyMatrix {
        GridModel::new(size).to_occupancy_matrix()
    }

    fn assert_valid_route(m: &OccupancyMatrix, path: &[Pos], start: Pos, end: Pos) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent_8(w[1]), "{} -> {} is not a step", w[0], w[1]);
        }
        for &p in &path[1..path.len() - 1] {
            assert!(m.is_open(p), "{p} is not traversable");
        }
    }

    fn center_wall() -> OccupancyMatrix {
        OccupancyMatrix::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap()
    }

    fn walled_in_goal() -> OccupancyMatrix {
        OccupancyMatrix::from_rows(&[
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn open_grid_route_is_connected() {
        for size in [2, 5, 13] {
            let m = open(size);
            let end = Pos::new(size as i32 - 1, size as i32 - 1);
            let path = find_path(&m, Pos::ORIGIN, end).unwrap().unwrap();
            assert_valid_route(&m, &path, Pos::ORIGIN, end);
        }
    }

    #[test]
    fn open_grid_takes_the_diagonal() {
        let path = find_path(&open(5), Pos::new(0, 0), Pos::new(4, 4))
            .unwrap()
            .unwrap();
        let diagonal: Vec<_> = (0..5).map(|i| Pos::new(i, i)).collect();
        assert_eq!(path, diagonal);
    }

    #[test]
    fn center_wall_is_avoided() {
        let m = center_wall();
        let path = find_path(&m, Pos::new(0, 0), Pos::new(2, 2))
            .unwrap()
            .unwrap();
        assert!(!path.contains(&Pos::new(1, 1)));
        assert_valid_route(&m, &path, Pos::new(0, 0), Pos::new(2, 2));
        // Three moves; going round the edge would take four.
        assert_eq!(path.len(), 4);
        assert_eq!(
            path,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 2)]
        );
    }

    #[test]
    fn faithful_and_skip_closed_agree_on_ties() {
        let faithful = PathEngine::with_heuristic(SquaredEuclidean, EngineConfig::faithful(1_000));
        let improved = PathEngine::new();
        for (m, end) in [(center_wall(), Pos::new(2, 2)), (open(5), Pos::new(4, 4))] {
            assert_eq!(
                faithful.find_path(&m, Pos::ORIGIN, end).unwrap(),
                improved.find_path(&m, Pos::ORIGIN, end).unwrap()
            );
        }
    }

    #[test]
    fn enclosed_goal_is_not_found() {
        let m = walled_in_goal();
        let (path, stats) = PathEngine::new()
            .find_path_with_stats(&m, Pos::new(0, 0), Pos::new(2, 2))
            .unwrap();
        assert_eq!(path, None);
        // Every reachable cell is expanded exactly once.
        assert_eq!(stats.expanded, 16);
    }

    #[test]
    fn faithful_search_needs_a_budget_when_unreachable() {
        let m = walled_in_goal();
        let engine = PathEngine::with_heuristic(SquaredEuclidean, EngineConfig::faithful(100));
        assert_eq!(
            engine.find_path(&m, Pos::new(0, 0), Pos::new(2, 2)),
            Err(PathError::BudgetExhausted { expanded: 100 })
        );
    }

    #[test]
    fn unreached_budget_does_not_change_result() {
        let m = open(5);
        let end = Pos::new(4, 4);
        let unlimited = find_path(&m, Pos::ORIGIN, end).unwrap();
        let tight = PathEngine::with_heuristic(
            SquaredEuclidean,
            EngineConfig {
                max_expansions: Some(4),
                ..EngineConfig::default()
            },
        );
        assert_eq!(tight.find_path(&m, Pos::ORIGIN, end).unwrap(), unlimited);

        let too_tight = PathEngine::with_heuristic(
            SquaredEuclidean,
            EngineConfig {
                max_expansions: Some(3),
                ..EngineConfig::default()
            },
        );
        assert_eq!(
            too_tight.find_path(&m, Pos::ORIGIN, end),
            Err(PathError::BudgetExhausted { expanded: 3 })
        );
    }

    #[test]
    fn same_start_and_end() {
        let m = center_wall();
        for p in [Pos::new(0, 0), Pos::new(2, 1)] {
            assert_eq!(find_path(&m, p, p).unwrap(), Some(vec![p]));
        }
    }

    #[test]
    fn endpoints_are_validated_before_search() {
        let m = center_wall();
        assert_eq!(
            find_path(&m, Pos::new(3, 0), Pos::new(0, 0)),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: Pos::new(3, 0),
                bounds: m.bounds(),
            })
        );
        assert_eq!(
            find_path(&m, Pos::new(0, 0), Pos::new(1, 1)),
            Err(PathError::Blocked {
                endpoint: Endpoint::End,
                pos: Pos::new(1, 1),
            })
        );
        // A wall is rejected even when start == end.
        assert!(find_path(&m, Pos::new(1, 1), Pos::new(1, 1)).is_err());
    }

    #[test]
    fn role_codes_must_be_cleared() {
        let m = OccupancyMatrix::from_rows(&[[2, 0], [0, 3]]).unwrap();
        assert_eq!(
            find_path(&m, Pos::new(0, 0), Pos::new(1, 1)),
            Err(PathError::UnclearedEndpoint {
                endpoint: Endpoint::Start,
                pos: Pos::new(0, 0),
                code: 2,
            })
        );
        let (start, end) = m.endpoints().unwrap();
        let cleared = m.cleared(&[start, end]);
        assert_eq!(
            find_path(&cleared, start, end).unwrap(),
            Some(vec![Pos::new(0, 0), Pos::new(1, 1)])
        );
    }

    #[test]
    fn admissible_heuristic_finds_a_shortest_route() {
        let m = center_wall();
        let engine = PathEngine::with_heuristic(Chebyshev, EngineConfig::default());
        let path = engine
            .find_path(&m, Pos::new(0, 0), Pos::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 4);
        assert_valid_route(&m, &path, Pos::new(0, 0), Pos::new(2, 2));
    }

    #[test]
    fn runtime_heuristic_choice() {
        let m = walled_in_goal();
        let engine = PathEngine::with_heuristic(HeuristicKind::Manhattan, EngineConfig::default());
        let path = engine
            .find_path(&m, Pos::new(0, 4), Pos::new(4, 0))
            .unwrap()
            .unwrap();
        assert_valid_route(&m, &path, Pos::new(0, 4), Pos::new(4, 0));
    }

    #[test]
    fn closure_heuristic() {
        let m = open(6);
        let engine = PathEngine::with_heuristic(|_: Pos, _: Pos| 0, EngineConfig::default());
        let (path, stats) = engine
            .find_path_with_stats(&m, Pos::new(0, 0), Pos::new(5, 0))
            .unwrap();
        assert_eq!(path.map(|p| p.len()), Some(6));
        assert!(stats.generated >= stats.expanded);
        assert!(stats.peak_frontier > 0);
    }
}
