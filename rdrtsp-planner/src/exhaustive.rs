//! Branch-and-bound planner.
//!
//! Every branch owns its own `visited` and `options` vectors. Cloning a
//! vector of references is cheap, and it keeps sibling branches from
//! observing each other's extensions.

use log::debug;
use rdrtsp_core::distance::total_distance;
use rdrtsp_core::{Diagnostics, Location, Locations, Plan, PlanError, Planner, Route, StopIdentity};

use crate::window::{DayWindow, SearchSeed};

/// How the cost bound travels through the recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundPolicy {
    /// Pass the running best into every child and abandon any extension
    /// whose partial cost already reaches it.
    #[default]
    Tightening,
    /// Hand every child the bound received from the caller and compare only
    /// once all children have returned. Nothing is pruned, so the search
    /// enumerates every ordering.
    Deferred,
}

/// Configuration for [`ExhaustivePlanner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveConfig {
    /// Bound threading strategy.
    pub bound: BoundPolicy,
    /// How visited stops are removed from the candidates.
    pub identity: StopIdentity,
}

/// Planner that returns a minimal-cost route under the day-advance rule.
///
/// When several routes share the minimal cost, the first one in enumeration
/// order wins: candidates are tried in pool order at every depth. Both
/// [`BoundPolicy`] values return the same route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, Locations, Planner};
/// use rdrtsp_planner::{ExhaustivePlanner, GreedyPlanner};
///
/// let stop = |name: &str, x: f64, record| Location::new(name, Coord { x, y: 0.0 }, Day::First, record);
/// let locations: Locations = [stop("S", 0.0, 0), stop("L", -2.0, 1), stop("R", 1.0, 2), stop("RR", 3.0, 3)]
///     .into_iter()
///     .collect();
///
/// let greedy = GreedyPlanner::default().plan(&locations, "S")?;
/// let best = ExhaustivePlanner::default().plan(&locations, "S")?;
///
/// assert_eq!(greedy.route.total_distance(), 8.0);
/// assert_eq!(best.route.total_distance(), 7.0);
/// assert_eq!(best.route.names().collect::<Vec<_>>(), ["S", "L", "R", "RR"]);
/// # Ok::<(), rdrtsp_core::PlanError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustivePlanner {
    config: ExhaustiveConfig,
}

impl ExhaustivePlanner {
    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ExhaustiveConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> ExhaustiveConfig {
        self.config
    }
}

impl Planner for ExhaustivePlanner {
    fn plan(&self, locations: &Locations, start: &str) -> Result<Plan, PlanError> {
        let SearchSeed { visited, options } =
            SearchSeed::new(locations, start, self.config.identity)?;
        let window = DayWindow::new(locations, self.config.identity);
        let mut search = Search {
            config: self.config,
            diagnostics: Diagnostics::default(),
        };

        let best = search.explore(visited, options, window, None);
        debug!(
            "exhaustive search explored {} branches, pruned {}",
            search.diagnostics.branches_explored, search.diagnostics.branches_pruned
        );

        let found = best.ok_or_else(|| PlanError::NoRoute {
            start: start.to_owned(),
        })?;
        Ok(Plan {
            route: Route::from_stops(found.stops),
            diagnostics: search.diagnostics,
        })
    }
}

/// A complete route and its cost.
struct Candidate<'a> {
    stops: Vec<&'a Location>,
    cost: f64,
}

impl<'a> Candidate<'a> {
    fn complete(stops: Vec<&'a Location>) -> Self {
        let cost = total_distance(stops.iter().copied());
        Self { stops, cost }
    }
}

struct Search {
    config: ExhaustiveConfig,
    diagnostics: Diagnostics,
}

impl Search {
    /// Best completion of `visited` drawing from `options`.
    ///
    /// `None` as the bound means nothing has been found yet and nothing is
    /// pruned. Under [`BoundPolicy::Tightening`] returns `None` when no
    /// completion costs less than a present bound.
    fn explore<'a>(
        &mut self,
        mut visited: Vec<&'a Location>,
        mut options: Vec<&'a Location>,
        mut window: DayWindow<'a>,
        bound: Option<f64>,
    ) -> Option<Candidate<'a>> {
        if let Some(opened) = window.advance(&visited) {
            options = opened;
        }

        if let &[only] = options.as_slice() {
            visited.push(only);
            return self.admit(Candidate::complete(visited), bound);
        }
        if options.is_empty() {
            return self.admit(Candidate::complete(visited), bound);
        }

        let mut best: Option<Candidate<'a>> = None;
        let mut running = bound;
        for &candidate in &options {
            self.count_explored();
            let mut extended = visited.clone();
            extended.push(candidate);

            if self.config.bound == BoundPolicy::Tightening
                && running.is_some_and(|limit| total_distance(extended.iter().copied()) >= limit)
            {
                self.count_pruned();
                continue;
            }

            let remaining = self.config.identity.filter(&extended, options.iter().copied());
            let child_bound = match self.config.bound {
                BoundPolicy::Tightening => running,
                BoundPolicy::Deferred => bound,
            };
            let Some(found) = self.explore(extended, remaining, window, child_bound) else {
                continue;
            };
            if best.as_ref().is_none_or(|current| found.cost < current.cost) {
                if self.config.bound == BoundPolicy::Tightening {
                    running = Some(found.cost);
                }
                best = Some(found);
            }
        }

        best
    }

    /// Gate a complete route on the bound when bounds are tightened.
    fn admit<'a>(&mut self, candidate: Candidate<'a>, bound: Option<f64>) -> Option<Candidate<'a>> {
        if self.config.bound == BoundPolicy::Tightening
            && bound.is_some_and(|limit| candidate.cost >= limit)
        {
            self.count_pruned();
            return None;
        }
        Some(candidate)
    }

    fn count_explored(&mut self) {
        self.diagnostics.branches_explored = self.diagnostics.branches_explored.saturating_add(1);
    }

    fn count_pruned(&mut self) {
        self.diagnostics.branches_pruned = self.diagnostics.branches_pruned.saturating_add(1);
    }
}
