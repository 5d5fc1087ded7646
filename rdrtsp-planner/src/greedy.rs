//! Nearest-neighbour planner.

use log::debug;
use rdrtsp_core::distance::manhattan;
use rdrtsp_core::{Diagnostics, Location, Locations, Plan, PlanError, Planner, Route, StopIdentity};

use crate::window::{DayWindow, SearchSeed};

/// Greedy planner that always visits the nearest remaining stop.
///
/// Ties go to the candidate that appears first in its pool. Each step removes
/// only the chosen record from the candidates; namesakes stay eligible until
/// the next day opens, when the new pool is filtered against the whole route.
/// The route ends when the last candidate of the open window is taken, or
/// when a newly opened day has nothing left to visit.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, Locations, Planner};
/// use rdrtsp_planner::GreedyPlanner;
///
/// let locations: Locations = [
///     Location::new("A", Coord { x: 0.0, y: 0.0 }, Day::First, 0),
///     Location::new("B", Coord { x: 4.0, y: 0.0 }, Day::First, 1),
///     Location::new("C", Coord { x: 1.0, y: 0.0 }, Day::First, 2),
/// ]
/// .into_iter()
/// .collect();
///
/// let plan = GreedyPlanner::default().plan(&locations, "A")?;
/// assert_eq!(plan.route.names().collect::<Vec<_>>(), ["A", "C", "B"]);
/// # Ok::<(), rdrtsp_core::PlanError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlanner {
    identity: StopIdentity,
}

impl GreedyPlanner {
    /// Construct a planner using `identity` to seed the route and to filter
    /// each newly opened pool.
    #[must_use]
    pub const fn with_identity(identity: StopIdentity) -> Self {
        Self { identity }
    }
}

impl Planner for GreedyPlanner {
    fn plan(&self, locations: &Locations, start: &str) -> Result<Plan, PlanError> {
        let SearchSeed {
            mut visited,
            mut options,
        } = SearchSeed::new(locations, start, self.identity)?;
        let mut window = DayWindow::new(locations, self.identity);
        let mut diagnostics = Diagnostics::default();
        let mut last = *visited
            .last()
            .ok_or_else(|| PlanError::EmptyOptions { day: window.day() })?;

        while let Some((index, next)) = nearest(last, &options) {
            visited.push(next);
            diagnostics.branches_explored = diagnostics
                .branches_explored
                .saturating_add(u64::try_from(options.len()).unwrap_or(u64::MAX));
            last = next;
            if options.len() == 1 {
                break;
            }
            options.remove(index);
            debug!(
                "visited {} stops, {} candidates remain on {}",
                visited.len(),
                options.len(),
                window.day()
            );
            if let Some(opened) = window.advance(&visited) {
                options = opened;
            }
        }

        Ok(Plan {
            route: Route::from_stops(visited),
            diagnostics,
        })
    }
}

/// Position and record of the first candidate at minimum Manhattan distance
/// from `from`.
fn nearest<'a>(from: &Location, options: &[&'a Location]) -> Option<(usize, &'a Location)> {
    options
        .iter()
        .copied()
        .enumerate()
        .fold(
            None,
            |best: Option<(usize, &'a Location, f64)>, (index, candidate)| {
                let cost = manhattan(from, candidate);
                match best {
                    Some((_, _, best_cost)) if best_cost <= cost => best,
                    _ => Some((index, candidate, cost)),
                }
            },
        )
        .map(|(index, stop, _)| (index, stop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdrtsp_core::test_support::{grid, location, problem};
    use rdrtsp_core::{DAY_QUOTA, Day};
    use rstest::rstest;

    fn names(plan: &Plan) -> Vec<&str> {
        plan.route.names().collect()
    }

    #[rstest]
    fn small_first_day_never_advances() {
        let locations = problem(&[("A", 0.0, 0.0, 0), ("B", 1.0, 0.0, 0), ("C", 5.0, 5.0, 1)]);
        let plan = GreedyPlanner::default()
            .plan(&locations, "A")
            .expect("plan succeeds");
        assert_eq!(names(&plan), ["A", "B"]);
    }

    #[rstest]
    fn ties_go_to_the_earlier_record() {
        let locations = problem(&[
            ("S", 0.0, 0.0, 0),
            ("East", 1.0, 0.0, 0),
            ("West", -1.0, 0.0, 0),
            ("North", 0.0, 1.0, 0),
        ]);
        let plan = GreedyPlanner::default()
            .plan(&locations, "S")
            .expect("plan succeeds");
        assert_eq!(names(&plan).get(1), Some(&"East"));
    }

    #[rstest]
    fn each_step_takes_the_nearest_candidate() {
        let locations = problem(&[
            ("S", 0.0, 0.0, 0),
            ("Far", 10.0, 0.0, 0),
            ("Near", 1.0, 0.0, 0),
            ("Mid", 4.0, 0.0, 0),
        ]);
        let plan = GreedyPlanner::default()
            .plan(&locations, "S")
            .expect("plan succeeds");
        assert_eq!(names(&plan), ["S", "Near", "Mid", "Far"]);
    }

    #[rstest]
    fn namesakes_in_the_open_pool_are_each_visited() {
        let locations = problem(&[
            ("S", 0.0, 0.0, 0),
            ("Twin", 1.0, 0.0, 0),
            ("Twin", 2.0, 0.0, 0),
            ("Other", 3.0, 0.0, 0),
        ]);
        let plan = GreedyPlanner::default()
            .plan(&locations, "S")
            .expect("plan succeeds");
        assert_eq!(names(&plan), ["S", "Twin", "Twin", "Other"]);
    }

    #[rstest]
    fn repeated_start_name_opens_the_route_with_every_namesake() {
        let locations = problem(&[
            ("A", 0.0, 0.0, 0),
            ("B", 1.0, 0.0, 0),
            ("C", 2.0, 0.0, 0),
            ("A", 9.0, 9.0, 2),
        ]);
        let plan = GreedyPlanner::default()
            .plan(&locations, "A")
            .expect("plan succeeds");
        // The walk continues from the last seeded record at (9, 9).
        assert_eq!(names(&plan), ["A", "A", "C", "B"]);
    }

    /// Nineteen first-day stops along the x axis, then a second day holding
    /// a namesake of `D5` and one fresh stop.
    fn day_two_namesake() -> Locations {
        let mut locations: Locations = (0..=DAY_QUOTA)
            .map(|i| {
                let x = f64::from(u32::try_from(i).expect("small index"));
                location(&format!("D{i}"), x, 0.0, 0, i)
            })
            .collect();
        locations.insert(location("D5", 20.0, 0.0, 1, DAY_QUOTA + 1));
        locations.insert(location("E", 21.0, 0.0, 1, DAY_QUOTA + 2));
        locations
    }

    #[rstest]
    #[case(StopIdentity::Name, &["D17", "E"])]
    #[case(StopIdentity::Record, &["D17", "D5", "E"])]
    fn opened_pool_is_filtered_by_identity(
        #[case] identity: StopIdentity,
        #[case] tail: &[&str],
    ) {
        let locations = day_two_namesake();
        let plan = GreedyPlanner::with_identity(identity)
            .plan(&locations, "D0")
            .expect("plan succeeds");
        let visited = names(&plan);

        assert_eq!(visited.len(), DAY_QUOTA - 1 + tail.len());
        assert_eq!(visited.get(DAY_QUOTA - 1..), Some(tail));
        assert!(!visited.contains(&"D18"), "leftover first-day stop is dropped");
    }

    #[rstest]
    fn record_identity_visits_namesakes() {
        let locations = problem(&[
            ("S", 0.0, 0.0, 0),
            ("Twin", 1.0, 0.0, 0),
            ("Twin", 2.0, 0.0, 0),
            ("Other", 3.0, 0.0, 0),
        ]);
        let plan = GreedyPlanner::with_identity(StopIdentity::Record)
            .plan(&locations, "S")
            .expect("plan succeeds");
        assert_eq!(names(&plan), ["S", "Twin", "Twin", "Other"]);
    }

    #[rstest]
    fn advances_through_all_days_at_quota() {
        // Twenty stops per day, so each window closes before its pool runs dry.
        let locations = grid(60, 6);
        let plan = GreedyPlanner::default()
            .plan(&locations, "S0")
            .expect("plan succeeds");

        assert_eq!(plan.route.len(), 1 + (DAY_QUOTA - 1) + DAY_QUOTA + 20);
        for (position, stop) in plan.route.stops().iter().enumerate().skip(1) {
            assert_eq!(stop.day, Day::open_for(position), "stop {position}");
        }
    }

    #[rstest]
    fn full_first_pool_ends_before_advancing() {
        let locations = grid(DAY_QUOTA * 3, 6);
        let plan = GreedyPlanner::default()
            .plan(&locations, "S0")
            .expect("plan succeeds");

        assert_eq!(plan.route.len(), DAY_QUOTA);
        assert!(plan.route.stops().iter().all(|stop| stop.day == Day::First));
    }

    #[rstest]
    fn exhausted_next_pool_ends_route() {
        // The second day's only stop is the start, so opening it yields nothing.
        let mut locations: Locations = (0..DAY_QUOTA + 2)
            .map(|i| {
                let x = f64::from(u32::try_from(i).expect("small index"));
                location(&format!("D{i}"), x, 0.0, 0, i)
            })
            .collect();
        locations.insert(location("Start", -1.0, 0.0, 1, DAY_QUOTA + 2));

        let plan = GreedyPlanner::default()
            .plan(&locations, "Start")
            .expect("plan succeeds");

        assert_eq!(plan.route.len(), DAY_QUOTA);
    }

    #[rstest]
    fn unknown_start_is_reported() {
        let locations = problem(&[("A", 0.0, 0.0, 0), ("B", 1.0, 0.0, 0)]);
        let err = GreedyPlanner::default()
            .plan(&locations, "Q")
            .expect_err("unknown start");
        assert!(matches!(err, PlanError::Lookup(_)));
    }
}
