use thiserror::Error;

use crate::{Day, Locations, LookupError, Route};

/// Search counters reported alongside a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Candidate extensions evaluated.
    pub branches_explored: u64,
    /// Extensions abandoned because they could not beat the running best.
    pub branches_pruned: u64,
}

/// Result of a successful plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// The visiting order, starting with the requested stop.
    pub route: Route,
    /// Search counters.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The search was entered without any candidate stops.
    #[error("no candidate locations remain on {day}")]
    EmptyOptions {
        /// Day whose pool was empty.
        day: Day,
    },
    /// The search finished without producing a complete route.
    #[error("no complete route from {start:?} was found")]
    NoRoute {
        /// Requested start name.
        start: String,
    },
    /// The start name is not present in the problem.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Order the stops of a problem into a route beginning at `start`.
///
/// The first day's pool seeds the candidates. Later pools open as the
/// route reaches each day's quota.
///
/// # Examples
/// ```rust
/// use rdrtsp_core::{Locations, Plan, PlanError, Planner, Route};
///
/// struct StartOnly;
///
/// impl Planner for StartOnly {
///     fn plan(&self, locations: &Locations, start: &str) -> Result<Plan, PlanError> {
///         let first = locations.lookup(start)?;
///         Ok(Plan {
///             route: Route::from_stops([first]),
///             diagnostics: Default::default(),
///         })
///     }
/// }
///
/// let err = StartOnly.plan(&Locations::new(), "nowhere").expect_err("unknown start");
/// assert!(matches!(err, PlanError::Lookup(_)));
/// ```
pub trait Planner {
    /// Plan a route from the first record named `start`.
    fn plan(&self, locations: &Locations, start: &str) -> Result<Plan, PlanError>;
}

impl<P: Planner + ?Sized> Planner for Box<P> {
    fn plan(&self, locations: &Locations, start: &str) -> Result<Plan, PlanError> {
        (**self).plan(locations, start)
    }
}
