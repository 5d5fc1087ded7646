//! Facade crate for the rdrtsp day-partitioned route planner.
//!
//! This crate re-exports the core domain types and exposes the location
//! loader and the planners behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(all(feature = "loader", feature = "planner"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rdrtsp::{GreedyPlanner, Planner, read_locations};
//!
//! let locations = read_locations(b"A,0,0,0\nB,1,0,0\nC,5,5,1\n".as_slice())?;
//! let plan = GreedyPlanner::default().plan(&locations, "A")?;
//! assert_eq!(plan.route.names().collect::<Vec<_>>(), ["A", "B"]);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "loader", feature = "planner")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use rdrtsp_core::{
    DAY_COUNT, DAY_QUOTA, Day, DayError, Diagnostics, Location, Locations, LookupError, Plan,
    PlanError, Planner, Route, StopIdentity,
};

#[cfg(feature = "loader")]
pub use rdrtsp_data::{Field, LoadError, load_locations, read_locations};

#[cfg(feature = "planner")]
pub use rdrtsp_planner::{BoundPolicy, ExhaustiveConfig, ExhaustivePlanner, GreedyPlanner};
