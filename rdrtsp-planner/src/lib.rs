//! Route planners for rdrtsp.
//!
//! Two strategies implement [`Planner`](rdrtsp_core::Planner):
//!
//! - [`GreedyPlanner`] repeatedly visits the nearest remaining stop. It is
//!   fast and carries no optimality guarantee.
//! - [`ExhaustivePlanner`] enumerates every visiting order with
//!   branch-and-bound, returning a minimal-cost route. Its running time is
//!   factorial in the size of each day window.
//!
//! Both share the seeding and day-advance behaviour in [`window`]: the route
//! starts at the requested stop with the first day's pool as candidates, and
//! each time the route length reaches a multiple of
//! [`DAY_QUOTA`](rdrtsp_core::DAY_QUOTA) the candidates are replaced by the
//! next day's pool minus every stop already visited.

#![forbid(unsafe_code)]

mod exhaustive;
mod greedy;
pub mod window;

pub use exhaustive::{BoundPolicy, ExhaustiveConfig, ExhaustivePlanner};
pub use greedy::GreedyPlanner;
