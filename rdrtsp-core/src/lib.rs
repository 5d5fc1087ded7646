//! Core domain types for the rdrtsp route planner.
//!
//! A problem is a set of named stops partitioned into three day pools. The
//! planners in `rdrtsp-planner` order those stops into a [`Route`], opening
//! each day's pool once the route reaches the fixed [`DAY_QUOTA`].
//!
//! This crate holds the shared vocabulary: [`Location`], [`Day`],
//! [`Locations`], [`Route`], the [`Planner`] trait, the Manhattan
//! [`distance`] metric and name-based [`filter`]ing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod day;
pub mod distance;
pub mod filter;
mod location;
mod locations;
mod planner;
mod route;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use day::{DAY_COUNT, DAY_QUOTA, Day, DayError};
pub use filter::StopIdentity;
pub use location::Location;
pub use locations::{Locations, LookupError};
pub use planner::{Diagnostics, Plan, PlanError, Planner};
pub use route::Route;
