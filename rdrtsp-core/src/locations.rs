//! Loaded stops partitioned into day pools and indexed by name.

use std::collections::HashMap;

use thiserror::Error;

use crate::{DAY_COUNT, Day, Location};

/// Errors returned by [`Locations::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No record carries the requested name.
    #[error("no location named {name:?}")]
    UnknownName {
        /// Requested name.
        name: String,
    },
}

/// The planning problem: three ordered day pools plus a name index.
///
/// Records keep their insertion order inside each pool. Names may repeat;
/// the index keeps every record sharing a name, in insertion order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, Locations};
///
/// let locations: Locations = [
///     Location::new("A", Coord { x: 0.0, y: 0.0 }, Day::First, 0),
///     Location::new("B", Coord { x: 1.0, y: 0.0 }, Day::First, 1),
///     Location::new("C", Coord { x: 5.0, y: 5.0 }, Day::Second, 2),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(locations.pool(Day::First).len(), 2);
/// assert_eq!(locations.pool(Day::Second).len(), 1);
/// assert_eq!(locations.lookup("C")?.day, Day::Second);
/// # Ok::<(), rdrtsp_core::LookupError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locations {
    pools: [Vec<Location>; DAY_COUNT],
    by_name: HashMap<String, Vec<Location>>,
}

impl Locations {
    /// Construct an empty problem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its day pool and the name index.
    pub fn insert(&mut self, location: Location) {
        self.by_name
            .entry(location.name.clone())
            .or_default()
            .push(location.clone());
        self.pool_mut(location.day).push(location);
    }

    /// Records belonging to `day`, in insertion order.
    #[must_use]
    pub fn pool(&self, day: Day) -> &[Location] {
        let [first, second, third] = &self.pools;
        match day {
            Day::First => first.as_slice(),
            Day::Second => second.as_slice(),
            Day::Third => third.as_slice(),
        }
    }

    fn pool_mut(&mut self, day: Day) -> &mut Vec<Location> {
        let [first, second, third] = &mut self.pools;
        match day {
            Day::First => first,
            Day::Second => second,
            Day::Third => third,
        }
    }

    /// Every record sharing `name`; empty when the name is unknown.
    #[must_use]
    pub fn named(&self, name: &str) -> &[Location] {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First record carrying `name`.
    ///
    /// Duplicate names resolve to the earliest record.
    pub fn lookup(&self, name: &str) -> Result<&Location, LookupError> {
        self.named(name)
            .first()
            .ok_or_else(|| LookupError::UnknownName {
                name: name.to_owned(),
            })
    }

    /// Number of distinct names.
    #[must_use]
    pub fn unique_names(&self) -> usize {
        self.by_name.len()
    }

    /// Total number of records across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Whether no records were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(Vec::is_empty)
    }

    /// Iterate all records, pool by pool.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.pools.iter().flatten()
    }
}

impl FromIterator<Location> for Locations {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut locations = Self::new();
        locations.extend(iter);
        locations
    }
}

impl Extend<Location> for Locations {
    fn extend<I: IntoIterator<Item = Location>>(&mut self, iter: I) {
        for location in iter {
            self.insert(location);
        }
    }
}
