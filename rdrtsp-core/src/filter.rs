//! Set difference over stops.

use std::borrow::Borrow;

use crate::Location;

/// How two records are judged to be the same stop when filtering.
///
/// `Name` merges records that share a name, so removing one removes every
/// record with that name. `Record` keeps same-named records distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StopIdentity {
    /// Records with equal names are the same stop.
    #[default]
    Name,
    /// Records are the same stop only if name and record index match.
    Record,
}

impl StopIdentity {
    /// Whether `a` and `b` denote the same stop.
    #[must_use]
    pub fn same(self, a: &Location, b: &Location) -> bool {
        match self {
            Self::Name => a.name == b.name,
            Self::Record => a.record == b.record && a.name == b.name,
        }
    }

    /// Records of `from`, in order, that match nothing in `remove`.
    ///
    /// Quadratic in the input sizes; pools are small.
    pub fn filter<'a, R, I>(self, remove: &[R], from: I) -> Vec<&'a Location>
    where
        R: Borrow<Location>,
        I: IntoIterator<Item = &'a Location>,
    {
        from.into_iter()
            .filter(|candidate| {
                !remove
                    .iter()
                    .any(|removed| self.same(removed.borrow(), candidate))
            })
            .collect()
    }
}

/// Records of `from` whose names do not appear in `remove`, in order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, filter::filter_locations};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let pool = [
///     Location::new("A", origin, Day::First, 0),
///     Location::new("B", origin, Day::First, 1),
///     Location::new("A", origin, Day::First, 2),
/// ];
/// let visited = [Location::new("A", origin, Day::Second, 9)];
///
/// let left = filter_locations(&visited, &pool);
/// assert_eq!(left.len(), 1);
/// assert_eq!(left[0].name, "B");
/// ```
pub fn filter_locations<'a, R, I>(remove: &[R], from: I) -> Vec<&'a Location>
where
    R: Borrow<Location>,
    I: IntoIterator<Item = &'a Location>,
{
    StopIdentity::Name.filter(remove, from)
}
