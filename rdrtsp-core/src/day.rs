//! Day partitions and the quota rule that opens them.

use std::fmt;

use thiserror::Error;

/// Number of day partitions in a planning problem.
pub const DAY_COUNT: usize = 3;

/// Stops a route must reach before the next day's pool opens.
pub const DAY_QUOTA: usize = 18;

/// One of the three day partitions a location belongs to.
///
/// Days are zero-indexed in input files and one-indexed when displayed.
///
/// # Examples
/// ```
/// use rdrtsp_core::Day;
///
/// let day = Day::try_from(1_i64)?;
/// assert_eq!(day, Day::Second);
/// assert_eq!(day.to_string(), "day 2");
/// assert_eq!(day.next(), Some(Day::Third));
/// # Ok::<(), rdrtsp_core::DayError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    /// Index 0.
    First,
    /// Index 1.
    Second,
    /// Index 2.
    Third,
}

/// Errors returned when converting an integer into a [`Day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DayError {
    /// The value is not one of 0, 1 or 2.
    #[error("day {value} is out of range (expected 0-2)")]
    OutOfRange {
        /// Rejected value.
        value: i64,
    },
}

impl Day {
    /// Every day in visiting order.
    pub const ALL: [Self; DAY_COUNT] = [Self::First, Self::Second, Self::Third];

    /// Zero-based index of the day.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// The following day, or `None` on the last day.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => None,
        }
    }

    /// Returns the day to open when a route holding `visited` stops is
    /// currently on `self`.
    ///
    /// The next pool opens once `visited / DAY_QUOTA` reaches the next day's
    /// index. The last day never advances.
    ///
    /// # Examples
    /// ```
    /// use rdrtsp_core::{DAY_QUOTA, Day};
    ///
    /// assert_eq!(Day::First.advance_for(DAY_QUOTA - 1), None);
    /// assert_eq!(Day::First.advance_for(DAY_QUOTA), Some(Day::Second));
    /// assert_eq!(Day::Third.advance_for(DAY_QUOTA * 10), None);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "the quota counts completed windows, remainders are discarded"
    )]
    pub fn advance_for(self, visited: usize) -> Option<Self> {
        let next = self.next()?;
        (visited / DAY_QUOTA >= next.index()).then_some(next)
    }

    /// Day open for the stop appended after `visited` stops, assuming the
    /// quota rule has been applied at every step from the first day.
    ///
    /// # Examples
    /// ```
    /// use rdrtsp_core::Day;
    ///
    /// assert_eq!(Day::open_for(1), Day::First);
    /// assert_eq!(Day::open_for(18), Day::Second);
    /// assert_eq!(Day::open_for(200), Day::Third);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "the quota counts completed windows, remainders are discarded"
    )]
    pub const fn open_for(visited: usize) -> Self {
        match visited / DAY_QUOTA {
            0 => Self::First,
            1 => Self::Second,
            _ => Self::Third,
        }
    }
}

impl TryFrom<i64> for Day {
    type Error = DayError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            2 => Ok(Self::Third),
            _ => Err(DayError::OutOfRange { value }),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Day::First)]
    #[case(1, Day::Second)]
    #[case(2, Day::Third)]
    fn converts_valid_indices(#[case] value: i64, #[case] expected: Day) {
        assert_eq!(Day::try_from(value), Ok(expected));
        assert_eq!(i64::try_from(expected.index()).ok(), Some(value));
    }

    #[rstest]
    #[case(-1)]
    #[case(3)]
    #[case(i64::MAX)]
    fn rejects_out_of_range(#[case] value: i64) {
        assert_eq!(Day::try_from(value), Err(DayError::OutOfRange { value }));
    }

    #[rstest]
    #[case(Day::First, 17, None)]
    #[case(Day::First, 18, Some(Day::Second))]
    #[case(Day::First, 36, Some(Day::Second))]
    #[case(Day::Second, 35, None)]
    #[case(Day::Second, 36, Some(Day::Third))]
    #[case(Day::Third, 54, None)]
    fn advance_follows_quota(
        #[case] day: Day,
        #[case] visited: usize,
        #[case] expected: Option<Day>,
    ) {
        assert_eq!(day.advance_for(visited), expected);
    }

    #[rstest]
    fn displays_one_based() {
        assert_eq!(Day::First.to_string(), "day 1");
        assert_eq!(Day::Third.to_string(), "day 3");
    }

    proptest! {
        #[test]
        fn stepwise_rule_matches_closed_form(length in 1_usize..200) {
            // Route prefixes grow by one stop per step and the rule runs
            // after every append, starting from the first day.
            let mut day = Day::First;
            for visited in 1..length {
                if let Some(next) = day.advance_for(visited) {
                    day = next;
                }
            }
            prop_assert_eq!(day, Day::open_for(length - 1));
        }
    }
}
