//! Translation between logical indices, virtual positions and absolute slots.
//!
//! None of these functions touch a Block. They only do arithmetic on the cursor pair and the
//! capacity, which keeps the wraparound rules in one place.

use std::ops::{Bound, Range, RangeBounds};

use crate::util::error::RangeOutOfBounds;

/// Folds a position that has run at most one lap past the end of a Block back into it.
pub(crate) const fn wrap(pos: usize, cap: usize) -> usize {
    debug_assert!(pos < cap || pos - cap < cap || pos == 0);
    if pos >= cap { pos - cap } else { pos }
}

/// Steps an absolute slot `by` slots towards the start of the Block, wrapping past slot 0.
///
/// `by` must be no greater than `cap`.
pub(crate) const fn wrap_back(pos: usize, by: usize, cap: usize) -> usize {
    debug_assert!(by <= cap);
    wrap(pos + (cap - by), cap)
}

/// Maps an absolute slot back to the logical index it holds for a ring starting at `tail`.
pub(crate) const fn to_logical(abs: usize, tail: usize, cap: usize) -> usize {
    if abs >= tail { abs - tail } else { abs + cap - tail }
}

/// The absolute slots that a run of logical indices occupies. At most two contiguous runs are
/// needed: the primary one, starting somewhere after `tail`, and the wrapped one that continues
/// from slot 0 once the primary run hits the end of the Block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitRange {
    pub primary: Range<usize>,
    pub wrapped: Range<usize>,
}

impl SplitRange {
    /// Splits the `count` logical indices starting at `start` for a ring whose first element is
    /// at absolute slot `tail`.
    pub const fn new(tail: usize, cap: usize, start: usize, count: usize) -> SplitRange {
        let first = tail + start;

        if count == 0 {
            SplitRange {
                primary: 0..0,
                wrapped: 0..0,
            }
        } else if first >= cap {
            // The whole run lies past the wrap point.
            let first = first - cap;
            SplitRange {
                primary: cap..cap,
                wrapped: first..first + count,
            }
        } else if first + count <= cap {
            SplitRange {
                primary: first..first + count,
                wrapped: 0..0,
            }
        } else {
            SplitRange {
                primary: first..cap,
                wrapped: 0..first + count - cap,
            }
        }
    }

    pub const fn len(&self) -> usize {
        (self.primary.end - self.primary.start) + (self.wrapped.end - self.wrapped.start)
    }
}

/// Resolves any range expression against a collection of `len` elements.
pub(crate) fn check_range<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, RangeOutOfBounds> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => Err(RangeOutOfBounds {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(3, 8), 3);
        assert_eq!(wrap(8, 8), 0);
        assert_eq!(wrap(13, 8), 5);
        assert_eq!(wrap(0, 0), 0);
        assert_eq!(wrap_back(0, 1, 8), 7);
        assert_eq!(wrap_back(5, 2, 8), 3);
        assert_eq!(wrap_back(2, 8, 8), 2);
    }

    #[test]
    fn test_to_logical_inverts_wrap() {
        let (tail, cap) = (5, 8);
        for i in 0..cap {
            assert_eq!(
                to_logical(wrap(tail + i, cap), tail, cap), i,
                "Logical index {i} should survive a round trip through its absolute slot."
            );
        }
    }

    #[test]
    fn test_split_range() {
        assert_eq!(
            SplitRange::new(2, 8, 1, 4),
            SplitRange { primary: 3..7, wrapped: 0..0 },
            "A run that ends before the end of the Block shouldn't wrap."
        );
        assert_eq!(
            SplitRange::new(6, 8, 0, 5),
            SplitRange { primary: 6..8, wrapped: 0..3 },
            "A run crossing the end of the Block should be split in two."
        );
        assert_eq!(
            SplitRange::new(6, 8, 3, 2),
            SplitRange { primary: 8..8, wrapped: 1..3 },
            "A run starting past the wrap point should be entirely wrapped."
        );
        assert_eq!(SplitRange::new(6, 8, 0, 0).len(), 0);
        assert_eq!(SplitRange::new(6, 8, 1, 7).len(), 7);
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(.., 5), Ok(0..5));
        assert_eq!(check_range(1..=3, 5), Ok(1..4));
        assert_eq!(check_range(5.., 5), Ok(5..5));
        assert_eq!(
            check_range(2..6, 5),
            Err(RangeOutOfBounds { start: 2, end: 6, len: 5 })
        );
        let (start, end) = (4, 2);
        assert!(check_range(start..end, 5).is_err(), "Reversed ranges should be rejected.");
        assert!(check_range(..=usize::MAX, 5).is_err());
    }
}
