//! Module: offset
//! Responsibility: converting a resolved pagination request into the
//! offset/count pair positional data sources understand.
//! Does not own: boundary-flag truth; the window calculator re-derives
//! flags from whatever rows the fetch actually returns.

use crate::{
    cursor::Cursor,
    pagination::{BackwardPagination, ForwardPagination, Pagination},
};
use serde::{Deserialize, Serialize};

///
/// OffsetPagination
///
/// Positional fetch request. `offset = None` means "from the start";
/// `count = None` means no limit. Counts over-fetch on purpose so that
/// boundary rows land in the slice: forward requests fetch `first + 1`
/// (the `after` row is the slice head), backward requests with both
/// bounds fetch `last + 2` because the clamped start can be short by one
/// on either side. A cursor bound that does not parse as a position
/// behaves as absent here.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OffsetPagination {
    pub offset: Option<usize>,
    pub count: Option<usize>,
}

impl OffsetPagination {
    /// Convert an optional resolved request into a positional fetch.
    #[must_use]
    pub fn from_request(pagination: Option<&Pagination>) -> Self {
        pagination.map_or_else(Self::default, Self::from)
    }
}

impl From<&Pagination> for OffsetPagination {
    fn from(pagination: &Pagination) -> Self {
        match pagination {
            Pagination::Forward(forward) => Self::from(forward),
            Pagination::Backward(backward) => Self::from(backward),
        }
    }
}

impl From<&ForwardPagination> for OffsetPagination {
    fn from(forward: &ForwardPagination) -> Self {
        Self {
            offset: forward.after.as_ref().and_then(Cursor::as_index),
            count: forward.first.map(|first| first.saturating_add(1)),
        }
    }
}

impl From<&BackwardPagination> for OffsetPagination {
    fn from(backward: &BackwardPagination) -> Self {
        match (backward.before.as_ref().and_then(Cursor::as_index), backward.last) {
            (Some(before), Some(last)) => Self {
                offset: Some(before.saturating_sub(last.saturating_add(1))),
                count: Some(last.saturating_add(2)),
            },
            (Some(before), None) => Self {
                offset: Some(0),
                count: Some(before.saturating_add(1)),
            },
            (None, Some(last)) => Self {
                offset: None,
                count: Some(last.saturating_add(1)),
            },
            (None, None) => Self {
                offset: None,
                count: None,
            },
        }
    }
}

///
/// TESTS
///
