//! Module: window
//! Responsibility: the bounded window computation: which contiguous
//! sub-range of a supplied node sequence forms the current page, the
//! cursor each selected node gets, and whether unselected nodes remain on
//! either side.
//! Does not own: edge construction, wire encoding, or data fetching.

use crate::{
    cursor::Cursor,
    pagination::{BackwardPagination, ForwardPagination, Pagination},
};
use std::ops::Range;

///
/// CursorKind
///
/// Describes how cursors are assigned to a node sequence.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CursorKind {
    /// Each node supplies its own domain key via [`Cursorable`].
    #[default]
    Identifier,
    /// Cursors are sequence positions. The zero point follows the
    /// request's cursor bound, not the slice: the slice is assumed to be
    /// fetched from the position that bound implies.
    Index,
}

///
/// Cursorable
/// Domain key supplier for identifier cursors.
///

pub trait Cursorable {
    fn cursor(&self) -> Cursor;
}

///
/// Window
///
/// The computed page: a contiguous sub-range of the supplied sequence,
/// the cursors selected with it (1:1 with the selected nodes), and the
/// adjacent-page flags. Flags are relative to the supplied slice only;
/// callers relying on them over-fetch so that boundary rows are present.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Window<'a, N> {
    range: Range<usize>,
    nodes: &'a [N],
    cursors: Vec<Cursor>,
    has_previous: bool,
    has_next: bool,
}

impl<'a, N: Cursorable> Window<'a, N> {
    /// Compute the window for `nodes` under an optional resolved request.
    ///
    /// Absent pagination behaves as forward pagination with no bounds:
    /// everything is selected and both flags are false.
    #[must_use]
    pub fn compute(nodes: &'a [N], kind: CursorKind, pagination: Option<&Pagination>) -> Self {
        let mut assigned = assign_cursors(nodes, kind, pagination);
        let (range, has_previous, has_next) = bounds(&assigned, pagination);
        let cursors: Vec<Cursor> = assigned.drain(range.clone()).collect();

        Self {
            nodes: &nodes[range.clone()],
            range,
            cursors,
            has_previous,
            has_next,
        }
    }

    /// Compute a forward window.
    #[must_use]
    pub fn forward(nodes: &'a [N], kind: CursorKind, forward: &ForwardPagination) -> Self {
        Self::compute(
            nodes,
            kind,
            Some(&Pagination::Forward(forward.clone())),
        )
    }

    /// Compute a backward window.
    #[must_use]
    pub fn backward(nodes: &'a [N], kind: CursorKind, backward: &BackwardPagination) -> Self {
        Self::compute(
            nodes,
            kind,
            Some(&Pagination::Backward(backward.clone())),
        )
    }
}

impl<'a, N> Window<'a, N> {
    /// The selected sub-range of the supplied sequence.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The selected nodes, in sequence order.
    #[must_use]
    pub const fn nodes(&self) -> &'a [N] {
        self.nodes
    }

    /// The selected cursors, 1:1 with [`Self::nodes`].
    #[must_use]
    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    /// Whether unselected nodes precede the range within the slice.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Whether unselected nodes follow the range within the slice.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Consume the window and release the node borrow.
    #[must_use]
    pub fn into_parts(self) -> (Range<usize>, Vec<Cursor>, bool, bool) {
        (self.range, self.cursors, self.has_previous, self.has_next)
    }
}

/// Assign one cursor per input node, before any range is cut.
fn assign_cursors<N: Cursorable>(
    nodes: &[N],
    kind: CursorKind,
    pagination: Option<&Pagination>,
) -> Vec<Cursor> {
    match kind {
        CursorKind::Identifier => nodes.iter().map(Cursorable::cursor).collect(),
        CursorKind::Index => {
            let base = index_base(pagination);

            (0..nodes.len())
                .map(|position| Cursor::from_index(base.saturating_add(position)))
                .collect()
        }
    }
}

// Zero point for index cursors. Forward from `after = k` numbers the slice
// from `k` (the `after` row is the slice head, so the first selected
// cursor is `k + 1`); backward from `before = k` with `last = m` numbers
// it from `max(0, k - 1 - m)` so numbering ends just before `before`.
fn index_base(pagination: Option<&Pagination>) -> usize {
    match pagination {
        Some(Pagination::Forward(forward)) => forward
            .after
            .as_ref()
            .and_then(Cursor::as_index)
            .unwrap_or(0),
        Some(Pagination::Backward(backward)) => {
            match (backward.before.as_ref().and_then(Cursor::as_index), backward.last) {
                (Some(before), Some(last)) => before.saturating_sub(last.saturating_add(1)),
                _ => 0,
            }
        }
        None => 0,
    }
}

/// Cut the selected range and derive the adjacent-page flags.
///
/// A cursor bound that matches nothing degrades to the sequence boundary
/// on its side: stale cursors are expected as data mutates between
/// requests and must not fail the page.
fn bounds(cursors: &[Cursor], pagination: Option<&Pagination>) -> (Range<usize>, bool, bool) {
    let len = cursors.len();

    let range = match pagination {
        Some(Pagination::Forward(forward)) => {
            let start = forward
                .after
                .as_ref()
                .and_then(|after| cursors.iter().position(|cursor| cursor == after))
                .map_or(0, |found| found + 1);

            let end = forward
                .first
                .map_or(len, |first| start.saturating_add(first).min(len));

            start..end
        }
        Some(Pagination::Backward(backward)) => {
            let end = backward
                .before
                .as_ref()
                .and_then(|before| cursors.iter().rposition(|cursor| cursor == before))
                .unwrap_or(len);

            let start = backward.last.map_or(0, |last| end.saturating_sub(last));

            start..end
        }
        None => 0..len,
    };

    let has_previous = range.start > 0;
    let has_next = range.end < len;

    (range, has_previous, has_next)
}

///
/// TESTS
///
