//! Module: pagination
//! Responsibility: the resolved pagination request model and the rule that
//! turns raw argument quads into at most one direction.
//! Does not own: cursor decoding internals or window computation.

use crate::cursor::{Cursor, CursorDecodeError};
use serde::{Deserialize, Serialize};

///
/// Pagination
///
/// A resolved pagination request: exactly one direction. Raw inputs that
/// carry both forward and backward fields resolve to forward; the backward
/// fields are ignored. That precedence is long-standing observable
/// behavior for API consumers and must not change silently.
///

#[derive(Clone, Debug, Eq, PartialEq, derive_more::From)]
pub enum Pagination {
    Forward(ForwardPagination),
    Backward(BackwardPagination),
}

impl Pagination {
    /// The zero value for pagination, providing no constraints.
    pub const ZERO: Self = Self::Forward(ForwardPagination {
        first: None,
        after: None,
    });

    /// Resolve raw inputs into at most one direction.
    ///
    /// Forward fields win over backward fields; when no field is present
    /// there is no pagination and callers take the unwindowed path.
    #[must_use]
    pub fn resolve(
        first: Option<usize>,
        after: Option<Cursor>,
        last: Option<usize>,
        before: Option<Cursor>,
    ) -> Option<Self> {
        if first.is_some() || after.is_some() {
            return Some(Self::Forward(ForwardPagination { first, after }));
        }

        if last.is_some() || before.is_some() {
            return Some(Self::Backward(BackwardPagination { last, before }));
        }

        None
    }
}

///
/// ForwardPagination
/// `first`/`after` bounds: page size plus an exclusive lower cursor.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ForwardPagination {
    pub first: Option<usize>,
    pub after: Option<Cursor>,
}

///
/// BackwardPagination
/// `last`/`before` bounds: page size plus an exclusive upper cursor.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BackwardPagination {
    pub last: Option<usize>,
    pub before: Option<Cursor>,
}

///
/// PageArguments
///
/// The raw GraphQL-style argument quad as it arrives on the wire, cursors
/// still encoded. `resolve` decodes the cursors first, so a malformed
/// cursor fails here and never reaches window computation.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageArguments {
    pub first: Option<usize>,
    pub after: Option<String>,
    pub last: Option<usize>,
    pub before: Option<String>,
}

impl PageArguments {
    /// Decode wire cursors and resolve the direction.
    pub fn resolve(&self) -> Result<Option<Pagination>, CursorDecodeError> {
        let after = self.after.as_deref().map(Cursor::decode).transpose()?;
        let before = self.before.as_deref().map(Cursor::decode).transpose()?;

        Ok(Pagination::resolve(self.first, after, self.last, before))
    }
}

///
/// TESTS
///
