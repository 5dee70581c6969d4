//! Cursor-connection pagination windows for GraphQL-style APIs: resolve
//! `first`/`after` and `last`/`before` arguments into one direction,
//! compute the page window over an already-fetched node sequence, and
//! emit edges plus page info.
//!
//! The library never fetches anything. Callers hand it an ordered slice
//! (usually over-fetched by a row or two via [`offset::OffsetPagination`])
//! and get back the exact page, per-node cursors, and adjacent-page flags
//! derived from that slice alone.
#![warn(unreachable_pub)]

pub mod connection;
pub mod cursor;
pub mod offset;
pub mod pagination;
pub mod window;


///
/// Prelude
///
/// Prelude contains the request/response vocabulary and the builder
/// entry points. Nothing internal is re-exported here.
///

pub mod prelude {
    pub use crate::{
        connection::{Connection, Edge, EdgeBuilder, PageInfo},
        cursor::{Cursor, CursorDecodeError},
        offset::OffsetPagination,
        pagination::{BackwardPagination, ForwardPagination, PageArguments, Pagination},
        window::{CursorKind, Cursorable, Window},
    };
}
