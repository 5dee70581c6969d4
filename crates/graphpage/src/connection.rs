//! Module: connection
//! Responsibility: connection output contracts (edges, page info) and the
//! builder that turns a node sequence plus a resolved request into them.
//! Does not own: window computation or cursor assignment rules.

use crate::{
    cursor::Cursor,
    pagination::{BackwardPagination, ForwardPagination, Pagination},
    window::{CursorKind, Cursorable, Window},
};
use serde::{Deserialize, Serialize};

///
/// PageInfo
///
/// Page metadata for connection output. Boundary cursors are `None`
/// exactly when the page has no edges.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

impl PageInfo {
    /// The zero value for page info.
    pub const ZERO: Self = Self {
        has_previous_page: false,
        has_next_page: false,
        start_cursor: None,
        end_cursor: None,
    };

    fn from_cursors(has_previous_page: bool, has_next_page: bool, cursors: &[Cursor]) -> Self {
        Self {
            has_previous_page,
            has_next_page,
            start_cursor: cursors.first().cloned(),
            end_cursor: cursors.last().cloned(),
        }
    }
}

///
/// Edge
/// A single paginated item: the node plus its cursor.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Edge<N> {
    pub cursor: Cursor,
    pub node: N,
}

///
/// Connection
/// The full paginated result: edges plus page metadata.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<E> {
    pub edges: Vec<E>,
    pub page_info: PageInfo,
}

///
/// EdgeBuilder
///
/// Turns a node sequence and an optional resolved request into connection
/// output. The caller-supplied constructor decides the edge shape, so
/// schema-specific edge types build without an intermediate copy.
///

pub struct EdgeBuilder<N, F> {
    nodes: Vec<N>,
    make_edge: F,
}

impl<N, F> EdgeBuilder<N, F> {
    #[must_use]
    pub const fn new(nodes: Vec<N>, make_edge: F) -> Self {
        Self { nodes, make_edge }
    }
}

impl<N: Cursorable, F> EdgeBuilder<N, F> {
    /// Build the connection.
    ///
    /// Without pagination every node is cursored and returned; page info
    /// carries the boundary cursors with both flags false. With
    /// pagination the window calculator decides the range and flags.
    #[must_use]
    pub fn build<E>(self, kind: CursorKind, pagination: Option<&Pagination>) -> Connection<E>
    where
        F: Fn(Cursor, N) -> E,
    {
        let Self { nodes, make_edge } = self;

        if nodes.is_empty() {
            return Connection {
                edges: Vec::new(),
                page_info: PageInfo::ZERO,
            };
        }

        match pagination {
            None => {
                let cursors: Vec<Cursor> = match kind {
                    CursorKind::Identifier => nodes.iter().map(Cursorable::cursor).collect(),
                    CursorKind::Index => (0..nodes.len()).map(Cursor::from_index).collect(),
                };

                let page_info = PageInfo::from_cursors(false, false, &cursors);
                let edges = cursors
                    .into_iter()
                    .zip(nodes)
                    .map(|(cursor, node)| make_edge(cursor, node))
                    .collect();

                Connection { edges, page_info }
            }
            Some(pagination) => {
                let window = Window::compute(&nodes, kind, Some(pagination));
                let (range, cursors, has_previous, has_next) = window.into_parts();

                let page_info = PageInfo::from_cursors(has_previous, has_next, &cursors);

                debug_assert_eq!(
                    range.len(),
                    cursors.len(),
                    "selected nodes and cursors must stay 1:1"
                );

                let edges = nodes
                    .into_iter()
                    .skip(range.start)
                    .take(range.len())
                    .zip(cursors)
                    .map(|(node, cursor)| make_edge(cursor, node))
                    .collect();

                Connection { edges, page_info }
            }
        }
    }
}

impl<N: Cursorable> Connection<Edge<N>> {
    /// Build a connection with the default edge shape.
    #[must_use]
    pub fn from_nodes(nodes: Vec<N>, kind: CursorKind, pagination: Option<&Pagination>) -> Self {
        EdgeBuilder::new(nodes, |cursor, node| Edge { cursor, node }).build(kind, pagination)
    }

    /// Build a forward-paginated connection.
    #[must_use]
    pub fn forward(nodes: Vec<N>, kind: CursorKind, forward: ForwardPagination) -> Self {
        Self::from_nodes(nodes, kind, Some(&Pagination::Forward(forward)))
    }

    /// Build a backward-paginated connection.
    #[must_use]
    pub fn backward(nodes: Vec<N>, kind: CursorKind, backward: BackwardPagination) -> Self {
        Self::from_nodes(nodes, kind, Some(&Pagination::Backward(backward)))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{Connection, Edge, EdgeBuilder, PageInfo};
    use crate::{
        cursor::Cursor,
        pagination::{BackwardPagination, ForwardPagination},
        window::{CursorKind, Cursorable},
    };
    use serde::Serialize;

    #[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
    struct TestNode {
        id: &'static str,
    }

    impl Cursorable for TestNode {
        fn cursor(&self) -> Cursor {
            Cursor::from_key(self.id)
        }
    }

    const A: TestNode = TestNode { id: "a" };
    const B: TestNode = TestNode { id: "b" };
    const C: TestNode = TestNode { id: "c" };
    const D: TestNode = TestNode { id: "d" };
    const E: TestNode = TestNode { id: "e" };

    fn edge(key: &str, node: TestNode) -> Edge<TestNode> {
        Edge {
            cursor: Cursor::from_key(key),
            node,
        }
    }

    fn page_info(
        has_previous_page: bool,
        has_next_page: bool,
        start: Option<&str>,
        end: Option<&str>,
    ) -> PageInfo {
        PageInfo {
            has_previous_page,
            has_next_page,
            start_cursor: start.map(Cursor::from_key),
            end_cursor: end.map(Cursor::from_key),
        }
    }

    #[test]
    fn unpaginated_identifier_connection_carries_boundary_cursors() {
        let connection = Connection::from_nodes(vec![A, B, C], CursorKind::Identifier, None);

        assert_eq!(
            connection,
            Connection {
                edges: vec![edge("a", A), edge("b", B), edge("c", C)],
                page_info: page_info(false, false, Some("a"), Some("c")),
            }
        );
    }

    #[test]
    fn unpaginated_index_connection_numbers_from_zero() {
        let connection = Connection::from_nodes(vec![A, B, C], CursorKind::Index, None);

        assert_eq!(
            connection,
            Connection {
                edges: vec![edge("0", A), edge("1", B), edge("2", C)],
                page_info: page_info(false, false, Some("0"), Some("2")),
            }
        );
    }

    #[test]
    fn empty_nodes_yield_zero_page_info() {
        let connection = Connection::from_nodes(Vec::<TestNode>::new(), CursorKind::Identifier, None);

        assert_eq!(
            connection,
            Connection {
                edges: vec![],
                page_info: PageInfo::ZERO,
            }
        );

        let windowed = Connection::forward(
            Vec::<TestNode>::new(),
            CursorKind::Identifier,
            ForwardPagination {
                first: Some(3),
                after: None,
            },
        );
        assert_eq!(windowed.page_info, PageInfo::ZERO);
    }

    #[test]
    fn forward_connection_windows_nodes_and_flags_both_sides() {
        let connection = Connection::forward(
            vec![A, B, C, D, E],
            CursorKind::Identifier,
            ForwardPagination {
                first: Some(3),
                after: Some(Cursor::from_key("a")),
            },
        );

        assert_eq!(
            connection,
            Connection {
                edges: vec![edge("b", B), edge("c", C), edge("d", D)],
                page_info: page_info(true, true, Some("b"), Some("d")),
            }
        );
    }

    #[test]
    fn backward_connection_windows_nodes_and_flags_both_sides() {
        let connection = Connection::backward(
            vec![A, B, C, D, E],
            CursorKind::Identifier,
            BackwardPagination {
                last: Some(3),
                before: Some(Cursor::from_key("e")),
            },
        );

        assert_eq!(
            connection,
            Connection {
                edges: vec![edge("b", B), edge("c", C), edge("d", D)],
                page_info: page_info(true, true, Some("b"), Some("d")),
            }
        );
    }

    #[test]
    fn builder_feeds_the_custom_edge_constructor() {
        #[derive(Debug, Eq, PartialEq)]
        struct LabeledEdge {
            label: String,
            cursor: Cursor,
        }

        let connection: Connection<LabeledEdge> = EdgeBuilder::new(vec![A, B], |cursor, node: TestNode| {
            LabeledEdge {
                label: format!("node-{}", node.id),
                cursor,
            }
        })
        .build(CursorKind::Identifier, None);

        assert_eq!(
            connection.edges,
            vec![
                LabeledEdge {
                    label: "node-a".to_string(),
                    cursor: Cursor::from_key("a"),
                },
                LabeledEdge {
                    label: "node-b".to_string(),
                    cursor: Cursor::from_key("b"),
                },
            ]
        );
    }

    #[test]
    fn wire_shape_uses_camel_case_and_encoded_cursors() {
        let connection = Connection::forward(
            vec![A, B, C],
            CursorKind::Identifier,
            ForwardPagination {
                first: Some(2),
                after: None,
            },
        );

        let wire = serde_json::to_value(&connection).expect("connection should serialize");
        assert_eq!(
            wire,
            serde_json::json!({
                "edges": [
                    { "cursor": "YQ==", "node": { "id": "a" } },
                    { "cursor": "Yg==", "node": { "id": "b" } },
                ],
                "pageInfo": {
                    "hasPreviousPage": false,
                    "hasNextPage": true,
                    "startCursor": "YQ==",
                    "endCursor": "Yg==",
                },
            })
        );
    }
}
