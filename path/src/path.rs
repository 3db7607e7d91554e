//! The default node-stream path data structure.

use crate::math::Point;
use crate::node::{Connection, Node};

/// An outline path: an ordered, circular sequence of nodes.
///
/// Node order is geometrically meaningful (sequential winding) and
/// indices wrap modulo the node count. Outline paths submitted by a
/// host are always closed; the `closed` flag exists so that malformed
/// input can be rejected instead of silently repaired.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    nodes: Vec<Node>,
    closed: bool,
}

impl Path {
    /// Creates an empty open path.
    pub fn new() -> Self {
        Path {
            nodes: Vec::new(),
            closed: false,
        }
    }

    /// Creates a [`Builder`] for a closed path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn from_nodes(nodes: Vec<Node>, closed: bool) -> Self {
        Path { nodes, closed }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// The node at `index` modulo the node count.
    ///
    /// The path must not be empty.
    #[inline]
    pub fn wrapped(&self, index: usize) -> &Node {
        &self.nodes[index % self.nodes.len()]
    }

    /// The node preceding `index` in circular order.
    ///
    /// The path must not be empty.
    #[inline]
    pub fn before(&self, index: usize) -> &Node {
        let n = self.nodes.len();
        &self.nodes[(index + n - 1) % n]
    }

    pub fn iter(&self) -> std::slice::Iter<Node> {
        self.nodes.iter()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l Node;
    type IntoIter = std::slice::Iter<'l, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a closed path node by node.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    nodes: Vec<Node>,
}

impl Builder {
    pub fn new() -> Self {
        Builder { nodes: Vec::new() }
    }

    /// Adds an on-curve line node.
    pub fn line_to(&mut self, to: Point) {
        self.nodes.push(Node::line(to));
    }

    /// Adds a cubic segment: two control points and its on-curve endpoint.
    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.nodes.push(Node::off_curve(ctrl1));
        self.nodes.push(Node::off_curve(ctrl2));
        self.nodes.push(Node::curve(to));
    }

    /// Marks the most recently added node as smooth.
    pub fn smooth(&mut self) {
        if let Some(last) = self.nodes.last_mut() {
            last.connection = Connection::Smooth;
        }
    }

    /// Finishes the path, closing it.
    pub fn close(self) -> Path {
        Path {
            nodes: self.nodes,
            closed: true,
        }
    }
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::node::NodeKind;

#[test]
fn builder_node_stream() {
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.curve_to(point(1.0, 0.0), point(2.0, 1.0), point(2.0, 2.0));
    builder.smooth();
    builder.line_to(point(0.0, 2.0));
    let path = builder.close();

    assert!(path.is_closed());
    assert_eq!(path.len(), 5);

    let kinds: Vec<NodeKind> = path.iter().map(|node| node.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Line,
            NodeKind::OffCurve,
            NodeKind::OffCurve,
            NodeKind::Curve,
            NodeKind::Line,
        ]
    );

    assert_eq!(path.nodes()[3].connection, Connection::Smooth);
    assert_eq!(path.nodes()[4].connection, Connection::Sharp);
}

#[test]
fn circular_indexing() {
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    let path = builder.close();

    assert_eq!(path.wrapped(3).position, point(0.0, 0.0));
    assert_eq!(path.wrapped(4).position, point(1.0, 0.0));
    assert_eq!(path.before(0).position, point(1.0, 1.0));
    assert_eq!(path.before(2).position, point(1.0, 0.0));
}
