use crate::math::Point;

/// Classifies how a node participates in its segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// An on-curve point reached by a straight line.
    Line,
    /// An on-curve point terminating a cubic curve segment.
    Curve,
    /// A cubic control point; does not lie on the rendered outline.
    OffCurve,
}

impl NodeKind {
    #[inline]
    pub fn is_off_curve(self) -> bool {
        self == NodeKind::OffCurve
    }

    #[inline]
    pub fn is_on_curve(self) -> bool {
        !self.is_off_curve()
    }
}

/// Tangency constraint between the two segments meeting at an on-curve
/// node.
///
/// Only meaningful on on-curve nodes; renderers ignore it on control
/// points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Connection {
    /// No constraint between the adjacent segments.
    Sharp,
    /// The adjacent segments share a tangent at this node.
    Smooth,
}

/// A single point of an outline path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Node {
    pub position: Point,
    pub kind: NodeKind,
    pub connection: Connection,
}

impl Node {
    /// An on-curve line node with a sharp connection.
    #[inline]
    pub fn line(position: Point) -> Self {
        Node {
            position,
            kind: NodeKind::Line,
            connection: Connection::Sharp,
        }
    }

    /// An on-curve node terminating a curve segment.
    #[inline]
    pub fn curve(position: Point) -> Self {
        Node {
            position,
            kind: NodeKind::Curve,
            connection: Connection::Sharp,
        }
    }

    /// A cubic control point.
    #[inline]
    pub fn off_curve(position: Point) -> Self {
        Node {
            position,
            kind: NodeKind::OffCurve,
            connection: Connection::Sharp,
        }
    }

    /// This node with a smooth connection.
    #[inline]
    pub fn smooth(mut self) -> Self {
        self.connection = Connection::Smooth;
        self
    }

    /// A copy of this node forced to line kind, keeping its position and
    /// connection.
    #[inline]
    pub fn to_line(&self) -> Self {
        Node {
            kind: NodeKind::Line,
            ..*self
        }
    }
}
