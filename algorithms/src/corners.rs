//! Turns cubic curve segments into sharp corners.
//!
//! For each run of exactly two consecutive off-curve nodes, the tangent
//! lines at the segment's ends are extended and intersected. When they
//! meet, the two control points and the on-curve endpoint collapse into
//! a corner node followed by a line node; when they are parallel, or the
//! segment is not selected, the curve passes through unchanged.

use crate::geom::intersection;
use crate::path::{Node, NodeKind, Path, Selection};

use thiserror::Error;

/// A structural invariant violation in an input path.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum MalformedPath {
    #[error("path is not closed")]
    Open,
    #[error("path has {0} nodes, the corner lookahead needs at least 3")]
    TooFewNodes(usize),
    #[error("more than two consecutive off-curve nodes at index {0}")]
    OffCurveRun(usize),
}

/// Rewrites eligible curve segments of a closed path into sharp corners.
///
/// A segment is eligible when it is a standard cubic (two consecutive
/// off-curve nodes) and at least one of its control points is active
/// under `selection`. The synthesized corner node always has a sharp
/// connection; the segment's on-curve endpoint keeps its connection but
/// is forced to line kind. Everything else passes through unchanged,
/// including isolated off-curve nodes.
///
/// Returns a new path, always closed; the input is never mutated.
pub fn make_corners(path: &Path, selection: &Selection) -> Result<Path, MalformedPath> {
    validate(path)?;

    let nodes = path.nodes();
    let n = nodes.len();
    let mut output = Vec::with_capacity(n);

    for i in 0..n {
        let cur = &nodes[i];
        let prev = path.before(i);

        match cur.kind {
            NodeKind::OffCurve if !prev.kind.is_off_curve() => {
                let next = path.wrapped(i + 1);
                if next.kind.is_off_curve() {
                    let after = path.wrapped(i + 2);
                    // Either control point selected is enough.
                    let active = selection.is_active(i) || selection.is_active((i + 1) % n);
                    let corner = if active {
                        intersection(prev.position, cur.position, next.position, after.position)
                    } else {
                        None
                    };

                    match corner {
                        Some(position) => {
                            output.push(Node::line(position));
                            output.push(after.to_line());
                        }
                        None => {
                            output.push(*cur);
                            output.push(*next);
                            output.push(*after);
                        }
                    }
                } else {
                    // Isolated off-curve, tolerated: pass it through.
                    output.push(*cur);
                }
            }
            // Second off-curve of a run, already consumed at the
            // previous index.
            NodeKind::OffCurve => {}
            // Curve endpoints are only emitted by the lookahead above,
            // never by their own iteration.
            NodeKind::Curve => {}
            NodeKind::Line => {
                output.push(*cur);
            }
        }
    }

    Ok(Path::from_nodes(output, true))
}

fn validate(path: &Path) -> Result<(), MalformedPath> {
    if !path.is_closed() {
        return Err(MalformedPath::Open);
    }

    let n = path.len();
    if n < 3 {
        return Err(MalformedPath::TooFewNodes(n));
    }

    for i in 0..n {
        if path.wrapped(i).kind.is_off_curve()
            && path.wrapped(i + 1).kind.is_off_curve()
            && path.wrapped(i + 2).kind.is_off_curve()
        {
            return Err(MalformedPath::OffCurveRun(i));
        }
    }

    Ok(())
}

#[cfg(test)]
use crate::path::math::point;
#[cfg(test)]
use crate::path::Connection;

#[cfg(test)]
fn curved_corner_square() -> Path {
    // A 100x50 box whose top-right corner is a cubic segment with
    // horizontal and vertical tangents. The tangent lines meet at
    // (100, 0).
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.line_to(point(50.0, 0.0));
    builder.curve_to(point(75.0, 0.0), point(100.0, 25.0), point(100.0, 50.0));
    builder.smooth();
    builder.line_to(point(0.0, 50.0));
    builder.close()
}

#[test]
fn lines_only_unchanged() {
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.line_to(point(10.0, 10.0));
    builder.line_to(point(0.0, 10.0));
    let path = builder.close();

    let output = make_corners(&path, &Selection::All).unwrap();
    assert_eq!(output, path);

    // Idempotent: running it again changes nothing either.
    let again = make_corners(&output, &Selection::All).unwrap();
    assert_eq!(again, output);
}

#[test]
fn collapses_cubic_segment() {
    let path = curved_corner_square();
    let output = make_corners(&path, &Selection::All).unwrap();

    assert!(output.is_closed());
    assert_eq!(output.len(), path.len() - 1);

    let expected = [
        point(0.0, 0.0),
        point(50.0, 0.0),
        point(100.0, 0.0),
        point(100.0, 50.0),
        point(0.0, 50.0),
    ];
    for (node, position) in output.iter().zip(expected.iter()) {
        assert_eq!(node.kind, NodeKind::Line);
        assert_eq!(node.position, *position);
    }

    // The corner node is sharp, the former curve endpoint keeps its
    // smooth connection.
    assert_eq!(output.nodes()[2].connection, Connection::Sharp);
    assert_eq!(output.nodes()[3].connection, Connection::Smooth);
}

#[test]
fn parallel_tangents_preserved() {
    // Both tangent lines are horizontal: no intersection, the curve
    // stays a curve even though it is selected.
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.curve_to(point(20.0, 0.0), point(30.0, 10.0), point(40.0, 10.0));
    builder.line_to(point(0.0, 10.0));
    let path = builder.close();

    let output = make_corners(&path, &Selection::All).unwrap();
    assert_eq!(output, path);
}

#[test]
fn isolated_off_curve_passthrough() {
    let path = Path::from_nodes(
        vec![
            Node::line(point(0.0, 0.0)),
            Node::off_curve(point(5.0, 5.0)),
            Node::line(point(10.0, 0.0)),
        ],
        true,
    );

    let output = make_corners(&path, &Selection::All).unwrap();
    assert_eq!(output, path);
}

#[test]
fn selection_gates_rewrite() {
    let path = curved_corner_square();

    // Off-curve nodes sit at indices 2 and 3. A selection holding
    // neither leaves the segment alone.
    let inactive = Selection::from_indices(vec![0, 1]);
    let output = make_corners(&path, &inactive).unwrap();
    assert_eq!(output, path);

    let empty = Selection::from_indices(std::iter::empty());
    let output = make_corners(&path, &empty).unwrap();
    assert_eq!(output, path);

    // One selected control point is enough (OR, not AND).
    for index in &[2usize, 3] {
        let one = Selection::from_indices(vec![*index]);
        let output = make_corners(&path, &one).unwrap();
        assert_eq!(output.len(), path.len() - 1);
    }
}

#[test]
fn node_count_per_collapsed_segment() {
    // Two curved corners, both with intersecting tangents.
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.line_to(point(50.0, 0.0));
    builder.curve_to(point(75.0, 0.0), point(100.0, 25.0), point(100.0, 50.0));
    builder.curve_to(point(100.0, 75.0), point(75.0, 100.0), point(50.0, 100.0));
    builder.line_to(point(0.0, 100.0));
    let path = builder.close();

    let output = make_corners(&path, &Selection::All).unwrap();
    assert_eq!(output.len(), path.len() - 2);
    assert!(output.iter().all(|node| node.kind == NodeKind::Line));
}

#[test]
fn wrapping_lookahead() {
    // The curve endpoint is the first node of the path, so the
    // lookahead wraps around the end of the sequence.
    let path = Path::from_nodes(
        vec![
            Node::curve(point(100.0, 50.0)),
            Node::line(point(0.0, 50.0)),
            Node::line(point(0.0, 0.0)),
            Node::line(point(50.0, 0.0)),
            Node::off_curve(point(75.0, 0.0)),
            Node::off_curve(point(100.0, 25.0)),
        ],
        true,
    );

    let output = make_corners(&path, &Selection::All).unwrap();
    assert_eq!(output.len(), path.len() - 1);

    let positions: Vec<_> = output.iter().map(|node| node.position).collect();
    assert_eq!(
        positions,
        vec![
            point(0.0, 50.0),
            point(0.0, 0.0),
            point(50.0, 0.0),
            point(100.0, 0.0),
            point(100.0, 50.0),
        ]
    );
}

#[test]
fn malformed_paths_rejected() {
    let mut open = curved_corner_square();
    open.set_closed(false);
    assert_eq!(
        make_corners(&open, &Selection::All),
        Err(MalformedPath::Open)
    );

    let tiny = Path::from_nodes(
        vec![Node::line(point(0.0, 0.0)), Node::line(point(1.0, 0.0))],
        true,
    );
    assert_eq!(
        make_corners(&tiny, &Selection::All),
        Err(MalformedPath::TooFewNodes(2))
    );

    let run = Path::from_nodes(
        vec![
            Node::line(point(0.0, 0.0)),
            Node::off_curve(point(1.0, 0.0)),
            Node::off_curve(point(2.0, 0.0)),
            Node::off_curve(point(3.0, 0.0)),
            Node::curve(point(4.0, 0.0)),
        ],
        true,
    );
    assert!(matches!(
        make_corners(&run, &Selection::All),
        Err(MalformedPath::OffCurveRun(_))
    ));
}
