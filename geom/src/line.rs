use crate::scalar::Scalar;
use crate::{point, Point};

/// The slope of a line, with an explicit case for vertical lines.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Slope<S> {
    Finite(S),
    Vertical,
}

impl<S: Scalar> Slope<S> {
    /// The slope of the line going through two points.
    ///
    /// A zero `dx` produces `Vertical` instead of dividing by zero; a
    /// zero-length segment counts as vertical as well.
    pub fn between(from: Point<S>, to: Point<S>) -> Self {
        let dx = to.x - from.x;
        if dx == S::ZERO {
            return Slope::Vertical;
        }

        Slope::Finite((to.y - from.y) / dx)
    }
}

/// An infinite line, represented by two points it goes through.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> Line<S> {
    #[inline]
    pub fn slope(&self) -> Slope<S> {
        Slope::between(self.from, self.to)
    }

    /// Computes the intersection (if any) between this line and another one.
    ///
    /// Both lines extend to infinity. Returns `None` when the lines are
    /// parallel, coincident included. Slopes are compared with exact
    /// floating point equality: two lines count as parallel only if their
    /// computed slopes are bit-equal.
    pub fn intersection(&self, other: &Self) -> Option<Point<S>> {
        let (x, y) = match (self.slope(), other.slope()) {
            (Slope::Vertical, Slope::Vertical) => {
                return None;
            }
            (Slope::Finite(m1), Slope::Finite(m2)) if m1 == m2 => {
                return None;
            }
            (Slope::Vertical, Slope::Finite(m)) => {
                let x = self.from.x;
                (x, m * (x - other.from.x) + other.from.y)
            }
            (Slope::Finite(m), Slope::Vertical) => {
                let x = other.from.x;
                (x, m * (x - self.from.x) + self.from.y)
            }
            (Slope::Finite(m1), Slope::Finite(m2)) => {
                let x = (m1 * self.from.x - self.from.y - m2 * other.from.x + other.from.y)
                    / (m1 - m2);
                (x, m1 * (x - self.from.x) + self.from.y)
            }
        };

        // A non-finite coordinate means the inputs were degenerate. Report
        // it as "no usable intersection" rather than handing out NaN.
        if x.is_finite() && y.is_finite() {
            Some(point(x, y))
        } else {
            None
        }
    }
}

/// Intersection of the infinite lines through (a, b) and (c, d).
#[inline]
pub fn intersection<S: Scalar>(
    a: Point<S>,
    b: Point<S>,
    c: Point<S>,
    d: Point<S>,
) -> Option<Point<S>> {
    Line { from: a, to: b }.intersection(&Line { from: c, to: d })
}

#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[test]
fn crossing_lines() {
    // y = x meets the slope -1 line through (0, 2) at (1, 1).
    let p = intersection(
        point(0.0f64, 0.0),
        point(1.0, 1.0),
        point(0.0, 2.0),
        point(1.0, 1.0),
    )
    .unwrap();

    assert!(p.approx_eq(&point(1.0, 1.0)));
}

#[test]
fn parallel_lines() {
    assert_eq!(
        intersection(
            point(0.0f64, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
            point(1.0, 2.0),
        ),
        None
    );
}

#[test]
fn coincident_lines() {
    assert_eq!(
        intersection(
            point(0.0f64, 0.0),
            point(1.0, 1.0),
            point(2.0, 2.0),
            point(3.0, 3.0),
        ),
        None
    );
}

#[test]
fn vertical_line() {
    let p = intersection(
        point(2.0f64, 0.0),
        point(2.0, 5.0),
        point(0.0, 0.0),
        point(4.0, 2.0),
    )
    .unwrap();

    assert!(p.approx_eq(&point(2.0, 1.0)));

    // Same lines, arguments flipped.
    let p = intersection(
        point(0.0f64, 0.0),
        point(4.0, 2.0),
        point(2.0, 0.0),
        point(2.0, 5.0),
    )
    .unwrap();

    assert!(p.approx_eq(&point(2.0, 1.0)));
}

#[test]
fn both_vertical() {
    assert_eq!(
        intersection(
            point(1.0f64, 0.0),
            point(1.0, 5.0),
            point(3.0, -2.0),
            point(3.0, 7.0),
        ),
        None
    );
}

#[test]
fn zero_length_segment() {
    // A zero-length segment has a vertical sentinel slope: the
    // intersection sits on its x coordinate.
    let p = intersection(
        point(2.0f64, 3.0),
        point(2.0, 3.0),
        point(0.0, 0.0),
        point(1.0, 1.0),
    )
    .unwrap();

    assert!(p.approx_eq(&point(2.0, 2.0)));

    // Two zero-length segments are parallel.
    assert_eq!(
        intersection(
            point(2.0f64, 3.0),
            point(2.0, 3.0),
            point(4.0, 5.0),
            point(4.0, 5.0),
        ),
        None
    );
}

#[test]
fn slope_sentinel() {
    assert_eq!(
        Slope::between(point(1.0f64, 0.0), point(1.0, 9.0)),
        Slope::Vertical
    );
    assert_eq!(
        Slope::between(point(0.0f64, 0.0), point(2.0, 1.0)),
        Slope::Finite(0.5)
    );
}
