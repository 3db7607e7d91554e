#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures to store font outline paths as node streams.
//!
//! A path is a closed, circular sequence of on-curve and off-curve
//! nodes, the representation font editors use for cubic outlines.
//! This crate also provides the selection filter used to restrict
//! rewrites to a subset of nodes.
//!
//! This crate is reexported in [cusp](https://docs.rs/cusp/).
//!
//! # Examples
//!
//! ```
//! use cusp_path::Path;
//! use cusp_path::math::point;
//!
//! // A square with one curved corner.
//! let mut builder = Path::builder();
//! builder.line_to(point(0.0, 0.0));
//! builder.line_to(point(50.0, 0.0));
//! builder.curve_to(point(75.0, 0.0), point(100.0, 25.0), point(100.0, 50.0));
//! builder.line_to(point(0.0, 50.0));
//! let path = builder.close();
//!
//! for node in path.iter() {
//!     println!("{:?}", node);
//! }
//! ```

pub use cusp_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod node;
pub mod path;
mod selection;

#[doc(inline)]
pub use crate::node::{Connection, Node, NodeKind};
#[doc(inline)]
pub use crate::path::{Builder, Path};
#[doc(inline)]
pub use crate::selection::Selection;

pub mod math {
    //! f64 versions of the cusp_geom types used everywhere. Outline
    //! coordinates are IEEE doubles.

    use crate::geom::euclid;

    /// Alias for `euclid::default::Point2D<f64>`.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for `euclid::default::Vector2D<f64>`.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }
}
