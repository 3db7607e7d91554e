#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [cusp](https://docs.rs/cusp/).
//!
//! # Overview.
//!
//! This crate implements the line math needed to collapse cubic curve
//! segments into sharp corners:
//!
//! - slopes with an explicit vertical case,
//! - infinite lines through two points and their intersection.

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod line;

#[doc(inline)]
pub use crate::line::{intersection, Line, Slope};

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, NumCast};

    use core::fmt::{Debug, Display};

    pub trait Scalar: Float + NumCast + Sized + Display + Debug {
        const ZERO: Self;
        const ONE: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
