#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Outline path rewriting algorithms.
//!
//! The central algorithm replaces cubic curve segments with sharp
//! corners by intersecting their tangent lines ([`corners`]). The
//! [`host`] module adapts it to the ways a font editor invokes it, and
//! [`params`] parses the glyph lists of batch-export parameters.
//!
//! This crate is reexported in [cusp](https://docs.rs/cusp/).

pub use cusp_path as path;
pub use cusp_path::geom;

pub mod corners;
pub mod host;
pub mod params;

#[doc(inline)]
pub use crate::corners::{make_corners, MalformedPath};
#[doc(inline)]
pub use crate::host::{filter_font, filter_layer, filter_layers, Font, Layer, SelectionMode};
#[doc(inline)]
pub use crate::params::GlyphScope;
