#![deny(bare_trait_objects)]

//! Sharp-corner synthesis for cubic outline paths.
//!
//! Given a closed path of on-curve and off-curve nodes, the algorithm
//! intersects the tangent lines of eligible cubic segments and collapses
//! each segment into a sharp corner, leaving everything else untouched.
//!
//! # Crates
//!
//! This meta-crate (`cusp`) reexports the following sub-crates for
//! convenience:
//!
//! * **cusp_algorithms** - The corner synthesizer and the host
//!   orchestration around it.
//! * **cusp_path** - Node-stream path storage and selection filtering.
//! * **cusp_geom** - Slope and infinite-line intersection math.
//!
//! Each `cusp_<name>` crate is reexported as a `<name>` module in
//! `cusp`.
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Example
//!
//! ```
//! use cusp::math::point;
//! use cusp::{make_corners, Path, Selection};
//!
//! // A box whose top-right corner is a cubic curve segment.
//! let mut builder = Path::builder();
//! builder.line_to(point(0.0, 0.0));
//! builder.line_to(point(50.0, 0.0));
//! builder.curve_to(point(75.0, 0.0), point(100.0, 25.0), point(100.0, 50.0));
//! builder.line_to(point(0.0, 50.0));
//! let path = builder.close();
//!
//! // The segment's tangents meet at (100, 0): the two control points
//! // and the curve endpoint collapse into a corner.
//! let sharpened = make_corners(&path, &Selection::All).unwrap();
//! assert_eq!(sharpened.len(), path.len() - 1);
//! ```

pub use cusp_algorithms as algorithms;
pub use cusp_algorithms::geom;
pub use cusp_algorithms::path;

pub use path::math;

#[doc(inline)]
pub use algorithms::{filter_font, filter_layer, filter_layers, make_corners};
#[doc(inline)]
pub use algorithms::{Font, GlyphScope, Layer, MalformedPath, SelectionMode};
#[doc(inline)]
pub use path::{Builder, Connection, Node, NodeKind, Path, Selection};
