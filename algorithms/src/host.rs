//! Thin adapters between the corner synthesizer and a host font editor.
//!
//! The host owns glyphs, layers, selection state and menu registration;
//! this module only defines the narrow data contract the algorithm needs
//! and the invocation modes built on top of it: single layer respecting
//! the selection, many layers ignoring it, and the batch-export run over
//! a whole font.

use crate::corners::make_corners;
use crate::params::GlyphScope;
use crate::path::{Path, Selection};

use log::warn;

/// How an invocation treats the host's current node selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Restrict rewrites to the selected nodes, if any are selected.
    Respect,
    /// Rewrite every eligible segment.
    Ignore,
}

/// One editable layer of a glyph, as exposed by the host.
pub trait Layer {
    /// The outline paths of this layer.
    fn paths(&self) -> &[Path];

    /// Whether node `node` of path `path` is currently selected.
    fn is_selected(&self, path: usize, node: usize) -> bool;

    /// Whether any node of this layer is selected.
    fn has_selection(&self) -> bool;

    /// Replaces the layer's entire path set.
    fn set_paths(&mut self, paths: Vec<Path>);

    /// Clears the node selection.
    fn clear_selection(&mut self);
}

/// A font, as exposed by the host's export pipeline.
pub trait Font {
    type Layer: Layer;

    /// Names of all glyphs, in font order.
    fn glyph_names(&self) -> Vec<String>;

    /// The first-master layer of the named glyph.
    fn master_layer_mut(&mut self, glyph: &str) -> Option<&mut Self::Layer>;
}

/// Rewrites every path of one layer and replaces the layer's path set.
///
/// With [`SelectionMode::Respect`], a non-empty selection restricts the
/// rewrite to segments with a selected control point; an empty selection
/// means everything is eligible. A malformed path is logged and passed
/// through unchanged so that the rest of the layer still processes.
///
/// The selection is cleared afterwards: node indices recorded before the
/// rewrite no longer identify the same nodes.
pub fn filter_layer<L: Layer>(layer: &mut L, mode: SelectionMode) {
    let respect = mode == SelectionMode::Respect && layer.has_selection();

    let mut rewritten = Vec::with_capacity(layer.paths().len());
    for (path_index, path) in layer.paths().iter().enumerate() {
        let selection = if respect {
            Selection::from_indices(
                (0..path.len()).filter(|&node| layer.is_selected(path_index, node)),
            )
        } else {
            Selection::All
        };

        match make_corners(path, &selection) {
            Ok(output) => rewritten.push(output),
            Err(error) => {
                warn!("skipping path {}: {}", path_index, error);
                rewritten.push(path.clone());
            }
        }
    }

    layer.set_paths(rewritten);
    layer.clear_selection();
}

/// Multi-layer invocation ("run on all selected glyphs"): the selection
/// is ignored for every layer.
pub fn filter_layers<'l, L, I>(layers: I)
where
    L: Layer + 'l,
    I: IntoIterator<Item = &'l mut L>,
{
    for layer in layers {
        filter_layer(layer, SelectionMode::Ignore);
    }
}

/// Batch-export invocation with the host's custom-parameter arguments.
///
/// The trailing argument may carry an `include:`/`exclude:` glyph list;
/// every other argument is ignored. Runs unfiltered on the first-master
/// layer of each glyph in scope.
pub fn filter_font<F: Font>(font: &mut F, arguments: &[&str]) {
    let scope = GlyphScope::from_arguments(arguments);

    for name in font.glyph_names() {
        if !scope.allows(&name) {
            continue;
        }
        match font.master_layer_mut(&name) {
            Some(layer) => filter_layer(layer, SelectionMode::Ignore),
            None => warn!("glyph {:?} has no master layer", name),
        }
    }
}

#[cfg(test)]
use crate::path::math::point;
#[cfg(test)]
use std::collections::HashSet;

#[cfg(test)]
#[derive(Clone, Default)]
struct TestLayer {
    paths: Vec<Path>,
    selected: HashSet<(usize, usize)>,
}

#[cfg(test)]
impl Layer for TestLayer {
    fn paths(&self) -> &[Path] {
        &self.paths
    }

    fn is_selected(&self, path: usize, node: usize) -> bool {
        self.selected.contains(&(path, node))
    }

    fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    fn set_paths(&mut self, paths: Vec<Path>) {
        self.paths = paths;
    }

    fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
struct TestFont {
    glyphs: Vec<(String, TestLayer)>,
}

#[cfg(test)]
impl Font for TestFont {
    type Layer = TestLayer;

    fn glyph_names(&self) -> Vec<String> {
        self.glyphs.iter().map(|(name, _)| name.clone()).collect()
    }

    fn master_layer_mut(&mut self, glyph: &str) -> Option<&mut TestLayer> {
        self.glyphs
            .iter_mut()
            .find(|(name, _)| name == glyph)
            .map(|(_, layer)| layer)
    }
}

#[cfg(test)]
fn curved_path() -> Path {
    let mut builder = Path::builder();
    builder.line_to(point(0.0, 0.0));
    builder.line_to(point(50.0, 0.0));
    builder.curve_to(point(75.0, 0.0), point(100.0, 25.0), point(100.0, 50.0));
    builder.line_to(point(0.0, 50.0));
    builder.close()
}

#[test]
fn respects_selection() {
    // Node 0 (a line node) is selected: neither control point is
    // active, so the curve survives.
    let mut layer = TestLayer {
        paths: vec![curved_path()],
        selected: vec![(0, 0)].into_iter().collect(),
    };
    filter_layer(&mut layer, SelectionMode::Respect);
    assert_eq!(layer.paths[0].len(), 6);
    assert!(!layer.has_selection());

    // A selected control point makes the segment eligible.
    let mut layer = TestLayer {
        paths: vec![curved_path()],
        selected: vec![(0, 2)].into_iter().collect(),
    };
    filter_layer(&mut layer, SelectionMode::Respect);
    assert_eq!(layer.paths[0].len(), 5);

    // No selection at all falls back to unfiltered.
    let mut layer = TestLayer {
        paths: vec![curved_path()],
        selected: HashSet::new(),
    };
    filter_layer(&mut layer, SelectionMode::Respect);
    assert_eq!(layer.paths[0].len(), 5);
}

#[test]
fn ignore_mode_overrides_selection() {
    let mut layer = TestLayer {
        paths: vec![curved_path()],
        selected: vec![(0, 0)].into_iter().collect(),
    };
    filter_layer(&mut layer, SelectionMode::Ignore);
    assert_eq!(layer.paths[0].len(), 5);
}

#[test]
fn malformed_path_does_not_block_the_rest() {
    let bad = Path::from_nodes(vec![], true);
    let mut layer = TestLayer {
        paths: vec![bad.clone(), curved_path()],
        selected: HashSet::new(),
    };
    filter_layer(&mut layer, SelectionMode::Ignore);

    // The malformed path passes through unchanged, the good one is
    // still rewritten.
    assert_eq!(layer.paths[0], bad);
    assert_eq!(layer.paths[1].len(), 5);
}

#[test]
fn layers_invocation() {
    let mut layers = vec![
        TestLayer {
            paths: vec![curved_path()],
            selected: vec![(0, 0)].into_iter().collect(),
        },
        TestLayer {
            paths: vec![curved_path()],
            selected: HashSet::new(),
        },
    ];
    filter_layers(layers.iter_mut());
    assert_eq!(layers[0].paths[0].len(), 5);
    assert_eq!(layers[1].paths[0].len(), 5);
}

#[test]
fn font_invocation_with_scope() {
    let mut font = TestFont {
        glyphs: vec![
            ("A".to_string(), TestLayer {
                paths: vec![curved_path()],
                selected: HashSet::new(),
            }),
            ("B".to_string(), TestLayer {
                paths: vec![curved_path()],
                selected: HashSet::new(),
            }),
        ],
    };

    filter_font(&mut font, &["MakeCorner", "include: A"]);
    assert_eq!(font.glyphs[0].1.paths[0].len(), 5);
    assert_eq!(font.glyphs[1].1.paths[0].len(), 6);

    filter_font(&mut font, &["MakeCorner"]);
    assert_eq!(font.glyphs[1].1.paths[0].len(), 5);
}
