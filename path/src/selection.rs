use std::collections::HashSet;

/// Restricts which nodes an algorithm may rewrite.
///
/// Node identity is the node's index in the path the selection was
/// built against; a selection does not survive a rewrite of that path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Selection {
    /// Every node is active.
    All,
    /// Only the listed node indices are active.
    Subset(HashSet<usize>),
}

impl Selection {
    /// Builds a restricted selection from node indices.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Selection::Subset(indices.into_iter().collect())
    }

    /// Whether the node at `index` counts as selected.
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        match self {
            Selection::All => true,
            Selection::Subset(set) => set.contains(&index),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::All
    }
}

#[test]
fn subset_membership() {
    let selection = Selection::from_indices(vec![1, 4]);
    assert!(selection.is_active(1));
    assert!(selection.is_active(4));
    assert!(!selection.is_active(0));
    assert!(!selection.is_active(2));

    let empty = Selection::from_indices(std::iter::empty());
    assert!(!empty.is_active(0));

    assert!(Selection::All.is_active(123));
}
