//! Trim options
//!
//! Which edges a trim touches, and what an edge scan that finds no opaque
//! pixel means.

use alphatrim_core::Edge;

/// What to do with an edge whose scan finds no opaque pixel.
///
/// A scan only finds nothing when the whole buffer is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Leave the edge untrimmed
    #[default]
    Keep,
    /// Collapse the scanned axis to the one-pixel line at the scanned-from
    /// side (a 1-row strip for Top/Bottom, a 1-column strip for
    /// Left/Right)
    Collapse,
}

/// A set of edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSet(u8);

impl EdgeSet {
    /// No edge
    pub const NONE: EdgeSet = EdgeSet(0);
    /// All four edges
    pub const ALL: EdgeSet = EdgeSet(0b1111);

    #[inline]
    const fn bit(edge: Edge) -> u8 {
        match edge {
            Edge::Top => 1,
            Edge::Bottom => 2,
            Edge::Left => 4,
            Edge::Right => 8,
        }
    }

    /// The set holding only `edge`.
    pub const fn only(edge: Edge) -> Self {
        EdgeSet(Self::bit(edge))
    }

    /// This set plus `edge`.
    pub const fn with(self, edge: Edge) -> Self {
        EdgeSet(self.0 | Self::bit(edge))
    }

    /// This set minus `edge`.
    pub const fn without(self, edge: Edge) -> Self {
        EdgeSet(self.0 & !Self::bit(edge))
    }

    /// `true` if `edge` is in the set.
    pub const fn contains(self, edge: Edge) -> bool {
        self.0 & Self::bit(edge) != 0
    }

    /// `true` if the set holds no edge.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Edges in the set, in trim order (Top, Bottom, Left, Right).
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |&e| self.contains(e))
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(EdgeSet::NONE, EdgeSet::with)
    }
}

/// Options for [`crate::trim_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimOptions {
    /// Edges to trim (default: all four)
    pub edges: EdgeSet,
    /// Handling of edges where nothing opaque is found (default: keep)
    pub empty: EmptyPolicy,
}

impl TrimOptions {
    /// Create options trimming only the given edges
    pub fn with_edges(edges: EdgeSet) -> Self {
        Self {
            edges,
            ..Default::default()
        }
    }

    /// Create options with a specific empty-scan policy
    pub fn with_empty(empty: EmptyPolicy) -> Self {
        Self {
            empty,
            ..Default::default()
        }
    }

    /// Set the edges to trim
    pub fn edges(mut self, edges: EdgeSet) -> Self {
        self.edges = edges;
        self
    }

    /// Set the empty-scan policy
    pub fn empty(mut self, empty: EmptyPolicy) -> Self {
        self.empty = empty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_set() {
        let set = EdgeSet::only(Edge::Left).with(Edge::Top);
        assert!(set.contains(Edge::Top));
        assert!(set.contains(Edge::Left));
        assert!(!set.contains(Edge::Bottom));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Edge::Top, Edge::Left]);
        assert!(set.without(Edge::Top).without(Edge::Left).is_empty());
        assert_eq!(Edge::ALL.into_iter().collect::<EdgeSet>(), EdgeSet::ALL);
    }

    #[test]
    fn test_default_options() {
        let opts = TrimOptions::default();
        assert_eq!(opts.edges, EdgeSet::ALL);
        assert_eq!(opts.empty, EmptyPolicy::Keep);
        let opts = TrimOptions::with_empty(EmptyPolicy::Collapse).edges(EdgeSet::only(Edge::Top));
        assert_eq!(opts.edges, EdgeSet::only(Edge::Top));
        assert_eq!(opts.empty, EmptyPolicy::Collapse);
    }
}
