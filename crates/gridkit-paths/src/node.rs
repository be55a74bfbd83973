use std::cmp::Ordering;

use gridkit_core::Coord;

/// Frontier entry, ordered for use in a `BinaryHeap` (max-heap) so that the
/// smallest tentative distance pops first. Equal distances pop in row-major
/// coordinate order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) dist: u64,
    pub(crate) pos: Coord,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
