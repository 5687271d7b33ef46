use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

/// Per-run bookkeeping for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    /// Index of the predecessor in the owning [SearchState], [usize::MAX] for the start.
    pub parent: usize,
    pub g: u32,
    pub h: u32,
}

impl Node {
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// The g/h/parent values of every cell a search has discovered, keyed by coordinate.
///
/// Parents are stored as indices into the same map rather than references, so the table owns
/// all node data and path reconstruction is a chain of index lookups.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    nodes: FxIndexMap<Point, Node>,
}

impl SearchState {
    /// Creates the state for a search starting at `start`, which gets index 0.
    pub fn seed(start: Point, h: u32) -> SearchState {
        let mut nodes = FxIndexMap::default();
        nodes.insert(
            start,
            Node {
                parent: NO_PARENT,
                g: 0,
                h,
            },
        );
        SearchState { nodes }
    }

    pub fn node(&self, point: &Point) -> Option<&Node> {
        self.nodes.get(point)
    }

    /// The index and node of a discovered cell.
    pub fn lookup(&self, point: &Point) -> Option<(usize, &Node)> {
        self.nodes
            .get_full(point)
            .map(|(index, _, node)| (index, node))
    }

    /// Records that `point` can be reached with cost `g` through the node at `parent`. The
    /// heuristic is only evaluated the first time a cell is seen. Returns the new estimated
    /// total cost if this is the first or a strictly cheaper path, [None] otherwise.
    pub fn relax<FH>(&mut self, point: Point, parent: usize, g: u32, heuristic: FH) -> Option<u32>
    where
        FH: FnOnce(&Point) -> u32,
    {
        match self.nodes.entry(point) {
            Vacant(e) => {
                let h = heuristic(e.key());
                e.insert(Node { parent, g, h });
                Some(g + h)
            }
            Occupied(mut e) => {
                let node = e.get_mut();
                if g < node.g {
                    node.g = g;
                    node.parent = parent;
                    Some(node.f())
                } else {
                    None
                }
            }
        }
    }

    /// Follows parent indices from `index` back to the start and returns the cells in
    /// start-to-end order.
    pub fn path_to(&self, index: usize) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(self.nodes.get_index(index), |(_, node)| {
            self.nodes.get_index(node.parent)
        })
        .map(|(point, _)| *point)
        .collect();
        path.reverse();
        path
    }

    /// Number of discovered cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell;

    #[test]
    fn relax_keeps_cheaper_paths_only() {
        let mut state = SearchState::seed(cell(0, 0), 4);
        assert_eq!(state.relax(cell(0, 1), 0, 5, |_| 3), Some(8));
        assert_eq!(state.relax(cell(0, 1), 0, 5, |_| 3), None);
        assert_eq!(state.relax(cell(0, 1), 0, 7, |_| 3), None);
        assert_eq!(
            state.relax(cell(0, 1), 0, 2, |_| unreachable!("h is cached")),
            Some(5)
        );
        assert_eq!(state.node(&cell(0, 1)).map(Node::f), Some(5));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn path_follows_parents() {
        let mut state = SearchState::seed(cell(0, 0), 0);
        state.relax(cell(1, 0), 0, 1, |_| 0);
        state.relax(cell(1, 1), 1, 2, |_| 0);
        state.relax(cell(5, 5), 0, 9, |_| 0);
        let (index, node) = state.lookup(&cell(1, 1)).unwrap();
        assert_eq!(node.g, 2);
        assert_eq!(state.path_to(index), vec![cell(0, 0), cell(1, 0), cell(1, 1)]);
        assert_eq!(state.path_to(0), vec![cell(0, 0)]);
    }
}
