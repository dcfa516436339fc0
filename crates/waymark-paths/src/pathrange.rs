use waymark_core::{Cost, Pos, Range};

/// A position with its exact cost from the nearest source, returned from
/// Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Pos,
    pub cost: u64,
}

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Finalized: popped once, never relaxed or expanded again.
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            closed: false,
        }
    }
}

/// Frontier entry, ordered by `f` and then by row-major position so that
/// `BinaryHeap` pops the smallest `f` first and breaks ties
/// deterministically.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u64,
    pub(crate) pos: Pos,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid rectangle.
///
/// `PathRange` owns the node arrays used by A* and Dijkstra so that
/// repeated queries on grids of the same size do not reallocate. Stale
/// nodes from earlier queries are ignored through a generation counter.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // Dijkstra caches
    pub(crate) dijkstra_nodes: Vec<Node>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) dijkstra_results: Vec<PathNode>,
    pub(crate) dijkstra_map: Vec<Cost>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            dijkstra_nodes: vec![Node::default(); len],
            dijkstra_generation: 0,
            dijkstra_results: Vec::new(),
            dijkstra_map: vec![Cost::Unreachable; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches only when the new
    /// range is larger than the current capacity.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.astar_nodes.len();
        self.rng = rng;
        self.width = rng.cols().max(0) as usize;
        self.dijkstra_results.clear();

        if new_len <= old_capacity {
            self.astar_generation = next_generation(&mut self.astar_nodes, self.astar_generation);
            self.dijkstra_generation =
                next_generation(&mut self.dijkstra_nodes, self.dijkstra_generation);
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;

        self.dijkstra_nodes.clear();
        self.dijkstra_nodes.resize(new_len, Node::default());
        self.dijkstra_generation = 0;
        self.dijkstra_map.clear();
        self.dijkstra_map.resize(new_len, Cost::Unreachable);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Pos` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let row = (p.row - self.rng.min.row) as usize;
        let col = (p.col - self.rng.min.col) as usize;
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Pos`.
    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Pos {
        let row = (idx / self.width) as i32 + self.rng.min.row;
        let col = (idx % self.width) as i32 + self.rng.min.col;
        Pos::new(row, col)
    }
}

/// Bump a generation counter. On wrap-around every node is reset, since
/// nodes still stamped with generation 0 would otherwise look current.
pub(crate) fn next_generation(nodes: &mut [Node], generation: u32) -> u32 {
    let next = generation.wrapping_add(1);
    if next == 0 {
        nodes.iter_mut().for_each(|n| *n = Node::default());
        return 1;
    }
    next
}
