//! Search tree storage and path reconstruction

/// One node of the search tree, created once and never modified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<N> {
    pub value: N,
    /// Handle of the node this one was discovered from; `None` for the root
    pub parent: Option<usize>,
    pub move_count: usize,
}

/// Arena of search nodes addressed by handle
#[derive(Debug, Clone)]
pub struct SearchTree<N> {
    nodes: Vec<SearchNode<N>>,
}

impl<N> SearchTree<N> {
    /// Start a tree rooted at `value`; the root has handle 0
    pub fn new(value: N) -> Self {
        SearchTree {
            nodes: vec![SearchNode {
                value,
                parent: None,
                move_count: 0,
            }],
        }
    }

    /// Add `value` as a child of `parent` and return its handle
    pub fn push_child(&mut self, parent: usize, value: N) -> usize {
        let move_count = self.nodes[parent].move_count + 1;
        self.nodes.push(SearchNode {
            value,
            parent: Some(parent),
            move_count,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, handle: usize) -> Option<&SearchNode<N>> {
        self.nodes.get(handle)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Walk parent links from `terminal` back to the root.
///
/// The returned values run root first, terminal last, and number
/// `move_count + 1` of the terminal node.
pub fn reconstruct_path<N: Clone>(tree: &SearchTree<N>, terminal: usize) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = Some(terminal);

    while let Some(handle) = current {
        let Some(node) = tree.get(handle) else {
            break;
        };
        path.push(node.value.clone());
        current = node.parent;
    }

    path.reverse();
    path
}
