use compact_str::CompactString;

/// Index into the arena `Vec<HierarchyNode>`. Uses u32 to save memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node is, resolved once when the tree is built.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An item with its own (non-negative) value
    Leaf { value: f64 },
    /// A group; `children` keeps the dataset order and is never empty
    Branch { children: Vec<NodeId> },
}

/// A single node in the hierarchy, stored in a flat arena.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    pub name: CompactString,
    pub kind: NodeKind,
    /// Leaf: its value. Branch: sum of its children's aggregates.
    pub aggregate: f64,
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,
    /// Depth in the tree (root = 0)
    pub depth: u16,
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// The immutable weighted tree.
///
/// Nodes are pushed in pre-order, so a child's index is always greater than
/// its parent's.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub(crate) nodes: Vec<HierarchyNode>,
    pub root: NodeId,
}

impl Hierarchy {
    pub(crate) fn with_root(name: &str, kind: NodeKind) -> Self {
        let root = HierarchyNode {
            name: CompactString::new(name),
            kind,
            aggregate: 0.0,
            parent: None,
            depth: 0,
        };
        Hierarchy {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Append a node as the last child of `parent`. Returns the new node's ID.
    pub(crate) fn add_child(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        let depth = self.nodes[parent.index()].depth.saturating_add(1);
        if let NodeKind::Branch { children } = &mut self.nodes[parent.index()].kind {
            children.push(new_id);
        }
        self.nodes.push(HierarchyNode {
            name: CompactString::new(name),
            kind,
            aggregate: 0.0,
            parent: Some(parent),
            depth,
        });
        new_id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Children of a node in dataset order (empty for leaves).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id.index()].kind {
            NodeKind::Branch { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Top-level children of the root, in dataset order.
    pub fn categories(&self) -> &[NodeId] {
        self.children(self.root)
    }

    /// The top-level ancestor of `id` (itself when it is a category).
    /// None for the root.
    pub fn category_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let parent = self.nodes[current.index()].parent?;
            if parent == self.root {
                return Some(current);
            }
            current = parent;
        }
    }

    /// All leaves in pre-order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf())
            .map(|(i, _)| NodeId(i as u32))
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Slash-joined names from the root down to `id`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            parts.push(node.name.as_str());
            current = node.parent;
        }
        parts.reverse();
        parts.join("/")
    }
}
