use super::arena::{Hierarchy, NodeKind};

/// Compute aggregate values for all nodes (bottom-up).
/// After this, each branch's `aggregate` equals the sum of its children's aggregates.
pub fn aggregate_values(tree: &mut Hierarchy) {
    // Children always have higher indices than their parents, so a reverse
    // sweep visits every child before its parent.
    for i in (0..tree.nodes.len()).rev() {
        let total = match &tree.nodes[i].kind {
            NodeKind::Leaf { value } => *value,
            NodeKind::Branch { children } => children
                .iter()
                .map(|child| tree.nodes[child.index()].aggregate)
                .sum(),
        };
        tree.nodes[i].aggregate = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::arena::NodeId;

    #[test]
    fn sums_bottom_up_through_nested_groups() {
        let mut tree = Hierarchy::with_root("root", NodeKind::Branch { children: Vec::new() });
        let a = tree.add_child(tree.root, "a", NodeKind::Branch { children: Vec::new() });
        let a1 = tree.add_child(a, "a1", NodeKind::Branch { children: Vec::new() });
        tree.add_child(a1, "x", NodeKind::Leaf { value: 1.5 });
        tree.add_child(a1, "y", NodeKind::Leaf { value: 2.5 });
        tree.add_child(a, "z", NodeKind::Leaf { value: 0.0 });
        tree.add_child(tree.root, "b", NodeKind::Leaf { value: 6.0 });

        aggregate_values(&mut tree);

        assert_eq!(tree.get(a1).aggregate, 4.0);
        assert_eq!(tree.get(a).aggregate, 4.0);
        assert_eq!(tree.get(NodeId(0)).aggregate, 10.0);
    }
}
