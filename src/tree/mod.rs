pub mod aggregate;
pub mod arena;
pub mod dataset;

use self::arena::{Hierarchy, NodeId, NodeKind};
use self::dataset::RawNode;
use crate::error::MalformedHierarchyError;

/// Build an immutable, aggregated Hierarchy from a raw dataset record.
///
/// Every node must carry either a value or a non-empty list of children, and
/// no declared value may be negative.
pub fn build_tree(raw: &RawNode) -> Result<Hierarchy, MalformedHierarchyError> {
    let root_kind = classify(raw, || raw.name.to_string())?;
    let mut tree = Hierarchy::with_root(&raw.name, root_kind);
    let root = tree.root;
    add_children(&mut tree, root, raw)?;

    aggregate::aggregate_values(&mut tree);
    if tree.is_empty() {
        tracing::warn!("Dataset '{}' has no children, the chart is a single tile", raw.name);
    }

    let root = tree.get(tree.root);
    tracing::info!(
        "Hierarchy built: {} nodes, {} categories, total value {}",
        tree.len(),
        tree.categories().len(),
        root.aggregate
    );
    for (i, &id) in tree.categories().iter().take(10).enumerate() {
        let category = tree.get(id);
        tracing::debug!(
            "  [{}] '{}' ({} items, value={})",
            i,
            category.name,
            tree.children(id).len(),
            category.aggregate
        );
    }

    Ok(tree)
}

fn add_children(
    tree: &mut Hierarchy,
    parent: NodeId,
    raw: &RawNode,
) -> Result<(), MalformedHierarchyError> {
    if tree.get(parent).is_leaf() {
        return Ok(());
    }
    for child in raw.children.iter().flatten() {
        let kind = classify(child, || format!("{}/{}", tree.path_of(parent), child.name))?;
        let id = tree.add_child(parent, &child.name, kind);
        add_children(tree, id, child)?;
    }
    Ok(())
}

/// Decide leaf or branch for one raw record. `path` is only evaluated on error.
fn classify(
    raw: &RawNode,
    path: impl Fn() -> String,
) -> Result<NodeKind, MalformedHierarchyError> {
    let has_children = raw.children.as_ref().is_some_and(|c| !c.is_empty());
    if has_children {
        if raw.value.is_some() {
            tracing::warn!("Ignoring value on group '{}' in favour of its children", path());
        }
        return Ok(NodeKind::Branch {
            children: Vec::new(),
        });
    }

    let Some(declared) = &raw.value else {
        return Err(MalformedHierarchyError::MissingValue { path: path() });
    };
    let Some(value) = declared.as_f64() else {
        return Err(MalformedHierarchyError::InvalidValue {
            path: path(),
            raw: declared.raw_text(),
        });
    };
    if value < 0.0 {
        return Err(MalformedHierarchyError::NegativeValue {
            path: path(),
            value,
        });
    }
    Ok(NodeKind::Leaf { value })
}
