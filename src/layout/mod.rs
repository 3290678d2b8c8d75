pub mod geometry;
pub mod legend;
pub mod squarify;

use std::collections::HashMap;

use self::geometry::Rect;
use self::squarify::squarify;
use crate::tree::arena::{Hierarchy, NodeId};

/// A positioned node in the treemap layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub node: NodeId,
    /// Space allocated to the node before padding. Siblings partition their
    /// parent's bounds exactly.
    pub bounds: Rect,
    /// The visible tile: `bounds` inset by the padding and kept inside the
    /// parent's visible rect (the root is not inset).
    pub rect: Rect,
    pub depth: u16,
    /// Top-level ancestor, used for coloring and inspection. None for the root.
    pub category: Option<NodeId>,
    pub is_leaf: bool,
}

/// The full layout result (rects + fast lookup).
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// One rect per node, parents before children
    pub rects: Vec<LayoutRect>,
    /// node → index into `rects`
    pub node_to_rect: HashMap<NodeId, usize>,
}

impl Layout {
    pub fn get(&self, node: NodeId) -> Option<&LayoutRect> {
        self.node_to_rect.get(&node).map(|&i| &self.rects[i])
    }

    pub fn leaves(&self) -> impl Iterator<Item = &LayoutRect> {
        self.rects.iter().filter(|r| r.is_leaf)
    }
}

/// Configuration for treemap layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Inset applied to every non-root rect after sizing (px)
    pub padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { padding: 2.0 }
    }
}

/// Lay out the whole tree inside `viewport`.
///
/// Pure and deterministic: the same tree, viewport and padding always give
/// bit-identical rects.
pub fn compute_layout(tree: &Hierarchy, viewport: Rect, config: &LayoutConfig) -> Layout {
    let mut rects = Vec::with_capacity(tree.len());
    let mut node_to_rect = HashMap::with_capacity(tree.len());

    let root = tree.get(tree.root);
    rects.push(LayoutRect {
        node: tree.root,
        bounds: viewport,
        rect: viewport,
        depth: 0,
        category: None,
        is_leaf: root.is_leaf(),
    });
    node_to_rect.insert(tree.root, 0);

    tracing::info!(
        "Laying out {} children of root '{}' (value={}) in {:.0}x{:.0} area",
        tree.categories().len(),
        root.name,
        root.aggregate,
        viewport.width(),
        viewport.height()
    );

    let mut layout = Layout { rects, node_to_rect };
    layout_children(tree, tree.root, viewport, viewport, None, config, &mut layout);
    layout
}

/// Recursively lay out the children of `parent` inside its `bounds`.
/// Every child's visible rect is kept inside `clip`, the parent's visible rect.
fn layout_children(
    tree: &Hierarchy,
    parent: NodeId,
    bounds: Rect,
    clip: Rect,
    category: Option<NodeId>,
    config: &LayoutConfig,
    out: &mut Layout,
) {
    let mut children: Vec<NodeId> = tree.children(parent).to_vec();
    if children.is_empty() {
        return;
    }
    // Stable: equal values keep their dataset order.
    children.sort_by(|&a, &b| tree.get(b).aggregate.total_cmp(&tree.get(a).aggregate));

    let parent_node = tree.get(parent);
    let total = parent_node.aggregate;
    let corner = Rect::point(bounds.x1, bounds.y1);

    let positioned: Vec<Rect> = if total <= 0.0 || bounds.is_empty() {
        tracing::debug!(
            "Collapsing {} children of '{}' (value={}, bounds {:.1}x{:.1})",
            children.len(),
            parent_node.name,
            total,
            bounds.width(),
            bounds.height()
        );
        vec![corner; children.len()]
    } else {
        // Zero-valued children sort to the tail and get no area.
        let sized = children
            .iter()
            .take_while(|&&id| tree.get(id).aggregate > 0.0)
            .count();
        let area = bounds.area();
        let areas: Vec<f64> = children[..sized]
            .iter()
            .map(|&id| tree.get(id).aggregate / total * area)
            .collect();
        let mut positioned = squarify(&areas, bounds);
        positioned.resize(children.len(), corner);
        positioned
    };

    for (&child, &child_bounds) in children.iter().zip(&positioned) {
        let node = tree.get(child);
        let category = category.or(Some(child));

        // Slivers and zero-area children can sit in the parent's padding band.
        let rect = child_bounds.inset(config.padding).clamp_into(&clip);

        let idx = out.rects.len();
        out.rects.push(LayoutRect {
            node: child,
            bounds: child_bounds,
            rect,
            depth: node.depth,
            category,
            is_leaf: node.is_leaf(),
        });
        out.node_to_rect.insert(child, idx);

        layout_children(tree, child, child_bounds, rect, category, config, out);
    }
}
