use compact_str::CompactString;

use super::colors::{Color, ColorAssigner};
use super::labels::{LabelFitter, LabelPlan};
use crate::layout::geometry::Rect;
use crate::layout::legend::{pack_legend, LegendEntry};
use crate::layout::Layout;
use crate::tree::arena::{Hierarchy, NodeId};

/// One leaf tile, ready to be drawn by any backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub node: NodeId,
    pub rect: Rect,
    pub fill: Color,
    pub label: LabelPlan,
    /// Data attributes carried alongside the shape
    pub name: CompactString,
    pub category: CompactString,
    pub value: f64,
}

/// Everything needed to draw one frame: tiles and legend.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub tiles: Vec<Tile>,
    pub legend: Vec<LegendEntry>,
}

/// Register every category with `colors` in dataset order, so tiles and
/// legend agree on colors no matter how the layout sorted them.
pub fn register_categories(tree: &Hierarchy, colors: &mut ColorAssigner) {
    for &id in tree.categories() {
        colors.color_of(&tree.get(id).name);
    }
}

/// Build a scene from a computed layout.
pub fn build_scene(
    tree: &Hierarchy,
    layout: &Layout,
    legend_area: Rect,
    legend_columns: usize,
    fitter: &LabelFitter,
    colors: &mut ColorAssigner,
) -> Scene {
    register_categories(tree, colors);

    let tiles: Vec<Tile> = layout
        .leaves()
        .map(|leaf| {
            let node = tree.get(leaf.node);
            let category = leaf
                .category
                .map(|id| tree.get(id).name.clone())
                .unwrap_or_else(|| node.name.clone());
            Tile {
                node: leaf.node,
                rect: leaf.rect,
                fill: colors.color_of(&category),
                label: fitter.fit(leaf.rect, &node.name),
                name: node.name.clone(),
                category,
                value: node.aggregate,
            }
        })
        .collect();

    let names: Vec<&str> = tree
        .categories()
        .iter()
        .map(|&id| tree.get(id).name.as_str())
        .collect();
    let legend = pack_legend(&names, legend_area, legend_columns, colors);

    let elided = tiles
        .iter()
        .filter(|t| !matches!(t.label, LabelPlan::Lines { .. }))
        .count();
    tracing::info!(
        "Scene built: {} tiles ({} without full labels), {} legend entries",
        tiles.len(),
        elided,
        legend.len()
    );

    Scene { tiles, legend }
}
