use compact_str::CompactString;

use crate::layout::LayoutRect;
use crate::tree::arena::Hierarchy;

/// How far the overlay sits from the pointer on each axis (px).
pub const ANCHOR_OFFSET: f64 = 10.0;

/// Information to display while the pointer is over a tile.
/// Built per pointer event and discarded after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionPayload {
    pub category_name: CompactString,
    pub item_name: CompactString,
    pub value: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl InspectionPayload {
    /// Category, item and value, one per line.
    pub fn lines(&self) -> [String; 3] {
        [
            self.category_name.to_string(),
            self.item_name.to_string(),
            format_value(self.value),
        ]
    }
}

/// Build the payload for a hit tile, anchored just below-right of the pointer.
pub fn build_tooltip(tree: &Hierarchy, hit: &LayoutRect, pointer_x: f64, pointer_y: f64) -> InspectionPayload {
    let node = tree.get(hit.node);
    let category_name = hit
        .category
        .map(|id| tree.get(id).name.clone())
        .unwrap_or_default();

    InspectionPayload {
        category_name,
        item_name: node.name.clone(),
        value: node.aggregate,
        anchor_x: pointer_x + ANCHOR_OFFSET,
        anchor_y: pointer_y + ANCHOR_OFFSET,
    }
}

/// Shortest decimal form: whole numbers print without a fraction.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}
