use crate::layout::LayoutRect;
use crate::tree::arena::{Hierarchy, NodeId};
use crate::ui::tooltip::{build_tooltip, InspectionPayload};

/// Last pointer position, in canvas coordinates.
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
}

/// Hit-test: find which leaf tile contains the given point.
///
/// Tiles do not overlap and use half-open bounds, so a point on an edge shared
/// by two tiles resolves to exactly one of them (the one to its right or below).
/// Points in padding gaps or outside the chart hit nothing.
pub fn hit_test(layout_rects: &[LayoutRect], x: f64, y: f64) -> Option<&LayoutRect> {
    layout_rects
        .iter()
        .filter(|rect| rect.is_leaf)
        .find(|rect| rect.rect.contains(x, y))
}

/// What the caller should do with its inspection overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Show (or move) the overlay with this payload
    Inspect(InspectionPayload),
    /// Remove any overlay currently shown
    ClearInspection,
    /// Nothing changed
    None,
}

/// The currently inspected tile, owned by the caller.
#[derive(Debug, Default, Clone)]
pub struct InspectionState {
    pub mouse: MouseState,
    pub current: Option<NodeId>,
}

impl InspectionState {
    /// Process a pointer move over the chart.
    pub fn pointer_moved(
        &mut self,
        tree: &Hierarchy,
        layout_rects: &[LayoutRect],
        x: f64,
        y: f64,
    ) -> InputAction {
        self.mouse = MouseState { x, y };
        match hit_test(layout_rects, x, y) {
            Some(hit) => {
                self.current = Some(hit.node);
                InputAction::Inspect(build_tooltip(tree, hit, x, y))
            }
            None => self.clear(),
        }
    }

    /// Process the pointer leaving the chart.
    pub fn pointer_left(&mut self) -> InputAction {
        self.clear()
    }

    fn clear(&mut self) -> InputAction {
        if self.current.take().is_some() {
            InputAction::ClearInspection
        } else {
            InputAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::Rect;
    use crate::layout::{compute_layout, Layout, LayoutConfig};
    use crate::tree::build_tree;
    use crate::tree::dataset::RawNode;

    fn grid(padding: f64) -> (Hierarchy, Layout) {
        let tree = build_tree(&RawNode::branch(
            "root",
            vec![RawNode::leaf("left", 1.0), RawNode::leaf("right", 1.0)],
        ))
        .unwrap();
        let layout = compute_layout(&tree, Rect::new(0.0, 0.0, 200.0, 100.0), &LayoutConfig { padding });
        (tree, layout)
    }

    fn name_at(tree: &Hierarchy, layout: &Layout, x: f64, y: f64) -> Option<String> {
        hit_test(&layout.rects, x, y).map(|r| tree.get(r.node).name.to_string())
    }

    #[test]
    fn point_inside_resolves_to_its_leaf() {
        let (tree, layout) = grid(0.0);
        assert_eq!(name_at(&tree, &layout, 50.0, 50.0).as_deref(), Some("left"));
        assert_eq!(name_at(&tree, &layout, 150.0, 50.0).as_deref(), Some("right"));
    }

    #[test]
    fn shared_edge_resolves_to_exactly_one_leaf() {
        let (tree, layout) = grid(0.0);
        let hits = layout.leaves().filter(|r| r.rect.contains(100.0, 50.0)).count();
        assert_eq!(hits, 1);
        assert_eq!(name_at(&tree, &layout, 100.0, 50.0).as_deref(), Some("right"));
    }

    #[test]
    fn outside_and_padding_gaps_hit_nothing() {
        let (tree, layout) = grid(2.0);
        assert_eq!(name_at(&tree, &layout, -1.0, 50.0), None);
        assert_eq!(name_at(&tree, &layout, 250.0, 50.0), None);
        assert_eq!(name_at(&tree, &layout, 100.0, 50.0), None);
        assert_eq!(name_at(&tree, &layout, 1.0, 1.0), None);
    }

    #[test]
    fn leaving_every_tile_clears_the_overlay_once() {
        let (tree, layout) = grid(2.0);
        let mut state = InspectionState::default();

        let shown = state.pointer_moved(&tree, &layout.rects, 50.0, 50.0);
        assert!(matches!(shown, InputAction::Inspect(ref p) if p.item_name == "left"));
        assert!(state.current.is_some());

        assert_eq!(state.pointer_moved(&tree, &layout.rects, 100.0, 50.0), InputAction::ClearInspection);
        assert_eq!(state.pointer_moved(&tree, &layout.rects, 100.0, 50.0), InputAction::None);
        assert_eq!(state.pointer_left(), InputAction::None);
    }

    #[test]
    fn pointer_leaving_chart_clears_current_tile() {
        let (tree, layout) = grid(0.0);
        let mut state = InspectionState::default();
        state.pointer_moved(&tree, &layout.rects, 150.0, 10.0);
        assert_eq!(state.pointer_left(), InputAction::ClearInspection);
        assert!(state.current.is_none());
        assert_eq!((state.mouse.x, state.mouse.y), (150.0, 10.0));
    }
}
