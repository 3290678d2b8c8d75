use compact_str::CompactString;

use super::geometry::Rect;
use crate::render::colors::{Color, ColorAssigner};

/// Gap left between a swatch and the next row (px).
pub const SWATCH_INSET: f64 = 2.0;
/// Space between the swatch column and the label text (px).
pub const LABEL_GAP: f64 = 5.0;

/// One category's place in the legend grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: CompactString,
    pub color: Color,
    pub column: usize,
    pub row: usize,
    /// The grid cell (`cellX`, `cellY`, `cellWidth`, `cellHeight`)
    pub cell: Rect,
    /// Square swatch at the cell's top-left corner
    pub swatch: Rect,
    /// Text anchor: left edge and baseline of the label.
    pub label_x: f64,
    pub label_y: f64,
}

/// Pack categories into a fixed-column grid inside `area`.
///
/// Entry `i` lands at column `i % columns`, row `i / columns`. Cells are
/// `area.width / columns` wide and `area.height / ceil(n / columns)` tall.
/// Swatches are square, sized by the cell height whatever the cell width.
/// Labels are never elided here, no matter how little room a cell leaves.
///
/// Returns an empty legend (and logs why) when there are no categories or
/// no columns.
pub fn pack_legend<S: AsRef<str>>(
    categories: &[S],
    area: Rect,
    columns: usize,
    colors: &mut ColorAssigner,
) -> Vec<LegendEntry> {
    if columns == 0 {
        tracing::warn!("Legend needs at least one column, skipping {} entries", categories.len());
        return Vec::new();
    }
    if categories.is_empty() {
        tracing::warn!("Legend has no categories to show");
        return Vec::new();
    }

    let rows = categories.len().div_ceil(columns);
    let cell_w = area.width() / columns as f64;
    let cell_h = area.height() / rows as f64;
    let swatch_side = (cell_h - SWATCH_INSET).max(0.0);

    tracing::debug!(
        "Legend grid: {} entries in {}x{} cells of {:.1}x{:.1}",
        categories.len(),
        columns,
        rows,
        cell_w,
        cell_h
    );

    categories
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.as_ref();
            let column = i % columns;
            let row = i / columns;
            let x = area.x0 + column as f64 * cell_w;
            let y = area.y0 + row as f64 * cell_h;
            LegendEntry {
                name: CompactString::new(name),
                color: colors.color_of(name),
                column,
                row,
                cell: Rect::from_size(x, y, cell_w, cell_h),
                swatch: Rect::from_size(x, y, swatch_side, swatch_side),
                label_x: x + cell_h + LABEL_GAP,
                label_y: y + cell_h,
            }
        })
        .collect()
}
