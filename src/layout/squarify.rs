use super::geometry::Rect;

/// Squarified layout (Bruls, Huizing & van Wijk 2000).
///
/// `areas` must be positive and sorted in descending order; their sum should
/// equal `rect.area()`. Returns one rectangle per area, in the same order.
///
/// Rows are grown along the shorter side of the free space while doing so
/// does not worsen the row's worst aspect ratio. A closed row is carved off
/// the free space as a strip and the rest is laid out in what remains.
pub fn squarify(areas: &[f64], rect: Rect) -> Vec<Rect> {
    let mut result = Vec::with_capacity(areas.len());
    let mut free = rect;
    let mut start = 0;

    while start < areas.len() {
        // Nothing left to carve; the remaining items get zero-area rects.
        if free.is_empty() {
            let corner = Rect::point(free.x1, free.y1);
            result.extend(std::iter::repeat(corner).take(areas.len() - start));
            break;
        }

        let short = free.width().min(free.height());
        let mut end = start + 1;
        let mut row_sum = areas[start];
        let mut worst = worst_aspect_ratio(&areas[start..end], row_sum, short);

        while end < areas.len() {
            let grown_sum = row_sum + areas[end];
            let grown_worst = worst_aspect_ratio(&areas[start..=end], grown_sum, short);
            if grown_worst > worst {
                break;
            }
            row_sum = grown_sum;
            worst = grown_worst;
            end += 1;
        }

        let is_last = end == areas.len();
        free = place_row(&areas[start..end], row_sum, free, is_last, &mut result);
        start = end;
    }

    result
}

/// Lay `row` as a strip along the shorter side of `free` and return the space left over.
fn place_row(row: &[f64], row_sum: f64, free: Rect, is_last: bool, out: &mut Vec<Rect>) -> Rect {
    let wide = free.width() >= free.height();

    if wide {
        // Column at the left edge; items stacked top to bottom.
        let thickness = if is_last {
            free.width()
        } else {
            (row_sum / free.height()).min(free.width())
        };
        let x1 = if is_last { free.x1 } else { free.x0 + thickness };
        let mut y = free.y0;
        for (i, &area) in row.iter().enumerate() {
            let y_end = if i + 1 == row.len() {
                free.y1
            } else {
                (y + area / thickness).min(free.y1)
            };
            out.push(Rect::new(free.x0, y, x1, y_end));
            y = y_end;
        }
        Rect::new(x1, free.y0, free.x1, free.y1)
    } else {
        // Row at the top edge; items placed left to right.
        let thickness = if is_last {
            free.height()
        } else {
            (row_sum / free.width()).min(free.height())
        };
        let y1 = if is_last { free.y1 } else { free.y0 + thickness };
        let mut x = free.x0;
        for (i, &area) in row.iter().enumerate() {
            let x_end = if i + 1 == row.len() {
                free.x1
            } else {
                (x + area / thickness).min(free.x1)
            };
            out.push(Rect::new(x, free.y0, x_end, y1));
            x = x_end;
        }
        Rect::new(free.x0, y1, free.x1, free.y1)
    }
}

/// Worst width:height ratio among the items of `row` laid along `side`.
pub(crate) fn worst_aspect_ratio(row: &[f64], sum: f64, side: f64) -> f64 {
    if row.is_empty() || sum <= 0.0 || side <= 0.0 {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let max_r = row.iter().copied().fold(0.0, f64::max);
    let min_r = row.iter().copied().fold(f64::INFINITY, f64::min);
    if min_r <= 0.0 {
        return f64::MAX;
    }
    let a = (side_sq * max_r) / sum_sq;
    let b = sum_sq / (side_sq * min_r);
    a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_sum(rects: &[Rect]) -> f64 {
        rects.iter().map(Rect::area).sum()
    }

    #[test]
    fn single_item_fills_rect() {
        let rects = squarify(&[1920.0 * 1080.0], Rect::new(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(rects, vec![Rect::new(0.0, 0.0, 1920.0, 1080.0)]);
    }

    #[test]
    fn layout_preserves_area_for_simple_case() {
        let areas = [400.0, 300.0, 200.0, 100.0];
        let rects = squarify(&areas, Rect::new(0.0, 0.0, 50.0, 20.0));
        let total_in: f64 = areas.iter().sum();
        assert!((total_in - area_sum(&rects)).abs() < 1e-6);
        for (area, rect) in areas.iter().zip(&rects) {
            assert!((area - rect.area()).abs() < 1e-6, "{area} vs {rect:?}");
        }
    }

    #[test]
    fn reference_example_from_the_paper() {
        // 6x4 rectangle with areas 6,6,4,3,2,2,1: the first row holds the two
        // 6s as a column of width 3 on the left.
        let areas = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        let rects = squarify(&areas, Rect::new(0.0, 0.0, 6.0, 4.0));
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 3.0, 2.0));
        assert_eq!(rects[1], Rect::new(0.0, 2.0, 3.0, 4.0));
        // Second row: 4 and 3 across the top of the remaining 3x4 area.
        assert!((rects[2].height() - 7.0 / 3.0).abs() < 1e-9);
        assert!((rects[2].y0 - 0.0).abs() < 1e-12);
        assert!((rects[3].x1 - 6.0).abs() < 1e-12);
        assert!((area_sum(&rects) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn squarified_beats_plain_slicing() {
        let areas = [30.0, 25.0, 20.0, 15.0, 10.0];
        let rects = squarify(&areas, Rect::new(0.0, 0.0, 10.0, 10.0));
        let worst = rects
            .iter()
            .map(|r| (r.width() / r.height()).max(r.height() / r.width()))
            .fold(0.0, f64::max);
        // Slicing the 10x10 square into five vertical strips would give a 10:1 sliver.
        assert!(worst < 3.0, "worst aspect ratio {worst}");
    }

    #[test]
    fn empty_rect_yields_zero_area_rects() {
        let rects = squarify(&[1.0, 1.0], Rect::new(5.0, 5.0, 5.0, 50.0));
        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|r| r.area() == 0.0 && r.x0.is_finite() && r.y0.is_finite()));
    }

    #[test]
    fn worst_ratio_guards_degenerate_input() {
        assert_eq!(worst_aspect_ratio(&[], 0.0, 1.0), f64::MAX);
        assert_eq!(worst_aspect_ratio(&[1.0], 1.0, 0.0), f64::MAX);
        assert_eq!(worst_aspect_ratio(&[1.0, 0.0], 1.0, 1.0), f64::MAX);
        assert_eq!(worst_aspect_ratio(&[4.0], 4.0, 2.0), 1.0);
    }
}
