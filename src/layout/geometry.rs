/// Axis-aligned rectangle in viewport space (top-left origin, y grows downward).
///
/// Always normalized: `x1 >= x0` and `y1 >= y0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1: x1.max(x0),
            y1: y1.max(y0),
        }
    }

    /// Rectangle from an origin and a size; negative sizes clamp to zero.
    pub fn from_size(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w.max(0.0), y + h.max(0.0))
    }

    /// Zero-area rectangle at a point.
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Shrink every side by `pad`. A side that would cross its opposite
    /// collapses onto the midpoint of the original span.
    pub fn inset(&self, pad: f64) -> Self {
        let pad = pad.max(0.0);
        let (x0, x1) = inset_span(self.x0, self.x1, pad);
        let (y0, y1) = inset_span(self.y0, self.y1, pad);
        Self { x0, y0, x1, y1 }
    }

    /// The part of `self` inside `outer`. When the two do not meet on an axis,
    /// that axis collapses onto the nearest edge of `outer`, so the result
    /// always lies within `outer`.
    pub fn clamp_into(&self, outer: &Rect) -> Self {
        Self {
            x0: self.x0.clamp(outer.x0, outer.x1),
            y0: self.y0.clamp(outer.y0, outer.y1),
            x1: self.x1.clamp(outer.x0, outer.x1),
            y1: self.y1.clamp(outer.y0, outer.y1),
        }
    }

    /// Half-open containment: the left and top edges belong to the rectangle,
    /// the right and bottom edges do not. Adjacent rectangles therefore never
    /// both claim a shared edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Whether `other` lies inside `self`, allowing `eps` of floating-point slack.
    pub fn encloses(&self, other: &Rect, eps: f64) -> bool {
        other.x0 >= self.x0 - eps
            && other.y0 >= self.y0 - eps
            && other.x1 <= self.x1 + eps
            && other.y1 <= self.y1 + eps
    }

    /// Whether the interiors overlap by more than `eps` on both axes.
    pub fn overlaps(&self, other: &Rect, eps: f64) -> bool {
        self.x0 + eps < other.x1
            && other.x0 + eps < self.x1
            && self.y0 + eps < other.y1
            && other.y0 + eps < self.y1
    }
}

fn inset_span(lo: f64, hi: f64, pad: f64) -> (f64, f64) {
    if hi - lo >= 2.0 * pad {
        (lo + pad, hi - pad)
    } else {
        let mid = lo + (hi - lo) / 2.0;
        (mid, mid)
    }
}
