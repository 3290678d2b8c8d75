use serde::{Deserialize, Serialize};

use crate::layout::geometry::Rect;

/// Distance from the tile's top-left corner to the first line (px).
pub const LABEL_INSET: f64 = 4.0;
/// Vertical advance per line (px).
pub const LINE_HEIGHT: f64 = 10.0;
/// Drawn in place of a name that does not fit.
pub const ELISION_MARKER: &str = "...";

/// What to show on a tile that is too small for its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElisionMode {
    /// Draw the elision marker
    #[default]
    Ellipsis,
    /// Draw no text at all
    Hide,
}

/// One line of a wrapped label, positioned at its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// How a tile's name should be drawn. All text is clipped to `clip`.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelPlan {
    Lines { clip: Rect, lines: Vec<LabelLine> },
    Elided { clip: Rect, marker: &'static str, x: f64, y: f64 },
    Hidden,
}

impl LabelPlan {
    /// The text that would be drawn, lines joined by `\n`.
    pub fn text(&self) -> Option<String> {
        match self {
            LabelPlan::Lines { lines, .. } => Some(
                lines
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            LabelPlan::Elided { marker, .. } => Some((*marker).to_string()),
            LabelPlan::Hidden => None,
        }
    }
}

/// Decides how each tile's label is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFitter {
    /// Both tile sides must reach this for the full name to be drawn
    pub min_size: f64,
    pub mode: ElisionMode,
}

impl LabelFitter {
    pub fn new(min_size: f64, mode: ElisionMode) -> Self {
        Self { min_size, mode }
    }

    pub fn fit(&self, rect: Rect, name: &str) -> LabelPlan {
        if rect.is_empty() {
            return LabelPlan::Hidden;
        }
        let x = rect.x0 + LABEL_INSET;
        let first_baseline = rect.y0 + LABEL_INSET + LINE_HEIGHT;

        if rect.width() < self.min_size || rect.height() < self.min_size {
            return match self.mode {
                ElisionMode::Ellipsis => LabelPlan::Elided {
                    clip: rect,
                    marker: ELISION_MARKER,
                    x,
                    y: first_baseline,
                },
                ElisionMode::Hide => LabelPlan::Hidden,
            };
        }

        let lines: Vec<LabelLine> = split_words(name)
            .into_iter()
            .enumerate()
            .map(|(i, word)| LabelLine {
                text: word.to_string(),
                x,
                y: first_baseline + i as f64 * LINE_HEIGHT,
            })
            .take_while(|line| line.y <= rect.y1)
            .collect();

        if lines.is_empty() {
            return LabelPlan::Hidden;
        }
        LabelPlan::Lines { clip: rect, lines }
    }
}

/// Split a name into lines at word-like boundaries: before every uppercase
/// letter that is followed by a character that is not uppercase. Runs of
/// capitals ("FIFA") stay together except for their last letter when it
/// starts a new word. Trailing whitespace is trimmed from each piece on
/// purpose ("Grand", not "Grand "): lines are positioned, never concatenated.
pub fn split_words(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate().skip(1) {
        let starts_word = c.is_uppercase()
            && chars
                .get(i + 1)
                .is_some_and(|&(_, next)| !next.is_uppercase());
        if starts_word {
            pieces.push(&name[start..offset]);
            start = offset;
        }
    }
    pieces.push(&name[start..]);

    pieces
        .into_iter()
        .map(str::trim_end)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_word_starts() {
        assert_eq!(split_words("Grand Theft Auto"), ["Grand", "Theft", "Auto"]);
        assert_eq!(split_words("Wii Sports"), ["Wii", "Sports"]);
        assert_eq!(split_words("SuperMarioBros"), ["Super", "Mario", "Bros"]);
    }

    #[test]
    fn capital_runs_stay_mostly_together() {
        assert_eq!(split_words("FIFA 14"), ["FIF", "A 14"]);
        assert_eq!(split_words("NBA"), ["NBA"]);
        assert_eq!(split_words("Call of Duty: Black Ops"), ["Call of", "Duty:", "Black", "Ops"]);
    }

    #[test]
    fn no_leading_empty_piece() {
        assert_eq!(split_words("Tetris"), ["Tetris"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn small_tile_gets_marker_under_ellipsis_mode() {
        let fitter = LabelFitter::new(55.0, ElisionMode::Ellipsis);
        let plan = fitter.fit(Rect::new(0.0, 0.0, 40.0, 40.0), "Grand Theft Auto");
        assert!(matches!(plan, LabelPlan::Elided { marker: ELISION_MARKER, .. }));
        assert_eq!(plan.text().as_deref(), Some("..."));
    }

    #[test]
    fn small_tile_gets_nothing_under_hide_mode() {
        let fitter = LabelFitter::new(55.0, ElisionMode::Hide);
        let plan = fitter.fit(Rect::new(0.0, 0.0, 40.0, 40.0), "Grand Theft Auto");
        assert_eq!(plan, LabelPlan::Hidden);
        assert_eq!(plan.text(), None);
    }

    #[test]
    fn one_small_side_is_enough_to_elide() {
        let fitter = LabelFitter::new(55.0, ElisionMode::Ellipsis);
        let plan = fitter.fit(Rect::new(0.0, 0.0, 300.0, 40.0), "Wii Sports");
        assert!(matches!(plan, LabelPlan::Elided { .. }));
    }

    #[test]
    fn large_tile_wraps_one_word_per_line() {
        let fitter = LabelFitter::new(55.0, ElisionMode::Ellipsis);
        let rect = Rect::new(10.0, 20.0, 110.0, 120.0);
        let LabelPlan::Lines { clip, lines } = fitter.fit(rect, "Grand Theft Auto") else {
            panic!("expected wrapped lines");
        };
        assert_eq!(clip, rect);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], LabelLine { text: "Grand".into(), x: 14.0, y: 34.0 });
        assert_eq!(lines[2].y, 54.0);
    }

    #[test]
    fn lines_below_the_tile_are_clipped() {
        let fitter = LabelFitter::new(0.0, ElisionMode::Ellipsis);
        let LabelPlan::Lines { lines, .. } = fitter.fit(Rect::new(0.0, 0.0, 60.0, 25.0), "One Two Three Four")
        else {
            panic!("expected wrapped lines");
        };
        // Baselines at 14 and 24 fit in 25px, 34 does not.
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn zero_area_tile_is_hidden() {
        let fitter = LabelFitter::new(0.0, ElisionMode::Ellipsis);
        assert_eq!(fitter.fit(Rect::point(5.0, 5.0), "x"), LabelPlan::Hidden);
    }

    #[test]
    fn elision_mode_parses_lowercase() {
        let mode: ElisionMode = serde_json::from_str(r#""hide""#).unwrap();
        assert_eq!(mode, ElisionMode::Hide);
    }
}
