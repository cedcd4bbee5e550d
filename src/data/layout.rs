// ============================================================
// Layer 4 — Line Layout
// ============================================================
// Rebuilds lines of text from positioned fragments.
//
// A PDF page does not store lines; it stores runs of text placed
// at (x, y) positions. A table row such as
//
//   MEM601      Advanced Thermodynamics      4.00
//
// is usually three or more separate runs with the same baseline.
// This module puts them back together:
//
//   1. Sort runs top-to-bottom (PDF y grows upwards), then left-to-right
//   2. Runs whose baselines differ by at most `y_tolerance` share a line
//   3. Within a line, a gap of at most `x_tolerance` between the end of
//      one run and the start of the next joins them with no space;
//      a wider gap inserts exactly one space
//
// Widths come from the fonts' own metrics. Tolerances are small
// distances in PDF user-space units, 2.0 by default.

use std::cmp::Ordering;

/// A run of text placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Left edge of the run, in user space
    pub x: f32,
    /// Baseline of the run, in user space
    pub y: f32,
    /// Horizontal extent of the run
    pub width: f32,
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f32, y: f32, width: f32, text: impl Into<String>) -> Self {
        Self { x, y, width, text: text.into() }
    }

    fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Word and line joining tolerances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub x_tolerance: f32,
    pub y_tolerance: f32,
}

impl Layout {
    pub fn new(x_tolerance: f32, y_tolerance: f32) -> Self {
        Self { x_tolerance, y_tolerance }
    }

    /// Assemble fragments into newline-separated lines
    pub fn assemble(&self, fragments: &[TextFragment]) -> String {
        let mut sorted: Vec<&TextFragment> = fragments
            .iter()
            .filter(|f| !f.text.is_empty())
            .collect();

        sorted.sort_by(|a, b| {
            b.y.partial_cmp(&a.y)
                .unwrap_or(Ordering::Equal)
                .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
        });

        // ── Group into lines by baseline ──────────────────────────────────────
        // Each line is anchored on the baseline of its first fragment so
        // a slowly drifting baseline cannot chain two rows together.
        let mut lines: Vec<(f32, Vec<&TextFragment>)> = Vec::new();
        for frag in sorted {
            let same_line = lines
                .last()
                .is_some_and(|(line_y, _)| (frag.y - *line_y).abs() <= self.y_tolerance);

            if let (true, Some((_, members))) = (same_line, lines.last_mut()) {
                members.push(frag);
                continue;
            }
            lines.push((frag.y, vec![frag]));
        }

        lines
            .into_iter()
            .map(|(_, mut members)| {
                members.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
                self.join_line(&members)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Join the fragments of one line, left to right
    fn join_line(&self, members: &[&TextFragment]) -> String {
        let mut out = String::new();
        let mut prev: Option<&TextFragment> = None;

        for frag in members {
            if let Some(p) = prev {
                let gap = frag.x - p.right();
                if gap > self.x_tolerance && !out.ends_with(' ') && !frag.text.starts_with(' ') {
                    out.push(' ');
                }
            }
            out.push_str(&frag.text);
            prev = Some(frag);
        }

        out
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(2.0, 2.0)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cells_on_one_baseline_become_one_line() {
        let frags = vec![
            TextFragment::new(300.0, 700.0, 20.0, "4.00"),
            TextFragment::new(50.0, 700.0, 36.0, "MEM601"),
            TextFragment::new(120.0, 700.5, 120.0, "Advanced Thermodynamics"),
        ];
        let text = Layout::default().assemble(&frags);
        assert_eq!(text, "MEM601 Advanced Thermodynamics 4.00");
    }

    #[test]
    fn test_lines_are_ordered_top_to_bottom() {
        let frags = vec![
            TextFragment::new(50.0, 680.0, 36.0, "MEM602"),
            TextFragment::new(50.0, 700.0, 36.0, "MEM601"),
        ];
        assert_eq!(Layout::default().assemble(&frags), "MEM601\nMEM602");
    }

    #[test]
    fn test_small_gap_joins_without_space() {
        // "MEM" ends at 68.0, "601" starts 1.0 later
        let frags = vec![
            TextFragment::new(50.0, 700.0, 18.0, "MEM"),
            TextFragment::new(69.0, 700.0, 18.0, "601"),
        ];
        assert_eq!(Layout::default().assemble(&frags), "MEM601");
    }

    #[test]
    fn test_x_tolerance_is_configurable() {
        let frags = vec![
            TextFragment::new(50.0, 700.0, 18.0, "MEM"),
            TextFragment::new(69.0, 700.0, 18.0, "601"),
        ];
        assert_eq!(Layout::new(0.5, 2.0).assemble(&frags), "MEM 601");
    }

    #[test]
    fn test_y_tolerance_is_configurable() {
        let frags = vec![
            TextFragment::new(50.0, 700.0, 36.0, "MEM601"),
            TextFragment::new(120.0, 697.0, 40.0, "Thermo"),
        ];
        assert_eq!(Layout::new(2.0, 2.0).assemble(&frags), "MEM601\nThermo");
        assert_eq!(Layout::new(2.0, 5.0).assemble(&frags), "MEM601 Thermo");
    }

    #[test]
    fn test_empty_fragments_are_ignored() {
        let frags = vec![
            TextFragment::new(50.0, 700.0, 0.0, ""),
            TextFragment::new(60.0, 700.0, 10.0, "A"),
        ];
        assert_eq!(Layout::default().assemble(&frags), "A");
    }

    #[test]
    fn test_no_fragments() {
        assert_eq!(Layout::default().assemble(&[]), "");
    }
}
