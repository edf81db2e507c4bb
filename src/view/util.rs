use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};

use crate::model::Commit;

/// For every lane, the first and last commit indices drawn on it.
/// Continuation bars are only rendered inside that range.
pub fn lane_bounds(commits: &[Commit]) -> Vec<(usize, usize)> {
    let mut bounds: Vec<(usize, usize)> = Vec::new();
    for (index, commit) in commits.iter().enumerate() {
        let lane = commit.lane();
        if bounds.len() <= lane {
            bounds.resize(lane + 1, (usize::MAX, 0));
        }
        let entry = &mut bounds[lane];
        entry.0 = entry.0.min(index);
        entry.1 = entry.1.max(index);
    }
    bounds
}

/// Pads the line to the full content width and applies the selection
/// background on top of the existing span colors
pub fn apply_selection(line: TextLine<'static>, width: usize, bg: Color) -> TextLine<'static> {
    let line_width: usize = line
        .spans
        .iter()
        .map(|span| span.content.chars().count())
        .sum();

    let mut spans = line.spans;
    if width > line_width {
        spans.push(Span::raw(" ".repeat(width - line_width)));
    }
    TextLine::from(spans).style(Style::default().bg(bg))
}
