use ratatui::style::Style;
use ratatui::text::{Line as TextLine, Span};

use crate::config::Theme;
use crate::model::{Commit, RefKind};

/// Renders one log row: lane graph cells, short hash, refs, subject, author
pub fn get_line(
    commit: &Commit,
    index: usize,
    lane_bounds: &[(usize, usize)],
    theme: &Theme,
) -> TextLine<'static> {
    let mut spans = graph_spans(commit, index, lane_bounds, theme);

    spans.push(Span::styled(
        format!("{} ", commit.short_hash),
        Style::default().fg(theme.commit_hash),
    ));

    for reference in &commit.refs {
        let color = match reference.kind {
            RefKind::Head => theme.head_label,
            RefKind::LocalBranch => theme.local_branch,
            RefKind::RemoteBranch => theme.remote_branch,
            RefKind::Tag => theme.tag_label,
        };
        spans.push(Span::styled(
            format!("{} ", reference.name),
            Style::default().fg(color),
        ));
    }

    spans.push(Span::styled(
        commit.subject.clone(),
        Style::default().fg(theme.subject),
    ));

    if !commit.author.is_empty() {
        spans.push(Span::styled(
            format!(" ({})", commit.author),
            Style::default().fg(theme.author),
        ));
    }

    TextLine::from(spans)
}

fn graph_spans(
    commit: &Commit,
    index: usize,
    lane_bounds: &[(usize, usize)],
    theme: &Theme,
) -> Vec<Span<'static>> {
    let own_lane = commit.lane();
    let lane_count = lane_bounds.len().max(own_lane + 1);

    let mut spans = Vec::with_capacity(lane_count + 1);
    for lane in 0..lane_count {
        let cell = if lane == own_lane {
            if commit.merge_commit { "◉ " } else { "● " }
        } else if lane_bounds
            .get(lane)
            .is_some_and(|&(first, last)| first <= index && index <= last)
        {
            "│ "
        } else {
            "  "
        };
        spans.push(Span::styled(cell, Style::default().fg(theme.lane_color(lane))));
    }
    spans.push(Span::raw(" "));
    spans
}
