use ratatui::style::Style;
use ratatui::text::{Line as TextLine, Span};

use crate::config::Theme;
use crate::model::{Commit, FileDiff};

/// Renders the diff screen for one commit: header, message, stat
/// summary, then every file section with its hunks
pub fn get_lines(commit: &Commit, files: &[FileDiff], theme: &Theme) -> Vec<TextLine<'static>> {
    let mut lines = Vec::new();

    lines.push(TextLine::from(Span::styled(
        format!("commit {}", commit.hash),
        Style::default().fg(theme.commit_hash),
    )));
    lines.push(TextLine::from(Span::styled(
        format!("Author: {} <{}>", commit.author, commit.author_email),
        Style::default().fg(theme.text),
    )));
    lines.push(TextLine::from(Span::styled(
        format!("Date:   {}", commit.date),
        Style::default().fg(theme.date),
    )));
    lines.push(TextLine::from(""));

    lines.push(TextLine::from(Span::styled(
        format!("    {}", commit.subject),
        Style::default().fg(theme.subject),
    )));
    for body_line in commit.body.lines() {
        lines.push(TextLine::from(Span::styled(
            format!("    {}", body_line),
            Style::default().fg(theme.text),
        )));
    }
    lines.push(TextLine::from(""));

    for stat in &commit.stats {
        lines.push(TextLine::from(vec![
            Span::styled(
                format!(" {} | ", stat.path),
                Style::default().fg(theme.file_path),
            ),
            Span::styled(
                format!("+{}", stat.insertions),
                Style::default().fg(theme.diff_addition),
            ),
            Span::raw(" "),
            Span::styled(
                format!("-{}", stat.deletions),
                Style::default().fg(theme.diff_deletion),
            ),
        ]));
    }
    if !commit.stats.is_empty() {
        lines.push(TextLine::from(""));
    }

    for file in files {
        lines.push(TextLine::from(Span::styled(
            file_heading(file),
            Style::default().fg(theme.file_path),
        )));
        for hunk in &file.hunks {
            lines.push(TextLine::from(Span::styled(
                hunk.header(),
                Style::default().fg(theme.diff_hunk),
            )));
            for line in &hunk.lines {
                let color = match line.chars().next() {
                    Some('+') => theme.diff_addition,
                    Some('-') => theme.diff_deletion,
                    _ => theme.diff_context,
                };
                lines.push(TextLine::from(Span::styled(
                    line.clone(),
                    Style::default().fg(color),
                )));
            }
        }
        lines.push(TextLine::from(""));
    }

    lines
}

/// Number of lines [`get_lines`] produces, used to clamp scrolling
pub fn line_count(commit: &Commit, files: &[FileDiff]) -> usize {
    let header = 4;
    let message = 1 + commit.body.lines().count() + 1;
    let stats = if commit.stats.is_empty() {
        0
    } else {
        commit.stats.len() + 1
    };
    let diffs: usize = files
        .iter()
        .map(|file| {
            2 + file
                .hunks
                .iter()
                .map(|hunk| 1 + hunk.lines.len())
                .sum::<usize>()
        })
        .sum();
    header + message + stats + diffs
}

fn file_heading(file: &FileDiff) -> String {
    match &file.old_path {
        Some(old) => format!("{} {} -> {}", file.kind.label(), old, file.path),
        None => format!("{} {}", file.kind.label(), file.path),
    }
}
