use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{Commit, FileStat, RefKind, RefName};

/// Message lines are indented at least this deep once the graph prefix
/// is stripped; header and stat lines sit closer to the margin.
const MESSAGE_INDENT: usize = 4;

lazy_static! {
    /// `commit <hash> [<parent hashes>] [(decorations)]`, graph prefix already stripped
    static ref COMMIT_LINE: Regex =
        Regex::new(r"^commit ([0-9a-f]{4,40})((?: [0-9a-f]{4,40})*)(?: \((.+)\))?$").unwrap();
    static ref AUTHOR_LINE: Regex = Regex::new(r"^Author:\s*(.*?)\s*<([^>]*)>$").unwrap();
    static ref COMMITTER_LINE: Regex = Regex::new(r"^Commit(?:ter)?:\s*(.*?)\s*<([^>]*)>$").unwrap();
    static ref AUTHOR_DATE_LINE: Regex = Regex::new(r"^(?:AuthorDate|Date):\s+(.+)$").unwrap();
    static ref COMMIT_DATE_LINE: Regex = Regex::new(r"^CommitDate:\s+(.+)$").unwrap();
    static ref PARENT_LINE: Regex = Regex::new(r"^Parent:\s+([0-9a-f]{4,40})$").unwrap();
    static ref MERGE_LINE: Regex =
        Regex::new(r"^Merge:\s+([0-9a-f]{4,40}(?:\s+[0-9a-f]{4,40})+)$").unwrap();
    static ref FILE_STAT_LINE: Regex =
        Regex::new(r"^(\S[^|]*?)\s+\|\s+(\d+)(?:\s+([+-]+))?$").unwrap();
    static ref SUMMARY_LINE: Regex = Regex::new(
        r"^\d+ files? changed(?:, (\d+) insertions?\(\+\))?(?:, (\d+) deletions?\(-\))?$"
    )
    .unwrap();
    /// Conventional-commit prefix on the subject: `type(scope): ...` or `type: ...`
    static ref KIND_PREFIX: Regex =
        Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)(?:\([^)]*\))?!?:\s+\S").unwrap();
}

/// Where the line scanner currently is within a commit block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the first commit marker
    Seeking,
    /// Author/committer/date/parent lines
    Headers,
    /// Subject and body text
    Message,
    /// The trailing `--stat` block
    Stats,
}

/// Accumulates one commit while its lines are being scanned.
/// Finalized into an immutable [`Commit`] at the next commit boundary.
#[derive(Default)]
struct CommitBuilder {
    hash: String,
    parents: Vec<String>,
    refs: Vec<RefName>,
    subject: String,
    body: Vec<String>,
    author: String,
    author_email: String,
    committer: String,
    committer_email: String,
    author_date: String,
    commit_date: String,
    merge_seen: bool,
    /// Indent depth of the subject line; body lines are stripped to it
    message_indent: usize,
    /// Raw per-file stat lines, resolved at finish
    stat_lines: Vec<(String, usize, Option<String>)>,
    summary_insertions: Option<usize>,
    summary_deletions: Option<usize>,
}

impl CommitBuilder {
    fn start(hash: String, parents: Vec<String>, refs: Vec<RefName>) -> Self {
        Self {
            hash,
            parents,
            refs,
            message_indent: MESSAGE_INDENT,
            ..Self::default()
        }
    }

    fn finish(mut self) -> Commit {
        while self.body.last().is_some_and(|line| line.is_empty()) {
            self.body.pop();
        }

        let kind = KIND_PREFIX
            .captures(&self.subject)
            .map(|caps| caps[1].to_lowercase())
            .unwrap_or_else(|| "chore".to_string());

        let stats: Vec<FileStat> = self
            .stat_lines
            .into_iter()
            .map(|(path, total, markers)| {
                let (insertions, deletions) = split_stat(total, markers.as_deref());
                FileStat {
                    path,
                    insertions,
                    deletions,
                }
            })
            .collect();
        let file_insertions: usize = stats.iter().map(|s| s.insertions).sum();
        let file_deletions: usize = stats.iter().map(|s| s.deletions).sum();

        let short_hash = self.hash.chars().take(7).collect();
        let merge_commit = self.merge_seen || self.parents.len() > 1;
        let date = if self.commit_date.is_empty() {
            self.author_date
        } else {
            self.commit_date
        };

        Commit {
            hash: self.hash,
            short_hash,
            refs: self.refs,
            subject: self.subject,
            body: self.body.join("\n"),
            kind,
            author: self.author,
            author_email: self.author_email,
            committer: self.committer,
            committer_email: self.committer_email,
            date,
            parents: self.parents,
            merge_commit,
            insertions: self.summary_insertions.unwrap_or(file_insertions),
            deletions: self.summary_deletions.unwrap_or(file_deletions),
            stats,
            position: None,
        }
    }
}

/// Parses the text of a verbose, graph-decorated log into commits.
///
/// The scanner is permissive: lines it does not recognize are skipped, and
/// malformed input degrades into partially-filled records rather than an
/// error. The returned list is ordered oldest first.
pub fn parse_log(text: &str) -> Vec<Commit> {
    let mut commits = Vec::new();
    let mut state = ParseState::Seeking;
    let mut current: Option<CommitBuilder> = None;

    for raw_line in text.lines() {
        let (indent, rest) = split_graph_prefix(raw_line);
        let content = rest.trim_end().trim_start();

        // Commit boundaries first; an indented occurrence is message text
        if indent < MESSAGE_INDENT
            && let Some(caps) = COMMIT_LINE.captures(content)
        {
            if let Some(done) = current.take() {
                commits.push(done.finish());
            }
            let hash = caps[1].to_string();
            let parents = caps
                .get(2)
                .map(|m| m.as_str().split_whitespace().map(String::from).collect())
                .unwrap_or_default();
            let refs = caps.get(3).map(|m| parse_refs(m.as_str())).unwrap_or_default();
            current = Some(CommitBuilder::start(hash, parents, refs));
            state = ParseState::Headers;
            continue;
        }

        // Everything before the first commit marker is ignored
        let Some(builder) = current.as_mut() else {
            continue;
        };

        if content.is_empty() {
            match state {
                ParseState::Headers => state = ParseState::Message,
                ParseState::Message if !builder.body.is_empty() => builder.body.push(String::new()),
                _ => {}
            }
            continue;
        }

        if indent >= MESSAGE_INDENT {
            if builder.subject.is_empty() {
                builder.subject = content.to_string();
                builder.message_indent = indent;
                state = ParseState::Message;
            } else if state == ParseState::Message {
                // keep any indentation beyond the subject's own depth
                let strip = builder.message_indent.min(indent);
                builder.body.push(rest[strip..].trim_end().to_string());
            }
            continue;
        }

        match state {
            ParseState::Headers => {
                if let Some(caps) = AUTHOR_LINE.captures(content) {
                    builder.author = caps[1].to_string();
                    builder.author_email = caps[2].to_string();
                } else if let Some(caps) = COMMIT_DATE_LINE.captures(content) {
                    builder.commit_date = caps[1].to_string();
                } else if let Some(caps) = COMMITTER_LINE.captures(content) {
                    builder.committer = caps[1].to_string();
                    builder.committer_email = caps[2].to_string();
                } else if let Some(caps) = AUTHOR_DATE_LINE.captures(content) {
                    builder.author_date = caps[1].to_string();
                } else if let Some(caps) = MERGE_LINE.captures(content) {
                    builder.parents = caps[1].split_whitespace().map(String::from).collect();
                    builder.merge_seen = true;
                } else if let Some(caps) = PARENT_LINE.captures(content) {
                    builder.parents.push(caps[1].to_string());
                } else if buffer_stat_line(builder, content) {
                    state = ParseState::Stats;
                } else if builder.subject.is_empty() {
                    builder.subject = content.to_string();
                    state = ParseState::Message;
                }
            }
            ParseState::Message | ParseState::Stats => {
                if buffer_stat_line(builder, content) {
                    state = ParseState::Stats;
                } else if state == ParseState::Message && builder.subject.is_empty() {
                    builder.subject = content.to_string();
                }
            }
            ParseState::Seeking => {}
        }
    }

    if let Some(done) = current.take() {
        commits.push(done.finish());
    }

    // logs arrive newest first; the graph is drawn oldest first
    commits.reverse();
    commits
}

/// Buffers a per-file or aggregate stat line; returns false when the
/// content is not a stat line at all.
fn buffer_stat_line(builder: &mut CommitBuilder, content: &str) -> bool {
    if let Some(caps) = SUMMARY_LINE.captures(content) {
        builder.summary_insertions = caps.get(1).and_then(|m| m.as_str().parse().ok());
        builder.summary_deletions = caps.get(2).and_then(|m| m.as_str().parse().ok());
        return true;
    }
    if let Some(caps) = FILE_STAT_LINE.captures(content) {
        let path = caps[1].trim_end().to_string();
        let Ok(total) = caps[2].parse::<usize>() else {
            return true;
        };
        let markers = caps.get(3).map(|m| m.as_str().to_string());
        builder.stat_lines.push((path, total, markers));
        return true;
    }
    false
}

/// Divides a stat-line total into insertions and deletions.
///
/// The `+`/`-` markers are width-scaled by git, so they give a proportion,
/// not absolute counts. With no markers at all the total is split evenly,
/// odd line going to insertions.
fn split_stat(total: usize, markers: Option<&str>) -> (usize, usize) {
    let plus = markers.map_or(0, |m| m.matches('+').count());
    let minus = markers.map_or(0, |m| m.matches('-').count());
    match (plus, minus) {
        (0, 0) => {
            let insertions = total.div_ceil(2);
            (insertions, total - insertions)
        }
        (_, 0) => (total, 0),
        (0, _) => (0, total),
        _ => {
            let insertions = (total * plus + (plus + minus) / 2) / (plus + minus);
            (insertions, total - insertions)
        }
    }
}

/// Classifies the comma-separated decoration tokens on a commit line
fn parse_refs(text: &str) -> Vec<RefName> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if let Some(tag) = token.strip_prefix("tag: ") {
                RefName::new(tag, RefKind::Tag)
            } else if let Some(branch) = token.strip_prefix("HEAD -> ") {
                RefName::new(branch, RefKind::Head)
            } else if token == "HEAD" {
                RefName::new(token, RefKind::Head)
            } else if token.contains("origin/") {
                RefName::new(token, RefKind::RemoteBranch)
            } else {
                RefName::new(token, RefKind::LocalBranch)
            }
        })
        .collect()
}

/// Splits a log line into its graph-column prefix and the text after it.
/// Returns the indentation depth of the remainder together with the
/// remainder itself, leading spaces included.
fn split_graph_prefix(line: &str) -> (usize, &str) {
    let mut after_graph = 0;
    let mut spaces = 0;
    for (i, c) in line.char_indices() {
        match c {
            ' ' => spaces += 1,
            '|' | '\\' | '/' | '*' => {
                // graph columns are single-space separated; a wider gap
                // means the indented message text has started
                if spaces >= 2 {
                    break;
                }
                after_graph = i + 1;
                spaces = 0;
            }
            _ => break,
        }
    }
    let rest = &line[after_graph..];
    let indent = rest.len() - rest.trim_start_matches(' ').len();
    (indent, rest)
}
