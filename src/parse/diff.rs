use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{ChangeKind, DiffHunk, FileDiff};

lazy_static! {
    static ref FILE_HEADER: Regex = Regex::new(r"^diff --git a/(.*?) b/(.*)$").unwrap();
    static ref HUNK_HEADER: Regex =
        Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap();
}

/// Accumulates one file section of the diff until the next `diff --git`
/// boundary or the end of input.
struct FileBuilder {
    path: String,
    old_path: Option<String>,
    kind: ChangeKind,
    hunks: Vec<DiffHunk>,
    hunk: Option<DiffHunk>,
    raw: Vec<String>,
}

impl FileBuilder {
    fn new(path: String) -> Self {
        Self {
            path,
            old_path: None,
            kind: ChangeKind::Modified,
            hunks: Vec::new(),
            hunk: None,
            raw: Vec::new(),
        }
    }

    fn flush_hunk(&mut self) {
        if let Some(hunk) = self.hunk.take() {
            self.hunks.push(hunk);
        }
    }

    fn finish(mut self) -> FileDiff {
        self.flush_hunk();
        FileDiff {
            path: self.path,
            old_path: self.old_path,
            kind: self.kind,
            hunks: self.hunks,
            raw: self.raw.join("\n"),
        }
    }
}

/// Parses unified-diff text into per-file records.
///
/// Content before the first `diff --git` header is ignored; within a file
/// section every line is retained in the raw text, and lines the scanner
/// does not recognize are otherwise skipped.
pub fn parse_diff(text: &str) -> Vec<FileDiff> {
    let mut files = Vec::new();
    let mut current: Option<FileBuilder> = None;

    for line in text.lines() {
        if let Some(caps) = FILE_HEADER.captures(line) {
            if let Some(done) = current.take() {
                files.push(done.finish());
            }
            let mut file = FileBuilder::new(caps[2].to_string());
            file.raw.push(line.to_string());
            current = Some(file);
            continue;
        }

        let Some(file) = current.as_mut() else {
            continue;
        };
        file.raw.push(line.to_string());

        if let Some(caps) = HUNK_HEADER.captures(line) {
            file.flush_hunk();
            // omitted counts mean a single-line hunk
            let old_start = caps[1].parse().unwrap_or(0);
            let old_lines = caps.get(2).map_or(1, |m| m.as_str().parse().unwrap_or(1));
            let new_start = caps[3].parse().unwrap_or(0);
            let new_lines = caps.get(4).map_or(1, |m| m.as_str().parse().unwrap_or(1));
            file.hunk = Some(DiffHunk::new(old_start, old_lines, new_start, new_lines));
        } else if let Some(old) = line.strip_prefix("rename from ") {
            file.kind = ChangeKind::Renamed;
            file.old_path = Some(old.to_string());
        } else if let Some(new) = line.strip_prefix("rename to ") {
            file.kind = ChangeKind::Renamed;
            file.path = new.to_string();
        } else if line.starts_with("new file mode") {
            file.kind = ChangeKind::Added;
        } else if line.starts_with("deleted file mode") {
            file.kind = ChangeKind::Deleted;
        } else if line.starts_with(['+', '-', ' ', '\\'])
            && let Some(hunk) = file.hunk.as_mut()
        {
            hunk.lines.push(line.to_string());
        }
    }

    if let Some(done) = current.take() {
        files.push(done.finish());
    }

    files
}
