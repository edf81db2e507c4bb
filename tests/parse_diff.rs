use logi::model::ChangeKind;
use logi::parse::parse_diff;

const MIXED_DIFF: &str = "\
diff --git a/src/config.rs b/src/config.rs
index 1111111..2222222 100644
--- a/src/config.rs
+++ b/src/config.rs
@@ -10,5 +12,7 @@ impl Config {
 fn load() {
-    let theme = none;
+    let theme = default();
+    let layout = lanes();
 }
@@ -40 +44,2 @@
 trailing();
+appended();
diff --git a/docs/old.md b/docs/new.md
similarity index 90%
rename from docs/old.md
rename to docs/new.md
index 3333333..4444444 100644
--- a/docs/old.md
+++ b/docs/new.md
@@ -1,2 +1,2 @@
-# Old title
+# New title
 unchanged
diff --git a/LICENSE b/LICENSE
new file mode 100644
index 0000000..5555555
--- /dev/null
+++ b/LICENSE
@@ -0,0 +1 @@
+MIT
";

#[test]
fn test_one_record_per_file_section() {
    let files = parse_diff(MIXED_DIFF);
    assert_eq!(files.len(), 3);
    assert_eq!(files[0].path, "src/config.rs");
    assert_eq!(files[1].path, "docs/new.md");
    assert_eq!(files[2].path, "LICENSE");
}

#[test]
fn test_change_kinds_per_file() {
    let files = parse_diff(MIXED_DIFF);
    assert_eq!(files[0].kind, ChangeKind::Modified);
    assert_eq!(files[1].kind, ChangeKind::Renamed);
    assert_eq!(files[1].old_path.as_deref(), Some("docs/old.md"));
    assert_eq!(files[2].kind, ChangeKind::Added);
}

#[test]
fn test_hunk_headers_parse_with_defaults() {
    let files = parse_diff(MIXED_DIFF);
    let hunks = &files[0].hunks;
    assert_eq!(hunks.len(), 2);

    assert_eq!(hunks[0].old_start, 10);
    assert_eq!(hunks[0].old_lines, 5);
    assert_eq!(hunks[0].new_start, 12);
    assert_eq!(hunks[0].new_lines, 7);

    // omitted counts default to one
    assert_eq!(hunks[1].old_start, 40);
    assert_eq!(hunks[1].old_lines, 1);
    assert_eq!(hunks[1].new_start, 44);
    assert_eq!(hunks[1].new_lines, 2);

    assert!(hunks[0].new_start < hunks[1].new_start);
}

#[test]
fn test_raw_sections_do_not_overlap() {
    let files = parse_diff(MIXED_DIFF);

    for file in &files {
        assert!(file.raw.starts_with("diff --git "));
    }
    assert!(!files[0].raw.contains("docs/new.md"));
    assert!(!files[1].raw.contains("LICENSE"));
    assert!(!files[2].raw.contains("config.rs"));

    // everything in the input belongs to exactly one section
    let total: usize = files.iter().map(|f| f.raw.lines().count()).sum();
    assert_eq!(total, MIXED_DIFF.lines().count());
}

#[test]
fn test_hunk_lines_are_verbatim() {
    let files = parse_diff(MIXED_DIFF);
    let lines = &files[0].hunks[0].lines;
    assert_eq!(lines[0], " fn load() {");
    assert_eq!(lines[1], "-    let theme = none;");
    assert_eq!(lines[2], "+    let theme = default();");
}
