mod utils;

use logi::graph::layout::{LaneLayout, LayoutStrategy, ROW_HEIGHT, strategy_named};
use logi::parse::parse_log;
use utils::sample_commits;

#[test]
fn test_linear_history_is_single_lane() {
    let text = "\
commit cccc3333 bbbb2222
Author: A <a@example.com>

    three

commit bbbb2222 aaaa1111
Author: A <a@example.com>

    two

commit aaaa1111
Author: A <a@example.com>

    one
";
    let mut commits = parse_log(text);
    LaneLayout.assign(&mut commits);

    assert!(commits.iter().all(|c| c.lane() == 0));
    let ys: Vec<u32> = commits
        .iter()
        .map(|c| c.position.expect("layout ran").y)
        .collect();
    assert!(ys.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ys[1] - ys[0], ROW_HEIGHT);
}

#[test]
fn test_merge_follows_first_parent_lane() {
    let commits = sample_commits();

    // main line: aaaa1111 -> bbbb2222 -> cccc3333 -> merge
    let main_line = &commits[2];
    let side = &commits[3];
    let merge = &commits[4];

    assert!(merge.merge_commit);
    assert_eq!(merge.lane(), main_line.lane());
    assert_ne!(side.lane(), main_line.lane());
}

#[test]
fn test_every_commit_gets_a_position() {
    let commits = sample_commits();
    assert!(commits.iter().all(|c| c.position.is_some()));
}

#[test]
fn test_named_strategy_resolves() {
    let strategy = strategy_named("lanes");
    assert_eq!(strategy.name(), "lanes");

    // unknown names fall back to the lane heuristic instead of failing
    let fallback = strategy_named("treemap");
    assert_eq!(fallback.name(), "lanes");
}
