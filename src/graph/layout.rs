use crate::model::{Commit, GraphPosition};

pub const BASE_OFFSET: u32 = 40;
pub const LANE_WIDTH: u32 = 32;
pub const ROW_HEIGHT: u32 = 48;

/// Assigns coordinates to every commit of an oldest-first sequence.
///
/// Strategies are interchangeable: resolving one by name replaces the
/// default heuristic, it never runs on top of it.
pub trait LayoutStrategy {
    fn name(&self) -> &'static str;
    fn assign(&self, commits: &mut [Commit]);
}

/// Default layout: one vertical lane per concurrent branch line.
///
/// Walks the commits oldest first, keeping per lane the hash of the most
/// recent commit drawn on it. A commit whose first parent is the current
/// occupant of a lane continues that lane; anything else takes the first
/// free lane or opens a new one. Merges get no convergence treatment
/// beyond following their first parent.
pub struct LaneLayout;

impl LayoutStrategy for LaneLayout {
    fn name(&self) -> &'static str {
        "lanes"
    }

    fn assign(&self, commits: &mut [Commit]) {
        let mut lanes: Vec<Option<String>> = Vec::new();

        for index in 0..commits.len() {
            let lane = commits[index]
                .first_parent()
                .and_then(|parent| lane_occupied_by(&lanes, parent))
                .or_else(|| lanes.iter().position(Option::is_none))
                .unwrap_or_else(|| {
                    lanes.push(None);
                    lanes.len() - 1
                });

            lanes[lane] = Some(commits[index].hash.clone());
            commits[index].position = Some(GraphPosition {
                x: BASE_OFFSET + lane as u32 * LANE_WIDTH,
                y: BASE_OFFSET + index as u32 * ROW_HEIGHT,
                lane,
            });
        }
    }
}

fn lane_occupied_by(lanes: &[Option<String>], parent: &str) -> Option<usize> {
    lanes
        .iter()
        .position(|slot| slot.as_deref().is_some_and(|hash| same_commit(hash, parent)))
}

/// Hashes from different log lines may be abbreviated to different widths
fn same_commit(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.starts_with(b) || b.starts_with(a))
}

/// Resolves a layout strategy by name. Only the lane heuristic ships
/// today; unknown names fall back to it rather than failing, matching the
/// permissive parsing policy.
pub fn strategy_named(_name: &str) -> Box<dyn LayoutStrategy> {
    Box::new(LaneLayout)
}
