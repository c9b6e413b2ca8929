//! Noise filters over the distance-sorted candidate list.
//!
//! Each filter only removes lines and never reorders the survivors, so the
//! output of every stage is a subsequence of its input.

use crate::angle::orientation_gap;
use crate::detector::params::FrameTest;
use crate::geometry::{segment_intersect, Line};

/// Drops near-vertical lines (`|θ| <= min_angle`): table legs and frame
/// edges rather than the table's front edge.
pub fn filter_orientation(lines: &[Line], min_angle: f32) -> Vec<Line> {
    lines
        .iter()
        .filter(|l| l.abs_orientation() > min_angle)
        .copied()
        .collect()
}

/// Drops the first (bottommost) line when its `|ρ|` is more than `max_gap`
/// away from every other line: that is the floor or the skirting board.
///
/// Only the first line is ever dropped. Other isolated lines may well be the
/// table edge. A lone line has nothing to be isolated from and is kept.
pub fn filter_isolated_bottom(lines: &[Line], max_gap: f32) -> Vec<Line> {
    let Some(first) = lines.first() else {
        return Vec::new();
    };
    let peers = &lines[1..];
    let isolated = !peers.is_empty()
        && peers
            .iter()
            .all(|other| (other.abs_distance() - first.abs_distance()).abs() > max_gap);
    if isolated {
        peers.to_vec()
    } else {
        lines.to_vec()
    }
}

/// Resolves pairs of lines that cross inside the frame at a sharp angle.
///
/// Candidates are visited in order. For each one still present, the other
/// remaining lines are scanned in order; the first one whose `|θ|` differs
/// by more than `max_turn` and whose border-to-border segment crosses the
/// candidate's inside the frame settles the pair: the line with the smaller
/// `|θ|` is dropped and the scan moves on to the next candidate.
pub fn filter_crossings(
    lines: &[Line],
    max_turn: f32,
    frame: FrameTest,
    width: f32,
    height: f32,
) -> Vec<Line> {
    let mut alive = vec![true; lines.len()];
    for i in 0..lines.len() {
        if !alive[i] {
            continue;
        }
        let current = &lines[i];
        for j in 0..lines.len() {
            if j == i || !alive[j] {
                continue;
            }
            let other = &lines[j];
            if orientation_gap(current.orientation, other.orientation) <= max_turn {
                continue;
            }
            let Some(p) = segment_intersect(&other.segment(), &current.segment()) else {
                continue;
            };
            if !frame.contains(p.x, p.y, width, height) {
                continue;
            }
            let loser = if other.abs_orientation() > current.abs_orientation() {
                i
            } else {
                j
            };
            alive[loser] = false;
            break;
        }
    }
    lines
        .iter()
        .zip(alive)
        .filter_map(|(line, keep)| keep.then_some(*line))
        .collect()
}
