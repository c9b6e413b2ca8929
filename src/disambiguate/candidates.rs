use crate::error::FitError;
use crate::geometry::Line;
use std::cmp::Ordering;

/// Candidate lines of one image, bottommost (largest `|ρ|`) first.
///
/// The order is fixed at construction and survives filtering: the table
/// edge is picked by position.
#[derive(Clone, Debug, PartialEq)]
pub struct LineCandidateSet {
    lines: Vec<Line>,
}

impl LineCandidateSet {
    /// Sorts `lines` by descending `|ρ|` (stable for ties). Fails when there
    /// is nothing to choose from.
    pub fn new(mut lines: Vec<Line>) -> Result<Self, FitError> {
        if lines.is_empty() {
            return Err(FitError::NoCandidateRemaining { initial: 0 });
        }
        lines.sort_by(|a, b| {
            b.abs_distance()
                .partial_cmp(&a.abs_distance())
                .unwrap_or(Ordering::Equal)
        });
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn line(distance: f32) -> Line {
        Line::new(1.5, distance, Point::new(0.0, 0.0), Point::new(1.0, 0.0))
    }

    #[test]
    fn sorted_by_descending_absolute_distance() {
        let set = LineCandidateSet::new(vec![line(10.0), line(-300.0), line(120.0)])
            .expect("non-empty");
        let d: Vec<f32> = set.lines().iter().map(|l| l.distance).collect();
        assert_eq!(d, vec![-300.0, 120.0, 10.0]);
        assert_eq!(set.lines()[0].distance, -300.0);
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(
            LineCandidateSet::new(Vec::new()),
            Err(FitError::NoCandidateRemaining { initial: 0 })
        );
    }
}
