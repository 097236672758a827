//! Two-point selection state

use super::annotation::AngleAnnotation;
use super::geometry::Point;

/// Whether a pair is half-way collected
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No point pending
    #[default]
    Empty,
    /// First point recorded, waiting for the second
    OneSelected,
}

/// Outcome of pushing a point into a [`PendingSelection`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionStep {
    /// The point started a new pair
    Started(Point),
    /// The point completed a pair
    Completed(AngleAnnotation),
}

/// Holds at most one point awaiting its partner
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PendingSelection {
    first: Option<Point>,
}

impl PendingSelection {
    pub fn state(&self) -> SelectionState {
        match self.first {
            Some(_) => SelectionState::OneSelected,
            None => SelectionState::Empty,
        }
    }

    /// The first point of the pair being collected, if any
    pub fn first(&self) -> Option<Point> {
        self.first
    }

    /// Record a point; the second point of a pair resets the selection
    pub fn push(&mut self, point: Point) -> SelectionStep {
        match self.first.take() {
            Some(first) => SelectionStep::Completed(AngleAnnotation::from_pair(first, point)),
            None => {
                self.first = Some(point);
                SelectionStep::Started(point)
            }
        }
    }

    pub fn clear(&mut self) {
        self.first = None;
    }
}
