use crate::error::SimulationError;
use crate::utils;

pub const DEFAULT_HORIZON_START: f64 = 0.0;
pub const DEFAULT_HORIZON_END: f64 = 120.0;
pub const DEFAULT_NUM_POINTS: usize = 120;
/// Largest grid accepted from a case file.
pub const MAX_NUM_POINTS: usize = 1_000_000;

/// Evenly spaced simulation times, in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    pub fn new(start: f64, end: f64, num_points: usize) -> Self {
        Self {
            points: utils::linspace(start, end, num_points),
        }
    }

    /// Same as `new`, but refuses grids above `MAX_NUM_POINTS` before
    /// allocating them.
    pub fn try_new(
        start: f64,
        end: f64,
        num_points: usize,
    ) -> Result<Self, SimulationError> {
        if num_points > MAX_NUM_POINTS {
            return Err(SimulationError::TooManyPoints {
                found: num_points,
                max: MAX_NUM_POINTS,
            });
        }
        Ok(Self::new(start, end, num_points))
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance between the first two points, or `None` when the grid
    /// has fewer than two of them.
    pub fn step(&self) -> Option<f64> {
        utils::first_step(&self.points)
    }

    pub fn horizon(&self) -> Option<(f64, f64)> {
        Some((*self.points.first()?, *self.points.last()?))
    }

    pub fn into_points(self) -> Vec<f64> {
        self.points
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_START, DEFAULT_HORIZON_END, DEFAULT_NUM_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_time_grid() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 120);
        assert_eq!(grid.horizon(), Some((0.0, 120.0)));
        let step = grid.step().unwrap();
        assert!((step - 120.0 / 119.0).abs() < 1e-12);
    }

    #[test]
    fn test_time_grid_without_step() {
        let grid = TimeGrid::new(0.0, 10.0, 1);
        assert_eq!(grid.step(), None);
        assert_eq!(grid.horizon(), Some((0.0, 0.0)));
        assert!(TimeGrid::new(0.0, 10.0, 0).is_empty());
        assert_eq!(TimeGrid::new(0.0, 10.0, 0).horizon(), None);
    }

    #[test]
    fn test_try_new_bounds_grid_size() {
        let grid = TimeGrid::try_new(0.0, 10.0, MAX_NUM_POINTS).unwrap();
        assert_eq!(grid.len(), MAX_NUM_POINTS);
        assert_eq!(
            TimeGrid::try_new(0.0, 10.0, 100_000_000),
            Err(SimulationError::TooManyPoints {
                found: 100_000_000,
                max: MAX_NUM_POINTS,
            })
        );
    }

    #[test]
    fn test_time_grid_is_strictly_increasing() {
        let grid = TimeGrid::new(5.0, 65.0, 61);
        for pair in grid.points().windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert_eq!(grid.into_points().len(), 61);
    }
}
