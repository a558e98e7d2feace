/// Helper function for building `num_points` evenly spaced values over
/// the closed interval `[start, end]`. The last value is set exactly to
/// `end`, so rounding in the step never shortens the horizon.
///
/// ## Example
///
/// ```
/// let t = aeration_rs::utils::linspace(0.0, 1.0, 5);
/// assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_points - 1) as f64;
            let mut points: Vec<f64> = (0..num_points)
                .map(|i| start + i as f64 * step)
                .collect();
            points[num_points - 1] = end;
            points
        }
    }
}

/// Step between the first two points of a grid, `None` when the grid
/// has fewer than two points.
pub fn first_step(points: &[f64]) -> Option<f64> {
    match points {
        [first, second, ..] => Some(second - first),
        _ => None,
    }
}
