/// Minimum dissolved oxygen that keeps the biomass aerobic, in mg/L.
pub const MINIMUM_DO_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRow {
    pub time: f64,
    pub dissolved_oxygen: f64,
    pub below_threshold: bool,
}

/// Dissolved oxygen series paired with the times it was computed at.
#[derive(Debug, Clone, PartialEq)]
pub struct DoProfile {
    time: Vec<f64>,
    dissolved_oxygen: Vec<f64>,
}

impl DoProfile {
    /// # Panics
    ///
    /// Panics if `time` and `dissolved_oxygen` differ in length.
    pub fn new(time: Vec<f64>, dissolved_oxygen: Vec<f64>) -> Self {
        assert_eq!(
            time.len(),
            dissolved_oxygen.len(),
            "Time and dissolved oxygen series must have same length"
        );
        Self {
            time,
            dissolved_oxygen,
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn dissolved_oxygen(&self) -> &[f64] {
        &self.dissolved_oxygen
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn final_do(&self) -> Option<f64> {
        self.dissolved_oxygen.last().copied()
    }

    pub fn min_do(&self) -> Option<f64> {
        self.dissolved_oxygen.iter().copied().reduce(f64::min)
    }

    pub fn max_do(&self) -> Option<f64> {
        self.dissolved_oxygen.iter().copied().reduce(f64::max)
    }

    pub fn points_below_threshold(&self) -> usize {
        self.dissolved_oxygen
            .iter()
            .filter(|v| **v < MINIMUM_DO_THRESHOLD)
            .count()
    }

    pub fn first_time_below_threshold(&self) -> Option<f64> {
        self.rows().find(|r| r.below_threshold).map(|r| r.time)
    }

    pub fn rows(&self) -> impl Iterator<Item = ProfileRow> + '_ {
        self.time.iter().zip(self.dissolved_oxygen.iter()).map(|(t, v)| {
            ProfileRow {
                time: *t,
                dissolved_oxygen: *v,
                below_threshold: *v < MINIMUM_DO_THRESHOLD,
            }
        })
    }

    pub fn final_level_message(&self) -> String {
        format!(
            "Final Dissolved Oxygen Level: {:.2} mg/L",
            self.final_do().unwrap_or(0.0)
        )
    }
}
