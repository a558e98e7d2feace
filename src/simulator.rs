use crate::error::SimulationError;
use crate::utils;

/// Saturation concentration of dissolved oxygen, in mg/L.
pub const SATURATION_DO: f64 = 9.0;

/// Rate of change of dissolved oxygen (mg/L per minute) for the current
/// concentration. The transfer term vanishes at saturation and turns
/// negative above it.
pub fn oxygen_balance(
    dissolved_oxygen: f64,
    otr: f64,
    consumption_rate: f64,
) -> f64 {
    otr * (1.0 - dissolved_oxygen / SATURATION_DO) - consumption_rate
}

fn validate_inputs(
    time: &[f64],
    initial_do: f64,
    otr: f64,
    consumption_rate: f64,
) -> Result<(), SimulationError> {
    if time.len() < 2 {
        return Err(SimulationError::TooFewPoints { found: time.len() });
    }
    if !initial_do.is_finite() {
        return Err(SimulationError::non_finite("initial_do"));
    }
    if !otr.is_finite() {
        return Err(SimulationError::non_finite("otr"));
    }
    if !consumption_rate.is_finite() {
        return Err(SimulationError::non_finite("consumption_rate"));
    }
    if time.iter().any(|t| !t.is_finite()) {
        return Err(SimulationError::non_finite("time"));
    }
    for index in 1..time.len() {
        if time[index] <= time[index - 1] {
            return Err(SimulationError::NonIncreasingGrid { index });
        }
    }
    Ok(())
}

/// Integrates the dissolved oxygen balance over `time` with the forward
/// Euler method, starting from `initial_do`.
///
/// The step is taken from the first two grid points and used for the
/// whole run. Negative concentrations are floored at zero and the floored
/// value feeds the next step.
///
/// ## Example
///
/// ```
/// use aeration_rs::simulator::simulate;
///
/// let series = simulate(&[0.0, 1.0], 2.0, 0.2, 0.1).unwrap();
/// assert_eq!(series[0], 2.0);
/// assert!((series[1] - 2.0556).abs() < 1e-4);
/// ```
pub fn simulate(
    time: &[f64],
    initial_do: f64,
    otr: f64,
    consumption_rate: f64,
) -> Result<Vec<f64>, SimulationError> {
    validate_inputs(time, initial_do, otr, consumption_rate)?;

    let dt = utils::first_step(time)
        .ok_or(SimulationError::TooFewPoints { found: time.len() })?;
    let mut series = Vec::<f64>::with_capacity(time.len());
    series.push(initial_do);
    let mut current = initial_do;
    for _ in 1..time.len() {
        let ddo = oxygen_balance(current, otr, consumption_rate);
        current += ddo * dt;
        if current < 0.0 {
            current = 0.0;
        }
        series.push(current);
    }
    Ok(series)
}
