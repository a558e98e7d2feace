use crate::grid::TimeGrid;
use crate::parameters::AerationParameters;
use crate::profile::{DoProfile, MINIMUM_DO_THRESHOLD};
use std::time::Duration;

pub fn show_greeting() {
    println!("# aeration - dissolved oxygen in aeration tanks");
}

pub fn input_reading_line(path: &str) {
    println!("\nReading input files from '{path}'");
}

/// Helper function for displaying the operating point of the run
pub fn parameters_table(parameters: &AerationParameters, time_grid: &TimeGrid) {
    println!("\n# Parameters");
    println!("- Oxygen transfer efficiency (%): {}", parameters.ote());
    println!(
        "- Oxygen consumption rate (mg/L/min): {:.2}",
        parameters.consumption_rate()
    );
    println!(
        "- Initial dissolved oxygen (mg/L): {:.2}",
        parameters.initial_do()
    );
    if let Some((start, end)) = time_grid.horizon() {
        println!("- Horizon (min): {start} to {end}");
    }
    println!("- Time points: {}", time_grid.len());
    if let Some(step) = time_grid.step() {
        println!("- Time step (min): {step:.4}");
    }
}

/// Helper function for displaying the profile table header
pub fn profile_table_header() {
    println!("\n{0: ^10} | {1: ^12} | {2: ^9}", "time (min)", "DO (mg/L)", "below");
}

/// Helper function for displaying a divider for the profile table
pub fn profile_table_divider() {
    println!("-------------------------------------")
}

/// Helper function for displaying a row of the sampled profile table
pub fn profile_table_row(time: f64, dissolved_oxygen: f64, below: bool) {
    println!(
        "{0: >10.2} | {1: >12.4} | {2: >9}",
        time,
        dissolved_oxygen,
        if below { "yes" } else { "" }
    )
}

/// Prints every `stride`-th point of the profile, plus the last one.
pub fn profile_table(profile: &DoProfile, stride: usize) {
    let stride = stride.max(1);
    let last = profile.len().saturating_sub(1);
    profile_table_header();
    profile_table_divider();
    for (index, row) in profile.rows().enumerate() {
        if index % stride == 0 || index == last {
            profile_table_row(
                row.time,
                row.dissolved_oxygen,
                row.below_threshold,
            );
        }
    }
    profile_table_divider();
}

pub fn profile_summary(profile: &DoProfile) {
    println!("\n{}", profile.final_level_message());
    match profile.first_time_below_threshold() {
        Some(time) => println!(
            "DO below the {:.1} mg/L minimum at {} of {} points, first at t = {:.2} min",
            MINIMUM_DO_THRESHOLD,
            profile.points_below_threshold(),
            profile.len(),
            time
        ),
        None => println!(
            "DO stays at or above the {:.1} mg/L minimum",
            MINIMUM_DO_THRESHOLD
        ),
    }
}

pub fn simulation_duration(time: Duration) {
    println!(
        "\nSimulation time: {:.2} ms",
        time.as_micros() as f64 / 1000.0
    )
}

pub fn output_generation_line(path: &str) {
    println!("\nWriting outputs to '{path}'");
}

pub fn show_farewell(time: Duration) {
    println!(
        "\nTotal running time: {:.2} s",
        time.as_millis() as f64 / 1000.0
    );
}
