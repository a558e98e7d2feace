pub mod error;
pub mod grid;
pub mod input;
mod log;
pub mod output;
pub mod parameters;
pub mod profile;
pub mod simulator;
pub mod utils;
use input::Input;
use profile::DoProfile;
use std::error::Error;
use std::time::Instant;

const PROFILE_TABLE_STRIDE: usize = 10;

/// Runs one aeration tank case: reads `config.json` from the case
/// directory, integrates the dissolved oxygen balance and writes the
/// profile and summary back to the same directory.
pub fn run(input_args: &InputArgs) -> Result<DoProfile, Box<dyn Error>> {
    log::show_greeting();

    let begin = Instant::now();
    log::input_reading_line(&input_args.path);
    let input = Input::build(&input_args.path)?;
    let parameters = &input.parameters;
    log::parameters_table(parameters, &input.time_grid);

    let simulation_begin = Instant::now();
    let dissolved_oxygen = simulator::simulate(
        input.time_grid.points(),
        parameters.initial_do(),
        parameters.otr(),
        parameters.consumption_rate(),
    )?;
    log::simulation_duration(simulation_begin.elapsed());

    let profile = DoProfile::new(input.time_grid.into_points(), dissolved_oxygen);
    log::profile_table(&profile, PROFILE_TABLE_STRIDE);
    log::profile_summary(&profile);

    log::output_generation_line(&input_args.path);
    output::generate_outputs(parameters, &profile, &input_args.path)?;

    log::show_farewell(begin.elapsed());

    Ok(profile)
}

pub struct InputArgs {
    pub path: String,
}

impl InputArgs {
    pub fn build(args: &[String]) -> Result<Self, &'static str> {
        if args.len() < 2 {
            return Err("Not enough arguments [PATH]");
        }

        let path = args[1].clone();

        Ok(Self { path })
    }
}
