use crate::parameters::AerationParameters;
use crate::profile::{DoProfile, MINIMUM_DO_THRESHOLD};
use crate::utils;

use chrono::{SecondsFormat, Utc};
use csv::Writer;
use serde;
use std::error::Error;
use std::fs;

#[derive(serde::Serialize)]
struct ProfileOutput {
    time: f64,
    dissolved_oxygen: f64,
    below_threshold: bool,
}

fn write_do_profile(
    profile: &DoProfile,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(&(path.to_owned() + "/do_profile.csv"))?;
    for row in profile.rows() {
        wtr.serialize(ProfileOutput {
            time: row.time,
            dissolved_oxygen: row.dissolved_oxygen,
            below_threshold: row.below_threshold,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, serde::Serialize)]
pub struct SummaryOutput {
    pub ote: u8,
    pub otr: f64,
    pub consumption_rate: f64,
    pub initial_do: f64,
    pub num_points: usize,
    pub dt: Option<f64>,
    pub final_do: Option<f64>,
    pub min_do: Option<f64>,
    pub max_do: Option<f64>,
    pub minimum_threshold: f64,
    pub points_below_threshold: usize,
    pub first_time_below_threshold: Option<f64>,
    pub generated_at: String,
}

impl SummaryOutput {
    pub fn new(parameters: &AerationParameters, profile: &DoProfile) -> Self {
        Self {
            ote: parameters.ote(),
            otr: parameters.otr(),
            consumption_rate: parameters.consumption_rate(),
            initial_do: parameters.initial_do(),
            num_points: profile.len(),
            dt: utils::first_step(profile.time()),
            final_do: profile.final_do(),
            min_do: profile.min_do(),
            max_do: profile.max_do(),
            minimum_threshold: MINIMUM_DO_THRESHOLD,
            points_below_threshold: profile.points_below_threshold(),
            first_time_below_threshold: profile.first_time_below_threshold(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

fn write_summary(
    summary: &SummaryOutput,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let contents = serde_json::to_string_pretty(summary)?;
    fs::write(path.to_owned() + "/summary.json", contents)?;
    Ok(())
}

pub fn generate_outputs(
    parameters: &AerationParameters,
    profile: &DoProfile,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    write_do_profile(profile, path)?;
    write_summary(&SummaryOutput::new(parameters, profile), path)?;
    Ok(())
}
