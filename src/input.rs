use crate::error::SimulationError;
use crate::grid;
use crate::parameters;
use crate::parameters::AerationParameters;
use serde::Deserialize;
use serde_json;
use std::error::Error;
use std::fs;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HorizonInput {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl Default for HorizonInput {
    fn default() -> Self {
        Self {
            start: grid::DEFAULT_HORIZON_START,
            end: grid::DEFAULT_HORIZON_END,
            num_points: grid::DEFAULT_NUM_POINTS,
        }
    }
}

impl HorizonInput {
    pub fn build_time_grid(&self) -> Result<grid::TimeGrid, SimulationError> {
        grid::TimeGrid::try_new(self.start, self.end, self.num_points)
    }
}

/// Case file contents. Missing fields take the default operating point.
/// `ote` is read as a wide integer so any out-of-range percentage gets
/// clamped instead of failing to parse.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ote: i64,
    pub consumption_rate: f64,
    pub initial_do: f64,
    pub horizon: HorizonInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ote: parameters::DEFAULT_OTE as i64,
            consumption_rate: parameters::DEFAULT_CONSUMPTION_RATE,
            initial_do: parameters::DEFAULT_INITIAL_DO,
            horizon: HorizonInput::default(),
        }
    }
}

impl Config {
    pub fn build_parameters(&self) -> AerationParameters {
        let ote = self.ote.clamp(
            *parameters::OTE_RANGE.start() as i64,
            *parameters::OTE_RANGE.end() as i64,
        ) as u8;
        AerationParameters::new(
            ote,
            self.consumption_rate,
            self.initial_do,
        )
    }
}

pub fn parse_config(contents: &str) -> Result<Config, Box<dyn Error>> {
    let parsed: Config = serde_json::from_str(contents)?;
    Ok(parsed)
}

pub fn read_config_input(filepath: &str) -> Result<Config, Box<dyn Error>> {
    let contents = fs::read_to_string(filepath).map_err(|e| {
        format!("Error while reading config file {filepath}: {e}")
    })?;
    parse_config(&contents)
}

pub struct Input {
    pub config: Config,
    pub parameters: AerationParameters,
    pub time_grid: grid::TimeGrid,
}

impl Input {
    pub fn build(path: &str) -> Result<Self, Box<dyn Error>> {
        let config = read_config_input(&(path.to_owned() + "/config.json"))?;
        let parameters = config.build_parameters();
        let time_grid = config.horizon.build_time_grid()?;
        Ok(Self {
            config,
            parameters,
            time_grid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config() {
        let filepath = "example/config.json";
        let config = read_config_input(filepath).unwrap();
        assert_eq!(config.ote, 20);
        assert_eq!(config.consumption_rate, 0.1);
        assert_eq!(config.initial_do, 2.0);
        assert_eq!(config.horizon.num_points, 120);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.build_parameters(), AerationParameters::default());
    }

    #[test]
    fn test_partial_config() {
        let config =
            parse_config(r#"{"ote": 45, "horizon": {"end": 60.0}}"#).unwrap();
        assert_eq!(config.ote, 45);
        assert_eq!(config.consumption_rate, 0.1);
        assert_eq!(config.horizon.start, 0.0);
        assert_eq!(config.horizon.end, 60.0);
        assert_eq!(config.horizon.num_points, 120);
    }

    #[test]
    fn test_out_of_range_config_is_clamped() {
        let config = parse_config(
            r#"{"ote": 150, "consumption_rate": 2.0, "initial_do": 12.0}"#,
        )
        .unwrap();
        let params = config.build_parameters();
        assert_eq!(params.ote(), 100);
        assert_eq!(params.consumption_rate(), 1.0);
        assert_eq!(params.initial_do(), 9.0);
    }

    #[test]
    fn test_ote_outside_u8_is_clamped() {
        let config = parse_config(r#"{"ote": 256}"#).unwrap();
        assert_eq!(config.build_parameters().ote(), 100);
        let config = parse_config(r#"{"ote": 100000}"#).unwrap();
        assert_eq!(config.build_parameters().ote(), 100);
        let config = parse_config(r#"{"ote": -5}"#).unwrap();
        assert_eq!(config.build_parameters().otr(), 0.0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config(r#"{"ote": 20.5}"#).is_err());
        assert!(parse_config(r#"{"horizon": {"num_points": -1}}"#).is_err());
        assert!(parse_config("not json").is_err());
    }

    #[test]
    fn test_oversized_horizon_is_rejected() {
        let config =
            parse_config(r#"{"horizon": {"num_points": 100000000000}}"#);
        // 32-bit targets already fail while parsing into usize
        if let Ok(config) = config {
            assert!(matches!(
                config.horizon.build_time_grid(),
                Err(SimulationError::TooManyPoints { .. })
            ));
        }
    }

    #[test]
    fn test_missing_config_file() {
        let err = read_config_input("missing/config.json").unwrap_err();
        assert!(err.to_string().starts_with("Error while reading config file"));
    }

    #[test]
    fn test_read_input() {
        let path = "example";
        let input = Input::build(path).unwrap();
        assert_eq!(input.parameters.otr(), 0.2);
        assert_eq!(input.time_grid.len(), 120);
    }
}
