// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{Scenario, VehicleParameters};
use crate::simulation::error::SimError;

/// YAML ファイルの読み込み
fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SimError> {
    let file = File::open(path)?;
    let value: T = from_reader(file)?;
    Ok(value)
}

/// 車両パラメータ一覧の読み込み (検証も行う)
pub fn load_vehicle_parameters(path: &Path) -> Result<Vec<VehicleParameters>, SimError> {
    let vehicles: Vec<VehicleParameters> = load_yaml(path)?;
    for params in &vehicles {
        params.validate()?;
    }
    Ok(vehicles)
}

/// シナリオの読み込み
pub fn load_scenario(path: &Path) -> Result<Scenario, SimError> {
    let scenario: Scenario = load_yaml(path)?;
    scenario.validate()?;
    Ok(scenario)
}
