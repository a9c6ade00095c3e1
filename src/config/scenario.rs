// src/config/scenario.rs

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::parameters::VehicleParameters;
use crate::config::presets::{default_fleet, preset_by_name};
use crate::models::DriveCycle;
use crate::simulation::error::SimError;

/// シナリオで指定する車両 (プリセット名またはパラメータ直接指定)
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum VehicleEntry {
    Preset(String),
    Custom(VehicleParameters),
}

impl VehicleEntry {
    pub fn resolve(&self) -> Result<VehicleParameters, SimError> {
        match self {
            VehicleEntry::Preset(name) => preset_by_name(name),
            VehicleEntry::Custom(params) => Ok(params.clone()),
        }
    }
}

/// シミュレーションのシナリオ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_dt")]
    pub dt: f64, // 時間ステップ (s)
    #[serde(default = "default_steps")]
    pub steps: usize, // ステップ数
    #[serde(default = "default_output_dir")]
    pub output_dir: String, // CSV 出力先ディレクトリ
    #[serde(default)]
    pub parallel: bool, // 車両ごとに並列実行するか
    #[serde(default)]
    pub drive_cycle: DriveCycle,
    #[serde(default)]
    pub vehicles: Vec<VehicleEntry>, // 空なら既定の3車種
}

fn default_dt() -> f64 {
    0.001
}

fn default_steps() -> usize {
    9000
}

fn default_output_dir() -> String {
    "csv".to_string()
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            dt: default_dt(),
            steps: default_steps(),
            output_dir: default_output_dir(),
            parallel: false,
            drive_cycle: DriveCycle::default(),
            vehicles: Vec::new(),
        }
    }
}

impl Scenario {
    /// 時間ステップとステップ数を検証する
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if self.steps == 0 {
            return Err(SimError::ZeroSteps);
        }
        Ok(())
    }

    /// 実行対象の車両パラメータを解決し、検証する
    ///
    /// 車両名は出力ファイル名になるため、大文字小文字を区別せず重複を拒否する。
    pub fn resolve_vehicles(&self) -> Result<Vec<VehicleParameters>, SimError> {
        let vehicles = if self.vehicles.is_empty() {
            default_fleet()
        } else {
            self.vehicles
                .iter()
                .map(VehicleEntry::resolve)
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut names = HashSet::new();
        for params in &vehicles {
            params.validate()?;
            if !names.insert(params.name.to_ascii_lowercase()) {
                return Err(SimError::DuplicateVehicle(params.name.clone()));
            }
        }
        Ok(vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets::reference;

    #[test]
    fn test_scenario_defaults_from_empty_yaml() {
        let scenario: Scenario = serde_yaml::from_str("{}").unwrap();
        assert_eq!(scenario, Scenario::default());
        assert_eq!(scenario.dt, 0.001);
        assert_eq!(scenario.steps, 9000);
    }

    #[test]
    fn test_scenario_mixed_vehicle_entries() {
        let yaml = r#"
dt: 0.001
steps: 5000
drive_cycle:
  kind: step_profile
  segments:
    - { start: 0.5, end: 2.5, accel: 3.0 }
    - { start: 3.0, end: 4.0, accel: -6.0 }
vehicles:
  - GR86
  - name: Test
    ms: 1200.0
    is: 2000.0
    mu1: 40.0
    mu2: 40.0
    ks1: 25000.0
    ks2: 25000.0
    kt1: 150000.0
    kt2: 150000.0
    cs1: 1500.0
    cs2: 1500.0
    l1: 1.2
    l2: 1.3
    h: 0.5
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.steps, 5000);
        assert_eq!(scenario.drive_cycle, DriveCycle::reference_steps());

        let vehicles = scenario.resolve_vehicles().unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].name, "GR86");
        assert_eq!(vehicles[1].name, "Test");
        assert_eq!(vehicles[1].ms, 1200.0);
    }

    #[test]
    fn test_resolve_vehicles_defaults_to_fleet() {
        let vehicles = Scenario::default().resolve_vehicles().unwrap();
        let names: Vec<_> = vehicles.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["GR86", "LexusLS", "Samber"]);
    }

    #[test]
    fn test_resolve_vehicles_unknown_preset() {
        let scenario = Scenario {
            vehicles: vec![VehicleEntry::Preset("Nope".to_string())],
            ..Scenario::default()
        };
        assert!(matches!(scenario.resolve_vehicles(), Err(SimError::UnknownPreset(_))));
    }

    #[test]
    fn test_resolve_vehicles_rejects_duplicate_names() {
        let heavy = VehicleParameters { ms: 2400.0, ..reference() };
        let scenario = Scenario {
            vehicles: vec![VehicleEntry::Custom(reference()), VehicleEntry::Custom(heavy)],
            ..Scenario::default()
        };

        match scenario.resolve_vehicles() {
            Err(SimError::DuplicateVehicle(name)) => assert_eq!(name, "Reference"),
            other => panic!("Expected SimError::DuplicateVehicle, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_vehicles_rejects_same_preset_in_other_case() {
        let scenario = Scenario {
            vehicles: vec![
                VehicleEntry::Preset("GR86".to_string()),
                VehicleEntry::Preset("gr86".to_string()),
            ],
            ..Scenario::default()
        };
        assert!(matches!(scenario.resolve_vehicles(), Err(SimError::DuplicateVehicle(_))));
    }

    #[test]
    fn test_validate_rejects_bad_step_settings() {
        let bad_dt = Scenario { dt: 0.0, ..Scenario::default() };
        assert!(matches!(bad_dt.validate(), Err(SimError::InvalidTimeStep(_))));

        let zero_steps = Scenario { steps: 0, ..Scenario::default() };
        assert!(matches!(zero_steps.validate(), Err(SimError::ZeroSteps)));

        assert!(Scenario::default().validate().is_ok());
    }
}
