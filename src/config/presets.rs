// src/config/presets.rs

use crate::config::parameters::VehicleParameters;
use crate::simulation::error::SimError;

/// 単一車両の基準パラメータ
pub fn reference() -> VehicleParameters {
    VehicleParameters {
        name: "Reference".to_string(),
        ms: 1200.0,
        is: 2000.0,
        mu1: 40.0,
        mu2: 40.0,
        ks1: 25000.0,
        ks2: 25000.0,
        kt1: 150000.0,
        kt2: 150000.0,
        cs1: 1500.0,
        cs2: 1500.0,
        l1: 1.2,
        l2: 1.3,
        h: 0.5,
    }
}

pub fn gr86() -> VehicleParameters {
    VehicleParameters {
        name: "GR86".to_string(),
        ms: 1150.0,
        is: 1400.0,
        mu1: 45.0,
        mu2: 45.0,
        ks1: 30000.0,
        ks2: 35000.0,
        kt1: 200000.0,
        kt2: 200000.0,
        cs1: 2500.0,
        cs2: 2800.0,
        l1: 1.28,
        l2: 1.29,
        h: 0.45,
    }
}

pub fn lexus_ls() -> VehicleParameters {
    VehicleParameters {
        name: "LexusLS".to_string(),
        ms: 2000.0,
        is: 3500.0,
        mu1: 65.0,
        mu2: 65.0,
        ks1: 20000.0,
        ks2: 22000.0,
        kt1: 220000.0,
        kt2: 220000.0,
        cs1: 3500.0,
        cs2: 3800.0,
        l1: 1.55,
        l2: 1.57,
        h: 0.55,
    }
}

pub fn samber() -> VehicleParameters {
    VehicleParameters {
        name: "Samber".to_string(),
        ms: 650.0,
        is: 750.0,
        mu1: 35.0,
        mu2: 35.0,
        ks1: 15000.0,
        ks2: 25000.0,
        kt1: 160000.0,
        kt2: 160000.0,
        cs1: 1200.0,
        cs2: 1500.0,
        l1: 0.95,
        l2: 0.95,
        h: 0.70,
    }
}

/// 既定で比較する3車種
pub fn default_fleet() -> Vec<VehicleParameters> {
    vec![gr86(), lexus_ls(), samber()]
}

/// 名前からプリセットを取得する (大文字小文字は区別しない)
pub fn preset_by_name(name: &str) -> Result<VehicleParameters, SimError> {
    match name.to_ascii_lowercase().as_str() {
        "reference" => Ok(reference()),
        "gr86" => Ok(gr86()),
        "lexusls" => Ok(lexus_ls()),
        "samber" => Ok(samber()),
        _ => Err(SimError::UnknownPreset(name.to_string())),
    }
}
