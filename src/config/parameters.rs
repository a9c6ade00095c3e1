// src/config/parameters.rs

use serde::Deserialize;

use crate::simulation::error::SimError;

/// ハーフカーモデルの車両パラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VehicleParameters {
    pub name: String,
    pub ms: f64,  // ばね上質量 (kg)
    pub is: f64,  // ピッチ慣性モーメント (kg·m²)
    pub mu1: f64, // 前軸ばね下質量 (kg)
    pub mu2: f64, // 後軸ばね下質量 (kg)
    pub ks1: f64, // 前サスペンションばね定数 (N/m)
    pub ks2: f64, // 後サスペンションばね定数 (N/m)
    pub kt1: f64, // 前タイヤ剛性 (N/m)
    pub kt2: f64, // 後タイヤ剛性 (N/m)
    pub cs1: f64, // 前サスペンション減衰係数 (N·s/m)
    pub cs2: f64, // 後サスペンション減衰係数 (N·s/m)
    pub l1: f64,  // 重心から前軸までの距離 (m)
    pub l2: f64,  // 重心から後軸までの距離 (m)
    pub h: f64,   // 重心高 (m)
}

impl VehicleParameters {
    /// 全パラメータが正の有限値であることを確認する
    ///
    /// モデル構築前に呼び出し側で検証する。`HalfCarModel` 自体は検証しない。
    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("ms", self.ms),
            ("is", self.is),
            ("mu1", self.mu1),
            ("mu2", self.mu2),
            ("ks1", self.ks1),
            ("ks2", self.ks2),
            ("kt1", self.kt1),
            ("kt2", self.kt2),
            ("cs1", self.cs1),
            ("cs2", self.cs2),
            ("l1", self.l1),
            ("l2", self.l2),
            ("h", self.h),
        ];

        match fields.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            Some(&(field, value)) => Err(SimError::InvalidParameter {
                vehicle: self.name.clone(),
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}
