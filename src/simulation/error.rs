// src/simulation/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("車両 `{vehicle}` のパラメータ `{field}` が不正です: {value} (正の有限値が必要)")]
    InvalidParameter {
        vehicle: String,
        field: &'static str,
        value: f64,
    },
    #[error("時間ステップが不正です: dt = {0}")]
    InvalidTimeStep(f64),
    #[error("ステップ数は1以上が必要です")]
    ZeroSteps,
    #[error("プリセット `{0}` が見つかりません")]
    UnknownPreset(String),
    #[error("車両名 `{0}` が重複しています (出力ファイル名が衝突します)")]
    DuplicateVehicle(String),
    #[error("I/O エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML の読み込みに失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("CSV の書き込みに失敗しました: {0}")]
    Csv(#[from] csv::Error),
}
