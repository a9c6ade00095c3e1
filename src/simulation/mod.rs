// src/simulation/mod.rs

pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;

use serde::Serialize;

use crate::math::State;
use crate::models::LongitudinalState;

/// 1回のシミュレーション実行の状態
///
/// ループが専有し、モデルと積分器は参照を保持しない。
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub t: f64,  // 時刻 (s)
    pub dt: f64, // 時間ステップ (s)
    pub longitudinal: LongitudinalState,
    pub state: State,
}

impl SimulationRun {
    pub fn new(dt: f64) -> Self {
        SimulationRun {
            t: 0.0,
            dt,
            longitudinal: LongitudinalState::default(),
            state: State::zeros(),
        }
    }

    /// 現在の状態を出力レコードにする
    pub fn record(&self) -> OutputRecord {
        OutputRecord {
            time: self.t,
            ys: self.state[0],
            theta: self.state[1],
            yu1: self.state[2],
            yu2: self.state[3],
            v_abs: self.longitudinal.v_abs,
            x_abs: self.longitudinal.x_abs,
        }
    }
}

/// 1ステップ分の出力
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputRecord {
    pub time: f64,  // 時刻 (s)
    pub ys: f64,    // ばね上上下変位 (m)
    pub theta: f64, // ピッチ角 (rad)
    pub yu1: f64,   // 前軸上下変位 (m)
    pub yu2: f64,   // 後軸上下変位 (m)
    pub v_abs: f64, // 車速 (m/s)
    pub x_abs: f64, // 走行距離 (m)
}
