// src/models/longitudinal.rs

/// 車両の前後方向の運動状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LongitudinalState {
    pub v_abs: f64, // 車速 (m/s)
    pub x_abs: f64, // 走行距離 (m)
}

/// 前後方向の運動を1ステップ進める
///
/// 車速を先に更新し、更新後の車速で距離を進める (半陰的オイラー法)。
/// ハーフカーの状態ベクトルとは独立に積分する。
///
/// # 引数
/// - `state`: 現在の前後方向の状態
/// - `accel`: 縦加速度 (m/s²)
/// - `dt`: 時間ステップ (s)
///
/// # 戻り値
/// - 更新後の前後方向の状態
pub fn advance(state: LongitudinalState, accel: f64, dt: f64) -> LongitudinalState {
    let v_abs = state.v_abs + accel * dt;
    LongitudinalState {
        v_abs,
        x_abs: state.x_abs + v_abs * dt,
    }
}
