// src/math/integrator.rs

use crate::math::state::State;

/// 状態方程式 dx/dt = f(x, t, u) を評価できるモデル
///
/// 制御入力 `u` は縦加速度 (m/s²) のスカラー値。
pub trait StateDerivative {
    fn derivative(&self, x: &State, t: f64, accel: f64) -> State;
}

/// 古典的4次ルンゲ=クッタ法による1ステップの積分
///
/// 1ステップ内の4段すべてで制御入力 `accel` を一定に保つ。
///
/// # 引数
/// - `model`: 状態方程式を評価するモデル
/// - `x`: 現在の状態ベクトル
/// - `t`: 現在時刻 (s)
/// - `dt`: 時間ステップ (s)
/// - `accel`: 縦加速度 (m/s²)
///
/// # 戻り値
/// - 次の状態ベクトル
pub fn rk4_step<M: StateDerivative>(model: &M, x: &State, t: f64, dt: f64, accel: f64) -> State {
    let half = 0.5 * dt;

    let k1 = model.derivative(x, t, accel);
    let k2 = model.derivative(&(x + k1 * half), t + half, accel);
    let k3 = model.derivative(&(x + k2 * half), t + half, accel);
    let k4 = model.derivative(&(x + k3 * dt), t + dt, accel);

    x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}
