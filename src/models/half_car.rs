// src/models/half_car.rs

use crate::config::parameters::VehicleParameters;
use crate::math::{join_state, split_state, Coordinates, Matrix4, State, StateDerivative};

/// ハーフカーモデル (ばね上の上下・ピッチ + 前後ばね下の上下)
///
/// 一般化座標は q = [ys, theta, yu1, yu2]。
/// M q'' + C q' + K q = F の線形時不変系として扱う。
/// 行列はパラメータから導出され、`update_matrices` 以外では変更できない。
#[derive(Debug, Clone, PartialEq)]
pub struct HalfCarModel {
    params: VehicleParameters,
    m: Matrix4,
    c: Matrix4,
    k: Matrix4,
    m_inv: Coordinates, // 対角質量行列の逆数 (要素ごと)
}

impl HalfCarModel {
    /// パラメータからモデルを構築する
    ///
    /// パラメータは呼び出し側で `VehicleParameters::validate` 済みであること。
    pub fn new(params: VehicleParameters) -> Self {
        let (m, c, k) = build_matrices(&params);
        HalfCarModel {
            m_inv: inverse_diagonal(&m),
            params,
            m,
            c,
            k,
        }
    }

    /// パラメータを差し替えて行列を再計算する
    pub fn update_matrices(&mut self, params: VehicleParameters) {
        *self = HalfCarModel::new(params);
    }

    pub fn params(&self) -> &VehicleParameters {
        &self.params
    }

    /// 質量行列 M
    pub fn mass(&self) -> &Matrix4 {
        &self.m
    }

    /// 減衰行列 C
    pub fn damping(&self) -> &Matrix4 {
        &self.c
    }

    /// 剛性行列 K
    pub fn stiffness(&self) -> &Matrix4 {
        &self.k
    }

    /// diag(M) の要素ごとの逆数
    pub fn mass_inverse(&self) -> &Coordinates {
        &self.m_inv
    }

    pub fn external_force(&self, accel: f64) -> Coordinates {
        calculate_external_force(&self.params, accel)
    }

    /// 加速度ベクトル q'' = M⁻¹ (F - C q' - K q)
    ///
    /// M は対角なので逆行列は要素ごとの逆数で済む。
    pub fn acceleration(&self, q: &Coordinates, dq: &Coordinates, accel: f64) -> Coordinates {
        let f = self.external_force(accel);
        self.m_inv.component_mul(&(f - self.c * dq - self.k * q))
    }
}

impl StateDerivative for HalfCarModel {
    fn derivative(&self, x: &State, _t: f64, accel: f64) -> State {
        let (q, dq) = split_state(x);
        let ddq = self.acceleration(&q, &dq, accel);
        join_state(&dq, &ddq)
    }
}

/// 質量・減衰・剛性行列を計算する
///
/// # 引数
/// - `p`: 車両パラメータ
///
/// # 戻り値
/// - (M, C, K)
///
/// タイヤはばねのみでモデル化するため、C の (2,2), (3,3) 成分にタイヤの項は入らない。
pub fn build_matrices(p: &VehicleParameters) -> (Matrix4, Matrix4, Matrix4) {
    let m = Matrix4::from_diagonal(&Coordinates::new(p.ms, p.is, p.mu1, p.mu2));

    let k = coupling_matrix(p.ks1, p.ks2, p.l1, p.l2, p.ks1 + p.kt1, p.ks2 + p.kt2);
    let c = coupling_matrix(p.cs1, p.cs2, p.l1, p.l2, p.cs1, p.cs2);

    (m, c, k)
}

/// サスペンション要素 (前 a1, 後 a2) の結合行列
///
/// `d1`, `d2` はばね下自由度の対角成分。
fn coupling_matrix(a1: f64, a2: f64, l1: f64, l2: f64, d1: f64, d2: f64) -> Matrix4 {
    let cross = -a1 * l1 + a2 * l2;
    #[rustfmt::skip]
    let matrix = Matrix4::new(
        a1 + a2, cross, -a1, -a2,
        cross, a1 * l1 * l1 + a2 * l2 * l2, a1 * l1, -a2 * l2,
        -a1, a1 * l1, d1, 0.0,
        -a2, -a2 * l2, 0.0, d2,
    );
    matrix
}

/// 対角行列の逆数を要素ごとに求める
pub fn inverse_diagonal(m: &Matrix4) -> Coordinates {
    m.diagonal().map(|v| 1.0 / v)
}

/// 縦加速度による外力ベクトルを計算する
///
/// # 引数
/// - `p`: 車両パラメータ
/// - `accel`: 縦加速度 (m/s²)
///
/// # 戻り値
/// - [0, ms * accel * h, 0, 0]。ピッチモーメントのみ (反時計回りが正)
pub fn calculate_external_force(p: &VehicleParameters, accel: f64) -> Coordinates {
    Coordinates::new(0.0, p.ms * accel * p.h, 0.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets::{default_fleet, gr86, reference};
    use approx::assert_relative_eq;

    #[test]
    fn test_matrices_are_symmetric() {
        for params in default_fleet().into_iter().chain(std::iter::once(reference())) {
            let model = HalfCarModel::new(params);
            for i in 0..4 {
                for j in 0..4 {
                    assert_eq!(model.k[(i, j)], model.k[(j, i)]);
                    assert_eq!(model.c[(i, j)], model.c[(j, i)]);
                }
            }
        }
    }

    #[test]
    fn test_mass_matrix_is_diagonal() {
        let model = HalfCarModel::new(reference());
        let expected = Matrix4::from_diagonal(&Coordinates::new(1200.0, 2000.0, 40.0, 40.0));
        assert_eq!(model.m, expected);
    }

    #[test]
    fn test_mass_matrix_inverse_is_elementwise() {
        let model = HalfCarModel::new(reference());
        assert_eq!(
            model.m_inv,
            Coordinates::new(1.0 / 1200.0, 1.0 / 2000.0, 1.0 / 40.0, 1.0 / 40.0)
        );
    }

    #[test]
    fn test_stiffness_matrix_entries() {
        let model = HalfCarModel::new(reference());
        let k = model.k;

        assert_eq!(k[(0, 0)], 50000.0);
        assert_relative_eq!(k[(0, 1)], -25000.0 * 1.2 + 25000.0 * 1.3, epsilon = 1e-9);
        assert_relative_eq!(k[(1, 1)], 25000.0 * 1.44 + 25000.0 * 1.69, epsilon = 1e-9);
        assert_eq!(k[(0, 2)], -25000.0);
        assert_relative_eq!(k[(1, 3)], -25000.0 * 1.3, epsilon = 1e-9);
        assert_eq!(k[(2, 2)], 175000.0);
        assert_eq!(k[(3, 3)], 175000.0);
        assert_eq!(k[(2, 3)], 0.0);
    }

    #[test]
    fn test_damping_matrix_has_no_tire_term() {
        let model = HalfCarModel::new(gr86());
        let p = model.params();

        assert_eq!(model.damping()[(2, 2)], p.cs1);
        assert_eq!(model.damping()[(3, 3)], p.cs2);
        assert_eq!(model.stiffness()[(2, 2)], p.ks1 + p.kt1);
        assert_eq!(model.stiffness()[(3, 3)], p.ks2 + p.kt2);
    }

    #[test]
    fn test_external_force_is_pitch_moment_only() {
        let params = reference();
        let f = calculate_external_force(&params, 3.0);
        assert_eq!(f, Coordinates::new(0.0, 1200.0 * 3.0 * 0.5, 0.0, 0.0));

        let braking = calculate_external_force(&params, -6.0);
        assert!(braking[1] < 0.0);
    }

    #[test]
    fn test_derivative_zero_at_equilibrium() {
        let model = HalfCarModel::new(reference());
        let dx = model.derivative(&State::zeros(), 0.0, 0.0);
        assert_eq!(dx, State::zeros());
    }

    #[test]
    fn test_derivative_velocity_passthrough() {
        let model = HalfCarModel::new(reference());
        let x = State::from_column_slice(&[0.0, 0.0, 0.0, 0.0, 0.1, 0.2, 0.3, 0.4]);
        let dx = model.derivative(&x, 0.0, 0.0);

        for i in 0..4 {
            assert_eq!(dx[i], x[i + 4]);
        }
    }

    #[test]
    fn test_derivative_pitch_acceleration_from_input() {
        let model = HalfCarModel::new(reference());
        let dx = model.derivative(&State::zeros(), 0.0, 3.0);

        // 静止状態では外力のみ: theta'' = ms * a * h / Is
        assert_relative_eq!(dx[5], 1200.0 * 3.0 * 0.5 / 2000.0, epsilon = 1e-12);
        assert_eq!(dx[4], 0.0);
        assert_eq!(dx[6], 0.0);
        assert_eq!(dx[7], 0.0);
    }

    #[test]
    fn test_update_matrices_replaces_parameters() {
        let mut model = HalfCarModel::new(reference());
        model.update_matrices(gr86());

        assert_eq!(model.mass()[(0, 0)], 1150.0);
        assert_eq!(model.mass_inverse()[1], 1.0 / 1400.0);
        assert_eq!(model.params().name, "GR86");
    }

    #[test]
    fn test_derived_matrices_follow_parameters() {
        let mut model = HalfCarModel::new(reference());
        model.update_matrices(gr86());

        // 外力・行列・逆質量はすべて同じパラメータから導出される
        let p = gr86();
        let (m, c, k) = build_matrices(&p);
        assert_eq!(model.external_force(2.0), calculate_external_force(&p, 2.0));
        assert_eq!(model.mass(), &m);
        assert_eq!(model.damping(), &c);
        assert_eq!(model.stiffness(), &k);
        assert_eq!(model.mass_inverse(), &inverse_diagonal(&m));
        assert_eq!(model, HalfCarModel::new(p));
    }
}
