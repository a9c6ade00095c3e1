// src/math/state.rs

use nalgebra::{SVector, Vector4};

/// 一般化座標の次元数 (ys, theta, yu1, yu2)
pub const DOF: usize = 4;

/// 状態ベクトル [q, dq] (8次元)
pub type State = SVector<f64, 8>;

/// 一般化座標またはその時間微分 (4次元)
pub type Coordinates = Vector4<f64>;

/// 4x4 行列 (質量・減衰・剛性)
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// 状態ベクトルを位置成分と速度成分に分割する
///
/// # 引数
/// - `x`: 状態ベクトル
///
/// # 戻り値
/// - (q, dq)
pub fn split_state(x: &State) -> (Coordinates, Coordinates) {
    let q = x.fixed_rows::<DOF>(0).into_owned();
    let dq = x.fixed_rows::<DOF>(DOF).into_owned();
    (q, dq)
}

/// 位置成分と速度成分を連結して状態ベクトルを作る
pub fn join_state(q: &Coordinates, dq: &Coordinates) -> State {
    let mut x = State::zeros();
    x.fixed_rows_mut::<DOF>(0).copy_from(q);
    x.fixed_rows_mut::<DOF>(DOF).copy_from(dq);
    x
}
