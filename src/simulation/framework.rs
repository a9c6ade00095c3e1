// src/simulation/framework.rs

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{Scenario, VehicleParameters};
use crate::math::rk4_step;
use crate::models::longitudinal::advance;
use crate::models::{DriveCycle, DriveCycleRunner, HalfCarModel};
use crate::simulation::csv::{output_path, CsvSink};
use crate::simulation::error::SimError;
use crate::simulation::{OutputRecord, SimulationRun};

/// シミュレーションステップの実行
///
/// 1. 走行パターンから縦加速度を得る (停止時は車速を 0 に固定)
/// 2. ハーフカーの状態を RK4 で進める
/// 3. 前後方向の運動を別途オイラー法で進める
///
/// # 引数
/// - `model`: ハーフカーモデル
/// - `run`: 現在の実行状態
/// - `cycle`: 走行パターン
///
/// # 戻り値
/// - ステップ前の出力レコードと、更新後の実行状態
pub fn execute_simulation_step(
    model: &HalfCarModel,
    run: &SimulationRun,
    cycle: &mut DriveCycleRunner,
) -> (OutputRecord, SimulationRun) {
    let command = cycle.command(run.t, run.longitudinal.v_abs);

    let mut current = run.clone();
    current.longitudinal.v_abs = command.v_abs;
    let record = current.record();

    let state = rk4_step(model, &current.state, current.t, current.dt, command.accel);
    let longitudinal = advance(current.longitudinal, command.accel, current.dt);

    (
        record,
        SimulationRun {
            t: current.t + current.dt,
            dt: current.dt,
            longitudinal,
            state,
        },
    )
}

/// 固定ステップ数だけシミュレーションを実行する
///
/// 各ステップのレコードは `sink` に渡す。コア自体は I/O を行わない。
///
/// # 引数
/// - `model`: ハーフカーモデル
/// - `cycle`: 走行パターン
/// - `dt`: 時間ステップ (s)
/// - `steps`: ステップ数
/// - `sink`: レコードの出力先
///
/// # 戻り値
/// - 最終ステップ後の実行状態
pub fn run_simulation<F, E>(
    model: &HalfCarModel,
    cycle: &DriveCycle,
    dt: f64,
    steps: usize,
    mut sink: F,
) -> Result<SimulationRun, E>
where
    F: FnMut(&OutputRecord) -> Result<(), E>,
{
    let mut runner = DriveCycleRunner::new(cycle.clone());
    let mut run = SimulationRun::new(dt);

    for _ in 0..steps {
        let (record, next) = execute_simulation_step(model, &run, &mut runner);
        sink(&record)?;
        run = next;
    }

    Ok(run)
}

/// 1車両分のシミュレーションを実行し、CSV に書き出す
pub fn run_vehicle_to_csv(
    params: &VehicleParameters,
    scenario: &Scenario,
    output_dir: &Path,
) -> Result<PathBuf, SimError> {
    params.validate()?;
    let model = HalfCarModel::new(params.clone());

    let path = output_path(output_dir, &params.name);
    info!(vehicle = %params.name, steps = scenario.steps, path = %path.display(), "シミュレーション開始");

    let mut sink = CsvSink::create(&path)?;
    let last = run_simulation(&model, &scenario.drive_cycle, scenario.dt, scenario.steps, |r| {
        sink.write(r)
    })?;
    sink.finish()?;

    info!(
        vehicle = %params.name,
        t = last.t,
        theta = last.state[1],
        x_abs = last.longitudinal.x_abs,
        "シミュレーション終了"
    );
    Ok(path)
}

/// シナリオ内の全車両を実行する
///
/// 車両間で共有する可変状態はないため、`parallel` が真なら並列に実行する。
pub fn run_scenario(scenario: &Scenario) -> Result<Vec<PathBuf>, SimError> {
    scenario.validate()?;
    let vehicles = scenario.resolve_vehicles()?;
    debug!(?scenario, "シナリオ読み込み完了");

    let output_dir = Path::new(&scenario.output_dir);
    std::fs::create_dir_all(output_dir)?;

    if scenario.parallel {
        vehicles
            .par_iter()
            .map(|params| run_vehicle_to_csv(params, scenario, output_dir))
            .collect()
    } else {
        vehicles
            .iter()
            .map(|params| run_vehicle_to_csv(params, scenario, output_dir))
            .collect()
    }
}
