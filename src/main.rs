// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};

use halfcarsim::config::VehicleEntry;
use halfcarsim::simulation::framework::run_scenario;
use halfcarsim::simulation::load_parameters::{load_scenario, load_vehicle_parameters};
use halfcarsim::Scenario;

/// ハーフカーモデルの加減速シミュレーション
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// シナリオ YAML (省略時は既定のシナリオ)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 車両パラメータ一覧の YAML (シナリオの車両を置き換える)
    #[arg(long)]
    vehicles_file: Option<PathBuf>,

    /// 実行するプリセット名 (複数指定可)
    #[arg(long = "vehicle")]
    vehicles: Vec<String>,

    /// CSV 出力先ディレクトリ
    #[arg(long)]
    output_dir: Option<String>,

    /// ステップ数
    #[arg(long)]
    steps: Option<usize>,

    /// 時間ステップ (s)
    #[arg(long)]
    dt: Option<f64>,

    /// 車両ごとに並列実行する
    #[arg(long)]
    parallel: bool,

    /// ログの詳細度 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .init();

    // シナリオの読み込み
    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };

    // コマンドライン引数で上書き
    if let Some(path) = &args.vehicles_file {
        scenario.vehicles = load_vehicle_parameters(path)?
            .into_iter()
            .map(VehicleEntry::Custom)
            .collect();
    }
    if !args.vehicles.is_empty() {
        scenario.vehicles = args.vehicles.iter().cloned().map(VehicleEntry::Preset).collect();
    }
    if let Some(dir) = args.output_dir {
        scenario.output_dir = dir;
    }
    if let Some(steps) = args.steps {
        scenario.steps = steps;
    }
    if let Some(dt) = args.dt {
        scenario.dt = dt;
    }
    scenario.parallel |= args.parallel;

    // シミュレーションの実行
    let paths = run_scenario(&scenario)?;
    for path in &paths {
        info!(path = %path.display(), "CSV 出力完了");
    }

    Ok(())
}
