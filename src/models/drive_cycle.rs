// src/models/drive_cycle.rs

use serde::Deserialize;

/// 区間ごとの一定加速度
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccelSegment {
    pub start: f64, // 区間開始時刻 (s、区間に含まない)
    pub end: f64,   // 区間終了時刻 (s、区間に含まない)
    pub accel: f64, // 縦加速度 (m/s²)
}

/// 走行パターンの設定
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DriveCycle {
    /// 時刻で決まるステップ状の加速度
    StepProfile { segments: Vec<AccelSegment> },
    /// 目標速度まで加速し、その後停止まで制動する
    SpeedTarget {
        #[serde(default = "default_target_speed_kmh")]
        target_speed_kmh: f64,
        #[serde(default = "default_accel")]
        accel: f64,
        #[serde(default = "default_brake")]
        brake: f64,
        #[serde(default = "default_stop_speed")]
        stop_speed: f64,
    },
}

fn default_target_speed_kmh() -> f64 {
    65.0
}

fn default_accel() -> f64 {
    3.3
}

fn default_brake() -> f64 {
    -8.5
}

fn default_stop_speed() -> f64 {
    0.1
}

impl DriveCycle {
    /// 0.5〜2.5 s で加速、3.0〜4.0 s で減速するステップ入力
    pub fn reference_steps() -> Self {
        DriveCycle::StepProfile {
            segments: vec![
                AccelSegment { start: 0.5, end: 2.5, accel: 3.0 },
                AccelSegment { start: 3.0, end: 4.0, accel: -6.0 },
            ],
        }
    }

    /// 65 km/h まで 3.3 m/s² で加速し、-8.5 m/s² で停止する
    pub fn reference_speed_target() -> Self {
        DriveCycle::SpeedTarget {
            target_speed_kmh: default_target_speed_kmh(),
            accel: default_accel(),
            brake: default_brake(),
            stop_speed: default_stop_speed(),
        }
    }
}

impl Default for DriveCycle {
    fn default() -> Self {
        DriveCycle::reference_speed_target()
    }
}

/// 速度目標サイクルのフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Accelerating,
    Braking,
    Stopped,
}

/// 1ステップ分の指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    pub accel: f64, // 縦加速度 (m/s²)
    pub v_abs: f64, // 指令適用後の車速 (m/s)。停止時は 0 に固定される
}

/// ステップ入力の加速度を求める
///
/// # 引数
/// - `segments`: 加速度区間の一覧
/// - `t`: 現在時刻 (s)
///
/// # 戻り値
/// - `start < t < end` を満たす最初の区間の加速度。該当なしなら 0
pub fn step_profile_accel(segments: &[AccelSegment], t: f64) -> f64 {
    segments
        .iter()
        .find(|s| t > s.start && t < s.end)
        .map_or(0.0, |s| s.accel)
}

/// 速度目標サイクルの状態遷移
///
/// # 引数
/// - `phase`: 現在のフェーズ
/// - `v_abs`: 現在の車速 (m/s)
/// - `target_speed`: 目標車速 (m/s)
/// - `accel`: 加速時の加速度 (m/s²)
/// - `brake`: 制動時の加速度 (m/s²、負値)
/// - `stop_speed`: 停止とみなす車速 (m/s)
///
/// # 戻り値
/// - 遷移後のフェーズと、このステップの指令
pub fn speed_target_transition(
    phase: CyclePhase,
    v_abs: f64,
    target_speed: f64,
    accel: f64,
    brake: f64,
    stop_speed: f64,
) -> (CyclePhase, DriveCommand) {
    match phase {
        CyclePhase::Accelerating if v_abs < target_speed => {
            (CyclePhase::Accelerating, DriveCommand { accel, v_abs })
        }
        // 目標到達のステップは加速度 0 で制動へ移る
        CyclePhase::Accelerating => (CyclePhase::Braking, DriveCommand { accel: 0.0, v_abs }),
        CyclePhase::Braking if v_abs > stop_speed => {
            (CyclePhase::Braking, DriveCommand { accel: brake, v_abs })
        }
        CyclePhase::Braking | CyclePhase::Stopped => (
            CyclePhase::Stopped,
            DriveCommand { accel: 0.0, v_abs: 0.0 },
        ),
    }
}

/// 走行パターンの実行状態
///
/// シミュレーションループに注入し、毎ステップ `command` を呼ぶ。
#[derive(Debug, Clone)]
pub struct DriveCycleRunner {
    cycle: DriveCycle,
    phase: CyclePhase,
}

impl DriveCycleRunner {
    pub fn new(cycle: DriveCycle) -> Self {
        DriveCycleRunner {
            cycle,
            phase: CyclePhase::Accelerating,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// 時刻 `t`、車速 `v_abs` における指令を求める
    pub fn command(&mut self, t: f64, v_abs: f64) -> DriveCommand {
        match &self.cycle {
            DriveCycle::StepProfile { segments } => DriveCommand {
                accel: step_profile_accel(segments, t),
                v_abs,
            },
            DriveCycle::SpeedTarget {
                target_speed_kmh,
                accel,
                brake,
                stop_speed,
            } => {
                let (phase, command) = speed_target_transition(
                    self.phase,
                    v_abs,
                    target_speed_kmh / 3.6,
                    *accel,
                    *brake,
                    *stop_speed,
                );
                self.phase = phase;
                command
            }
        }
    }
}
