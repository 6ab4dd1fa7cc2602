//! タイミング設定パラメータ
//!
//! 値はすべて実験的に選定されたもので、LEDの切り替え効果が
//! 見た目に心地よくなるよう調整されています。

/// LED切り替えディレイの最小値 [ms]
pub const MIN_STEP_DELAY_MS: u32 = 25;

/// LED切り替えディレイの最大値 [ms]
pub const MAX_STEP_DELAY_MS: u32 = 300;

/// 起動時のディレイ初期値 [ms]
pub const INITIAL_STEP_DELAY_MS: u32 = 300;

/// スイープ1ステップあたりのディレイ増減量 [ms]
pub const STEP_DELAY_DELTA_MS: u32 = 15;

/// スイープタスクの更新周期 [ms]（各ステップ後の固定ポーズ）
pub const SWEEP_PAUSE_MS: u64 = 200;
