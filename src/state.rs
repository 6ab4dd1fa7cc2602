//! グローバル共有状態管理
//!
//! タスク間で共有される値を管理します。共有されるのは単一のu32のみ
//! なのでアトミック変数で保持し、ロックは使用しません。

use core::sync::atomic::AtomicU32;

use crate::config::INITIAL_STEP_DELAY_MS;

/// LED切り替えの間隔 [ms]
/// speed_taskが書き込み、light_taskが読み取る（単一ライター/単一リーダー）
pub static STEP_DELAY_MS: AtomicU32 = AtomicU32::new(INITIAL_STEP_DELAY_MS);
