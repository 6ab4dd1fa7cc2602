//! 速度制御タスク
//!
//! LED切り替えディレイを三角波状にスイープし、共有ディレイ値を
//! 更新します。ディレイが最大値に達すると減少に転じ、最小値に達すると
//! 増加に戻ります。

use core::sync::atomic::Ordering;

use embassy_time::{Duration, Ticker};

use crate::config::{
    INITIAL_STEP_DELAY_MS, MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS, STEP_DELAY_DELTA_MS,
    SWEEP_PAUSE_MS,
};
use crate::state::STEP_DELAY_MS;
use crate::sweep::{DelaySweep, Direction};

/// 速度制御タスク
///
/// 固定周期ごとにスイープを1ステップ進め、新しいディレイ値を共有状態へ
/// 書き込む
#[embassy_executor::task]
pub async fn speed_task() {
    info!("Speed task started");

    let mut sweep = DelaySweep::new(
        INITIAL_STEP_DELAY_MS,
        Direction::Up,
        MIN_STEP_DELAY_MS,
        MAX_STEP_DELAY_MS,
        STEP_DELAY_DELTA_MS,
    );

    debug!("Sweep starting at {} ms", sweep.delay_ms());

    let mut ticker = Ticker::every(Duration::from_millis(SWEEP_PAUSE_MS));
    loop {
        ticker.next().await;

        let direction_before = sweep.direction();
        let delay_ms = sweep.step();
        STEP_DELAY_MS.store(delay_ms, Ordering::Relaxed);

        if sweep.direction() != direction_before {
            debug!("Sweep reversed at {} ms", delay_ms);
        }
        trace!("Step delay now {} ms", delay_ms);
    }
}
