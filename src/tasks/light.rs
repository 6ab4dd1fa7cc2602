//! LEDパターン制御タスク
//!
//! 4状態のパターンを周期的に1ステップ進めて表示します。待機時間は
//! speed_taskが変化させる共有ディレイ値に従います。

use core::sync::atomic::Ordering;

use embassy_time::Timer;

use crate::leds::LedRing;
use crate::pattern::Phase;
use crate::state::STEP_DELAY_MS;

/// LEDパターン制御タスク
///
/// パターンを進めて対応するLEDペアを点灯し、現在のディレイ値だけ待機する
#[embassy_executor::task]
pub async fn light_task(mut ring: LedRing) {
    info!("Light task started");

    let mut phase = Phase::Blue;
    loop {
        phase = phase.next();
        ring.set_mask(phase.led_mask());

        let delay_ms = STEP_DELAY_MS.load(Ordering::Relaxed);
        trace!("Phase {} lit for {} ms", phase.index(), delay_ms);
        Timer::after_millis(delay_ms as u64).await;
    }
}
