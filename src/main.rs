#![no_std]
#![no_main]

mod config;
mod fmt;
mod hardware;
mod leds;
mod pattern;
mod state;
mod sweep;
mod tasks;

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use cortex_m::asm;
use embassy_executor::Spawner;

use tasks::{light_task, speed_task};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // ハードウェア初期化
    let config = hardware::create_clock_config();
    let p = embassy_stm32::init(config);

    info!("Rotating lights demo • STM32F303VC");

    let mut ring = hardware::init_led_ring(p);
    ring.clear();

    // タスク生成に失敗した場合はフェイルストップ
    if spawner.spawn(light_task(ring)).is_err() {
        error_halt();
    }
    if spawner.spawn(speed_task()).is_err() {
        error_halt();
    }

    info!("Both tasks spawned; handing over to the executor");
}

/// 回復不能エラーの停止処理
///
/// 赤LEDペアを点灯したまま割り込み待ちで永久停止する。mainタスクが
/// awaitせずに停止するため、生成済みのタスクも二度と実行されない。
/// 復帰には物理リセットが必要。
fn error_halt() -> ! {
    error!("Task spawn failed, halting");
    leds::force_error_pattern();
    loop {
        asm::wfi();
    }
}
