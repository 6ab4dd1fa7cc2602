//! ハードウェア初期化モジュール
//!
//! ペリフェラルの初期化ロジックを集約します。

use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::{Config, Peripherals};

use crate::leds::LedRing;

/// RCCクロック設定を初期化
///
/// このデモはタイミング精度を要求しないため、デフォルトのHSI構成を
/// そのまま使用する
pub fn create_clock_config() -> Config {
    Config::default()
}

/// LEDリングのGPIO初期化
///
/// PE8〜PE15をプッシュプル出力（プルなし、低速）に設定し、
/// 全消灯状態で開始する
pub fn init_led_ring(p: Peripherals) -> LedRing {
    LedRing::new([
        Output::new(p.PE8, Level::Low, Speed::Low),
        Output::new(p.PE9, Level::Low, Speed::Low),
        Output::new(p.PE10, Level::Low, Speed::Low),
        Output::new(p.PE11, Level::Low, Speed::Low),
        Output::new(p.PE12, Level::Low, Speed::Low),
        Output::new(p.PE13, Level::Low, Speed::Low),
        Output::new(p.PE14, Level::Low, Speed::Low),
        Output::new(p.PE15, Level::Low, Speed::Low),
    ])
}
