//! 8連LEDリング駆動
//!
//! DiscoveryボードのGPIOE 8〜15ピンに円形配置された8個のユーザーLEDを
//! ビットマスクで一括制御します。ビットiがPE(8+i)に対応します。

use embassy_stm32::gpio::Output;
use embassy_stm32::pac;

/// リング上のLED数
pub const LED_COUNT: usize = 8;

/// リング先頭LEDのポートEピン番号（PE8）
const FIRST_PIN: usize = 8;

/// エラー表示パターン（赤LEDペア、PE9/PE13）
pub const ERROR_MASK: u8 = 0b0010_0010;

/// マスク駆動のLEDリング
///
/// 出力ピンの所有権を1つにまとめ、表示状態をマスク書き込みで更新する
pub struct LedRing {
    leds: [Output<'static>; LED_COUNT],
}

impl LedRing {
    pub fn new(leds: [Output<'static>; LED_COUNT]) -> Self {
        Self { leds }
    }

    /// マスクで指定されたLEDのみ点灯し、それ以外をすべて消灯する
    pub fn set_mask(&mut self, mask: u8) {
        for (i, led) in self.leds.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                led.set_high();
            } else {
                led.set_low();
            }
        }
    }

    /// 全LEDを消灯する
    pub fn clear(&mut self) {
        self.set_mask(0);
    }
}

/// ピンの所有権なしでエラーパターンを強制表示する
///
/// フェイルストップ時はLedRingの所有権がすでにタスクへ移っているため、
/// GPIOEレジスタへ直接書き込む。起動時にピンが出力設定済みであることが前提。
pub fn force_error_pattern() {
    pac::GPIOE.bsrr().write(|w| {
        for i in 0..LED_COUNT {
            if ERROR_MASK & (1 << i) != 0 {
                w.set_bs(FIRST_PIN + i, true);
            } else {
                w.set_br(FIRST_PIN + i, true);
            }
        }
    });
}
