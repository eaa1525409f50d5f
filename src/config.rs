use core::fmt;

use embedded_hal::spi::{Mode, Phase, Polarity, MODE_1};
use embedded_time::rate::{Baud, Hertz};

/// Order in which the bits of each byte are shifted out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Settings applied for the duration of one SPI transaction.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SpiSettings {
    pub clock: Hertz,
    pub bit_order: BitOrder,
    pub mode: Mode,
}

impl SpiSettings {
    pub const fn new(clock: Hertz, bit_order: BitOrder, mode: Mode) -> Self {
        Self {
            clock,
            bit_order,
            mode,
        }
    }
}

// embedded-hal's Mode has no Debug
impl fmt::Debug for SpiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let polarity = match self.mode.polarity {
            Polarity::IdleLow => "IdleLow",
            Polarity::IdleHigh => "IdleHigh",
        };
        let phase = match self.mode.phase {
            Phase::CaptureOnFirstTransition => "CaptureOnFirstTransition",
            Phase::CaptureOnSecondTransition => "CaptureOnSecondTransition",
        };
        f.debug_struct("SpiSettings")
            .field("clock_hz", &self.clock.0)
            .field("bit_order", &self.bit_order)
            .field("polarity", &polarity)
            .field("phase", &phase)
            .finish()
    }
}

impl Default for SpiSettings {
    /// 4 MHz, MSB first, mode 1.
    fn default() -> Self {
        Self::new(Hertz(4_000_000), BitOrder::MsbFirst, MODE_1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub baud: Baud,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            baud: Baud(115_200),
        }
    }
}

/// Everything the self-test needs to bring its peripherals up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoopbackConfig {
    pub console: ConsoleSettings,
    pub spi: SpiSettings,
}
