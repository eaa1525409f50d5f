//! Test doubles standing in for the board.

use core::convert::Infallible;
use core::fmt::{self, Write};

use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial;
use heapless::{consts::*, String, Vec};

use crate::config::{ConsoleSettings, SpiSettings};
use crate::console::Console;
use crate::hal::HalTransport;

pub(crate) const HIGH: bool = true;
pub(crate) const LOW: bool = false;

/// MOSI jumpered to MISO: every byte comes back unchanged.
#[derive(Default)]
pub(crate) struct WiredLoopback {
    pub(crate) wire: Vec<u8, U128>,
}

impl Transfer<u8> for WiredLoopback {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Infallible> {
        for w in words.iter() {
            self.wire.push(*w).unwrap();
        }
        Ok(words)
    }
}

/// Jumper pulled: MISO floats high and reads 0xFF.
#[derive(Default)]
pub(crate) struct FloatingMiso;

impl Transfer<u8> for FloatingMiso {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Infallible> {
        for w in words.iter_mut() {
            *w = 0xFF;
        }
        Ok(words)
    }
}

/// Loopback that mangles the byte at one position of each transfer.
pub(crate) struct CorruptingBus {
    index: usize,
    value: u8,
}

impl Transfer<u8> for CorruptingBus {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Infallible> {
        if let Some(w) = words.get_mut(self.index) {
            *w = self.value;
        }
        Ok(words)
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct BusFault;

pub(crate) struct FaultyBus;

impl Transfer<u8> for FaultyBus {
    type Error = BusFault;

    fn transfer<'w>(&mut self, _words: &'w mut [u8]) -> Result<&'w [u8], BusFault> {
        Err(BusFault)
    }
}

/// Chip-select pin remembering every level it was driven to.
#[derive(Default)]
pub(crate) struct RecordingPin {
    pub(crate) levels: Vec<bool, U16>,
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.levels.push(LOW).unwrap();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.levels.push(HIGH).unwrap();
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingTx {
    pub(crate) sent: Vec<u8, U256>,
    pub(crate) flushes: usize,
}

impl serial::Write<u8> for RecordingTx {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        self.sent.push(word).unwrap();
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        self.flushes += 1;
        Ok(())
    }
}

/// Console capturing everything printed while open.
#[derive(Default)]
pub(crate) struct CapturedConsole {
    pub(crate) output: String<U2048>,
    pub(crate) began: Option<ConsoleSettings>,
    pub(crate) ended: bool,
}

impl CapturedConsole {
    pub(crate) fn lines(&self) -> core::str::Lines<'_> {
        self.output.lines()
    }
}

impl Write for CapturedConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s).map_err(|_| fmt::Error)
    }
}

impl Console for CapturedConsole {
    fn begin(&mut self, settings: &ConsoleSettings) -> fmt::Result {
        self.began = Some(*settings);
        Ok(())
    }

    fn end(&mut self) -> fmt::Result {
        self.ended = true;
        Ok(())
    }
}

pub(crate) fn loopback_transport() -> HalTransport<WiredLoopback, RecordingPin> {
    HalTransport::new(WiredLoopback::default(), RecordingPin::default(), SpiSettings::default())
}

pub(crate) fn floating_transport() -> HalTransport<FloatingMiso, RecordingPin> {
    HalTransport::new(FloatingMiso, RecordingPin::default(), SpiSettings::default())
}

pub(crate) fn corrupting_transport(index: usize, value: u8) -> HalTransport<CorruptingBus, RecordingPin> {
    HalTransport::new(CorruptingBus { index, value }, RecordingPin::default(), SpiSettings::default())
}

pub(crate) fn faulty_transport() -> HalTransport<FaultyBus, RecordingPin> {
    HalTransport::new(FaultyBus, RecordingPin::default(), SpiSettings::default())
}
