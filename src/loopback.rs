//! The three loopback checks.
//!
//! Each one sends a fixed pattern, reads back what came in on MISO, and
//! prints what it saw. A wiring fault never shows up as an error here, only
//! as a `failed`/`fail` line and in the returned outcome.

use core::fmt::{self, Display};

use crate::console::Console;
use crate::error::Error;
use crate::transport::SpiTransport;

pub const BYTE_PATTERN: u8 = 0xEF;
pub const WORD_PATTERN: u16 = 0xABCD;
pub const ARRAY_LEN: usize = 22;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn of(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    /// Word used on a test's closing line.
    pub fn summary(self) -> &'static str {
        match self {
            Verdict::Pass => "passed",
            Verdict::Fail => "failed",
        }
    }

    /// Word used on a per-element line.
    pub fn mark(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ByteOutcome {
    pub sent: u8,
    pub received: u8,
}

impl ByteOutcome {
    pub fn verdict(&self) -> Verdict {
        Verdict::of(self.sent == self.received)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WordOutcome {
    pub sent: u16,
    pub received: u16,
}

impl WordOutcome {
    pub fn verdict(&self) -> Verdict {
        Verdict::of(self.sent == self.received)
    }
}

/// What came back for the `0, 1, .., 21` buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayOutcome {
    pub received: [u8; ARRAY_LEN],
}

impl ArrayOutcome {
    /// `None` past the end of the buffer.
    pub fn verdict_at(&self, index: usize) -> Option<Verdict> {
        self.received
            .get(index)
            .map(|b| Verdict::of(*b as usize == index))
    }

    pub fn verdicts(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.received
            .iter()
            .enumerate()
            .map(|(i, b)| Verdict::of(*b as usize == i))
    }

    pub fn failures(&self) -> usize {
        self.verdicts().filter(|v| *v == Verdict::Fail).count()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::of(self.failures() == 0)
    }
}

fn report_scalar<C>(console: &mut C, bits: u8, received: impl Display, verdict: Verdict) -> fmt::Result
    where C: Console
{
    report!(console, "{} bit data received {}", bits, received)?;
    report!(console, "{} bit loopback test {}", bits, verdict.summary())
}

pub fn byte_test<T, C>(spi: &mut T, console: &mut C) -> Result<ByteOutcome, Error<T::Error>>
    where
        T: SpiTransport,
        C: Console,
{
    let received = spi.transfer(BYTE_PATTERN)?;
    let outcome = ByteOutcome {
        sent: BYTE_PATTERN,
        received,
    };
    if outcome.verdict() == Verdict::Fail {
        log::warn!("8 bit loopback: sent {:#04x}, received {:#04x}", outcome.sent, received);
    }
    report_scalar(console, 8, received, outcome.verdict())?;
    Ok(outcome)
}

pub fn word_test<T, C>(spi: &mut T, console: &mut C) -> Result<WordOutcome, Error<T::Error>>
    where
        T: SpiTransport,
        C: Console,
{
    let received = spi.transfer16(WORD_PATTERN)?;
    let outcome = WordOutcome {
        sent: WORD_PATTERN,
        received,
    };
    if outcome.verdict() == Verdict::Fail {
        log::warn!("16 bit loopback: sent {:#06x}, received {:#06x}", outcome.sent, received);
    }
    report_scalar(console, 16, received, outcome.verdict())?;
    Ok(outcome)
}

pub fn array_test<T, C>(spi: &mut T, console: &mut C) -> Result<ArrayOutcome, Error<T::Error>>
    where
        T: SpiTransport,
        C: Console,
{
    let mut buffer = [0u8; ARRAY_LEN];
    for (i, b) in buffer.iter_mut().enumerate() {
        *b = i as u8;
    }

    spi.transfer_in_place(&mut buffer)?;

    let outcome = ArrayOutcome {
        received: buffer,
    };
    for (i, verdict) in outcome.verdicts().enumerate() {
        report!(console, "{}\t{}\t{}", i, outcome.received[i], verdict.mark())?;
    }
    if outcome.failures() != 0 {
        log::warn!("array loopback: {} of {} bytes differ", outcome.failures(), ARRAY_LEN);
    }
    Ok(outcome)
}
