use crate::config::LoopbackConfig;
use crate::console::Console;
use crate::error::Error;
use crate::loopback::{array_test, byte_test, word_test, ArrayOutcome, ByteOutcome, Verdict, WordOutcome};
use crate::transaction::Transact;
use crate::transport::SpiTransport;

pub const TITLE: &str = "SPI loopback test";

/// Outcomes of one pass over the three checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub byte: ByteOutcome,
    pub word: WordOutcome,
    pub array: ArrayOutcome,
}

impl Report {
    pub fn verdict(&self) -> Verdict {
        Verdict::of(
            self.byte.verdict() == Verdict::Pass
                && self.word.verdict() == Verdict::Pass
                && self.array.verdict() == Verdict::Pass,
        )
    }
}

/// Byte, then word, then array, on an already open transaction.
pub fn run_tests<T, C>(spi: &mut T, console: &mut C) -> Result<Report, Error<T::Error>>
    where
        T: SpiTransport,
        C: Console,
{
    let byte = byte_test(spi, console)?;
    let word = word_test(spi, console)?;
    let array = array_test(spi, console)?;
    Ok(Report { byte, word, array })
}

/// Bring the console and bus up, run the checks inside one transaction, and
/// bring everything back down.
///
/// Any error aborts the run; the transaction is still closed, but the bus
/// and console are left up.
pub fn setup<T, C>(spi: &mut T, console: &mut C, config: &LoopbackConfig) -> Result<Report, Error<T::Error>>
    where
        T: SpiTransport,
        C: Console,
{
    console.begin(&config.console)?;
    report!(console, "{}", TITLE)?;

    spi.begin()?;
    let report = {
        let mut txn = spi.transaction(&config.spi)?;
        run_tests(&mut *txn, console)?
    };
    spi.end()?;

    log::info!("loopback {}", report.verdict().summary());
    console.end()?;
    Ok(report)
}

/// Nothing left to do once setup has run.
pub fn idle() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
