use core::fmt::{self, Write};

use embedded_hal::serial;
use embedded_time::rate::Baud;
use heapless::{consts::*, String};
use nb::block;

use crate::config::ConsoleSettings;

/// Format a line and send it to a [`Console`], terminated by `\r\n`.
macro_rules! report {
    ($console:expr, $($arg:tt)*) => ({
        $console.println(format_args!($($arg)*))
    })
}

/// Line-oriented text sink the self-test reports to.
pub trait Console: Write {
    fn begin(&mut self, settings: &ConsoleSettings) -> fmt::Result;

    fn end(&mut self) -> fmt::Result;

    /// Lines longer than 64 bytes are rejected.
    fn println(&mut self, args: fmt::Arguments) -> fmt::Result {
        let mut line = String::<U64>::new();
        line.write_fmt(args)?;
        line.push_str("\r\n").map_err(|_| fmt::Error)?;
        self.write_str(&line)
    }
}

/// [`Console`] over a UART transmitter.
///
/// The HAL configures the UART, so the console is built with the baud rate
/// the transmitter already runs at and refuses to begin at any other.
pub struct SerialConsole<Tx>
    where Tx: serial::Write<u8>
{
    tx: Tx,
    baud: Baud,
    open: bool,
}

impl<Tx> SerialConsole<Tx>
    where Tx: serial::Write<u8>
{
    pub fn new(tx: Tx, baud: Baud) -> Self {
        Self {
            tx,
            baud,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn free(self) -> Tx {
        self.tx
    }
}

impl<Tx> Write for SerialConsole<Tx>
    where Tx: serial::Write<u8>
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.open {
            return Err(fmt::Error);
        }
        for b in s.bytes() {
            block!(self.tx.write(b)).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

impl<Tx> Console for SerialConsole<Tx>
    where Tx: serial::Write<u8>
{
    fn begin(&mut self, settings: &ConsoleSettings) -> fmt::Result {
        if settings.baud != self.baud {
            log::warn!("console runs at {} baud, {} requested", self.baud.0, settings.baud.0);
            return Err(fmt::Error);
        }
        self.open = true;
        Ok(())
    }

    fn end(&mut self) -> fmt::Result {
        if self.open {
            block!(self.tx.flush()).map_err(|_| fmt::Error)?;
            self.open = false;
        }
        Ok(())
    }
}
