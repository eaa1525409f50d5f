use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

use crate::config::SpiSettings;
use crate::error::Error;
use crate::transport::SpiTransport;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Uninitialized,
    Ready,
    Selected,
}

/// [`SpiTransport`] over an `embedded-hal` blocking SPI bus and a
/// chip-select pin.
///
/// The board HAL fixes clock, mode and bit order when it builds the bus, so
/// the transport is told which settings that was and rejects transactions
/// asking for anything else. Chip select is driven low while a transaction
/// is open. Transfers after `begin` but outside a transaction still clock
/// the bus, with chip select left high.
pub struct HalTransport<Spi, ChipSelectPin>
    where
        Spi: Transfer<u8>,
        ChipSelectPin: OutputPin,
{
    spi: Spi,
    cs: ChipSelectPin,
    settings: SpiSettings,
    state: State,
}

impl<Spi, ChipSelectPin> HalTransport<Spi, ChipSelectPin>
    where
        Spi: Transfer<u8>,
        ChipSelectPin: OutputPin,
{
    pub fn new(spi: Spi, mut cs: ChipSelectPin, settings: SpiSettings) -> Self {
        cs.set_high().unwrap_or(());
        Self {
            spi,
            cs,
            settings,
            state: State::Uninitialized,
        }
    }

    pub fn settings(&self) -> &SpiSettings {
        &self.settings
    }

    pub fn free(self) -> (Spi, ChipSelectPin) {
        (self.spi, self.cs)
    }

    fn select(&mut self) {
        self.cs.set_low().unwrap_or(());
        self.state = State::Selected;
    }

    fn deselect(&mut self) {
        self.cs.set_high().unwrap_or(());
        self.state = State::Ready;
    }
}

impl<Spi, ChipSelectPin> SpiTransport for HalTransport<Spi, ChipSelectPin>
    where
        Spi: Transfer<u8>,
        ChipSelectPin: OutputPin,
{
    type Error = Spi::Error;

    fn begin(&mut self) -> Result<(), Error<Self::Error>> {
        if self.state == State::Uninitialized {
            self.state = State::Ready;
            log::info!("SPI bus up");
        }
        Ok(())
    }

    fn end(&mut self) -> Result<(), Error<Self::Error>> {
        if self.state == State::Selected {
            self.deselect();
        }
        if self.state == State::Ready {
            self.state = State::Uninitialized;
            log::info!("SPI bus down");
        }
        Ok(())
    }

    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Error<Self::Error>> {
        if self.state == State::Uninitialized {
            return Err(Error::NotStarted);
        }
        if *settings != self.settings {
            log::warn!("bus runs at {:?}, transaction asked for {:?}", self.settings, settings);
            return Err(Error::SettingsMismatch);
        }
        self.select();
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), Error<Self::Error>> {
        if self.state == State::Selected {
            self.deselect();
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, buffer: &mut [u8]) -> Result<(), Error<Self::Error>> {
        if self.state == State::Uninitialized {
            return Err(Error::NotStarted);
        }
        self.spi.transfer(buffer).map_err(Error::Spi)?;
        log::debug!("transfer {:?}", buffer);
        Ok(())
    }
}
