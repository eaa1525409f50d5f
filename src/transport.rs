use crate::config::SpiSettings;
use crate::error::Error;

/// Full-duplex SPI bus as seen by the self-test.
///
/// Implementors provide the lifecycle and an in-place buffer transfer; the
/// single byte and 16-bit transfers are built on top of it.
pub trait SpiTransport {
    type Error;

    fn begin(&mut self) -> Result<(), Error<Self::Error>>;

    fn end(&mut self) -> Result<(), Error<Self::Error>>;

    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Error<Self::Error>>;

    fn end_transaction(&mut self) -> Result<(), Error<Self::Error>>;

    /// Shift out every byte of `buffer`, replacing each with the byte
    /// shifted in at the same time.
    fn transfer_in_place(&mut self, buffer: &mut [u8]) -> Result<(), Error<Self::Error>>;

    fn transfer(&mut self, byte: u8) -> Result<u8, Error<Self::Error>> {
        let mut xfer = [byte];
        self.transfer_in_place(&mut xfer)?;
        Ok(xfer[0])
    }

    /// Low byte goes out (and comes back) first.
    fn transfer16(&mut self, word: u16) -> Result<u16, Error<Self::Error>> {
        let mut xfer = word.to_le_bytes();
        self.transfer_in_place(&mut xfer)?;
        Ok(u16::from_le_bytes(xfer))
    }
}
