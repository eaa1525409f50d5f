use core::ops::{Deref, DerefMut};

use crate::config::SpiSettings;
use crate::error::Error;
use crate::transport::SpiTransport;

/// An open transaction on `T`. Closed when dropped.
pub struct Transaction<'a, T>
    where T: SpiTransport + 'a,
{
    spi: &'a mut T,
}

pub trait Transact<'a, T>
    where T: SpiTransport + 'a,
{
    fn transaction(&'a mut self, settings: &SpiSettings) -> Result<Transaction<'a, T>, Error<T::Error>>;
}

impl<'a, T> Transact<'a, T> for T
    where T: SpiTransport + 'a,
{
    fn transaction(&'a mut self, settings: &SpiSettings) -> Result<Transaction<'a, T>, Error<T::Error>> {
        self.begin_transaction(settings)?;
        log::info!("begin transaction at {} Hz", settings.clock.0);
        Ok(Transaction {
            spi: self,
        })
    }
}

impl<T> Deref for Transaction<'_, T>
    where T: SpiTransport,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.spi
    }
}

impl<T> DerefMut for Transaction<'_, T>
    where T: SpiTransport,
{
    fn deref_mut(&mut self) -> &mut T {
        self.spi
    }
}

impl<T> Drop for Transaction<'_, T>
    where T: SpiTransport,
{
    fn drop(&mut self) {
        log::info!("end transaction");
        self.spi.end_transaction().unwrap_or(());
    }
}
