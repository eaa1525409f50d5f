/// Failures raised while driving the console or the SPI transport.
///
/// A loopback mismatch is not an error: it is reported on the console and in
/// the returned outcomes.
#[derive(Debug)]
pub enum Error<E> {
    /// The bus reported an error.
    Spi(E),
    /// The console refused output.
    Console,
    /// A transaction asked for settings the bus is not running at.
    SettingsMismatch,
    /// A transaction or transfer was requested before `begin`.
    NotStarted,
}

impl<E> From<core::fmt::Error> for Error<E> {
    fn from(_: core::fmt::Error) -> Self {
        Error::Console
    }
}
