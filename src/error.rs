use core::fmt;

/// Failures surfaced by [`Axs5106l`](crate::Axs5106l).
///
/// Nothing is retried internally, the caller decides whether to poll again.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BusError, PinError> {
    /// The I2C transaction failed (NACK, timeout, arbitration loss...)
    Bus(BusError),
    /// The reset pin could not be driven
    Pin(PinError),
}

impl<BusError, PinError> fmt::Display for Error<BusError, PinError>
where
    BusError: fmt::Debug,
    PinError: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::Pin(e) => write!(f, "reset pin error: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;

    #[test]
    fn display_names_the_failing_collaborator() {
        let bus: Error<ErrorKind, ()> = Error::Bus(ErrorKind::Bus);
        let pin: Error<ErrorKind, ()> = Error::Pin(());
        assert_eq!(bus.to_string(), "bus error: Bus");
        assert_eq!(pin.to_string(), "reset pin error: ()");
    }
}
