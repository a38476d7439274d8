//! AXS5106L touch panel driver

pub mod frame;
pub mod registers;
pub mod rotation;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use crate::config::Config;
use crate::error::Error;
use frame::{decode_with, RawFrame, TouchPoints};
use registers::{Register, CHIP_ID_LEN, FRAME_LEN};

const RESET_ASSERT_MS: u32 = 200;
const RESET_SETTLE_MS: u32 = 300;

pub type ChipId = [u8; CHIP_ID_LEN];

/// AXS5106L driver
///
/// Owns the bus and the reset pin for its whole lifetime, see [`Axs5106l::release`].
pub struct Axs5106l<I2C, RST> {
    address: u8,
    i2c: I2C,
    reset_pin: RST,
    config: Config,
}

impl<I2C, RST> Axs5106l<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    pub fn new(i2c: I2C, reset_pin: RST, config: Config) -> Self {
        Axs5106l {
            address: config.i2c_address(),
            i2c,
            reset_pin,
            config,
        }
    }

    /// Pulses the reset line and probes the chip id.
    ///
    /// A chip id of all zeros is logged but not treated as a failure, some
    /// firmware revisions report it.
    pub fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<ChipId, Error<I2C::Error, RST::Error>> {
        self.reset(delay)?;

        let id = self.chip_id()?;
        if id == [0; CHIP_ID_LEN] {
            warn!("All zeros read from the chip id register");
        } else {
            info!("AXS5106L chip id {:?}", id);
        }
        Ok(id)
    }

    /// Holds reset low, then releases it and waits for the chip to boot.
    ///
    /// No bus traffic happens while reset is asserted.
    pub fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error<I2C::Error, RST::Error>> {
        debug!("Resetting touch controller");
        self.reset_pin.set_low().map_err(Error::Pin)?;
        delay.delay_ms(RESET_ASSERT_MS);
        self.reset_pin.set_high().map_err(Error::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    pub fn chip_id(&mut self) -> Result<ChipId, Error<I2C::Error, RST::Error>> {
        let mut id = [0u8; CHIP_ID_LEN];
        self.read_register(Register::ChipId, &mut id)?;
        Ok(id)
    }

    /// Reads one touch frame. Every call is a fresh bus transaction.
    pub fn read_frame(&mut self) -> Result<RawFrame, Error<I2C::Error, RST::Error>> {
        let mut bytes = [0u8; FRAME_LEN];
        self.read_register(Register::TouchData, &mut bytes)?;
        Ok(RawFrame::new(bytes))
    }

    /// Number of active contacts, capped at the slot count.
    pub fn touch_count(&mut self) -> Result<u8, Error<I2C::Error, RST::Error>> {
        Ok(self.read_frame()?.touch_count())
    }

    pub fn touched(&mut self) -> Result<bool, Error<I2C::Error, RST::Error>> {
        Ok(self.touch_count()? > 0)
    }

    /// Reads the current contacts, in display coordinates.
    pub fn touches(&mut self) -> Result<TouchPoints, Error<I2C::Error, RST::Error>> {
        let frame = self.read_frame()?;
        let config = self.config;
        Ok(decode_with(&frame, |x, y| config.transform(x, y)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.reset_pin)
    }

    fn read_register(
        &mut self,
        register: Register,
        buffer: &mut [u8],
    ) -> Result<(), Error<I2C::Error, RST::Error>> {
        self.i2c
            .write_read(self.address, &[register.addr()], buffer)
            .map_err(Error::Bus)?;
        let data: &[u8] = buffer;
        trace!("Read {:?} => {:?}", register, data);
        Ok(())
    }
}
