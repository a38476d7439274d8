use crate::axs5106l::registers::DEFAULT_ADDRESS;
use crate::axs5106l::rotation::{Dimensions, TouchRotation};

/// Construction-time settings of an [`Axs5106l`](crate::Axs5106l).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Clockwise offset from the sensor to the display
    pub rotation: TouchRotation,
    /// Sensor-native grid, i.e. the panel size before rotation
    pub dimensions: Dimensions,
    /// Mirror X after rotating, for panels mounted flipped
    pub mirror_x: bool,
    /// I2C address override, [`DEFAULT_ADDRESS`] when `None`
    pub address: Option<u8>,
}

impl Config {
    pub const fn new(dimensions: Dimensions) -> Self {
        Self {
            rotation: TouchRotation::Rotate0,
            dimensions,
            mirror_x: false,
            address: None,
        }
    }

    pub fn with_rotation(mut self, rotation: TouchRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mirror_x(mut self, mirror_x: bool) -> Self {
        self.mirror_x = mirror_x;
        self
    }

    pub fn with_address(mut self, address: u8) -> Self {
        self.address = Some(address);
        self
    }

    pub fn i2c_address(&self) -> u8 {
        self.address.unwrap_or(DEFAULT_ADDRESS)
    }

    /// Grid of the reported coordinates.
    pub fn display_dimensions(&self) -> Dimensions {
        self.dimensions.rotated(self.rotation)
    }

    /// Maps a raw sensor coordinate to the display.
    pub fn transform(&self, x: u16, y: u16) -> (u16, u16) {
        let (x, y) = self.rotation.apply(x, y, self.dimensions);
        if self.mirror_x {
            (self.display_dimensions().mirror_x(x), y)
        } else {
            (x, y)
        }
    }
}
