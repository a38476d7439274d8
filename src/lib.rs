//! Driver for the AXS5106L capacitive touch controller.
//!
//! The controller reports up to five contacts in a fixed register block. The
//! driver resets the chip, reads that block over I2C and turns it into
//! [`TouchPoint`]s expressed in the display's frame of reference.
//!
//! ```ignore
//! let config = Config::new(Dimensions::new(172, 320)).with_rotation(TouchRotation::Rotate90);
//! let mut touch = Axs5106l::new(i2c, reset, config);
//! touch.init(&mut delay)?;
//! if touch.touched()? {
//!     for point in touch.touches()? {
//!         // ...
//!     }
//! }
//! ```
#![cfg_attr(not(test), no_std)]

// must stay first so the macros are visible in the other modules
mod fmt;

mod axs5106l;
mod config;
mod error;

pub use axs5106l::frame::{decode, decode_with, FrameLengthError, RawFrame, TouchPoint, TouchPoints};
pub use axs5106l::registers::{Register, CHIP_ID_LEN, DEFAULT_ADDRESS, FRAME_LEN, MAX_TOUCH_POINTS};
pub use axs5106l::rotation::{Dimensions, TouchRotation};
pub use axs5106l::{Axs5106l, ChipId};
pub use config::Config;
pub use error::Error;
