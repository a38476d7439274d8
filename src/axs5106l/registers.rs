/// Factory I2C address
pub const DEFAULT_ADDRESS: u8 = 0x63;

/// Number of hardware contact slots
pub const MAX_TOUCH_POINTS: usize = 5;

/// Length of the chip id block at [`Register::ChipId`]
pub const CHIP_ID_LEN: usize = 3;

pub(crate) const TOUCH_COUNT_OFFSET: usize = 1;
pub(crate) const SLOTS_OFFSET: usize = 2;
pub(crate) const SLOT_LEN: usize = 6;

/// Length of the touch block at [`Register::TouchData`]: status, count, then 5 slots
///
/// Known drivers read 14 bytes here, which only covers slots 0 and 1. Bytes
/// 14.. are assumed to continue the same 6-byte slot layout for slots 2 to 4.
pub const FRAME_LEN: usize = SLOTS_OFFSET + MAX_TOUCH_POINTS * SLOT_LEN;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    TouchData = 0x01,
    ChipId = 0x08,
}

impl Register {
    pub fn addr(self) -> u8 {
        self as u8
    }
}
