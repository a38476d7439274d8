mod touch_handler;
mod touch_task;
use embassy_nrf::{gpio::AnyPin, peripherals, PeripheralRef};
pub(crate) use touch_handler::TouchHandler;
pub(crate) use touch_task::{touch_task_runner, TOUCH_SIGNAL};

pub(crate) struct TouchHardwareInterface<'a> {
    pub address: u8,
    pub level_shifter_enable: AnyPin,
    pub reset: AnyPin,
    pub scl: AnyPin,
    pub sda: AnyPin,
    pub i2c: PeripheralRef<'a, peripherals::SERIAL2>,
}
