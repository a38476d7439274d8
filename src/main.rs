#![no_std]
#![no_main]

mod touch_task;

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::Peripheral;

use {defmt_rtt as _, panic_probe as _};

use touch_task::{TouchHandler, TOUCH_SIGNAL};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    info!("Hello axs5106l-demo!");

    let touch_hw = touch_task::TouchHardwareInterface {
        address: axs5106l::DEFAULT_ADDRESS,
        level_shifter_enable: p.P1_01.degrade(),
        reset: p.P0_20.degrade(),
        #[cfg(feature = "hw-board-dk")]
        scl: p.P1_08.degrade(),
        #[cfg(feature = "hw-board-zs")]
        scl: p.P1_03.degrade(),
        #[cfg(feature = "hw-board-dk")]
        sda: p.P1_07.degrade(),
        #[cfg(feature = "hw-board-zs")]
        sda: p.P1_02.degrade(),
        i2c: p.SERIAL2.into_ref(),
    };

    info!("Spawning touch task...");
    unwrap!(spawner.spawn(touch_task::touch_task_runner(touch_hw)));

    let mut handler = TouchHandler::new();
    loop {
        let points = TOUCH_SIGNAL.wait().await;
        handler.handle_new_touch_points(&points);
    }
}
