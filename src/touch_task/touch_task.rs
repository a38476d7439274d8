use axs5106l::{Axs5106l, Config, Dimensions, TouchPoints, TouchRotation};
use defmt::*;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::twim::{self, Frequency, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Timer};

use super::TouchHardwareInterface;

bind_interrupts!(struct Irqs {
    SERIAL2  => twim::InterruptHandler<peripherals::SERIAL2>;
});

// 1.47" 172x320 panel, mounted landscape
const PANEL_WIDTH: u16 = 172;
const PANEL_HEIGHT: u16 = 320;
const PANEL_ROTATION: TouchRotation = TouchRotation::Rotate90;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Latest contacts, an empty set once the panel is released
pub(crate) static TOUCH_SIGNAL: Signal<ThreadModeRawMutex, TouchPoints> = Signal::new();

#[embassy_executor::task]
pub async fn touch_task_runner(touch_hw: TouchHardwareInterface<'static>) {
    info!("Hello touch task...");

    let mut touch_enable = Output::new(
        touch_hw.level_shifter_enable,
        Level::Low,
        OutputDrive::Standard,
    );
    let touch_reset = Output::new(touch_hw.reset, Level::High, OutputDrive::Standard);

    let mut config = twim::Config::default();
    config.frequency = Frequency::K400;
    config.scl_high_drive = true;
    config.sda_high_drive = true;
    let i2c = Twim::new(touch_hw.i2c, Irqs, touch_hw.sda, touch_hw.scl, config);

    let config = Config::new(Dimensions::new(PANEL_WIDTH, PANEL_HEIGHT))
        .with_rotation(PANEL_ROTATION)
        .with_address(touch_hw.address);
    let mut touch_controller = Axs5106l::new(i2c, touch_reset, config);

    info!("Enabling touch level shifter...");
    touch_enable.set_high();
    Timer::after(Duration::from_millis(10)).await; // Give the HW some time to settle

    info!("Initializing touch controller...");
    match touch_controller.init(&mut Delay) {
        Ok(id) => info!("Touch controller ready, chip id {}", id),
        Err(e) => error!(
            "Failed to initialize the touch controller! => {}",
            Debug2Format(&e)
        ),
    }

    let mut released = true;
    loop {
        // check then fetch: two frame reads per touched poll
        match touch_controller.touched() {
            Ok(true) => match touch_controller.touches() {
                Ok(points) => {
                    released = false;
                    TOUCH_SIGNAL.signal(points);
                }
                Err(e) => error!("Touch read error => {}", Debug2Format(&e)),
            },
            Ok(false) if !released => {
                released = true;
                TOUCH_SIGNAL.signal(TouchPoints::new());
            }
            Ok(false) => {}
            Err(e) => error!("Touch read error => {}", Debug2Format(&e)),
        }
        Timer::after(POLL_INTERVAL).await;
    }
}
