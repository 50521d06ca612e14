#![no_main]
#![no_std]

use panic_abort as _;
use rtic::app;

use stm32f1xx_hal::flash::FlashExt;
use stm32f1xx_hal::gpio::GpioExt;
use stm32f1xx_hal::pac::TIM3;
use stm32f1xx_hal::timer::DelayUs;

use ir_remote_tx::carrier::stm32_tim::{Tim4Carrier, Tim4Ch1Pin};
use ir_remote_tx::*;

//-----------------------------------------------------------------------------

type Remote = IrRemote<Tim4Carrier, Tim4Ch1Pin, DelayUs<TIM3>>;

// Power toggle of a TV, raw timings as captured
static POWER_TOGGLE: [Pulse; 6] = [
    Pulse::new(2400, 600),
    Pulse::new(1200, 600),
    Pulse::new(600, 600),
    Pulse::new(1200, 600),
    Pulse::new(600, 600),
    Pulse::last(1200),
];

//-----------------------------------------------------------------------------

#[app(device = stm32f1xx_hal::pac, peripherals = true)]
mod app {
    use super::*;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        remote: Remote,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        use stm32f1xx_hal::prelude::_fugit_RateExtU32;
        use stm32f1xx_hal::prelude::_stm32_hal_rcc_RccExt;
        use stm32f1xx_hal::prelude::_stm32f4xx_hal_timer_TimerExt;

        let mut flash = ctx.device.FLASH.constrain();
        let mut gpiob = ctx.device.GPIOB.split();

        let rcc = ctx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(config::MCU_XTAL_HZ.Hz())
            .sysclk(config::MCU_XTAL_HZ.Hz())
            .freeze(&mut flash.acr);

        //---------------------------------------------------------------------

        let ir_led = gpiob.pb6.into_alternate_push_pull(&mut gpiob.crl);
        let delay = ctx.device.TIM3.delay_us(&clocks);

        let mut remote = IrRemote::new(
            Tim4Carrier::new(ctx.device.TIM4),
            Tim4Ch1Pin::new(ir_led),
            delay,
        )
        .with_conversion_factor(conversion_factor(clocks.pclk1_tim()).unwrap());

        remote.initialise(config::DEFAULT_CARRIER_KHZ).unwrap();

        //---------------------------------------------------------------------

        (Shared {}, Local { remote }, init::Monotonics())
    }

    //-------------------------------------------------------------------------

    #[idle(local = [remote])]
    fn idle(ctx: idle::Context) -> ! {
        loop {
            ctx.local.remote.send_command(&POWER_TOGGLE).unwrap();
            cortex_m::asm::delay(config::REPEAT_GAP_CYCLES);
        }
    }
}
