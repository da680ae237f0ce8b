use crate::TickTimer;
use drone_cortexm::{
    map::{periph::sys_tick::SysTickPeriph, reg::scb},
    reg::prelude::*,
};

use super::{diverged::SysTickDiverged, Adapter};

/// A cortex SysTick tick timer driver.
pub struct SysTickTickDrv(SysTickDiverged);

unsafe impl Sync for SysTickTickDrv {}

impl SysTickTickDrv {
    pub fn new(systick: SysTickPeriph, scb_shpr3: scb::Shpr3<Srt>) -> Self {
        Self(SysTickDiverged::new(systick, scb_shpr3))
    }
}

impl TickTimer<Adapter> for SysTickTickDrv {
    const MAX: u32 = 0xFFFFFF; // SysTick is a 24 bit counter.

    fn set_priority(&self, priority: u8) {
        // SysTick is system handler 15, its priority is the top byte of SHPR3.
        self.0.scb_shpr3.modify(|r| r.write_pri_15(priority as u32));
    }

    fn reload(&self) -> u32 {
        self.0.stk_load.load_bits() as u32
    }

    fn set_reload(&self, reload: u32) {
        // The new value is picked up when the counter next reaches zero.
        self.0.stk_load.store(|r| r.write_reload(reload));
    }

    fn start(&self) {
        // Count the processor clock, the HCLK/8 reference is not used.
        self.0.stk_ctrl.modify(|r| r.set_clksource().set_enable());
    }

    fn int_enable(&self) {
        // Counting down to 0 triggers the SysTick interrupt
        self.0.stk_ctrl.modify(|r| r.set_tickint());
    }
}
