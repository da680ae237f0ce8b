use drone_core::reg::prelude::*;
use drone_cortexm::map::{
    periph::sys_tick::SysTickPeriph,
    reg::{scb, stk},
};

pub struct SysTickDiverged {
    pub(crate) scb_shpr3: scb::Shpr3<Crt>,
    pub(crate) stk_ctrl: stk::Ctrl<Crt>,
    pub(crate) stk_load: stk::Load<Srt>,
}

impl SysTickDiverged {
    pub(crate) fn new(systick: SysTickPeriph, scb_shpr3: scb::Shpr3<Srt>) -> Self {
        Self {
            scb_shpr3: scb_shpr3.into_copy(),
            stk_ctrl: systick.stk_ctrl.into_copy(),
            stk_load: systick.stk_load,
        }
    }
}
