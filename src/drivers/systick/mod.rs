mod diverged;
mod timer;

pub struct Adapter;

pub use self::timer::SysTickTickDrv;
