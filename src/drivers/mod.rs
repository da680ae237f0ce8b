#[cfg(feature = "drone")]
mod drone;

#[cfg(feature = "systick")]
pub mod systick;
