pub mod int;
pub mod sched;
pub mod tick;
pub mod timer;

#[cfg(test)]
pub mod fakes;
