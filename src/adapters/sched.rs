use alloc::sync::Arc;

/// The scheduler side of the tick.
pub trait Scheduler: Send + 'static {
    /// Called from interrupt context exactly once per tick.
    /// Must not block or allocate.
    fn on_tick(&self);
}

impl<S: Scheduler + Sync + ?Sized> Scheduler for Arc<S> {
    #[inline]
    fn on_tick(&self) {
        (**self).on_tick()
    }
}

impl<S: Scheduler + Sync + ?Sized> Scheduler for &'static S {
    #[inline]
    fn on_tick(&self) {
        (**self).on_tick()
    }
}
