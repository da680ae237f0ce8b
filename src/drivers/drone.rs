use drone_core::{fib, thr::prelude::*, thr::ThrToken};

use crate::TickInt;

impl<Thr: ThrToken + Copy + Send + 'static, A> TickInt<A> for Thr {
    fn attach<F: FnMut() + Send + 'static>(&self, mut handler: F) {
        let thr = *self;
        // The fiber lives for as long as the timer runs, which is forever.
        thr.add_fn(move || {
            handler();
            fib::Yielded::<(), ()>(())
        });
    }
}
