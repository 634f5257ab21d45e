use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A pump for GL work that an implementation may batch onto another thread.
pub trait Worker {
    /// Runs pending work.
    fn do_work(&self);

    /// Resolves when there is work for `do_work`.
    fn work_available(&self) -> WorkSignal;
}

/// Every command already runs synchronously on the calling thread, so there
/// is never anything to pump.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoopWorker;

impl Worker for NoopWorker {
    fn do_work(&self) {}

    fn work_available(&self) -> WorkSignal {
        WorkSignal::never()
    }
}

/// A signal that never fires.
#[derive(Debug, Default)]
pub struct WorkSignal {
    _private : ()
}

impl WorkSignal {
    pub fn never() -> Self {
        Self { _private : () }
    }

    pub fn is_ready(&self) -> bool {
        false
    }
}

impl Future for WorkSignal {
    type Output = ();

    fn poll(self : Pin<&mut Self>, _cx : &mut Context<'_>) -> Poll<()> {
        Poll::Pending
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn do_work_returns_immediately() {
        NoopWorker.do_work();
        NoopWorker.do_work();
    }

    #[test]
    fn work_signal_never_fires() {
        let signal = NoopWorker.work_available();
        assert!(!signal.is_ready());
        assert!(signal.now_or_never().is_none());
    }
}
