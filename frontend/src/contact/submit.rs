use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// Payload handed to the submission boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub institution_name: String,
    pub full_name: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("contact submission rejected: {0}")]
    Rejected(String),
}

/// Request boundary for contact submissions. Implementations resolve once
/// with the outcome; they are not retried.
pub trait ContactSubmitter {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

pub trait Sleep {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(millis).boxed_local()
    }
}

/// Accepts every request after a fixed delay without touching the network.
pub struct SimulatedSubmitter<S = BrowserSleep> {
    sleep: S,
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new() -> Self {
        Self::with_sleep(BrowserSleep, config::SUBMIT_DELAY_MS)
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sleep> SimulatedSubmitter<S> {
    pub fn with_sleep(sleep: S, delay_ms: u32) -> Self {
        Self { sleep, delay_ms }
    }
}

impl<S: Sleep> ContactSubmitter for SimulatedSubmitter<S> {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        debug!(
            "Simulating contact submission for {} ({}ms)",
            request.institution_name, self.delay_ms
        );
        let wait = self.sleep.sleep(self.delay_ms);
        async move {
            wait.await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared submitter handle usable as a component prop.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

impl SubmitterHandle {
    pub fn simulated() -> Self {
        SubmitterHandle(Rc::new(SimulatedSubmitter::new()))
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Owner-side handle of an in-flight submission. Aborts the task on drop so a
/// late completion cannot reach a torn-down owner.
#[derive(Debug)]
pub struct PendingSubmission {
    handle: AbortHandle,
}

impl PendingSubmission {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn cancellable<F: Future>(task: F) -> (Abortable<F>, PendingSubmission) {
    let (handle, registration) = AbortHandle::new_pair();
    (Abortable::new(task, registration), PendingSubmission { handle })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::future::{FutureExt, LocalBoxFuture};

    use super::Sleep;

    /// Virtual clock: sleepers wake only when `advance` moves time past their deadline.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        inner: Rc<RefCell<ClockState>>,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        sleepers: Vec<(u64, oneshot::Sender<()>)>,
    }

    impl ManualClock {
        pub fn advance(&self, millis: u64) {
            let mut state = self.inner.borrow_mut();
            state.now += millis;
            let now = state.now;
            let (due, waiting): (Vec<_>, Vec<_>) =
                state.sleepers.drain(..).partition(|(deadline, _)| *deadline <= now);
            state.sleepers = waiting;
            drop(state);
            for (_, waker) in due {
                let _ = waker.send(());
            }
        }
    }

    impl Sleep for ManualClock {
        fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
            let (tx, rx) = oneshot::channel();
            let mut state = self.inner.borrow_mut();
            let deadline = state.now + u64::from(millis);
            state.sleepers.push((deadline, tx));
            rx.map(|_| ()).boxed_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use super::testing::ManualClock;
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            institution_name: "Riverside School".to_string(),
            full_name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn submitter_handle_compares_by_identity() {
        let handle = SubmitterHandle::simulated();
        assert!(handle.clone() == handle);
        assert!(SubmitterHandle::simulated() != handle);
    }

    #[test]
    fn request_serializes_with_form_field_names() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "institutionName": "Riverside School",
                "fullName": "Jane Doe",
                "phone": "555-0100",
            })
        );
    }

    #[test]
    fn simulated_submission_resolves_only_after_the_delay() {
        let clock = ManualClock::default();
        let submitter = SimulatedSubmitter::with_sleep(clock.clone(), config::SUBMIT_DELAY_MS);
        let outcome = Rc::new(Cell::new(None));

        let mut pool = LocalPool::new();
        let slot = outcome.clone();
        let task = submitter.submit(request());
        pool.spawner()
            .spawn_local(async move { slot.set(Some(task.await)) })
            .unwrap();

        pool.run_until_stalled();
        assert_eq!(outcome.take(), None);

        clock.advance(999);
        pool.run_until_stalled();
        assert_eq!(outcome.take(), None);

        clock.advance(1);
        pool.run_until_stalled();
        assert_eq!(outcome.take(), Some(Ok(())));
    }

    #[test]
    fn cancelled_submission_never_completes() {
        let clock = ManualClock::default();
        let submitter = SimulatedSubmitter::with_sleep(clock.clone(), config::SUBMIT_DELAY_MS);
        let completed = Rc::new(Cell::new(false));

        let (task, pending) = cancellable(submitter.submit(request()));
        let mut pool = LocalPool::new();
        let flag = completed.clone();
        pool.spawner()
            .spawn_local(async move {
                if task.await.is_ok() {
                    flag.set(true);
                }
            })
            .unwrap();

        pool.run_until_stalled();
        pending.cancel();
        assert!(pending.is_cancelled());
        clock.advance(5_000);
        pool.run();
        assert!(!completed.get());
    }

    #[test]
    fn dropping_the_pending_guard_cancels_the_task() {
        let (task, pending) = cancellable(async { 7 });
        drop(pending);
        assert!(futures::executor::block_on(task).is_err());
    }
}
