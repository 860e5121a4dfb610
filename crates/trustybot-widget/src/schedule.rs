// crates/trustybot-widget/src/schedule.rs
// Deferred work (settle scrolls, the delayed limit notice)

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Runs a task after a delay on the current event loop.
///
/// Implementations must not run the task inline: callers may still hold
/// widget state when they schedule.
pub trait Scheduler {
    fn defer(&self, delay: Duration, task: LocalBoxFuture<'static, ()>);
}

/// Scheduler for a tokio `LocalSet` (terminal client)
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(feature = "tokio")]
impl Scheduler for TokioScheduler {
    fn defer(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}
