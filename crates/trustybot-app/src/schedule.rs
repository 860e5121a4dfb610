// crates/trustybot-app/src/schedule.rs

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use trustybot_widget::Scheduler;
use wasm_bindgen_futures::spawn_local;

/// setTimeout-backed scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        let millis = timeout_millis(delay);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            task.await;
        });
    }
}

pub(crate) fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
