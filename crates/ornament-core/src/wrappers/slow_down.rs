//! SlowDown - 呼び出し前に一定時間待つ
//!
//! `tokio::time::sleep` を使うので、止まるのは呼び出したタスクだけです。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::callable::{Args, Callable};
use crate::error::CallError;

use super::Wrapper;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
pub struct SlowDown {
    delay: Duration,
}

impl SlowDown {
    /// Sleep [`DEFAULT_DELAY`] (1 second) before every call.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SlowDown {
    fn default() -> Self {
        Self::new()
    }
}

impl Wrapper for SlowDown {
    fn wrap(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable> {
        Arc::new(Slowed {
            inner,
            delay: self.delay,
        })
    }
}

struct Slowed {
    inner: Arc<dyn Callable>,
    delay: Duration,
}

#[async_trait]
impl Callable for Slowed {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        tracing::debug!(name = self.inner.name(), delay = ?self.delay, "slowing down");
        tokio::time::sleep(self.delay).await;
        self.inner.call(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::testing::add;
    use serde_json::json;
    use std::time::Instant;

    #[tokio::test]
    async fn default_delay_is_one_second_of_wall_clock() {
        let slow_down = SlowDown::default();
        assert_eq!(slow_down.delay(), DEFAULT_DELAY);
        let slowed = slow_down.wrap(add());

        let started = Instant::now();
        let out = slowed.call(&Args::from_positional([1, 1])).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
        assert_eq!(out, json!(2));
    }

    #[tokio::test]
    async fn other_tasks_keep_running_while_sleeping() {
        let slow_down = SlowDown::with_delay(Duration::from_millis(200));
        assert_eq!(slow_down.delay(), Duration::from_millis(200));
        let slowed = slow_down.wrap(add());
        let slow_call = tokio::spawn(async move { slowed.call(&Args::from_positional([1, 2])).await });

        let quick = tokio::spawn(async { 42 });
        assert_eq!(quick.await.unwrap(), 42);
        assert!(!slow_call.is_finished());

        assert_eq!(slow_call.await.unwrap().unwrap(), json!(3));
    }
}
