//! Timer - 実行時間を計測して報告する

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::callable::{Args, Callable};
use crate::error::CallError;
use crate::ports::{Clock, Report, ReportSink, SystemClock};

use super::Wrapper;

/// Reports `Finished '<name>' in <secs> secs` after each successful call.
///
/// A failing call propagates its error and reports nothing.
pub struct Timer {
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
}

impl Timer {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self::with_clock(sink, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(sink: Arc<dyn ReportSink>, clock: Arc<dyn Clock>) -> Self {
        Self { sink, clock }
    }
}

impl Wrapper for Timer {
    fn wrap(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable> {
        Arc::new(Timed {
            inner,
            sink: Arc::clone(&self.sink),
            clock: Arc::clone(&self.clock),
        })
    }
}

struct Timed {
    inner: Arc<dyn Callable>,
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl Callable for Timed {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        let start = self.clock.now();
        let value = self.inner.call(args).await?;
        let elapsed = self.clock.now().saturating_sub(start);
        self.sink.emit(&Report::Finished {
            name: self.inner.name().to_string(),
            elapsed,
        });
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::FnCallable;
    use crate::callable::testing::boom;
    use crate::ports::{ManualClock, MemorySink};
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn reports_elapsed_time_once_per_call() {
        let sink = Arc::new(MemorySink::new());
        let clock = Arc::new(ManualClock::new());

        let ticking = {
            let clock = Arc::clone(&clock);
            Arc::new(FnCallable::from_sync("waste_some_time", move |_| {
                clock.advance(Duration::from_millis(1500));
                Ok(json!(null))
            }))
        };
        let timed = Timer::with_clock(sink.clone(), clock).wrap(ticking);

        timed.call(&Args::new().arg(1)).await.unwrap();
        assert_eq!(sink.lines(), vec!["Finished 'waste_some_time' in 1.5000 secs"]);

        timed.call(&Args::new().arg(1)).await.unwrap();
        assert_eq!(sink.lines().len(), 2);
    }

    #[tokio::test]
    async fn failing_call_reports_nothing() {
        let sink = Arc::new(MemorySink::new());
        let timed = Timer::new(sink.clone()).wrap(boom());

        let err = timed.call(&Args::new()).await.unwrap_err();
        assert!(matches!(err, CallError::Failed { .. }));
        assert!(sink.lines().is_empty());
    }
}
