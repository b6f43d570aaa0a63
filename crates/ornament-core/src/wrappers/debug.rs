//! DebugCalls - 引数と戻り値を報告する

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::callable::{Args, Callable, repr};
use crate::error::CallError;
use crate::ports::{Report, ReportSink};

use super::Wrapper;

/// Reports `Calling <name>(<args>)` before and `'<name>' returned <value>`
/// after each call. On error only the first line is emitted.
pub struct DebugCalls {
    sink: Arc<dyn ReportSink>,
}

impl DebugCalls {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }
}

impl Wrapper for DebugCalls {
    fn wrap(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable> {
        Arc::new(Debugged {
            inner,
            sink: Arc::clone(&self.sink),
        })
    }
}

struct Debugged {
    inner: Arc<dyn Callable>,
    sink: Arc<dyn ReportSink>,
}

#[async_trait]
impl Callable for Debugged {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        let name = self.inner.name();
        self.sink.emit(&Report::Calling {
            name: name.to_string(),
            signature: args.signature(),
        });
        let value = self.inner.call(args).await?;
        self.sink.emit(&Report::Returned {
            name: name.to_string(),
            value: repr(&value),
        });
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::testing::{add, boom};
    use crate::ports::MemorySink;

    #[tokio::test]
    async fn reports_arguments_and_return_value() {
        let sink = Arc::new(MemorySink::new());
        let debugged = DebugCalls::new(sink.clone()).wrap(add());

        let out = debugged.call(&Args::from_positional([2, 3])).await.unwrap();
        assert_eq!(out, serde_json::json!(5));
        assert_eq!(sink.lines(), vec!["Calling add(2, 3)", "'add' returned 5"]);
    }

    #[tokio::test]
    async fn strings_and_named_arguments_use_repr() {
        let sink = Arc::new(MemorySink::new());
        let echo = Arc::new(crate::callable::FnCallable::from_sync("echo", |args| {
            Ok(Value::Array(args.positional().to_vec()))
        }));
        let debugged = DebugCalls::new(sink.clone()).wrap(echo);

        debugged
            .call(&Args::new().arg("Juan").kwarg("age", 114))
            .await
            .unwrap();
        assert_eq!(
            sink.lines(),
            vec![r#"Calling echo("Juan", age=114)"#, r#"'echo' returned ["Juan"]"#]
        );
    }

    #[tokio::test]
    async fn failing_call_only_reports_the_call() {
        let sink = Arc::new(MemorySink::new());
        let debugged = DebugCalls::new(sink.clone()).wrap(boom());

        assert!(debugged.call(&Args::new()).await.is_err());
        assert_eq!(sink.lines(), vec!["Calling boom()"]);
    }
}
