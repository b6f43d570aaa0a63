//! Repeat - 同じ引数で N 回呼び出し、最後の結果を返す

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::callable::{Args, Callable};
use crate::error::{CallError, ConfigError};

use super::Wrapper;

#[derive(Debug, Clone, Copy)]
pub struct Repeat {
    times: NonZeroU32,
}

impl Repeat {
    /// A count of zero would leave no result to return, so it is rejected.
    pub fn new(times: u32) -> Result<Self, ConfigError> {
        NonZeroU32::new(times)
            .map(|times| Self { times })
            .ok_or(ConfigError::InvalidRepeatCount(times))
    }

    pub fn times(&self) -> u32 {
        self.times.get()
    }
}

impl Wrapper for Repeat {
    fn wrap(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable> {
        Arc::new(Repeated {
            inner,
            times: self.times,
        })
    }
}

struct Repeated {
    inner: Arc<dyn Callable>,
    times: NonZeroU32,
}

#[async_trait]
impl Callable for Repeated {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        // the first error stops the loop
        let mut value = self.inner.call(args).await?;
        for _ in 1..self.times.get() {
            value = self.inner.call(args).await?;
        }
        Ok(value)
    }
}
