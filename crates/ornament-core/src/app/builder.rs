//! StackBuilder - wrapper を積んで callable に適用する
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）: repeat 0 回は build 前にエラー
//! - 先に積んだ layer が一番外側（デコレータを上から読む順と同じ）

use std::sync::Arc;
use std::time::Duration;

use crate::app::config::{DecoratorConfig, LayerConfig};
use crate::callable::Callable;
use crate::error::ConfigError;
use crate::ports::{Clock, ReportSink, SystemClock};
use crate::registry::PluginRegistry;
use crate::wrappers::{DebugCalls, Register, Repeat, SlowDown, Timer, Wrapper};

/// StackBuilder composes wrappers around callables.
///
/// # 使用例
/// ```ignore
/// let stack = StackBuilder::new(Arc::new(StdoutSink))
///     .register(registry.clone())
///     .timer()
///     .repeat(3)?;
///
/// let greet = stack.build(greet);
/// ```
pub struct StackBuilder {
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
    layers: Vec<Arc<dyn Wrapper>>,
}

impl StackBuilder {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            sink,
            clock: Arc::new(SystemClock::new()),
            layers: Vec::new(),
        }
    }

    /// Clock used by timer layers added after this call.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build a stack from config. Fails before any callable is wrapped.
    pub fn from_config(
        config: &DecoratorConfig,
        sink: Arc<dyn ReportSink>,
        registry: Arc<PluginRegistry>,
    ) -> Result<Self, ConfigError> {
        config
            .layers
            .iter()
            .try_fold(Self::new(sink), |builder, layer| match layer {
                LayerConfig::Timer => Ok(builder.timer()),
                LayerConfig::Debug => Ok(builder.debug()),
                LayerConfig::SlowDown { millis } => {
                    Ok(builder.slow_down_for(Duration::from_millis(*millis)))
                }
                LayerConfig::Repeat { times } => builder.repeat(*times),
                LayerConfig::Register => Ok(builder.register(Arc::clone(&registry))),
            })
    }

    pub fn layer(mut self, wrapper: Arc<dyn Wrapper>) -> Self {
        self.layers.push(wrapper);
        self
    }

    pub fn timer(self) -> Self {
        let timer = Timer::with_clock(Arc::clone(&self.sink), Arc::clone(&self.clock));
        self.layer(Arc::new(timer))
    }

    pub fn debug(self) -> Self {
        let debug = DebugCalls::new(Arc::clone(&self.sink));
        self.layer(Arc::new(debug))
    }

    pub fn slow_down(self) -> Self {
        self.layer(Arc::new(SlowDown::new()))
    }

    pub fn slow_down_for(self, delay: Duration) -> Self {
        self.layer(Arc::new(SlowDown::with_delay(delay)))
    }

    pub fn repeat(self, times: u32) -> Result<Self, ConfigError> {
        let repeat = Repeat::new(times)?;
        Ok(self.layer(Arc::new(repeat)))
    }

    pub fn register(self, registry: Arc<PluginRegistry>) -> Self {
        self.layer(Arc::new(Register::new(registry)))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Apply every layer to `inner`, first layer outermost.
    pub fn build(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable> {
        self.layers
            .iter()
            .rev()
            .fold(inner, |callable, wrapper| wrapper.wrap(callable))
    }
}
