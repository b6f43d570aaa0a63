//! Wrappers - callable を包んで振る舞いを足す
//!
//! # 学習ポイント
//! - 高階関数を trait で表す: `wrap(inner) -> Callable`
//! - 包んだ側も `Callable` なので入れ子で合成できる
//! - `name()` は内側に委譲する（包んでも名前は変わらない）

pub mod debug;
pub mod register;
pub mod repeat;
pub mod slow_down;
pub mod timer;

use std::sync::Arc;

use crate::callable::Callable;

pub use self::debug::DebugCalls;
pub use self::register::Register;
pub use self::repeat::Repeat;
pub use self::slow_down::SlowDown;
pub use self::timer::Timer;

/// Wrapper turns a callable into another callable with extra behavior.
pub trait Wrapper: Send + Sync {
    fn wrap(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::Args;
    use crate::callable::testing::add;
    use crate::ports::{ManualClock, MemorySink};
    use rstest::rstest;
    use serde_json::json;
    use std::time::Duration;

    fn wrappers() -> Vec<(&'static str, Box<dyn Wrapper>)> {
        let sink = Arc::new(MemorySink::new());
        let timer: Box<dyn Wrapper> =
            Box::new(Timer::with_clock(sink.clone(), Arc::new(ManualClock::new())));
        let debug: Box<dyn Wrapper> = Box::new(DebugCalls::new(sink));
        let slow_down: Box<dyn Wrapper> = Box::new(SlowDown::with_delay(Duration::from_millis(5)));
        let repeat: Box<dyn Wrapper> = Box::new(Repeat::new(1).unwrap());
        vec![
            ("timer", timer),
            ("debug", debug),
            ("slow_down", slow_down),
            ("repeat", repeat),
        ]
    }

    #[rstest]
    #[case(1, 2)]
    #[case(-40, 40)]
    #[case(0, 0)]
    #[tokio::test]
    async fn wrapped_result_equals_direct_result(#[case] a: i64, #[case] b: i64) {
        let args = Args::from_positional([a, b]);
        let direct = add().call(&args).await.unwrap();
        assert_eq!(direct, json!(a + b));

        for (label, wrapper) in wrappers() {
            let wrapped = wrapper.wrap(add());
            assert_eq!(wrapped.name(), "add", "{label} must keep the name");
            assert_eq!(wrapped.call(&args).await.unwrap(), direct, "{label}");
        }
    }
}
