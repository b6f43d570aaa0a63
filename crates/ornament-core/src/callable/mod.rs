//! Callable - 名前付きで呼び出せる振る舞いの単位
//!
//! # 学習ポイント
//! - Object-safe な async trait (`dyn Callable`)
//! - クロージャを trait object に詰める型消去 (`FnCallable`)
//! - 引数・戻り値は `serde_json::Value` に統一

pub mod args;

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CallError;

pub use self::args::{Args, repr};

/// A named unit of behavior taking [`Args`] and returning a value.
///
/// Wrappers implement this too, delegating `name()` to the callable they
/// wrap, so a wrapped callable is indistinguishable by name from the original.
#[async_trait]
pub trait Callable: Send + Sync {
    fn name(&self) -> &str;

    async fn call(&self, args: &Args) -> Result<Value, CallError>;
}

pub type CallFuture = Pin<Box<dyn Future<Output = Result<Value, CallError>> + Send>>;

/// Closure adapter for [`Callable`].
///
/// # 使用例
/// ```ignore
/// let add = FnCallable::from_sync("add", |args| {
///     let (a, b): (i64, i64) = args.decode().map_err(|e| CallError::failed("add", e.to_string()))?;
///     Ok(json!(a + b))
/// });
/// ```
pub struct FnCallable {
    name: String,
    f: Box<dyn Fn(Args) -> CallFuture + Send + Sync>,
}

impl FnCallable {
    /// Wrap an async closure. The closure receives its own copy of the args.
    pub fn new<F, Fut>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, CallError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            f: Box::new(move |args| Box::pin(f(args))),
        }
    }

    /// Wrap a blocking closure.
    pub fn from_sync<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Args) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            f: Box::new(move |args| {
                let out = f(&args);
                Box::pin(async move { out })
            }),
        }
    }
}

#[async_trait]
impl Callable for FnCallable {
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        (self.f)(args.clone()).await
    }
}

impl std::fmt::Debug for FnCallable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCallable").field("name", &self.name).finish()
    }
}
