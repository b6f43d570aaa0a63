//! ornament-core
//!
//! Call wrappers (timing, debug reports, delay, repeat, plugin registration)
//! and a small validated `Circle` value object.
//!
//! # モジュール構成
//! - **callable**: `Callable` trait, `Args`, クロージャ adapter
//! - **typed**: 型付き関数を `dyn Callable` に変換する `TypedFn`
//! - **wrappers**: `Wrapper` trait と Timer / DebugCalls / SlowDown / Repeat / Register
//! - **registry**: 名前 → callable の `PluginRegistry`
//! - **ports**: レポート出力先 (`ReportSink`) と時計 (`Clock`)
//! - **app**: 設定 (`DecoratorConfig`) と組み立て (`StackBuilder`)
//! - **domain**: `Circle`
//! - **error**: エラー型

pub mod app;
pub mod callable;
pub mod domain;
pub mod error;
pub mod ports;
pub mod registry;
pub mod typed;
pub mod wrappers;

pub use self::app::{DecoratorConfig, LayerConfig, StackBuilder};
pub use self::callable::{Args, Callable, FnCallable};
pub use self::domain::{Circle, CircleError};
pub use self::error::{CallError, ConfigError, RegistryError};
pub use self::registry::PluginRegistry;
pub use self::typed::TypedFn;
pub use self::wrappers::Wrapper;
