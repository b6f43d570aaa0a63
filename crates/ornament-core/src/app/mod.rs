//! App - wrapper の組み立て
//!
//! # 主要コンポーネント
//! - **DecoratorConfig**: JSON で書ける wrapper スタックの設定
//! - **StackBuilder**: wrapper を順番に積み、callable に適用する

pub mod builder;
pub mod config;

pub use self::builder::StackBuilder;
pub use self::config::{DecoratorConfig, LayerConfig};
