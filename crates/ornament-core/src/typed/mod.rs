//! Typed - 型付き関数を `dyn Callable` として扱う
//!
//! # 二層構造
//! - **表層（Typed）**: `Fn(T) -> Future<Output = Result<R, CallError>>` - 型安全
//! - **内部（Dyn）**: `dyn Callable` - object-safe, `serde_json::Value` で受け渡し
//!
//! # 学習ポイント
//! - PhantomData による型パラメータの保持
//! - Type erasure パターン (TypedFn<T, R, F> → dyn Callable)

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::callable::{Args, Callable};
use crate::error::CallError;

/// A typed async function exposed as a [`Callable`].
///
/// Arguments are decoded with [`Args::decode`]; the return value is encoded
/// back to JSON.
///
/// # 使用例
/// ```ignore
/// #[derive(Deserialize)]
/// struct Greet { name: String }
///
/// let greet = TypedFn::new("greet", |g: Greet| async move {
///     Ok::<_, CallError>(format!("Hello {}", g.name))
/// });
/// ```
pub struct TypedFn<T, R, F> {
    name: String,
    f: F,
    _marker: PhantomData<fn(T) -> R>,
}

impl<T, R, F> TypedFn<T, R, F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R, F, Fut> Callable for TypedFn<T, R, F>
where
    T: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
    F: Fn(T) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, CallError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        let input: T = args.decode().map_err(|e| CallError::InvalidArguments {
            name: self.name.clone(),
            message: e.to_string(),
        })?;
        let output = (self.f)(input).await?;
        serde_json::to_value(output).map_err(|e| CallError::InvalidReturn {
            name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        name: String,
        age: Option<u32>,
    }

    fn make_greeting() -> Arc<dyn Callable> {
        Arc::new(TypedFn::<Greeting, String, _>::new("make_greeting", |g: Greeting| async move {
            Ok::<_, CallError>(match g.age {
                None => format!("Howdy {}!", g.name),
                Some(age) if age < 100 => format!("Whoa {}! {} already, you are growing up!", g.name, age),
                Some(age) => format!("Hey {}! You're {}? Impressive!", g.name, age),
            })
        }))
    }

    #[tokio::test]
    async fn decodes_named_arguments() {
        let f = make_greeting();
        let out = f
            .call(&Args::new().kwarg("name", "Benjamin"))
            .await
            .unwrap();
        assert_eq!(out, json!("Howdy Benjamin!"));
    }

    #[tokio::test]
    async fn decodes_positional_arguments() {
        let square = TypedFn::<(i64,), i64, _>::new("square", |(x,): (i64,)| async move {
            Ok::<_, CallError>(x * x)
        });
        let out = square.call(&Args::new().arg(7)).await.unwrap();
        assert_eq!(out, json!(49));
    }

    #[tokio::test]
    async fn unencodable_return_is_reported_with_name() {
        use std::collections::HashMap;

        // tuple keys have no JSON object key form
        let grid = TypedFn::<(i32,), HashMap<(i32, i32), i32>, _>::new(
            "grid",
            |(n,): (i32,)| async move {
                Ok::<_, CallError>((0..n).map(|i| ((i, i), i)).collect::<HashMap<_, _>>())
            },
        );
        let err = grid.call(&Args::new().arg(2)).await.unwrap_err();
        assert!(matches!(err, CallError::InvalidReturn { ref name, .. } if name == "grid"));
    }

    #[tokio::test]
    async fn bad_arguments_are_reported_with_name() {
        let f = make_greeting();
        let err = f.call(&Args::new().kwarg("age", 3)).await.unwrap_err();
        assert!(matches!(err, CallError::InvalidArguments { ref name, .. } if name == "make_greeting"));
    }
}
