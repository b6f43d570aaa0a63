//! PluginRegistry - 名前から callable を引くためのレジストリ
//!
//! # 学習ポイント
//! - グローバル変数ではなく、明示的なオブジェクトを `Arc` で共有する
//! - `RwLock` で並行登録を保護（await を跨いでロックを保持しない）
//! - 同名の再登録は上書き（last wins）

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::Rng;
use rand::seq::IteratorRandom;
use serde_json::Value;

use crate::callable::{Args, Callable};
use crate::error::{CallError, RegistryError};

/// Name -> callable mapping used for dynamic lookup.
///
/// # 使用例
/// ```ignore
/// let registry = Arc::new(PluginRegistry::new());
/// let say_hello = registry.register(Arc::new(FnCallable::from_sync("say_hello", hello)));
///
/// let plugin = registry.lookup("say_hello")?;
/// ```
#[derive(Default)]
pub struct PluginRegistry {
    plugins: RwLock<HashMap<String, Arc<dyn Callable>>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callable under its own name and return it unchanged.
    ///
    /// An existing entry with the same name is replaced.
    pub fn register(&self, callable: Arc<dyn Callable>) -> Arc<dyn Callable> {
        let name = callable.name().to_string();
        let previous = self
            .plugins
            .write()
            .insert(name.clone(), Arc::clone(&callable));
        if previous.is_some() {
            tracing::debug!(plugin = %name, "replaced previously registered plugin");
        }
        tracing::info!(plugin = %name, "registered plugin");
        callable
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Callable>> {
        self.plugins.read().get(name).cloned()
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Callable>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }

    /// Pick any registered plugin at random.
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<dyn Callable>> {
        self.plugins.read().values().choose(rng).cloned()
    }

    /// Look up `name` and invoke it.
    pub async fn call(&self, name: &str, args: &Args) -> Result<Value, CallError> {
        // clone out of the lock before awaiting
        let plugin = self
            .get(name)
            .ok_or_else(|| CallError::NotRegistered(name.to_string()))?;
        plugin.call(args).await
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}
