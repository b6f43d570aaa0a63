//! Register - callable をプラグインとして登録する透過 wrapper

use std::sync::Arc;

use crate::callable::Callable;
use crate::registry::PluginRegistry;

use super::Wrapper;

/// Inserts the callable into a [`PluginRegistry`] and hands back the very
/// same `Arc`, so callers see no change in behavior.
#[derive(Clone)]
pub struct Register {
    registry: Arc<PluginRegistry>,
}

impl Register {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }
}

impl Wrapper for Register {
    fn wrap(&self, inner: Arc<dyn Callable>) -> Arc<dyn Callable> {
        self.registry.register(inner)
    }
}
