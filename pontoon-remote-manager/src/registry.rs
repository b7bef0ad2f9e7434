use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Type-erased export value as stored in the registry.
pub type SharedExport = Arc<dyn Any + Send + Sync>;

/// Failure taxonomy for remote resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Reference did not match `<scope>/<Export>`.
    #[error("malformed remote reference `{0}` (expected `scope/Export`)")]
    InvalidReference(String),
    /// No installed scope exposes the named export.
    #[error("remote `{0}` is not exposed by any installed scope")]
    NotFound(String),
    /// The export exists but is not the type the consumer asked for.
    #[error("remote `{0}` does not satisfy the requested contract")]
    ContractMismatch(String),
}

/// One remote application's exposure table: a scope name plus the exports it
/// publishes under it.
pub struct RemoteScope {
    name: String,
    exports: HashMap<String, SharedExport>,
}

impl RemoteScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exports: HashMap::new(),
        }
    }

    /// Publish `value` under `export`. Last write wins within a scope.
    pub fn expose<T: Any + Send + Sync>(mut self, export: impl Into<String>, value: T) -> Self {
        self.exports.insert(export.into(), Arc::new(value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// All scopes a host has installed, keyed by scope name. Built once at
/// startup and shared immutably with the resolve manager.
#[derive(Default)]
pub struct RemoteRegistry {
    scopes: HashMap<String, RemoteScope>,
}

impl RemoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a remote application's scope. Reinstalling a name replaces
    /// the earlier table.
    pub fn install(mut self, scope: RemoteScope) -> Self {
        self.scopes.insert(scope.name.clone(), scope);
        self
    }

    /// Resolve a `<scope>/<Export>` reference to its type-erased export.
    pub fn lookup(&self, reference: &str) -> Result<SharedExport, LoadError> {
        let (scope, export) = reference
            .split_once('/')
            .filter(|(scope, export)| !scope.is_empty() && !export.is_empty())
            .ok_or_else(|| LoadError::InvalidReference(reference.to_string()))?;
        self.scopes
            .get(scope)
            .and_then(|installed| installed.exports.get(export))
            .cloned()
            .ok_or_else(|| LoadError::NotFound(reference.to_string()))
    }
}
