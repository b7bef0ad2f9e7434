use std::sync::Arc;

use pontoon_core_macros::Request;

use crate::registry::{LoadError, SharedExport};

/// Remote resolution requests. The `returns` continuation converts the
/// resolution result into the application's message type.
#[derive(Clone, Request)]
pub enum RemoteRequest<Msg> {
    Resolve {
        remote: String,
        returns: Arc<dyn Fn(Result<SharedExport, LoadError>) -> Msg + Send + Sync>,
    },
}

impl<Msg: 'static> RemoteRequest<Msg> {
    /// Re-target the request at another message type.
    pub fn map<Msg2>(
        self,
        f: impl Fn(Msg) -> Msg2 + Send + Sync + 'static,
    ) -> RemoteRequest<Msg2> {
        match self {
            RemoteRequest::Resolve { remote, returns } => RemoteRequest::Resolve {
                remote,
                returns: Arc::new(move |result| f(returns(result))),
            },
        }
    }
}

/// Resolve `remote` to its raw type-erased export.
pub fn resolve<Msg>(
    remote: impl Into<String>,
    returns: impl Fn(Result<SharedExport, LoadError>) -> Msg + Send + Sync + 'static,
) -> RemoteRequest<Msg> {
    RemoteRequest::Resolve {
        remote: remote.into(),
        returns: Arc::new(returns),
    }
}

/// Resolve `remote` and downcast it to the contract type the consumer
/// expects; a type mismatch surfaces as [`LoadError::ContractMismatch`].
pub fn resolve_as<T, Msg>(
    remote: impl Into<String>,
    returns: impl Fn(Result<Arc<T>, LoadError>) -> Msg + Send + Sync + 'static,
) -> RemoteRequest<Msg>
where
    T: Send + Sync + 'static,
{
    let remote = remote.into();
    let reference = remote.clone();
    resolve(remote, move |result| {
        let typed = result.and_then(|export| {
            export
                .downcast::<T>()
                .map_err(|_| LoadError::ContractMismatch(reference.clone()))
        });
        returns(typed)
    })
}
