use crate::registry::LoadError;

/// Lifecycle of one remote export as seen by a consuming application: a
/// one-shot asynchronous load that is still outstanding, resolved, or failed.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteSlot<T> {
    /// Resolution requested, nothing arrived yet; consumers render fallback
    /// content in the export's place.
    Pending,
    /// The export arrived and satisfies the contract.
    Ready(T),
    /// Resolution failed; consumers surface the error instead of waiting on
    /// the fallback forever.
    Failed(LoadError),
}

impl<T> RemoteSlot<T> {
    /// Fold a resolution result into the slot. Resolution is one-shot: once
    /// the slot has left `Pending`, later results are ignored.
    pub fn resolve(self, result: Result<T, LoadError>) -> Self {
        match self {
            RemoteSlot::Pending => match result {
                Ok(value) => RemoteSlot::Ready(value),
                Err(err) => RemoteSlot::Failed(err),
            },
            settled => settled,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteSlot::Pending)
    }

    /// The resolved export, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteSlot::Ready(value) => Some(value),
            _ => None,
        }
    }
}
