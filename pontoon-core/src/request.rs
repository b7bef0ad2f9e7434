/// Runtime-level requests (no callbacks).
#[derive(Clone, Debug, serde::Serialize)]
pub enum CoreRequest {
    Shutdown,
}

/// Stop the event loop once the request drains through.
pub fn shutdown() -> CoreRequest {
    CoreRequest::Shutdown
}

/// Implemented by an application's request enum so the runtime can pick out
/// runtime-level requests without knowing about the rest of the enum.
pub trait AppRequest: Sized {
    /// Wrap a runtime-level request in the application's request type.
    fn from_core(req: CoreRequest) -> Self;

    /// The runtime-level request inside, if this is one.
    fn as_core(&self) -> Option<&CoreRequest>;
}
