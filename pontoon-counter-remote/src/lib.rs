//! The remote application: defines the `Counter` component and exposes it
//! under `counter_remote/Counter` for other applications to resolve at
//! runtime.

pub mod counter;

use pontoon_remote_manager::RemoteScope;

/// Scope name this application publishes under.
pub const SCOPE: &str = "counter_remote";

/// The single export this application exposes.
pub const COUNTER_EXPORT: &str = "Counter";

/// Fully qualified reference consumers resolve.
pub const COUNTER_REF: &str = "counter_remote/Counter";

/// Contract of the exposed component: given the current count and the two
/// activation messages, produce the counter fragment.
pub type CounterView<Msg> = fn(i64, Msg, Msg) -> pontoon_core::Node<Msg>;

/// Build this application's exposure table, instantiated at the consuming
/// application's message type, ready to install into a registry.
pub fn scope<Msg: 'static>() -> RemoteScope {
    RemoteScope::new(SCOPE).expose(COUNTER_EXPORT, counter::view::<Msg> as CounterView<Msg>)
}
