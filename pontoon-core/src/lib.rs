mod cmd;
mod emitter;
mod manager;
mod node;
mod observe;
mod request;
mod runtime;

pub use cmd::CoreCmd;
pub use emitter::{Emitter, EmitterChannels};
pub use manager::{no_op_reconciler, CoreManager, EffectManager, SendToManager};
pub use node::Node;
pub use observe::{
    filter_observer, no_op_observer, tee_observer, tracing_observer, Observation, ObserverFn,
};
pub use request::{shutdown, AppRequest, CoreRequest};
pub use runtime::{Runtime, RuntimeHandle};
