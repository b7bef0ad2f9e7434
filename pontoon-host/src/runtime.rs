//! Hand-wired runtime glue for the host: the request enum joining runtime
//! requests with the remote manager, the command alias, and the lifecycle
//! entry point that assembles a runnable session.

use std::sync::Arc;
use std::time::Duration;

use pontoon_core::{
    tracing_observer, AppRequest, CoreCmd, CoreManager, CoreRequest, Emitter, Node, Runtime,
    SendToManager,
};
use pontoon_counter_remote::CounterView;
use pontoon_remote_manager::{resolve_as, RemoteManager, RemoteRegistry, RemoteRequest};

use crate::app::{self, Model, Msg};
use crate::config::HostConfig;

/// Everything the host's update loop can request.
#[derive(Clone, Debug)]
pub enum Request {
    Core(CoreRequest),
    Remote(RemoteRequest<Msg>),
}

impl AppRequest for Request {
    fn from_core(req: CoreRequest) -> Self {
        Request::Core(req)
    }

    fn as_core(&self) -> Option<&CoreRequest> {
        match self {
            Request::Core(req) => Some(req),
            _ => None,
        }
    }
}

pub type Cmd = CoreCmd<Request>;

/// Ask the remote manager for the counter component.
pub fn load_counter(remote: &str) -> Cmd {
    CoreCmd::single(Request::Remote(resolve_as::<CounterView<Msg>, _>(
        remote,
        |result| Msg::CounterLoaded(result.map(|view| *view)),
    )))
}

/// Route non-core requests to their managers. Owns the manager state for the
/// session.
fn dispatcher(manager: RemoteManager) -> impl FnMut(Request, &Emitter<Msg, ()>) {
    let mut state = RemoteManager::init();
    move |req, emitter| match req {
        Request::Remote(req) => {
            let current = std::mem::take(&mut state);
            state = manager.on_effects(emitter, current, vec![req]);
        }
        Request::Core(_) => {}
    }
}

/// Assemble a runnable host session from a configuration, the installed
/// remote registry, and a target surface.
pub fn build_runtime<Surface>(
    config: HostConfig,
    registry: Arc<RemoteRegistry>,
    surface: Surface,
) -> Runtime<
    impl FnOnce() -> (Model, Cmd),
    impl Fn(Model, Msg) -> (Model, Cmd),
    impl Fn(&Model) -> Node<Msg>,
    Surface,
    impl FnMut(Request, &Emitter<Msg, ()>),
    Model,
    Node<Msg>,
    Msg,
    Request,
>
where
    Surface: FnMut(&Node<Msg>, &SendToManager<CoreManager, ()>),
{
    let manager =
        RemoteManager::new(registry).with_fetch_delay(Duration::from_millis(config.fetch_delay_ms));
    Runtime::new(
        move || app::init(&config),
        app::update,
        app::view,
        surface,
        tracing_observer(),
        dispatcher(manager),
    )
}
