use pontoon_core::Node;
use pontoon_counter_remote::CounterView;
use pontoon_remote_manager::{LoadError, RemoteSlot};

use crate::config::HostConfig;
use crate::runtime::{load_counter, Cmd};

/// Host-owned state: the counter value plus the slot the remote component
/// resolves into.
#[derive(Debug)]
pub struct Model {
    pub count: i64,
    pub counter: RemoteSlot<CounterView<Msg>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    Increment,
    Decrement,
    CounterLoaded(Result<CounterView<Msg>, LoadError>),
}

/// Mount: the count starts at zero and the remote resolution kicks off
/// immediately, so the first frames show the fallback.
pub fn init(config: &HostConfig) -> (Model, Cmd) {
    let model = Model {
        count: 0,
        counter: RemoteSlot::Pending,
    };
    (model, load_counter(&config.counter_remote))
}

pub fn update(mut model: Model, msg: Msg) -> (Model, Cmd) {
    match msg {
        Msg::Increment => {
            model.count += 1;
            (model, Cmd::none())
        }
        Msg::Decrement => {
            model.count -= 1;
            (model, Cmd::none())
        }
        Msg::CounterLoaded(result) => {
            model.counter = model.counter.resolve(result);
            (model, Cmd::none())
        }
    }
}

/// Page shell around the remote slot: fallback while pending, an error line
/// on failure, the resolved component otherwise.
pub fn view(model: &Model) -> Node<Msg> {
    let counter = match &model.counter {
        RemoteSlot::Pending => Node::text("Loading Counter..."),
        RemoteSlot::Failed(err) => Node::text(format!("Counter unavailable: {err}")),
        RemoteSlot::Ready(render) => render(model.count, Msg::Increment, Msg::Decrement),
    };
    Node::fragment(vec![Node::text("Host Application"), counter])
}
