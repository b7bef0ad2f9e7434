use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Effect managers declare the self-message type they consume.
pub trait EffectManager {
    type SelfMsg;
}

/// Runtime-level manager for applications whose reconciler needs no
/// self-messages.
pub struct CoreManager;

impl EffectManager for CoreManager {
    type SelfMsg = ();
}

/// Sender restricted to one manager's self-messages, so a reconciler can talk
/// to its manager but cannot inject application events.
pub struct SendToManager<Manager: EffectManager, Wire> {
    tx: UnboundedSender<Wire>,
    map: Arc<dyn Fn(Manager::SelfMsg) -> Wire + Send + Sync>,
    _manager: PhantomData<Manager>,
}

impl<Manager: EffectManager, Wire: Send + 'static> SendToManager<Manager, Wire> {
    /// Wrap a wire sender with the mapper that lifts the manager's
    /// self-message into the shared wire type.
    pub fn new(
        tx: UnboundedSender<Wire>,
        map: impl Fn(Manager::SelfMsg) -> Wire + Send + Sync + 'static,
    ) -> Self {
        Self {
            tx,
            map: Arc::new(map),
            _manager: PhantomData,
        }
    }

    /// Send a self-message to the manager.
    pub fn send(&self, msg: Manager::SelfMsg) {
        let _ = self.tx.send((self.map)(msg));
    }
}

/// Reconciler for surfaces that draw from the frame alone and never talk
/// back to a manager.
pub fn no_op_reconciler<View>() -> impl FnMut(&View, &SendToManager<CoreManager, ()>) {
    |_frame: &View, _sender: &SendToManager<CoreManager, ()>| {}
}
