use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Channel plumbing handed to effect managers so their spawned tasks can emit
/// application events and manager self-messages. Payloads crossing a task
/// boundary must be `Send + 'static`.
pub struct Emitter<Msg, SelfMsg> {
    event_tx: UnboundedSender<Msg>,
    self_tx: UnboundedSender<SelfMsg>,
}

impl<Msg, SelfMsg> Emitter<Msg, SelfMsg> {
    pub fn new(event_tx: UnboundedSender<Msg>, self_tx: UnboundedSender<SelfMsg>) -> Self {
        Self { event_tx, self_tx }
    }

    /// Emit an event into the application loop. Send failures mean the loop
    /// already shut down and are ignored.
    pub fn emit(&self, event: Msg)
    where
        Msg: Send + 'static,
    {
        let _ = self.event_tx.send(event);
    }

    /// Send a self-message back to the emitting manager.
    pub fn emit_self(&self, msg: SelfMsg)
    where
        SelfMsg: Send + 'static,
    {
        let _ = self.self_tx.send(msg);
    }

    /// Clone the raw event sender, for handing to spawned tasks.
    pub fn event_sender(&self) -> UnboundedSender<Msg> {
        self.event_tx.clone()
    }

    /// Clone the raw self-message sender.
    pub fn self_sender(&self) -> UnboundedSender<SelfMsg> {
        self.self_tx.clone()
    }
}

impl<Msg, SelfMsg> Clone for Emitter<Msg, SelfMsg> {
    fn clone(&self) -> Self {
        Self {
            event_tx: self.event_tx.clone(),
            self_tx: self.self_tx.clone(),
        }
    }
}

/// An emitter plus the paired receivers owned by the runtime loop.
pub struct EmitterChannels<Msg, SelfMsg> {
    pub emitter: Emitter<Msg, SelfMsg>,
    pub event_rx: UnboundedReceiver<Msg>,
    pub self_rx: UnboundedReceiver<SelfMsg>,
}

impl<Msg, SelfMsg> EmitterChannels<Msg, SelfMsg> {
    /// Allocate the event and self-message channels and wrap their senders.
    pub fn new() -> Self {
        let (event_tx, event_rx) = unbounded_channel();
        let (self_tx, self_rx) = unbounded_channel();
        Self {
            emitter: Emitter::new(event_tx, self_tx),
            event_rx,
            self_rx,
        }
    }
}

impl<Msg, SelfMsg> Default for EmitterChannels<Msg, SelfMsg> {
    fn default() -> Self {
        Self::new()
    }
}
