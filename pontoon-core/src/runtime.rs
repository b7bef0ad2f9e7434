use std::marker::PhantomData;
use std::time::SystemTime;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::cmd::CoreCmd;
use crate::emitter::Emitter;
use crate::manager::{CoreManager, SendToManager};
use crate::observe::{Observation, ObserverFn};
use crate::request::{AppRequest, CoreRequest};

/// The application event loop.
///
/// Owns the channels between the application, its effect managers, and the
/// outside world. `run` renders the initial frame, then alternates between
/// dispatching effect requests and folding application events through
/// `update`, re-rendering after every event.
pub struct Runtime<Init, Update, ViewFn, Recon, Dispatch, Model, View, Msg, Req> {
    init: Option<Init>,
    update: Update,
    view: ViewFn,
    reconciler: Recon,
    dispatch: Dispatch,
    observer: ObserverFn<Msg, Req, ()>,
    emitter: Emitter<Msg, ()>,
    event_rx: UnboundedReceiver<Msg>,
    self_tx: UnboundedSender<()>,
    // Kept alive so manager self-senders stay connected.
    #[allow(dead_code)]
    self_rx: UnboundedReceiver<()>,
    req_tx: UnboundedSender<Req>,
    req_rx: UnboundedReceiver<Req>,
    _model: PhantomData<Model>,
    _view: PhantomData<View>,
}

impl<Init, Update, ViewFn, Recon, Dispatch, Model, View, Msg, Req>
    Runtime<Init, Update, ViewFn, Recon, Dispatch, Model, View, Msg, Req>
where
    Init: FnOnce() -> (Model, CoreCmd<Req>),
    Update: Fn(Model, Msg) -> (Model, CoreCmd<Req>),
    ViewFn: Fn(&Model) -> View,
    Recon: FnMut(&View, &SendToManager<CoreManager, ()>),
    Dispatch: FnMut(Req, &Emitter<Msg, ()>),
    Msg: Clone + Send + 'static,
    Req: AppRequest + Clone + Send + 'static,
{
    pub fn new(
        init: Init,
        update: Update,
        view: ViewFn,
        reconciler: Recon,
        observer: ObserverFn<Msg, Req, ()>,
        dispatch: Dispatch,
    ) -> Self {
        let (event_tx, event_rx) = unbounded_channel();
        let (self_tx, self_rx) = unbounded_channel();
        let (req_tx, req_rx) = unbounded_channel();
        let emitter = Emitter::new(event_tx, self_tx.clone());

        Self {
            init: Some(init),
            update,
            view,
            reconciler,
            dispatch,
            observer,
            emitter,
            event_rx,
            self_tx,
            self_rx,
            req_tx,
            req_rx,
            _model: PhantomData,
            _view: PhantomData,
        }
    }

    /// Handle for injecting events and requesting shutdown from outside the
    /// loop. May be cloned freely and outlives `run`.
    pub fn handle(&self) -> RuntimeHandle<Msg, Req> {
        RuntimeHandle {
            event_tx: self.emitter.event_sender(),
            req_tx: self.req_tx.clone(),
        }
    }

    fn enqueue(req_tx: &UnboundedSender<Req>, cmd: CoreCmd<Req>) {
        for req in cmd.into_inner() {
            let _ = req_tx.send(req);
        }
    }

    pub async fn run(mut self) {
        let (mut model, init_cmd) = self
            .init
            .take()
            .expect("Runtime::run called more than once")();
        Self::enqueue(&self.req_tx, init_cmd);

        let observer = self.observer.clone();
        let sender = SendToManager::<CoreManager, ()>::new(self.self_tx.clone(), |msg| msg);
        let mut frame = (self.view)(&model);
        (self.reconciler)(&frame, &sender);

        loop {
            tokio::select! {
                Some(req) = self.req_rx.recv() => {
                    observer(&Observation::Effect {
                        ts: SystemTime::now(),
                        data: req.clone(),
                    });
                    if let Some(CoreRequest::Shutdown) = req.as_core() {
                        break;
                    }
                    (self.dispatch)(req, &self.emitter);
                }
                Some(event) = self.event_rx.recv() => {
                    observer(&Observation::Event {
                        ts: SystemTime::now(),
                        data: event.clone(),
                    });
                    let (next, cmd) = (self.update)(model, event);
                    model = next;
                    Self::enqueue(&self.req_tx, cmd);
                    frame = (self.view)(&model);
                    (self.reconciler)(&frame, &sender);
                }
            }
        }
    }
}

/// Clonable handle for feeding a running loop from outside: user-triggered
/// events come in through `send`, session teardown through `shutdown`.
pub struct RuntimeHandle<Msg, Req> {
    event_tx: UnboundedSender<Msg>,
    req_tx: UnboundedSender<Req>,
}

impl<Msg, Req> Clone for RuntimeHandle<Msg, Req> {
    fn clone(&self) -> Self {
        Self {
            event_tx: self.event_tx.clone(),
            req_tx: self.req_tx.clone(),
        }
    }
}

impl<Msg: Send + 'static, Req: AppRequest + Send + 'static> RuntimeHandle<Msg, Req> {
    /// Inject an application event, as a user activation would.
    pub fn send(&self, event: Msg) {
        let _ = self.event_tx.send(event);
    }

    /// Ask the loop to stop after the requests already queued drain.
    pub fn shutdown(&self) {
        let _ = self.req_tx.send(Req::from_core(crate::request::shutdown()));
    }
}
