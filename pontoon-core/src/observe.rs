use std::fmt::Debug;
use std::sync::Arc;
use std::time::SystemTime;

/// One step the runtime took, reported to observers as it happens.
///
/// Carries the manager self-message type directly so observers can
/// pattern-match without stringification.
pub enum Observation<Msg, Req, SelfMsg> {
    /// An application event entered the update loop.
    Event { ts: SystemTime, data: Msg },
    /// An effect request left the update loop.
    Effect { ts: SystemTime, data: Req },
    /// A manager consumed one of its own self-messages.
    ManagerMsg {
        ts: SystemTime,
        manager: &'static str,
        data: SelfMsg,
    },
}

/// Observer function type.
pub type ObserverFn<Msg, Req, SelfMsg> =
    Arc<dyn Fn(&Observation<Msg, Req, SelfMsg>) + Send + Sync>;

/// Observer that drops everything.
pub fn no_op_observer<Msg, Req, SelfMsg>() -> ObserverFn<Msg, Req, SelfMsg>
where
    Msg: 'static,
    Req: 'static,
    SelfMsg: 'static,
{
    Arc::new(|_observation: &Observation<Msg, Req, SelfMsg>| {})
}

/// Observer that logs through the `tracing` crate.
pub fn tracing_observer<Msg, Req, SelfMsg>() -> ObserverFn<Msg, Req, SelfMsg>
where
    Msg: Debug + 'static,
    Req: Debug + 'static,
    SelfMsg: Debug + 'static,
{
    Arc::new(
        move |observation: &Observation<Msg, Req, SelfMsg>| match observation {
            Observation::Event { data, .. } => {
                tracing::info!(target: "pontoon-core::Msg", "Msg({:?})", data);
            }
            Observation::Effect { data, .. } => {
                tracing::debug!(target: "pontoon-core::Cmd", "Cmd({:?})", data);
            }
            Observation::ManagerMsg { manager, data, .. } => {
                tracing::debug!(target: "pontoon-core::SelfMsg", "SelfMsg({}, {:?})", manager, data);
            }
        },
    )
}

/// Observer that forwards only the selected observation kinds.
pub fn filter_observer<Msg, Req, SelfMsg>(
    wrapped: ObserverFn<Msg, Req, SelfMsg>,
    include_events: bool,
    include_manager_msgs: bool,
    include_effects: bool,
) -> ObserverFn<Msg, Req, SelfMsg>
where
    Msg: 'static,
    Req: 'static,
    SelfMsg: 'static,
{
    Arc::new(
        move |observation: &Observation<Msg, Req, SelfMsg>| {
            let pass = match observation {
                Observation::Event { .. } => include_events,
                Observation::ManagerMsg { .. } => include_manager_msgs,
                Observation::Effect { .. } => include_effects,
            };
            if pass {
                wrapped(observation);
            }
        },
    )
}

/// Observer that fans out to several observers.
pub fn tee_observer<Msg, Req, SelfMsg>(
    observers: Vec<ObserverFn<Msg, Req, SelfMsg>>,
) -> ObserverFn<Msg, Req, SelfMsg>
where
    Msg: 'static,
    Req: 'static,
    SelfMsg: 'static,
{
    Arc::new(
        move |observation: &Observation<Msg, Req, SelfMsg>| {
            for observer in &observers {
                observer(observation);
            }
        },
    )
}
