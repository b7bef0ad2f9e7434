use std::sync::Arc;
use std::time::Duration;

use pontoon_core::EmitterChannels;
use pontoon_remote_manager::{
    resolve, resolve_as, LoadError, RemoteManager, RemoteRegistry, RemoteScope, RemoteSlot,
};
use tokio::runtime::Builder;

#[derive(Clone, Debug, PartialEq)]
enum Msg {
    Got(Result<String, LoadError>),
    GotNumber(Result<i64, LoadError>),
    Raw(Result<(), LoadError>),
}

fn registry() -> Arc<RemoteRegistry> {
    Arc::new(RemoteRegistry::new().install(
        RemoteScope::new("widgets").expose("Greeting", "hello from the remote".to_string()),
    ))
}

#[test]
fn resolves_typed_export_to_app_event() {
    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    rt.block_on(async {
        let EmitterChannels {
            emitter,
            mut event_rx,
            ..
        } = EmitterChannels::<Msg, ()>::new();
        let manager = RemoteManager::new(registry());

        let state = manager.on_effects(
            &emitter,
            RemoteManager::init(),
            vec![resolve_as::<String, _>("widgets/Greeting", |result| {
                Msg::Got(result.map(|s| (*s).clone()))
            })],
        );

        let delivered = event_rx.recv().await.expect("resolution should deliver");
        assert_eq!(
            delivered,
            Msg::Got(Ok("hello from the remote".to_string()))
        );
        drop(state);
    });
}

#[test]
fn unknown_reference_resolves_to_not_found() {
    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    rt.block_on(async {
        let EmitterChannels {
            emitter,
            mut event_rx,
            ..
        } = EmitterChannels::<Msg, ()>::new();
        let manager = RemoteManager::new(registry());

        let state = manager.on_effects(
            &emitter,
            RemoteManager::init(),
            vec![resolve_as::<String, _>("widgets/Missing", |result| {
                Msg::Got(result.map(|s| (*s).clone()))
            })],
        );

        let delivered = event_rx.recv().await.expect("failure should deliver");
        assert_eq!(
            delivered,
            Msg::Got(Err(LoadError::NotFound("widgets/Missing".to_string())))
        );
        drop(state);
    });
}

#[test]
fn wrong_contract_resolves_to_mismatch() {
    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    rt.block_on(async {
        let EmitterChannels {
            emitter,
            mut event_rx,
            ..
        } = EmitterChannels::<Msg, ()>::new();
        let manager = RemoteManager::new(registry());

        let state = manager.on_effects(
            &emitter,
            RemoteManager::init(),
            vec![resolve_as::<i64, _>("widgets/Greeting", |result| {
                Msg::GotNumber(result.map(|n| *n))
            })],
        );

        let delivered = event_rx.recv().await.expect("mismatch should deliver");
        assert_eq!(
            delivered,
            Msg::GotNumber(Err(LoadError::ContractMismatch(
                "widgets/Greeting".to_string()
            )))
        );
        drop(state);
    });
}

#[test]
fn malformed_reference_is_rejected() {
    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    rt.block_on(async {
        let EmitterChannels {
            emitter,
            mut event_rx,
            ..
        } = EmitterChannels::<Msg, ()>::new();
        let manager = RemoteManager::new(registry());

        let state = manager.on_effects(
            &emitter,
            RemoteManager::init(),
            vec![resolve("no-slash", |result| Msg::Raw(result.map(|_| ())))],
        );

        let delivered = event_rx.recv().await.expect("rejection should deliver");
        assert_eq!(
            delivered,
            Msg::Raw(Err(LoadError::InvalidReference("no-slash".to_string())))
        );
        drop(state);
    });
}

#[test]
fn fetch_delay_defers_delivery() {
    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    rt.block_on(async {
        tokio::time::pause();
        let EmitterChannels {
            emitter,
            mut event_rx,
            ..
        } = EmitterChannels::<Msg, ()>::new();
        let manager =
            RemoteManager::new(registry()).with_fetch_delay(Duration::from_millis(200));

        let state = manager.on_effects(
            &emitter,
            RemoteManager::init(),
            vec![resolve_as::<String, _>("widgets/Greeting", |result| {
                Msg::Got(result.map(|s| (*s).clone()))
            })],
        );

        tokio::time::advance(Duration::from_millis(100)).await;
        assert!(
            event_rx.try_recv().is_err(),
            "nothing should arrive before the simulated fetch completes"
        );

        tokio::time::advance(Duration::from_millis(150)).await;
        let delivered = event_rx.recv().await.expect("delivery after the delay");
        assert_eq!(
            delivered,
            Msg::Got(Ok("hello from the remote".to_string()))
        );
        drop(state);
    });
}

#[test]
fn registry_lookup_is_scope_qualified() {
    let registry = RemoteRegistry::new()
        .install(RemoteScope::new("a").expose("X", 1i64))
        .install(RemoteScope::new("b").expose("X", 2i64));

    let export = registry.lookup("b/X").expect("exposed");
    assert_eq!(*export.downcast::<i64>().expect("i64 export"), 2);
    assert!(matches!(
        registry.lookup("c/X"),
        Err(LoadError::NotFound(_))
    ));
}

#[test]
fn requests_debug_without_their_callbacks() {
    let req = resolve("widgets/Greeting", |_result| ()).map(Some);
    let shown = format!("{req:?}");
    assert!(shown.contains("widgets/Greeting"));
    assert!(!shown.contains("returns"));
}

#[test]
fn slot_resolution_is_one_shot() {
    let slot: RemoteSlot<&str> = RemoteSlot::Pending;
    assert!(slot.is_pending());

    let slot = slot.resolve(Ok("first"));
    assert_eq!(slot.ready(), Some(&"first"));

    let slot = slot.resolve(Err(LoadError::NotFound("later".to_string())));
    assert_eq!(slot.ready(), Some(&"first"));
}

#[test]
fn failed_resolution_is_recorded() {
    let slot: RemoteSlot<&str> = RemoteSlot::Pending;
    let slot = slot.resolve(Err(LoadError::NotFound("widgets/Gone".to_string())));

    assert_eq!(
        slot,
        RemoteSlot::Failed(LoadError::NotFound("widgets/Gone".to_string()))
    );
    assert!(!slot.is_pending());
}
