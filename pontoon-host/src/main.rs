use std::sync::Arc;
use std::time::Duration;

use pontoon_core::RuntimeHandle;
use pontoon_host::app::Msg;
use pontoon_host::config::HostConfig;
use pontoon_host::runtime::{build_runtime, Request};
use pontoon_host::surface::stdout_surface;
use pontoon_remote_manager::RemoteRegistry;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = HostConfig::load_from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(target: "pontoon-host", remote = %config.counter_remote, "starting host session");

    // Installing the remote scope is the in-process stand-in for loading the
    // remote application's entry script.
    let scope = pontoon_counter_remote::scope::<Msg>();
    tracing::info!(target: "pontoon-host", scope = %scope.name(), "installing remote scope");
    let registry = Arc::new(RemoteRegistry::new().install(scope));

    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("tokio runtime");

    let runtime = build_runtime(config, registry, stdout_surface());
    let handle = runtime.handle();

    rt.block_on(async {
        tokio::join!(runtime.run(), drive(handle));
    });
}

/// Scripted session: let the remote resolve, poke both controls, leave.
async fn drive(handle: RuntimeHandle<Msg, Request>) {
    tokio::time::sleep(Duration::from_millis(400)).await;
    handle.send(Msg::Increment);
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.send(Msg::Increment);
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.send(Msg::Decrement);
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.shutdown();
}
