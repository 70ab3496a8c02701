use std::mem;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use async_std::task;
use clap::Parser;
use futures_util::future::try_join_all;
use log::info;
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use scopehub_actix::access::access::{access_service, maintenance_loop, shutdown_nodes};
use scopehub_actix::api::api::api_service;
use scopehub_actix::common::common::{setup_logging, tcp_check_host_and_port_used};
use scopehub_actix::config::structs::configuration::Configuration;
use scopehub_actix::hub::structs::scope_hub::ScopeHub;
use scopehub_actix::ssl::ssl::cert_gen;
use scopehub_actix::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        cert_gen(&args.selfsigned_domain, &args.selfsigned_keyfile, &args.selfsigned_certfile);
    }

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let hub = Arc::new(ScopeHub::new(config.clone(), args.create_database).await);
            hub.boot().await;

            let tokio_core = Builder::new_multi_thread().thread_name("core").worker_threads(9).enable_all().build()?;
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio_core.spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut api_futures = Vec::new();
            let mut apis_futures = Vec::new();

            for api_server_object in &config.api_server {
                if api_server_object.enabled {
                    tcp_check_host_and_port_used(api_server_object.bind_address.clone());
                    let address: SocketAddr = api_server_object.bind_address.parse().unwrap();

                    let (handle, future) = api_service(
                        address,
                        hub.clone(),
                        api_server_object.clone()
                    ).await;

                    if api_server_object.ssl {
                        apis_futures.push((handle, future));
                    } else {
                        api_futures.push((handle, future));
                    }
                }
            }

            if !api_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = api_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }
            if !apis_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = apis_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }

            if config.access_server.enabled {
                tcp_check_host_and_port_used(config.access_server.bind_address.clone());
                let address: SocketAddr = config.access_server.bind_address.parse().expect("Invalid access bind_address");

                let (handle, future) = access_service(address, hub.clone()).await;
                tokio_core.spawn(async move {
                    let _ = future.await;
                    drop(handle);
                });
            }

            let maintenance_hub = hub.clone();
            let maintenance_shutdown = tokio_shutdown.clone();
            tokio_core.spawn(async move {
                info!("[BOOT] Starting thread for maintenance sweeps...");
                maintenance_loop(maintenance_hub, maintenance_shutdown).await;
            });

            let stats_handler = tokio_shutdown.clone();
            let hub_spawn_stats = hub.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio_core.spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = hub_spawn_stats.get_stats();
                            info!(
                                "[STATS] Conn:{} Nodes:{} Sessions:{} Evicted:{} | Accounts:{} | Auth OK:{} Fail:{}",
                                stats.connections_active, stats.nodes_active, stats.sessions_active,
                                stats.sessions_evicted, stats.accounts, stats.auth_success, stats.auth_failed
                            );
                            info!(
                                "[STATS PACKETS] In:{} Out:{} Bad:{} TO:{} | Load:{} Save:{} Batch:{} LB:{} Top:{} HB:{}",
                                stats.packets_received, stats.packets_sent, stats.protocol_errors, stats.timeouts,
                                stats.load_requests, stats.save_requests, stats.batch_save_requests,
                                stats.leaderboard_requests, stats.top_position_requests, stats.heartbeats
                            );
                            info!(
                                "[STATS SYNC] Req:{} Resp:{} | Cache Hit:{} Miss:{} | Limited:{}",
                                stats.sync_requests_sent, stats.sync_responses_received,
                                stats.cache_hits, stats.cache_misses, stats.rate_limited
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    shutdown_nodes(&hub).await;
                    tokio_shutdown.handle().await;
                    task::sleep(Duration::from_secs(1)).await;

                    let _ = config.save_from_config("config.toml");
                    info!("Server shutting down completed");

                    mem::forget(tokio_core);
                    Ok(())
                }
            }
        })
}
