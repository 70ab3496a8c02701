use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpServer};
use actix_web::web::Data;
use log::{debug, info, warn};
use parking_lot::RwLock;
use crate::access::enums::auth_result::AuthResult;
use crate::access::structs::access_connection::AccessConnection;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::structs::node::Node;
use crate::protocol::enums::close_code::CloseCode;
use crate::protocol::enums::packet::Packet;
use crate::protocol::structs::responder::Responder;
use crate::protocol::structs::talker::Talker;
use crate::security::security::{imitate_encryption_delay, validate_node_name, verify_password};
use crate::ssl::ssl::load_rustls_config;
use crate::stats::enums::stats_event::StatsEvent;

/// Decides how an authentication attempt ends. Pure against the hub state;
/// the connection actor applies the outcome.
pub async fn authenticate(
    hub: &Arc<ScopeHub>,
    talker: &Arc<Talker>,
    remote_addr: SocketAddr,
    login: &str,
    password: &str,
    node_name: &str,
    already_authenticated: bool,
) -> AuthResult {
    let started = Instant::now();
    let minimum = Duration::from_millis(hub.config.access_server.auth_delay_minimum);
    if already_authenticated {
        return AuthResult::AlreadyAuthenticated;
    }
    let account = hub.accounts.get_account(login);
    let verified = match &account {
        // The imitation delay makes a missing account cost the same as a
        // failed password check.
        None => {
            imitate_encryption_delay(started, minimum).await;
            false
        }
        Some(account) => {
            let verified = verify_password(password, &account.password);
            if !verified {
                imitate_encryption_delay(started, minimum).await;
            }
            verified
        }
    };
    if !verified {
        return AuthResult::WrongCredentials;
    }
    if !validate_node_name(node_name) {
        return AuthResult::InvalidNodeName;
    }
    let account = account.unwrap();
    let node = Arc::new(Node::new(node_name, login, account.scopes, talker.clone(), remote_addr));
    match hub.nodes.register(node.clone()) {
        Ok(()) => AuthResult::Success(node),
        Err(_) => AuthResult::NodeAlreadyExists,
    }
}

/// Full authentication flow for one connection: decide, apply, answer.
#[allow(clippy::too_many_arguments)]
pub async fn authenticate_connection(
    hub: Arc<ScopeHub>,
    talker: Arc<Talker>,
    slot: Arc<RwLock<Option<Arc<Node>>>>,
    remote_addr: SocketAddr,
    login: String,
    password: String,
    node_name: String,
    responder: Responder,
) {
    let already_authenticated = slot.read().is_some();
    let result = authenticate(&hub, &talker, remote_addr, &login, &password, &node_name, already_authenticated).await;
    match result {
        AuthResult::Success(node) => {
            *slot.write() = Some(node.clone());
            hub.update_stats(StatsEvent::AuthSuccess, 1);
            hub.update_stats(StatsEvent::NodesActive, 1);
            info!("[ACCESS] Node {} authenticated for account {} from {}", node.id, login, remote_addr);
            let heartbeat_interval_ms = (hub.config.access_server.ping_interval * 1000) as u32;
            let _ = responder.respond(Packet::Ready { heartbeat_interval_ms });
        }
        AuthResult::WrongCredentials => {
            hub.update_stats(StatsEvent::AuthFailed, 1);
            warn!("[ACCESS] Rejected credentials for account {} from {}", login, remote_addr);
            talker.close(CloseCode::WrongCredentials, "wrong credentials");
        }
        AuthResult::InvalidNodeName => {
            hub.update_stats(StatsEvent::AuthFailed, 1);
            talker.close(CloseCode::InvalidData, "invalid node name");
        }
        AuthResult::AlreadyAuthenticated => {
            talker.close(CloseCode::AlreadyAuthenticated, "already authenticated");
        }
        AuthResult::NodeAlreadyExists => {
            hub.update_stats(StatsEvent::AuthFailed, 1);
            warn!("[ACCESS] Node {} from {} is already connected", node_name, remote_addr);
            talker.close(CloseCode::NodeAlreadyExists, "node already connected");
        }
    }
}

/// Closes every node whose heartbeat went silent past the grace window and
/// releases its sessions. Called from the sweep task.
pub async fn liveness_sweep(hub: &Arc<ScopeHub>) -> usize {
    let deadline = hub.config.access_server.ping_interval + hub.config.access_server.ping_grace;
    let mut closed = 0;
    for node in hub.nodes.list() {
        if node.seconds_since_heartbeat() > deadline {
            warn!("[ACCESS] Node {} missed its heartbeat window, closing", node.id);
            hub.disconnect_node(&node, CloseCode::PingFailed, "heartbeat missed").await;
            closed += 1;
        }
    }
    closed
}

/// Broadcasts a shutdown close to every connected node.
pub async fn shutdown_nodes(hub: &Arc<ScopeHub>) {
    for node in hub.nodes.list() {
        hub.disconnect_node(&node, CloseCode::Shutdown, "server shutting down").await;
    }
}

pub async fn access_handler(
    req: actix_web::HttpRequest,
    stream: actix_web::web::Payload,
    data: actix_web::web::Data<Arc<ScopeHub>>,
) -> Result<actix_web::HttpResponse, actix_web::Error> {
    let remote_addr = req.peer_addr().unwrap_or_else(|| "0.0.0.0:0".parse().unwrap());
    let connection = AccessConnection::new(data.get_ref().clone(), remote_addr);
    actix_web_actors::ws::start(connection, &req, stream)
}

pub async fn access_service(
    addr: SocketAddr,
    hub: Arc<ScopeHub>,
) -> (ServerHandle, impl Future<Output = Result<(), std::io::Error>>) {
    let config = hub.config.access_server.clone();
    let keep_alive = config.keep_alive;
    let request_timeout = config.client_request_timeout;
    let disconnect_timeout = config.client_disconnect_timeout;
    let worker_threads = config.threads as usize;
    let max_connections = config.max_connections as usize;
    if config.ssl {
        info!("[ACCESS] Starting WSS server on {}", addr);
        let tls_config = load_rustls_config(&config.ssl_cert, &config.ssl_key);
        let server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(hub.clone()))
                .route("/access", web::get().to(access_handler))
        })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads)
        .max_connections(max_connections)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
        .unwrap()
        .disable_signals()
        .run();
        return (server.handle(), server);
    }
    info!("[ACCESS] Starting WS server on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(hub.clone()))
            .route("/access", web::get().to(access_handler))
    })
    .keep_alive(Duration::from_secs(keep_alive))
    .client_request_timeout(Duration::from_secs(request_timeout))
    .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
    .workers(worker_threads)
    .max_connections(max_connections)
    .bind((addr.ip(), addr.port()))
    .unwrap()
    .disable_signals()
    .run();
    (server.handle(), server)
}

/// Background sweeps owned by the access layer: liveness, limiter window,
/// scope caches and stale session slots.
pub async fn maintenance_loop(hub: Arc<ScopeHub>, shutdown: tokio_shutdown::Shutdown) {
    let ping_sweep = Duration::from_secs(hub.config.access_server.ping_sweep_interval);
    let throttle_sweep = Duration::from_secs(hub.config.access_server.throttle_sweep_interval);
    let cache_prune = Duration::from_secs(hub.config.access_server.cache_prune_interval);
    let mut ping_interval = tokio::time::interval(ping_sweep);
    let mut throttle_interval = tokio::time::interval(throttle_sweep);
    let mut cache_interval = tokio::time::interval(cache_prune);
    loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                let closed = liveness_sweep(&hub).await;
                if closed > 0 {
                    info!("[ACCESS] Liveness sweep closed {} nodes", closed);
                }
            }
            _ = throttle_interval.tick() => {
                hub.limiter.sweep_outdated();
            }
            _ = cache_interval.tick() => {
                let dropped = hub.scopes.prune_caches();
                let slots = hub.sessions.prune_slots();
                if dropped > 0 || slots > 0 {
                    debug!("[ACCESS] Pruned {} cache entries and {} session slots", dropped, slots);
                }
            }
            _ = shutdown.handle() => {
                info!("[BOOT] Shutting down maintenance thread...");
                return;
            }
        }
    }
}
