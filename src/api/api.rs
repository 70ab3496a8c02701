use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{http, web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_accounts::{
    api_service_account_delete, api_service_account_get, api_service_account_patch,
    api_service_account_post, api_service_accounts_get,
};
use crate::api::structs::query_token::QueryToken;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::ssl::ssl::load_rustls_config;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ScopeHub>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("api/accounts").route(web::get().to(api_service_accounts_get)));
        cfg.service(web::resource("api/account/{login}")
            .route(web::get().to(api_service_account_get))
            .route(web::post().to(api_service_account_post))
            .route(web::patch().to(api_service_account_patch))
            .route(web::delete().to(api_service_account_delete)));
    })
}

pub async fn api_service_token(token: Option<String>, config: Arc<Configuration>) -> Option<HttpResponse>
{
    match token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if !crate::security::security::constant_time_eq(&token_code, &config.api_key) {
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

pub fn api_parse_token(request: &HttpRequest) -> Option<String>
{
    web::Query::<QueryToken>::from_query(request.query_string())
        .map(|params| params.token.clone())
        .unwrap_or(None)
}

pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ScopeHub>>) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    let stats = data.get_stats();
    HttpResponse::Ok().content_type(ContentType::json()).json(stats)
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ScopeHub>>) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ScopeHub>,
    server_config: ApiServerConfig,
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    let keep_alive = server_config.keep_alive;
    let request_timeout = server_config.request_timeout;
    let disconnect_timeout = server_config.disconnect_timeout;
    let threads = server_config.threads as usize;
    let max_connections = server_config.max_connections as usize;
    if server_config.ssl {
        info!("[API] Starting server listener with SSL on {}", addr);
        let tls_config = load_rustls_config(&server_config.ssl_cert, &server_config.ssl_key);
        let server = HttpServer::new(move || {
            App::new()
                .wrap(api_service_cors())
                .configure(api_service_routes(data.clone()))
        })
            .keep_alive(Duration::from_secs(keep_alive))
            .client_request_timeout(Duration::from_secs(request_timeout))
            .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
            .workers(threads)
            .max_connections(max_connections)
            .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
            .unwrap()
            .disable_signals()
            .run();
        return (server.handle(), server);
    }

    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(threads)
        .max_connections(max_connections)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}
