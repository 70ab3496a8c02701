use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_parse_token, api_service_token};
use crate::api::structs::api_account::{ApiAccount, ApiAccountCreate, ApiAccountUpdate};
use crate::hub::structs::scope_hub::ScopeHub;
use crate::stats::enums::stats_event::StatsEvent;

pub async fn api_service_accounts_get(request: HttpRequest, data: Data<Arc<ScopeHub>>) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    let accounts: Vec<ApiAccount> = data.accounts.list_accounts().iter().map(ApiAccount::from).collect();
    HttpResponse::Ok().content_type(ContentType::json()).json(accounts)
}

pub async fn api_service_account_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ScopeHub>>) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    let login = path.into_inner();
    match data.accounts.get_account(&login) {
        Some(account) => HttpResponse::Ok().content_type(ContentType::json()).json(ApiAccount::from(&account)),
        None => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": "account not found"
        })),
    }
}

pub async fn api_service_account_post(
    request: HttpRequest,
    path: web::Path<String>,
    body: web::Json<ApiAccountCreate>,
    data: Data<Arc<ScopeHub>>,
) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    let login = path.into_inner();
    let body = body.into_inner();
    if body.password.is_empty() {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
            "status": "password must not be empty"
        }));
    }
    match data.accounts.create_account(&login, &body.password, body.scopes).await {
        Ok(account) => {
            data.update_stats(StatsEvent::Accounts, 1);
            HttpResponse::Ok().content_type(ContentType::json()).json(ApiAccount::from(&account))
        }
        Err(error) => HttpResponse::Conflict().content_type(ContentType::json()).json(json!({
            "status": error.to_string()
        })),
    }
}

pub async fn api_service_account_patch(
    request: HttpRequest,
    path: web::Path<String>,
    body: web::Json<ApiAccountUpdate>,
    data: Data<Arc<ScopeHub>>,
) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    let login = path.into_inner();
    let body = body.into_inner();
    match data.accounts.update_account(&login, body.password.as_deref(), body.scopes).await {
        Ok(account) => HttpResponse::Ok().content_type(ContentType::json()).json(ApiAccount::from(&account)),
        Err(error) => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": error.to_string()
        })),
    }
}

pub async fn api_service_account_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ScopeHub>>) -> HttpResponse
{
    if let Some(response) = api_service_token(api_parse_token(&request), data.config.clone()).await {
        return response;
    }
    let login = path.into_inner();
    match data.accounts.delete_account(&login).await {
        Ok(true) => {
            data.update_stats(StatsEvent::Accounts, -1);
            HttpResponse::Ok().content_type(ContentType::json()).json(json!({
                "status": "deleted"
            }))
        }
        Ok(false) => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": "account not found"
        })),
        Err(error) => HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
            "status": error.to_string()
        })),
    }
}
