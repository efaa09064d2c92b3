use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::auth::{self, LoginRequest, PasswordResetRequest};
use crate::error::ApiError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .service(web::resource("/login").route(web::post().to(login)))
            .service(web::resource("/forgot-password").route(web::post().to(forgot_password))),
    );
}

// Unreadable bodies get the same `{success, message}` envelope as rejected ones.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid request body: {err}")).into()
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login accepted", body = crate::auth::AuthResponse),
        (status = 400, description = "Missing credentials", body = crate::error::ApiErrorBody)
    )
)]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, ApiError> {
    let response = auth::login(&payload)?;
    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    request_body = PasswordResetRequest,
    responses(
        (status = 200, description = "Reset link sent if the account exists", body = crate::auth::AuthResponse),
        (status = 400, description = "Missing email", body = crate::error::ApiErrorBody)
    )
)]
pub async fn forgot_password(
    payload: web::Json<PasswordResetRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = auth::request_password_reset(&payload)?;
    Ok(HttpResponse::Ok().json(response))
}
