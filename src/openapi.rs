use crate::auth::{AuthResponse, AuthUser, LoginRequest, PasswordResetRequest};
use crate::error::ApiErrorBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::login,
        crate::routes::forgot_password,
    ),
    components(schemas(
        LoginRequest, PasswordResetRequest, AuthUser, AuthResponse, ApiErrorBody
    )),
    tags(
        (name = "auth", description = "Sign-in and password reset"),
    )
)]
pub struct ApiDoc;
