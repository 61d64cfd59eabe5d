use crate::{
    auth::{
        generate_token, LoginRequest, RegisterRequest, LOGIN_TOKEN_BYTES,
        MISSING_CREDENTIALS_MESSAGE,
    },
    error::AppError,
    models::{Envelope, LoginToken, RegisteredUser},
    store::UserStore,
};
use actix_web::{http::StatusCode, post, web, Responder};
use log::info;
use validator::Validate;

fn missing_credentials() -> AppError {
    AppError::BadRequest(MISSING_CREDENTIALS_MESSAGE.into())
}

/// Register a new user
///
/// Checks, in order: email and password present (400), email not taken (409),
/// password confirmation matches (400). Returns the new user without its password.
#[post("/register")]
pub async fn register(
    store: web::Data<UserStore>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate().map_err(|_| missing_credentials())?;

    let user = store.register(register_data.into_inner())?;

    Ok(Envelope::respond(
        StatusCode::CREATED,
        "User successfully created",
        RegisteredUser { user },
    ))
}

/// Login user
///
/// Issues a random 32-character hex token. The token is not remembered by the
/// server and no route requires it.
#[post("/login")]
pub async fn login(
    store: web::Data<UserStore>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate().map_err(|_| missing_credentials())?;

    store.authenticate(&login_data.email, &login_data.password)?;
    let token = generate_token(LOGIN_TOKEN_BYTES)?;
    info!("Issued login token");

    Ok(Envelope::respond(
        StatusCode::OK,
        "Login Succeed",
        LoginToken { token },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use serde_json::json;

    #[actix_rt::test]
    async fn test_register_validation() {
        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(UserStore::empty()))
                .service(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "name": "test",
                "email": "",
                "password": "password123",
                "confirmPassword": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "name": "test",
                "email": "test@example.com",
                "password": "password123",
                "confirmPassword": "password124"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Password does not match");
    }

    #[actix_rt::test]
    async fn test_login_validation() {
        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(UserStore::empty()))
                .service(login),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "test@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "code": 400, "message": MISSING_CREDENTIALS_MESSAGE }));
    }
}
