use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        services::{AuthUser, JwtKeys},
    },
    state::AppState,
};

const MSG_MISSING_FIELDS: &str = "Preencha todos os campos";
const MSG_INVALID_CREDENTIALS: &str = "E-mail ou senha inválidos";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

// Presence checks only; the store does no format validation of its own and
// email matching stays exact (case-sensitive, untrimmed).
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("registration with missing fields");
        return Err((StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS.into()));
    }

    let mut store = state.store.lock().await;
    let (ok, message) = match store.create_user(&payload.name, &payload.email, &payload.password) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "create_user failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };
    if !ok {
        warn!(email = %payload.email, "email already registered");
        return Err((StatusCode::CONFLICT, message));
    }

    let user = match store.find_by_email(&payload.email) {
        Some(u) => PublicUser::from(u),
        None => {
            error!(email = %payload.email, "created user not found");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "user store inconsistent".into(),
            ));
        }
    };
    drop(store);

    let keys = JwtKeys::from_ref(&state);
    let access_token = match keys.sign_access(&user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "jwt sign access failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };
    let refresh_token = match keys.sign_refresh(&user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "jwt sign refresh failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err((StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS.into()));
    }

    let mut store = state.store.lock().await;
    // Wrong email and wrong password come back identical on purpose.
    let user = match store.authenticate(&payload.email, &payload.password) {
        Ok(Some(u)) => PublicUser::from(&u),
        Ok(None) => {
            warn!(email = %payload.email, "login rejected");
            return Err((StatusCode::UNAUTHORIZED, MSG_INVALID_CREDENTIALS.into()));
        }
        Err(e) => {
            error!(error = %e, "authenticate failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };
    drop(store);

    let keys = JwtKeys::from_ref(&state);
    let access_token = match keys.sign_access(&user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "jwt sign access failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };
    let refresh_token = match keys.sign_refresh(&user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "jwt sign refresh failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| (StatusCode::UNAUTHORIZED, format!("{}", e)))?;

    let store = state.store.lock().await;
    let user = store
        .find_by_id(&claims.sub)
        .map(PublicUser::from)
        .ok_or((StatusCode::UNAUTHORIZED, "User not found".to_string()))?;
    drop(store);

    // Issue new pair
    let access_token = keys
        .sign_access(&user.id)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let refresh_token = keys
        .sign_refresh(&user.id)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user,
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let store = state.store.lock().await;
    match store.find_by_id(&user_id) {
        Some(user) => Ok(Json(PublicUser::from(user))),
        None => {
            warn!(user_id = %user_id, "token subject not in store");
            Err((StatusCode::UNAUTHORIZED, "User not found".into()))
        }
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use crate::auth::store::UserStore;
    use crate::config::{AppConfig, JwtConfig};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> AppState {
        let config = AppConfig {
            users_file: dir.path().join("users.json"),
            jwt: JwtConfig {
                secret: "test-secret".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
                refresh_ttl_minutes: 60,
            },
        };
        let store = UserStore::open(&config.users_file).expect("open store");
        AppState::from_parts(store, Arc::new(config))
    }

    #[tokio::test]
    async fn register_then_login_flow() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let registered = register(
            State(state.clone()),
            Json(RegisterRequest {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                password: "segredo123".into(),
            }),
        )
        .await
        .expect("register succeeds");
        assert_eq!(registered.0.user.email, "ana@x.com");
        assert!(!registered.0.access_token.is_empty());

        let logged_in = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ana@x.com".into(),
                password: "segredo123".into(),
            }),
        )
        .await
        .expect("login succeeds");
        assert!(logged_in.0.user.last_login_at.is_some());

        let err = login(
            State(state),
            Json(LoginRequest {
                email: "ana@x.com".into(),
                password: "errada".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
        assert_eq!(err.1, "E-mail ou senha inválidos");
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let body = || {
            Json(RegisterRequest {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                password: "x".into(),
            })
        };
        register(State(state.clone()), body())
            .await
            .expect("first registration");
        let err = register(State(state), body()).await.unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
        assert_eq!(err.1, "Email já cadastrado");
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let err = register(
            State(state.clone()),
            Json(RegisterRequest {
                name: "".into(),
                email: "ana@x.com".into(),
                password: "x".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);

        let err = login(
            State(state),
            Json(LoginRequest {
                email: "".into(),
                password: "x".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn refresh_and_me_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let registered = register(
            State(state.clone()),
            Json(RegisterRequest {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                password: "segredo123".into(),
            }),
        )
        .await
        .expect("register succeeds");

        let refreshed = refresh(
            State(state.clone()),
            Json(RefreshRequest {
                refresh_token: registered.0.refresh_token.clone(),
            }),
        )
        .await
        .expect("refresh succeeds");
        assert_eq!(refreshed.0.user.id, registered.0.user.id);

        // Access tokens are not accepted on the refresh endpoint.
        let err = refresh(
            State(state.clone()),
            Json(RefreshRequest {
                refresh_token: registered.0.access_token.clone(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);

        let me = get_me(
            State(state),
            AuthUser(registered.0.user.id.clone()),
        )
        .await
        .expect("me succeeds");
        assert_eq!(me.0.email, "ana@x.com");
    }
}
