//! Unit tests for Auth crate

#[cfg(test)]
mod session_tests {
    use std::sync::Arc;

    use kernel::id::UserId;
    use platform::password::HashCost;

    use crate::application::{
        AuthConfig, LoginInput, LogoutInput, RefreshInput, RegisterInput, SessionManager,
    };
    use crate::domain::service::{IdentityClaims, TokenService};
    use crate::error::AuthError;
    use crate::infra::{Argon2PasswordHasher, InMemoryAuthRepository, JwtTokenService};

    struct Fixture {
        repo: Arc<InMemoryAuthRepository>,
        tokens: Arc<JwtTokenService>,
        sessions: SessionManager<InMemoryAuthRepository, JwtTokenService, Argon2PasswordHasher>,
    }

    fn fixture() -> Fixture {
        let config = AuthConfig::with_random_secrets().with_hash_cost(HashCost::minimal());
        let repo = Arc::new(InMemoryAuthRepository::new());
        let tokens = Arc::new(JwtTokenService::new(&config));
        let hasher = Arc::new(Argon2PasswordHasher::new(&config));
        Fixture {
            sessions: SessionManager::new(repo.clone(), tokens.clone(), hasher),
            repo,
            tokens,
        }
    }

    fn registration(username: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            password: "secret".to_string(),
            fullname: "Dicoding Indonesia".to_string(),
        }
    }

    fn credentials(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let fx = fixture();

        let user = fx.sessions.register(registration("dicoding")).await.unwrap();
        assert_eq!(user.username, "dicoding");
        assert_eq!(user.fullname, "Dicoding Indonesia");

        let output = fx.sessions.login(credentials("dicoding", "secret")).await.unwrap();

        let identity = fx.sessions.authenticate(&output.access_token).unwrap();
        assert_eq!(identity, IdentityClaims::new(user.user_id, "dicoding"));
        assert!(fx.tokens.verify_refresh_token(&output.refresh_token).is_ok());
        assert_eq!(fx.repo.token_count().await, 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let fx = fixture();
        fx.sessions.register(registration("dicoding")).await.unwrap();

        let err = fx.sessions.register(registration("dicoding")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let fx = fixture();

        for input in [
            RegisterInput {
                username: String::new(),
                ..registration("x")
            },
            RegisterInput {
                password: String::new(),
                ..registration("dicoding")
            },
            RegisterInput {
                fullname: String::new(),
                ..registration("dicoding")
            },
        ] {
            let err = fx.sessions.register(input).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_register_rejects_bad_usernames() {
        let fx = fixture();

        let too_long = "a".repeat(51);
        for name in [too_long.as_str(), "dico ding", "dicoding!"] {
            let err = fx.sessions.register(registration(name)).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)), "{name}");
        }
    }

    #[tokio::test]
    async fn test_login_failures_are_authentication_errors() {
        let fx = fixture();
        fx.sessions.register(registration("dicoding")).await.unwrap();

        let unknown = fx.sessions.login(credentials("nobody", "secret")).await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));

        let wrong = fx.sessions.login(credentials("dicoding", "wrong")).await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

        let missing = fx.sessions.login(credentials("dicoding", "")).await;
        assert!(matches!(missing, Err(AuthError::Validation(_))));

        assert_eq!(fx.repo.token_count().await, 0);
    }

    #[tokio::test]
    async fn test_refresh_mints_access_token_for_same_identity() {
        let fx = fixture();
        let user = fx.sessions.register(registration("dicoding")).await.unwrap();
        let output = fx.sessions.login(credentials("dicoding", "secret")).await.unwrap();

        let access_token = fx
            .sessions
            .refresh(RefreshInput {
                refresh_token: output.refresh_token.clone(),
            })
            .await
            .unwrap();

        let identity = fx.sessions.authenticate(&access_token).unwrap();
        assert_eq!(identity.user_id, user.user_id);
        // Refresh token is not rotated
        assert_eq!(fx.repo.token_count().await, 1);
    }

    #[tokio::test]
    async fn test_refresh_rejects_invalid_signature() {
        let fx = fixture();
        let result = fx
            .sessions
            .refresh(RefreshInput {
                refresh_token: "not.a.token".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_valid_token_missing_from_ledger_is_not_found() {
        let fx = fixture();
        let forged = fx
            .tokens
            .create_refresh_token(&IdentityClaims::new(UserId::new(), "ghost"))
            .unwrap();

        let refresh = fx
            .sessions
            .refresh(RefreshInput {
                refresh_token: forged.clone(),
            })
            .await;
        assert!(matches!(refresh, Err(AuthError::RefreshTokenNotFound)));

        let logout = fx
            .sessions
            .logout(LogoutInput {
                refresh_token: forged,
            })
            .await;
        assert!(matches!(logout, Err(AuthError::RefreshTokenNotFound)));
    }

    #[tokio::test]
    async fn test_logout_twice_fails_second_time() {
        let fx = fixture();
        fx.sessions.register(registration("dicoding")).await.unwrap();
        let output = fx.sessions.login(credentials("dicoding", "secret")).await.unwrap();

        let logout = || {
            fx.sessions.logout(LogoutInput {
                refresh_token: output.refresh_token.clone(),
            })
        };

        assert!(logout().await.is_ok());
        assert!(matches!(logout().await, Err(AuthError::RefreshTokenNotFound)));

        // Logged-out token can no longer refresh
        let refresh = fx
            .sessions
            .refresh(RefreshInput {
                refresh_token: output.refresh_token.clone(),
            })
            .await;
        assert!(matches!(refresh, Err(AuthError::RefreshTokenNotFound)));
    }

    #[tokio::test]
    async fn test_back_to_back_logins_are_independent_sessions() {
        let fx = fixture();
        fx.sessions.register(registration("dicoding")).await.unwrap();

        let first = fx.sessions.login(credentials("dicoding", "secret")).await.unwrap();
        let second = fx.sessions.login(credentials("dicoding", "secret")).await.unwrap();
        assert_ne!(first.refresh_token, second.refresh_token);
        assert_eq!(fx.repo.token_count().await, 2);

        fx.sessions
            .logout(LogoutInput {
                refresh_token: first.refresh_token,
            })
            .await
            .unwrap();
        assert_eq!(fx.repo.token_count().await, 1);

        let access_token = fx
            .sessions
            .refresh(RefreshInput {
                refresh_token: second.refresh_token,
            })
            .await
            .unwrap();
        assert!(fx.sessions.authenticate(&access_token).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_and_logout_require_token() {
        let fx = fixture();

        let refresh = fx
            .sessions
            .refresh(RefreshInput {
                refresh_token: String::new(),
            })
            .await;
        assert!(matches!(refresh, Err(AuthError::Validation(_))));

        let logout = fx
            .sessions
            .logout(LogoutInput {
                refresh_token: String::new(),
            })
            .await;
        assert!(matches!(logout, Err(AuthError::Validation(_))));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use kernel::principal::Principal;
    use platform::password::HashCost;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::infra::InMemoryAuthRepository;
    use crate::presentation::{AuthAppState, auth_router, authenticate};

    fn app() -> Router {
        let config = AuthConfig::with_random_secrets().with_hash_cost(HashCost::minimal());
        let state = AuthAppState::new(InMemoryAuthRepository::new(), &config);

        auth_router(state.clone())
            .route(
                "/whoami",
                get(|principal: Principal| async move { principal.username }),
            )
            .layer(axum::middleware::from_fn_with_state(
                state,
                authenticate::<InMemoryAuthRepository>,
            ))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn register_and_login(app: &Router) -> Value {
        send(
            app,
            "POST",
            "/users",
            json!({"username": "dicoding", "password": "secret", "fullname": "Dicoding Indonesia"}),
        )
        .await;
        let (status, body) = send(
            app,
            "POST",
            "/authentications",
            json!({"username": "dicoding", "password": "secret"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"].clone()
    }

    #[tokio::test]
    async fn test_post_users() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/users",
            json!({"username": "dicoding", "password": "secret", "fullname": "Dicoding Indonesia"}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["addedUser"]["username"], "dicoding");
        assert_eq!(body["data"]["addedUser"]["fullname"], "Dicoding Indonesia");
        assert!(body["data"]["addedUser"]["id"].is_string());
    }

    #[tokio::test]
    async fn test_post_users_bad_payloads() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/users",
            json!({"username": "dicoding", "password": "secret"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");

        let (status, _) = send(
            &app,
            "POST",
            "/users",
            json!({"username": 123, "password": "secret", "fullname": true}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_users_duplicate() {
        let app = app();
        let payload = json!({"username": "dicoding", "password": "secret", "fullname": "D"});
        send(&app, "POST", "/users", payload.clone()).await;

        let (status, body) = send(&app, "POST", "/users", payload).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], "fail");
    }

    #[tokio::test]
    async fn test_authentication_lifecycle() {
        let app = app();
        let tokens = register_and_login(&app).await;
        let refresh_token = tokens["refreshToken"].clone();

        let (status, body) = send(
            &app,
            "PUT",
            "/authentications",
            json!({"refreshToken": refresh_token}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["accessToken"].is_string());

        let (status, body) = send(
            &app,
            "DELETE",
            "/authentications",
            json!({"refreshToken": refresh_token}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "success"}));

        let (status, _) = send(
            &app,
            "DELETE",
            "/authentications",
            json!({"refreshToken": refresh_token}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let app = app();
        register_and_login(&app).await;

        let (status, _) = send(
            &app,
            "POST",
            "/authentications",
            json!({"username": "dicoding", "password": "nope"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_refresh_with_wrong_type_is_bad_request() {
        let app = app();
        let (status, _) = send(&app, "PUT", "/authentications", json!({"refreshToken": 1})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_middleware_inserts_principal() {
        let app = app();
        let tokens = register_and_login(&app).await;
        let access_token = tokens["accessToken"].as_str().unwrap().to_string();

        let anonymous = Request::builder()
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(anonymous).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let authenticated = Request::builder()
            .uri("/whoami")
            .header(header::AUTHORIZATION, format!("Bearer {access_token}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(authenticated).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"dicoding");

        // A refresh token is not accepted as an access token
        let refresh_token = tokens["refreshToken"].as_str().unwrap().to_string();
        let wrong_kind = Request::builder()
            .uri("/whoami")
            .header(header::AUTHORIZATION, format!("Bearer {refresh_token}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(wrong_kind).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
