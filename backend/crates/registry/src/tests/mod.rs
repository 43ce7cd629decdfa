//! Router-level tests for the Registry crate
//! Full HTTP surface (login included) over an in-memory store

mod memory;
mod registrations;

use auth::{AuthConfig, Identity, TokenGate, auth_router_generic};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use kernel::id::ParticipantId;
use platform::token::TokenSigner;
use std::time::Duration;
use tower::ServiceExt;

use crate::application::config::RegistryConfig;
use crate::presentation::router::registry_router_generic;

pub use memory::MemoryRegistry;

const SECRET: &[u8] = b"registry-test-secret";

/// Test harness: app plus a handle on its store
pub struct TestApp {
    pub store: MemoryRegistry,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_configs(AuthConfig::with_secret(SECRET), RegistryConfig::default())
    }

    /// Same app with `pepper` given to sign-up and login alike
    pub fn with_pepper(pepper: &[u8]) -> Self {
        Self::with_configs(
            AuthConfig {
                password_pepper: Some(pepper.to_vec()),
                ..AuthConfig::with_secret(SECRET)
            },
            RegistryConfig {
                password_pepper: Some(pepper.to_vec()),
            },
        )
    }

    pub fn with_configs(auth_config: AuthConfig, registry_config: RegistryConfig) -> Self {
        let store = MemoryRegistry::default();
        let gate = TokenGate::new(&auth_config);

        let router = auth_router_generic(store.clone(), auth_config).merge(
            registry_router_generic(store.clone(), registry_config, gate),
        );

        Self { store, router }
    }

    /// A valid token for participant `id`. The gate does not look the
    /// participant up, so any id works.
    pub fn token_for(&self, id: i32) -> String {
        let signer = TokenSigner::new(SECRET, Duration::from_secs(3600));
        let (token, _) = signer
            .issue(Identity {
                id: ParticipantId::new(id),
                email: format!("user{}@example.com", id),
            })
            .unwrap();
        token
    }

    pub fn foreign_token(&self) -> String {
        let signer = TokenSigner::new(b"some-other-secret", Duration::from_secs(3600));
        let (token, _) = signer
            .issue(Identity {
                id: ParticipantId::new(1),
                email: "user1@example.com".to_string(),
            })
            .unwrap();
        token
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send and expect `status`, returning the parsed body
    /// (`Null` for an empty one).
    pub async fn expect(
        &self,
        status: StatusCode,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> serde_json::Value {
        let response = self.send(method, uri, token, body).await;
        assert_eq!(response.status(), status, "{} {}", method, uri);
        body_json(response).await
    }

    pub async fn create_event(&self, name: &str, date: &str) -> serde_json::Value {
        let token = self.token_for(1);
        self.expect(
            StatusCode::CREATED,
            "POST",
            "/events",
            Some(&token),
            Some(serde_json::json!({
                "name": name,
                "description": "A gathering",
                "date": date,
                "location": "Hall A",
                "capacity": 100,
            })),
        )
        .await
    }

    pub async fn create_participant(&self, name: &str, email: &str) -> serde_json::Value {
        self.expect(
            StatusCode::CREATED,
            "POST",
            "/participants",
            None,
            Some(serde_json::json!({
                "name": name,
                "email": email,
                "phone_number": "0812345678",
                "password": "secret1",
            })),
        )
        .await
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}
