//! Registry Router
//!
//! Reads of events and the per-event / per-participant registration lists
//! are public. Everything else goes through the bearer-token gate.

use auth::{TokenGate, require_bearer_token};
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::domain::repository::RegistryRepository;
use crate::infra::postgres::PgRegistryRepository;
use crate::presentation::handlers::{self, RegistryAppState};

/// Create the Registry router with PostgreSQL repository
pub fn registry_router(
    repo: PgRegistryRepository,
    config: RegistryConfig,
    gate: TokenGate,
) -> Router {
    registry_router_generic(repo, config, gate)
}

/// Create a generic Registry router for any repository implementation
pub fn registry_router_generic<R>(repo: R, config: RegistryConfig, gate: TokenGate) -> Router
where
    R: RegistryRepository,
{
    let state = RegistryAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let public = Router::new()
        .route("/events", get(handlers::list_events::<R>))
        .route("/events/upcoming", get(handlers::list_upcoming_events::<R>))
        .route("/events/{id}", get(handlers::get_event::<R>))
        .route("/participants", post(handlers::create_participant::<R>))
        .route(
            "/registrations/event/{event_id}",
            get(handlers::list_event_registrations::<R>),
        )
        .route(
            "/registrations/participant/{participant_id}",
            get(handlers::list_participant_registrations::<R>),
        );

    let protected = Router::new()
        .route("/events", post(handlers::create_event::<R>))
        .route(
            "/events/{id}",
            put(handlers::update_event::<R>).delete(handlers::delete_event::<R>),
        )
        .route(
            "/events/{id}/capacity",
            put(handlers::update_event_capacity::<R>),
        )
        .route("/participants", get(handlers::list_participants::<R>))
        .route(
            "/participants/{id}",
            get(handlers::get_participant::<R>)
                .put(handlers::update_participant::<R>)
                .delete(handlers::delete_participant::<R>),
        )
        .route(
            "/registrations",
            get(handlers::list_registrations::<R>).post(handlers::create_registration::<R>),
        )
        .route(
            "/registrations/date",
            get(handlers::list_registrations_since::<R>),
        )
        .route(
            "/registrations/{id}",
            get(handlers::get_registration::<R>)
                .put(handlers::update_registration::<R>)
                .delete(handlers::delete_registration::<R>),
        )
        .route_layer(from_fn_with_state(gate, require_bearer_token));

    public.merge(protected).with_state(state)
}
