//! HTTP Handlers

use auth::Authenticated;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use kernel::id::{EventId, ParticipantId, RegistrationId};
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::application::{
    CreateParticipantInput, EventUseCases, ParticipantUseCases, RegistrationUseCases,
};
use crate::domain::repository::RegistryRepository;
use crate::error::RegistryResult;
use crate::presentation::dto::{
    CreateEventRequest, CreateParticipantRequest, CreateRegistrationRequest, DateQuery,
    EventResponse, ParticipantResponse, RegistrationResponse, UpdateCapacityRequest,
    UpdateEventRequest, UpdateParticipantRequest, UpdateRegistrationRequest,
};
use crate::presentation::extract::{IdPath, JsonBody};

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: RegistryRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<RegistryConfig>,
}

impl<R> RegistryAppState<R>
where
    R: RegistryRepository,
{
    fn events(&self) -> EventUseCases<R> {
        EventUseCases::new(self.repo.clone())
    }

    fn participants(&self) -> ParticipantUseCases<R> {
        ParticipantUseCases::new(self.repo.clone(), self.config.clone())
    }

    fn registrations(&self) -> RegistrationUseCases<R> {
        RegistrationUseCases::new(self.repo.clone())
    }
}

fn collect<T, U: From<T>>(items: Vec<T>) -> Json<Vec<U>> {
    Json(items.into_iter().map(U::from).collect())
}

// ============================================================================
// Events
// ============================================================================

/// GET /events
pub async fn list_events<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<EventResponse>>> {
    Ok(collect(state.events().list().await?))
}

/// GET /events/upcoming
pub async fn list_upcoming_events<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<EventResponse>>> {
    Ok(collect(state.events().list_upcoming().await?))
}

/// GET /events/{id}
pub async fn get_event<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    IdPath(id): IdPath<EventId>,
) -> RegistryResult<Json<EventResponse>> {
    Ok(Json(state.events().get(id).await?.into()))
}

/// POST /events
pub async fn create_event<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    JsonBody(req): JsonBody<CreateEventRequest>,
) -> RegistryResult<(StatusCode, Json<EventResponse>)> {
    let event = state.events().create(req.into(), who.id).await?;

    Ok((StatusCode::CREATED, Json(event.into())))
}

/// PUT /events/{id}
pub async fn update_event<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<EventId>,
    JsonBody(req): JsonBody<UpdateEventRequest>,
) -> RegistryResult<Json<EventResponse>> {
    let event = state.events().update(id, req.into(), who.id).await?;

    Ok(Json(event.into()))
}

/// PUT /events/{id}/capacity
pub async fn update_event_capacity<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<EventId>,
    JsonBody(req): JsonBody<UpdateCapacityRequest>,
) -> RegistryResult<Json<EventResponse>> {
    let event = state
        .events()
        .update_capacity(id, req.capacity, who.id)
        .await?;

    Ok(Json(event.into()))
}

/// DELETE /events/{id}
pub async fn delete_event<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<EventId>,
) -> RegistryResult<StatusCode> {
    state.events().delete(id, who.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Participants
// ============================================================================

/// GET /participants
pub async fn list_participants<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<ParticipantResponse>>> {
    Ok(collect(state.participants().list().await?))
}

/// GET /participants/{id}
pub async fn get_participant<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    IdPath(id): IdPath<ParticipantId>,
) -> RegistryResult<Json<ParticipantResponse>> {
    Ok(Json(state.participants().get(id).await?.into()))
}

/// POST /participants
pub async fn create_participant<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    JsonBody(req): JsonBody<CreateParticipantRequest>,
) -> RegistryResult<(StatusCode, Json<ParticipantResponse>)> {
    let input = CreateParticipantInput {
        name: req.name,
        email: req.email,
        phone_number: req.phone_number,
        password: req.password.unwrap_or_default(),
    };

    let participant = state.participants().create(input).await?;

    Ok((StatusCode::CREATED, Json(participant.into())))
}

/// PUT /participants/{id}
pub async fn update_participant<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<ParticipantId>,
    JsonBody(req): JsonBody<UpdateParticipantRequest>,
) -> RegistryResult<Json<ParticipantResponse>> {
    let participant = state
        .participants()
        .update(id, req.into_changes()?, who.id)
        .await?;

    Ok(Json(participant.into()))
}

/// DELETE /participants/{id}
pub async fn delete_participant<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<ParticipantId>,
) -> RegistryResult<StatusCode> {
    state.participants().delete(id, who.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Registrations
// ============================================================================

/// GET /registrations
pub async fn list_registrations<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<RegistrationResponse>>> {
    Ok(collect(state.registrations().list().await?))
}

/// GET /registrations/date?date=
pub async fn list_registrations_since<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    Query(query): Query<DateQuery>,
) -> RegistryResult<Json<Vec<RegistrationResponse>>> {
    Ok(collect(
        state
            .registrations()
            .list_since(query.date.as_deref())
            .await?,
    ))
}

/// GET /registrations/{id}
pub async fn get_registration<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    IdPath(id): IdPath<RegistrationId>,
) -> RegistryResult<Json<RegistrationResponse>> {
    Ok(Json(state.registrations().get(id).await?.into()))
}

/// GET /registrations/event/{event_id}
pub async fn list_event_registrations<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    IdPath(event_id): IdPath<EventId>,
) -> RegistryResult<Json<Vec<RegistrationResponse>>> {
    Ok(collect(state.registrations().list_for_event(event_id).await?))
}

/// GET /registrations/participant/{participant_id}
pub async fn list_participant_registrations<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    IdPath(participant_id): IdPath<ParticipantId>,
) -> RegistryResult<Json<Vec<RegistrationResponse>>> {
    Ok(collect(
        state
            .registrations()
            .list_for_participant(participant_id)
            .await?,
    ))
}

/// POST /registrations
pub async fn create_registration<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    JsonBody(req): JsonBody<CreateRegistrationRequest>,
) -> RegistryResult<(StatusCode, Json<RegistrationResponse>)> {
    let registration = state.registrations().create(req.into(), who.id).await?;

    Ok((StatusCode::CREATED, Json(registration.into())))
}

/// PUT /registrations/{id}
pub async fn update_registration<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<RegistrationId>,
    JsonBody(req): JsonBody<UpdateRegistrationRequest>,
) -> RegistryResult<Json<RegistrationResponse>> {
    let registration = state
        .registrations()
        .update(id, req.into(), who.id)
        .await?;

    Ok(Json(registration.into()))
}

/// DELETE /registrations/{id}
pub async fn delete_registration<R: RegistryRepository>(
    State(state): State<RegistryAppState<R>>,
    who: Authenticated,
    IdPath(id): IdPath<RegistrationId>,
) -> RegistryResult<StatusCode> {
    state.registrations().delete(id, who.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
