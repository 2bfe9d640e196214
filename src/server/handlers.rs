//! Route handlers.
//!
//! Handlers validate, call the cipher, and serialize. The page endpoints
//! also record the shift in [`LastShift`](crate::session::LastShift); the
//! plain API endpoints do not.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Html,
    Json,
};
use tracing::{debug, info};

use super::error::ApiError;
use super::types::{CipherBody, CipherQuery, CipherResponse, CipherTexts, HealthResponse};
use super::AppState;
use crate::alphabet::map_alphabet;
use crate::cipher::Direction;
use crate::validation::{validate, ShiftParam};

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let shift = state.last_shift.get_or(state.default_shift);
    debug!(%shift, "rendering index");
    Ok(Html(state.pages.index(shift)?))
}

pub async fn encrypt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CipherBody>, JsonRejection>,
) -> Result<Json<CipherResponse>, ApiError> {
    page_cipher(&state, payload, Direction::Encode)
}

pub async fn decrypt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CipherBody>, JsonRejection>,
) -> Result<Json<CipherResponse>, ApiError> {
    page_cipher(&state, payload, Direction::Decode)
}

pub async fn api_encrypt(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CipherQuery>, QueryRejection>,
) -> Result<Json<CipherResponse>, ApiError> {
    api_cipher(&state, query, Direction::Encode)
}

pub async fn api_decrypt(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CipherQuery>, QueryRejection>,
) -> Result<Json<CipherResponse>, ApiError> {
    api_cipher(&state, query, Direction::Decode)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn page_cipher(
    state: &AppState,
    payload: Result<Json<CipherBody>, JsonRejection>,
    direction: Direction,
) -> Result<Json<CipherResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = validate(&body.text, body.shift.as_ref(), state.default_shift)?;

    state.last_shift.record(request.shift);
    let output = request.apply(direction);
    info!(?direction, shift = %request.shift, chars = request.text.chars().count(), "cipher request");

    Ok(Json(CipherResponse {
        shift: request.shift,
        alphabet: Some(map_alphabet(request.shift).into()),
        texts: CipherTexts::new(direction, request.text, output),
    }))
}

fn api_cipher(
    state: &AppState,
    query: Result<Query<CipherQuery>, QueryRejection>,
    direction: Direction,
) -> Result<Json<CipherResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let shift: Option<ShiftParam> = query.shift_param();
    let request = validate(&query.text, shift.as_ref(), state.default_shift)?;

    let output = request.apply(direction);
    info!(?direction, shift = %request.shift, chars = request.text.chars().count(), "api cipher request");

    Ok(Json(CipherResponse {
        shift: request.shift,
        alphabet: None,
        texts: CipherTexts::new(direction, request.text, output),
    }))
}
