use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::GameError;
use crate::state::{AppState, EventEntry, GameSnapshot};
use crate::types::{Color, Stake, View};
use crate::web;

type S = Arc<AppState>;

pub fn build_router(state: S) -> Router {
    Router::new()
        .route(View::Game.path(), get(serve_game))
        .route(View::Rules.path(), get(serve_rules))
        .route(View::History.path(), get(serve_history))
        .route("/api/status", get(get_status))
        .route("/api/events", get(get_events))
        .route("/api/select-color", post(post_select_color))
        .route("/api/select-stake", post(post_select_stake))
        .route("/api/submit", post(post_submit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Views ───────────────────────────────────────────────────────────────────

pub(crate) async fn serve_game(State(state): State<S>) -> Result<Html<String>, GameError> {
    state.navigate(View::Game);
    let snapshot = state.snapshot()?;
    Ok(Html(web::game_page(&snapshot)))
}

pub(crate) async fn serve_rules(State(state): State<S>) -> Html<String> {
    state.navigate(View::Rules);
    Html(web::rules_page())
}

pub(crate) async fn serve_history(State(state): State<S>) -> Html<String> {
    state.navigate(View::History);
    Html(web::history_page())
}

// ── Game API ────────────────────────────────────────────────────────────────

pub(crate) async fn get_status(State(state): State<S>) -> Result<Json<GameSnapshot>, GameError> {
    state.snapshot().map(Json)
}

pub(crate) async fn get_events(State(state): State<S>) -> Json<Vec<EventEntry>> {
    let events = state.events.lock().unwrap();
    Json(events.iter().cloned().collect())
}

#[derive(Deserialize)]
pub(crate) struct ColorRequest {
    pub color: String,
}

pub(crate) async fn post_select_color(
    State(state): State<S>,
    Json(body): Json<ColorRequest>,
) -> Result<Json<serde_json::Value>, GameError> {
    let color: Color = body.color.parse()?;
    state.select_color(color)?;
    Ok(Json(serde_json::json!({"ok": true})))
}

#[derive(Deserialize)]
pub(crate) struct StakeRequest {
    pub stake: String,
}

pub(crate) async fn post_select_stake(
    State(state): State<S>,
    Json(body): Json<StakeRequest>,
) -> Result<Json<serde_json::Value>, GameError> {
    let stake: Stake = body.stake.parse()?;
    state.select_stake(stake)?;
    Ok(Json(serde_json::json!({"ok": true})))
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitResponse {
    pub ok: bool,
    pub round: u64,
    pub color: Color,
    pub stake: Stake,
    pub ticket: String,
}

pub(crate) async fn post_submit(State(state): State<S>) -> Result<Json<SubmitResponse>, GameError> {
    let (round, ticket) = state.submit()?;
    Ok(Json(SubmitResponse {
        ok: true,
        round,
        color: ticket.color,
        stake: ticket.stake,
        ticket: ticket.to_string(),
    }))
}
