use super::{AppError, AppResult, AppState, JsonResponse};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use briefme_core::render::render;
use briefme_core::{
    BriefsData, DashboardSnapshot, FollowUp, FollowUpsFilter, Meeting, MeetingsData, ViewState,
    ViewStatePatch,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/rendered", get(dashboard_rendered))
        .route("/state", get(get_state).patch(patch_state))
        .route("/briefs", get(briefs))
        .route("/meetings", get(meetings))
        .route("/meetings/:id/proxy", post(toggle_proxy))
        .route("/meetings/:id/notes", post(open_notes))
        .route("/notes/draft", put(set_draft))
        .route("/notes/save", post(save_notes))
        .route("/follow-ups", get(follow_ups))
        .route("/follow-ups/:id/check", post(check_follow_up))
        .with_state(state)
}

// --- Health ---

#[derive(Serialize)]
struct HealthResponse {
    healthy: bool,
    version: String,
    uptime_seconds: u64,
    meetings: usize,
    meetings_version: u64,
}

async fn health(State(state): State<AppState>) -> AppResult<Json<JsonResponse<HealthResponse>>> {
    let store = state.store()?;
    Ok(Json(JsonResponse::ok(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        meetings: store.meetings().len(),
        meetings_version: store.meetings_version(),
    })))
}

// --- Dashboard ---

async fn dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<JsonResponse<DashboardSnapshot>>> {
    let snapshot = state.store()?.snapshot();
    Ok(Json(JsonResponse::ok(snapshot)))
}

#[derive(Deserialize)]
struct RenderQuery {
    compact: Option<bool>,
}

#[derive(Serialize)]
struct RenderedData {
    rendered: String,
    compact: bool,
    generated_at: String,
}

async fn dashboard_rendered(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> AppResult<Json<JsonResponse<RenderedData>>> {
    let compact = query.compact.unwrap_or(state.render.compact);
    let snapshot = state.store()?.snapshot();

    Ok(Json(JsonResponse::ok(RenderedData {
        rendered: render(&snapshot, compact, state.render.max_chars),
        compact,
        generated_at: snapshot.generated_at.to_rfc3339(),
    })))
}

// --- View state ---

async fn get_state(State(state): State<AppState>) -> AppResult<Json<JsonResponse<Arc<ViewState>>>> {
    Ok(Json(JsonResponse::ok(state.store()?.state())))
}

#[derive(Serialize)]
struct StateUpdate {
    changed: Vec<&'static str>,
    state: Arc<ViewState>,
}

/// Body is a partial view state. Absent keys are left alone; `null`
/// clears an optional field.
async fn patch_state(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<JsonResponse<StateUpdate>>> {
    let patch = ViewStatePatch::from_json(&body)?;
    let changed = patch.changed_fields();

    let mut store = state.store()?;
    store.update_state(patch);
    tracing::debug!("PATCH /state: {:?}", changed);

    Ok(Json(JsonResponse::ok(StateUpdate {
        changed,
        state: store.state(),
    })))
}

// --- Derived views ---

async fn briefs(State(state): State<AppState>) -> AppResult<Json<JsonResponse<Arc<BriefsData>>>> {
    Ok(Json(JsonResponse::ok(state.store()?.briefs_data())))
}

async fn meetings(
    State(state): State<AppState>,
) -> AppResult<Json<JsonResponse<Arc<MeetingsData>>>> {
    Ok(Json(JsonResponse::ok(state.store()?.meetings_data())))
}

// --- Meeting handlers ---

async fn toggle_proxy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<JsonResponse<Meeting>>> {
    let mut store = state.store()?;
    if !store.toggle_proxy(&id) {
        return Err(AppError::not_found(format!("Meeting {} not found", id)));
    }
    let meeting = store
        .find_meeting(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Meeting {} not found", id)))?;
    tracing::info!("proxy for {} is now {}", id, if meeting.has_proxy { "on" } else { "off" });
    Ok(Json(JsonResponse::ok(meeting)))
}

async fn open_notes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<JsonResponse<Arc<ViewState>>>> {
    let mut store = state.store()?;
    if !store.open_notes(&id) {
        return Err(AppError::not_found(format!("Meeting {} not found", id)));
    }
    Ok(Json(JsonResponse::ok(store.state())))
}

#[derive(Deserialize)]
struct DraftRequest {
    notes: String,
}

async fn set_draft(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<JsonResponse<Arc<ViewState>>>> {
    let draft: DraftRequest = serde_json::from_str(&body)?;
    let mut store = state.store()?;
    store.update_state(ViewStatePatch {
        temp_notes: Some(draft.notes),
        ..Default::default()
    });
    Ok(Json(JsonResponse::ok(store.state())))
}

#[derive(Serialize)]
struct NotesSaved {
    /// The meeting the notes were committed to, if one was selected.
    meeting: Option<Meeting>,
    state: Arc<ViewState>,
}

async fn save_notes(State(state): State<AppState>) -> AppResult<Json<JsonResponse<NotesSaved>>> {
    let mut store = state.store()?;
    let selected = store.state().selected_meeting.as_ref().map(|m| m.id.clone());
    store.save_notes();

    let meeting = selected.and_then(|id| store.find_meeting(&id).cloned());
    if let Some(m) = &meeting {
        tracing::info!("notes saved for {} ({} chars)", m.id, m.notes().len());
    }
    Ok(Json(JsonResponse::ok(NotesSaved {
        meeting,
        state: store.state(),
    })))
}

// --- Follow-ups ---

#[derive(Serialize)]
struct FollowUpsData {
    filter: FollowUpsFilter,
    follow_ups: Vec<FollowUp>,
    hidden: usize,
    checked: Vec<String>,
}

async fn follow_ups(State(state): State<AppState>) -> AppResult<Json<JsonResponse<FollowUpsData>>> {
    let store = state.store()?;
    let panel = store.panel_view();
    let view = store.state();

    Ok(Json(JsonResponse::ok(FollowUpsData {
        filter: view.follow_ups_filter,
        follow_ups: panel.follow_ups,
        hidden: panel.hidden_follow_ups,
        checked: view.checked_follow_ups.iter().cloned().collect(),
    })))
}

#[derive(Serialize)]
struct FollowUpCheck {
    id: String,
    checked: bool,
}

async fn check_follow_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<JsonResponse<FollowUpCheck>>> {
    let mut store = state.store()?;
    if !store.briefs_data().follow_ups.iter().any(|f| f.id == id) {
        return Err(AppError::not_found(format!("Follow-up {} not found", id)));
    }
    store.toggle_follow_up(&id);
    let checked = store.state().checked_follow_ups.contains(&id);
    Ok(Json(JsonResponse::ok(FollowUpCheck { id, checked })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use briefme_core::DashboardStore;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn app() -> (Router, AppState) {
        let state = AppState::new(DashboardStore::sample(), RenderConfig::default());
        (create_router(state.clone()), state)
    }

    fn request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = send(&app, request("GET", "/health", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["healthy"], true);
        assert_eq!(body["data"]["meetings"], 5);
    }

    #[tokio::test]
    async fn test_dashboard_snapshot() {
        let (app, _) = app();
        let (status, body) = send(&app, request("GET", "/dashboard", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["meetings"]["nextMeeting"]["id"], "m3");
        assert_eq!(body["data"]["panel"]["hiddenSchedule"], 2);
    }

    #[tokio::test]
    async fn test_rendered_compact() {
        let (app, _) = app();
        let (_, body) = send(&app, request("GET", "/dashboard/rendered?compact=true", "")).await;
        assert_eq!(body["data"]["compact"], true);
        assert!(body["data"]["rendered"]
            .as_str()
            .unwrap()
            .starts_with("next: 11:45 AM"));
    }

    #[tokio::test]
    async fn test_patch_state_merges() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            request("PATCH", "/state", r#"{"openSection": "calendar", "selectedBrief": "b2"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["state"]["openSection"], "calendar");
        assert_eq!(body["data"]["state"]["selectedBrief"], "b2");
        assert_eq!(body["data"]["state"]["leftRailTab"], "briefs");

        let (_, body) = send(&app, request("PATCH", "/state", r#"{"selectedBrief": null}"#)).await;
        assert!(body["data"]["state"]["selectedBrief"].is_null());
        assert_eq!(body["data"]["state"]["openSection"], "calendar");
    }

    #[tokio::test]
    async fn test_patch_state_rejects_unknown_field() {
        let (app, state) = app();
        let (status, body) = send(&app, request("PATCH", "/state", r#"{"nope": true}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(*state.store().ok().unwrap().state(), ViewState::default());
    }

    #[tokio::test]
    async fn test_proxy_toggle_and_missing() {
        let (app, _) = app();
        let (status, body) = send(&app, request("POST", "/meetings/m3/proxy", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["hasProxy"], true);

        let (status, _) = send(&app, request("POST", "/meetings/zzz/proxy", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, request("GET", "/meetings", "")).await;
        assert_eq!(body["data"]["nextMeeting"]["hasProxy"], true);
    }

    #[tokio::test]
    async fn test_notes_round_trip() {
        let (app, state) = app();
        let (status, _) = send(&app, request("POST", "/meetings/m5/notes", "")).await;
        assert_eq!(status, StatusCode::OK);

        let draft = r#"{"notes": "  Ask for the deck  "}"#;
        let (_, body) = send(&app, request("PUT", "/notes/draft", draft)).await;
        assert_eq!(body["data"]["tempNotes"], "  Ask for the deck  ");

        let (_, body) = send(&app, request("POST", "/notes/save", "")).await;
        assert_eq!(body["data"]["meeting"]["id"], "m5");
        assert_eq!(body["data"]["meeting"]["proxyNotes"], "Ask for the deck");
        assert_eq!(body["data"]["state"]["showInstructionsDrawer"], false);

        assert_eq!(state.store().ok().unwrap().meetings_version(), 1);
    }

    #[tokio::test]
    async fn test_bad_draft_body() {
        let (app, _) = app();
        let (status, _) = send(&app, request("PUT", "/notes/draft", r#"{"text": 1}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_follow_up_check() {
        let (app, _) = app();
        let (_, body) = send(&app, request("POST", "/follow-ups/f1/check", "")).await;
        assert_eq!(body["data"]["checked"], true);

        let (status, _) = send(&app, request("POST", "/follow-ups/f9/check", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&app, request("PATCH", "/state", r#"{"followUpsFilter": "current"}"#)).await;
        let (_, body) = send(&app, request("GET", "/follow-ups", "")).await;
        assert_eq!(body["data"]["filter"], "current");
        assert_eq!(body["data"]["follow_ups"][0]["id"], "f2");
        assert_eq!(body["data"]["checked"][0], "f1");
    }
}
