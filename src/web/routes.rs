use super::state::{AppState, FormInteraction};
use super::Result;
use crate::facade::{Action, RawFields, SortKey};
use crate::render::{TableView, html};
use crate::storage::TableId;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tables/:id/animals", post(add_animal))
        .route("/tables/:id/animals/:name/edit", post(edit_animal))
        .route("/tables/:id/animals/:name/delete", post(delete_animal))
        .route("/tables/:id/sort/:key", post(sort_table))
        .route("/api/tables", get(list_tables))
        .route("/api/tables/:id", get(get_table))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut page = state.page.lock().await;
    let notices = std::mem::take(&mut page.notices);
    Html(html::render_page(&page.session.render_all(), &notices))
}

/// Runs one action under the page lock and queues whatever it reported.
async fn apply(state: &AppState, action: Action, submitted: Option<RawFields>) -> Result<Redirect> {
    let mut page = state.page.lock().await;
    let mut ui = FormInteraction::new(submitted);
    page.session.dispatch(action, &mut ui)?;
    if !ui.notices.is_empty() {
        info!(count = ui.notices.len(), "action rejected");
    }
    page.notices.extend(ui.notices);
    Ok(Redirect::to("/"))
}

pub async fn add_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<RawFields>,
) -> Result<Redirect> {
    let action = Action::Add {
        table: TableId::new(id),
    };
    apply(&state, action, Some(fields)).await
}

pub async fn edit_animal(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
    Form(fields): Form<RawFields>,
) -> Result<Redirect> {
    let action = Action::Edit {
        table: TableId::new(id),
        name,
    };
    apply(&state, action, Some(fields)).await
}

pub async fn delete_animal(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Redirect> {
    let action = Action::Delete {
        table: TableId::new(id),
        name,
    };
    apply(&state, action, None).await
}

pub async fn sort_table(
    State(state): State<AppState>,
    Path((id, key)): Path<(String, String)>,
) -> Result<Redirect> {
    let key: SortKey = key.parse()?;
    let action = Action::Sort {
        table: TableId::new(id),
        key,
    };
    apply(&state, action, None).await
}

pub async fn list_tables(State(state): State<AppState>) -> Json<Vec<TableView>> {
    let page = state.page.lock().await;
    Json(page.session.render_all())
}

pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TableView>> {
    let page = state.page.lock().await;
    Ok(Json(page.session.render(&TableId::new(id))?))
}
