//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{ErrorResponse, ItemSummary, TreeResponse};
use crate::error::RenderError;
use crate::plot::Chart;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn failure(err: &RenderError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        RenderError::UnknownItem(_) => StatusCode::NOT_FOUND,
        RenderError::NotRenderable { .. } | RenderError::Detached(_) | RenderError::Curve { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Lists every bus and load.
///
/// `GET /items` → 200 + `Vec<ItemSummary>` JSON
pub async fn get_items(State(state): State<Arc<AppState>>) -> Json<Vec<ItemSummary>> {
    Json(state.catalog.items().iter().map(ItemSummary::from).collect())
}

/// Composes the chart of one item.
///
/// `GET /items/{name}/chart` → 200 + `Chart` JSON
/// unknown item → 404; an item whose curves cannot be built → 422
pub async fn get_chart(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> ApiResult<Chart> {
    state
        .catalog
        .compose(&name, &state.style)
        .map(Json)
        .map_err(|e| failure(&e))
}

/// Draws the tree around one item.
///
/// `GET /items/{name}/tree` → 200 + `TreeResponse` JSON, unknown item → 404
pub async fn get_tree(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> ApiResult<TreeResponse> {
    let tree = state.catalog.tree(Some(&name)).map_err(|e| failure(&e))?;
    Ok(Json(TreeResponse { item: name, tree }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::catalog::Catalog;
    use crate::plot::PlotStyle;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            catalog: Catalog::reference(),
            style: PlotStyle::default(),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn items_are_listed_in_order() {
        let (status, json) = get_json("/items").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i["name"].as_str())
            .collect();
        assert_eq!(names, ["TS5", "TSS8", "CAS 5.12", "Load"]);
        assert_eq!(json[3]["kind"], "load");
    }

    #[tokio::test]
    async fn chart_of_the_load() {
        let (status, json) = get_json("/items/Load/chart").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Curves for Load");
        assert_eq!(json["series"].as_array().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn tree_of_a_sub_board() {
        let (status, json) = get_json("/items/TSS8/tree").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["tree"].as_str().unwrap().starts_with("==grid\n"));
    }

    #[tokio::test]
    async fn unknown_item_returns_404() {
        let (status, json) = get_json("/items/nope/chart").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("nope"));
    }
}
