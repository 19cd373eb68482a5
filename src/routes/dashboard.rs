//! Dashboard route.

use axum::extract::State;
use axum::response::Json;

use crate::services::dashboard::{self, DashboardSummary};
use crate::state::AppState;

/// `GET /api/dashboard/summary` — aggregate stats for the landing screen.
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(dashboard::summary(&state).await)
}
