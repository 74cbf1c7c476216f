use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::auth::{require_admin, require_staff, AuthUser};
use crate::error::AppError;
use crate::models::shipment::Shipment;
use crate::models::tracking::TrackingEvent;
use crate::models::user::Role;
use crate::state::AppState;
use crate::tracking;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/shipments", get(list_shipments))
        .route("/admin/status", post(update_status))
        .route("/admin/stats", get(stats))
}

async fn list_shipments(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Shipment>>, AppError> {
    require_staff(&user)?;
    Ok(Json(state.store.all_shipments()))
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub tracking_code: String,
    pub status: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

async fn update_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<TrackingEvent>, AppError> {
    require_staff(&user)?;

    let event = tracking::append_event(
        &state.store,
        &payload.tracking_code,
        &payload.status,
        &payload.location,
        &payload.notes,
        Some(user.user_id),
    )?;

    state
        .metrics
        .tracking_events_total
        .with_label_values(&[&event.status])
        .inc();

    tracing::info!(
        tracking_code = %event.tracking_code,
        status = %event.status,
        actor_id = %user.user_id,
        "shipment status updated"
    );

    Ok(Json(event))
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_shipments: usize,
    pub delivered_shipments: usize,
    pub pending_shipments: usize,
    pub total_customers: usize,
}

async fn stats(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<Json<StatsResponse>, AppError> {
    require_admin(&user)?;

    let total_shipments = state.store.shipment_count();
    let delivered_shipments = state
        .store
        .count_shipments_with_status(tracking::STATUS_DELIVERED);

    Ok(Json(StatsResponse {
        total_shipments,
        delivered_shipments,
        pending_shipments: total_shipments - delivered_shipments,
        total_customers: state.store.count_users_with_role(Role::Customer),
    }))
}
