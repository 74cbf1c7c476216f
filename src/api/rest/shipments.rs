use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::geo;
use crate::models::shipment::{Address, PackageDetails, Shipment};
use crate::models::tracking::TrackingEvent;
use crate::pricing;
use crate::state::AppState;
use crate::store::Store;
use crate::tracking;

const MAX_CODE_ATTEMPTS: u32 = 5;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shipments/quote", post(quote))
        .route("/shipments", post(create_shipment).get(my_shipments))
        .route("/track/:tracking_code", get(track))
}

fn default_weight() -> f64 {
    1.0
}

fn default_tier() -> String {
    "standard".to_string()
}

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub origin_city: String,
    pub destination_city: String,
    #[serde(default = "default_weight")]
    pub weight_kg: f64,
    #[serde(default = "default_tier")]
    pub service_tier: String,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub distance_km: f64,
    pub price: f64,
    pub service_tier: String,
    pub weight_kg: f64,
}

async fn quote(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Json(payload): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let distance_km = geo::estimate_distance_km(&payload.origin_city, &payload.destination_city);
    let price = pricing::quote_price(payload.weight_kg, distance_km, &payload.service_tier);

    state
        .metrics
        .quotes_total
        .with_label_values(&[&payload.service_tier])
        .inc();

    Json(QuoteResponse {
        distance_km: pricing::round2(distance_km),
        price,
        service_tier: payload.service_tier,
        weight_kg: payload.weight_kg,
    })
}

#[derive(Deserialize)]
pub struct CreateShipmentRequest {
    pub sender: Address,
    pub receiver: Address,
    pub package: PackageDetails,
    #[serde(default = "default_tier")]
    pub service_tier: String,
    pub pickup_date: String,
}

#[derive(Serialize)]
pub struct CreateShipmentResponse {
    pub tracking_code: String,
    pub shipment_id: Uuid,
    pub price: f64,
    pub estimated_delivery: chrono::DateTime<Utc>,
}

async fn create_shipment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateShipmentRequest>,
) -> Result<Json<CreateShipmentResponse>, AppError> {
    if payload.package.weight_kg <= 0.0 {
        return Err(AppError::BadRequest("weight must be > 0".to_string()));
    }

    let tracking_code = generate_tracking_code(&state.store)?;

    let distance_km = geo::estimate_distance_km(&payload.sender.city, &payload.receiver.city);
    let price = pricing::quote_price(payload.package.weight_kg, distance_km, &payload.service_tier);

    let created_at = Utc::now();
    let delivery_days = if payload.service_tier == "standard" { 3 } else { 1 };

    let shipment = Shipment {
        shipment_id: Uuid::new_v4(),
        tracking_code: tracking_code.clone(),
        owner_id: user.user_id,
        sender: payload.sender,
        receiver: payload.receiver,
        package: payload.package,
        service_tier: payload.service_tier,
        pickup_date: payload.pickup_date,
        distance_km,
        price,
        status: tracking::STATUS_ORDER_PLACED.to_string(),
        created_at,
        estimated_delivery: created_at + Duration::days(delivery_days),
    };

    state.store.insert_shipment(shipment.clone())?;
    tracking::create_initial(
        &state.store,
        &shipment.tracking_code,
        shipment.shipment_id,
        &shipment.sender.city,
    );

    state.metrics.shipments_created_total.inc();
    tracing::info!(
        tracking_code = %shipment.tracking_code,
        owner_id = %shipment.owner_id,
        price,
        "shipment booked"
    );

    Ok(Json(CreateShipmentResponse {
        tracking_code: shipment.tracking_code,
        shipment_id: shipment.shipment_id,
        price,
        estimated_delivery: shipment.estimated_delivery,
    }))
}

async fn my_shipments(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Json<Vec<Shipment>> {
    Json(state.store.shipments_for_owner(user.user_id))
}

#[derive(Serialize)]
pub struct TrackResponse {
    pub shipment: Shipment,
    pub history: Vec<TrackingEvent>,
}

/// Public lookup; no authentication so recipients can track too.
async fn track(
    State(state): State<Arc<AppState>>,
    Path(tracking_code): Path<String>,
) -> Result<Json<TrackResponse>, AppError> {
    let shipment = state
        .store
        .find_shipment_by_code(&tracking_code)
        .ok_or_else(|| AppError::NotFound(format!("shipment {tracking_code} not found")))?;

    let history = tracking::replay_history(&state.store, &tracking_code);

    Ok(Json(TrackResponse { shipment, history }))
}

fn generate_tracking_code(store: &Store) -> Result<String, AppError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = format!("CD{}", rand::thread_rng().gen_range(100_000..=999_999));
        if !store.tracking_code_in_use(&code) {
            return Ok(code);
        }
    }

    Err(AppError::Internal(
        "could not allocate a unique tracking code".to_string(),
    ))
}
