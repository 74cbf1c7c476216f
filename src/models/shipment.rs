use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "India".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDetails {
    /// "document" or "parcel".
    #[serde(rename = "type")]
    pub kind: String,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: Uuid,
    /// Human-facing code, immutable once assigned.
    pub tracking_code: String,
    pub owner_id: Uuid,
    pub sender: Address,
    pub receiver: Address,
    pub package: PackageDetails,
    pub service_tier: String,
    pub pickup_date: String,
    pub distance_km: f64,
    pub price: f64,
    /// Mirrors the status of the latest tracking event.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}
