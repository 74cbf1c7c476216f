use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub tracking_code: String,
    pub shipment_id: Uuid,
    pub status: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub notes: String,
    /// Staff user who recorded the event; absent for the initial event.
    pub actor_id: Option<Uuid>,
}
