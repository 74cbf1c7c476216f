//! In-memory document store.
//!
//! Stands in for the external persistence capability: collections keyed the
//! way the API queries them (email, tracking code, owner). Reads that need
//! an order sort on the way out; nothing here enforces schema beyond the
//! typed records themselves.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::shipment::Shipment;
use crate::models::tracking::TrackingEvent;
use crate::models::user::{Role, User};

#[derive(Default)]
pub struct Store {
    users: DashMap<Uuid, User>,
    users_by_email: DashMap<String, Uuid>,
    shipments: DashMap<Uuid, Shipment>,
    shipments_by_code: DashMap<String, Uuid>,
    events: DashMap<String, Vec<TrackingEvent>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) -> Result<(), AppError> {
        match self.users_by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "email {} already registered",
                user.email
            ))),
            Entry::Vacant(entry) => {
                entry.insert(user.user_id);
                self.users.insert(user.user_id, user);
                Ok(())
            }
        }
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        let user_id = *self.users_by_email.get(email)?;
        self.users.get(&user_id).map(|entry| entry.value().clone())
    }

    pub fn count_users_with_role(&self, role: Role) -> usize {
        self.users
            .iter()
            .filter(|entry| entry.value().role == role)
            .count()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn tracking_code_in_use(&self, tracking_code: &str) -> bool {
        self.shipments_by_code.contains_key(tracking_code)
    }

    pub fn insert_shipment(&self, shipment: Shipment) -> Result<(), AppError> {
        match self.shipments_by_code.entry(shipment.tracking_code.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "tracking code {} already in use",
                shipment.tracking_code
            ))),
            Entry::Vacant(entry) => {
                entry.insert(shipment.shipment_id);
                self.shipments.insert(shipment.shipment_id, shipment);
                Ok(())
            }
        }
    }

    pub fn find_shipment_by_code(&self, tracking_code: &str) -> Option<Shipment> {
        let shipment_id = *self.shipments_by_code.get(tracking_code)?;
        self.shipments
            .get(&shipment_id)
            .map(|entry| entry.value().clone())
    }

    /// A caller's shipments, newest first.
    pub fn shipments_for_owner(&self, owner_id: Uuid) -> Vec<Shipment> {
        let mut shipments: Vec<Shipment> = self
            .shipments
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();

        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    /// All shipments, newest first.
    pub fn all_shipments(&self) -> Vec<Shipment> {
        let mut shipments: Vec<Shipment> = self
            .shipments
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    pub fn update_shipment_status(&self, tracking_code: &str, status: &str) -> bool {
        let Some(shipment_id) = self.shipments_by_code.get(tracking_code).map(|id| *id) else {
            return false;
        };

        match self.shipments.get_mut(&shipment_id) {
            Some(mut shipment) => {
                shipment.status = status.to_string();
                true
            }
            None => false,
        }
    }

    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }

    pub fn count_shipments_with_status(&self, status: &str) -> usize {
        self.shipments
            .iter()
            .filter(|entry| entry.value().status == status)
            .count()
    }

    pub fn push_event(&self, event: TrackingEvent) {
        self.events
            .entry(event.tracking_code.clone())
            .or_default()
            .push(event);
    }

    /// Events for a tracking code, ascending by timestamp. Empty when the
    /// code has never been seen.
    pub fn events_for_code(&self, tracking_code: &str) -> Vec<TrackingEvent> {
        let mut events = self
            .events
            .get(tracking_code)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        events.sort_by_key(|event| event.timestamp);
        events
    }
}
