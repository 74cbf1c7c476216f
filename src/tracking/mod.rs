//! Shipment tracking ledger.
//!
//! An append-only, time-ordered event log per tracking code. A shipment's
//! current status is the status of its latest event; each append also
//! mirrors the status onto the shipment record. Status strings are free-form
//! and never validated against a transition table; staff can record any
//! progression, including repeats.

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::tracking::TrackingEvent;
use crate::store::Store;

pub const STATUS_ORDER_PLACED: &str = "order_placed";
pub const STATUS_DELIVERED: &str = "delivered";

const INITIAL_EVENT_NOTES: &str = "Order has been placed successfully";

/// Append a status event and mirror the status onto the shipment.
///
/// The event append and the shipment update are two separate writes; a crash
/// between them leaves the shipment's status one event behind the ledger.
pub fn append_event(
    store: &Store,
    tracking_code: &str,
    status: &str,
    location: &str,
    notes: &str,
    actor_id: Option<Uuid>,
) -> Result<TrackingEvent, AppError> {
    let shipment = store
        .find_shipment_by_code(tracking_code)
        .ok_or_else(|| AppError::NotFound(format!("shipment {tracking_code} not found")))?;

    let event = TrackingEvent {
        tracking_code: tracking_code.to_string(),
        shipment_id: shipment.shipment_id,
        status: status.to_string(),
        location: location.to_string(),
        timestamp: Utc::now(),
        notes: notes.to_string(),
        actor_id,
    };

    store.push_event(event.clone());
    store.update_shipment_status(tracking_code, status);

    Ok(event)
}

/// Seed the ledger at booking time with the fixed "order placed" event.
pub fn create_initial(
    store: &Store,
    tracking_code: &str,
    shipment_id: Uuid,
    origin_location: &str,
) -> TrackingEvent {
    let event = TrackingEvent {
        tracking_code: tracking_code.to_string(),
        shipment_id,
        status: STATUS_ORDER_PLACED.to_string(),
        location: origin_location.to_string(),
        timestamp: Utc::now(),
        notes: INITIAL_EVENT_NOTES.to_string(),
        actor_id: None,
    };

    store.push_event(event.clone());
    event
}

/// Full event history for a tracking code, ascending by timestamp.
/// Unknown codes yield an empty history, not an error.
pub fn replay_history(store: &Store, tracking_code: &str) -> Vec<TrackingEvent> {
    store.events_for_code(tracking_code)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{append_event, create_initial, replay_history, STATUS_ORDER_PLACED};
    use crate::models::shipment::{Address, PackageDetails, Shipment};
    use crate::store::Store;

    fn address(city: &str) -> Address {
        Address {
            name: "Test Sender".to_string(),
            phone: "9999999999".to_string(),
            address: "1 Test Street".to_string(),
            city: city.to_string(),
            state: "MH".to_string(),
            postal_code: "400001".to_string(),
            country: "India".to_string(),
        }
    }

    fn shipment(tracking_code: &str) -> Shipment {
        let now = Utc::now();
        Shipment {
            shipment_id: Uuid::new_v4(),
            tracking_code: tracking_code.to_string(),
            owner_id: Uuid::new_v4(),
            sender: address("Mumbai"),
            receiver: address("Pune"),
            package: PackageDetails {
                kind: "parcel".to_string(),
                weight_kg: 2.0,
                length_cm: 30.0,
                width_cm: 20.0,
                height_cm: 10.0,
                description: "books".to_string(),
            },
            service_tier: "standard".to_string(),
            pickup_date: "2025-07-01".to_string(),
            distance_km: 120.0,
            price: 380.0,
            status: STATUS_ORDER_PLACED.to_string(),
            created_at: now,
            estimated_delivery: now + chrono::Duration::days(3),
        }
    }

    #[test]
    fn initial_event_is_order_placed_at_origin() {
        let store = Store::new();
        let s = shipment("CD100001");
        store.insert_shipment(s.clone()).unwrap();

        let event = create_initial(&store, &s.tracking_code, s.shipment_id, &s.sender.city);

        assert_eq!(event.status, STATUS_ORDER_PLACED);
        assert_eq!(event.location, "Mumbai");
        assert!(event.actor_id.is_none());

        let history = replay_history(&store, "CD100001");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn append_updates_shipment_status_to_latest() {
        let store = Store::new();
        let s = shipment("CD100002");
        store.insert_shipment(s.clone()).unwrap();
        create_initial(&store, &s.tracking_code, s.shipment_id, &s.sender.city);

        let agent = Uuid::new_v4();
        append_event(&store, "CD100002", "picked_up", "Mumbai", "", Some(agent)).unwrap();
        append_event(&store, "CD100002", "in_transit", "Pune", "on highway", Some(agent)).unwrap();

        let updated = store.find_shipment_by_code("CD100002").unwrap();
        assert_eq!(updated.status, "in_transit");
    }

    #[test]
    fn history_is_ascending_and_complete() {
        let store = Store::new();
        let s = shipment("CD100003");
        store.insert_shipment(s.clone()).unwrap();
        create_initial(&store, &s.tracking_code, s.shipment_id, &s.sender.city);

        for status in ["picked_up", "in_transit", "out_for_delivery", "delivered"] {
            append_event(&store, "CD100003", status, "Pune", "", None).unwrap();
        }

        let history = replay_history(&store, "CD100003");
        assert_eq!(history.len(), 5);
        assert_eq!(history.last().unwrap().status, "delivered");
        for pair in history.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn repeated_and_out_of_order_statuses_are_accepted() {
        let store = Store::new();
        let s = shipment("CD100004");
        store.insert_shipment(s.clone()).unwrap();

        append_event(&store, "CD100004", "delivered", "Pune", "", None).unwrap();
        append_event(&store, "CD100004", "picked_up", "Mumbai", "", None).unwrap();
        append_event(&store, "CD100004", "picked_up", "Mumbai", "again", None).unwrap();

        let history = replay_history(&store, "CD100004");
        assert_eq!(history.len(), 3);
        assert_eq!(
            store.find_shipment_by_code("CD100004").unwrap().status,
            "picked_up"
        );
    }

    #[test]
    fn append_for_unknown_code_is_not_found() {
        let store = Store::new();
        let err = append_event(&store, "CD999999", "picked_up", "Pune", "", None).unwrap_err();
        assert!(matches!(err, crate::error::AppError::NotFound(_)));
    }

    #[test]
    fn history_for_unknown_code_is_empty() {
        let store = Store::new();
        assert!(replay_history(&store, "CD000000").is_empty());
    }
}
