//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Tickets and the store of live tickets.

use crate::result::{InvariantViolation, ParkingResult};
use crate::slot::SlotId;
use crate::vehicle::Vehicle;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

/// Globally unique ticket identity, a random 128-bit UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Receipt for a parked vehicle, redeemable once.
///
/// A ticket names its slot by id only. The slot belongs to its floor, and the service resolves
/// the id when the ticket is redeemed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    id: TicketId,
    slot: SlotId,
    vehicle: Vehicle,
    entry_time: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn issue(slot: SlotId, vehicle: Vehicle, entry_time: DateTime<Utc>) -> Self {
        Self {
            id: TicketId::generate(),
            slot,
            vehicle,
            entry_time,
        }
    }

    /// Returns the ticket's identity.
    #[must_use]
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the slot the vehicle was parked in.
    #[must_use]
    pub fn slot_id(&self) -> SlotId {
        self.slot
    }

    /// Returns the parked vehicle.
    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the time the vehicle was parked.
    #[must_use]
    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }
}

/// The live tickets of one facility.
///
/// A single mutex covers the whole map; it is held for one insert, lookup or removal at a time
/// and never while waiting on a slot lock.
#[derive(Debug, Default)]
pub(crate) struct TicketStore {
    live: Mutex<HashMap<TicketId, Ticket>>,
}

impl TicketStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `ticket` as live. Fails if its id is already live.
    pub(crate) fn insert(&self, ticket: Ticket) -> ParkingResult<()> {
        let mut live = self.live.lock();
        if live.contains_key(&ticket.id) {
            return Err(InvariantViolation::DuplicateTicket(ticket.id).into());
        }
        live.insert(ticket.id, ticket);
        Ok(())
    }

    pub(crate) fn get(&self, id: &TicketId) -> Option<Ticket> {
        self.live.lock().get(id).cloned()
    }

    pub(crate) fn contains(&self, id: &TicketId) -> bool {
        self.live.lock().contains_key(id)
    }

    pub(crate) fn remove(&self, id: &TicketId) -> Option<Ticket> {
        self.live.lock().remove(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.live.lock().len()
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> Vec<SlotId> {
        self.live.lock().values().map(Ticket::slot_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ParkingError;

    fn ticket() -> Ticket {
        Ticket::issue(SlotId::new(1), Vehicle::car("KA-01"), Utc::now())
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ticket();
        let b = ticket();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_insert_get_remove() {
        let store = TicketStore::new();
        let t = ticket();
        store.insert(t.clone()).unwrap();
        assert!(store.contains(&t.id()));
        assert_eq!(store.get(&t.id()), Some(t.clone()));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(&t.id()), Some(t.clone()));
        assert!(store.remove(&t.id()).is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = TicketStore::new();
        let t = ticket();
        store.insert(t.clone()).unwrap();
        let err = store.insert(t.clone()).unwrap_err();
        assert!(matches!(
            err,
            ParkingError::InvariantViolation(InvariantViolation::DuplicateTicket(id)) if id == t.id()
        ));
        assert_eq!(store.len(), 1);
    }
}
