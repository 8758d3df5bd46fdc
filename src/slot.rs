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

//! Implementation of a single lockable parking slot.

use crate::result::{InvariantViolation, ParkingResult};
use crate::vehicle::{Vehicle, VehicleCategory};
use parking_lot::{Mutex, MutexGuard};
use serde::Deserialize;
use tracing::trace;

/// Stable identity of a slot, unique within a facility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SlotId(u32);

impl SlotId {
    /// Wraps a provisioned slot number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Occupancy of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    /// No vehicle is parked.
    Free,
    /// A vehicle is parked.
    Occupied,
}

/// One physical parking space.
///
/// The slot owns the only lock protecting its occupant. The status is derived from whether an
/// occupant is recorded, so the two can never disagree. All state changes go through a
/// [`SlotGuard`], which holds the lock for as long as it lives.
///
/// # Examples
///
/// ```rust
/// use slotlock::{Slot, SlotId, Vehicle, VehicleCategory};
///
/// let slot = Slot::new(SlotId::new(1), VehicleCategory::Car);
///
/// let mut guard = slot.try_lock().unwrap();
/// assert!(guard.is_free());
/// guard.occupy(Vehicle::car("KA-01")).unwrap();
///
/// // The lock is held until the guard goes away
/// assert!(slot.try_lock().is_none());
/// drop(guard);
/// assert!(slot.try_lock().is_some());
/// ```
pub struct Slot {
    id: SlotId,
    category: VehicleCategory,
    occupant: Mutex<Option<Vehicle>>,
}

impl Slot {
    /// Creates a free slot accepting vehicles of `category`.
    #[must_use]
    pub fn new(id: SlotId, category: VehicleCategory) -> Self {
        Self {
            id,
            category,
            occupant: Mutex::new(None),
        }
    }

    /// Returns the slot's identity.
    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the category this slot accepts.
    #[must_use]
    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Attempts to acquire the slot's lock without blocking.
    ///
    /// Returns `None` immediately if another thread holds the lock.
    pub fn try_lock(&self) -> Option<SlotGuard<'_>> {
        let occupant = self.occupant.try_lock()?;
        trace!(slot = %self.id, "slot lock acquired");
        Some(SlotGuard {
            slot: self,
            occupant,
        })
    }

    /// Acquires the slot's lock, blocking until it is released by its current holder.
    pub fn lock(&self) -> SlotGuard<'_> {
        let occupant = self.occupant.lock();
        trace!(slot = %self.id, "slot lock acquired");
        SlotGuard {
            slot: self,
            occupant,
        }
    }

    /// Returns a snapshot of the slot's status.
    ///
    /// Takes the lock briefly, so the answer may be stale as soon as it is returned. Decisions
    /// must be made through a [`SlotGuard`] instead.
    pub fn status(&self) -> SlotStatus {
        self.lock().status()
    }
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("id", &self.id)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// A RAII guard holding a slot's lock.
///
/// The guard is the only handle through which a slot's occupancy can be read or changed. When
/// it is dropped the lock is released. Guards may be handed from an
/// [`AllocationStrategy`](crate::AllocationStrategy) to its caller, which then owns the release.
#[must_use = "dropping the guard releases the slot immediately"]
pub struct SlotGuard<'a> {
    slot: &'a Slot,
    occupant: MutexGuard<'a, Option<Vehicle>>,
}

impl SlotGuard<'_> {
    /// Returns the locked slot's identity.
    #[must_use]
    pub fn id(&self) -> SlotId {
        self.slot.id
    }

    /// Returns the category the locked slot accepts.
    #[must_use]
    pub fn category(&self) -> VehicleCategory {
        self.slot.category
    }

    /// Returns `true` if no vehicle is parked in the slot.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// Returns the slot's current status.
    #[must_use]
    pub fn status(&self) -> SlotStatus {
        if self.is_free() {
            SlotStatus::Free
        } else {
            SlotStatus::Occupied
        }
    }

    /// Returns the vehicle parked in the slot, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    /// Parks `vehicle` in the slot.
    ///
    /// Fails with [`InvariantViolation::SlotOccupied`] if the slot already has an occupant; the
    /// existing occupant is left in place.
    pub fn occupy(&mut self, vehicle: Vehicle) -> ParkingResult<()> {
        if self.occupant.is_some() {
            return Err(InvariantViolation::SlotOccupied(self.slot.id).into());
        }
        *self.occupant = Some(vehicle);
        Ok(())
    }

    /// Removes and returns the vehicle parked in the slot.
    ///
    /// Fails with [`InvariantViolation::SlotFree`] if the slot is already free.
    pub fn vacate(&mut self) -> ParkingResult<Vehicle> {
        self.occupant
            .take()
            .ok_or_else(|| InvariantViolation::SlotFree(self.slot.id).into())
    }

    /// Releases the lock. Equivalent to dropping the guard.
    pub fn unlock(self) {
        drop(self);
    }
}

impl std::fmt::Debug for SlotGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlotGuard {{ slot: {}, status: {:?} }}", self.slot.id, self.status())
    }
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        trace!(slot = %self.slot.id, "slot lock released");
    }
}
