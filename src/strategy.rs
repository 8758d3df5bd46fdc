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

//! Slot allocation policies.

use crate::floor::Floor;
use crate::slot::SlotGuard;
use crate::vehicle::VehicleCategory;
use tracing::{debug, trace};

/// A policy that picks a free slot for an arriving vehicle.
///
/// Implementations hand back the chosen slot **still locked**. The returned [`SlotGuard`] is
/// the hand-off: from that point the caller alone is responsible for the lock, and releases it
/// by dropping the guard. The guard borrows `floors`, so it cannot outlive the facility.
///
/// An implementation should only return a slot that accepts `category` and was observed free
/// while locked. Callers re-check both.
pub trait AllocationStrategy: Send + Sync {
    /// Returns a locked, free slot accepting `category`, or `None` if there is none.
    fn allocate<'a>(&self, floors: &'a [Floor], category: VehicleCategory)
    -> Option<SlotGuard<'a>>;
}

/// First-fit allocation in floor order, then slot order.
///
/// Each candidate is tried with a non-blocking [`try_lock`](crate::Slot::try_lock). A slot
/// whose lock is held elsewhere is skipped rather than waited on, so one arrival never stalls
/// another's scan. A slot that locks but turns out occupied is released before moving on.
///
/// # Examples
///
/// ```rust
/// use slotlock::{AllocationStrategy, Floor, FloorId, NearestSlotStrategy, Slot, SlotId, VehicleCategory};
///
/// let floors = vec![Floor::new(
///     FloorId::new(1),
///     vec![
///         Slot::new(SlotId::new(1), VehicleCategory::Bike),
///         Slot::new(SlotId::new(2), VehicleCategory::Car),
///     ],
/// )];
///
/// let guard = NearestSlotStrategy.allocate(&floors, VehicleCategory::Car).unwrap();
/// assert_eq!(guard.id(), SlotId::new(2));
///
/// // The slot stays locked while the guard is held
/// assert!(floors[0].slots()[1].try_lock().is_none());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestSlotStrategy;

impl AllocationStrategy for NearestSlotStrategy {
    fn allocate<'a>(
        &self,
        floors: &'a [Floor],
        category: VehicleCategory,
    ) -> Option<SlotGuard<'a>> {
        for floor in floors {
            for slot in floor.iter().filter(|slot| slot.category() == category) {
                let Some(guard) = slot.try_lock() else {
                    trace!(slot = %slot.id(), "slot contended, skipping");
                    continue;
                };
                if guard.is_free() {
                    debug!(slot = %slot.id(), floor = %floor.id(), "found free slot");
                    return Some(guard);
                }
                // Occupied: guard drops here and the scan moves on
            }
        }
        None
    }
}
