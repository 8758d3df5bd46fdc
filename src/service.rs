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

//! The parking service: park, unpark and occupancy queries.

use crate::clock::{Clock, SystemClock};
use crate::config::FacilityConfig;
use crate::floor::{Floor, FloorId};
use crate::pricing::{Fee, HourlyPricing, PricingPolicy};
use crate::result::{ConfigError, ConfigResult, InvariantViolation, ParkingError, ParkingResult};
use crate::slot::{Slot, SlotGuard, SlotId, SlotStatus};
use crate::strategy::{AllocationStrategy, NearestSlotStrategy};
use crate::ticket::{Ticket, TicketId, TicketStore};
use crate::vehicle::{Vehicle, VehicleCategory, VehicleId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{error, info, warn};

/// A parking facility accepting concurrent arrivals and departures.
///
/// The service owns its floors, its live tickets, its allocation strategy, its pricing policy
/// and its clock. Nothing is shared between instances. Wrap it in an [`Arc`] to drive it from
/// several threads.
///
/// A slot is occupied if and only if exactly one live ticket names it. Both halves of that
/// pairing change while the slot's lock is held.
///
/// # Examples
///
/// ```rust
/// use slotlock::{
///     Floor, FloorId, HourlyPricing, NearestSlotStrategy, ParkingError, ParkingService, Slot,
///     SlotId, Vehicle, VehicleCategory,
/// };
///
/// let floors = vec![Floor::new(
///     FloorId::new(1),
///     vec![Slot::new(SlotId::new(1), VehicleCategory::Car)],
/// )];
/// let service =
///     ParkingService::new(floors, NearestSlotStrategy, HourlyPricing::per_hour(50)).unwrap();
///
/// let ticket = service.park(Vehicle::car("KA-01")).unwrap();
/// assert_eq!(ticket.slot_id(), SlotId::new(1));
///
/// // The only car slot is taken
/// assert!(matches!(
///     service.park(Vehicle::car("KA-02")),
///     Err(ParkingError::NoSlotAvailable { .. })
/// ));
///
/// let fee = service.unpark(&ticket).unwrap();
/// assert_eq!(fee.amount(), 50);
/// ```
pub struct ParkingService<S = NearestSlotStrategy, P = HourlyPricing> {
    floors: Vec<Floor>,
    index: HashMap<SlotId, (usize, usize)>,
    tickets: TicketStore,
    strategy: S,
    pricing: P,
    clock: Arc<dyn Clock>,
}

impl ParkingService {
    /// Builds a first-fit, hourly-priced facility from a configuration, on the system clock.
    pub fn from_config(config: &FacilityConfig) -> ConfigResult<Self> {
        let pricing = config.pricing.build()?;
        Self::new(config.build_floors(), NearestSlotStrategy, pricing)
    }
}

impl<S: AllocationStrategy, P: PricingPolicy> ParkingService<S, P> {
    /// Creates a facility over `floors`, using the system clock.
    ///
    /// Fails if a floor or slot id repeats, or if there are no slots at all.
    pub fn new(floors: Vec<Floor>, strategy: S, pricing: P) -> ConfigResult<Self> {
        let mut floor_ids = HashSet::new();
        let mut index = HashMap::new();
        for (floor_pos, floor) in floors.iter().enumerate() {
            if !floor_ids.insert(floor.id()) {
                return Err(ConfigError::DuplicateFloor(floor.id()));
            }
            for (slot_pos, slot) in floor.iter().enumerate() {
                if index.insert(slot.id(), (floor_pos, slot_pos)).is_some() {
                    return Err(ConfigError::DuplicateSlot(slot.id()));
                }
            }
        }
        if index.is_empty() {
            return Err(ConfigError::EmptyFacility);
        }

        Ok(Self {
            floors,
            index,
            tickets: TicketStore::new(),
            strategy,
            pricing,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replaces the clock used for entry and exit timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Parks `vehicle` in a free slot of its category and returns its ticket.
    ///
    /// Returns [`ParkingError::NoSlotAvailable`] if every matching slot is occupied or
    /// momentarily contended. Returns [`ParkingError::InvariantViolation`] if the strategy hands
    /// back a slot that is occupied or of the wrong category. The slot lock taken by the
    /// strategy is released on every path.
    pub fn park(&self, vehicle: Vehicle) -> ParkingResult<Ticket> {
        let category = vehicle.category();
        let Some(mut guard) = self.strategy.allocate(&self.floors, category) else {
            warn!(vehicle = %vehicle.id(), %category, "no slot available");
            return Err(ParkingError::NoSlotAvailable { category });
        };

        if guard.category() != category {
            let violation = InvariantViolation::CategoryMismatch {
                slot: guard.id(),
                accepted: guard.category(),
                requested: category,
            };
            error!(%violation, "strategy returned an unsuitable slot");
            return Err(violation.into());
        }
        if !guard.is_free() {
            let violation = InvariantViolation::SlotOccupied(guard.id());
            error!(%violation, "strategy returned an unsuitable slot");
            return Err(violation.into());
        }

        let ticket = Ticket::issue(guard.id(), vehicle, self.clock.now());
        let ticket = self.commit(&mut guard, ticket)?;

        info!(
            vehicle = %ticket.vehicle().id(),
            %category,
            slot = %ticket.slot_id(),
            ticket = %ticket.id(),
            "vehicle parked"
        );
        Ok(ticket)
    }

    /// Occupies the locked slot and records `ticket` for it.
    ///
    /// If the ticket cannot be recorded the slot is vacated again before the error is returned,
    /// so a failed park never leaves an occupied slot without a ticket.
    fn commit(&self, guard: &mut SlotGuard<'_>, ticket: Ticket) -> ParkingResult<Ticket> {
        guard.occupy(ticket.vehicle().clone())?;
        if let Err(err) = self.tickets.insert(ticket.clone()) {
            error!(ticket = %ticket.id(), error = %err, "could not record ticket, rolling back");
            guard.vacate()?;
            return Err(err);
        }
        Ok(ticket)
    }

    /// Redeems `ticket`, frees its slot and returns the fee for the stay.
    ///
    /// Returns [`ParkingError::InvalidTicket`] if the ticket is unknown or was already redeemed,
    /// including by a concurrent call. Returns [`ParkingError::Pricing`] if the fee cannot be
    /// computed; the vehicle then stays parked and the ticket stays valid.
    pub fn unpark(&self, ticket: &Ticket) -> ParkingResult<Fee> {
        let id = ticket.id();
        // The stored record is authoritative; the caller's copy only supplies the id
        let Some(record) = self.tickets.get(&id) else {
            warn!(ticket = %id, "invalid or expired ticket");
            return Err(ParkingError::InvalidTicket(id));
        };
        let slot = self
            .slot(&record.slot_id())
            .ok_or(InvariantViolation::UnknownSlot(record.slot_id()))?;

        let mut guard = slot.lock();

        // A racing unpark of the same ticket may have retired it while we waited for the lock
        if !self.tickets.contains(&id) {
            warn!(ticket = %id, "ticket redeemed concurrently");
            return Err(ParkingError::InvalidTicket(id));
        }
        if guard.occupant().map(Vehicle::id) != Some(record.vehicle().id()) {
            let violation = InvariantViolation::OccupantMismatch {
                slot: slot.id(),
                expected: record.vehicle().id().clone(),
                found: guard.occupant().map(|v| v.id().clone()),
            };
            error!(%violation, ticket = %id, "slot does not hold the ticketed vehicle");
            return Err(violation.into());
        }

        let fee = self.pricing.price(record.entry_time(), self.clock.now())?;
        guard.vacate()?;
        self.tickets.remove(&id);

        info!(
            vehicle = %record.vehicle().id(),
            slot = %slot.id(),
            entry = %record.entry_time(),
            %fee,
            "vehicle unparked"
        );
        Ok(fee)
    }

    /// Returns the live ticket with the given id.
    #[must_use]
    pub fn ticket(&self, id: &TicketId) -> Option<Ticket> {
        self.tickets.get(id)
    }

    /// Returns the number of live tickets.
    #[must_use]
    pub fn active_tickets(&self) -> usize {
        self.tickets.len()
    }

    /// Counts free slots of `category`.
    ///
    /// Each slot is locked briefly in turn, so under concurrent traffic the count is a
    /// snapshot rather than a reservation.
    #[must_use]
    pub fn available(&self, category: VehicleCategory) -> usize {
        self.floors
            .iter()
            .flat_map(Floor::iter)
            .filter(|slot| slot.category() == category && slot.status() == SlotStatus::Free)
            .count()
    }

    /// Returns the state of every slot in scan order.
    #[must_use]
    pub fn occupancy(&self) -> Vec<SlotSnapshot> {
        self.floors
            .iter()
            .flat_map(|floor| {
                floor.iter().map(move |slot| {
                    let guard = slot.lock();
                    SlotSnapshot {
                        floor: floor.id(),
                        slot: slot.id(),
                        category: slot.category(),
                        status: guard.status(),
                        occupant: guard.occupant().map(|v| v.id().clone()),
                    }
                })
            })
            .collect()
    }

    /// Returns the facility's floors in scan order.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Looks a slot up by id.
    #[must_use]
    pub fn slot(&self, id: &SlotId) -> Option<&Slot> {
        let &(floor, slot) = self.index.get(id)?;
        self.floors.get(floor)?.slots().get(slot)
    }
}

impl<S, P> std::fmt::Debug for ParkingService<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkingService")
            .field("floors", &self.floors.len())
            .field("slots", &self.index.len())
            .field("tickets", &self.tickets.len())
            .finish_non_exhaustive()
    }
}

/// Point-in-time view of one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotSnapshot {
    /// Floor holding the slot.
    pub floor: FloorId,
    /// The slot.
    pub slot: SlotId,
    /// Category the slot accepts.
    pub category: VehicleCategory,
    /// Whether a vehicle is parked.
    pub status: SlotStatus,
    /// The parked vehicle, if any.
    pub occupant: Option<VehicleId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{TimeDelta, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Barrier, Mutex};
    use std::thread;

    fn single_car_slot() -> Vec<Floor> {
        vec![Floor::new(
            FloorId::new(1),
            vec![Slot::new(SlotId::new(1), VehicleCategory::Car)],
        )]
    }

    fn car_slots(count: u32) -> Vec<Floor> {
        vec![Floor::new(
            FloorId::new(1),
            (1..=count)
                .map(|id| Slot::new(SlotId::new(id), VehicleCategory::Car))
                .collect(),
        )]
    }

    fn manual_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        ))
    }

    /// Every occupied slot has exactly one live ticket and every free slot has none.
    fn assert_consistent<S: AllocationStrategy, P: PricingPolicy>(service: &ParkingService<S, P>) {
        let ticketed = service.tickets.slots();
        for snapshot in service.occupancy() {
            let tickets = ticketed.iter().filter(|&&id| id == snapshot.slot).count();
            match snapshot.status {
                SlotStatus::Occupied => assert_eq!(tickets, 1, "slot {}", snapshot.slot),
                SlotStatus::Free => assert_eq!(tickets, 0, "slot {}", snapshot.slot),
            }
        }
    }

    /// Returns the first slot of each floor no matter its state or category.
    struct CarelessStrategy;

    impl AllocationStrategy for CarelessStrategy {
        fn allocate<'a>(
            &self,
            floors: &'a [Floor],
            _category: VehicleCategory,
        ) -> Option<SlotGuard<'a>> {
            floors.first()?.slots().first().map(Slot::lock)
        }
    }

    #[test]
    fn test_scenario_single_slot_lifecycle() {
        let clock = manual_clock();
        let service =
            ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap()
                .with_clock(clock.clone());

        let t1 = service.park(Vehicle::car("A")).unwrap();
        assert_eq!(t1.slot_id(), SlotId::new(1));
        assert_eq!(t1.vehicle().id().as_str(), "A");

        let err = service.park(Vehicle::car("B")).unwrap_err();
        assert!(matches!(
            err,
            ParkingError::NoSlotAvailable {
                category: VehicleCategory::Car
            }
        ));

        clock.advance(TimeDelta::hours(2));
        assert_eq!(service.unpark(&t1).unwrap(), Fee::new(100));
        assert_eq!(service.available(VehicleCategory::Car), 1);

        let t2 = service.park(Vehicle::car("B")).unwrap();
        assert_eq!(t2.slot_id(), SlotId::new(1));
        assert_ne!(t1.id(), t2.id());

        let err = service.unpark(&t1).unwrap_err();
        assert!(matches!(err, ParkingError::InvalidTicket(id) if id == t1.id()));
        // The stale ticket did not disturb the current occupant
        assert_eq!(service.active_tickets(), 1);
        assert_eq!(
            service.slot(&SlotId::new(1)).unwrap().status(),
            SlotStatus::Occupied
        );
        assert_consistent(&service);
    }

    #[test]
    fn test_entry_time_comes_from_clock() {
        let clock = manual_clock();
        let service =
            ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap()
                .with_clock(clock.clone());
        let ticket = service.park(Vehicle::car("A")).unwrap();
        assert_eq!(ticket.entry_time(), clock.now());
        assert_eq!(service.ticket(&ticket.id()), Some(ticket));
    }

    #[test]
    fn test_short_stay_bills_one_unit() {
        let clock = manual_clock();
        let service =
            ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap()
                .with_clock(clock.clone());
        let ticket = service.park(Vehicle::car("A")).unwrap();
        clock.advance(TimeDelta::seconds(30));
        assert_eq!(service.unpark(&ticket).unwrap(), Fee::new(50));
    }

    #[test]
    fn test_no_slot_of_requested_category() {
        let floors = vec![Floor::new(
            FloorId::new(1),
            vec![Slot::new(SlotId::new(1), VehicleCategory::Bike)],
        )];
        let service =
            ParkingService::new(floors, NearestSlotStrategy, HourlyPricing::per_hour(10)).unwrap();
        let err = service.park(Vehicle::car("A")).unwrap_err();
        assert!(matches!(err, ParkingError::NoSlotAvailable { .. }));
        assert_eq!(service.available(VehicleCategory::Bike), 1);
        assert_eq!(service.active_tickets(), 0);
    }

    #[test]
    fn test_unsuitable_slot_from_strategy_is_violation_and_releases_lock() {
        let service =
            ParkingService::new(single_car_slot(), CarelessStrategy, HourlyPricing::per_hour(50))
                .unwrap();
        service.park(Vehicle::car("A")).unwrap();

        let err = service.park(Vehicle::car("B")).unwrap_err();
        assert!(matches!(
            err,
            ParkingError::InvariantViolation(InvariantViolation::SlotOccupied(_))
        ));
        let err = service.park(Vehicle::bike("C")).unwrap_err();
        assert!(matches!(
            err,
            ParkingError::InvariantViolation(InvariantViolation::CategoryMismatch { .. })
        ));

        let slot = service.slot(&SlotId::new(1)).unwrap();
        assert!(slot.try_lock().is_some());
        assert_eq!(slot.lock().occupant().unwrap().id().as_str(), "A");
        assert_eq!(service.active_tickets(), 1);
        assert_consistent(&service);
    }

    #[test]
    fn test_duplicate_ticket_rolls_back_occupancy() {
        let service = ParkingService::new(
            single_car_slot(),
            NearestSlotStrategy,
            HourlyPricing::per_hour(50),
        )
        .unwrap();
        let slot = service.slot(&SlotId::new(1)).unwrap();
        let ticket = Ticket::issue(slot.id(), Vehicle::car("KA-01"), Utc::now());
        service.tickets.insert(ticket.clone()).unwrap();

        let mut guard = slot.lock();
        let err = service.commit(&mut guard, ticket.clone()).unwrap_err();
        assert!(matches!(
            err,
            ParkingError::InvariantViolation(InvariantViolation::DuplicateTicket(id)) if id == ticket.id()
        ));
        assert!(guard.is_free());
        drop(guard);

        assert!(slot.try_lock().is_some());
        assert_eq!(slot.status(), SlotStatus::Free);
        assert_eq!(service.active_tickets(), 1);
    }

    #[test]
    fn test_pricing_failure_keeps_ticket_and_releases_lock() {
        let clock = manual_clock();
        let service =
            ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap()
                .with_clock(clock.clone());
        let ticket = service.park(Vehicle::car("A")).unwrap();

        clock.advance(TimeDelta::minutes(-10));
        let err = service.unpark(&ticket).unwrap_err();
        assert!(matches!(err, ParkingError::Pricing(_)));
        assert!(service.slot(&SlotId::new(1)).unwrap().try_lock().is_some());
        assert_eq!(service.active_tickets(), 1);

        clock.advance(TimeDelta::hours(3));
        assert_eq!(service.unpark(&ticket).unwrap(), Fee::new(141));
        assert_eq!(service.active_tickets(), 0);
    }

    #[test]
    fn test_construction_rejects_duplicates_and_empty() {
        let dup_slot = vec![
            Floor::new(
                FloorId::new(1),
                vec![Slot::new(SlotId::new(1), VehicleCategory::Car)],
            ),
            Floor::new(
                FloorId::new(2),
                vec![Slot::new(SlotId::new(1), VehicleCategory::Bike)],
            ),
        ];
        assert!(matches!(
            ParkingService::new(dup_slot, NearestSlotStrategy, HourlyPricing::per_hour(1)),
            Err(ConfigError::DuplicateSlot(id)) if id == SlotId::new(1)
        ));

        let dup_floor = vec![
            Floor::new(FloorId::new(1), vec![]),
            Floor::new(FloorId::new(1), vec![]),
        ];
        assert!(matches!(
            ParkingService::new(dup_floor, NearestSlotStrategy, HourlyPricing::per_hour(1)),
            Err(ConfigError::DuplicateFloor(_))
        ));

        assert!(matches!(
            ParkingService::new(vec![], NearestSlotStrategy, HourlyPricing::per_hour(1)),
            Err(ConfigError::EmptyFacility)
        ));
    }

    #[test]
    fn test_from_config() {
        let config = FacilityConfig::from_toml_str(
            r#"
            [pricing]
            rate = 30

            [[floors]]
            id = 1
            slots = [{ id = 1, category = "bike" }, { id = 2, category = "car" }]
            "#,
        )
        .unwrap();
        let service = ParkingService::from_config(&config).unwrap();
        assert_eq!(service.available(VehicleCategory::Car), 1);
        assert_eq!(service.available(VehicleCategory::Bike), 1);

        let ticket = service.park(Vehicle::bike("B-1")).unwrap();
        assert_eq!(ticket.slot_id(), SlotId::new(1));
        let occupancy = service.occupancy();
        assert_eq!(occupancy[0].status, SlotStatus::Occupied);
        assert_eq!(occupancy[0].occupant.as_ref().unwrap().as_str(), "B-1");
        assert_eq!(occupancy[1].status, SlotStatus::Free);
    }

    #[test]
    fn test_concurrent_park_single_slot() {
        let service = Arc::new(
            ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap(),
        );
        let barrier = Arc::new(Barrier::new(16));
        let mut handles = vec![];

        for i in 0..16 {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                service.park(Vehicle::car(format!("CAR-{i}")))
            }));
        }

        let mut parked = 0;
        for handle in handles {
            match handle.join().unwrap() {
                Ok(_) => parked += 1,
                Err(ParkingError::NoSlotAvailable { .. }) => {}
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
        assert_eq!(parked, 1);
        assert_eq!(service.active_tickets(), 1);
        assert_consistent(&service);
    }

    #[test]
    fn test_concurrent_park_fills_every_slot_once() {
        let service = Arc::new(
            ParkingService::new(car_slots(8), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap(),
        );
        let barrier = Arc::new(Barrier::new(16));
        let slots = Arc::new(Mutex::new(Vec::new()));
        let mut handles = vec![];

        for i in 0..16 {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            let slots = Arc::clone(&slots);
            handles.push(thread::spawn(move || {
                barrier.wait();
                if let Ok(ticket) = service.park(Vehicle::car(format!("CAR-{i}"))) {
                    slots.lock().unwrap().push(ticket.slot_id());
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        let slots = slots.lock().unwrap();
        let unique: HashSet<_> = slots.iter().copied().collect();
        assert_eq!(slots.len(), 8);
        assert_eq!(unique.len(), 8);
        assert_eq!(service.available(VehicleCategory::Car), 0);
        assert_consistent(&service);
    }

    #[test]
    fn test_concurrent_unpark_redeems_once() {
        let service = Arc::new(
            ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap(),
        );
        let ticket = Arc::new(service.park(Vehicle::car("A")).unwrap());
        let barrier = Arc::new(Barrier::new(8));
        let redeemed = Arc::new(AtomicUsize::new(0));
        let mut handles = vec![];

        for _ in 0..8 {
            let service = Arc::clone(&service);
            let ticket = Arc::clone(&ticket);
            let barrier = Arc::clone(&barrier);
            let redeemed = Arc::clone(&redeemed);
            handles.push(thread::spawn(move || {
                barrier.wait();
                match service.unpark(&ticket) {
                    Ok(_) => {
                        redeemed.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(ParkingError::InvalidTicket(_)) => {}
                    Err(err) => panic!("unexpected error: {err}"),
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(redeemed.load(Ordering::SeqCst), 1);
        assert_eq!(service.active_tickets(), 0);
        assert_eq!(service.available(VehicleCategory::Car), 1);
    }

    #[test]
    fn test_concurrent_park_unpark_churn() {
        let service = Arc::new(
            ParkingService::new(car_slots(4), NearestSlotStrategy, HourlyPricing::per_hour(50))
                .unwrap(),
        );
        let mut handles = vec![];

        for i in 0..8 {
            let service = Arc::clone(&service);
            handles.push(thread::spawn(move || {
                for round in 0..200 {
                    let vehicle = Vehicle::car(format!("CAR-{i}-{round}"));
                    match service.park(vehicle) {
                        Ok(ticket) => {
                            service.unpark(&ticket).unwrap();
                            assert!(matches!(
                                service.unpark(&ticket),
                                Err(ParkingError::InvalidTicket(_))
                            ));
                        }
                        Err(ParkingError::NoSlotAvailable { .. }) => thread::yield_now(),
                        Err(err) => panic!("unexpected error: {err}"),
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(service.active_tickets(), 0);
        assert_eq!(service.available(VehicleCategory::Car), 4);
        assert_consistent(&service);
    }

    #[test]
    fn test_independent_facilities() {
        let a = ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(5))
            .unwrap();
        let b = ParkingService::new(single_car_slot(), NearestSlotStrategy, HourlyPricing::per_hour(5))
            .unwrap();
        let ticket = a.park(Vehicle::car("A")).unwrap();
        assert!(matches!(
            b.unpark(&ticket),
            Err(ParkingError::InvalidTicket(_))
        ));
        assert_eq!(b.available(VehicleCategory::Car), 1);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParkingService>();
    }
}
