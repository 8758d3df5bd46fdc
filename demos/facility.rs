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

//! Walks a two-floor facility through a morning of arrivals and departures.
//!
//! Run with `RUST_LOG=slotlock=debug cargo run --example facility` to see slot choices.

use chrono::{TimeDelta, Utc};
use slotlock::{
    FacilityConfig, ManualClock, ParkingError, ParkingService, Ticket, Vehicle, VehicleCategory,
};
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LAYOUT: &str = r#"
[pricing]
rate = 50
unit_minutes = 60

[[floors]]
id = 1
slots = [
    { id = 6, category = "bike" },
    { id = 3, category = "car" },
    { id = 1, category = "car" },
]

[[floors]]
id = 2
slots = [
    { id = 2, category = "car" },
    { id = 4, category = "bike" },
    { id = 5, category = "bike" },
]
"#;

fn arrive(service: &ParkingService, vehicle: Vehicle) -> Result<Option<Ticket>, ParkingError> {
    match service.park(vehicle) {
        Ok(ticket) => Ok(Some(ticket)),
        Err(ParkingError::NoSlotAvailable { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let clock = Arc::new(ManualClock::new(Utc::now()));
    let config = FacilityConfig::from_toml_str(LAYOUT)?;
    let service = ParkingService::from_config(&config)?.with_clock(clock.clone());

    let cars = ["KA-123-456-89", "UP-92-123-456", "UP-92-123-457", "UP-92-123-458"];
    let bikes = ["KA-987-65-432", "UP-92-987-65", "KA-987-65-431", "UP-92-987-66"];

    let car_tickets = cars
        .iter()
        .map(|plate| arrive(&service, Vehicle::car(*plate)))
        .collect::<Result<Vec<_>, _>>()?;

    clock.advance(TimeDelta::minutes(95));
    if let Some(ticket) = &car_tickets[0] {
        let fee = service.unpark(ticket)?;
        info!(plate = %ticket.vehicle().id(), %fee, "first car leaves");
    }
    if arrive(&service, Vehicle::car(cars[3]))?.is_none() {
        warn!(plate = cars[3], "still no room");
    }

    let bike_tickets = bikes
        .iter()
        .map(|plate| arrive(&service, Vehicle::bike(*plate)))
        .collect::<Result<Vec<_>, _>>()?;

    clock.advance(TimeDelta::minutes(20));
    if let Some(ticket) = &bike_tickets[1] {
        let fee = service.unpark(ticket)?;
        info!(plate = %ticket.vehicle().id(), %fee, "second bike leaves");
    }
    arrive(&service, Vehicle::bike(bikes[3]))?;

    for snapshot in service.occupancy() {
        info!(
            floor = %snapshot.floor,
            slot = %snapshot.slot,
            category = %snapshot.category,
            occupant = ?snapshot.occupant,
            "final occupancy"
        );
    }
    info!(
        cars = service.available(VehicleCategory::Car),
        bikes = service.available(VehicleCategory::Bike),
        tickets = service.active_tickets(),
        "free slots remaining"
    );
    Ok(())
}
