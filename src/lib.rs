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

//! # Slotlock
//!
//! Concurrent slot allocation for parking facilities. Many arrivals compete for a shared pool
//! of slots without any slot ever being booked twice, and each booking is tracked as a ticket
//! that is redeemed exactly once for a time-based fee.
//!
//! ## Key Features
//!
//! - **Per-slot Locking**: Each slot carries its own lock; arrivals on different slots never
//!   serialize against each other
//! - **Non-blocking Search**: Allocation tries slots with `try_lock` and skips contended ones
//! - **Lock Hand-off by Guard**: The allocation strategy returns the chosen slot still locked, as
//!   a [`SlotGuard`] whose drop releases it
//! - **Single Redemption**: Tickets are checked again under the slot lock, so concurrent unparks
//!   of one ticket bill exactly once
//! - **Pluggable Policies**: Swap the [`AllocationStrategy`], [`PricingPolicy`] or [`Clock`]
//!   without touching the service
//!
//! ## Usage Examples
//!
//! ### Parking and Leaving
//!
//! ```rust
//! use chrono::{TimeDelta, Utc};
//! use slotlock::{
//!     Fee, Floor, FloorId, HourlyPricing, ManualClock, NearestSlotStrategy, ParkingError,
//!     ParkingService, Slot, SlotId, Vehicle, VehicleCategory,
//! };
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::new(Utc::now()));
//! let floors = vec![Floor::new(
//!     FloorId::new(1),
//!     vec![Slot::new(SlotId::new(1), VehicleCategory::Car)],
//! )];
//! let service = ParkingService::new(floors, NearestSlotStrategy, HourlyPricing::per_hour(50))
//!     .unwrap()
//!     .with_clock(clock.clone());
//!
//! let ticket = service.park(Vehicle::car("KA-01")).unwrap();
//! assert!(matches!(
//!     service.park(Vehicle::car("KA-02")),
//!     Err(ParkingError::NoSlotAvailable { .. })
//! ));
//!
//! clock.advance(TimeDelta::hours(2));
//! assert_eq!(service.unpark(&ticket).unwrap(), Fee::new(100));
//!
//! // A ticket is redeemed only once
//! assert!(matches!(
//!     service.unpark(&ticket),
//!     Err(ParkingError::InvalidTicket(_))
//! ));
//! ```
//!
//! ### Loading a Facility
//!
//! ```rust
//! use slotlock::{FacilityConfig, ParkingService, VehicleCategory};
//!
//! let config = FacilityConfig::from_toml_str(
//!     r#"
//!     [pricing]
//!     rate = 50
//!     unit_minutes = 60
//!
//!     [[floors]]
//!     id = 1
//!     slots = [{ id = 1, category = "car" }, { id = 2, category = "bike" }]
//!     "#,
//! )
//! .unwrap();
//!
//! let service = ParkingService::from_config(&config).unwrap();
//! assert_eq!(service.available(VehicleCategory::Bike), 1);
//! ```
//!
//! ## Error Handling
//!
//! Park and unpark return `ParkingResult<T>` which can contain the following errors:
//!
//! - `ParkingError::NoSlotAvailable`: No free slot of the vehicle's category right now
//! - `ParkingError::InvalidTicket`: The ticket is unknown or already redeemed
//! - `ParkingError::InvariantViolation`: A strategy or bookkeeping contract was broken
//! - `ParkingError::Pricing`: The fee could not be computed; nothing was changed
//!
//! ## Thread Safety
//!
//! [`ParkingService`] is `Send` and `Sync`. Slot locks are `parking_lot` mutexes and do not
//! poison, so a panic while a [`SlotGuard`] is held still releases the slot.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod clock;
mod config;
mod floor;
mod pricing;
mod result;
mod service;
mod slot;
mod strategy;
mod ticket;
mod vehicle;

pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::config::{FacilityConfig, FloorConfig, PricingConfig, SlotConfig};
pub use self::floor::{Floor, FloorId};
pub use self::pricing::{Fee, HourlyPricing, PricingPolicy, Rounding};
pub use self::result::{
    ConfigError, ConfigResult, InvariantViolation, ParkingError, ParkingResult, PricingError,
    PricingResult,
};
pub use self::service::{ParkingService, SlotSnapshot};
pub use self::slot::{Slot, SlotGuard, SlotId, SlotStatus};
pub use self::strategy::{AllocationStrategy, NearestSlotStrategy};
pub use self::ticket::{Ticket, TicketId};
pub use self::vehicle::{Vehicle, VehicleCategory, VehicleId};
