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

//! Error types and results for the Slotlock library.

use crate::floor::FloorId;
use crate::slot::SlotId;
use crate::ticket::TicketId;
use crate::vehicle::{VehicleCategory, VehicleId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A specialized Result type for park and unpark operations.
pub type ParkingResult<T> = Result<T, ParkingError>;

/// A specialized Result type for fee computation.
pub type PricingResult<T> = Result<T, PricingError>;

/// A specialized Result type for facility construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors returned by [`ParkingService`](crate::ParkingService) operations.
#[derive(Debug, Error)]
pub enum ParkingError {
    /// No free slot of the requested category exists right now. Callers may retry later.
    #[error("no {category} slot available")]
    NoSlotAvailable {
        /// Category that was requested.
        category: VehicleCategory,
    },
    /// The ticket is unknown or has already been redeemed.
    #[error("invalid or expired ticket {0}")]
    InvalidTicket(TicketId),
    /// An internal locking or bookkeeping contract was broken.
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),
    /// The fee for a stay could not be computed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),
}

/// Breaches of the slot/ticket contract. Each one indicates a bug in a strategy or in the
/// locking discipline, never a user mistake.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `occupy` was called on a slot that already has an occupant.
    #[error("slot {0} is already occupied")]
    SlotOccupied(SlotId),
    /// `vacate` was called on a slot that has no occupant.
    #[error("slot {0} is already free")]
    SlotFree(SlotId),
    /// A strategy returned a slot that does not accept the vehicle's category.
    #[error("slot {slot} accepts {accepted}, not {requested}")]
    CategoryMismatch {
        /// Slot handed back by the strategy.
        slot: SlotId,
        /// Category the slot accepts.
        accepted: VehicleCategory,
        /// Category of the arriving vehicle.
        requested: VehicleCategory,
    },
    /// A live ticket points at a slot occupied by some other vehicle.
    #[error("slot {slot} holds {found:?}, ticket expects {expected}")]
    OccupantMismatch {
        /// Slot named by the ticket.
        slot: SlotId,
        /// Vehicle named by the ticket.
        expected: VehicleId,
        /// Vehicle actually found in the slot, if any.
        found: Option<VehicleId>,
    },
    /// A freshly minted ticket id collided with a live one.
    #[error("ticket {0} is already live")]
    DuplicateTicket(TicketId),
    /// A ticket names a slot that this facility does not contain.
    #[error("slot {0} does not exist in this facility")]
    UnknownSlot(SlotId),
}

/// Errors raised while computing a fee.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The exit timestamp precedes the entry timestamp.
    #[error("exit time {exit} is before entry time {entry}")]
    ExitBeforeEntry {
        /// Entry timestamp of the stay.
        entry: DateTime<Utc>,
        /// Exit timestamp of the stay.
        exit: DateTime<Utc>,
    },
    /// The billing unit must be a positive duration.
    #[error("billing unit must be a positive duration")]
    InvalidUnit,
}

/// Errors raised while assembling a facility.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two slots share an id.
    #[error("slot id {0} is provisioned more than once")]
    DuplicateSlot(SlotId),
    /// Two floors share an id.
    #[error("floor id {0} is provisioned more than once")]
    DuplicateFloor(FloorId),
    /// The facility has no slots at all.
    #[error("facility has no slots")]
    EmptyFacility,
    /// The pricing section is unusable.
    #[error("invalid pricing: {0}")]
    Pricing(#[from] PricingError),
    /// The configuration document could not be parsed.
    #[error("malformed facility configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
