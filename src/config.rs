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

//! Facility layout and pricing as loaded from TOML.
//!
//! ```toml
//! [pricing]
//! rate = 50
//! unit_minutes = 60
//! rounding = "prorated"
//!
//! [[floors]]
//! id = 1
//! slots = [
//!     { id = 1, category = "car" },
//!     { id = 2, category = "bike" },
//! ]
//! ```

use crate::floor::{Floor, FloorId};
use crate::pricing::{HourlyPricing, Rounding};
use crate::result::ConfigResult;
use crate::slot::{Slot, SlotId};
use crate::vehicle::VehicleCategory;
use chrono::TimeDelta;
use serde::Deserialize;

/// A complete facility description.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FacilityConfig {
    /// Fee schedule.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Floors in scan order.
    pub floors: Vec<FloorConfig>,
}

/// One floor and its slots in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FloorConfig {
    /// Floor identity.
    pub id: FloorId,
    /// Slots in scan order.
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

/// One provisioned slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SlotConfig {
    /// Slot identity, unique across the facility.
    pub id: SlotId,
    /// Category the slot accepts.
    pub category: VehicleCategory,
}

/// Rate card for [`HourlyPricing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Amount charged per unit.
    pub rate: u64,
    /// Length of one billing unit in minutes.
    pub unit_minutes: i64,
    /// How partial units are charged.
    pub rounding: Rounding,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate: 50,
            unit_minutes: 60,
            rounding: Rounding::Prorated,
        }
    }
}

impl FacilityConfig {
    /// Parses a facility description from TOML.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Builds the floors described by this configuration.
    #[must_use]
    pub fn build_floors(&self) -> Vec<Floor> {
        self.floors
            .iter()
            .map(|floor| {
                let slots = floor
                    .slots
                    .iter()
                    .map(|slot| Slot::new(slot.id, slot.category))
                    .collect();
                Floor::new(floor.id, slots)
            })
            .collect()
    }
}

impl PricingConfig {
    /// Builds the pricing policy described by this rate card.
    pub fn build(&self) -> ConfigResult<HourlyPricing> {
        let unit = TimeDelta::try_minutes(self.unit_minutes).unwrap_or(TimeDelta::zero());
        Ok(HourlyPricing::new(self.rate, unit)?.with_rounding(self.rounding))
    }
}
