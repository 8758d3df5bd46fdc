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

//! Vehicles and the categories used to match them against slots.

use serde::Deserialize;

/// The kind of slot a vehicle needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Passenger cars.
    Car,
    /// Motorbikes and bicycles.
    Bike,
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleCategory::Car => write!(f, "car"),
            VehicleCategory::Bike => write!(f, "bike"),
        }
    }
}

/// Caller-supplied vehicle identity, typically a licence plate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VehicleId(String);

impl VehicleId {
    /// Wraps a plate or other identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A vehicle arriving at or leaving the facility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    category: VehicleCategory,
}

impl Vehicle {
    /// Creates a vehicle of the given category.
    pub fn new(id: impl Into<String>, category: VehicleCategory) -> Self {
        Self {
            id: VehicleId::new(id),
            category,
        }
    }

    /// Creates a [`VehicleCategory::Car`].
    pub fn car(id: impl Into<String>) -> Self {
        Self::new(id, VehicleCategory::Car)
    }

    /// Creates a [`VehicleCategory::Bike`].
    pub fn bike(id: impl Into<String>) -> Self {
        Self::new(id, VehicleCategory::Bike)
    }

    /// Returns the vehicle's identity.
    #[must_use]
    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Returns the category used to filter eligible slots.
    #[must_use]
    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}
