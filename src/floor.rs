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

//! Floors: ordered containers of slots.

use crate::slot::Slot;
use serde::Deserialize;

/// Identity of a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct FloorId(u32);

impl FloorId {
    /// Wraps a provisioned floor number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FloorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// An ordered sequence of slots. Slot order is the order strategies scan in.
#[derive(Debug)]
pub struct Floor {
    id: FloorId,
    slots: Vec<Slot>,
}

impl Floor {
    /// Creates a floor owning `slots` in the given order.
    #[must_use]
    pub fn new(id: FloorId, slots: Vec<Slot>) -> Self {
        Self { id, slots }
    }

    /// Returns the floor's identity.
    #[must_use]
    pub fn id(&self) -> FloorId {
        self.id
    }

    /// Returns the floor's slots in scan order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterates the floor's slots in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Returns the number of slots on the floor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the floor has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<'a> IntoIterator for &'a Floor {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
