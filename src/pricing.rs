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

//! Fee computation for completed stays.

use crate::result::{PricingError, PricingResult};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

/// An amount charged for a stay, in whole currency units.
///
/// Amounts are integral: prorated charges are truncated toward zero, so 61 minutes at 50 per
/// hour is a fee of 50, not 50.83.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fee(u64);

impl Fee {
    /// Wraps an amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Fee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a stay to the fee owed for it.
///
/// Implementations are pure: no shared state, so they need no locking of their own.
pub trait PricingPolicy: Send + Sync {
    /// Returns the fee for a stay from `entry` to `exit`.
    ///
    /// Fails with [`PricingError::ExitBeforeEntry`] if `exit` precedes `entry`.
    fn price(&self, entry: DateTime<Utc>, exit: DateTime<Utc>) -> PricingResult<Fee>;
}

/// How partial billing units are charged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Charge for the exact elapsed time, truncated to a whole currency unit.
    #[default]
    Prorated,
    /// Charge every started unit in full.
    PerStartedUnit,
}

/// A flat rate per billing unit with a one-unit minimum.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeDelta, Utc};
/// use slotlock::{Fee, HourlyPricing, PricingPolicy};
///
/// let pricing = HourlyPricing::per_hour(50);
/// let entry = Utc::now();
///
/// // Short stays are billed as one full hour
/// assert_eq!(pricing.price(entry, entry + TimeDelta::minutes(5)).unwrap(), Fee::new(50));
/// assert_eq!(pricing.price(entry, entry + TimeDelta::hours(2)).unwrap(), Fee::new(100));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourlyPricing {
    rate: u64,
    unit: TimeDelta,
    rounding: Rounding,
}

impl HourlyPricing {
    /// Creates a policy charging `rate` per `unit`, prorated.
    ///
    /// Fails with [`PricingError::InvalidUnit`] unless `unit` is at least one millisecond.
    pub fn new(rate: u64, unit: TimeDelta) -> PricingResult<Self> {
        if unit.num_milliseconds() <= 0 {
            return Err(PricingError::InvalidUnit);
        }
        Ok(Self {
            rate,
            unit,
            rounding: Rounding::default(),
        })
    }

    /// Creates a policy charging `rate` per hour, prorated.
    #[must_use]
    pub fn per_hour(rate: u64) -> Self {
        Self {
            rate,
            unit: TimeDelta::hours(1),
            rounding: Rounding::default(),
        }
    }

    /// Sets how partial units are charged.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Returns the rate charged per unit.
    #[must_use]
    pub fn rate(&self) -> u64 {
        self.rate
    }

    /// Returns the billing unit.
    #[must_use]
    pub fn unit(&self) -> TimeDelta {
        self.unit
    }
}

impl PricingPolicy for HourlyPricing {
    fn price(&self, entry: DateTime<Utc>, exit: DateTime<Utc>) -> PricingResult<Fee> {
        if exit < entry {
            return Err(PricingError::ExitBeforeEntry { entry, exit });
        }
        let elapsed = (exit - entry).num_milliseconds();

        // Both are positive here: `unit` is validated on construction
        let unit = u128::from(self.unit.num_milliseconds().unsigned_abs());
        let billable = u128::from(elapsed.unsigned_abs()).max(unit);
        let rate = u128::from(self.rate);

        let amount = match self.rounding {
            Rounding::Prorated => rate * billable / unit,
            Rounding::PerStartedUnit => rate * billable.div_ceil(unit),
        };
        Ok(Fee(u64::try_from(amount).unwrap_or(u64::MAX)))
    }
}
