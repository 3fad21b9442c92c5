// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 DriverLog Pro Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

use crate::error::{Error, Result};

/// Trip parameters collected from the driver.
///
/// Serializes directly to the planning request body.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct TripForm {
    /// Where the truck currently is, as free-form text (e.g. "Green Bay, WI").
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already used in the current 70h/8d cycle.
    pub cycle_used: f64,
}

impl TripForm {
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        cycle_used: f64,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            cycle_used,
        }
    }

    /// Validates the form before dispatch.
    ///
    /// All three locations must be non-empty and the cycle hours a
    /// finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("current location", &self.current_location),
            ("pickup location", &self.pickup_location),
            ("dropoff location", &self.dropoff_location),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::InvalidInput(format!("{} must not be empty", name)));
            }
        }

        if !self.cycle_used.is_finite() || self.cycle_used < 0.0 {
            return Err(Error::InvalidInput(format!(
                "cycle hours must be a non-negative number, got {}",
                self.cycle_used
            )));
        }

        Ok(())
    }
}
