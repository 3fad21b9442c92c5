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

use log::{debug, warn};

use super::{PlanResponse, PlanService, TripForm};
use crate::error::{Error, Result};
use crate::map::{MapSurface, PolylineStyle, RouteMapProjector};

/// Message shown to the user when a plan request fails.
///
/// The upstream error detail goes to the log, not to the user.
pub const PLAN_FAILURE_MESSAGE: &str =
    "Failed to generate plan. Please check inputs and server connection.";

/// Coordinates the request/response cycle and owns the displayed state.
///
/// One request is in flight at a time: [`begin_submit`] refuses a new
/// submission until the previous one settled, which is how the submit
/// control stays disabled while loading. The displayed state always
/// reflects the most recently settled request; a success replaces it in
/// full, a failure clears it and leaves a single human-readable message.
///
/// [`begin_submit`]: Self::begin_submit
#[derive(Debug, Default)]
pub struct TripPlanner {
    projector: RouteMapProjector,
    response: Option<PlanResponse>,
    error: Option<String>,
    in_flight: bool,
}

impl TripPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner rendering routes with the given style.
    pub fn with_style(style: PolylineStyle) -> Self {
        Self {
            projector: RouteMapProjector::with_style(style),
            ..Self::default()
        }
    }

    /// The currently displayed plan.
    pub fn response(&self) -> Option<&PlanResponse> {
        self.response.as_ref()
    }

    /// The currently displayed failure message.
    pub fn display_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Starts a submission.
    ///
    /// Validates the form and marks the request as outstanding. Returns
    /// [`Error::RequestInFlight`] while a previous submission has not
    /// settled yet.
    pub fn begin_submit(&mut self, form: &TripForm) -> Result<()> {
        if self.in_flight {
            return Err(Error::RequestInFlight);
        }
        form.validate()?;

        debug!(
            "submitting trip: {} -> {} -> {}",
            form.current_location, form.pickup_location, form.dropoff_location
        );
        self.in_flight = true;

        Ok(())
    }

    /// Settles the outstanding submission with the service's outcome.
    pub fn finish_submit(
        &mut self,
        outcome: Result<PlanResponse>,
        surface: &mut impl MapSurface,
    ) {
        self.in_flight = false;

        match outcome {
            Ok(response) => {
                debug!(
                    "plan settled: {} itinerary line(s), {} log day(s)",
                    response.itinerary.len(),
                    response.log_images.len()
                );
                self.error = None;
                self.projector.project(response.route_geometry.as_ref(), surface);
                self.response = Some(response);
            }
            Err(e) => {
                warn!("plan request failed: {}", e);
                self.response = None;
                self.error = Some(PLAN_FAILURE_MESSAGE.to_string());
                self.projector.project(None, surface);
            }
        }
    }

    /// Submits the trip over the given service and settles the state.
    ///
    /// Errors raised before dispatch (validation, a submission already
    /// in flight) are returned to the caller; a failed round trip
    /// settles into the display state instead.
    pub fn submit(
        &mut self,
        service: &impl PlanService,
        form: &TripForm,
        surface: &mut impl MapSurface,
    ) -> Result<()> {
        self.begin_submit(form)?;
        let outcome = service.generate_plan(form);
        self.finish_submit(outcome, surface);
        Ok(())
    }
}
