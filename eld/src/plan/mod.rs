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

//! Trip planning against the remote planning service.
//!
//! The service takes the four trip parameters and returns the full plan:
//! the itinerary, one rendered log sheet per duty day, the optional log
//! book PDF, and the route geometry. [`TripPlanner`] coordinates the
//! request/response cycle and owns the displayed state; [`PlanClient`]
//! is the HTTP implementation of the [`PlanService`] seam.

mod client;
mod form;
mod planner;
mod response;

pub use client::{PlanClient, PlanService, BASE_URL_VAR};
pub use form::TripForm;
pub use planner::{TripPlanner, PLAN_FAILURE_MESSAGE};
pub use response::{data_uri_bytes, PlanDocument, PlanResponse, DOCUMENT_FILENAME};
