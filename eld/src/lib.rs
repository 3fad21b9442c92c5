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

//! Electronic Logging Device (ELD) library to plan a trip and review
//! its hours-of-service compliance logs.
//!
//! The heavy lifting — routing, HOS scheduling, log-sheet drawing —
//! happens in a remote planning service. This crate is the client side:
//! it validates and submits the trip parameters, keeps the displayed
//! state of the request/response cycle, and turns the returned route
//! geometry into a renderable map view with fitted bounds and labeled
//! waypoint markers.
//!
//! ```no_run
//! use eld::geojson::GeoJsonMap;
//! use eld::plan::{PlanClient, TripForm, TripPlanner};
//!
//! # fn plan() -> eld::Result<()> {
//! let client = PlanClient::from_env()?;
//! let form = TripForm::new("Green Bay, WI", "Chicago, IL", "St. Louis, MO", 0.0);
//!
//! let mut planner = TripPlanner::new();
//! let mut map = GeoJsonMap::new();
//! planner.submit(&client, &form, &mut map)?;
//!
//! if let Some(response) = planner.response() {
//!     for line in &response.itinerary {
//!         println!("{line}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod geojson;
pub mod geom;
pub mod map;
pub mod plan;
pub mod route;

mod macros;

pub use error::{Error, Result};

/// The crate's most common types in one import.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geojson::GeoJsonMap;
    pub use crate::geom::{Bounds, Coordinate};
    pub use crate::map::{
        annotations, MapSurface, PolylineStyle, RouteMapProjector, RouteOverlay, Viewport,
        WaypointAnnotation, WaypointLabel,
    };
    pub use crate::plan::{PlanClient, PlanResponse, PlanService, TripForm, TripPlanner};
    pub use crate::route::{RouteGeometry, RouteLeg};
}
