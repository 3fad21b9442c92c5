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

//! Map rendering of the traveled route.
//!
//! The route is drawn as styled polylines plus labeled waypoint markers
//! derived from the leg endpoints, framed by a viewport that fits the
//! whole route. [`RouteMapProjector`] drives any [`MapSurface`] backend
//! with that view; the markers come from [`annotations`].

mod annotation;
mod projector;
mod surface;

pub use annotation::{annotations, LegRole, WaypointAnnotation, WaypointLabel};
pub use projector::RouteMapProjector;
pub use surface::{
    MapSurface, PolylineStyle, RouteOverlay, Viewport, FIT_PADDING, POINT_ZOOM, TILE_ATTRIBUTION,
    TILE_URL, WORLD_CENTER, WORLD_ZOOM,
};
