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

use serde::{Deserialize, Serialize};

use super::WaypointAnnotation;
use crate::geom::{Bounds, Coordinate};

/// Center of the default overview shown when there is no route.
pub const WORLD_CENTER: Coordinate = Coordinate {
    latitude: 39.8283,
    longitude: -98.5795,
};

/// Zoom of the default overview.
pub const WORLD_ZOOM: u8 = 4;

/// Close-up zoom used when the route bounds span no area.
pub const POINT_ZOOM: u8 = 13;

/// Pixel padding applied on every side when fitting the viewport to the
/// route bounds.
pub const FIT_PADDING: u32 = 50;

/// Background raster tile source, consumed read-only.
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

/// Attribution that must be displayed with the tiles.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors © CARTO";

/// Stroke style of the rendered route polylines.
///
/// The style is threaded into each overlay rather than held as a shared
/// default, so two maps can render the same route differently.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PolylineStyle {
    /// CSS stroke color.
    pub color: String,
    /// Stroke weight in pixels.
    pub weight: u32,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: "#38bdf8".to_string(),
            weight: 4,
        }
    }
}

/// Renderable route overlay: polylines plus labeled waypoint markers.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RouteOverlay {
    /// One line per traveled leg, latitude-first coordinates.
    pub polylines: Vec<Vec<Coordinate>>,
    /// Markers derived from the leg endpoints.
    pub annotations: Vec<WaypointAnnotation>,
    pub style: PolylineStyle,
}

/// Viewport command issued to a map surface.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Viewport {
    /// Frame the bounds with pixel padding on every side.
    Fit { bounds: Bounds, padding: u32 },
    /// Center on a position at a fixed zoom.
    Center { position: Coordinate, zoom: u8 },
}

impl Viewport {
    /// The default overview shown when there is no route.
    pub fn world() -> Self {
        Viewport::Center {
            position: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        }
    }
}

/// Rendering backend driven by the projector.
///
/// The overlay is always committed before a viewport command is issued,
/// so a fit never runs against a stale or partial layer.
pub trait MapSurface {
    /// Replaces the rendered route overlay.
    fn set_overlay(&mut self, overlay: RouteOverlay);

    /// Removes any rendered overlay.
    fn clear_overlay(&mut self);

    /// Applies a viewport command.
    fn apply_viewport(&mut self, viewport: Viewport);
}
