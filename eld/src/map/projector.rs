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

use std::hash::{DefaultHasher, Hash, Hasher};

use log::{debug, trace};

use super::{
    annotations, MapSurface, PolylineStyle, RouteOverlay, Viewport, FIT_PADDING, POINT_ZOOM,
};
use crate::route::{RouteGeometry, RouteLeg};

/// Projects route geometry onto a map surface.
///
/// The projector fingerprints the last committed geometry and re-renders
/// only when the content actually changed, so the viewport command fires
/// exactly once per genuine change and never on a plain re-render.
#[derive(Debug, Default)]
pub struct RouteMapProjector {
    style: PolylineStyle,
    last_projected: Option<u64>,
}

impl RouteMapProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a projector rendering polylines with the given style.
    pub fn with_style(style: PolylineStyle) -> Self {
        Self {
            style,
            last_projected: None,
        }
    }

    /// Projects the current geometry.
    ///
    /// A changed geometry commits the overlay first and issues the
    /// viewport command after, so the fit sees the final layer. Absent
    /// geometry clears the overlay and falls back to the world overview;
    /// that is the initial state, not an error. Bounds spanning no area
    /// fall back to a close-up centered view instead of a fit.
    pub fn project(&mut self, geometry: Option<&RouteGeometry>, surface: &mut impl MapSurface) {
        let fingerprint = fingerprint(geometry);
        if self.last_projected == Some(fingerprint) {
            trace!("route geometry unchanged, skipping projection");
            return;
        }
        self.last_projected = Some(fingerprint);

        let geometry = match geometry {
            Some(geometry) => geometry,
            None => {
                debug!("no route geometry, showing world overview");
                surface.clear_overlay();
                surface.apply_viewport(Viewport::world());
                return;
            }
        };

        let overlay = RouteOverlay {
            polylines: geometry
                .traveled_legs()
                .filter_map(RouteLeg::line)
                .map(<[_]>::to_vec)
                .collect(),
            annotations: annotations(geometry),
            style: self.style.clone(),
        };
        debug!(
            "projecting route: {} polyline(s), {} marker(s)",
            overlay.polylines.len(),
            overlay.annotations.len()
        );
        surface.set_overlay(overlay);

        let viewport = match geometry.bounds() {
            Some(bounds) if !bounds.is_degenerate() => Viewport::Fit {
                bounds,
                padding: FIT_PADDING,
            },
            Some(bounds) => Viewport::Center {
                position: bounds.center(),
                zoom: POINT_ZOOM,
            },
            None => Viewport::world(),
        };
        surface.apply_viewport(viewport);
    }
}

fn fingerprint(geometry: Option<&RouteGeometry>) -> u64 {
    let mut hasher = DefaultHasher::new();
    geometry.hash(&mut hasher);
    hasher.finish()
}
