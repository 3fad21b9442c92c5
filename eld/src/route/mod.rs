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

//! Route geometry returned by the planning service.
//!
//! The service replies with a GeoJSON feature collection of line-string
//! features, one per traveled [`leg`]. Parsing is lenient: a feature
//! with a missing, non-line, or empty geometry is kept in the sequence
//! but reports no line, so it contributes nothing to bounds or markers
//! instead of failing the whole route.
//!
//! [`leg`]: RouteLeg

use std::hash::{DefaultHasher, Hash, Hasher};

use geo::{BoundingRect, LineString, MultiLineString};
use geojson::FeatureCollection;
use log::{debug, warn};
use serde::{Deserialize, Deserializer};

use crate::geom::Bounds;

mod leg;

pub use leg::RouteLeg;

/// The multi-leg route traveled over the trip.
///
/// Legs are ordered chronologically; leg *i* ends where leg *i+1*
/// begins. For the usual two-leg trip that is current position → pickup
/// followed by pickup → dropoff, with optional further legs for fuel or
/// rest stops in between.
#[derive(Clone, PartialEq, Hash, Debug, Default)]
pub struct RouteGeometry {
    legs: Vec<RouteLeg>,
}

impl RouteGeometry {
    /// Creates a route from ordered legs.
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }

    /// All legs, in travel order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Legs with usable line geometry, in travel order.
    pub fn traveled_legs(&self) -> impl Iterator<Item = &RouteLeg> {
        self.legs.iter().filter(|leg| leg.is_traveled())
    }

    /// Smallest box containing every coordinate of every traveled leg.
    ///
    /// Returns `None` when no leg has any coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        let lines: Vec<LineString<f64>> = self
            .traveled_legs()
            .filter_map(RouteLeg::line)
            .map(|line| LineString::from(line.iter().map(|&c| geo::Coord::from(c)).collect::<Vec<_>>()))
            .collect();

        MultiLineString::new(lines).bounding_rect().map(Bounds::from)
    }

    /// Fingerprint of the route's content.
    ///
    /// Two routes with the same legs and coordinates hash identically,
    /// which lets the map layer detect genuine geometry changes.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl From<FeatureCollection> for RouteGeometry {
    fn from(fc: FeatureCollection) -> Self {
        let legs: Vec<RouteLeg> = fc.features.iter().map(RouteLeg::from).collect();

        let skipped = legs.iter().filter(|leg| !leg.is_traveled()).count();
        if skipped > 0 {
            warn!("route has {} feature(s) without usable line geometry", skipped);
        }
        debug!("route parsed: {} leg(s)", legs.len());

        Self { legs }
    }
}

impl<'de> Deserialize<'de> for RouteGeometry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        FeatureCollection::deserialize(deserializer).map(Self::from)
    }
}
