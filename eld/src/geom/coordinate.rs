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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Coordinate value, latitude first.
///
/// The `geo` and GeoJSON world is longitude-first; the conversions below
/// are the single place where the axes are transposed.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn transposes_to_and_from_geo() {
        // geo is (x, y) = (lon, lat); ours is latitude first.
        let c = Coordinate::new(41.8, -87.6);
        let geo_coord: geo::Coord<f64> = c.into();

        assert_eq!(geo_coord.x, -87.6);
        assert_eq!(geo_coord.y, 41.8);
        assert_eq!(Coordinate::from(geo_coord), c);
    }

    #[test]
    fn transposes_to_and_from_geo_point() {
        let p: geo::Point<f64> = Coordinate::new(38.6, -90.2).into();

        assert_eq!(p.x(), -90.2);
        assert_eq!(p.y(), 38.6);
        assert_eq!(Coordinate::from(p), Coordinate::new(38.6, -90.2));
    }

    #[test]
    fn display() {
        assert_eq!(coord!(38.5, -90.1).to_string(), "(38.5, -90.1)");
    }
}
