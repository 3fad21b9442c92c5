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

use super::Coordinate;

/// Axis-aligned geographic bounding box.
///
/// The smallest rectangle in latitude/longitude space containing every
/// coordinate it was built from. A box built from a single point spans
/// no area; it is still a valid box and reports itself [degenerate] so
/// consumers can fall back instead of failing a viewport fit.
///
/// [degenerate]: Self::is_degenerate
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    south_west: Coordinate,
    north_east: Coordinate,
}

impl Bounds {
    /// Creates bounds from the south-west and north-east corners.
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every coordinate of the iterator.
    ///
    /// Returns `None` for an empty iterator. Repeated coordinates need
    /// no special handling; the min/max reduction absorbs them.
    pub fn from_coordinates<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        coords.into_iter().fold(None, |bounds, c| {
            Some(match bounds {
                None => Self::new(c, c),
                Some(bounds) => bounds.extended(c),
            })
        })
    }

    /// Returns these bounds grown to contain the coordinate.
    pub fn extended(self, c: Coordinate) -> Self {
        Self {
            south_west: Coordinate::new(
                self.south_west.latitude.min(c.latitude),
                self.south_west.longitude.min(c.longitude),
            ),
            north_east: Coordinate::new(
                self.north_east.latitude.max(c.latitude),
                self.north_east.longitude.max(c.longitude),
            ),
        }
    }

    /// The south-west corner.
    pub fn south_west(&self) -> Coordinate {
        self.south_west
    }

    /// The north-east corner.
    pub fn north_east(&self) -> Coordinate {
        self.north_east
    }

    /// The center of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    /// `true` when the box spans no area, e.g. built from a single point.
    pub fn is_degenerate(&self) -> bool {
        self.south_west.latitude == self.north_east.latitude
            || self.south_west.longitude == self.north_east.longitude
    }
}

impl From<geo::Rect<f64>> for Bounds {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self {
            south_west: rect.min().into(),
            north_east: rect.max().into(),
        }
    }
}
