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

use geojson::{Feature, Value};

use crate::geom::Coordinate;

/// One contiguous traveled segment of the trip between two stops.
///
/// A leg keeps whatever the service sent: the optional `properties.type`
/// tag (`pre-load`, `load`) and the line, when the feature carried a
/// non-empty line-string geometry.
#[derive(Clone, PartialEq, Hash, Debug, Default)]
pub struct RouteLeg {
    kind: Option<String>,
    line: Option<Vec<Coordinate>>,
}

impl RouteLeg {
    /// Creates a leg from its tag and line.
    pub fn new(kind: Option<String>, line: Option<Vec<Coordinate>>) -> Self {
        Self { kind, line }
    }

    /// The upstream leg tag, e.g. `pre-load` or `load`.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// The traveled line, or `None` when the leg has no usable geometry.
    pub fn line(&self) -> Option<&[Coordinate]> {
        match &self.line {
            Some(line) if !line.is_empty() => Some(line),
            _ => None,
        }
    }

    /// `true` when the leg has a line with at least one coordinate.
    pub fn is_traveled(&self) -> bool {
        self.line().is_some()
    }

    /// First and last coordinate of the traveled line.
    pub fn endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        let line = self.line()?;
        Some((*line.first()?, *line.last()?))
    }
}

impl From<&Feature> for RouteLeg {
    fn from(feature: &Feature) -> Self {
        let kind = feature
            .properties
            .as_ref()
            .and_then(|properties| properties.get("type"))
            .and_then(|value| value.as_str())
            .map(str::to_string);

        let line = feature.geometry.as_ref().and_then(|geometry| match &geometry.value {
            Value::LineString(positions) => Some(
                positions
                    .iter()
                    .filter_map(|position| position_to_coordinate(position))
                    .collect(),
            ),
            _ => None,
        });

        Self { kind, line }
    }
}

/// GeoJSON positions are longitude-first; [`Coordinate`] is latitude-first.
fn position_to_coordinate(position: &[f64]) -> Option<Coordinate> {
    match position {
        [longitude, latitude, ..] => Some(Coordinate::new(*latitude, *longitude)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn endpoints_of_a_traveled_leg() {
        let leg = RouteLeg::new(
            None,
            Some(vec![coord!(41.8, -87.6), coord!(40.0, -89.0), coord!(38.6, -90.2)]),
        );

        assert_eq!(leg.endpoints(), Some((coord!(41.8, -87.6), coord!(38.6, -90.2))));
    }

    #[test]
    fn empty_line_is_not_traveled() {
        let leg = RouteLeg::new(None, Some(Vec::new()));

        assert!(!leg.is_traveled());
        assert_eq!(leg.line(), None);
        assert_eq!(leg.endpoints(), None);
    }

    #[test]
    fn missing_geometry_is_not_traveled() {
        let leg = RouteLeg::new(Some("load".to_string()), None);

        assert!(!leg.is_traveled());
        assert_eq!(leg.kind(), Some("load"));
    }

    #[test]
    fn position_parsing_transposes_axes() {
        // wire order is (lon, lat)
        assert_eq!(
            position_to_coordinate(&[-87.6, 41.8]),
            Some(coord!(41.8, -87.6))
        );
        // a malformed position is dropped, not transposed wrongly
        assert_eq!(position_to_coordinate(&[-87.6]), None);
    }
}
