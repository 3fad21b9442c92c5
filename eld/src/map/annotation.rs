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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;
use crate::route::{RouteGeometry, RouteLeg};

/// Position of a leg within the traveled sequence.
///
/// The first leg runs from the current position to the pickup; every
/// later leg ends at a dropoff. Making the position a named role keeps
/// the marker labeling a visible branch instead of an index convention.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LegRole {
    First,
    Intermediate,
    Final,
}

impl LegRole {
    /// Role of the leg at `index` within `count` traveled legs.
    pub fn of(index: usize, count: usize) -> Self {
        match index {
            0 => LegRole::First,
            i if i + 1 == count => LegRole::Final,
            _ => LegRole::Intermediate,
        }
    }
}

/// Label of a waypoint marker.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum WaypointLabel {
    Start,
    Pickup,
    Dropoff,
}

impl fmt::Display for WaypointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WaypointLabel::Start => "Start Location",
            WaypointLabel::Pickup => "Pickup Location",
            WaypointLabel::Dropoff => "Dropoff Location",
        };
        write!(f, "{}", label)
    }
}

/// A labeled point marker derived from a leg endpoint.
///
/// Annotations are not part of the service reply; they are derived from
/// the position of each leg in the traveled sequence.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct WaypointAnnotation {
    /// Marker position, latitude first.
    pub position: Coordinate,
    pub label: WaypointLabel,
}

impl WaypointAnnotation {
    pub fn new(position: Coordinate, label: WaypointLabel) -> Self {
        Self { position, label }
    }
}

/// Derives the labeled waypoint markers for the route.
///
/// The first traveled leg contributes its start ("Start Location") and
/// its end ("Pickup Location"); every later leg contributes only its end
/// ("Dropoff Location"), since its start repeats the previous leg's end
/// and a second marker on the same spot would only stack. Legs without
/// usable line geometry contribute nothing. For N ≥ 1 traveled legs this
/// yields exactly N + 1 markers.
pub fn annotations(geometry: &RouteGeometry) -> Vec<WaypointAnnotation> {
    let traveled: Vec<&RouteLeg> = geometry.traveled_legs().collect();
    let mut markers = Vec::with_capacity(traveled.len() + 1);

    for (index, leg) in traveled.iter().enumerate() {
        if let Some((start, end)) = leg.endpoints() {
            match LegRole::of(index, traveled.len()) {
                LegRole::First => {
                    markers.push(WaypointAnnotation::new(start, WaypointLabel::Start));
                    markers.push(WaypointAnnotation::new(end, WaypointLabel::Pickup));
                }
                LegRole::Intermediate | LegRole::Final => {
                    markers.push(WaypointAnnotation::new(end, WaypointLabel::Dropoff));
                }
            }
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    fn leg(coords: Vec<Coordinate>) -> RouteLeg {
        RouteLeg::new(None, Some(coords))
    }

    #[test]
    fn two_leg_trip() {
        let route = RouteGeometry::new(vec![
            leg(vec![coord!(41.8, -87.6), coord!(38.6, -90.2)]),
            leg(vec![coord!(38.6, -90.2), coord!(38.5, -90.1)]),
        ]);

        assert_eq!(
            annotations(&route),
            vec![
                WaypointAnnotation::new(coord!(41.8, -87.6), WaypointLabel::Start),
                WaypointAnnotation::new(coord!(38.6, -90.2), WaypointLabel::Pickup),
                WaypointAnnotation::new(coord!(38.5, -90.1), WaypointLabel::Dropoff),
            ]
        );
    }

    #[test]
    fn one_marker_per_leg_plus_start() {
        // N traveled legs yield N + 1 markers: Start, Pickup, then dropoffs.
        let route = RouteGeometry::new(vec![
            leg(vec![coord!(0.0, 0.0), coord!(1.0, 1.0)]),
            leg(vec![coord!(1.0, 1.0), coord!(2.0, 2.0)]),
            leg(vec![coord!(2.0, 2.0), coord!(3.0, 3.0)]),
        ]);

        let markers = annotations(&route);
        let labels: Vec<WaypointLabel> = markers.iter().map(|m| m.label).collect();

        assert_eq!(markers.len(), 4);
        assert_eq!(
            labels,
            vec![
                WaypointLabel::Start,
                WaypointLabel::Pickup,
                WaypointLabel::Dropoff,
                WaypointLabel::Dropoff,
            ]
        );
    }

    #[test]
    fn untraveled_legs_emit_no_markers() {
        let route = RouteGeometry::new(vec![
            RouteLeg::new(None, Some(Vec::new())),
            leg(vec![coord!(38.6, -90.2), coord!(38.5, -90.1)]),
        ]);

        // the empty first feature is skipped; the next one takes the
        // first role
        assert_eq!(
            annotations(&route),
            vec![
                WaypointAnnotation::new(coord!(38.6, -90.2), WaypointLabel::Start),
                WaypointAnnotation::new(coord!(38.5, -90.1), WaypointLabel::Pickup),
            ]
        );
    }

    #[test]
    fn no_markers_without_traveled_legs() {
        assert!(annotations(&RouteGeometry::default()).is_empty());
        assert!(annotations(&RouteGeometry::new(vec![RouteLeg::new(None, None)])).is_empty());
    }

    #[test]
    fn roles_by_position() {
        assert_eq!(LegRole::of(0, 3), LegRole::First);
        assert_eq!(LegRole::of(1, 3), LegRole::Intermediate);
        assert_eq!(LegRole::of(2, 3), LegRole::Final);
        assert_eq!(LegRole::of(0, 1), LegRole::First);
    }

    #[test]
    fn labels_render_the_popup_text() {
        assert_eq!(WaypointLabel::Start.to_string(), "Start Location");
        assert_eq!(WaypointLabel::Pickup.to_string(), "Pickup Location");
        assert_eq!(WaypointLabel::Dropoff.to_string(), "Dropoff Location");
    }
}
