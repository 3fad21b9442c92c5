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

use geojson::{Bbox, Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

use crate::geom::Bounds;
use crate::map::{MapSurface, RouteOverlay, Viewport, TILE_ATTRIBUTION};

/// Map surface rendering to GeoJSON.
///
/// Records the committed overlay and the last viewport command, and
/// renders both as a feature collection: one styled line-string feature
/// per polyline and one labeled point feature per waypoint marker, with
/// the collection's bbox taken from the fit command. The result is
/// consumable by any GeoJSON viewer.
#[derive(Debug, Default)]
pub struct GeoJsonMap {
    overlay: Option<RouteOverlay>,
    viewport: Option<Viewport>,
}

impl GeoJsonMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed overlay.
    pub fn overlay(&self) -> Option<&RouteOverlay> {
        self.overlay.as_ref()
    }

    /// The last applied viewport command.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Renders the committed state as GeoJSON.
    pub fn to_geojson(&self) -> GeoJson {
        let mut features = Vec::new();

        if let Some(overlay) = &self.overlay {
            for line in &overlay.polylines {
                let coordinates: Vec<Vec<f64>> = line
                    .iter()
                    .map(|c| vec![c.longitude, c.latitude])
                    .collect();

                let mut properties = JsonObject::new();
                properties.insert(
                    "stroke".to_string(),
                    JsonValue::from(overlay.style.color.clone()),
                );
                properties.insert(
                    "stroke-width".to_string(),
                    JsonValue::from(overlay.style.weight),
                );

                features.push(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::LineString(coordinates))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                });
            }

            for annotation in &overlay.annotations {
                let mut properties = JsonObject::new();
                properties.insert(
                    "label".to_string(),
                    JsonValue::from(annotation.label.to_string()),
                );

                features.push(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![
                        annotation.position.longitude,
                        annotation.position.latitude,
                    ]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                });
            }
        }

        let bbox = match self.viewport {
            Some(Viewport::Fit { bounds, .. }) => Some(bounds_to_bbox(&bounds)),
            _ => None,
        };

        let mut foreign_members = JsonObject::new();
        foreign_members.insert(
            "attribution".to_string(),
            JsonValue::from(TILE_ATTRIBUTION),
        );

        GeoJson::FeatureCollection(FeatureCollection {
            bbox,
            features,
            foreign_members: Some(foreign_members),
        })
    }
}

impl MapSurface for GeoJsonMap {
    fn set_overlay(&mut self, overlay: RouteOverlay) {
        self.overlay = Some(overlay);
    }

    fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }
}

/// GeoJSON bbox order: west, south, east, north.
fn bounds_to_bbox(bounds: &Bounds) -> Bbox {
    vec![
        bounds.south_west().longitude,
        bounds.south_west().latitude,
        bounds.north_east().longitude,
        bounds.north_east().latitude,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;
    use crate::map::{PolylineStyle, WaypointAnnotation, WaypointLabel, FIT_PADDING};

    fn overlay() -> RouteOverlay {
        RouteOverlay {
            polylines: vec![vec![coord!(41.8, -87.6), coord!(38.6, -90.2)]],
            annotations: vec![WaypointAnnotation::new(
                coord!(41.8, -87.6),
                WaypointLabel::Start,
            )],
            style: PolylineStyle::default(),
        }
    }

    #[test]
    fn renders_lines_and_markers() {
        let mut map = GeoJsonMap::new();
        map.set_overlay(overlay());
        map.apply_viewport(Viewport::Fit {
            bounds: Bounds::new(coord!(38.6, -90.2), coord!(41.8, -87.6)),
            padding: FIT_PADDING,
        });

        let collection = match map.to_geojson() {
            GeoJson::FeatureCollection(collection) => collection,
            other => panic!("expected a feature collection, got {:?}", other),
        };

        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.bbox, Some(vec![-90.2, 38.6, -87.6, 41.8]));

        // wire order is (lon, lat) again on the way out
        let line = &collection.features[0];
        match &line.geometry.as_ref().unwrap().value {
            Value::LineString(coordinates) => {
                assert_eq!(coordinates[0], vec![-87.6, 41.8]);
            }
            other => panic!("expected a line string, got {:?}", other),
        }
        assert_eq!(
            line.properties.as_ref().unwrap()["stroke"],
            JsonValue::from("#38bdf8")
        );

        let marker = &collection.features[1];
        assert_eq!(
            marker.properties.as_ref().unwrap()["label"],
            JsonValue::from("Start Location")
        );
    }

    #[test]
    fn cleared_overlay_renders_empty() {
        let mut map = GeoJsonMap::new();
        map.set_overlay(overlay());
        map.clear_overlay();
        map.apply_viewport(Viewport::world());

        let collection = match map.to_geojson() {
            GeoJson::FeatureCollection(collection) => collection,
            other => panic!("expected a feature collection, got {:?}", other),
        };

        assert!(collection.features.is_empty());
        assert_eq!(collection.bbox, None);
    }

    #[test]
    fn carries_the_tile_attribution() {
        let collection = match GeoJsonMap::new().to_geojson() {
            GeoJson::FeatureCollection(collection) => collection,
            other => panic!("expected a feature collection, got {:?}", other),
        };

        assert_eq!(
            collection.foreign_members.unwrap()["attribution"],
            JsonValue::from(TILE_ATTRIBUTION)
        );
    }
}
