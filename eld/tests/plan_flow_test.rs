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

//! A canned service reply through the planner onto a GeoJSON map.

use eld::geojson::GeoJsonMap;
use eld::map::{Viewport, FIT_PADDING, WORLD_CENTER, WORLD_ZOOM};
use eld::plan::{PlanResponse, PlanService, TripForm, TripPlanner, PLAN_FAILURE_MESSAGE};
use eld::{coord, Error, Result};
use serde_json::json;

struct CannedService {
    reply: serde_json::Value,
}

impl PlanService for CannedService {
    fn generate_plan(&self, _form: &TripForm) -> Result<PlanResponse> {
        serde_json::from_value(self.reply.clone()).map_err(Error::from)
    }
}

struct FailingService;

impl PlanService for FailingService {
    fn generate_plan(&self, _form: &TripForm) -> Result<PlanResponse> {
        Err(Error::Service {
            status: 502,
            detail: "upstream geocoder unavailable".to_string(),
        })
    }
}

fn form() -> TripForm {
    TripForm::new("Green Bay, WI", "Chicago, IL", "St. Louis, MO", 0.0)
}

/// Reply shaped like the planning service's: two driven legs plus the
/// rendered logs and the log book.
fn service() -> CannedService {
    CannedService {
        reply: json!({
            "itinerary": [
                "Pre-trip Inspection at 08:00",
                "Loading at 12:15",
                "Unloading at 18:30"
            ],
            "log_images": ["data:image/png;base64,aGVsbG8="],
            "route_geometry": {
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[-87.6, 41.8], [-90.2, 38.6]]
                        },
                        "properties": {"type": "pre-load"}
                    },
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[-90.2, 38.6], [-90.1, 38.5]]
                        },
                        "properties": {"type": "load"}
                    }
                ]
            },
            "pdf_blob": "aGVsbG8="
        }),
    }
}

#[test]
fn plan_lands_on_the_map() {
    let mut planner = TripPlanner::new();
    let mut map = GeoJsonMap::new();

    planner.submit(&service(), &form(), &mut map).unwrap();

    let response = planner.response().expect("the plan should be displayed");
    assert_eq!(response.itinerary.len(), 3);
    assert_eq!(response.document().unwrap().filename(), "driver_logs.pdf");

    let overlay = map.overlay().expect("the route should be committed");
    assert_eq!(overlay.polylines.len(), 2);

    let labels: Vec<String> = overlay
        .annotations
        .iter()
        .map(|a| a.label.to_string())
        .collect();
    assert_eq!(
        labels,
        vec!["Start Location", "Pickup Location", "Dropoff Location"]
    );
    assert_eq!(overlay.annotations[0].position, coord!(41.8, -87.6));
    assert_eq!(overlay.annotations[1].position, coord!(38.6, -90.2));
    assert_eq!(overlay.annotations[2].position, coord!(38.5, -90.1));

    match map.viewport() {
        Some(Viewport::Fit { bounds, padding }) => {
            assert_eq!(*padding, FIT_PADDING);
            assert_eq!(bounds.south_west(), coord!(38.5, -90.2));
            assert_eq!(bounds.north_east(), coord!(41.8, -87.6));
        }
        other => panic!("expected a fitted viewport, got {:?}", other),
    }
}

#[test]
fn failed_request_clears_the_map() {
    let mut planner = TripPlanner::new();
    let mut map = GeoJsonMap::new();

    planner.submit(&service(), &form(), &mut map).unwrap();
    assert!(map.overlay().is_some());

    planner.submit(&FailingService, &form(), &mut map).unwrap();

    assert_eq!(planner.response(), None);
    assert_eq!(planner.display_error(), Some(PLAN_FAILURE_MESSAGE));
    assert_eq!(map.overlay(), None);
    assert_eq!(
        map.viewport(),
        Some(&Viewport::Center {
            position: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        })
    );
}

#[test]
fn null_geometry_shows_the_world_overview() {
    let service = CannedService {
        reply: json!({
            "itinerary": ["Pre-trip Inspection at 08:00"],
            "log_images": [],
            "route_geometry": null,
            "pdf_blob": null
        }),
    };

    let mut planner = TripPlanner::new();
    let mut map = GeoJsonMap::new();
    planner.submit(&service, &form(), &mut map).unwrap();

    assert!(planner.response().is_some());
    assert_eq!(map.overlay(), None);
    assert_eq!(
        map.viewport(),
        Some(&Viewport::Center {
            position: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        })
    );
}

#[test]
fn rendered_geojson_round_trips() {
    let mut planner = TripPlanner::new();
    let mut map = GeoJsonMap::new();
    planner.submit(&service(), &form(), &mut map).unwrap();

    let rendered: serde_json::Value = serde_json::from_str(&map.to_geojson().to_string()).unwrap();

    assert_eq!(rendered["type"], "FeatureCollection");
    assert_eq!(rendered["features"].as_array().unwrap().len(), 5);
    assert_eq!(
        rendered["bbox"],
        json!([-90.2, 38.5, -87.6, 41.8])
    );
    assert_eq!(
        rendered["features"][0]["properties"]["stroke"],
        json!("#38bdf8")
    );
}
