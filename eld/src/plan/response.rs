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

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::Result;
use crate::route::RouteGeometry;

/// Filename under which the log book document is offered.
pub const DOCUMENT_FILENAME: &str = "driver_logs.pdf";

/// Reply of the planning service to a trip request.
///
/// A response replaces any previously displayed one in full; there is
/// no merging across requests.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct PlanResponse {
    /// Human-readable schedule, one line per duty event.
    pub itinerary: Vec<String>,

    /// Rendered log sheets as image data URIs, one per duty day.
    pub log_images: Vec<String>,

    /// Geometry of the traveled route, when the router produced one.
    #[serde(default)]
    pub route_geometry: Option<RouteGeometry>,

    /// Complete log book as base64 PDF.
    #[serde(default)]
    pub pdf_blob: Option<String>,
}

impl PlanResponse {
    /// The downloadable log book, when the service produced one.
    ///
    /// The service sends an empty blob when PDF generation was skipped;
    /// that suppresses the download as well.
    pub fn document(&self) -> Option<PlanDocument<'_>> {
        self.pdf_blob
            .as_deref()
            .filter(|blob| !blob.is_empty())
            .map(|blob| PlanDocument { blob })
    }
}

/// The downloadable log book document.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PlanDocument<'a> {
    blob: &'a str,
}

impl PlanDocument<'_> {
    /// Filename the artifact is offered under.
    pub fn filename(&self) -> &'static str {
        DOCUMENT_FILENAME
    }

    /// The document as a `data:` URI, ready for a download link.
    pub fn data_uri(&self) -> String {
        format!("data:application/pdf;base64,{}", self.blob)
    }

    /// Decodes the document to raw PDF bytes.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.blob)?)
    }
}

/// Decodes a `data:` URI, or a bare base64 payload, to raw bytes.
///
/// Log images arrive as `data:image/png;base64,...` strings.
pub fn data_uri_bytes(uri: &str) -> Result<Vec<u8>> {
    let payload = match uri.split_once(";base64,") {
        Some((_, payload)) => payload,
        None => uri,
    };
    Ok(STANDARD.decode(payload)?)
}
