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

use std::env;
use std::time::Duration;

use log::{debug, error};
use reqwest::blocking::Client;

use super::{PlanResponse, TripForm};
use crate::error::{Error, Result};

/// Environment variable naming the planning service base URL.
pub const BASE_URL_VAR: &str = "PLANNER_BASE_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Planning service seam.
///
/// The remote service is the only implementation outside of tests.
pub trait PlanService {
    /// Submits the trip and returns the full plan.
    fn generate_plan(&self, form: &TripForm) -> Result<PlanResponse>;
}

/// HTTP client for the remote planning service.
pub struct PlanClient {
    client: Client,
    base_url: String,
}

impl PlanClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client configured from the environment.
    ///
    /// Reads [`BASE_URL_VAR`]; a missing or empty value is a
    /// configuration error, raised before any request is attempted.
    pub fn from_env() -> Result<Self> {
        match env::var(BASE_URL_VAR) {
            Ok(base_url) if !base_url.trim().is_empty() => Self::new(base_url),
            _ => Err(Error::Configuration(BASE_URL_VAR)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PlanService for PlanClient {
    fn generate_plan(&self, form: &TripForm) -> Result<PlanResponse> {
        let url = format!("{}/generate-plan/", self.base_url);
        debug!("requesting plan from {}", url);

        let response = self.client.post(&url).json(form).send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            error!("planning service returned {}: {}", status, text);
            return Err(Error::Service {
                status: status.as_u16(),
                detail: text,
            });
        }

        let plan: PlanResponse = serde_json::from_str(&text).map_err(|e| {
            error!("failed to parse plan response: {}. Body: {}", e, text);
            e
        })?;

        debug!("plan received: {} itinerary line(s)", plan.itinerary.len());
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = PlanClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn missing_base_url_is_a_configuration_error() {
        // the test binary never sets the variable
        env::remove_var(BASE_URL_VAR);

        assert!(matches!(
            PlanClient::from_env(),
            Err(Error::Configuration(BASE_URL_VAR))
        ));
    }
}
