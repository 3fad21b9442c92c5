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

use thiserror::Error;

/// Result with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the planning client and the request coordinator.
///
/// The geometry pipeline never raises: malformed route legs degrade to
/// "render less" instead of propagating an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration value is not set. Fatal for the session;
    /// raised before any request is attempted.
    #[error("required configuration `{0}` is not set")]
    Configuration(&'static str),

    /// The trip form failed validation.
    #[error("invalid trip input: {0}")]
    InvalidInput(String),

    /// A submission was attempted while another request is outstanding.
    #[error("a plan request is already in flight")]
    RequestInFlight,

    /// The HTTP round trip to the planning service failed.
    #[error("plan request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The planning service replied with a non-success status.
    #[error("planning service returned status {status}: {detail}")]
    Service { status: u16, detail: String },

    /// The service reply could not be parsed.
    #[error("failed to parse planning service response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A base64 document or image payload could not be decoded.
    #[error("failed to decode document payload: {0}")]
    Decode(#[from] base64::DecodeError),
}
