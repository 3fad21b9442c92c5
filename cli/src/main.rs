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
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};

use eld::geojson::GeoJsonMap;
use eld::plan::{data_uri_bytes, PlanClient, PlanResponse, TripForm, TripPlanner};

/// Plans a trip and renders the HOS compliance logs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where the truck currently is (e.g., "Green Bay, WI")
    #[arg(short, long)]
    current: String,

    /// Pickup location (e.g., "Chicago, IL")
    #[arg(short, long)]
    pickup: String,

    /// Dropoff location (e.g., "St. Louis, MO")
    #[arg(short, long)]
    dropoff: String,

    /// Hours already used in the current 70h/8d cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_used: f64,

    /// Where to write the annotated route map
    #[arg(long, default_value = "route_map.geojson")]
    map_out: PathBuf,

    /// Directory for the log sheets and the log book PDF
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn init_logging() {
    let default = "info";
    let level = env::var("RUST_LOG").unwrap_or_else(|_| default.to_string());
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    // Configuration problems surface here, before anything is sent.
    let client = PlanClient::from_env()?;
    log::info!("Planning against {}", client.base_url());

    let form = TripForm::new(cli.current, cli.pickup, cli.dropoff, cli.cycle_used);

    let mut planner = TripPlanner::new();
    let mut map = GeoJsonMap::new();
    planner.submit(&client, &form, &mut map)?;

    if let Some(message) = planner.display_error() {
        eprintln!("{}", message);
        return Ok(ExitCode::FAILURE);
    }

    if let Some(response) = planner.response() {
        print_itinerary(response);
        write_artifacts(response, &map, &cli.out_dir, &cli.map_out)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn print_itinerary(response: &PlanResponse) {
    println!("Itinerary:");
    for line in &response.itinerary {
        println!("  ● {}", line);
    }
}

fn write_artifacts(
    response: &PlanResponse,
    map: &GeoJsonMap,
    out_dir: &Path,
    map_out: &Path,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(out_dir)?;

    for (day, image) in response.log_images.iter().enumerate() {
        let path = out_dir.join(format!("log_day_{}.png", day + 1));
        fs::write(&path, data_uri_bytes(image)?)?;
        log::info!("Log sheet for day {} written to {}", day + 1, path.display());
    }

    if let Some(document) = response.document() {
        let path = out_dir.join(document.filename());
        fs::write(&path, document.bytes()?)?;
        log::info!("Full log book written to {}", path.display());
    }

    fs::write(map_out, map.to_geojson().to_string())?;
    log::info!("Route map written to {}", map_out.display());

    Ok(())
}
