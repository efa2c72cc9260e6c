use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use comfy_table::Table;
use indicatif::ProgressBar;
use taxameter_pricing::quote::breakdown::PriceBreakdown;
use taxameter_pricing::quote::calculator::PriceCalculator;
use taxameter_pricing::quote::request::QuoteRequest;
use taxameter_pricing::tariff::{car_class::CarClass, company::CompanyId};
use taxameter_route_providers::as_the_crow_flies::DEFAULT_SPEED_KMH;
use taxameter_route_providers::mapbox_api::MapboxProfile;
use taxameter_route_providers::route_client::RouteClient;
use taxameter_route_providers::route_estimate::RouteEstimate;
use taxameter_route_providers::route_provider::RouteProvider;
use tracing::debug;

use crate::catalog::load_catalog;
use crate::parsers;

#[derive(Copy, Clone, ValueEnum)]
enum ProviderKind {
    Mapbox,
    CrowFlies,
}

#[derive(Args)]
pub struct QuoteArgs {
    /// Taxi company (tor, vib, gtt, kurir, click)
    #[arg(short, long)]
    company: CompanyId,

    /// Car class
    #[arg(long, default_value = "small")]
    class: CarClass,

    /// Pickup wall-clock time, e.g. "2025-06-09T22:30:00"
    #[arg(short, long, value_parser = parsers::parse_datetime, default_value = "now")]
    at: jiff::civil::DateTime,

    /// Trip distance in kilometers (goes with --duration-min)
    #[arg(long)]
    distance_km: Option<f64>,

    /// Trip duration in minutes (goes with --distance-km)
    #[arg(long)]
    duration_min: Option<f64>,

    /// Pickup point as "lng,lat" (goes with --to)
    #[arg(long, value_parser = parsers::parse_point)]
    from: Option<geo_types::Point>,

    /// Dropoff point as "lng,lat" (goes with --from)
    #[arg(long, value_parser = parsers::parse_point)]
    to: Option<geo_types::Point>,

    /// Route provider for --from/--to trips
    #[arg(long, value_enum, default_value_t = ProviderKind::CrowFlies)]
    provider: ProviderKind,

    /// Mapbox routing profile (driving, driving-traffic, walking, cycling)
    #[arg(long, default_value = "driving")]
    profile: MapboxProfile,

    /// Assumed speed for the crow-flies provider
    #[arg(long, default_value_t = DEFAULT_SPEED_KMH)]
    speed_kmh: f64,

    /// Tariff catalog JSON file (default: built-in rules)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: QuoteArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let calculator = PriceCalculator::new(catalog);

    let estimate = resolve_estimate(&args).await?;
    debug!(
        "Quoting {} km, {} min at {}",
        estimate.distance_km(),
        estimate.duration_minutes(),
        args.at
    );

    let request = QuoteRequest {
        company: args.company,
        car_class: args.class,
        pickup_at: args.at,
        distance_km: estimate.distance_km(),
        duration_minutes: estimate.duration_minutes(),
    };

    let breakdown = calculator.quote(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print_breakdown(&args, &breakdown);
    }

    Ok(())
}

/// Distance and duration either come straight from the flags or get
/// resolved from a pair of points through the chosen provider.
async fn resolve_estimate(args: &QuoteArgs) -> anyhow::Result<RouteEstimate> {
    match (args.distance_km, args.duration_min, args.from, args.to) {
        (Some(distance_km), Some(duration_min), None, None) => {
            Ok(RouteEstimate::new(distance_km, duration_min)?)
        }
        (None, None, Some(from), Some(to)) => {
            let provider = match args.provider {
                ProviderKind::Mapbox => RouteProvider::MapboxDirections {
                    profile: args.profile,
                },
                ProviderKind::CrowFlies => RouteProvider::AsTheCrowFlies {
                    speed_kmh: args.speed_kmh,
                },
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Resolving route...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let estimate = RouteClient::from_env().fetch_estimate(from, to, provider).await;

            spinner.finish_and_clear();

            Ok(estimate?)
        }
        _ => anyhow::bail!("pass either --distance-km with --duration-min, or --from with --to"),
    }
}

fn print_breakdown(args: &QuoteArgs, breakdown: &PriceBreakdown) {
    let mut table = Table::new();

    table.set_header(vec![
        format!("{} / {}", args.company.display_name(), args.class),
        String::from("SEK"),
    ]);
    table.add_row(vec![
        "Tariff".to_string(),
        breakdown.tariff.description().to_string(),
    ]);
    table.add_row(vec!["Matched".to_string(), breakdown.basis.to_string()]);
    table.add_row(vec![
        "Base fare".to_string(),
        format!("{:.2}", breakdown.base_part),
    ]);
    table.add_row(vec![
        "Time".to_string(),
        format!("{:.2}", breakdown.time_part),
    ]);
    table.add_row(vec![
        "Distance".to_string(),
        format!("{:.2}", breakdown.distance_part),
    ]);
    table.add_row(vec!["Total".to_string(), breakdown.total.to_string()]);

    println!("{table}");
}
