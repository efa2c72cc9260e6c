use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use taxameter_pricing::tariff::time_window::TimeWindow;

use crate::catalog::load_catalog;

#[derive(Args)]
pub struct TariffsArgs {
    /// Tariff catalog JSON file (default: built-in rules)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

pub fn run(args: TariffsArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let mut table = Table::new();
    table.set_header(vec![
        "Company", "Car class", "Tariff", "Window", "Base", "Per hour", "Per km",
    ]);

    for company in catalog.companies() {
        let Some(tariff_set) = catalog.company(company) else {
            continue;
        };

        for car_class in tariff_set.car_classes() {
            for rule in tariff_set.rules(car_class) {
                table.add_row(vec![
                    company.display_name().to_string(),
                    car_class.to_string(),
                    rule.description().to_string(),
                    rule.window().map(format_window).unwrap_or_default(),
                    format!("{:.2}", rule.base_fare()),
                    format!("{:.2}", rule.hourly_rate()),
                    format!("{:.2}", rule.per_km_rate()),
                ]);
            }
        }
    }

    println!("{table}");

    Ok(())
}

fn format_window(window: TimeWindow) -> String {
    format!(
        "{:02}:{:02}-{:02}:{:02}",
        window.start().hour(),
        window.start().minute(),
        window.end().hour(),
        window.end().minute()
    )
}
