use jiff::civil::datetime;
use taxameter_pricing::{
    json::types::JsonTariffCatalog,
    quote::{calculator::PriceCalculator, request::QuoteRequest},
    tariff::{car_class::CarClass, company::CompanyId},
};

const TOR_CATALOG: &str = r#"{
    "companies": {
        "tor": {
            "small": [
                { "type": "day", "from": "07:00", "to": "15:00", "base": 39, "hour": 720, "km": 18, "description": "Day tariff (07:00–15:00)" },
                { "type": "night", "from": "15:00", "to": "07:00", "base": 75, "hour": 1136, "km": 14, "description": "Night tariff (15:00–07:00)" }
            ]
        }
    }
}"#;

fn request(hour: i8) -> QuoteRequest {
    QuoteRequest {
        company: CompanyId::Tor,
        car_class: CarClass::Small,
        pickup_at: datetime(2025, 6, 11, hour, 0, 0, 0),
        distance_km: 10.0,
        duration_minutes: 20.0,
    }
}

#[test]
fn file_catalogs_price_exactly_like_the_builtin_table() {
    let json: JsonTariffCatalog = serde_json::from_str(TOR_CATALOG).unwrap();
    let from_file = PriceCalculator::new(json.create_catalog().unwrap());
    let builtin = PriceCalculator::builtin();

    for hour in [0, 7, 10, 14, 15, 20, 23] {
        let file_quote = from_file.quote(&request(hour)).unwrap();
        let builtin_quote = builtin.quote(&request(hour)).unwrap();

        assert_eq!(file_quote.total, builtin_quote.total);
        assert_eq!(file_quote.time_part, builtin_quote.time_part);
        assert_eq!(file_quote.tariff.kind(), builtin_quote.tariff.kind());
    }
}

#[test]
fn degenerate_windows_from_files_match_every_hour() {
    let input = r#"{
        "companies": {
            "gtt": {
                "small": [
                    { "type": "day", "from": "09:00", "to": "09:00", "base": 10, "hour": 60, "km": 5 }
                ]
            }
        }
    }"#;

    let json: JsonTariffCatalog = serde_json::from_str(input).unwrap();
    let calculator = PriceCalculator::new(json.create_catalog().unwrap());

    for hour in [0, 8, 9, 12, 23] {
        let mut request = request(hour);
        request.company = CompanyId::Gtt;
        let breakdown = calculator.quote(&request).unwrap();
        assert_eq!(breakdown.base_part, 10.0);
    }
}
