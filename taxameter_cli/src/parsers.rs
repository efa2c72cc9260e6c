use jiff::Zoned;
use jiff::civil::DateTime;

/// Accepts "now" or a wall-clock datetime like "2025-06-09T22:30:00".
pub fn parse_datetime(input: &str) -> Result<DateTime, String> {
    if input == "now" {
        return Ok(Zoned::now().datetime());
    }

    input
        .parse::<DateTime>()
        .map_err(|err| format!("Invalid pickup time: {err}"))
}

/// Point literal in the "lng,lat" order routing APIs use.
pub fn parse_point(input: &str) -> Result<geo_types::Point, String> {
    let Some((lng, lat)) = input.split_once(',') else {
        return Err(String::from("Expected \"lng,lat\""));
    };

    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| String::from("Invalid longitude"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| String::from("Invalid latitude"))?;

    if !(-180.0..=180.0).contains(&lng) {
        return Err(String::from("Longitude out of range"));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(String::from("Latitude out of range"));
    }

    Ok(geo_types::Point::new(lng, lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_civil_datetimes() {
        let pickup = parse_datetime("2025-06-09T22:30:00").unwrap();

        assert_eq!(pickup.hour(), 22);
        assert_eq!(pickup.minute(), 30);
    }

    #[test]
    fn now_is_accepted() {
        assert!(parse_datetime("now").is_ok());
    }

    #[test]
    fn garbage_datetimes_are_rejected() {
        assert!(parse_datetime("soonish").is_err());
    }

    #[test]
    fn parses_points_with_spaces() {
        let point = parse_point("18.0686, 59.3293").unwrap();

        assert_eq!(point.x(), 18.0686);
        assert_eq!(point.y(), 59.3293);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(parse_point("181.0,59.0").is_err());
        assert!(parse_point("18.0,-91.0").is_err());
        assert!(parse_point("18.0").is_err());
    }
}
