/// Parses a `LAT,LON` pair.
pub fn parse_center(input: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected LAT,LON"))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid latitude: {lat}"))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid longitude: {lon}"))?;

    if !lat.is_finite() || !lon.is_finite() {
        return Err(String::from("Coordinates must be finite"));
    }

    Ok((lat, lon))
}

pub fn parse_ratio(input: &str) -> Result<f64, String> {
    let ratio = input
        .parse::<f64>()
        .map_err(|_| format!("Invalid ratio: {input}"))?;

    if !(0.0..=1.0).contains(&ratio) {
        return Err(format!("Ratio must be within [0, 1], got {ratio}"));
    }

    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("-23.5573,-46.6699"), Ok((-23.5573, -46.6699)));
        assert_eq!(parse_center(" 1.5 , 2 "), Ok((1.5, 2.0)));
        assert!(parse_center("-23.5573").is_err());
        assert!(parse_center("north,-46.6").is_err());
        assert!(parse_center("NaN,1").is_err());
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("0.2"), Ok(0.2));
        assert_eq!(parse_ratio("1"), Ok(1.0));
        assert!(parse_ratio("1.2").is_err());
        assert!(parse_ratio("often").is_err());
    }
}
