//! Unit conversion utilities
//!
//! Geometry is computed in inches. Lengths arriving from the UI may be
//! decimal or fractional inches (`"34 1/2"`, `"34-1/2"`), feet and inches
//! (`"10' 6"`) or millimeters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Inches (native)
    #[default]
    Imperial,
    /// Millimeters
    Metric,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "Imperial"),
            Self::Metric => write!(f, "Metric"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            "metric" | "mm" => Ok(Self::Metric),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length given in inches for display.
///
/// Imperial output rounds to the nearest 1/16" and reduces the fraction.
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", value_in * MM_PER_INCH),
        MeasurementSystem::Imperial => {
            let negative = value_in < 0.0;
            let sixteenths = (value_in.abs() * 16.0).round() as i64;
            let whole = sixteenths / 16;
            let mut num = sixteenths % 16;
            let mut den = 16;
            while num > 0 && num % 2 == 0 {
                num /= 2;
                den /= 2;
            }
            let sign = if negative && sixteenths > 0 { "-" } else { "" };
            match (whole, num) {
                (w, 0) => format!("{}{}", sign, w),
                (0, n) => format!("{}{}/{}", sign, n, den),
                (w, n) => format!("{}{} {}/{}", sign, w, n, den),
            }
        }
    }
}

/// Parse a length string to inches.
///
/// Imperial input may carry a feet part, as in `"10'"`, `"10' 6"` or
/// `"10'-6 1/2"`.
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim().trim_end_matches('"').trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input
            .parse::<f64>()
            .map(|mm| mm / MM_PER_INCH)
            .map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => match input.split_once('\'') {
            Some((feet, inches)) => {
                let feet = feet.trim();
                let negative = feet.starts_with('-');
                let feet = feet
                    .trim_start_matches('-')
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| "Invalid feet")?;
                // "10'-6" separates feet and inches with a dash
                let inches = inches.trim().trim_end_matches('"').trim();
                let inches = inches.strip_prefix('-').unwrap_or(inches).trim();
                if inches.starts_with('-') || inches.contains('\'') {
                    return Err("Invalid inches".to_string());
                }
                let inches = if inches.is_empty() {
                    0.0
                } else {
                    parse_inches(inches)?
                };
                let total = feet * 12.0 + inches;
                Ok(if negative { -total } else { total })
            }
            None => parse_inches(input),
        },
    }
}

/// Decimal or fractional inches, e.g. `"24"`, `"34 1/2"`, `"34-1/2"`.
fn parse_inches(input: &str) -> Result<f64, String> {
    if !input.contains('/') {
        return input.parse::<f64>().map_err(|e| e.to_string());
    }

    let negative = input.starts_with('-');
    let body = input.trim_start_matches('-');
    // "34-1/2" is a common way to write a mixed number
    let body = body.replacen('-', " ", 1);

    let mut total = 0.0;
    for part in body.split_whitespace() {
        if let Some((num, den)) = part.split_once('/') {
            let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
            let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }
    Ok(if negative { -total } else { total })
}

/// Get the unit label for the given system ("in" or "mm")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Imperial => "in",
        MeasurementSystem::Metric => "mm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_fraction_format() {
        assert_eq!(format_length(34.5, MeasurementSystem::Imperial), "34 1/2");
        assert_eq!(format_length(0.75, MeasurementSystem::Imperial), "3/4");
        assert_eq!(format_length(24.0, MeasurementSystem::Imperial), "24");
        assert_eq!(format_length(0.0625, MeasurementSystem::Imperial), "1/16");
        assert_eq!(format_length(-1.5, MeasurementSystem::Imperial), "-1 1/2");
    }

    #[test]
    fn test_metric_format() {
        assert_eq!(format_length(1.0, MeasurementSystem::Metric), "25.4");
    }

    #[test]
    fn test_imperial_parse() {
        assert_eq!(parse_length("34 1/2", MeasurementSystem::Imperial).unwrap(), 34.5);
        assert_eq!(parse_length("34-1/2", MeasurementSystem::Imperial).unwrap(), 34.5);
        assert_eq!(parse_length("3/4\"", MeasurementSystem::Imperial).unwrap(), 0.75);
        assert_eq!(parse_length("-1/2", MeasurementSystem::Imperial).unwrap(), -0.5);
        assert_eq!(parse_length("24", MeasurementSystem::Imperial).unwrap(), 24.0);
    }

    #[test]
    fn test_feet_and_inches_parse() {
        let imperial = MeasurementSystem::Imperial;
        assert_eq!(parse_length("10' 6\"", imperial).unwrap(), 126.0);
        assert_eq!(parse_length("10' 6", imperial).unwrap(), 126.0);
        assert_eq!(parse_length("10'", imperial).unwrap(), 120.0);
        assert_eq!(parse_length("10'-6 1/2", imperial).unwrap(), 126.5);
        assert_eq!(parse_length("-2' 6", imperial).unwrap(), -30.0);
        assert!(parse_length("ten' 6", imperial).is_err());
        assert!(parse_length("10' 6' 2", imperial).is_err());
    }

    #[test]
    fn test_metric_parse() {
        let inches = parse_length("254", MeasurementSystem::Metric).unwrap();
        assert!((inches - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_length("1/0", MeasurementSystem::Imperial).is_err());
        assert!(parse_length("abc", MeasurementSystem::Imperial).is_err());
        assert_eq!(parse_length("  ", MeasurementSystem::Imperial).unwrap(), 0.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(get_unit_label(MeasurementSystem::Imperial), "in");
        assert_eq!(get_unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!("mm".parse::<MeasurementSystem>(), Ok(MeasurementSystem::Metric));
    }
}
