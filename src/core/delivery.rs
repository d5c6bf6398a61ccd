use crate::domain::model::DeliveryEstimate;
use crate::utils::validation::parse_positive_number;

pub const PROMPT_MILES: &str = "Enter miles to calculate";

const MILES_PER_DAY: f64 = 500.0;

/// Estimate transit time from a raw mileage field value.
///
/// The buckets are deliberately coarse: one driving day per 500 miles,
/// rounded up, with ranged phrasing (en-dash) for mid-size trips. On valid
/// input the parsed mileage is carried alongside the display string so the
/// sync coordinator can propagate it.
pub fn estimate_delivery(raw: &str) -> DeliveryEstimate {
    let miles = match parse_positive_number(raw) {
        Some(miles) => miles,
        None => {
            return DeliveryEstimate {
                display: PROMPT_MILES.to_string(),
                miles: None,
            }
        }
    };

    let days = (miles / MILES_PER_DAY).ceil() as u64;
    let display = match days {
        1 => "About 1 day".to_string(),
        2 => "About 2 days".to_string(),
        3 => "About 2–3 days".to_string(),
        4..=5 => format!("About {}–{} days", days - 1, days),
        _ => format!("About {} days", days),
    };

    tracing::debug!("Estimated {} miles as {} day(s)", miles, days);

    DeliveryEstimate {
        display,
        miles: Some(miles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_prompts() {
        for raw in ["", "   ", "abc", "0", "-5"] {
            let est = estimate_delivery(raw);
            assert_eq!(est.display, PROMPT_MILES, "input {:?}", raw);
            assert_eq!(est.miles, None);
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            ("1", "About 1 day"),
            ("500", "About 1 day"),
            ("501", "About 2 days"),
            ("1000", "About 2 days"),
            ("1001", "About 2–3 days"),
            ("1500", "About 2–3 days"),
            ("1501", "About 3–4 days"),
            ("2000", "About 3–4 days"),
            ("2500", "About 4–5 days"),
            ("2501", "About 6 days"),
            ("3000", "About 6 days"),
            ("5000", "About 10 days"),
        ];
        for (raw, expected) in cases {
            assert_eq!(estimate_delivery(raw).display, expected, "miles {}", raw);
        }
    }

    #[test]
    fn test_valid_input_carries_parsed_miles() {
        let est = estimate_delivery(" 1200 ");
        assert_eq!(est.miles, Some(1200.0));
    }
}
