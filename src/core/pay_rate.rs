use crate::utils::validation::parse_positive_number;

pub const PROMPT_PAY_AND_MILES: &str = "Enter pay and miles to calculate";

/// Compute a carrier's per-mile rate from raw pay and mileage field values.
/// Two decimal places via `{:.2}`, which rounds ties to even.
pub fn compute_pay_rate(pay_raw: &str, miles_raw: &str) -> String {
    let (pay, miles) = match (
        parse_positive_number(pay_raw),
        parse_positive_number(miles_raw),
    ) {
        (Some(pay), Some(miles)) => (pay, miles),
        _ => return PROMPT_PAY_AND_MILES.to_string(),
    };

    format!("${:.2} per mile", pay / miles)
}
