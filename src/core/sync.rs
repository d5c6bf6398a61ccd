use crate::core::delivery::estimate_delivery;
use crate::core::pay_rate::compute_pay_rate;
use crate::domain::model::{PayFields, SyncOutcome};

/// Handle an edit to the delivery estimator's mileage field.
///
/// The estimator's mileage is authoritative: the pay calculator's mileage
/// field is overwritten on every edit — the trimmed raw value when valid,
/// the empty string when not — and the rate is recomputed from the updated
/// fields. The relationship is one-way; nothing here writes back to the
/// estimator.
pub fn sync_mileage(raw_miles: &str, fields: &mut PayFields) -> SyncOutcome {
    let estimate = estimate_delivery(raw_miles);

    fields.miles = if estimate.miles.is_some() {
        raw_miles.trim().to_string()
    } else {
        String::new()
    };
    tracing::debug!("Synced pay-calculator miles to {:?}", fields.miles);

    let rate_display = compute_pay_rate(&fields.pay, &fields.miles);

    SyncOutcome {
        delivery_display: estimate.display,
        rate_display,
    }
}
