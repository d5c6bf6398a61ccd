use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named message templates. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    templates: HashMap<String, String>,
}

impl TemplateSet {
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    /// The production template set shipped with the dashboard.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            "short_main_sms".to_string(),
            "Hey {{firstName}}, I have my drivers in the area – is the car ready to go?"
                .to_string(),
        );
        templates.insert(
            "main_sms".to_string(),
            "Hey {{firstName}}, this is Adam with Flix Auto Transport.\nI just received your quote request about the {{carYearMakeAndModel}} and I've got drivers available in that route.\nIs the vehicle ready to go? \n\nAdam \nTransport Manager at Flix AT \n(512) 543-1267"
                .to_string(),
        );
        templates.insert(
            "positive_reply".to_string(),
            "Hey {{firstName}}, I'm offering you a flat, guaranteed rate of {{totalPrice}} — tax included.\nThat covers full insurance up to $250K, door-to-door delivery, and up to 100 lbs of personal items at no extra charge.\nOnce the vehicle's moving, you'll have online tracking, 24/7 support, and no upfront payments or cancellation fees.\n my name is Adam and I represent FlixAutoTransport.com — one of the top 3 rated in the country."
                .to_string(),
        );
        templates.insert(
            "negative_response".to_string(),
            "I'll keep this locked in for you but, Just a heads-up — a lot of lowball quotes out there look good, but most come with bait-and-switch tactics. No hidden fees here."
                .to_string(),
        );
        templates.insert(
            "follow_up".to_string(),
            "Hey {{firstName}}, just following up — If you're ready, I can get your vehicle on the schedule with a guaranteed rate and full coverage.\nNo upfront payment, no hassle.\nLet me know how you'd like to move forward.\n– Adam, Flix Auto Transport"
                .to_string(),
        );
        Self { templates }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Raw customer form values as the UI holds them; trimming and presence
/// checks happen at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerFields {
    pub first_name: String,
    pub car: String,
    pub total_price: String,
}

/// Raw text contents of the pay calculator's two input fields. Owned by the
/// UI collaborator; the sync coordinator overwrites `miles` on every
/// delivery-mileage edit.
#[derive(Debug, Clone, Default)]
pub struct PayFields {
    pub pay: String,
    pub miles: String,
}

/// Result of a delivery estimate: the display string, and the parsed mileage
/// when the input was a valid positive number.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryEstimate {
    pub display: String,
    pub miles: Option<f64>,
}

/// Combined output of a mileage edit after the one-way sync has run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub delivery_display: String,
    pub rate_display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Which copy path ended up delivering the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Primary,
    Fallback,
}
