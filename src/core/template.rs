use crate::domain::model::{CustomerFields, TemplateSet};
use crate::utils::validation::non_empty;
use regex::{Captures, Regex};

const FALLBACK_NAME: &str = "[Customer Name]";
const FALLBACK_VEHICLE: &str = "[Vehicle Details]";
const FALLBACK_PRICE: &str = "[Total Price]";

/// Resolves named templates against the customer form fields.
///
/// Substitution is a single pass over the template body, so a substituted
/// value is never re-scanned for placeholders. Unknown `{{...}}` tokens pass
/// through as literal text.
pub struct TemplateEngine {
    templates: TemplateSet,
    placeholder: Regex,
}

impl TemplateEngine {
    pub fn new(templates: TemplateSet) -> Self {
        // carYearMakeAndModel must precede its alias car in the alternation
        let placeholder =
            Regex::new(r"\{\{(firstName|carYearMakeAndModel|car|totalPrice)\}\}").unwrap();
        Self {
            templates,
            placeholder,
        }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render a template by name. `None` means "no content": the name was
    /// empty or unknown, and the caller should clear its output and disable
    /// the copy action.
    pub fn render(&self, name: &str, fields: &CustomerFields) -> Option<String> {
        if name.is_empty() {
            return None;
        }

        let body = match self.templates.get(name) {
            Some(body) => body,
            None => {
                tracing::debug!("Unknown template requested: {}", name);
                return None;
            }
        };

        let message = self.placeholder.replace_all(body, |caps: &Captures| {
            match caps.get(1).map(|m| m.as_str()) {
                Some("firstName") => non_empty(&fields.first_name)
                    .unwrap_or(FALLBACK_NAME)
                    .to_string(),
                Some("carYearMakeAndModel") | Some("car") => non_empty(&fields.car)
                    .unwrap_or(FALLBACK_VEHICLE)
                    .to_string(),
                Some("totalPrice") => match non_empty(&fields.total_price) {
                    Some(price) => format!("${}", price),
                    None => FALLBACK_PRICE.to_string(),
                },
                _ => caps[0].to_string(),
            }
        });

        Some(message.into_owned())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(TemplateSet::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn engine_with(name: &str, body: &str) -> TemplateEngine {
        let mut templates = HashMap::new();
        templates.insert(name.to_string(), body.to_string());
        TemplateEngine::new(TemplateSet::new(templates))
    }

    fn fields(first_name: &str, car: &str, total_price: &str) -> CustomerFields {
        CustomerFields {
            first_name: first_name.to_string(),
            car: car.to_string(),
            total_price: total_price.to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_all_fields() {
        let engine = engine_with(
            "quote",
            "Hey {{firstName}}, the {{carYearMakeAndModel}} ships for {{totalPrice}}.",
        );
        let out = engine
            .render("quote", &fields("Sarah", "2019 Honda Civic", "850"))
            .unwrap();
        assert_eq!(out, "Hey Sarah, the 2019 Honda Civic ships for $850.");
    }

    #[test]
    fn test_render_empty_fields_use_fallbacks() {
        let engine = engine_with(
            "quote",
            "Hey {{firstName}}, about the {{car}} — total is {{totalPrice}}.",
        );
        let out = engine.render("quote", &CustomerFields::default()).unwrap();
        assert_eq!(
            out,
            "Hey [Customer Name], about the [Vehicle Details] — total is [Total Price]."
        );
    }

    #[test]
    fn test_render_whitespace_only_price_falls_back() {
        let engine = engine_with("t", "{{totalPrice}}");
        let out = engine.render("t", &fields("", "", "   ")).unwrap();
        assert_eq!(out, "[Total Price]");
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let engine = engine_with("t", "{{firstName}} and {{firstName}} again");
        let out = engine.render("t", &fields("Ana", "", "")).unwrap();
        assert_eq!(out, "Ana and Ana again");
    }

    #[test]
    fn test_render_does_not_rescan_substituted_values() {
        let engine = engine_with("t", "{{firstName}}");
        let out = engine.render("t", &fields("{{totalPrice}}", "", "")).unwrap();
        assert_eq!(out, "{{totalPrice}}");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders_alone() {
        let engine = engine_with("t", "Hi {{firstName}}, ref {{orderId}}");
        let out = engine.render("t", &fields("Ana", "", "")).unwrap();
        assert_eq!(out, "Hi Ana, ref {{orderId}}");
    }

    #[test]
    fn test_render_unknown_or_empty_name_yields_no_content() {
        let engine = TemplateEngine::default();
        assert!(engine.render("", &CustomerFields::default()).is_none());
        assert!(engine
            .render("no_such_template", &CustomerFields::default())
            .is_none());
    }

    #[test]
    fn test_builtin_templates_fully_resolve() {
        let engine = TemplateEngine::default();
        let fields = fields("Sam", "2021 Ford F-150", "1200");
        for name in ["short_main_sms", "main_sms", "positive_reply", "negative_response", "follow_up"] {
            let out = engine.render(name, &fields).unwrap();
            assert!(!out.contains("{{firstName}}"), "{} left a placeholder", name);
            assert!(!out.contains("{{carYearMakeAndModel}}"));
            assert!(!out.contains("{{car}}"));
            assert!(!out.contains("{{totalPrice}}"));
        }
    }
}
