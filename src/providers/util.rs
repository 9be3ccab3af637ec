use crate::core::currency::CurrencyCode;

/// Placeholder replaced by the base currency in endpoint templates.
pub const BASE_PLACEHOLDER: &str = "{base}";

/// Fills the base currency into an endpoint template.
///
/// Templates without the placeholder are returned as-is, for providers with a
/// fixed base.
pub fn render_endpoint(template: &str, base: &CurrencyCode) -> String {
    template.replace(BASE_PLACEHOLDER, base.as_str())
}
