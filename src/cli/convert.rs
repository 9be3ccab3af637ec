use super::ui;
use crate::core::{ConversionQuery, ConversionResult, RateResolver};
use anyhow::Result;

pub const APPROXIMATE_WARNING: &str =
    "Using approximate exchange rate. Results may not be current.";

/// Validates the input, converts and prints the result.
pub async fn run(
    resolver: &RateResolver,
    from: &str,
    to: &str,
    amount: &str,
    swap: bool,
) -> Result<()> {
    let mut query = ConversionQuery::parse(from, to, amount)?;
    if swap {
        query = query.swapped();
    }

    let spinner = ui::new_spinner("Converting...");
    let result = resolver.convert(&query).await;
    spinner.finish_and_clear();

    println!("{}", render_result(&result?));
    Ok(())
}

/// Renders a result the way it is shown to the user.
pub fn render_result(result: &ConversionResult) -> String {
    let converted = format!(
        "{}{}",
        result.to.symbol().unwrap_or_default(),
        ui::format_decimal(result.converted_amount, 2, 4)
    );
    let mut lines = vec![
        ui::style_text(&converted, ui::StyleType::Value),
        format!(
            "{} {} equals",
            ui::format_decimal(result.source_amount, 0, 2),
            result.from
        ),
        format!(
            "1 {} = {} {}",
            result.from,
            ui::format_decimal(result.rate, 4, 6),
            result.to
        ),
        ui::style_text(&ui::last_updated_line(result.fetched_at), ui::StyleType::Subtle),
    ];
    if result.is_approximate {
        lines.push(ui::style_text(APPROXIMATE_WARNING, ui::StyleType::Warning));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn query(from: &str, to: &str, amount: &str) -> ConversionQuery {
        ConversionQuery::parse(from, to, amount).unwrap()
    }

    #[test]
    fn test_render_live_result() {
        let result =
            ConversionResult::live(&query("USD", "EUR", "1234.5"), dec!(0.85), "a").unwrap();
        let rendered = console::strip_ansi_codes(&render_result(&result)).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "€1,049.325");
        assert_eq!(lines[1], "1,234.5 USD equals");
        assert_eq!(lines[2], "1 USD = 0.8500 EUR");
        assert!(lines[3].starts_with("Last updated: "));
        assert!(!rendered.contains(APPROXIMATE_WARNING));
    }

    #[test]
    fn test_render_approximate_result_warns() {
        let result = ConversionResult::approximate(&query("EUR", "ZZZ", "10"), dec!(140)).unwrap();
        let rendered = console::strip_ansi_codes(&render_result(&result)).to_string();

        assert!(rendered.starts_with("1,400.00\n"));
        assert!(rendered.ends_with(APPROXIMATE_WARNING));
    }
}
