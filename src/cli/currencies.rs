use super::ui;
use crate::core::{CurrencyInfo, RateResolver};
use anyhow::Result;
use comfy_table::{Cell, Color, Table};

pub const OFFLINE_WARNING: &str =
    "Using offline currency list. Exchange rates may not be available.";

pub async fn run(resolver: &RateResolver) -> Result<()> {
    let spinner = ui::new_spinner("Loading currencies...");
    let catalog = resolver.load_catalog().await;
    spinner.finish_and_clear();

    if catalog.is_offline() {
        println!("{}", ui::style_text(OFFLINE_WARNING, ui::StyleType::Warning));
    }

    let (popular, rest) = catalog.sections();
    for (title, entries) in [("Popular Currencies", popular), ("All Currencies", rest)] {
        if entries.is_empty() {
            continue;
        }
        println!(
            "\n{}",
            ui::style_text(&format!("── {title} ──"), ui::StyleType::Title)
        );
        println!("{}", currency_table(entries));
    }

    if let Some(at) = resolver.state().last_updated().await {
        println!(
            "\n{}",
            ui::style_text(&ui::last_updated_line(at), ui::StyleType::Subtle)
        );
    }
    Ok(())
}

fn currency_table(entries: &[CurrencyInfo]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
    ]);
    for info in entries {
        let symbol = match &info.symbol {
            Some(symbol) => Cell::new(symbol),
            None => Cell::new("-").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(info.code.as_str()),
            symbol,
            Cell::new(&info.display_name),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_table_rows() {
        let entries = vec![
            CurrencyInfo::from_code("EUR".parse().unwrap()),
            CurrencyInfo::from_code("ZZZ".parse().unwrap()),
        ];
        let rendered = currency_table(&entries).to_string();
        assert!(rendered.contains("EUR"));
        assert!(rendered.contains("Euro"));
        assert!(rendered.contains("ZZZ Currency"));
        assert!(rendered.contains("Symbol"));
    }
}
