//! Output formatting for search responses (table, JSON, CSV, debug dump).

use crate::config::OutputFormat;
use crate::ebay::{Item, SearchResponse};

/// Formats search responses for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a whole response.
    pub fn format_response(&self, response: &SearchResponse) -> String {
        match self.format {
            OutputFormat::Dump => dump(response),
            _ => self.format_items(&response.items),
        }
    }

    /// Formats a list of items.
    pub fn format_items(&self, items: &[Item]) -> String {
        if items.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No items found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_items(items),
            OutputFormat::Table => self.table_items(items),
            OutputFormat::Csv => self.csv_items(items),
            OutputFormat::Dump => items.iter().map(dump_item).collect::<Vec<_>>().join("\n"),
        }
    }

    // JSON formatting

    fn json_items(&self, items: &[Item]) -> String {
        serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_items(&self, items: &[Item]) -> String {
        let id_width = 12;
        let price_width = 10;
        let shipping_width = 8;
        let ends_width = 16;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<price_width$}  {:<shipping_width$}  {:<price_width$}  {:<price_width$}  {:<ends_width$}  {}",
            "Item ID", "Price", "Shipping", "Total", "BIN", "Ends", "Title"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<price_width$}  {:-<shipping_width$}  {:-<price_width$}  {:-<price_width$}  {:-<ends_width$}  {:-<title_width$}",
            "", "", "", "", "", "", ""
        ));

        for item in items {
            let price_str = format!("{:.2}", item.current_price);
            let shipping_str = if item.shipping_price > 0.0 {
                format!("{:.2}", item.shipping_price)
            } else {
                "Free".to_string()
            };
            let total_str = format!("{:.2}", item.total_price());
            let bin_str = if item.has_buy_it_now() {
                format!("{:.2}", item.bin_price)
            } else {
                "-".to_string()
            };
            let ends_str = item
                .end_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "N/A".to_string());

            lines.push(format!(
                "{:<id_width$}  {:>price_width$}  {:>shipping_width$}  {:>price_width$}  {:>price_width$}  {:<ends_width$}  {}",
                item.item_id,
                price_str,
                shipping_str,
                total_str,
                bin_str,
                ends_str,
                truncate(&item.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", items.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "item_id,title,current_price,currency,shipping_price,bin_price,ships_to,location,end_time,global_id,url"
            .to_string()
    }

    fn csv_items(&self, items: &[Item]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for item in items {
            let end_time = item.end_time.map(|t| t.to_rfc3339()).unwrap_or_default();

            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                item.item_id,
                Self::csv_escape(&item.title),
                item.current_price,
                item.currency,
                item.shipping_price,
                item.bin_price,
                Self::csv_escape(&item.ships_to.join(" ")),
                Self::csv_escape(&item.location),
                end_time,
                item.global_id,
                item.listing_url
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

/// Renders the human-readable debug dump of a response.
///
/// Not a stable format; use JSON for anything machine-read.
pub fn dump(response: &SearchResponse) -> String {
    let mut lines = vec![
        "SearchResponse".to_string(),
        "--------------------------".to_string(),
        format!("Timestamp: {}", response.timestamp),
        "Items:".to_string(),
        "------".to_string(),
    ];

    for item in &response.items {
        lines.push(dump_item(item));
    }

    lines.join("\n")
}

fn dump_item(item: &Item) -> String {
    [
        format!("Title: {}", item.title),
        "------".to_string(),
        format!("\tListing Url:     {}", item.listing_url),
        format!("\tBin Price:       {}", item.bin_price),
        format!("\tCurrent Price:   {}", item.current_price),
        format!("\tShipping Price:  {}", item.shipping_price),
        format!("\tShips To:        [{}]", item.ships_to.join(" ")),
        format!("\tSeller Location: {}", item.location),
        String::new(),
    ]
    .join("\n")
}
