//! Console formatting helpers for the `explore` binary.
//!
//! Only used for manual inspection of query results during development;
//! nothing here is on the serving path.

use serde::Serialize;

use crate::cargo_client::CargoRecord;

/// Prints any serializable value as indented JSON.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => println!("<unprintable: {e}>"),
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    widths
}

fn border(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        for _ in 0..width + 2 {
            line.push(fill);
        }
        line.push('+');
    }
    line
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
        line.push_str(" |");
    }
    line
}

/// Renders headers and rows as a grid table, column widths fitted to content.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&border(&widths, '-'));
    out.push('\n');
    out.push_str(&format_row(&header_cells, &widths));
    out.push('\n');
    out.push_str(&border(&widths, '='));
    out.push('\n');

    for row in rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
        out.push_str(&border(&widths, '-'));
        out.push('\n');
    }

    out
}

/// Prints a summary of a query result: record count, a sample record, and
/// the field names the table actually returned.
pub fn print_summary(records: &[CargoRecord], title: &str) {
    if records.is_empty() {
        println!("{title}: No data returned");
        return;
    }

    println!("\n=== {title} ===");
    println!("Total records: {}", records.len());

    println!("\nSample record:");
    print_json(&records[0]);

    println!("\nAvailable fields:");
    for field in records[0].keys() {
        println!("- {field}");
    }

    println!("{}", "=".repeat(title.chars().count() + 8));
}

/// Prints rows from the Leagues table as a region overview.
pub fn format_regions(records: &[CargoRecord]) {
    if records.is_empty() {
        println!("No regions data available");
        return;
    }

    println!("\n=== League of Legends Regions ===\n");

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.get_str("League").to_string(),
                r.get_str("League").to_string(),
                r.get_str("League_Short").to_string(),
                r.get_str("Region").to_string(),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(&["ID", "Name", "Abbreviation", "Region"], &rows)
    );
    println!("Total regions: {}", records.len());
}

/// Prints the available tournament years, newest first.
pub fn format_years(years: &[i32]) {
    if years.is_empty() {
        println!("No years data available");
        return;
    }

    println!("\n=== Available Tournament Years ===\n");

    let mut sorted = years.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let joined = sorted
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    println!("{joined}");
    println!("\nTotal years available: {}", years.len());
}

/// Prints tournaments for one region and year as a table.
pub fn format_tournaments(records: &[CargoRecord], region: &str, year: i32) {
    if records.is_empty() {
        println!("No tournaments found for {region} in {year}");
        return;
    }

    println!("\n=== Tournaments for {region} in {year} ===\n");

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|t| {
            vec![
                t.get_str("Name").to_string(),
                t.get_str("DateStart").to_string(),
                t.get_str("Date").to_string(),
                t.get_str("Split").to_string(),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(&["Name", "Start Date", "End Date", "Split"], &rows)
    );
    println!("Total tournaments: {}", records.len());
}

/// Fixed-width listing for the filter scenarios; long values truncated,
/// null-heavy cells shown as N/A.
pub fn format_filtered_tournaments(
    records: &[CargoRecord],
    year: Option<&str>,
    region_code: Option<&str>,
) {
    let mut filters = Vec::new();
    if let Some(year) = year {
        filters.push(format!("Year: {year}"));
    }
    if let Some(code) = region_code {
        filters.push(format!("Region: {code}"));
    }
    let filter_text = if filters.is_empty() {
        "No filters".to_string()
    } else {
        filters.join(", ")
    };

    println!("\n=== Tournaments ({filter_text}) ===\n");

    if records.is_empty() {
        println!("No tournaments found matching these filters.");
        return;
    }

    println!(
        "{:<50} {:<15} {:<15} {:<12} {:<12}",
        "Name", "League", "Region", "Start Date", "End Date"
    );
    println!("{}", "-".repeat(105));

    for t in records {
        println!(
            "{:<50} {:<15} {:<15} {:<12} {:<12}",
            truncate(t.get_or("Name", "N/A"), 50),
            truncate(t.get_or("League", "N/A"), 15),
            truncate(t.get_or("Region", "N/A"), 15),
            truncate(t.get_or("DateStart", "N/A"), 12),
            truncate(t.get_or("Date", "N/A"), 12),
        );
    }

    println!("\nTotal tournaments: {}", records.len());
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
