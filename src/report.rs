//! Report rendering module
//!
//! This module renders a fully populated title record into the
//! human-readable report block the binary prints. Rendering is pure so the
//! formatting rules (year selection, "N/A" defaults) can be tested without
//! touching the network.

use crate::metadata_lookup::{Company, TitleRecord};

/// Width of the frame and separator lines around a report.
const FRAME_WIDTH: usize = 50;

/// Renders the report block for one title record.
///
/// The block is framed by `=` lines and contains the selected fields in a
/// fixed order. Missing optional fields are rendered as "N/A"; the year
/// line prefers the series year span over a single release year.
///
/// # Arguments
///
/// * `record` - The record to render
///
/// # Returns
///
/// The rendered report as a string ending with the closing frame line.
pub fn format_title_report(record: &TitleRecord) -> String {
    let mut out = String::new();

    out.push_str(&"=".repeat(FRAME_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "Information for '{}' (ID: {})\n",
        record.title, record.id
    ));
    out.push_str(&"-".repeat(FRAME_WIDTH));
    out.push('\n');

    out.push_str(&format!(
        "Localized title: {}\n",
        record.localized_title.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Cover URL: {}\n",
        record.cover_url.as_deref().unwrap_or("N/A")
    ));

    out.push_str("\nGenres:\n");
    if record.genres.is_empty() {
        out.push_str("  N/A\n");
    } else {
        for genre in &record.genres {
            out.push_str(&format!("  - {}\n", genre));
        }
    }

    out.push('\n');
    out.push_str(&year_line(record));
    out.push('\n');

    out.push_str("\nDistributors:\n");
    out.push_str(&company_lines(&record.distributors));

    out.push_str("\nProduction companies:\n");
    out.push_str(&company_lines(&record.production_companies));

    out.push_str(&"=".repeat(FRAME_WIDTH));
    out.push('\n');

    out
}

/// Selects the year line for a record.
///
/// The series year span wins over a single release year; a record with
/// neither gets the combined "N/A" line.
fn year_line(record: &TitleRecord) -> String {
    if let Some(series_years) = &record.series_years {
        format!("Series years: {}", series_years)
    } else if let Some(year) = record.year {
        format!("Year: {}", year)
    } else {
        "Year/Series years: N/A".to_string()
    }
}

/// Renders a company list as indented bullet lines.
///
/// An empty list renders as a single "  N/A" line; an entry without a name
/// renders as "  - N/A".
fn company_lines(companies: &[Company]) -> String {
    if companies.is_empty() {
        return "  N/A\n".to_string();
    }

    companies
        .iter()
        .map(|company| format!("  - {}\n", company.name.as_deref().unwrap_or("N/A")))
        .collect()
}
