// Headless commands - one-shot search and type listing without the TUI
//
// Output goes to stdout (a padded table or JSON); logs and errors go to
// stderr so the output can be piped.

use crate::api::PropertySource;
use crate::model::{Property, PropertyType, PropertyTypeOption, SearchQuery};
use crate::search;
use crate::tui::components::property_table::format_area;
use anyhow::{Context, Result};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["Address", "Postcode", "Number of Rooms", "Floor Area (m²)"];

/// Run `immo search`
pub async fn search_command(
    source: &dyn PropertySource,
    address: String,
    property_type: Option<String>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let query = SearchQuery::new(address, property_type.map(PropertyType::new));
    let properties = search::run_search(source, &query)
        .await
        .context("Search failed")?;

    tracing::debug!("Headless search returned {} row(s)", properties.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &properties)
            .context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        out.write_all(render_table(&properties).as_bytes())?;
    }
    Ok(())
}

/// Run `immo types`
pub async fn types_command(source: &dyn PropertySource, out: &mut impl Write) -> Result<()> {
    let options = search::load_property_types(source)
        .await
        .context("Could not load property types")?;
    out.write_all(render_types(&options).as_bytes())?;
    Ok(())
}

fn render_types(options: &[PropertyTypeOption]) -> String {
    let width = options
        .iter()
        .filter_map(|o| o.value.as_ref())
        .map(|v| v.as_str().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for option in options {
        let value = option.value.as_ref().map(PropertyType::as_str).unwrap_or("-");
        out.push_str(&pad(value, width));
        out.push_str("  ");
        out.push_str(&option.label);
        out.push('\n');
    }
    out
}

/// Plain-text table with columns padded to display width
fn render_table(properties: &[Property]) -> String {
    if properties.is_empty() {
        return "No property results to show\n".to_string();
    }

    let rows: Vec<[String; 4]> = properties
        .iter()
        .map(|p| {
            [
                p.address.clone(),
                p.postcode.clone(),
                p.number_of_rooms.to_string(),
                format_area(p.floor_area),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 4]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_row(HEADERS);
    for row in &rows {
        push_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]);
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureSource;

    #[tokio::test]
    async fn test_search_prints_aligned_table() {
        let source = FixtureSource::new();
        let mut out = Vec::new();
        search_command(&source, "St".to_string(), None, false, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Address"));
        assert!(lines[0].contains("Floor Area (m²)"));

        // Second column starts at the same display column on every line
        let column = |line: &str| {
            let gap = line.find("  ").unwrap();
            let idx = gap + line[gap..].find(|c: char| c != ' ').unwrap();
            line[..idx].width()
        };
        let header = column(lines[0]);
        assert!(lines[1..].iter().all(|l| column(l) == header));
    }

    #[tokio::test]
    async fn test_search_json_with_type() {
        let source = FixtureSource::new();
        let mut out = Vec::new();
        search_command(
            &source,
            "St".to_string(),
            Some("detached_house".to_string()),
            true,
            &mut out,
        )
        .await
        .unwrap();

        let parsed: Vec<Property> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed
            .iter()
            .all(|p| p.property_type.as_str() == "detached_house"));
    }

    #[tokio::test]
    async fn test_search_failure_is_an_error() {
        let source = FixtureSource::new().with_failure_rate(1.0);
        let mut out = Vec::new();
        let err = search_command(&source, "St".to_string(), None, false, &mut out)
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("An unexpected error occurred"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_prints_placeholder() {
        let source = FixtureSource::new();
        let mut out = Vec::new();
        search_command(&source, "Nowhere".to_string(), None, false, &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No property results to show\n");
    }

    #[tokio::test]
    async fn test_types_lists_all_first() {
        let source = FixtureSource::new();
        let mut out = Vec::new();
        types_command(&source, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with('-'));
        assert!(first.ends_with("All"));
        assert!(text.contains("detached_house"));
    }
}
