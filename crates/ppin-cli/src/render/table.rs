//! Interaction table rendering: terminal table, CSV and TSV

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use ppin_common::table::display_value;
use ppin_common::InteractionTable;

/// Header of the row label column
const INDEX_HEADER: &str = "index";

/// Terminal table of the first `rows` rows (0 renders every row)
pub fn format_as_table(table: &InteractionTable, rows: usize) -> String {
    let shown = if rows == 0 { table.len() } else { rows.min(table.len()) };

    let mut header = vec![INDEX_HEADER.to_string()];
    header.extend(table.columns().iter().cloned());

    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header);

    for row in table.rows().take(shown) {
        let mut cells = vec![row.label.to_string()];
        cells.extend(row.values().iter().map(display_value));
        out.add_row(cells);
    }

    let mut rendered = format!("{out}\n");
    if shown < table.len() {
        rendered.push_str(&format!(
            "... {} more rows (use --rows 0 to show all)\n",
            table.len() - shown
        ));
    }
    rendered
}

/// Format as CSV with a header row
pub fn format_as_csv(table: &InteractionTable) -> String {
    format_delimited(table, ",", csv_escape)
}

/// Format as TSV with a header row
pub fn format_as_tsv(table: &InteractionTable) -> String {
    format_delimited(table, "\t", tsv_escape)
}

fn format_delimited(table: &InteractionTable, separator: &str, escape: fn(&str) -> String) -> String {
    let mut output = String::new();

    let header: Vec<String> = std::iter::once(INDEX_HEADER)
        .chain(table.columns().iter().map(String::as_str))
        .map(escape)
        .collect();
    output.push_str(&header.join(separator));
    output.push('\n');

    for row in table.rows() {
        let cells: Vec<String> = std::iter::once(row.label.to_string())
            .chain(row.values().iter().map(display_value))
            .map(|cell| escape(&cell))
            .collect();
        output.push_str(&cells.join(separator));
        output.push('\n');
    }

    output
}

/// Escape CSV value
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// TSV has no quoting; tabs and newlines inside a cell become spaces
fn tsv_escape(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> InteractionTable {
        let records = vec![
            json!({"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "MDM2", "PUBMED_AUTHOR": "Momand J, Zambetti GP"}),
            json!({"OFFICIAL_SYMBOL_A": "EP300", "OFFICIAL_SYMBOL_B": "TP53", "SCORE": 0.9}),
            json!({"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "ATM"}),
        ];
        InteractionTable::from_records(
            ["103", "117", "250"]
                .iter()
                .zip(records)
                .map(|(id, r)| (id.to_string(), r.as_object().cloned().unwrap())),
        )
    }

    #[test]
    fn test_format_as_csv() {
        let csv = format_as_csv(&sample());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "index,OFFICIAL_SYMBOL_A,OFFICIAL_SYMBOL_B,PUBMED_AUTHOR,SCORE");
        assert_eq!(lines[1], "103,TP53,MDM2,\"Momand J, Zambetti GP\",");
        assert_eq!(lines[2], "117,EP300,TP53,,0.9");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_format_as_tsv() {
        let tsv = format_as_tsv(&sample());
        assert!(tsv.starts_with("index\tOFFICIAL_SYMBOL_A\tOFFICIAL_SYMBOL_B"));
        assert!(tsv.contains("103\tTP53\tMDM2\tMomand J, Zambetti GP\t\n"));
    }

    #[test]
    fn test_table_row_limit() {
        let rendered = format_as_table(&sample(), 2);
        assert!(rendered.contains("EP300"));
        assert!(!rendered.contains("ATM"));
        assert!(rendered.contains("... 1 more rows"));

        let all = format_as_table(&sample(), 0);
        assert!(all.contains("ATM"));
        assert!(!all.contains("more rows"));
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
