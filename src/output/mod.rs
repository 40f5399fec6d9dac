//! Output formatting module
//!
//! Every listed resource implements [`Record`]; the same rows feed the
//! table and CSV formats while JSON and YAML serialize the models as-is.

mod as_prepends;
pub mod common;
mod gateways;
mod offerings;
mod ports;
mod route_filters;
mod route_reports;
mod virtual_connections;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use common::{escape_csv, print_json, print_yaml};

pub use virtual_connections::GatewayConnectionRow;

/// A resource that can be printed as one table/CSV row
pub trait Record: Serialize {
    /// Column headers, upper case
    fn headers() -> &'static [&'static str];

    /// Cell values in header order
    fn row(&self) -> Vec<String>;
}

/// Print a list of records in the requested format
pub fn output_records<T: Record>(items: &[T], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => print!("{}", render_table(items, no_header)),
        OutputFormat::Csv => print!("{}", render_csv(items, no_header)),
        OutputFormat::Json => print_json(items),
        OutputFormat::Yaml => print_yaml(items),
    }
}

/// Print a single record; JSON/YAML emit the object rather than a list
pub fn output_record<T: Record>(item: &T, format: OutputFormat, no_header: bool) {
    if !format.is_structured() {
        return output_records(std::slice::from_ref(item), format, no_header);
    }
    match format {
        OutputFormat::Yaml => print_yaml(item),
        _ => print_json(item),
    }
}

fn render_table<T: Record>(items: &[T], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers().to_vec());
    }
    for item in items {
        table.add_row(item.row());
    }
    format!("{table}\n")
}

fn render_csv<T: Record>(items: &[T], no_header: bool) -> String {
    let mut out = String::new();
    if !no_header {
        out.push_str(&T::headers().join(","));
        out.push('\n');
    }
    for item in items {
        let cells: Vec<String> = item.row().iter().map(|c| escape_csv(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: String,
        note: String,
    }

    impl Record for Row {
        fn headers() -> &'static [&'static str] {
            &["ID", "NOTE"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.id.clone(), self.note.clone()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a".to_string(),
                note: "plain".to_string(),
            },
            Row {
                id: "b".to_string(),
                note: "with,comma".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_csv() {
        assert_eq!(
            render_csv(&rows(), false),
            "ID,NOTE\na,plain\nb,\"with,comma\"\n"
        );
        assert_eq!(render_csv(&rows(), true), "a,plain\nb,\"with,comma\"\n");
    }

    #[test]
    fn test_render_table_header_toggle() {
        let with_header = render_table(&rows(), false);
        assert!(with_header.contains("ID"));
        assert!(with_header.contains("with,comma"));

        let without = render_table(&rows(), true);
        assert!(!without.contains("NOTE"));
    }

    #[test]
    fn test_output_empty_does_not_panic() {
        let empty: Vec<Row> = Vec::new();
        output_records(&empty, OutputFormat::Table, false);
        output_records(&empty, OutputFormat::Json, false);
    }
}
