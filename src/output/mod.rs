//! Output formatting module
//!
//! Every listable model implements [`Tabular`]; [`output_records`] renders a
//! slice of them as a table, CSV, JSON or YAML.

mod agent_pools;
mod agent_tokens;
mod common;
mod policy_sets;
mod projects;
mod teams;
mod variables;
mod varsets;
mod workspaces;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

pub use common::{escape_csv, print_json, print_yaml};

/// A model that can be printed as a row
pub trait Tabular {
    /// Serializable form used for JSON/YAML output
    type Record: Serialize;

    /// Column headers, in row order
    fn headers() -> &'static [&'static str];

    /// Cell values, in header order
    fn row(&self) -> Vec<String>;

    /// Structured record for JSON/YAML output
    fn record(&self) -> Self::Record;
}

/// Output items in the requested format
pub fn output_records<T: Tabular>(items: &[T], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_table(items, no_header)),
        OutputFormat::Csv => print!("{}", render_csv(items, no_header)),
        OutputFormat::Json => {
            let records: Vec<T::Record> = items.iter().map(Tabular::record).collect();
            print_json(&records);
        }
        OutputFormat::Yaml => {
            let records: Vec<T::Record> = items.iter().map(Tabular::record).collect();
            print_yaml(&records);
        }
    }
}

/// Output a single item; JSON/YAML print an object rather than a list
pub fn output_record<T: Tabular>(item: &T, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(&item.record()),
        OutputFormat::Yaml => print_yaml(&item.record()),
        _ => output_records(std::slice::from_ref(item), format, no_header),
    }
}

pub(crate) fn render_table<T: Tabular>(items: &[T], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers().to_vec());
    }
    for item in items {
        table.add_row(item.row());
    }
    table
}

pub(crate) fn render_csv<T: Tabular>(items: &[T], no_header: bool) -> String {
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
