//! Argument types shared by the dlctl verbs

use clap::ValueEnum;

/// How listed Direct Link resources are printed
///
/// Table and CSV print flattened rows; JSON and YAML serialize the API
/// models unchanged, including fields that have no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns without borders (default)
    Table,
    /// Comma-separated rows, quoted where needed
    Csv,
    /// Pretty-printed API models
    Json,
    /// API models as YAML
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Whether the format serializes models instead of printing rows
    pub fn is_structured(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
