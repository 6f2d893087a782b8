/// Output format for the rendered summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown table with emoji indicators.
    #[default]
    Markdown,
    /// Boxed terminal table.
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}
