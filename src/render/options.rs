//! Report rendering options.

/// Options for rendering reports.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Report heading; defaults to a heading matching the pass
    pub title: Option<String>,

    /// Include per-category counts
    pub include_summary: bool,

    /// `chrono` format string for the timestamp
    pub timestamp_format: String,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the category summary.
    pub fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }

    /// Set the timestamp format.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: None,
            include_summary: true,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}
