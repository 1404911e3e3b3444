//! Reader/writer configuration.
//!
//! A config picks the column layout and the delimiters. It can be built in
//! code or loaded from TOML:
//!
//! ```toml
//! layout = "dep"
//!
//! [style]
//! column = " "
//! blank = "-"
//! ```

use std::fs;
use std::path::Path;

use layered_dependency::{ColumnLayout, ColumnStyle};
use serde::{Deserialize, Serialize};

use crate::{FormatError, FormatResult};

/// Column layout and delimiters shared by [`ColumnReader`](crate::ColumnReader)
/// and [`ColumnWriter`](crate::ColumnWriter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub layout: ColumnLayout,
    pub style: ColumnStyle,
}

impl FormatConfig {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            style: ColumnStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ColumnStyle) -> Self {
        self.style = style;
        self
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> FormatResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| FormatError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file, or the default if the file does not exist.
    pub fn load(path: &Path) -> FormatResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no format config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| FormatError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Reject delimiters that would make rows ambiguous.
    pub fn validate(&self) -> FormatResult<()> {
        let style = &self.style;
        let delimiters = [
            ("column", &style.column),
            ("blank", &style.blank),
            ("arcs", &style.arcs),
            ("arc_label", &style.arc_label),
            ("feats", &style.feats),
            ("feat_value", &style.feat_value),
        ];

        if let Some((name, _)) = delimiters.iter().find(|(_, value)| value.is_empty()) {
            return Err(FormatError::Config {
                message: format!("`{}` must not be empty", name),
            });
        }

        if style.arcs == style.arc_label || style.feats == style.feat_value {
            return Err(FormatError::Config {
                message: "list and pair delimiters must differ".to_string(),
            });
        }

        if [&style.arcs, &style.arc_label, &style.feats, &style.feat_value]
            .iter()
            .any(|d| d.contains(style.column.as_str()))
        {
            return Err(FormatError::Config {
                message: "inner delimiters must not contain the column delimiter".to_string(),
            });
        }

        Ok(())
    }
}
