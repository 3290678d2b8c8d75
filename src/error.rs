use compact_str::CompactString;

/// The dataset does not describe a valid weighted tree.
///
/// Fatal to the layout pass that hit it; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum MalformedHierarchyError {
    #[error("node '{path}' has neither a value nor any children")]
    MissingValue { path: String },

    #[error("node '{path}' has a negative value ({value})")]
    NegativeValue { path: String, value: f64 },

    #[error("node '{path}' has a value that is not a finite number: '{raw}'")]
    InvalidValue { path: String, raw: CompactString },

    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A configuration option is outside its accepted range.
///
/// Reported once when the configuration is validated, never per layout call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("legendColumns must be at least 1 (got {0})")]
    LegendColumns(i64),

    #[error("{name} must be a finite number >= 0 (got {value})")]
    NegativeOrNonFinite { name: &'static str, value: f64 },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid color '{0}' (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum MosaicError {
    #[error(transparent)]
    Hierarchy(#[from] MalformedHierarchyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
