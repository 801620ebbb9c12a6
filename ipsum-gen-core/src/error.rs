use thiserror::Error;

/// Invalid input detected at the API boundary, before generation runs.
///
/// The generation engine itself has no error conditions; every variant
/// here maps to an HTTP 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
	#[error("Invalid theme \"{value}\". Valid themes: {}", .valid.join(", "))]
	InvalidTheme { value: String, valid: Vec<&'static str> },
	#[error("Invalid blocks \"{value}\". Must be an integer between {min} and {max}.")]
	InvalidBlockCount { value: String, min: usize, max: usize },
	#[error("Invalid seed \"{value}\". Must be an integer.")]
	InvalidSeed { value: String },
	#[error("Invalid format \"{value}\". Valid formats: {}", .valid.join(", "))]
	InvalidFormat { value: String, valid: Vec<&'static str> },
}

/// Failure reading or writing the preference store.
#[derive(Error, Debug)]
pub enum StoreError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}
