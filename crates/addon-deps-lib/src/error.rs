//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

use crate::package::PackageId;

/// Errors raised at the boundary of the engine.
///
/// Unsatisfiable dependencies are never errors, they are reported through
/// [`RunRequirements`](crate::requirements::RunRequirements) and the calculated change sets.
#[derive(Debug, Error)]
pub enum Error {
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("parsing error: {0}")]
	Parse(String),
	#[error("package `{0}` is neither installed nor available")]
	UnknownPackage(PackageId),
	#[error("package `{0}` is not installed")]
	NotInstalled(PackageId),
	#[error("package `{0}` appears more than once in the same collection")]
	DuplicatePackage(PackageId),
}
