//! The version of the host runtime add-ons run on.
//!
//! # Format
//!
//! Runtime version numbers follow the format `MAJOR[.MINOR[.PATCH]]`, for example `1.8`, `11` or `17.0.2`.
//!
//! # Eq & Ord
//!
//! Missing components compare as zero so `11`, `11.0` and `11.0.0` are all the same version.

use serde::*;
use try_map::FallibleMapExt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuntimeVersion {
	major: u32,
	minor: Option<u32>,
	patch: Option<u32>,
}

impl RuntimeVersion {
	/// Create a new [`RuntimeVersion`] from a version string.
	///
	/// # Errors
	/// This function will return a [`Parse`](crate::Error::Parse) error in the following cases.
	/// - Input is empty.
	/// - Input has more components than the `MAJOR`.`MINOR`.`PATCH` format.
	/// - The components of the version can't be parsed as integers.
	pub fn new(s: impl AsRef<str>) -> crate::Result<Self> {
		use crate::Error::Parse;
		let s = s.as_ref().trim();
		if s.is_empty() { return Err(Parse("runtime version can't be empty".into())) }
		let components = s.split('.').collect::<Vec<_>>();
		if components.len() > 3 { return Err(Parse(format!("too many runtime version components in `{s}`"))) }

		let major = components[0].parse::<u32>().map_err(|_| Parse(format!("major version of `{s}` can't be parsed")))?;
		let minor = components.get(1).try_map(|v| v.parse::<u32>().map_err(|_| Parse(format!("minor version of `{s}` can't be parsed"))))?;
		let patch = components.get(2).try_map(|v| v.parse::<u32>().map_err(|_| Parse(format!("patch of `{s}` can't be parsed"))))?;

		Ok(RuntimeVersion { major, minor, patch })
	}

	pub fn major(&self) -> u32 { self.major }
	pub fn minor(&self) -> Option<u32> { self.minor }
	pub fn patch(&self) -> Option<u32> { self.patch }

	fn components(&self) -> [u32; 3] {
		[self.major, self.minor.unwrap_or(0), self.patch.unwrap_or(0)]
	}
}

impl TryFrom<&str> for RuntimeVersion {
	type Error = crate::Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<String> for RuntimeVersion {
	type Error = crate::Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<RuntimeVersion> for String {
	fn from(value: RuntimeVersion) -> Self { value.to_string() }
}

impl PartialEq for RuntimeVersion {
	fn eq(&self, other: &Self) -> bool {
		self.components() == other.components()
	}
}

impl Eq for RuntimeVersion {}

impl Ord for RuntimeVersion {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.components().cmp(&other.components())
	}
}

impl PartialOrd for RuntimeVersion {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}

impl std::fmt::Display for RuntimeVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.major)?;
		if let Some(minor) = self.minor { write!(f, ".{minor}")?; }
		if let Some(patch) = self.patch { write!(f, ".{patch}")?; }
		Ok(())
	}
}
