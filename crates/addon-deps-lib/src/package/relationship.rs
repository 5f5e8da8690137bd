use serde::*;
use super::*;

/// A unique identifier for packages, stable across versions.
///
/// Used as the key of every package set so that two versions of the same add-on are the same member.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
	pub fn new(id: impl Into<String>) -> Self {
		PackageId(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::borrow::Borrow<str> for PackageId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for PackageId {
	fn from(value: &str) -> Self { PackageId::new(value) }
}

impl From<String> for PackageId {
	fn from(value: String) -> Self { PackageId(value) }
}

impl std::fmt::Display for PackageId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl AsRef<PackageId> for PackageId {
	fn as_ref(&self) -> &PackageId {
		self
	}
}

/// Describes a package using an identifier and version requirement.
///
/// Differs from a [`Package`] in that it represents a range of packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDescriptor {
	pub id: PackageId,
	#[serde(default)]
	pub version: PackageVersionBounds,
}

impl PackageDescriptor {
	pub fn new(id: impl Into<PackageId>, version: PackageVersionBounds) -> Self {
		Self {
			id: id.into(),
			version,
		}
	}

	/// A dependency on any version of `id`.
	pub fn any(id: impl Into<PackageId>) -> Self {
		Self::new(id, VersionBounds::Any)
	}

	/// A dependency on `id` at version `min` or later.
	pub fn at_least(id: impl Into<PackageId>, min: PackageVersion) -> Self {
		Self::new(id, VersionBounds::MinOnly(min))
	}
}

impl std::fmt::Display for PackageDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.version {
			VersionBounds::Any => write!(f, "{}", self.id),
			VersionBounds::Explicit(v) => write!(f, "{} {}", self.id, v),
			VersionBounds::MinOnly(min) => write!(f, "{} >= {}", self.id, min),
			VersionBounds::MaxOnly(max) => write!(f, "{} <= {}", self.id, max),
			VersionBounds::MinMax(min, max) => write!(f, "{} {}..={}", self.id, min, max),
		}
	}
}

pub fn does_package_match_descriptor(package: &Package, descriptor: &PackageDescriptor) -> bool {
	if package.id != descriptor.id {
		return false
	}
	descriptor.version.is_version_within(&package.version)
}
