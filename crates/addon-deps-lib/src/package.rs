//! Various types associated with packages.

use serde::*;

/// An installable add-on.
///
/// Two packages with the same [`PackageId`] and different versions are the same add-on,
/// collections key packages by id (see [`PackageSet`]) and never rely on `PartialEq` for membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
	/* Required Fields */
	pub id: PackageId,
	pub version: PackageVersion,

	/* Optional Fields */
	#[serde(default)]
	pub min_runtime_version: Option<RuntimeVersion>,
	/// Declared dependencies, in declaration order.
	#[serde(default)]
	pub depends: Vec<PackageDescriptor>,
	#[serde(default)]
	pub status: InstallationStatus,
}

impl AsRef<PackageId> for Package {
	fn as_ref(&self) -> &PackageId {
		&self.id
	}
}

impl std::fmt::Display for Package {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}-{}", self.id, self.version)
	}
}

impl Package {
	pub fn new(id: impl Into<PackageId>, version: PackageVersion) -> Self {
		Package {
			id: id.into(),
			version,
			min_runtime_version: None,
			depends: Default::default(),
			status: Default::default(),
		}
	}

	pub fn with_dependency(mut self, descriptor: PackageDescriptor) -> Self {
		self.depends.push(descriptor);
		self
	}

	pub fn with_min_runtime_version(mut self, version: RuntimeVersion) -> Self {
		self.min_runtime_version = Some(version);
		self
	}

	pub fn with_status(mut self, status: InstallationStatus) -> Self {
		self.status = status;
		self
	}

	/// Checks if `other`, at its version, fulfills one of the declared dependencies.
	pub fn depends_on(&self, other: &Package) -> bool {
		self.depends.iter().any(|d| does_package_match_descriptor(other, d))
	}

	/// Checks if any version of a member of `packages` is a declared dependency.
	pub fn depends_on_any(&self, packages: &PackageSet) -> bool {
		self.dependency_ids().any(|id| packages.contains(id.as_str()))
	}

	pub fn dependency_ids(&self) -> impl Iterator<Item = &PackageId> {
		self.depends.iter().map(|d| &d.id)
	}

	/// Packages without a minimum runtime version run everywhere.
	pub fn can_run_on(&self, runtime: &RuntimeVersion) -> bool {
		match &self.min_runtime_version {
			Some(min) => min <= runtime,
			None => true,
		}
	}
}

mod version_bounds;
pub use version_bounds::VersionBounds;

mod runtime_version;
pub use runtime_version::RuntimeVersion;

mod package_version;
pub use package_version::PackageVersion;
pub use package_version::PackageVersionBounds;

mod relationship;
pub use relationship::PackageId;
pub use relationship::PackageDescriptor;
pub use relationship::does_package_match_descriptor;

mod package_set;
pub use package_set::PackageSet;

/// Where a package is in its installation lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationStatus {
	#[default] Unknown,
	/// Can be downloaded and installed, for installed add-ons this marks a newer version.
	Available,
	Downloading,
	Installed,
	/// An uninstall was attempted and failed, the add-on is still (partially) present.
	UninstallationFailed,
	SoftUninstallationFailed,
	NotInstalled,
}
