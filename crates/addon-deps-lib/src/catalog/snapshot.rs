use serde::*;

use crate::package::{InstallationStatus, Package};

use super::Catalog;

/// The serialized form of a [`Catalog`].
///
/// Kept as plain lists so a snapshot with repeated ids can still be read and then rejected
/// with a useful error when converted. Entries without a status take the one their role implies,
/// see [`CatalogSnapshot::with_role_statuses()`].
///
/// ```json
/// {
/// 	"installed": [{ "id": "core", "version": "1.0", "status": "Installed" }],
/// 	"available": [{ "id": "core", "version": "1.1", "status": "Available" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
	#[serde(default)]
	pub installed: Vec<Package>,
	#[serde(default)]
	pub available: Vec<Package>,
}

impl CatalogSnapshot {
	/// Replaces every `Unknown` status with the status implied by where the entry is listed.
	///
	/// Installed entries become `Installed`. Available entries become `Installed` when the same
	/// version is installed and `Available` otherwise.
	pub fn with_role_statuses(mut self) -> Self {
		for package in self.installed.iter_mut().filter(|p| p.status == InstallationStatus::Unknown) {
			package.status = InstallationStatus::Installed;
		}

		let installed = &self.installed;
		for package in self.available.iter_mut().filter(|p| p.status == InstallationStatus::Unknown) {
			let same_installed = installed.iter().any(|i| i.id == package.id && i.version == package.version);
			package.status = if same_installed { InstallationStatus::Installed } else { InstallationStatus::Available };
		}
		self
	}
}

impl TryFrom<CatalogSnapshot> for Catalog {
	type Error = crate::Error;

	fn try_from(value: CatalogSnapshot) -> Result<Self, Self::Error> {
		let value = value.with_role_statuses();
		Catalog::new(value.installed, value.available)
	}
}

impl From<&Catalog> for CatalogSnapshot {
	fn from(value: &Catalog) -> Self {
		CatalogSnapshot {
			installed: value.installed_packages().iter().cloned().collect(),
			available: value.available_packages().iter().cloned().collect(),
		}
	}
}
