//! # Package catalog
//!
//! A read-only snapshot of the add-ons known to the host application, split by role into the
//! *installed* packages and the *available* packages that can be fetched.
//!
//! The engine never mutates a catalog, whoever installs or removes add-ons builds a fresh
//! snapshot for the next calculation.

use crate::package::*;

pub mod iterator;

mod snapshot;
pub use snapshot::CatalogSnapshot;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
	installed: PackageSet,
	available: PackageSet,
}

impl Catalog {
	/// # Errors
	/// [`DuplicatePackage`](crate::Error::DuplicatePackage) if either collection repeats an id.
	pub fn new(installed: impl IntoIterator<Item = Package>, available: impl IntoIterator<Item = Package>) -> crate::Result<Self> {
		Ok(Catalog {
			installed: collect_unique(installed)?,
			available: collect_unique(available)?,
		})
	}

	pub fn from_json_str(s: &str) -> crate::Result<Self> {
		serde_json::from_str::<CatalogSnapshot>(s)?.try_into()
	}

	pub fn from_json_reader(reader: impl std::io::Read) -> crate::Result<Self> {
		serde_json::from_reader::<_, CatalogSnapshot>(reader)?.try_into()
	}

	/// Gets a package by id, preferring the installed version.
	pub fn get_package(&self, id: &str) -> Option<&Package> {
		self.installed.get(id).or_else(|| self.available.get(id))
	}

	pub fn installed(&self, id: &str) -> Option<&Package> {
		self.installed.get(id)
	}

	pub fn available(&self, id: &str) -> Option<&Package> {
		self.available.get(id)
	}

	pub fn installed_packages(&self) -> &PackageSet {
		&self.installed
	}

	pub fn available_packages(&self) -> &PackageSet {
		&self.available
	}

	pub fn is_installed(&self, id: &str) -> bool {
		self.installed.contains(id)
	}

	/// The status the catalog holds for this exact version of `package`.
	///
	/// Falls back to the status carried by `package` when the catalog has no entry for that version.
	pub fn installation_status(&self, package: &Package) -> InstallationStatus {
		[self.installed.get(package.id.as_str()), self.available.get(package.id.as_str())]
			.into_iter()
			.flatten()
			.find(|p| p.version == package.version)
			.map_or(package.status, |p| p.status)
	}
}

fn collect_unique(packages: impl IntoIterator<Item = Package>) -> crate::Result<PackageSet> {
	let mut set = PackageSet::new();
	for package in packages {
		let id = package.id.clone();
		if !set.insert(package) {
			return Err(crate::Error::DuplicatePackage(id))
		}
	}
	Ok(set)
}
