//! Various helper functions for testing
//!
//! Fixtures are built from short strings, any invalid input is a bug in the test so these panic.

use addon_deps::package::*;
use addon_deps::catalog::CatalogSnapshot;
use addon_deps::{Catalog, CheckerOptions, DependencyChecker};

/// The runtime version used by [`checker()`].
pub const RUNTIME_VERSION: &str = "11";

/// Installs a test logger, safe to call from every test.
pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

pub fn version(s: &str) -> PackageVersion {
	PackageVersion::new(s).expect("invalid package version in test")
}

pub fn runtime(s: &str) -> RuntimeVersion {
	RuntimeVersion::new(s).expect("invalid runtime version in test")
}

/// A package without dependencies and an unknown status.
pub fn package(id: &str, v: &str) -> Package {
	Package::new(id, version(v))
}

/// `id` at version `min` or later.
pub fn at_least(id: &str, min: &str) -> PackageDescriptor {
	PackageDescriptor::at_least(id, version(min))
}

pub fn any(id: &str) -> PackageDescriptor {
	PackageDescriptor::any(id)
}

pub fn set(packages: impl IntoIterator<Item = Package>) -> PackageSet {
	packages.into_iter().collect()
}

/// Ids of a set in order, for readable assertions.
pub fn ids(set: &PackageSet) -> Vec<&str> {
	set.ids().map(|id| id.as_str()).collect()
}

/// Builds a catalog, filling in statuses the way a host application reports them.
///
/// Packages without a status get the one their role implies, as for a JSON snapshot.
pub fn catalog(installed: impl IntoIterator<Item = Package>, available: impl IntoIterator<Item = Package>) -> Catalog {
	let snapshot = CatalogSnapshot {
		installed: installed.into_iter().collect(),
		available: available.into_iter().collect(),
	};
	log::trace!("test catalog with {} installed and {} available", snapshot.installed.len(), snapshot.available.len());
	Catalog::try_from(snapshot).expect("duplicate package in test catalog")
}

pub fn checker(catalog: &Catalog) -> DependencyChecker<'_> {
	init_logging();
	DependencyChecker::new(catalog, CheckerOptions::new(runtime(RUNTIME_VERSION)))
}
