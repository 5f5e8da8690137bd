use std::collections::BTreeMap;

use serde::*;

use super::*;

/// A set of packages where membership is decided by [`PackageId`] alone.
///
/// Holding two versions of the same add-on is impossible, inserting a package whose id is
/// already present keeps the existing member. Iteration is ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Package>", into = "Vec<Package>")]
pub struct PackageSet {
	packages: BTreeMap<PackageId, Package>,
}

impl PackageSet {
	pub fn new() -> Self {
		Default::default()
	}

	/// Returns `false` and leaves the set unchanged if a package with the same id is already a member.
	pub fn insert(&mut self, package: Package) -> bool {
		use std::collections::btree_map::Entry;
		match self.packages.entry(package.id.clone()) {
			Entry::Vacant(e) => {
				e.insert(package);
				true
			},
			Entry::Occupied(_) => false,
		}
	}

	pub fn remove(&mut self, id: &str) -> Option<Package> {
		self.packages.remove(id)
	}

	pub fn get(&self, id: &str) -> Option<&Package> {
		self.packages.get(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.packages.contains_key(id)
	}

	/// Checks for any version of `package`.
	pub fn contains_package(&self, package: &Package) -> bool {
		self.contains(package.id.as_str())
	}

	pub fn len(&self) -> usize {
		self.packages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.packages.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Package> {
		self.packages.values()
	}

	pub fn ids(&self) -> impl Iterator<Item = &PackageId> {
		self.packages.keys()
	}

	pub fn retain(&mut self, mut f: impl FnMut(&Package) -> bool) {
		self.packages.retain(|_, p| f(p));
	}

	/// Members of `self` with no same-id member in `other`.
	pub fn difference(&self, other: &PackageSet) -> PackageSet {
		self.iter()
			.filter(|p| !other.contains_package(p))
			.cloned()
			.collect()
	}

	/// Adds every package of `other` not already present by id.
	pub fn extend_from(&mut self, other: &PackageSet) {
		self.extend(other.iter().cloned());
	}
}

impl Extend<Package> for PackageSet {
	fn extend<T: IntoIterator<Item = Package>>(&mut self, iter: T) {
		for package in iter {
			self.insert(package);
		}
	}
}

impl FromIterator<Package> for PackageSet {
	fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
		let mut set = PackageSet::new();
		set.extend(iter);
		set
	}
}

impl IntoIterator for PackageSet {
	type Item = Package;
	type IntoIter = std::collections::btree_map::IntoValues<PackageId, Package>;

	fn into_iter(self) -> Self::IntoIter {
		self.packages.into_values()
	}
}

impl<'a> IntoIterator for &'a PackageSet {
	type Item = &'a Package;
	type IntoIter = std::collections::btree_map::Values<'a, PackageId, Package>;

	fn into_iter(self) -> Self::IntoIter {
		self.packages.values()
	}
}

impl From<Vec<Package>> for PackageSet {
	fn from(value: Vec<Package>) -> Self {
		value.into_iter().collect()
	}
}

impl From<PackageSet> for Vec<Package> {
	fn from(value: PackageSet) -> Self {
		value.into_iter().collect()
	}
}
