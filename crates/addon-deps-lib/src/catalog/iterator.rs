//! Iterator adaptors for filtering packages.

use crate::package::*;

pub struct NeedsNewerRuntime<'a, I>
where
	I: Iterator<Item = &'a Package>,
{
	runtime: RuntimeVersion,
	underlying: I,
}

impl<'a, I> Iterator for NeedsNewerRuntime<'a, I>
where
	I: Iterator<Item = &'a Package>,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		self.underlying.by_ref().find(|package| !package.can_run_on(&self.runtime))
	}
}

pub trait NeedsNewerRuntimeExt<'a>: Iterator<Item = &'a Package>
{
	/// Filters the iterator to packages that can't run on `runtime`.
	fn needs_newer_runtime(self, runtime: &RuntimeVersion) -> NeedsNewerRuntime<'a, Self>
	where
		Self: Sized,
	{
		NeedsNewerRuntime { underlying: self, runtime: runtime.clone() }
	}
}

impl<'a, I: Iterator<Item = &'a Package>> NeedsNewerRuntimeExt<'a> for I {}


pub struct DependingOnAny<'a, 's, I>
where
	I: Iterator<Item = &'a Package>,
{
	targets: &'s PackageSet,
	underlying: I,
}

impl<'a, 's, I> Iterator for DependingOnAny<'a, 's, I>
where
	I: Iterator<Item = &'a Package>,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		let targets = self.targets;
		self.underlying.by_ref().find(|package| package.depends_on_any(targets))
	}
}

pub trait DependingOnAnyExt<'a>: Iterator<Item = &'a Package>
{
	/// Filters the iterator to packages declaring a dependency on any version of a member of `targets`.
	fn depending_on_any<'s>(self, targets: &'s PackageSet) -> DependingOnAny<'a, 's, Self>
	where
		Self: Sized,
	{
		DependingOnAny { underlying: self, targets }
	}
}

impl<'a, I: Iterator<Item = &'a Package>> DependingOnAnyExt<'a> for I {}

#[cfg(test)]
mod test {
	use super::*;

	fn package(id: &str) -> Package {
		Package::new(id, PackageVersion::new("1").unwrap())
	}

	#[test]
	fn filters_packages_needing_newer_runtime() {
		let runtime = RuntimeVersion::new("11").unwrap();
		let packages = [
			package("old").with_min_runtime_version(RuntimeVersion::new("1.8").unwrap()),
			package("new").with_min_runtime_version(RuntimeVersion::new("17").unwrap()),
			package("none"),
		];
		let ids: Vec<_> = packages.iter().needs_newer_runtime(&runtime).map(|p| p.id.as_str()).collect();
		assert_eq!(ids, vec!["new"]);
	}

	#[test]
	fn filters_packages_depending_on_targets() {
		let targets: PackageSet = vec![package("lib")].into();
		let packages = [
			package("a").with_dependency(PackageDescriptor::any("lib")),
			package("b").with_dependency(PackageDescriptor::any("other")),
		];
		let ids: Vec<_> = packages.iter().depending_on_any(&targets).map(|p| p.id.as_str()).collect();
		assert_eq!(ids, vec!["a"]);
	}
}
