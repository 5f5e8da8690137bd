//! Resolving the requirements of a package against a universe of packages.
//!
//! The universe is whatever set of packages the caller wants to test against: the installed
//! packages, the available packages, or a hypothetical post-change world.

use std::collections::BTreeMap;

use crate::package::*;

/// A reason a dependency can't be satisfied by the universe it was resolved against.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DependencyIssue {
	/// No package with the identifier exists in the universe.
	#[error("`{required_by}` requires `{dependency}` which is missing")]
	Missing { required_by: PackageId, dependency: PackageId },
	/// A package exists but its version is outside the bounds placed on it.
	#[error("`{required_by}` requires `{dependency}` but version {found} is incompatible")]
	IncompatibleVersion { required_by: PackageId, dependency: PackageId, found: PackageVersion },
}

impl DependencyIssue {
	/// The identifier that couldn't be satisfied.
	pub fn dependency(&self) -> &PackageId {
		match self {
			DependencyIssue::Missing { dependency, .. }
			| DependencyIssue::IncompatibleVersion { dependency, .. } => dependency,
		}
	}
}

/// The outcome of resolving a package against a universe.
#[derive(Debug, Clone)]
pub struct RunRequirements {
	package: PackageId,
	dependencies: PackageSet,
	bounds: BTreeMap<PackageId, PackageVersionBounds>,
	issues: Vec<DependencyIssue>,
	runtime_issues: Vec<(PackageId, RuntimeVersion)>,
}

impl RunRequirements {
	fn new(package: PackageId) -> Self {
		RunRequirements {
			package,
			dependencies: Default::default(),
			bounds: Default::default(),
			issues: Default::default(),
			runtime_issues: Default::default(),
		}
	}

	/// The package these requirements were calculated for.
	pub fn package(&self) -> &PackageId {
		&self.package
	}

	/// Every package from the universe resolved as a direct or indirect dependency.
	pub fn dependencies(&self) -> &PackageSet {
		&self.dependencies
	}

	/// The combined bounds the resolution chain placed on the dependency `id`.
	pub fn bounds_for(&self, id: &str) -> Option<&PackageVersionBounds> {
		self.bounds.get(id)
	}

	pub fn issues(&self) -> &[DependencyIssue] {
		&self.issues
	}

	pub fn has_dependency_issue(&self) -> bool {
		!self.issues.is_empty()
	}

	/// Packages, the evaluated one included, requiring a runtime newer than the current one
	/// along with the version they require.
	pub fn runtime_issues(&self) -> &[(PackageId, RuntimeVersion)] {
		&self.runtime_issues
	}

	pub fn is_newer_runtime_required(&self) -> bool {
		!self.runtime_issues.is_empty()
	}

	/// Narrows the bounds on `descriptor.id`, returns `false` if `version` falls outside them.
	fn constrain(&mut self, descriptor: &PackageDescriptor, version: &PackageVersion) -> bool {
		let bounds = match self.bounds.get(&descriptor.id) {
			Some(existing) => existing.inner_join(&descriptor.version),
			None => Some(descriptor.version.clone()),
		};
		let Some(bounds) = bounds else { return false };
		let within = bounds.is_version_within(version);
		self.bounds.insert(descriptor.id.clone(), bounds);
		within
	}

	fn check_runtime(&mut self, package: &Package, runtime: &RuntimeVersion) {
		if let Some(min) = &package.min_runtime_version {
			if !package.can_run_on(runtime) {
				self.runtime_issues.push((package.id.clone(), min.clone()));
			}
		}
	}
}

/// Resolves package requirements for a fixed host runtime.
#[derive(Debug, Clone, Copy)]
pub struct RequirementEvaluator<'a> {
	runtime: &'a RuntimeVersion,
}

impl<'a> RequirementEvaluator<'a> {
	pub fn new(runtime: &'a RuntimeVersion) -> Self {
		Self { runtime }
	}

	pub fn runtime(&self) -> &RuntimeVersion {
		self.runtime
	}

	/// Resolves the dependencies of `package`, and of every dependency it resolves to, against `universe`.
	///
	/// Each package is expanded once, so cyclic declarations terminate. A dependency back on
	/// `package` itself is resolved to `package` rather than to the universe. When several
	/// packages constrain the same dependency the bounds are intersected and the resolved
	/// version must satisfy all of them.
	pub fn evaluate(&self, package: &Package, universe: &PackageSet) -> RunRequirements {
		let mut requirements = RunRequirements::new(package.id.clone());
		requirements.check_runtime(package, self.runtime);

		let mut pending = vec![package];
		while let Some(parent) = pending.pop() {
			for descriptor in &parent.depends {
				let dependency = if descriptor.id == package.id {
					package
				} else if let Some(dependency) = universe.get(descriptor.id.as_str()) {
					dependency
				} else {
					requirements.issues.push(DependencyIssue::Missing { required_by: parent.id.clone(), dependency: descriptor.id.clone() });
					continue;
				};

				if !requirements.constrain(descriptor, &dependency.version) {
					requirements.issues.push(DependencyIssue::IncompatibleVersion {
						required_by: parent.id.clone(),
						dependency: descriptor.id.clone(),
						found: dependency.version.clone(),
					});
					continue;
				}

				/* Already expanded */
				if dependency.id == package.id || !requirements.dependencies.insert(dependency.clone()) {
					continue;
				}

				requirements.check_runtime(dependency, self.runtime);
				pending.push(dependency);
			}
		}

		log::trace!(
			"evaluated {} against {} package(s): {} dependencies, {} issue(s), newer runtime required: {}",
			package,
			universe.len(),
			requirements.dependencies.len(),
			requirements.issues.len(),
			requirements.is_newer_runtime_required(),
		);
		requirements
	}

	/// Breakage that exists before any change is tolerated, unless the package declares a
	/// dependency on something in `uninstalls`.
	pub(crate) fn is_preexisting_breakage(&self, package: &Package, installed: &PackageSet, uninstalls: &PackageSet) -> bool {
		self.evaluate(package, installed).has_dependency_issue() && !package.depends_on_any(uninstalls)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn v(s: &str) -> PackageVersion { PackageVersion::new(s).unwrap() }
	fn package(id: &str, version: &str) -> Package { Package::new(id, v(version)) }
	fn runtime() -> RuntimeVersion { RuntimeVersion::new("11").unwrap() }

	#[test]
	fn no_dependencies_is_satisfied() {
		let runtime = runtime();
		let req = RequirementEvaluator::new(&runtime).evaluate(&package("a", "1"), &PackageSet::new());
		assert!(!req.has_dependency_issue());
		assert!(!req.is_newer_runtime_required());
		assert!(req.dependencies().is_empty());
	}

	#[test]
	fn missing_dependency_is_issue() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::any("b"));
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &PackageSet::new());
		assert_eq!(req.issues(), &[DependencyIssue::Missing { required_by: "a".into(), dependency: "b".into() }]);
	}

	#[test]
	fn old_version_is_incompatible() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::at_least("b", v("2")));
		let universe: PackageSet = vec![package("b", "1.5")].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(matches!(req.issues(), [DependencyIssue::IncompatibleVersion { found, .. }] if *found == v("1.5")));
		assert!(req.dependencies().is_empty());
	}

	#[test]
	fn dependencies_are_transitive() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::any("b"));
		let universe: PackageSet = vec![
			package("b", "1").with_dependency(PackageDescriptor::any("c")),
			package("c", "1"),
		].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(!req.has_dependency_issue());
		assert!(req.dependencies().contains("b") && req.dependencies().contains("c"));
	}

	#[test]
	fn indirect_issue_is_reported() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::any("b"));
		let universe: PackageSet = vec![package("b", "1").with_dependency(PackageDescriptor::any("c"))].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert_eq!(req.issues()[0].dependency().as_str(), "c");
	}

	#[test]
	fn conflicting_bounds_are_incompatible() {
		let runtime = runtime();
		let a = package("a", "1")
			.with_dependency(PackageDescriptor::any("b"))
			.with_dependency(PackageDescriptor::new("c", VersionBounds::Any));
		let universe: PackageSet = vec![
			package("b", "1").with_dependency(PackageDescriptor::new("c", VersionBounds::MaxOnly(v("1")))),
			package("c", "2"),
		].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(req.issues().iter().all(|i| matches!(i, DependencyIssue::IncompatibleVersion { .. })));
		assert!(matches!(&req.issues()[0], DependencyIssue::IncompatibleVersion { required_by, .. } if required_by.as_str() == "b"));
	}

	#[test]
	fn cycles_terminate() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::any("b"));
		let universe: PackageSet = vec![
			package("b", "1").with_dependency(PackageDescriptor::any("c")),
			package("c", "1").with_dependency(PackageDescriptor::any("b")).with_dependency(PackageDescriptor::any("a")),
		].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(!req.has_dependency_issue());
		assert_eq!(req.dependencies().len(), 2);
	}

	#[test]
	fn dependency_on_evaluated_package_checks_its_version() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::any("b"));
		let universe: PackageSet = vec![
			package("a", "2"),
			package("b", "1").with_dependency(PackageDescriptor::at_least("a", v("2"))),
		].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(matches!(req.issues(), [DependencyIssue::IncompatibleVersion { found, .. }] if *found == v("1")));
	}

	#[test]
	fn shared_dependency_is_not_a_cycle() {
		let runtime = runtime();
		let a = package("a", "1")
			.with_dependency(PackageDescriptor::any("b"))
			.with_dependency(PackageDescriptor::any("c"));
		let universe: PackageSet = vec![
			package("b", "1").with_dependency(PackageDescriptor::any("d")),
			package("c", "1").with_dependency(PackageDescriptor::any("d")),
			package("d", "1"),
		].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(!req.has_dependency_issue());
		assert_eq!(req.dependencies().len(), 3);
	}

	#[test]
	fn runtime_requirement_propagates_from_dependencies() {
		let runtime = runtime();
		let a = package("a", "1").with_dependency(PackageDescriptor::any("b"));
		let universe: PackageSet = vec![
			package("b", "1").with_dependency(PackageDescriptor::any("c")),
			package("c", "1").with_min_runtime_version(RuntimeVersion::new("17").unwrap()),
		].into();
		let req = RequirementEvaluator::new(&runtime).evaluate(&a, &universe);
		assert!(req.is_newer_runtime_required());
		assert_eq!(req.runtime_issues()[0].0.as_str(), "c");
	}

	#[test]
	fn runtime_requirement_of_package_itself() {
		let runtime = runtime();
		let a = package("a", "1").with_min_runtime_version(RuntimeVersion::new("11.0.1").unwrap());
		assert!(RequirementEvaluator::new(&runtime).evaluate(&a, &PackageSet::new()).is_newer_runtime_required());
	}
}
