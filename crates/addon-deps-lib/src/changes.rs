//! Calculating the changes required to install or update add-ons.
//!
//! # Process
//! 1. Walk the dependencies of every selected package, queueing missing ones for installation
//! and incompatible installed ones for update.
//! 1. Build the expected post-change world and find installed packages that would break in it.
//! 1. Try to rescue each of those with an available update, walking the update's dependencies too.
//! 1. Drop breakage that already existed before the change.

use std::collections::VecDeque;

use serde::*;

use crate::catalog::Catalog;
use crate::catalog::iterator::NeedsNewerRuntimeExt;
use crate::package::*;
use crate::requirements::RequirementEvaluator;

/// What the selected packages are meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
	Install,
	Update,
}

/// Every package affected by installing or updating the selected packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeSet {
	kind: ChangeKind,
	selected: PackageSet,
	old_versions: PackageSet,
	uninstalls: PackageSet,
	new_versions: PackageSet,
	installs: PackageSet,
	newer_runtime_required: bool,
}

impl ChangeSet {
	fn new(kind: ChangeKind, selected: PackageSet) -> Self {
		ChangeSet {
			kind,
			selected,
			old_versions: Default::default(),
			uninstalls: Default::default(),
			new_versions: Default::default(),
			installs: Default::default(),
			newer_runtime_required: false,
		}
	}

	pub fn kind(&self) -> ChangeKind {
		self.kind
	}

	/// The packages the change was requested for.
	pub fn selected(&self) -> &PackageSet {
		&self.selected
	}

	/// Installed packages that will be replaced by a member of [`new_versions()`](Self::new_versions).
	pub fn old_versions(&self) -> &PackageSet {
		&self.old_versions
	}

	/// Installed packages that must be removed because their dependencies can't be met after the change.
	pub fn uninstalls(&self) -> &PackageSet {
		&self.uninstalls
	}

	/// Packages replacing an installed version, includes the selected packages when updating.
	pub fn new_versions(&self) -> &PackageSet {
		&self.new_versions
	}

	/// Packages without an installed version, includes the selected packages when installing.
	pub fn installs(&self) -> &PackageSet {
		&self.installs
	}

	/// Whether any package that ends up installed needs a newer runtime than the current one.
	pub fn is_newer_runtime_required(&self) -> bool {
		self.newer_runtime_required
	}
}

pub struct ChangeCalculator<'c> {
	catalog: &'c Catalog,
	evaluator: RequirementEvaluator<'c>,
}

impl<'c> ChangeCalculator<'c> {
	pub fn new(catalog: &'c Catalog, runtime: &'c RuntimeVersion) -> Self {
		Self {
			catalog,
			evaluator: RequirementEvaluator::new(runtime),
		}
	}

	/// Calculates the changes needed to apply `kind` to the `selected` packages.
	///
	/// When updating, each selected package is expected to have an installed version.
	pub fn calculate(&self, selected: &PackageSet, kind: ChangeKind) -> ChangeSet {
		let mut changes = ChangeSet::new(kind, selected.clone());

		if kind == ChangeKind::Update {
			for package in selected {
				if let Some(old) = self.catalog.installed(package.id.as_str()) {
					changes.old_versions.insert(old.clone());
				}
			}
		}

		let mut walks: VecDeque<Package> = selected.iter().cloned().collect();
		self.walk_dependencies(&mut walks, &mut changes);

		let remaining: PackageSet = self.catalog.installed_packages()
			.iter()
			.filter(|p| !selected.contains_package(p) && !changes.new_versions.contains_package(p))
			.cloned()
			.collect();

		let mut expected = remaining.clone();
		expected.extend_from(selected);
		expected.extend_from(&changes.installs);
		expected.extend_from(&changes.new_versions);

		let mut uninstalls: PackageSet = remaining
			.iter()
			.filter(|p| self.evaluator.evaluate(p, &expected).has_dependency_issue())
			.cloned()
			.collect();

		/* Rescue */
		let broken: Vec<Package> = uninstalls.iter().cloned().collect();
		for installed in broken {
			let Some(update) = self.compatible_update(&installed) else { continue };
			log::trace!("updating {} to {} instead of uninstalling it", installed, update);

			uninstalls.remove(installed.id.as_str());
			changes.old_versions.insert(installed);
			changes.new_versions.insert(update.clone());
			walks.push_back(update.clone());
			self.walk_dependencies(&mut walks, &mut changes);
		}

		let tentative = uninstalls.clone();
		uninstalls.retain(|p| {
			!changes.installs.contains_package(p)
				&& !changes.new_versions.contains_package(p)
				&& !self.evaluator.is_preexisting_breakage(p, self.catalog.installed_packages(), &tentative)
		});
		changes.uninstalls = uninstalls;

		match kind {
			ChangeKind::Update => changes.new_versions.extend_from(selected),
			ChangeKind::Install => changes.installs.extend_from(selected),
		}

		let runtime = self.evaluator.runtime();
		changes.newer_runtime_required = changes.selected.iter()
			.chain(changes.installs.iter())
			.chain(changes.new_versions.iter())
			.needs_newer_runtime(runtime)
			.next()
			.is_some();

		log::debug!(
			"{:?} of {} package(s): {} install(s), {} update(s), {} uninstall(s), newer runtime required: {}",
			kind,
			changes.selected.len(),
			changes.installs.len(),
			changes.new_versions.len(),
			changes.uninstalls.len(),
			changes.newer_runtime_required,
		);
		changes
	}

	/// Drains `walks`, adding the dependencies of each package that need installing or updating.
	///
	/// Dependencies are resolved transitively against the available packages, so packages added
	/// here don't need walking themselves.
	fn walk_dependencies(&self, walks: &mut VecDeque<Package>, changes: &mut ChangeSet) {
		while let Some(package) = walks.pop_front() {
			let requirements = self.evaluator.evaluate(&package, self.catalog.available_packages());

			for dependency in requirements.dependencies() {
				if changes.selected.contains_package(dependency) {
					continue;
				}
				let available = self.catalog.installation_status(dependency) == InstallationStatus::Available;

				match self.catalog.installed(dependency.id.as_str()) {
					None => {
						if available && changes.installs.insert(dependency.clone()) {
							log::trace!("{} requires installing {}", package, dependency);
						}
					},
					Some(installed) => {
						let satisfied = requirements.bounds_for(dependency.id.as_str())
							.map_or(true, |bounds| bounds.is_version_within(&installed.version));
						if !satisfied && available {
							log::trace!("{} requires updating {} to {}", package, installed, dependency);
							changes.old_versions.insert(installed.clone());
							changes.new_versions.insert(dependency.clone());
						}
					},
				}
			}
		}
	}

	/// An available version of `installed` that differs from it and resolves fully against the available packages.
	fn compatible_update(&self, installed: &Package) -> Option<&'c Package> {
		let update = self.catalog.available(installed.id.as_str())?;
		if update.version == installed.version {
			return None
		}
		if self.evaluator.evaluate(update, self.catalog.available_packages()).has_dependency_issue() {
			return None
		}
		Some(update)
	}
}
