//! Calculating the cascade of uninstalls caused by removing add-ons.

use std::collections::VecDeque;

use serde::*;

use crate::catalog::Catalog;
use crate::package::*;
use crate::requirements::RequirementEvaluator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UninstallResult {
	selected: PackageSet,
	uninstallations: PackageSet,
}

impl UninstallResult {
	/// The packages the uninstall was requested for.
	pub fn selected(&self) -> &PackageSet {
		&self.selected
	}

	/// Every package to remove, the selected ones included.
	pub fn uninstallations(&self) -> &PackageSet {
		&self.uninstallations
	}

	/// Packages removed only because they depend on something being removed.
	pub fn forced_uninstallations(&self) -> PackageSet {
		self.uninstallations.difference(&self.selected)
	}
}

pub struct UninstallCalculator<'c> {
	catalog: &'c Catalog,
	evaluator: RequirementEvaluator<'c>,
}

impl<'c> UninstallCalculator<'c> {
	pub fn new(catalog: &'c Catalog, runtime: &'c RuntimeVersion) -> Self {
		Self {
			catalog,
			evaluator: RequirementEvaluator::new(runtime),
		}
	}

	pub fn calculate(&self, selected: &PackageSet) -> UninstallResult {
		let remaining = self.catalog.installed_packages().difference(selected);

		let mut uninstalls = PackageSet::new();
		let mut queue: VecDeque<&Package> = remaining.iter().collect();
		while let Some(package) = queue.pop_front() {
			let requirements = self.evaluator.evaluate(package, &remaining);

			if !requirements.has_dependency_issue() {
				/* Everything it resolved to is known to be satisfied */
				queue.retain(|p| !requirements.dependencies().contains_package(p));
			} else if self.catalog.installation_status(package) != InstallationStatus::UninstallationFailed {
				log::trace!("{} can't stay installed: {:?}", package, requirements.issues());
				uninstalls.insert(package.clone());
			}
		}

		let tentative = uninstalls.clone();
		uninstalls.retain(|p| !self.evaluator.is_preexisting_breakage(p, self.catalog.installed_packages(), &tentative));

		let mut uninstallations = selected.clone();
		uninstallations.extend(uninstalls);

		log::debug!("uninstalling {} package(s) forces {} more", selected.len(), uninstallations.len() - selected.len());
		UninstallResult {
			selected: selected.clone(),
			uninstallations,
		}
	}
}
