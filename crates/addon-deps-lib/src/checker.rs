//! Entry point for calculating dependency changes.
//!
//! # Usage
//! 1. Build a [`Catalog`] snapshot of the installed and available packages.
//! 1. Create a [`DependencyChecker`] over it with the [`CheckerOptions`] of the host.
//! 1. Calculate the changes for the selected packages.
//! 1. Pass the result to [`DependencyChecker::confirm_changes()`] or [`DependencyChecker::confirm_uninstall()`]
//! and hand accepted changes to the installer.

use crate::catalog::Catalog;
use crate::changes::*;
use crate::config::CheckerOptions;
use crate::confirmation::*;
use crate::dependents::DependentsFinder;
use crate::package::*;
use crate::uninstall::*;

pub struct DependencyChecker<'c> {
	catalog: &'c Catalog,
	options: CheckerOptions,
}

impl<'c> DependencyChecker<'c> {
	pub fn new(catalog: &'c Catalog, options: CheckerOptions) -> Self {
		Self { catalog, options }
	}

	pub fn catalog(&self) -> &Catalog {
		self.catalog
	}

	pub fn options(&self) -> &CheckerOptions {
		&self.options
	}

	/// Calculates the changes required to install the given package.
	pub fn calculate_install_change(&self, package: Package) -> crate::Result<ChangeSet> {
		self.calculate_install_changes(&PackageSet::from_iter([package]))
	}

	/// Calculates the changes required to install the given packages.
	///
	/// It might require updating, installing or uninstalling other packages depending on the
	/// dependencies of the affected packages.
	///
	/// # Errors
	/// [`UnknownPackage`](crate::Error::UnknownPackage) if a selected package is in neither catalog.
	pub fn calculate_install_changes(&self, selected: &PackageSet) -> crate::Result<ChangeSet> {
		self.validate_known(selected)?;
		Ok(self.change_calculator().calculate(selected, ChangeKind::Install))
	}

	/// Calculates the changes required to update the given packages.
	///
	/// # Errors
	/// - [`UnknownPackage`](crate::Error::UnknownPackage) if a selected package is in neither catalog.
	/// - [`NotInstalled`](crate::Error::NotInstalled) if a selected package has no installed version to update.
	pub fn calculate_update_changes(&self, selected: &PackageSet) -> crate::Result<ChangeSet> {
		self.validate_known(selected)?;
		self.validate_installed(selected)?;
		Ok(self.change_calculator().calculate(selected, ChangeKind::Update))
	}

	/// Calculates the changes required to uninstall the given packages.
	///
	/// # Errors
	/// [`NotInstalled`](crate::Error::NotInstalled) if a selected package isn't installed.
	pub fn calculate_uninstall_changes(&self, selected: &PackageSet) -> crate::Result<UninstallResult> {
		self.validate_installed(selected)?;
		Ok(UninstallCalculator::new(self.catalog, self.options.runtime_version()).calculate(selected))
	}

	/// Installed packages, besides those in `ignore`, that depend on a member of `updated`.
	pub fn find_dependents(&self, updated: &PackageSet, ignore: &PackageSet) -> PackageSet {
		DependentsFinder::new(self.catalog).find(updated, ignore)
	}

	pub fn review_changes(&self, changes: &ChangeSet) -> ChangeReview {
		let dependents = self.find_dependents(changes.new_versions(), changes.uninstalls());
		ChangeReview::new(changes, dependents, self.options.runtime_version())
	}

	pub fn review_uninstall(&self, result: &UninstallResult, downloading: &PackageSet) -> UninstallReview {
		UninstallReview::new(result, downloading)
	}

	/// Asks `confirmer` to accept `changes`, accepting directly when there is nothing to ask about.
	pub fn confirm_changes(&self, confirmer: &mut impl ConfirmChanges, changes: &ChangeSet) -> bool {
		let review = self.review_changes(changes);
		if !review.requires_confirmation() {
			log::trace!("no changes besides the selected packages, skipping confirmation");
			return true
		}
		confirmer.confirm_changes(&review)
	}

	/// Asks `confirmer` to accept `result`, warning about packages in `downloading` that depend on what's removed.
	pub fn confirm_uninstall(&self, confirmer: &mut impl ConfirmChanges, result: &UninstallResult, downloading: &PackageSet) -> bool {
		let review = self.review_uninstall(result, downloading);
		confirmer.confirm_uninstall(&review)
	}

	fn change_calculator(&self) -> ChangeCalculator<'_> {
		ChangeCalculator::new(self.catalog, self.options.runtime_version())
	}

	fn validate_known(&self, selected: &PackageSet) -> crate::Result<()> {
		for package in selected {
			if self.catalog.get_package(package.id.as_str()).is_none() {
				log::warn!("rejecting selection of unknown package {}", package);
				return Err(crate::Error::UnknownPackage(package.id.clone()))
			}
		}
		Ok(())
	}

	fn validate_installed(&self, selected: &PackageSet) -> crate::Result<()> {
		for package in selected {
			if !self.catalog.is_installed(package.id.as_str()) {
				log::warn!("rejecting selection of {} which isn't installed", package);
				return Err(crate::Error::NotInstalled(package.id.clone()))
			}
		}
		Ok(())
	}
}
