//! What a confirmation layer needs to accept or reject a calculated change.
//!
//! Rendering is up to the implementor of [`ConfirmChanges`], this module only derives the data
//! worth showing and decides when asking is unnecessary.

use crate::catalog::iterator::*;
use crate::changes::{ChangeKind, ChangeSet};
use crate::package::*;
use crate::uninstall::UninstallResult;

/// The parts of a [`ChangeSet`] worth confirming, with the selected packages separated out.
#[derive(Debug, Clone)]
pub struct ChangeReview {
	kind: ChangeKind,
	runtime: RuntimeVersion,
	selected: PackageSet,
	selected_runtime_issues: PackageSet,
	installs: PackageSet,
	updates: PackageSet,
	uninstalls: PackageSet,
	dependents: PackageSet,
}

impl ChangeReview {
	/// `dependents` should be the installed packages depending on `changes.new_versions()`, ignoring `changes.uninstalls()`.
	pub fn new(changes: &ChangeSet, dependents: PackageSet, runtime: &RuntimeVersion) -> Self {
		let selected_runtime_issues = changes.selected().iter().needs_newer_runtime(runtime).cloned().collect();

		let (installs, updates) = match changes.kind() {
			ChangeKind::Install => (changes.installs().difference(changes.selected()), changes.new_versions().clone()),
			ChangeKind::Update => (changes.installs().clone(), changes.new_versions().difference(changes.selected())),
		};

		ChangeReview {
			kind: changes.kind(),
			runtime: runtime.clone(),
			selected: changes.selected().clone(),
			selected_runtime_issues,
			installs,
			updates,
			uninstalls: changes.uninstalls().clone(),
			dependents,
		}
	}

	pub fn kind(&self) -> ChangeKind { self.kind }
	pub fn selected(&self) -> &PackageSet { &self.selected }
	/// Selected packages that can't run on the current runtime.
	pub fn selected_runtime_issues(&self) -> &PackageSet { &self.selected_runtime_issues }
	/// Installs besides the selected packages.
	pub fn installs(&self) -> &PackageSet { &self.installs }
	/// Updates besides the selected packages.
	pub fn updates(&self) -> &PackageSet { &self.updates }
	pub fn uninstalls(&self) -> &PackageSet { &self.uninstalls }
	/// Installed packages left depending on something being updated.
	pub fn dependents(&self) -> &PackageSet { &self.dependents }

	/// `false` when nothing beyond the selected packages changes and all of them run on the current runtime.
	pub fn requires_confirmation(&self) -> bool {
		!(self.uninstalls.is_empty()
			&& self.updates.is_empty()
			&& self.installs.is_empty()
			&& self.dependents.is_empty()
			&& self.selected_runtime_issues.is_empty())
	}

	/// Number of reviewed packages that can't run on the current runtime.
	pub fn runtime_issue_count(&self) -> usize {
		let others = self.updates.iter()
			.chain(self.installs.iter())
			.chain(self.dependents.iter())
			.needs_newer_runtime(&self.runtime)
			.count();
		self.selected_runtime_issues.len() + others
	}
}

/// The parts of an [`UninstallResult`] worth confirming.
#[derive(Debug, Clone)]
pub struct UninstallReview {
	selected: PackageSet,
	forced: PackageSet,
	required_by_downloads: bool,
}

impl UninstallReview {
	/// `downloading` are the packages currently being downloaded for a later install.
	pub fn new(result: &UninstallResult, downloading: &PackageSet) -> Self {
		let forced = result.forced_uninstallations();
		let required_by_downloads = downloading.iter().depending_on_any(&forced).next().is_some()
			|| downloading.iter().depending_on_any(result.selected()).next().is_some();

		UninstallReview {
			selected: result.selected().clone(),
			forced,
			required_by_downloads,
		}
	}

	pub fn selected(&self) -> &PackageSet { &self.selected }
	/// Packages removed only because they depend on something being removed.
	pub fn forced(&self) -> &PackageSet { &self.forced }
	/// Whether a package being downloaded depends on something being removed.
	pub fn is_required_by_downloads(&self) -> bool { self.required_by_downloads }

	/// Removing packages is always confirmed.
	pub fn requires_confirmation(&self) -> bool {
		true
	}
}

/// A boolean accept or reject decision on a calculated change.
pub trait ConfirmChanges {
	fn confirm_changes(&mut self, review: &ChangeReview) -> bool;
	fn confirm_uninstall(&mut self, review: &UninstallReview) -> bool;
}

/// Accepts every change, for callers that don't ask anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoAccept;

impl ConfirmChanges for AutoAccept {
	fn confirm_changes(&mut self, review: &ChangeReview) -> bool {
		log::debug!("accepting {:?} of {} package(s) without confirmation", review.kind(), review.selected().len());
		true
	}

	fn confirm_uninstall(&mut self, review: &UninstallReview) -> bool {
		log::debug!("accepting uninstall of {} package(s) without confirmation", review.selected().len());
		true
	}
}
