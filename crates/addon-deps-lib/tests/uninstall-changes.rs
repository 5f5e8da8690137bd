use addon_deps::package::*;
use addon_deps_test_utils::*;

#[test]
fn lone_package_is_only_uninstall() {
	let catalog = catalog([package("x", "1"), package("w", "1")], []);
	let result = checker(&catalog).calculate_uninstall_changes(&set([package("x", "1")])).unwrap();

	assert_eq!(ids(result.uninstallations()), vec!["x"]);
	assert!(result.forced_uninstallations().is_empty());
}

#[test]
fn empty_selection_uninstalls_nothing() {
	let catalog = catalog([package("x", "1")], []);
	let result = checker(&catalog).calculate_uninstall_changes(&PackageSet::new()).unwrap();

	assert!(result.uninstallations().is_empty());
}

#[test]
fn dependents_are_uninstalled() {
	let catalog = catalog([
		package("x", "1"),
		package("y", "1").with_dependency(any("x")),
		package("z", "1").with_dependency(any("y")),
	], []);
	let result = checker(&catalog).calculate_uninstall_changes(&set([package("x", "1")])).unwrap();

	assert_eq!(ids(result.uninstallations()), vec!["x", "y", "z"]);
	assert_eq!(ids(&result.forced_uninstallations()), vec!["y", "z"]);
	assert_eq!(ids(result.selected()), vec!["x"]);
}

#[test]
fn failed_uninstallation_is_not_repeated() {
	let catalog = catalog([
		package("x", "1"),
		package("y", "1").with_dependency(any("x")).with_status(InstallationStatus::UninstallationFailed),
		package("z", "1").with_dependency(any("y")),
	], []);
	let result = checker(&catalog).calculate_uninstall_changes(&set([package("x", "1")])).unwrap();

	assert_eq!(ids(result.uninstallations()), vec!["x", "z"]);
}

#[test]
fn preexisting_breakage_is_not_uninstalled() {
	let catalog = catalog([
		package("x", "1"),
		package("z", "1").with_dependency(any("missing")),
	], []);
	let result = checker(&catalog).calculate_uninstall_changes(&set([package("x", "1")])).unwrap();

	assert_eq!(ids(result.uninstallations()), vec!["x"]);
}

#[test]
fn preexisting_breakage_depending_on_forced_uninstall_is_uninstalled() {
	let catalog = catalog([
		package("x", "1"),
		package("y", "1").with_dependency(any("x")),
		package("z", "1").with_dependency(any("y")).with_dependency(any("missing")),
	], []);
	let result = checker(&catalog).calculate_uninstall_changes(&set([package("x", "1")])).unwrap();

	assert_eq!(ids(result.uninstallations()), vec!["x", "y", "z"]);
}

#[test]
fn cyclic_packages_are_left_alone() {
	let catalog = catalog([
		package("x", "1"),
		package("p", "1").with_dependency(any("q")),
		package("q", "1").with_dependency(any("p")),
	], []);
	let result = checker(&catalog).calculate_uninstall_changes(&set([package("x", "1")])).unwrap();

	assert_eq!(ids(result.uninstallations()), vec!["x"]);
}

#[test]
fn cascade_is_closed() {
	let catalog = catalog([
		package("x", "1"),
		package("y", "1").with_dependency(any("x")),
		package("z", "1").with_dependency(any("y")).with_dependency(any("w")),
		package("w", "1"),
		package("v", "1").with_dependency(any("w")),
	], []);
	let checker = checker(&catalog);
	let first = checker.calculate_uninstall_changes(&set([package("x", "1")])).unwrap();
	let second = checker.calculate_uninstall_changes(first.uninstallations()).unwrap();

	assert_eq!(ids(first.uninstallations()), vec!["x", "y", "z"]);
	assert_eq!(ids(second.uninstallations()), ids(first.uninstallations()));
}

#[test]
fn uninstall_of_package_not_installed_is_rejected() {
	let catalog = catalog([], [package("a", "1")]);
	let res = checker(&catalog).calculate_uninstall_changes(&set([package("a", "1")]));

	assert!(matches!(res, Err(addon_deps::Error::NotInstalled(_))));
}
