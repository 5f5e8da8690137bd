use addon_deps::catalog::CatalogSnapshot;
use addon_deps::package::*;
use addon_deps::{Catalog, Error};
use addon_deps_test_utils::*;

const SNAPSHOT: &str = r#"{
	"installed": [
		{ "id": "b", "version": "1.0", "status": "Installed" }
	],
	"available": [
		{
			"id": "a",
			"version": "1.0",
			"depends": [{ "id": "b", "version": { "MinOnly": "2" } }],
			"min_runtime_version": "11",
			"status": "Available"
		},
		{ "id": "b", "version": "2.0", "depends": [{ "id": "c" }], "status": "Available" },
		{ "id": "c", "version": "1:0.5", "status": "Available" }
	]
}"#;

#[test]
fn snapshot_is_read() {
	let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();

	assert_eq!(ids(catalog.installed_packages()), vec!["b"]);
	assert_eq!(ids(catalog.available_packages()), vec!["a", "b", "c"]);

	let a = catalog.available("a").unwrap();
	assert_eq!(a.min_runtime_version, Some(runtime("11")));
	assert_eq!(a.depends, vec![at_least("b", "2")]);
	assert_eq!(catalog.available("b").unwrap().depends, vec![any("c")]);
	assert_eq!(catalog.installation_status(a), InstallationStatus::Available);
}

#[test]
fn snapshot_drives_a_calculation() {
	let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();
	let a = catalog.available("a").unwrap().clone();
	let changes = checker(&catalog).calculate_install_change(a).unwrap();

	assert_eq!(ids(changes.installs()), vec!["a", "c"]);
	assert_eq!(ids(changes.new_versions()), vec!["b"]);
	assert!(!changes.is_newer_runtime_required());
}

#[test]
fn snapshot_is_read_from_reader() {
	let catalog = Catalog::from_json_reader(SNAPSHOT.as_bytes()).unwrap();
	assert_eq!(catalog.available_packages().len(), 3);
}

#[test]
fn snapshot_survives_serialization() {
	let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();
	let json = serde_json::to_string(&CatalogSnapshot::from(&catalog)).unwrap();
	let reread = Catalog::from_json_str(&json).unwrap();

	assert_eq!(reread.installed_packages(), catalog.installed_packages());
	assert_eq!(reread.available_packages(), catalog.available_packages());
}

#[test]
fn repeated_id_is_rejected() {
	let json = r#"{ "installed": [{ "id": "a", "version": "1" }, { "id": "a", "version": "2" }] }"#;
	assert!(matches!(Catalog::from_json_str(json), Err(Error::DuplicatePackage(id)) if id.as_str() == "a"));
}

#[test]
fn empty_version_is_rejected() {
	let json = r#"{ "available": [{ "id": "a", "version": "" }] }"#;
	assert!(matches!(Catalog::from_json_str(json), Err(Error::SerdeJSON(_))));
}

#[test]
fn missing_statuses_follow_role() {
	let json = r#"{
		"installed": [{ "id": "c", "version": "1" }],
		"available": [
			{ "id": "a", "version": "1", "depends": [{ "id": "b" }] },
			{ "id": "b", "version": "1" },
			{ "id": "c", "version": "1" }
		]
	}"#;
	let catalog = Catalog::from_json_str(json).unwrap();

	assert_eq!(catalog.installed("c").unwrap().status, InstallationStatus::Installed);
	assert_eq!(catalog.available("c").unwrap().status, InstallationStatus::Installed);
	assert_eq!(catalog.available("b").unwrap().status, InstallationStatus::Available);

	let a = catalog.available("a").unwrap().clone();
	let changes = checker(&catalog).calculate_install_change(a).unwrap();
	assert_eq!(ids(changes.installs()), vec!["a", "b"]);
}

#[test]
fn explicit_status_is_kept() {
	let json = r#"{ "available": [{ "id": "a", "version": "1", "status": "Downloading" }] }"#;
	let catalog = Catalog::from_json_str(json).unwrap();

	assert_eq!(catalog.available("a").unwrap().status, InstallationStatus::Downloading);
}
