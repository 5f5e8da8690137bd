//! Finding installed packages that depend on packages about to be replaced.
//!
//! Used to warn that these dependents stay installed while what they depend on changes underneath them.

use petgraph::prelude::*;
use petgraph::visit::Dfs;

use crate::catalog::Catalog;
use crate::package::*;

pub struct DependentsFinder<'c> {
	catalog: &'c Catalog,
}

impl<'c> DependentsFinder<'c> {
	pub fn new(catalog: &'c Catalog) -> Self {
		Self { catalog }
	}

	/// Installed packages that directly or indirectly depend on a member of `updated`.
	///
	/// A dependent must accept the updated version: a package whose bounds exclude it is not
	/// reported, it breaks instead and belongs to the uninstalls or updates of the change.
	/// Packages in `ignore` and the installed versions of `updated` are never reported or traversed.
	/// Each dependent is visited once so cyclic declarations terminate.
	pub fn find(&self, updated: &PackageSet, ignore: &PackageSet) -> PackageSet {
		/* Edges point from a package to the installed packages depending on it */
		let mut graph = DiGraph::<&Package, ()>::new();
		let targets: Vec<NodeIndex> = updated.iter().map(|p| graph.add_node(p)).collect();
		let installed: Vec<NodeIndex> = self.catalog.installed_packages()
			.iter()
			.filter(|p| !ignore.contains_package(p) && !updated.contains_package(p))
			.map(|p| graph.add_node(p))
			.collect();

		let mut edges = Vec::<(NodeIndex, NodeIndex)>::new();
		for &dependent in &installed {
			for dependency in graph.node_indices() {
				if dependency != dependent && graph[dependent].depends_on(graph[dependency]) {
					edges.push((dependency, dependent));
				}
			}
		}
		for (from, to) in edges {
			graph.add_edge(from, to, ());
		}

		let mut dependents = PackageSet::new();
		let mut dfs = Dfs::empty(&graph);
		for &target in &targets {
			dfs.move_to(target);
			while let Some(node) = dfs.next(&graph) {
				if node.index() >= targets.len() {
					dependents.insert(graph[node].clone());
				}
			}
		}

		log::debug!("{} installed package(s) depend on the {} updated", dependents.len(), updated.len());
		dependents
	}
}
