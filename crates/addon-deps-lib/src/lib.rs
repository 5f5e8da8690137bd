pub mod error;
pub use error::Result;
pub use error::Error;

pub mod package;
pub use package::Package;
pub use package::PackageSet;

pub mod catalog;
pub use catalog::Catalog;

pub mod config;
pub use config::CheckerOptions;

pub mod requirements;
pub mod changes;
pub mod uninstall;
pub mod dependents;
pub mod confirmation;

pub mod checker;
pub use checker::DependencyChecker;
