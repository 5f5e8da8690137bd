use crate::package::RuntimeVersion;

/// Environment variable read by [`CheckerOptions::from_env()`].
pub const RUNTIME_VERSION_VAR: &str = "ADDON_DEPS_RUNTIME_VERSION";

/// Settings shared by every calculation of a [`DependencyChecker`](crate::DependencyChecker).
#[derive(Debug, Clone)]
pub struct CheckerOptions {
	runtime_version: RuntimeVersion,
}

impl CheckerOptions {
	pub fn new(runtime_version: RuntimeVersion) -> Self {
		Self { runtime_version }
	}

	/// Reads the runtime version from [`RUNTIME_VERSION_VAR`], using `fallback` when it's unset.
	///
	/// # Errors
	/// [`Parse`](crate::Error::Parse) if the variable is set but isn't a valid runtime version.
	pub fn from_env(fallback: RuntimeVersion) -> crate::Result<Self> {
		let runtime_version = match std::env::var(RUNTIME_VERSION_VAR) {
			Ok(v) => RuntimeVersion::new(v)?,
			Err(_) => {
				log::debug!("{} not set, assuming runtime {}", RUNTIME_VERSION_VAR, fallback);
				fallback
			},
		};
		Ok(Self { runtime_version })
	}

	/// The version of the host runtime add-ons will run on.
	pub fn runtime_version(&self) -> &RuntimeVersion {
		&self.runtime_version
	}
	pub fn set_runtime_version(&mut self, runtime_version: RuntimeVersion) {
		self.runtime_version = runtime_version;
	}
}
