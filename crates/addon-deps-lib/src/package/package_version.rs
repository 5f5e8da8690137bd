use std::cmp::Ordering;

use serde::*;

/// The version of a package.
///
/// # Format
/// Package versions follow a format `[epoch:]version`.
/// - `epoch` is used to correct errors in versioning schemes or
/// organize versions that are difficult to interpret. Defaults to `0`.
/// - `version` can be any non-empty string.
///
/// # Ordering
/// Epochs are compared numerically first. The remaining string is compared from left to right,
/// alternating between runs of non-digits, which compare lexically with letters sorting before
/// other characters, and runs of digits, which compare numerically with an empty run counting as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageVersion {
	epoch: u32,
	version: String,
}

impl PackageVersion {
	/// # Errors
	/// [`Parse`](crate::Error::Parse) when the version part is empty.
	pub fn new(version: impl AsRef<str>) -> crate::Result<Self> {
		let version = version.as_ref().trim();

		let (epoch, version) = match version.split_once(':') {
			Some((epoch, rest)) => match epoch.parse::<u32>() {
				Ok(epoch) => (epoch, rest),
				/* Not an epoch, the colon is part of the version */
				Err(_) => (0, version),
			},
			None => (0, version),
		};

		if version.is_empty() {
			return Err(crate::Error::Parse("package version can't be empty".into()))
		}

		Ok(PackageVersion { epoch, version: version.to_string() })
	}

	pub fn epoch(&self) -> u32 { self.epoch }
	pub fn version(&self) -> &str { &self.version }
}

impl TryFrom<String> for PackageVersion {
	type Error = crate::Error;
	fn try_from(value: String) -> Result<Self, Self::Error> { Self::new(value) }
}

impl TryFrom<&str> for PackageVersion {
	type Error = crate::Error;
	fn try_from(value: &str) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<PackageVersion> for String {
	fn from(value: PackageVersion) -> Self { value.to_string() }
}

/// Splits `s` at the first character where `pred` stops holding.
fn split_run(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
	let i = s.find(|c: char| !pred(c)).unwrap_or(s.len());
	s.split_at(i)
}

/// Letters sort before every other character, the end of a run sorts before both.
fn compare_non_digits(lhs: &str, rhs: &str) -> Ordering {
	fn weight(c: char) -> u32 {
		if c.is_ascii_alphabetic() { c as u32 } else { c as u32 + 0x1_0000 }
	}

	let mut lhs = lhs.chars();
	let mut rhs = rhs.chars();
	loop {
		match (lhs.next(), rhs.next()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(l), Some(r)) => match weight(l).cmp(&weight(r)) {
				Ordering::Equal => continue,
				ord => return ord,
			},
		}
	}
}

/// Compares digit runs by value without parsing, so arbitrarily long runs can't overflow.
fn compare_digits(lhs: &str, rhs: &str) -> Ordering {
	let lhs = lhs.trim_start_matches('0');
	let rhs = rhs.trim_start_matches('0');
	lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

impl Ord for PackageVersion {
	fn cmp(&self, other: &Self) -> Ordering {
		match self.epoch.cmp(&other.epoch) {
			Ordering::Equal => {},
			ord => return ord,
		}

		let mut lhs = self.version.as_str();
		let mut rhs = other.version.as_str();

		while !lhs.is_empty() || !rhs.is_empty() {
			let (l, lrest) = split_run(lhs, |c| !c.is_ascii_digit());
			let (r, rrest) = split_run(rhs, |c| !c.is_ascii_digit());
			match compare_non_digits(l, r) {
				Ordering::Equal => {},
				ord => return ord,
			}

			let (l, lrest) = split_run(lrest, |c| c.is_ascii_digit());
			let (r, rrest) = split_run(rrest, |c| c.is_ascii_digit());
			match compare_digits(l, r) {
				Ordering::Equal => {},
				ord => return ord,
			}

			lhs = lrest;
			rhs = rrest;
		}

		Ordering::Equal
	}
}

impl PartialOrd for PackageVersion {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/* Equality follows the ordering so `1.02` and `1.2` are the same version */
impl PartialEq for PackageVersion {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for PackageVersion {}

impl std::fmt::Display for PackageVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.epoch == 0 {
			write!(f, "{}", self.version)
		} else {
			write!(f, "{}:{}", self.epoch, self.version)
		}
	}
}

pub type PackageVersionBounds = super::VersionBounds<PackageVersion>;
