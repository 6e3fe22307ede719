//! A library for parsing, ordering and structurally updating version numbers
//! following the [PEP 440](https://peps.python.org/pep-0440) scheme.
//!
//! ```rust
//! use std::str::FromStr;
//! use pepver::{Version, VersionPart};
//!
//! let version = Version::from_str("v1.2-alpha3").unwrap();
//! assert_eq!(version.to_string(), "1.2a3");
//! assert!(version < Version::from_str("1.2a4").unwrap());
//! assert_eq!(version.update(VersionPart::Minor, 1).to_string(), "1.3");
//! ```
//!
//! The version model has a few properties worth knowing up front:
//!
//! * Parsing accepts every spelling variant PEP 440 permits
//!   (`1.0-alpha`, `1.0.a`, `1.0A` and so on) and normalizes them to one canonical
//!   form per field, so equal versions always print the same way.
//! * The ordering is a structural field-by-field order, with an absent field
//!   sorting below any present value. It intentionally deviates from the PEP 440
//!   suffix order: `1.2.post1 < 1.2a0`, and `1.0 < 0!1.0` since an absent epoch is
//!   kept distinct from an explicit `0!`.
//! * Release segments compare as a sequence, so `1.2 < 1.2.0`.
//! * Every update operation returns a new [`Version`]; nothing mutates in place.
#![deny(missing_docs)]

pub use crate::update::{ReleaseIndex, VersionPart, VersionUpdateError};
pub use crate::version::{PreRelease, Version, VersionParseError};

mod update;
mod version;
