use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::update::VersionUpdateError;

/// A regex adapted from <https://peps.python.org/pep-0440/#appendix-b-parsing-version-strings-with-regular-expressions>
const VERSION_RE_INNER: &str = r"
(?:v?)                                            # <https://peps.python.org/pep-0440/#preceding-v-character>
(?:(?P<epoch>[0-9]+)!)?                           # epoch
(?P<release>[0-9]+(?:\.[0-9]+)*)                  # release segment
(?P<pre_field>                                    # pre-release
    [-_\.]?
    (?P<pre_name>a|b|c|rc|alpha|beta|pre|preview)
    [-_\.]?
    (?P<pre>[0-9]+)?
)?
(?P<post_field>                                   # post release
    (?:-(?P<post_old>[0-9]+))
    |
    (?:
        [-_\.]?
        (?:post|rev|r)
        [-_\.]?
        (?P<post_new>[0-9]+)?
    )
)?
(?P<dev_field>                                    # dev release
    [-_\.]?
    dev
    [-_\.]?
    (?P<dev>[0-9]+)?
)?
(?:\+(?P<local>[a-z0-9]+(?:[-_\.][a-z0-9]+)*))?   # local version
";

/// Matches a whole version string, such as `1.19.a1`, surrounding whitespace included
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?xi)^(?:\s*){VERSION_RE_INNER}(?:\s*)$")).unwrap());

/// An error when parsing an invalid version string
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum VersionParseError {
    /// The string doesn't match the PEP 440 grammar as a whole
    #[error("version `{version}` doesn't match PEP 440 rules")]
    InvalidFormat {
        /// The rejected input
        version: String,
    },
    /// A numeric group in an otherwise well-formed version overflows `u64`
    #[error("version `{version}` contains a number (`{segment}`) larger than supported")]
    NumberTooLarge {
        /// The rejected input
        version: String,
        /// The numeric group that overflowed
        segment: String,
    },
}

/// Optional prerelease modifier (alpha, beta or release candidate) appended to a version
///
/// <https://peps.python.org/pep-0440/#pre-releases>
#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy, Ord, PartialOrd)]
pub enum PreRelease {
    /// alpha prerelease
    Alpha,
    /// beta prerelease
    Beta,
    /// release candidate prerelease
    Rc,
}

impl FromStr for PreRelease {
    type Err = String;

    fn from_str(prerelease: &str) -> Result<Self, Self::Err> {
        match prerelease.to_lowercase().as_str() {
            "a" | "alpha" => Ok(Self::Alpha),
            "b" | "beta" => Ok(Self::Beta),
            "c" | "rc" | "pre" | "preview" => Ok(Self::Rc),
            _ => Err(format!(
                "'{prerelease}' isn't recognized as alpha, beta or release candidate",
            )),
        }
    }
}

impl Display for PreRelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => write!(f, "a"),
            Self::Beta => write!(f, "b"),
            Self::Rc => write!(f, "rc"),
        }
    }
}

/// A single fixed version such as `1.2.3` or `4!5.6.7-a8.post9.dev0+linux`.
///
/// Versions are ordered field by field, in the fixed priority
/// `epoch, release, pre, post, dev, local`, where an absent field sorts below any
/// present value of that field. Beware that this is a plain structural order, not the
/// PEP 440 suffix order: `1.2.post1 < 1.2a0`, and `1.0 < 0!1.0` because an absent
/// epoch sorts below an explicit `0!`.
///
/// Parse with [`Version::from_str`]:
///
/// ```rust
/// use std::str::FromStr;
/// use pepver::Version;
///
/// let version = Version::from_str("1.19").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    /// The [versioning epoch](https://peps.python.org/pep-0440/#version-epochs).
    /// `None` when the version carried no `N!` marker. An explicit `0!` is kept
    /// distinct from an absent epoch and sorts above it.
    pub epoch: Option<u64>,
    /// The dotted number part of the version
    /// (["final release"](https://peps.python.org/pep-0440/#final-releases)),
    /// such as `1.2.3` in `4!1.2.3-a8.post9.dev1`. Never empty.
    pub release: Vec<u64>,
    /// The [prerelease](https://peps.python.org/pep-0440/#pre-releases), i.e. alpha,
    /// beta or rc plus a number
    pub pre: Option<(PreRelease, u64)>,
    /// The [post release](https://peps.python.org/pep-0440/#post-releases) counter
    pub post: Option<u64>,
    /// The [developmental release](https://peps.python.org/pep-0440/#developmental-releases)
    /// counter, if any
    pub dev: Option<u64>,
    /// A [local version identifier](https://peps.python.org/pep-0440/#local-version-identifiers)
    /// such as `deadbeef` in `1.2.3+deadbeef`, stored lowercase with its segment
    /// separators normalized to `.` and compared as a plain string
    pub local: Option<String>,
}

impl Version {
    /// Constructor for a version that is just a release such as `3.8`
    pub fn from_release(release: Vec<u64>) -> Self {
        Self {
            epoch: None,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// Returns this version with the given epoch
    #[must_use]
    pub fn with_epoch(mut self, epoch: u64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Returns this version with the given prerelease kind and number
    #[must_use]
    pub fn with_pre(mut self, kind: PreRelease, number: u64) -> Self {
        self.pre = Some((kind, number));
        self
    }

    /// Returns this version with the given post release counter
    #[must_use]
    pub fn with_post(mut self, post: u64) -> Self {
        self.post = Some(post);
        self
    }

    /// Returns this version with the given dev release counter
    #[must_use]
    pub fn with_dev(mut self, dev: u64) -> Self {
        self.dev = Some(dev);
        self
    }

    /// Returns this version with the given local version label
    #[must_use]
    pub fn with_local(mut self, local: impl Into<String>) -> Self {
        self.local = Some(local.into());
        self
    }
}

impl Version {
    /// Major (first) segment of the release part. Always present.
    pub fn major(&self) -> u64 {
        self.release[0]
    }

    /// Minor (second) segment of the release part
    pub fn minor(&self) -> Option<u64> {
        self.release.get(1).copied()
    }

    /// Micro (third) segment of the release part. In semver known as "patch".
    pub fn micro(&self) -> Option<u64> {
        self.release.get(2).copied()
    }

    /// Returns this version with the major segment replaced, keeping the rest of the
    /// release untouched
    #[must_use]
    pub fn with_major(mut self, value: u64) -> Self {
        self.release[0] = value;
        self
    }

    /// Returns this version with the minor segment replaced. Passing `None` drops
    /// everything from the second segment onward.
    #[must_use]
    pub fn with_minor(mut self, value: Option<u64>) -> Self {
        match value {
            Some(value) => {
                if self.release.len() < 2 {
                    self.release.push(value);
                } else {
                    self.release[1] = value;
                }
            }
            None => self.release.truncate(1),
        }
        self
    }

    /// Returns this version with the micro segment replaced. Passing `None` drops
    /// everything from the third segment onward.
    ///
    /// Setting a micro value requires the minor segment to be present; a one-segment
    /// release is rejected rather than silently extended.
    pub fn with_micro(mut self, value: Option<u64>) -> Result<Self, VersionUpdateError> {
        match value {
            Some(value) => {
                if self.release.len() < 2 {
                    return Err(VersionUpdateError::MicroRequiresMinor);
                }
                if self.release.len() < 3 {
                    self.release.push(value);
                } else {
                    self.release[2] = value;
                }
            }
            None => self.release.truncate(2),
        }
        Ok(self)
    }
}

impl Version {
    /// Whether this is an alpha/beta/rc version
    pub fn is_pre(&self) -> bool {
        self.pre.is_some()
    }

    /// Whether this is a post version
    pub fn is_post(&self) -> bool {
        self.post.is_some()
    }

    /// Whether this is a dev version
    pub fn is_dev(&self) -> bool {
        self.dev.is_some()
    }

    /// Whether this is a local version (e.g. `1.2.3+localsuffixesareweird`)
    pub fn is_local(&self) -> bool {
        self.local.is_some()
    }

    /// Whether this version is final, i.e. carries nothing beyond an epoch and a release
    pub fn is_final(&self) -> bool {
        !(self.is_pre() || self.is_post() || self.is_dev() || self.is_local())
    }

    /// Drops the non-final segments of this version, keeping only epoch and release
    #[must_use]
    pub fn make_final(&self) -> Self {
        Self {
            epoch: self.epoch,
            release: self.release.clone(),
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// The public part of this version: the canonical serialization without the
    /// local segment, `[epoch!]release[{a|b|rc}N][.postN][.devN]`
    pub fn public(&self) -> String {
        let epoch = self
            .epoch
            .map(|epoch| format!("{epoch}!"))
            .unwrap_or_default();
        let release = self
            .release
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(".");
        let pre = self
            .pre
            .map(|(kind, number)| format!("{kind}{number}"))
            .unwrap_or_default();
        let post = self
            .post
            .map(|post| format!(".post{post}"))
            .unwrap_or_default();
        let dev = self.dev.map(|dev| format!(".dev{dev}")).unwrap_or_default();
        format!("{epoch}{release}{pre}{post}{dev}")
    }
}

/// Shows the normalized version, local segment included
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.public())?;
        if let Some(local) = &self.local {
            write!(f, "+{local}")?;
        }
        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Compares field by field in the fixed priority
    /// `epoch, release, pre, post, dev, local`. For each field an absent value sorts
    /// below any present one, release segments compare as a sequence (a strict prefix
    /// is smaller, `1.2 < 1.2.0`), prereleases compare as (kind, number) with
    /// `a < b < rc`, and the local label compares as a string.
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.release.cmp(&other.release))
            .then_with(|| self.pre.cmp(&other.pre))
            .then_with(|| self.post.cmp(&other.post))
            .then_with(|| self.dev.cmp(&other.dev))
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses a version such as `1.19`, `1.0a1`, `1.0+abc.5` or `1!2012.2`,
    /// accepting all spelling variations PEP 440 allows and normalizing
    /// them while parsing. The whole string must match; surrounding whitespace and a
    /// leading `v` are ignored.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let captures = VERSION_RE
            .captures(version)
            .ok_or_else(|| VersionParseError::InvalidFormat {
                version: version.to_string(),
            })?;
        Self::parse_impl(version, &captures)
    }
}

impl Version {
    fn parse_impl(input: &str, captures: &Captures) -> Result<Self, VersionParseError> {
        let number_field = |field_name| {
            captures
                .name(field_name)
                .map(|field| {
                    field.as_str().parse::<u64>().map_err(|_| {
                        // Forbidden by the regex except for overflow
                        VersionParseError::NumberTooLarge {
                            version: input.to_string(),
                            segment: field.as_str().to_string(),
                        }
                    })
                })
                .transpose()
        };
        let epoch = number_field("epoch")?;
        let pre = match captures.name("pre_name") {
            Some(pre_name) => {
                let kind = PreRelease::from_str(pre_name.as_str())
                    // Shouldn't fail, the regex only matches known spellings
                    .map_err(|_| VersionParseError::InvalidFormat {
                        version: input.to_string(),
                    })?;
                // <https://peps.python.org/pep-0440/#implicit-pre-release-number>
                let number = number_field("pre")?.unwrap_or_default();
                Some((kind, number))
            }
            None => None,
        };
        let post = if captures.name("post_field").is_some() {
            // The bare `-N` form and the keyword form are unified; a keyword without
            // digits defaults to 0
            Some(
                number_field("post_new")?
                    .or(number_field("post_old")?)
                    .unwrap_or_default(),
            )
        } else {
            None
        };
        let dev = if captures.name("dev_field").is_some() {
            // <https://peps.python.org/pep-0440/#implicit-development-release-number>
            Some(number_field("dev")?.unwrap_or_default())
        } else {
            None
        };
        let local = captures.name("local").map(|local| {
            local
                .as_str()
                .to_lowercase()
                .split(['-', '_', '.'])
                .collect::<Vec<_>>()
                .join(".")
        });
        let release = captures
            .name("release")
            // Forbidden by the regex
            .ok_or_else(|| VersionParseError::InvalidFormat {
                version: input.to_string(),
            })?
            .as_str()
            .split('.')
            .map(|segment| {
                segment
                    .parse::<u64>()
                    .map_err(|_| VersionParseError::NumberTooLarge {
                        version: input.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<u64>, VersionParseError>>()?;

        Ok(Self {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{PreRelease, Version, VersionParseError};
    use crate::update::VersionUpdateError;

    fn release(segments: &[u64]) -> Version {
        Version::from_release(segments.to_vec())
    }

    #[test]
    fn test_parse() {
        let versions = [
            ("0", release(&[0])),
            ("1", release(&[1])),
            ("11", release(&[11])),
            ("1.2", release(&[1, 2])),
            ("1.2.3", release(&[1, 2, 3])),
            ("1.2.3.4.5", release(&[1, 2, 3, 4, 5])),
            ("12.34.56.78.9", release(&[12, 34, 56, 78, 9])),
            ("2!0", release(&[0]).with_epoch(2)),
            ("42!0", release(&[0]).with_epoch(42)),
            ("1.2a1", release(&[1, 2]).with_pre(PreRelease::Alpha, 1)),
            ("1.2b12", release(&[1, 2]).with_pre(PreRelease::Beta, 12)),
            ("1.2rc420", release(&[1, 2]).with_pre(PreRelease::Rc, 420)),
            ("1.2.post42", release(&[1, 2]).with_post(42)),
            ("1.2.dev42", release(&[1, 2]).with_dev(42)),
            (
                "1.2rc1.post42",
                release(&[1, 2]).with_pre(PreRelease::Rc, 1).with_post(42),
            ),
            ("1.2.post42.dev12", release(&[1, 2]).with_post(42).with_dev(12)),
            (
                "1.2b11.post42.dev12",
                release(&[1, 2])
                    .with_pre(PreRelease::Beta, 11)
                    .with_post(42)
                    .with_dev(12),
            ),
            ("1.2+something", release(&[1, 2]).with_local("something")),
            (
                "1!2.3.4.5a6.post7.dev8+9",
                release(&[2, 3, 4, 5])
                    .with_epoch(1)
                    .with_pre(PreRelease::Alpha, 6)
                    .with_post(7)
                    .with_dev(8)
                    .with_local("9"),
            ),
        ];
        for (string, expected) in versions {
            let parsed = Version::from_str(string).unwrap();
            assert_eq!(parsed, expected, "{string}");
            // These inputs are already canonical, so parsing must round-trip exactly
            assert_eq!(parsed.to_string(), string);
        }
    }

    #[test]
    fn test_normalize() {
        let versions = [
            ("01", "1", release(&[1])),
            ("0.02", "0.2", release(&[0, 2])),
            ("0.1alpha2", "0.1a2", release(&[0, 1]).with_pre(PreRelease::Alpha, 2)),
            ("0.1.a2", "0.1a2", release(&[0, 1]).with_pre(PreRelease::Alpha, 2)),
            ("0.1.beta2", "0.1b2", release(&[0, 1]).with_pre(PreRelease::Beta, 2)),
            ("0.1-c2", "0.1rc2", release(&[0, 1]).with_pre(PreRelease::Rc, 2)),
            ("0.1_pre2", "0.1rc2", release(&[0, 1]).with_pre(PreRelease::Rc, 2)),
            ("0.1preview2", "0.1rc2", release(&[0, 1]).with_pre(PreRelease::Rc, 2)),
            ("0.1pre", "0.1rc0", release(&[0, 1]).with_pre(PreRelease::Rc, 0)),
            ("0.1rev1", "0.1.post1", release(&[0, 1]).with_post(1)),
            ("0.1-r", "0.1.post0", release(&[0, 1]).with_post(0)),
            ("0.1_post", "0.1.post0", release(&[0, 1]).with_post(0)),
            ("0.1-11", "0.1.post11", release(&[0, 1]).with_post(11)),
            ("0.1.dev", "0.1.dev0", release(&[0, 1]).with_dev(0)),
            ("0.1-dev1", "0.1.dev1", release(&[0, 1]).with_dev(1)),
            ("0.1_dev2", "0.1.dev2", release(&[0, 1]).with_dev(2)),
            ("0.1dev3", "0.1.dev3", release(&[0, 1]).with_dev(3)),
            ("1.0+AbC", "1.0+abc", release(&[1, 0]).with_local("abc")),
            ("1.0+ubuntu-1_2", "1.0+ubuntu.1.2", release(&[1, 0]).with_local("ubuntu.1.2")),
            ("v1.0", "1.0", release(&[1, 0])),
            ("   v1.0\t\n", "1.0", release(&[1, 0])),
            ("0100!0.0", "100!0.0", release(&[0, 0]).with_epoch(100)),
        ];
        for (original, normalized, value) in versions {
            let parsed = Version::from_str(original).unwrap();
            assert_eq!(parsed, value, "{original}");
            assert_eq!(parsed.to_string(), normalized, "{original}");
        }
    }

    /// The many spellings the grammar accepts for each suffix, from the
    /// normalization examples in PEP 440
    #[test]
    fn test_equality_and_normalization() {
        let versions = [
            // Various development release incarnations
            ("1.0dev", "1.0.dev0"),
            ("1.0.dev", "1.0.dev0"),
            ("1.0dev1", "1.0.dev1"),
            ("1.0-dev", "1.0.dev0"),
            ("1.0-dev1", "1.0.dev1"),
            ("1.0DEV", "1.0.dev0"),
            ("1.0.DEV1", "1.0.dev1"),
            // Various alpha incarnations
            ("1.0a", "1.0a0"),
            ("1.0.a", "1.0a0"),
            ("1.0.a1", "1.0a1"),
            ("1.0-a", "1.0a0"),
            ("1.0alpha", "1.0a0"),
            ("1.0.alpha1", "1.0a1"),
            ("1.0-ALPHA1", "1.0a1"),
            ("1.0A1", "1.0a1"),
            // Various beta incarnations
            ("1.0b", "1.0b0"),
            ("1.0.b1", "1.0b1"),
            ("1.0beta", "1.0b0"),
            ("1.0-beta1", "1.0b1"),
            ("1.0BETA", "1.0b0"),
            // Various release candidate incarnations
            ("1.0c", "1.0rc0"),
            ("1.0.c1", "1.0rc1"),
            ("1.0-rc1", "1.0rc1"),
            ("1.0C1", "1.0rc1"),
            ("1.0RC", "1.0rc0"),
            ("1.0preview2", "1.0rc2"),
            // Various post release incarnations
            ("1.0post", "1.0.post0"),
            ("1.0.POST1", "1.0.post1"),
            ("1.0r", "1.0.post0"),
            ("1.0rev", "1.0.post0"),
            ("1.0.r1", "1.0.post1"),
            ("1.0-5", "1.0.post5"),
            ("1.0-r5", "1.0.post5"),
            // Local version case insensitivity
            ("1.0+AbC", "1.0+abc"),
            // Integer normalization
            ("1.01", "1.1"),
            ("1.0a05", "1.0a5"),
            ("1.0b07", "1.0b7"),
            ("1.0c056", "1.0rc56"),
            ("1.0.post000", "1.0.post0"),
            ("1.1.dev09000", "1.1.dev9000"),
            // Preceding v and whitespace
            ("v1.0", "1.0"),
            ("   v1.0\t\n", "1.0"),
        ];
        for (version_str, normalized_str) in versions {
            let version = Version::from_str(version_str).unwrap();
            let normalized = Version::from_str(normalized_str).unwrap();
            assert_eq!(version, normalized, "{version_str} {normalized_str}");
            assert_eq!(
                version.to_string(),
                normalized_str,
                "{version_str} {normalized_str}"
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let versions = [
            "1.0.dev456",
            "1.0a1",
            "1.0a2.dev456",
            "1.0a12",
            "1.0b2.post345.dev456",
            "1.0b2.post345",
            "1.0rc1",
            "1.0",
            "1.0.post456.dev34",
            "1.0.post456",
            "0!1.0.2",
            "1.0.3+7",
            "1.2+1234.abc",
            "1.2+123456",
            "7!1.0b2.post345.dev456",
            "7!1.0.5+9.5",
        ];
        for string in versions {
            let version = Version::from_str(string).unwrap();
            assert_eq!(version.to_string(), string);
            assert_eq!(Version::from_str(&version.to_string()).unwrap(), version);
        }
    }

    /// Strictly ascending reference versions; the structural field order puts dev and
    /// post releases below prereleases, and an absent epoch below an explicit `0!`
    #[test]
    fn test_version_order() {
        let versions = [
            release(&[0]),
            release(&[1]),
            release(&[1, 1]),
            release(&[1, 1, 1]),
            release(&[1, 1, 1, 1]),
            release(&[1, 1, 1, 1, 1]),
            release(&[1, 2]),
            release(&[1, 2]).with_dev(0),
            release(&[1, 2]).with_dev(1),
            release(&[1, 2]).with_post(0),
            release(&[1, 2]).with_post(0).with_dev(0),
            release(&[1, 2]).with_post(0).with_dev(1),
            release(&[1, 2]).with_post(1),
            release(&[1, 2]).with_post(1).with_dev(0),
            release(&[1, 2]).with_pre(PreRelease::Alpha, 0),
            release(&[1, 2]).with_pre(PreRelease::Alpha, 1),
            release(&[1, 2]).with_pre(PreRelease::Alpha, 1).with_dev(0),
            release(&[1, 2]).with_pre(PreRelease::Alpha, 1).with_dev(1),
            release(&[1, 2]).with_pre(PreRelease::Alpha, 1).with_post(0),
            release(&[1, 2]).with_pre(PreRelease::Alpha, 1).with_post(1),
            release(&[1, 2])
                .with_pre(PreRelease::Alpha, 1)
                .with_post(1)
                .with_dev(0),
            release(&[1, 2])
                .with_pre(PreRelease::Alpha, 1)
                .with_post(1)
                .with_dev(1),
            release(&[1, 2]).with_pre(PreRelease::Beta, 1),
            release(&[1, 2]).with_pre(PreRelease::Beta, 2),
            release(&[1, 2]).with_pre(PreRelease::Rc, 0),
            release(&[1, 2, 0]),
            release(&[1, 2, 1]),
            release(&[1, 2, 3, 0]),
            release(&[1, 2, 3, 1]),
            release(&[2]),
            release(&[2, 1]),
            release(&[1]).with_epoch(0),
            release(&[1, 1]).with_epoch(0),
            release(&[1, 2]).with_epoch(0),
            release(&[1, 2]).with_epoch(0).with_post(1),
            release(&[1]).with_epoch(1),
            release(&[1]).with_epoch(2),
        ];
        for window in versions.windows(2) {
            assert!(window[0] < window[1], "{} < {}", window[0], window[1]);
        }

        let mut sorted = versions.to_vec();
        sorted.sort();
        assert_eq!(sorted, versions);

        sorted.sort_by(|left, right| right.cmp(left));
        let mut reversed = versions.to_vec();
        reversed.reverse();
        assert_eq!(sorted, reversed);
    }

    #[test]
    fn test_parse_failures() {
        let versions = [
            "not-a-version!!",
            "french toast",
            "",
            "1.0+a+",
            "1.0++",
            "1.0+_foobar",
            "1.0+foo&asd",
            "1.0+1+1",
            "1.0x4",
            "1.0 garbage",
            "1.2.3-x2",
        ];
        for version in versions {
            assert_eq!(
                Version::from_str(version).unwrap_err(),
                VersionParseError::InvalidFormat {
                    version: version.to_string()
                },
                "{version}"
            );
        }
    }

    #[test]
    fn test_number_too_large() {
        assert_eq!(
            Version::from_str("1.99999999999999999999999999").unwrap_err(),
            VersionParseError::NumberTooLarge {
                version: "1.99999999999999999999999999".to_string(),
                segment: "99999999999999999999999999".to_string(),
            }
        );
    }

    #[test]
    fn test_public() {
        let version = Version::from_str("1!1.2.3a4.post5.dev6+ubuntu.1").unwrap();
        assert_eq!(version.public(), "1!1.2.3a4.post5.dev6");
        assert_eq!(version.to_string(), "1!1.2.3a4.post5.dev6+ubuntu.1");
    }

    #[test]
    fn test_final() {
        assert!(release(&[1]).is_final());
        assert!(release(&[1, 2, 3]).is_final());
        assert!(release(&[0]).with_epoch(2).is_final());
        assert!(!release(&[1]).with_pre(PreRelease::Rc, 11).is_final());
        assert!(!release(&[1]).with_post(0).is_final());
        assert!(!release(&[1]).with_dev(0).is_final());
        assert!(!release(&[1]).with_local("0").is_final());

        let version = Version::from_str("2!1.2rc3.dev4+abc").unwrap();
        assert_eq!(version.make_final(), release(&[1, 2]).with_epoch(2));
        assert_eq!(version.make_final().to_string(), "2!1.2");
    }

    #[test]
    fn test_accessors() {
        let version = release(&[1, 2, 3, 4]);
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), Some(2));
        assert_eq!(version.micro(), Some(3));

        let version = release(&[1]);
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), None);
        assert_eq!(version.micro(), None);
    }

    #[test]
    fn test_release_setters() {
        assert_eq!(release(&[1, 2, 3]).with_major(7), release(&[7, 2, 3]));
        assert_eq!(release(&[1, 2, 3]).with_minor(Some(7)), release(&[1, 7, 3]));
        assert_eq!(release(&[1]).with_minor(Some(7)), release(&[1, 7]));
        assert_eq!(release(&[1, 2, 3, 4]).with_minor(None), release(&[1]));
        assert_eq!(
            release(&[1, 2, 3]).with_micro(Some(7)).unwrap(),
            release(&[1, 2, 7])
        );
        assert_eq!(
            release(&[1, 2]).with_micro(Some(7)).unwrap(),
            release(&[1, 2, 7])
        );
        assert_eq!(
            release(&[1, 2, 3, 4]).with_micro(None).unwrap(),
            release(&[1, 2])
        );
        assert_eq!(
            release(&[1]).with_micro(Some(7)).unwrap_err(),
            VersionUpdateError::MicroRequiresMinor
        );
    }
}
