use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::version::{PreRelease, Version};

/// An error when a structural update cannot be applied to a version
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum VersionUpdateError {
    /// A micro segment was set on a release that has no minor segment
    #[error("setting the micro version requires the minor version to be present")]
    MicroRequiresMinor,
    /// A negative release position resolved before the first segment
    #[error("release index {index} is out of bounds for a release with {len} segment(s)")]
    ReleaseIndexOutOfBounds {
        /// The requested position
        index: isize,
        /// The number of release segments
        len: usize,
    },
}

/// Identifiers of the individually updatable parts of a version.
///
/// The declaration order is the one shared by [`Version::update`]'s clearing rule and
/// [`Version::different_at`]'s scan: updating a part clears every later part, and the
/// divergence scan reports the earliest part that differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionPart {
    /// The version epoch, `2` in `2!1.3`
    Epoch,
    /// The first release segment
    Major,
    /// The second release segment
    Minor,
    /// The third release segment
    Micro,
    /// The release sequence as a whole; updating it bumps the last segment
    Release,
    /// The prerelease counter, kind preserved
    Pre,
    /// The post release counter
    Post,
    /// The dev release counter
    Dev,
}

impl VersionPart {
    const ALL: [Self; 8] = [
        Self::Epoch,
        Self::Major,
        Self::Minor,
        Self::Micro,
        Self::Release,
        Self::Pre,
        Self::Post,
        Self::Dev,
    ];
}

impl Display for VersionPart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let part = match self {
            Self::Epoch => "epoch",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Micro => "micro",
            Self::Release => "release",
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Dev => "dev",
        };
        write!(f, "{part}")
    }
}

/// Addresses a single segment of the release sequence, by name or by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseIndex {
    /// The first segment
    Major,
    /// The second segment
    Minor,
    /// The third segment
    Micro,
    /// A raw position; negative values address from the end, `-1` being the last
    /// segment
    Position(isize),
}

impl From<isize> for ReleaseIndex {
    fn from(position: isize) -> Self {
        Self::Position(position)
    }
}

impl ReleaseIndex {
    /// Resolves to a non-negative segment position, which may lie beyond `len`
    fn resolve(self, len: usize) -> Result<usize, VersionUpdateError> {
        match self {
            Self::Major => Ok(0),
            Self::Minor => Ok(1),
            Self::Micro => Ok(2),
            Self::Position(position) => {
                if position < 0 {
                    len.checked_sub(position.unsigned_abs()).ok_or(
                        VersionUpdateError::ReleaseIndexOutOfBounds {
                            index: position,
                            len,
                        },
                    )
                } else {
                    Ok(position.unsigned_abs())
                }
            }
        }
    }
}

/// An absent counter updates as if it were 0; deltas saturate at 0 rather than
/// underflowing
fn bump(value: Option<u64>, change: i64) -> u64 {
    value.unwrap_or_default().saturating_add_signed(change)
}

impl Version {
    /// Updates a particular part of this version and returns the result.
    ///
    /// Adds `change` to the addressed part, taking an absent part as 0 (for
    /// [`VersionPart::Pre`]: as alpha 0, preserving an existing kind), then clears
    /// every part that comes after the updated one. Parts before it and the local
    /// segment are untouched.
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use pepver::{Version, VersionPart};
    ///
    /// let version = Version::from_str("1.2rc3.dev4").unwrap();
    /// assert_eq!(version.update(VersionPart::Pre, 1).to_string(), "1.2rc4");
    /// let version = Version::from_str("1.2.3").unwrap();
    /// assert_eq!(version.update(VersionPart::Minor, -1).to_string(), "1.1");
    /// ```
    ///
    /// Updating the minor or micro segment defaults missing intermediate segments to
    /// 0, so `0` updated at micro becomes `0.0.1`.
    #[must_use]
    pub fn update(&self, part: VersionPart, change: i64) -> Self {
        let mut version = self.clone();
        match part {
            VersionPart::Epoch => {
                version.epoch = Some(bump(self.epoch, change));
                // The release counts as a later part here, so it resets to the
                // minimal non-empty sequence
                version.release = vec![0];
            }
            VersionPart::Major => {
                version.release = vec![bump(Some(self.major()), change)];
            }
            VersionPart::Minor => {
                version.release = vec![self.major(), bump(self.minor(), change)];
            }
            VersionPart::Micro => {
                version.release = vec![
                    self.major(),
                    self.minor().unwrap_or_default(),
                    bump(self.micro(), change),
                ];
            }
            VersionPart::Release => {
                let last = version.release.len() - 1;
                version.release[last] = bump(Some(version.release[last]), change);
            }
            VersionPart::Pre => {
                let (kind, number) = self.pre.unwrap_or((PreRelease::Alpha, 0));
                version.pre = Some((kind, bump(Some(number), change)));
            }
            VersionPart::Post => {
                version.post = Some(bump(self.post, change));
            }
            VersionPart::Dev => {
                version.dev = Some(bump(self.dev, change));
            }
        }
        if part < VersionPart::Pre {
            version.pre = None;
        }
        if part < VersionPart::Post {
            version.post = None;
        }
        if part < VersionPart::Dev {
            version.dev = None;
        }
        version
    }

    /// Updates a single segment of the release sequence and returns the result.
    ///
    /// Behaves like [`Version::update`] restricted to the release: the result keeps
    /// exactly the segments up to and including the addressed one, with the release
    /// zero-extended first when the position lies beyond its current length. The
    /// epoch is preserved; pre, post, dev and local are dropped since the release
    /// they qualified no longer exists.
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use pepver::Version;
    ///
    /// let version = Version::from_str("0.1.2.3.4").unwrap();
    /// assert_eq!(version.update_release(-1, 1).unwrap().to_string(), "0.1.2.3.5");
    /// assert_eq!(version.update_release(1, 1).unwrap().to_string(), "0.2");
    /// ```
    pub fn update_release(
        &self,
        index: impl Into<ReleaseIndex>,
        change: i64,
    ) -> Result<Self, VersionUpdateError> {
        let index = index.into().resolve(self.release.len())?;
        let mut release: Vec<u64> = self.release.iter().copied().take(index).collect();
        release.resize(index, 0);
        release.push(bump(self.release.get(index).copied(), change));
        Ok(Self {
            epoch: self.epoch,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        })
    }

    /// Removes trailing zero release segments, keeping at least `max(keep, 1)`
    /// segments and stopping at the first non-zero trailing segment. Preserves the
    /// epoch and drops all qualifiers.
    #[must_use]
    pub fn strip_release(&self, keep: usize) -> Self {
        let floor = keep.max(1);
        let mut release = self.release.clone();
        while release.len() > floor && release.last() == Some(&0) {
            release.pop();
        }
        Self {
            epoch: self.epoch,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// Unconditionally cuts the release down to its first `max(keep, 1)` segments,
    /// regardless of their value. Preserves the epoch and drops all qualifiers.
    #[must_use]
    pub fn truncate_release(&self, keep: usize) -> Self {
        let mut release = self.release.clone();
        release.truncate(keep.max(1));
        Self {
            epoch: self.epoch,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// Finds the most significant part at which two versions differ, scanning in
    /// [`VersionPart`] order with absence counting as a difference (`1.2` and
    /// `1.2.0` differ at micro). Returns `None` when every part ties; the local
    /// segment is not scanned.
    pub fn different_at(&self, other: &Self) -> Option<VersionPart> {
        VersionPart::ALL
            .into_iter()
            .find(|part| !self.part_matches(other, *part))
    }

    fn part_matches(&self, other: &Self, part: VersionPart) -> bool {
        match part {
            VersionPart::Epoch => self.epoch == other.epoch,
            VersionPart::Major => self.major() == other.major(),
            VersionPart::Minor => self.minor() == other.minor(),
            VersionPart::Micro => self.micro() == other.micro(),
            VersionPart::Release => self.release == other.release,
            VersionPart::Pre => self.pre == other.pre,
            VersionPart::Post => self.post == other.post,
            VersionPart::Dev => self.dev == other.dev,
        }
    }
}
