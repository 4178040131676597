//! OS-version gating for host facilities introduced after a given release.
//!
//! A [`Requirement`] names the minimum version per platform family. The
//! process-wide gate resolves the single triple relevant to the running
//! host, probes the OS version once and caches every decision for the
//! lifetime of the process; the OS version cannot change underneath it.
//!
//! Rust has no counterpart to clang's `__builtin_available`, so every
//! backend brings its own [`VersionProbe`].

use std::fmt;
use std::str::FromStr;

use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use thiserror::Error;

use crate::platform::HostProbe;

/// A `major.minor.patch` operating system version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid OS version string {0:?}")]
pub struct ParseOsVersionError(String);

impl FromStr for OsVersion {
    type Err = ParseOsVersionError;

    /// Reads up to three dot-separated numeric components. Missing
    /// components are zero, and parsing stops at the first component with a
    /// non-numeric suffix, so kernel releases such as `6.1.0-13-amd64` or
    /// `10.0.19045` parse as expected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u32; 3];
        let mut components = s.trim().split('.');
        for (index, slot) in parts.iter_mut().enumerate() {
            let Some(component) = components.next() else {
                break;
            };
            let digits = component
                .find(|c: char| !c.is_ascii_digit())
                .map_or(component, |end| &component[..end]);
            match digits.parse() {
                Ok(value) => *slot = value,
                Err(_) if index > 0 => break,
                Err(_) => return Err(ParseOsVersionError(s.to_string())),
            }
            if digits.len() != component.len() {
                break;
            }
        }
        Ok(OsVersion::new(parts[0], parts[1], parts[2]))
    }
}

/// Operating system families a requirement can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    MacOs,
    Ios,
    TvOs,
    WatchOs,
    Linux,
    Windows,
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlatformFamily::MacOs => "macOS",
            PlatformFamily::Ios => "iOS",
            PlatformFamily::TvOs => "tvOS",
            PlatformFamily::WatchOs => "watchOS",
            PlatformFamily::Linux => "Linux",
            PlatformFamily::Windows => "Windows",
        })
    }
}

/// Minimum OS versions, one per platform family.
///
/// A family left unset does not offer the facility at all, so the gate
/// answers `false` there regardless of version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub macos: Option<OsVersion>,
    pub ios: Option<OsVersion>,
    pub tvos: Option<OsVersion>,
    pub watchos: Option<OsVersion>,
    pub linux: Option<OsVersion>,
    pub windows: Option<OsVersion>,
}

impl Requirement {
    /// `clock_gettime(2)`; Darwin only gained it with macOS 10.12.
    pub const CLOCK_GETTIME: Requirement = Requirement::new()
        .macos(10, 12, 0)
        .ios(10, 0, 0)
        .tvos(10, 0, 0)
        .watchos(3, 0, 0)
        .linux(2, 6, 0);

    /// `futimens(2)` / `utimensat(2)`.
    pub const FUTIMENS: Requirement = Requirement::new()
        .macos(10, 13, 0)
        .ios(11, 0, 0)
        .tvos(11, 0, 0)
        .watchos(4, 0, 0)
        .linux(2, 6, 22);

    /// `statx(2)`.
    pub const STATX: Requirement = Requirement::new().linux(4, 11, 0);

    /// `AF_UNIX` stream sockets; Windows 10 build 17063 onwards.
    pub const AF_UNIX: Requirement = Requirement::new()
        .macos(10, 0, 0)
        .ios(2, 0, 0)
        .tvos(9, 0, 0)
        .watchos(2, 0, 0)
        .linux(2, 0, 0)
        .windows(10, 0, 17063);

    pub const fn new() -> Self {
        Self {
            macos: None,
            ios: None,
            tvos: None,
            watchos: None,
            linux: None,
            windows: None,
        }
    }

    pub const fn macos(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.macos = Some(OsVersion::new(major, minor, patch));
        self
    }

    pub const fn ios(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.ios = Some(OsVersion::new(major, minor, patch));
        self
    }

    pub const fn tvos(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.tvos = Some(OsVersion::new(major, minor, patch));
        self
    }

    pub const fn watchos(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.watchos = Some(OsVersion::new(major, minor, patch));
        self
    }

    pub const fn linux(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.linux = Some(OsVersion::new(major, minor, patch));
        self
    }

    pub const fn windows(mut self, major: u32, minor: u32, build: u32) -> Self {
        self.windows = Some(OsVersion::new(major, minor, build));
        self
    }

    /// The minimum version this requirement names for `family`.
    pub const fn minimum_for(&self, family: PlatformFamily) -> Option<OsVersion> {
        match family {
            PlatformFamily::MacOs => self.macos,
            PlatformFamily::Ios => self.ios,
            PlatformFamily::TvOs => self.tvos,
            PlatformFamily::WatchOs => self.watchos,
            PlatformFamily::Linux => self.linux,
            PlatformFamily::Windows => self.windows,
        }
    }

    pub fn is_satisfied_by(&self, family: PlatformFamily, version: OsVersion) -> bool {
        self.minimum_for(family)
            .is_some_and(|minimum| version >= minimum)
    }
}

/// Reports which family the process runs on and which version it has.
pub trait VersionProbe {
    fn family(&self) -> PlatformFamily;

    /// The running OS version, or `None` if it cannot be determined.
    fn probe(&self) -> Option<OsVersion>;
}

/// Caches the probed OS version and every decision made against it.
///
/// Nothing here takes a lock across a probe: concurrent first callers may
/// each probe, they all compute the same answer and the first write wins.
#[derive(Debug)]
pub struct AvailabilityGate<P> {
    probe: P,
    version: OnceCell<OsVersion>,
    decisions: DashMap<Requirement, bool>,
}

impl<P: VersionProbe> AvailabilityGate<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            version: OnceCell::new(),
            decisions: DashMap::new(),
        }
    }

    pub fn family(&self) -> PlatformFamily {
        self.probe.family()
    }

    /// The running OS version. A failed probe reads as `0.0.0`, which keeps
    /// every gated facility switched off. When first callers race, all of
    /// them get the value stored first.
    pub fn os_version(&self) -> OsVersion {
        if let Some(version) = self.version.get() {
            return *version;
        }
        let family = self.probe.family();
        let version = match self.probe.probe() {
            Some(version) => {
                tracing::debug!(%family, %version, "probed host OS version");
                version
            }
            None => {
                tracing::warn!(%family, "unable to determine the host OS version");
                OsVersion::default()
            }
        };
        *self.version.get_or_init(|| version)
    }

    pub fn is_available(&self, requirement: &Requirement) -> bool {
        if let Some(decision) = self.decisions.get(requirement) {
            return *decision;
        }
        let family = self.probe.family();
        let version = self.os_version();
        let decision = requirement.is_satisfied_by(family, version);
        tracing::trace!(
            %family,
            %version,
            minimum = ?requirement.minimum_for(family),
            decision,
            "resolved availability requirement"
        );
        self.decisions.insert(*requirement, decision);
        decision
    }

    /// Number of requirements decided so far.
    pub fn cached_decisions(&self) -> usize {
        self.decisions.len()
    }
}

static HOST_GATE: Lazy<AvailabilityGate<HostProbe>> =
    Lazy::new(|| AvailabilityGate::new(HostProbe));

/// Whether the running OS satisfies `requirement`.
pub fn is_available(requirement: &Requirement) -> bool {
    HOST_GATE.is_available(requirement)
}

/// Version of the running OS as seen by the process-wide gate.
pub fn host_os_version() -> OsVersion {
    HOST_GATE.os_version()
}

/// Family of the running OS.
pub fn host_family() -> PlatformFamily {
    HOST_GATE.family()
}
