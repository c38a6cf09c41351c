//! Installed toolchain versions.

use std::process::Command;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Looks up the installed version of a package.
pub trait VersionProbe: Send + Sync {
    /// `None` when the package is not installed or the lookup failed.
    fn version(&self, package: &str) -> Option<String>;
}

impl<F> VersionProbe for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn version(&self, package: &str) -> Option<String> {
        self(package)
    }
}

/// Reports every package as missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProbe;

impl VersionProbe for NoProbe {
    fn version(&self, _package: &str) -> Option<String> {
        None
    }
}

/// Asks `dpkg-query` and remembers the answer per package.
#[derive(Debug, Default)]
pub struct DpkgProbe {
    cache: Mutex<FxHashMap<String, Option<String>>>,
}

impl DpkgProbe {
    pub fn new() -> Self {
        Self::default()
    }

    fn query(package: &str) -> Option<String> {
        let output = Command::new("dpkg-query")
            .args(["-W", "-f=${Version}", package])
            .output();
        match output {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_owned();
                (!version.is_empty()).then_some(version)
            }
            Ok(output) => {
                tracing::debug!(package, status = ?output.status, "package not installed");
                None
            }
            Err(e) => {
                tracing::debug!(package, "dpkg-query unavailable: {e}");
                None
            }
        }
    }
}

impl VersionProbe for DpkgProbe {
    fn version(&self, package: &str) -> Option<String> {
        if let Some(cached) = self.cache.lock().get(package) {
            return cached.clone();
        }
        let version = Self::query(package);
        self.cache
            .lock()
            .insert(package.to_owned(), version.clone());
        version
    }
}
