//! Module-federation host manifest.
//!
//! The portal is a federation host: it owns the page shell and declares the
//! contract that any remotely loaded module must honor. Today the remote
//! registry is empty and nothing is fetched at runtime; the manifest exists
//! so the shared-singleton contract is stated in one place and so remotes
//! can be registered later without reshaping the shell.

use serde::{Deserialize, Serialize};

/// An independently built module the host may load at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteModule {
    pub name: String,
    /// Where the remote's entry artifact is served from.
    pub entry_url: String,
}

/// A dependency the host provides and remotes must not duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedDependency {
    pub name: &'static str,
    pub required_version: Option<&'static str>,
    pub singleton: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostManifest {
    /// Federation identity of this shell.
    pub name: &'static str,
    /// Remote modules will be registered here based on JWT permissions.
    pub remotes: Vec<RemoteModule>,
    pub shared: Vec<SharedDependency>,
}

impl HostManifest {
    /// The manifest this shell ships with: host `dump`, no remotes yet,
    /// UI framework and wasm ABI pinned as shared singletons.
    pub fn host_default() -> Self {
        Self {
            name: "dump",
            remotes: Vec::new(),
            shared: vec![
                SharedDependency {
                    name: "leptos",
                    required_version: Some("^0.7"),
                    singleton: true,
                },
                SharedDependency {
                    name: "wasm-bindgen",
                    required_version: Some("^0.2"),
                    singleton: true,
                },
            ],
        }
    }

    /// Structural checks run before the manifest is trusted: the host needs
    /// a name, remote names must be unique, and every remote needs an entry
    /// URL.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("host name must not be empty".to_string());
        }
        for (i, remote) in self.remotes.iter().enumerate() {
            if remote.name.trim().is_empty() {
                return Err(format!("remote #{i} has an empty name"));
            }
            if remote.entry_url.trim().is_empty() {
                return Err(format!("remote '{}' has an empty entry URL", remote.name));
            }
            if self.remotes[..i].iter().any(|r| r.name == remote.name) {
                return Err(format!("duplicate remote name '{}'", remote.name));
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "federation host '{}' ready ({} remotes declared, {} shared singletons)",
            self.name,
            self.remotes.len(),
            self.shared.iter().filter(|s| s.singleton).count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(name: &str, entry_url: &str) -> RemoteModule {
        RemoteModule {
            name: name.to_string(),
            entry_url: entry_url.to_string(),
        }
    }

    #[test]
    fn default_manifest_is_a_bare_host() {
        let m = HostManifest::host_default();
        assert_eq!(m.name, "dump");
        assert!(m.remotes.is_empty());
        assert!(m.shared.iter().all(|s| s.singleton));
        m.validate().unwrap();
    }

    #[test]
    fn duplicate_remote_names_are_rejected() {
        let mut m = HostManifest::host_default();
        m.remotes.push(remote("billing", "http://localhost:5174/remote.js"));
        m.remotes.push(remote("billing", "http://localhost:5175/remote.js"));
        assert!(m.validate().unwrap_err().contains("duplicate"));
    }

    #[test]
    fn remotes_need_an_entry_url() {
        let mut m = HostManifest::host_default();
        m.remotes.push(remote("billing", "  "));
        assert!(m.validate().is_err());
    }

    #[test]
    fn manifest_serializes_for_operators() {
        let v = serde_json::to_value(HostManifest::host_default()).unwrap();
        assert_eq!(v["name"], "dump");
        assert!(v["remotes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn summary_names_the_host() {
        let s = HostManifest::host_default().summary();
        assert!(s.contains("'dump'"));
        assert!(s.contains("0 remotes"));
    }
}
