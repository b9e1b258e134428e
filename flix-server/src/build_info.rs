/// Build information compiled into the flix-server binary, served on `/health`
#[derive(Debug, serde::Serialize, PartialEq, Clone)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub git_hash: Option<String>,
    pub profile: &'static str,
    pub rustc_version: &'static str,
    pub features: &'static str,
}

std::include!(std::concat!(std::env!("OUT_DIR"), "/built.rs"));

#[cfg(feature = "git2")]
fn git_hash() -> Option<String> {
    GIT_COMMIT_HASH_SHORT.map(|git_hash| {
        let dirty = if GIT_DIRTY.is_some_and(|v| v) {
            "-dirty"
        } else {
            ""
        };
        format!("{git_hash}{dirty}")
    })
}

/// Packagers building without git metadata can provide the revision through the environment.
#[cfg(not(feature = "git2"))]
fn git_hash() -> Option<String> {
    std::option_env!("FLIX_SERVER_GIT_REVISION").map(|git_hash| git_hash.to_string())
}

pub fn get() -> BuildInfo {
    BuildInfo {
        name: PKG_NAME,
        version: PKG_VERSION,
        git_hash: git_hash(),
        profile: PROFILE,
        rustc_version: RUSTC_VERSION,
        features: FEATURES_STR,
    }
}
