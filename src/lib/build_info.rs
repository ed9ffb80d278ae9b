#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) const PKG_VERSION: &str = built_info::PKG_VERSION;

/// Short label for the sidebar footer, e.g. `v0.1.0 · 1a2b3c4`.
pub fn version_label() -> String {
    format!("v{PKG_VERSION} · {GIT_COMMIT_HASH}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_includes_package_version() {
        let label = version_label();
        assert!(label.starts_with(&format!("v{}", env!("CARGO_PKG_VERSION"))));
        assert!(label.ends_with(GIT_COMMIT_HASH));
    }
}
