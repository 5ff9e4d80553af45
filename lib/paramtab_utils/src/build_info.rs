//! Build information about this library
//!
//! Applications linking paramtab print these next to their own version so a
//! bug report tells which library build was in use.

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// Reported when the library was not built from a tagged git checkout
pub const NO_GIT_TAG: &str = "NO_GIT_TAG_DEFINED";

/// Reported when the library was not built from a git checkout at all
pub const NO_GIT_SHA1: &str = "NO_GIT_SHA1_DEFINED";

/// Replace an empty build constant with its fallback
#[must_use]
pub const fn or_fallback(value: &'static str, fallback: &'static str) -> &'static str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// The name of the library
#[must_use]
pub const fn lib_name() -> &'static str {
    build::PROJECT_NAME
}

/// The git tag the library was built from, or [`NO_GIT_TAG`]
#[must_use]
pub const fn lib_version() -> &'static str {
    or_fallback(build::TAG, NO_GIT_TAG)
}

/// The git commit the library was built from, or [`NO_GIT_SHA1`]
#[must_use]
pub const fn lib_git_sha1() -> &'static str {
    or_fallback(build::COMMIT_HASH, NO_GIT_SHA1)
}

/// The crate version from the manifest
#[must_use]
pub const fn lib_package_version() -> &'static str {
    build::PKG_VERSION
}

/// When the library was compiled, in RFC 3339 format
#[must_use]
pub const fn lib_build_time() -> &'static str {
    build::BUILD_TIME_3339
}

/// A multi-line summary of all of the above
#[must_use]
pub fn lib_informations() -> String {
    format!(
        concat!(
            "Library informations:\n",
            " * Name : {name} {package_version}\n",
            " * Git tag : {tag}\n",
            " * Git sha1 : {sha1}{taint}\n",
            " * Compilation date : {time}"
        ),
        name = lib_name(),
        package_version = lib_package_version(),
        tag = lib_version(),
        sha1 = lib_git_sha1(),
        taint = if build::GIT_CLEAN { "" } else { " (dirty)" },
        time = lib_build_time(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_crate_name() {
        assert_eq!(lib_name(), "paramtab_utils");
        assert_eq!(lib_package_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn git_information_is_never_empty() {
        assert!(!lib_version().is_empty());
        assert!(!lib_git_sha1().is_empty());
    }

    #[test]
    fn empty_constants_fall_back() {
        assert_eq!(or_fallback("", NO_GIT_TAG), NO_GIT_TAG);
        assert_eq!(or_fallback("v1.2.0", NO_GIT_TAG), "v1.2.0");
    }

    #[test]
    fn informations_list_every_field() {
        let summary = lib_informations();
        assert!(summary.starts_with("Library informations:\n"));
        assert!(summary.contains(lib_name()));
        assert!(summary.contains(lib_version()));
        assert!(summary.contains(lib_git_sha1()));
        assert_eq!(summary.lines().count(), 5);
    }
}
