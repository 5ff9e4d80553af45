//! Build information module

use paramtab_utils::build_info::{
    lib_build_time, lib_name, lib_version, or_fallback, NO_GIT_SHA1, NO_GIT_TAG,
};

use crate::params::APPL_NAME;

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

/// The git tag the application was built from
pub const GIT_TAG: &str = or_fallback(build::TAG, NO_GIT_TAG);

/// The git commit the application was built from
pub const GIT_SHA1: &str = or_fallback(build::COMMIT_HASH, NO_GIT_SHA1);

/// Returns the version screen of the application and the library it uses
pub fn version() -> String {
    format!(
        concat!(
            "{appl} Version {tag} ({sha1}{taint})\n",
            "Skeleton to test {lib} version {lib_version}\n",
            "Library compiled {lib_time}\n",
            "Application compiled {time} ({mode} mode)"
        ),
        appl = APPL_NAME,
        tag = GIT_TAG,
        sha1 = GIT_SHA1,
        taint = if build::GIT_CLEAN { "" } else { ", tainted!" },
        lib = lib_name(),
        lib_version = lib_version(),
        lib_time = lib_build_time(),
        time = build::BUILD_TIME_3339,
        mode = build::BUILD_RUST_CHANNEL,
    )
}
