//! Build script for `al5-sys`.
//!
//! Emits link directives for the Allegro libraries when the `link` feature is on.
//! Without it the crate only carries declarations, so dependents can build and
//! test on machines that have no Allegro installation.
//!
//! Environment:
//! - `ALLEGRO_LIB_DIR`: extra native search path
//! - `ALLEGRO_LINK_SUFFIX`: appended to every library name (e.g. `-debug`)
//! - `ALLEGRO_STATIC`: `1`/`true` links statically
//! - `ALLEGRO_MONOLITH`: `1`/`true` links the single `allegro_monolith` library

use std::env;

const ENV_LIB_DIR: &str = "ALLEGRO_LIB_DIR";
const ENV_LINK_SUFFIX: &str = "ALLEGRO_LINK_SUFFIX";
const ENV_STATIC: &str = "ALLEGRO_STATIC";
const ENV_MONOLITH: &str = "ALLEGRO_MONOLITH";

fn env_flag(name: &str) -> bool {
    matches!(
        env::var(name).as_deref().map(str::trim),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes")
    )
}

fn feature_enabled(name: &str) -> bool {
    env::var_os(format!("CARGO_FEATURE_{}", name.to_uppercase())).is_some()
}

fn main() {
    for var in [ENV_LIB_DIR, ENV_LINK_SUFFIX, ENV_STATIC, ENV_MONOLITH] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=build.rs");

    if !feature_enabled("link") {
        return;
    }

    if let Ok(dir) = env::var(ENV_LIB_DIR) {
        println!("cargo:rustc-link-search=native={dir}");
    }

    let suffix = env::var(ENV_LINK_SUFFIX).unwrap_or_default();
    let kind = if env_flag(ENV_STATIC) { "static" } else { "dylib" };

    let libs: Vec<&str> = if env_flag(ENV_MONOLITH) {
        vec!["allegro_monolith"]
    } else {
        // Addons before the core library so static archives resolve in order.
        let mut libs = Vec::new();
        if feature_enabled("physfs") {
            libs.push("allegro_physfs");
        }
        if feature_enabled("acodec") {
            libs.push("allegro_acodec");
        }
        if feature_enabled("audio") {
            libs.push("allegro_audio");
        }
        libs.push("allegro");
        libs
    };

    for lib in libs {
        println!("cargo:rustc-link-lib={kind}={lib}{suffix}");
    }
}
