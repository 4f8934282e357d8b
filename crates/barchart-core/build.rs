// File: crates/barchart-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs (registry lookups).

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Target, not host: `#[cfg]` here would describe the machine running the build.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
