// File: crates/delegation-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry APIs used by the Skia/ICU font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
