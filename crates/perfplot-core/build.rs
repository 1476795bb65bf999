// File: crates/perfplot-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry calls (RegOpenKeyExW, RegQueryInfoKeyW) used by Skia/ICU.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
