fn main() {
    // Use pkg-config to find libfcd and emit the correct linker search paths.
    // When the probe succeeds, pkg-config emits the link line itself; the
    // fallback covers installs without a .pc file, where the library still
    // has to be resolved from the conventional search paths.
    match pkg_config::Config::new().probe("fcd") {
        Ok(lib) => {
            for path in &lib.link_paths {
                println!("cargo:rustc-link-search=native={}", path.display());
            }
        }
        Err(_) => {
            // Fallback: try common Homebrew / system paths
            println!("cargo:rustc-link-search=native=/usr/local/lib");
            println!("cargo:rustc-link-search=native=/opt/homebrew/lib");
            println!("cargo:rustc-link-search=native=/usr/lib");
            println!("cargo:rustc-link-lib=fcd");
        }
    }
}
