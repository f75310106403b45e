use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    // The default User-Agent advertises the toolchain that built the crate,
    // e.g. "rust/1.88.0". Ask the compiler itself rather than guessing.
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let output = Command::new(&rustc).arg("--version").output();

    let version = match output {
        Ok(o) if o.status.success() => {
            let stdout = String::from_utf8(o.stdout).unwrap_or_default();
            // "rustc 1.88.0 (abcdef123 2025-06-01)" -> "1.88.0"
            stdout
                .split_whitespace()
                .nth(1)
                .unwrap_or("unknown")
                .to_string()
        }
        _ => "unknown".to_string(),
    };

    println!("cargo:rustc-env=SCW_RUSTC_VERSION={}", version);
}
