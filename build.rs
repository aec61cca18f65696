use chrono::Utc;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");

    let git_hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // Keep the existing stamp when the commit hash is unchanged, so rebuilds
    // that only touch source files do not churn the build timestamp.
    let hash_line = format!("pub const GIT_HASH: &str = \"{}\";", git_hash);
    if let Ok(existing) = fs::read_to_string(&dest_path) {
        if existing.lines().any(|line| line == hash_line) {
            println!("cargo:rerun-if-changed=build.rs");
            println!("cargo:rerun-if-changed=.git/HEAD");
            return;
        }
    }

    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let rendered = format!(
        "pub const BUILD_TIME: &str = \"{}\";\n{}\n",
        build_time, hash_line
    );
    fs::write(&dest_path, rendered).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
