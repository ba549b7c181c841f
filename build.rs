use std::env;
use std::fs;
use std::path::Path;

// Exposes KEY=VALUE pairs from `.env` to `option_env!`. Variables already
// set in the build environment win.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(Path::new(".env")) else {
        println!("cargo:warning=.env not found, using built-in defaults");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
