use std::env;
use std::path::Path;

#[path = "build_support/env.rs"]
mod env_file;

use env_file::{lookup, read_env_file, ALIASES, FORWARDED};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_support/env.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    for (alias, _) in ALIASES {
        println!("cargo:rerun-if-env-changed={}", alias);
    }

    let file = read_env_file(Path::new(".env"));
    let process_env = |key: &str| env::var(key).ok();

    for key in FORWARDED {
        // Real environment reaches option_env! on its own
        if env::var(key).is_ok() {
            continue;
        }
        match lookup(key, &process_env, &file) {
            Some(value) => println!("cargo:rustc-env={}={}", key, value),
            None => println!("cargo:warning={} not set, using the default backend URL", key),
        }
    }
}
