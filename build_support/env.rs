//! `.env` lookup shared by build.rs and its tests.

use std::path::Path;

/// Variables forwarded to the crate via `option_env!`.
pub const FORWARDED: &[&str] = &["BACKEND_URL"];

/// Legacy front-end variable names accepted as aliases (alias, target).
pub const ALIASES: &[(&str, &str)] = &[("VITE_BACKEND_URL", "BACKEND_URL")];

/// Entries of a dotenv file. A missing file yields none; malformed lines are skipped.
pub fn read_env_file(path: &Path) -> Vec<(String, String)> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(_) => Vec::new(),
    }
}

/// Value for `key`: process env, then file entries, then the same for each alias.
pub fn lookup(
    key: &str,
    env: &dyn Fn(&str) -> Option<String>,
    file: &[(String, String)],
) -> Option<String> {
    let direct = |name: &str| {
        env(name).or_else(|| {
            file.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    };
    direct(key).or_else(|| {
        ALIASES
            .iter()
            .filter(|(_, target)| *target == key)
            .find_map(|(alias, _)| direct(*alias))
    })
}
