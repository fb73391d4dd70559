//! Run configuration: `.env`, then environment variables, then CLI flags.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

pub const TOPICS_VAR: &str = "INDRAMAYU_TOPICS";
pub const DATASET_VAR: &str = "INDRAMAYU_DATASET";
pub const SEED_VAR: &str = "INDRAMAYU_SEED";

const TOPICS_FILE: &str = "list-topik.txt";
const DATASET_FILE: &str = "dataset.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub topics_path: PathBuf,
    pub dataset_path: PathBuf,
    /// Raw seed from the environment. Parsed by [`Config::seed`] so commands
    /// that never use it are not affected by a bad value.
    seed_var: Option<String>,
}

impl Config {
    /// Loads `.env` if present and reads the process environment.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::Config(format!(".env: {e}"))),
        }
        Ok(Self::from_lookup(&find_data_dir(), |key| std::env::var(key).ok()))
    }

    pub fn from_lookup(data_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let topics_path = lookup(TOPICS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(TOPICS_FILE));
        let dataset_path = lookup(DATASET_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DATASET_FILE));
        let seed_var = lookup(SEED_VAR).filter(|raw| !raw.trim().is_empty());

        Self { topics_path, dataset_path, seed_var }
    }

    /// Applies command-line paths on top of the environment.
    pub fn with_overrides(self, topics: Option<PathBuf>, dataset: Option<PathBuf>) -> Self {
        Self {
            topics_path: topics.unwrap_or(self.topics_path),
            dataset_path: dataset.unwrap_or(self.dataset_path),
            seed_var: self.seed_var,
        }
    }

    /// Seed for varied question templates: the `--seed` flag, else
    /// `INDRAMAYU_SEED`. `None` keeps the categorized, fully deterministic
    /// questions.
    pub fn seed(&self, flag: Option<u64>) -> Result<Option<u64>> {
        match (flag, &self.seed_var) {
            (Some(seed), _) => Ok(Some(seed)),
            (None, Some(raw)) => parse_seed(raw).map(Some),
            (None, None) => Ok(None),
        }
    }
}

pub fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{SEED_VAR} must be an unsigned integer, got {raw:?}")))
}

/// Looks for a `data/` directory next to the working directory or the
/// executable. Falls back to `./data` so later errors name a sensible path.
fn find_data_dir() -> PathBuf {
    let cwd_data = PathBuf::from("data");
    if cwd_data.is_dir() {
        return cwd_data;
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    [exe_dir.join("../data"), exe_dir.join("../../data")]
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or(cwd_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_live_in_data_dir() {
        let config = Config::from_lookup(Path::new("somewhere/data"), lookup_from(&[]));
        assert_eq!(config.topics_path, PathBuf::from("somewhere/data/list-topik.txt"));
        assert_eq!(config.dataset_path, PathBuf::from("somewhere/data/dataset.json"));
        assert_eq!(config.seed(None).unwrap(), None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let lookup = lookup_from(&[
            (TOPICS_VAR, "/tmp/topics.txt"),
            (DATASET_VAR, "/tmp/out.json"),
            (SEED_VAR, " 42 "),
        ]);
        let config = Config::from_lookup(Path::new("data"), lookup);
        assert_eq!(config.topics_path, PathBuf::from("/tmp/topics.txt"));
        assert_eq!(config.dataset_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.seed(None).unwrap(), Some(42));
    }

    #[test]
    fn flags_override_environment() {
        let lookup = lookup_from(&[
            (TOPICS_VAR, "/tmp/topics.txt"),
            (DATASET_VAR, "/tmp/out.json"),
            (SEED_VAR, "42"),
        ]);
        let config = Config::from_lookup(Path::new("data"), lookup)
            .with_overrides(Some(PathBuf::from("cli/topics.txt")), Some(PathBuf::from("cli/out.json")));
        assert_eq!(config.topics_path, PathBuf::from("cli/topics.txt"));
        assert_eq!(config.dataset_path, PathBuf::from("cli/out.json"));
        assert_eq!(config.seed(Some(7)).unwrap(), Some(7));
    }

    #[test]
    fn missing_flags_fall_back_to_environment() {
        let lookup = lookup_from(&[(DATASET_VAR, "/tmp/out.json"), (SEED_VAR, "42")]);
        let config = Config::from_lookup(Path::new("data"), lookup).with_overrides(None, None);
        assert_eq!(config.topics_path, PathBuf::from("data/list-topik.txt"));
        assert_eq!(config.dataset_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.seed(None).unwrap(), Some(42));
    }

    #[test]
    fn blank_seed_means_no_seed() {
        let config = Config::from_lookup(Path::new("data"), lookup_from(&[(SEED_VAR, "  ")]));
        assert_eq!(config.seed(None).unwrap(), None);
    }

    #[test]
    fn bad_seed_only_fails_when_used() {
        let lookup = lookup_from(&[(DATASET_VAR, "/tmp/out.json"), (SEED_VAR, "abc")]);
        let config = Config::from_lookup(Path::new("data"), lookup).with_overrides(None, None);
        assert_eq!(config.dataset_path, PathBuf::from("/tmp/out.json"));

        let err = config.seed(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(SEED_VAR));

        // An explicit flag never looks at the environment value.
        assert_eq!(config.seed(Some(3)).unwrap(), Some(3));
    }
}
