//! Point-in-time copy of environment variables

use std::collections::{HashMap, HashSet};
use std::env;

/// Variables consulted during one unmarshal call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    vars: HashMap<String, String>,
    // Tags of fields already assigned. Never consulted by lookups.
    consumed: HashSet<String>,
}

impl Snapshot {
    /// Build from `KEY=VALUE` entries.
    ///
    /// Each entry is split on its first `=` so values may contain `=`.
    /// Later duplicates overwrite earlier ones. Entries without `=` are
    /// skipped.
    pub fn from_environ<I, S>(environ: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vars = HashMap::new();
        for entry in environ {
            let entry = entry.as_ref();
            match entry.split_once('=') {
                Some((key, value)) => {
                    vars.insert(key.to_string(), value.to_string());
                }
                None => tracing::warn!(entry, "Skipping environment entry without '='"),
            }
        }
        tracing::trace!(count = vars.len(), "Built environment snapshot");
        Self::with_vars(vars)
    }

    /// Snapshot the environment of the current process.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let mut vars = HashMap::new();
        for (key, value) in env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    tracing::warn!(key = %key, "Skipping environment variable with non UTF-8 value")
                }
                (Err(key), _) => {
                    tracing::warn!(?key, "Skipping environment variable with non UTF-8 name")
                }
            }
        }
        tracing::trace!(count = vars.len(), "Built process environment snapshot");
        Self::with_vars(vars)
    }

    fn with_vars(vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            consumed: HashSet::new(),
        }
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Drop `key` from the snapshot.
    pub fn forget(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Record that the field tagged `tag` has been assigned.
    ///
    /// Bookkeeping only: [`get`](Self::get) is unaffected.
    pub fn mark_consumed(&mut self, tag: &str) {
        self.consumed.insert(tag.to_string());
    }

    /// Whether a field tagged `tag` has been assigned from this snapshot.
    pub fn is_consumed(&self, tag: &str) -> bool {
        self.consumed.contains(tag)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::with_vars(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_from_environ_splits_on_first_equals() {
        let snapshot = Snapshot::from_environ(["HOME=/home/test", "OPTS=a=b=c", "EMPTY="]);
        assert_eq!(snapshot.get("HOME"), Some("/home/test"));
        assert_eq!(snapshot.get("OPTS"), Some("a=b=c"));
        assert_eq!(snapshot.get("EMPTY"), Some(""));
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_from_environ_later_duplicate_wins() {
        let snapshot = Snapshot::from_environ(vec![
            "NPM_CONFIG_CACHE=first".to_string(),
            "NPM_CONFIG_CACHE=second".to_string(),
        ]);
        assert_eq!(snapshot.get("NPM_CONFIG_CACHE"), Some("second"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_from_environ_skips_entries_without_equals() {
        let snapshot = Snapshot::from_environ(["MALFORMED", "OK=1"]);
        assert_eq!(snapshot.get("MALFORMED"), None);
        assert_eq!(snapshot.get("OK"), Some("1"));
    }

    #[test]
    fn test_forget_removes_key() {
        let mut snapshot: Snapshot = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(snapshot.forget("A"), Some("1".to_string()));
        assert_eq!(snapshot.forget("A"), None);
        assert_eq!(snapshot.get("B"), Some("2"));
    }

    #[test]
    fn test_mark_consumed_keeps_value_visible() {
        let mut snapshot: Snapshot = [("HOME", "/home/test")].into_iter().collect();
        assert!(!snapshot.is_consumed("HOME"));

        snapshot.mark_consumed("HOME");
        assert!(snapshot.is_consumed("HOME"));
        assert_eq!(snapshot.get("HOME"), Some("/home/test"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::from_environ(Vec::<String>::new());
        assert!(snapshot.is_empty());
    }

    #[test]
    #[serial]
    fn test_from_process_sees_variables() {
        env::set_var("ENVTAG_SNAPSHOT_TEST", "x=y");
        let snapshot = Snapshot::from_process();
        assert_eq!(snapshot.get("ENVTAG_SNAPSHOT_TEST"), Some("x=y"));
        env::remove_var("ENVTAG_SNAPSHOT_TEST");
    }
}
