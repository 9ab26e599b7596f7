//! Narrowing the resolved descriptors to the profiles an invocation asked
//! for.

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::merge::FinalDescriptor;

/// Prefix of flags the invoking bundler sets for itself
/// (`WEBPACK_BUNDLE`, `WEBPACK_WATCH`, ...). They never name a profile.
pub const RESERVED_FLAG_PREFIX: &str = "WEBPACK_";

/// True for tool-internal flags that must not be read as profile requests
pub fn is_reserved_flag(key: &str) -> bool {
    key.starts_with(RESERVED_FLAG_PREFIX)
}

/// Profile names requested by one invocation.
///
/// Built from flag keys only; values are ignored. Reserved flags are dropped
/// on insertion and repeated names collapse to one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationFlags {
    requested: IndexSet<String>,
}

impl InvocationFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// From the `{ flag: value }` object an invoking tool passes in
    pub fn from_map(flags: &Map<String, Value>) -> Self {
        flags.keys().collect()
    }

    pub fn insert(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !is_reserved_flag(&key) {
            self.requested.insert(key);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.requested.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.requested.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for InvocationFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut flags = Self::new();
        for key in iter {
            flags.insert(key);
        }
        flags
    }
}

/// Keep the descriptors whose name was requested, in registry order.
///
/// No requests means everything. Requested names that match no descriptor
/// are dropped without error.
pub fn select(flags: &InvocationFlags, descriptors: Vec<FinalDescriptor>) -> Vec<FinalDescriptor> {
    let selected: Vec<FinalDescriptor> = if flags.is_empty() {
        descriptors
    } else {
        let unmatched: Vec<&str> = flags
            .iter()
            .filter(|name| !descriptors.iter().any(|d| d.name == *name))
            .collect();
        if !unmatched.is_empty() {
            tracing::debug!(names = ?unmatched, "ignoring requests for unknown profiles");
        }

        descriptors
            .into_iter()
            .filter(|descriptor| flags.contains(&descriptor.name))
            .collect()
    };

    tracing::info!("{}", build_report(&selected));
    selected
}

/// `Building configs: debug, dist.`
pub fn build_report(descriptors: &[FinalDescriptor]) -> String {
    let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
    format!("Building configs: {}.", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseDescriptor;
    use crate::merge::merge_all;
    use crate::profile::ProfileRegistry;
    use serde_json::json;
    use std::path::Path;

    fn all() -> Vec<FinalDescriptor> {
        let root = Path::new("/project");
        merge_all(
            &BaseDescriptor::standard(root, "1.0.0"),
            &ProfileRegistry::standard(root),
        )
        .unwrap()
    }

    fn names(descriptors: &[FinalDescriptor]) -> Vec<&str> {
        descriptors.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn reserved_prefix_predicate() {
        assert!(is_reserved_flag("WEBPACK_BUNDLE"));
        assert!(is_reserved_flag("WEBPACK_SERVE"));
        assert!(!is_reserved_flag("webpack_bundle"));
        assert!(!is_reserved_flag("debug"));
    }

    #[test]
    fn empty_flags_select_everything_in_order() {
        let selected = select(&InvocationFlags::new(), all());
        assert_eq!(names(&selected), vec!["debug", "demo", "dist"]);
    }

    #[test]
    fn reserved_only_flags_behave_like_no_flags() {
        let flags = InvocationFlags::from_map(
            json!({ "WEBPACK_BUNDLE": true, "WEBPACK_BUILD": true })
                .as_object()
                .unwrap(),
        );
        assert!(flags.is_empty());
        assert_eq!(select(&flags, all()), all());
    }

    #[test]
    fn unknown_names_are_dropped() {
        let flags: InvocationFlags = ["debug", "bogus"].into_iter().collect();
        assert_eq!(names(&select(&flags, all())), vec!["debug"]);
    }

    #[test]
    fn result_follows_registry_order_not_flag_order() {
        let flags: InvocationFlags = ["dist", "debug"].into_iter().collect();
        assert_eq!(names(&select(&flags, all())), vec!["debug", "dist"]);
    }

    #[test]
    fn duplicate_requests_yield_one_descriptor() {
        let flags: InvocationFlags = ["debug", "debug", "debug"].into_iter().collect();
        assert_eq!(names(&select(&flags, all())), vec!["debug"]);
    }

    #[test]
    fn all_unknown_names_give_empty_result() {
        let flags: InvocationFlags = ["nope"].into_iter().collect();
        assert!(select(&flags, all()).is_empty());
    }

    #[test]
    fn report_joins_names_in_order() {
        assert_eq!(build_report(&all()), "Building configs: debug, demo, dist.");
        assert_eq!(build_report(&[]), "Building configs: .");
    }
}
