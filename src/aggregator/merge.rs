//! Merge of per-provider fragments into one configuration.
//!
//! The merged view is the union, by name, of every retained fragment's
//! backends and frontends. Fragments are merged in ascending update-sequence
//! order, so on a name collision the most recently updated provider wins.
//! This makes the tie-break deterministic instead of depending on map
//! iteration order.

use crate::config::schema::Configuration;

/// A fragment retained for one provider, tagged with the global update
/// sequence assigned when it last arrived.
#[derive(Debug, Clone)]
pub struct RetainedFragment {
    pub sequence: u64,
    pub configuration: Configuration,
}

/// Build the merged configuration from all retained fragments.
///
/// The result is always a freshly built value; callers publish it wholesale
/// and never mutate it afterwards.
pub fn merge<'a, I>(fragments: I) -> Configuration
where
    I: IntoIterator<Item = &'a RetainedFragment>,
{
    let mut ordered: Vec<&RetainedFragment> = fragments.into_iter().collect();
    ordered.sort_by_key(|f| f.sequence);

    let mut merged = Configuration::default();
    for fragment in ordered {
        for (name, backend) in &fragment.configuration.backends {
            merged.backends.insert(name.clone(), backend.clone());
        }
        for (name, frontend) in &fragment.configuration.frontends {
            merged.frontends.insert(name.clone(), frontend.clone());
        }
    }
    merged
}
