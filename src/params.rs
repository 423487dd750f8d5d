//! Run parameters taken from `PARAM_*` environment entries.

use std::collections::BTreeMap;

/// Prefix marking an environment entry as a run parameter.
pub const PARAM_PREFIX: &str = "PARAM_";

/// Extract run parameters from environment entries.
///
/// `PARAM_<Name>=value` becomes `<name> -> value`: the prefix is stripped, the
/// name lower-cased and the value kept verbatim. When two keys collapse to the
/// same name, the one enumerated last wins; process environment order is
/// platform-defined.
pub fn extract_parameters<I, K, V>(environment: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut params = BTreeMap::new();
    for (key, value) in environment {
        if let Some(name) = key.as_ref().strip_prefix(PARAM_PREFIX) {
            params.insert(name.to_lowercase(), value.into());
        }
    }
    params
}
