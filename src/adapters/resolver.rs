//! Candidate-name lookup across the document root and the `NewData` envelope

use serde_json::Value;

use crate::types::TelemetryDocument;

/// Find the first candidate present in the document.
///
/// Candidates are tried in order. For each one the root is checked first,
/// then the envelope; only when both miss does resolution move on to the
/// next candidate. So with `{"A": 1, "NewData": {"B": 2}}`, resolving
/// `["B", "A"]` yields `2` without ever looking at `"A"`.
///
/// A key that is present with a `null` value counts as found. `None` means
/// no candidate exists anywhere, and callers substitute their default.
pub fn resolve<'a>(document: &'a TelemetryDocument, candidates: &[&str]) -> Option<&'a Value> {
    let envelope = document.envelope();
    candidates.iter().find_map(|name| {
        document.root(name).or_else(|| envelope.and_then(|fields| fields.get(*name)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc(value: Value) -> TelemetryDocument {
        TelemetryDocument::try_from(value).unwrap()
    }

    #[test]
    fn envelope_hit_on_earlier_candidate_beats_root_hit_on_later_one() {
        let d = doc(json!({"A": 1, "NewData": {"B": 2}}));
        assert_eq!(resolve(&d, &["B", "A"]), Some(&json!(2)));
    }

    #[test]
    fn root_beats_envelope_for_the_same_name() {
        let d = doc(json!({"SpeedKmh": 100, "NewData": {"SpeedKmh": 200}}));
        assert_eq!(resolve(&d, &["SpeedKmh"]), Some(&json!(100)));
    }

    #[test]
    fn falls_through_to_later_candidates() {
        let d = doc(json!({"NewData": {"Speed": 88}}));
        assert_eq!(resolve(&d, &["SpeedKmh", "speedKmh", "Speed"]), Some(&json!(88)));
    }

    #[test]
    fn missing_everywhere_is_none() {
        let d = doc(json!({"NewData": {"Other": 1}}));
        assert_eq!(resolve(&d, &["SpeedKmh", "Speed"]), None);
        assert_eq!(resolve(&doc(json!({})), &["SpeedKmh"]), None);
        assert_eq!(resolve(&d, &[]), None);
    }

    #[test]
    fn non_object_envelope_is_ignored() {
        let d = doc(json!({"NewData": [1, 2, 3]}));
        assert_eq!(resolve(&d, &["SpeedKmh"]), None);
    }

    #[test]
    fn explicit_null_counts_as_found() {
        let d = doc(json!({"Position": null, "NewData": {"Position": 4}}));
        assert_eq!(resolve(&d, &["Position"]), Some(&Value::Null));
    }

    #[test]
    fn envelope_key_itself_is_resolvable() {
        let d = doc(json!({"NewData": {"A": 1}}));
        assert_eq!(resolve(&d, &["NewData"]), Some(&json!({"A": 1})));
    }

    proptest! {
        #[test]
        fn root_only_documents_resolve_first_present_candidate(
            present in prop::collection::btree_set("[A-Z][a-z]{1,6}", 0..6),
            candidates in prop::collection::vec("[A-Z][a-z]{1,6}", 0..6)
        ) {
            let map = present.iter().map(|k| (k.clone(), json!(k.len()))).collect();
            let d = TelemetryDocument::new(map);
            let names: Vec<&str> = candidates.iter().map(String::as_str).collect();

            let expected = names.iter().find(|n| present.contains(**n)).map(|n| json!(n.len()));
            prop_assert_eq!(resolve(&d, &names).cloned(), expected);
        }
    }
}
