use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const DATE: &str = "date";
pub const CHECK_IN_TIME: &str = "checkInTime";
pub const CHECK_OUT_TIME: &str = "checkOutTime";
pub const LEAVE_TYPE: &str = "leaveType";
pub const NOTES: &str = "notes";
pub const IS_COMP_OFF_DAY: &str = "isCompOffDay";
pub const LINKED_MISSED_DAY: &str = "linkedMissedDay";

pub const RECOGNIZED_FIELDS: [&str; 7] = [
    DATE,
    CHECK_IN_TIME,
    CHECK_OUT_TIME,
    LEAVE_TYPE,
    NOTES,
    IS_COMP_OFF_DAY,
    LINKED_MISSED_DAY,
];

/// A single attendance record.
///
/// Whatever JSON the client sent is stored as-is. In practice it is an object
/// with the fields above, but nothing requires it; `date` is the lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Value);

impl Entry {
    pub fn date(&self) -> Option<&str> {
        self.0.get(DATE).and_then(Value::as_str)
    }

    /// Strict string equality; entries without a string `date` never match.
    pub fn has_date(&self, key: &str) -> bool {
        self.date() == Some(key)
    }

    /// Field names outside [`RECOGNIZED_FIELDS`], in document order.
    /// Non-object entries have no fields.
    pub fn unrecognized_fields(&self) -> Vec<&str> {
        self.0
            .as_object()
            .into_iter()
            .flat_map(|fields| fields.keys())
            .map(String::as_str)
            .filter(|field| !RECOGNIZED_FIELDS.contains(field))
            .collect()
    }

    /// Shallow merge: every field in `patch` overwrites, everything else stays.
    ///
    /// Only object-into-object merges do anything; any other combination leaves
    /// the entry as it was.
    pub fn merge(&mut self, patch: Value) {
        if let (Value::Object(fields), Value::Object(patch)) = (&mut self.0, patch) {
            for (field, value) in patch {
                fields.insert(field, value);
            }
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry(value)
    }
}

/// First entry whose `date` equals `key`, in insertion order.
pub fn find_first_mut<'a>(entries: &'a mut [Entry], key: &str) -> Option<&'a mut Entry> {
    entries.iter_mut().find(|entry| entry.has_date(key))
}

/// Removes every entry whose `date` equals `key`. Returns how many were removed.
pub fn remove_by_date(entries: &mut Vec<Entry>, key: &str) -> usize {
    let before = entries.len();
    entries.retain(|entry| !entry.has_date(key));
    before - entries.len()
}

/// Recognised entry fields, as the browser front end sends them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    #[schema(example = "2024-01-01")]
    pub date: Option<String>,
    #[schema(example = "09:00")]
    pub check_in_time: Option<String>,
    #[schema(example = "17:00")]
    pub check_out_time: Option<String>,
    #[schema(example = "")]
    pub leave_type: Option<String>,
    #[schema(example = "late arrival")]
    pub notes: Option<String>,
    #[schema(example = false)]
    pub is_comp_off_day: Option<bool>,
    /// `date` of the missed day this comp-off makes up for; empty means none.
    #[schema(example = "")]
    pub linked_missed_day: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> Entry {
        Entry::from(value)
    }

    #[test]
    fn merge_overlays_patch_and_keeps_the_rest() {
        let mut e = entry(json!({
            "date": "2024-01-01",
            "checkInTime": "09:00",
            "notes": "",
            "isCompOffDay": false
        }));
        e.merge(json!({ "notes": "late arrival", "extra": 1 }));

        assert_eq!(
            e,
            entry(json!({
                "date": "2024-01-01",
                "checkInTime": "09:00",
                "notes": "late arrival",
                "isCompOffDay": false,
                "extra": 1
            }))
        );
    }

    #[test]
    fn unrecognized_fields_are_reported_but_kept() {
        let e = entry(json!({ "date": "2024-01-01", "mood": "ok", "leaveType": "" }));
        assert_eq!(e.unrecognized_fields(), vec!["mood"]);
        assert_eq!(e.0.get("mood"), Some(&json!("ok")));
    }

    #[test]
    fn merge_can_rekey_an_entry() {
        let mut e = entry(json!({ "date": "2024-01-01" }));
        e.merge(json!({ "date": "2024-01-02" }));
        assert_eq!(e.date(), Some("2024-01-02"));
    }

    #[test]
    fn merge_ignores_non_object_patches() {
        let original = entry(json!({ "date": "2024-01-01", "notes": "" }));
        for patch in [json!(null), json!([1, 2]), json!(7)] {
            let mut e = original.clone();
            e.merge(patch);
            assert_eq!(e, original);
        }

        let mut odd = entry(json!(null));
        odd.merge(json!({ "date": "2024-01-01" }));
        assert_eq!(odd, entry(json!(null)));
    }

    #[test]
    fn non_object_entries_have_no_date_or_fields() {
        for value in [json!(null), json!("2024-01-01"), json!([{ "date": "2024-01-01" }])] {
            let e = entry(value);
            assert_eq!(e.date(), None);
            assert!(e.unrecognized_fields().is_empty());
        }
    }

    #[test]
    fn find_first_mut_picks_earliest_duplicate() {
        let mut entries = vec![
            entry(json!({ "date": "2024-01-02", "notes": "a" })),
            entry(json!({ "date": "2024-01-01", "notes": "b" })),
            entry(json!({ "date": "2024-01-01", "notes": "c" })),
        ];
        let found = find_first_mut(&mut entries, "2024-01-01").unwrap();
        assert_eq!(found.0.get(NOTES), Some(&json!("b")));
        assert!(find_first_mut(&mut entries, "2030-01-01").is_none());
    }

    #[test]
    fn non_string_dates_never_match() {
        let mut entries = vec![entry(json!({ "date": 20240101 })), entry(json!({}))];
        assert!(find_first_mut(&mut entries, "20240101").is_none());
        assert_eq!(remove_by_date(&mut entries, "20240101"), 0);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn remove_by_date_drops_every_match() {
        let mut entries = vec![
            entry(json!({ "date": "2024-01-01" })),
            entry(json!({ "date": "2024-01-02" })),
            entry(json!({ "date": "2024-01-01" })),
        ];
        assert_eq!(remove_by_date(&mut entries, "2024-01-01"), 2);
        assert_eq!(entries, vec![entry(json!({ "date": "2024-01-02" }))]);
    }
}
