//! # Trigger Set
//!
//! Client-side events to fire when htmx processes a response, sent in
//! `HX-Trigger`, `HX-Trigger-After-Settle` or `HX-Trigger-After-Swap`.
//!
//! The header has two shapes and htmx tells them apart by payload:
//!
//! - no entry carries a detail: `name1,name2`
//! - any entry carries a detail: `{"name1":"","name2":{"level":"info"}}`
//!
//! In the JSON shape entries without a detail are written as `""` so every
//! entry serializes the same way. Entries keep first-insertion order; adding
//! a name that is already present replaces its detail in place.

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::HxError;

/// Most responses fire one or two events
pub const MAX_INLINE_TRIGGERS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
enum Detail {
    Empty,
    Text(String),
    Json(Value),
    /// Serialization failed when the trigger was built; reported on encode
    Invalid(String),
}

impl Detail {
    fn is_empty(&self) -> bool {
        matches!(self, Detail::Empty)
    }
}

impl Serialize for Detail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Detail::Empty => serializer.serialize_str(""),
            Detail::Text(text) => serializer.serialize_str(text),
            Detail::Json(value) => value.serialize(serializer),
            Detail::Invalid(message) => Err(S::Error::custom(message)),
        }
    }
}

/// One named event with an optional detail payload
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    name: String,
    detail: Detail,
}

impl Trigger {
    /// Event without a detail
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Detail::Empty,
        }
    }

    /// Event whose detail is a plain string; an empty string counts as no detail
    #[must_use]
    pub fn detail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            name: name.into(),
            detail: if detail.is_empty() {
                Detail::Empty
            } else {
                Detail::Text(detail)
            },
        }
    }

    /// Event whose detail is any serializable value
    ///
    /// If `detail` cannot be represented as JSON the trigger is still built;
    /// encoding the set that contains it fails with [`HxError::Encoding`].
    #[must_use]
    pub fn object<T: Serialize + ?Sized>(name: impl Into<String>, detail: &T) -> Self {
        let detail = match serde_json::to_value(detail) {
            Ok(Value::Null) => Detail::Empty,
            Ok(Value::String(s)) if s.is_empty() => Detail::Empty,
            Ok(value) => Detail::Json(value),
            Err(e) => Detail::Invalid(e.to_string()),
        };
        Self {
            name: name.into(),
            detail,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn has_detail(&self) -> bool {
        !self.detail.is_empty()
    }
}

impl From<&str> for Trigger {
    fn from(name: &str) -> Self {
        Trigger::new(name)
    }
}

impl From<String> for Trigger {
    fn from(name: String) -> Self {
        Trigger::new(name)
    }
}

struct DetailMap<'a>(&'a [Trigger]);

impl Serialize for DetailMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for trigger in self.0 {
            map.serialize_entry(&trigger.name, &trigger.detail)?;
        }
        map.end()
    }
}

/// Ordered set of triggers keyed by event name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerSet {
    entries: SmallVec<[Trigger; MAX_INLINE_TRIGGERS]>,
}

impl TriggerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trigger, or replace the detail of an existing one with the same name
    ///
    /// A replaced entry keeps its original position.
    pub fn add(&mut self, trigger: impl Into<Trigger>) -> &mut Self {
        let trigger = trigger.into();
        match self.entries.iter_mut().find(|t| t.name == trigger.name) {
            Some(existing) => existing.detail = trigger.detail,
            None => self.entries.push(trigger),
        }
        self
    }

    /// Fold `other` in, entry by entry, with the same replace rule as [`add`](Self::add)
    pub fn merge(&mut self, other: TriggerSet) -> &mut Self {
        for trigger in other.entries {
            self.add(trigger);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.entries.iter()
    }

    /// Header value in the list or JSON shape
    pub fn encode(&self) -> Result<String, HxError> {
        if let Some(bad) = self.entries.iter().find_map(|t| match &t.detail {
            Detail::Invalid(message) => Some((t.name.as_str(), message)),
            _ => None,
        }) {
            return Err(HxError::encoding(format!("trigger '{}'", bad.0), bad.1));
        }
        if self.entries.iter().all(|t| t.detail.is_empty()) {
            let names: Vec<&str> = self.entries.iter().map(|t| t.name.as_str()).collect();
            return Ok(names.join(","));
        }
        serde_json::to_string(&DetailMap(&self.entries))
            .map_err(|e| HxError::encoding("trigger set", e))
    }
}

impl<T: Into<Trigger>> FromIterator<T> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TriggerSet::new();
        for trigger in iter {
            set.add(trigger);
        }
        set
    }
}

impl<T: Into<Trigger>> Extend<T> for TriggerSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for trigger in iter {
            self.add(trigger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_names_only_joins_with_commas() {
        let set: TriggerSet = ["saved", "refreshList"].into_iter().collect();
        assert_eq!(set.encode().unwrap(), "saved,refreshList");
    }

    #[test]
    fn test_extend_replaces_detail_in_place() {
        let mut set: TriggerSet = ["a", "b"].into_iter().collect();
        set.extend([Trigger::detail("a", "1"), Trigger::new("c")]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.encode().unwrap(), r#"{"a":"1","b":"","c":""}"#);

        set.extend(["a"]);
        assert_eq!(set.encode().unwrap(), "a,b,c");
    }

    #[test]
    fn test_any_detail_switches_to_json() {
        let mut set = TriggerSet::new();
        set.add("hello").add(Trigger::object(
            "myEvent",
            &json!({"level": "info", "message": "Here is a Message"}),
        ));
        assert_eq!(
            set.encode().unwrap(),
            r#"{"hello":"","myEvent":{"level":"info","message":"Here is a Message"}}"#
        );
    }

    #[test]
    fn test_string_detail() {
        let mut set = TriggerSet::new();
        set.add(Trigger::detail("hello", "world"));
        assert_eq!(set.encode().unwrap(), r#"{"hello":"world"}"#);
    }

    #[test]
    fn test_empty_details_stay_in_list_shape() {
        let mut set = TriggerSet::new();
        set.add(Trigger::detail("a", ""))
            .add(Trigger::object("b", &Value::Null))
            .add(Trigger::object("c", ""));
        assert_eq!(set.encode().unwrap(), "a,b,c");
    }

    #[test]
    fn test_readd_replaces_detail_in_place() {
        let mut set = TriggerSet::new();
        set.add(Trigger::detail("first", "1"))
            .add("second")
            .add(Trigger::detail("first", "2"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.encode().unwrap(), r#"{"first":"2","second":""}"#);
    }

    #[test]
    fn test_readd_can_clear_detail() {
        let mut set = TriggerSet::new();
        set.add(Trigger::detail("first", "1")).add("first");
        assert_eq!(set.encode().unwrap(), "first");
    }

    #[test]
    fn test_merge_uses_other_insertion_order() {
        let mut base: TriggerSet = ["a", "b"].into_iter().collect();
        let mut other = TriggerSet::new();
        other.add("c").add(Trigger::detail("a", "x"));
        base.merge(other);
        let names: Vec<&str> = base.iter().map(Trigger::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(base.encode().unwrap(), r#"{"a":"x","b":"","c":""}"#);
    }

    #[test]
    fn test_unserializable_detail_fails_on_encode() {
        // JSON object keys must be strings
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], "v");
        let mut set = TriggerSet::new();
        set.add("ok").add(Trigger::object("broken", &bad));
        match set.encode() {
            Err(HxError::Encoding { subject, .. }) => assert_eq!(subject, "trigger 'broken'"),
            other => panic!("expected encoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_set() {
        let set = TriggerSet::new();
        assert!(set.is_empty());
        assert_eq!(set.encode().unwrap(), "");
    }
}
