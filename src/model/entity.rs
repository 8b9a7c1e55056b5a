use std::sync::Arc;

use serde_json::Value;

use super::context::BibleContext;

/// Common state behind every entity kind: the reference identifier, the raw
/// fetched payload, and the shared bible context.
///
/// Construction is tagged: [`from_id`](EntityCore::from_id) starts with an
/// empty payload, [`from_payload`](EntityCore::from_payload) stores the
/// payload verbatim and reads the id out of its `id` field. The payload is
/// only ever replaced wholesale by a refresh, never merged.
#[derive(Debug, Clone)]
pub(crate) struct EntityCore {
    id: String,
    data: Value,
    bible: Arc<BibleContext>,
}

impl EntityCore {
    pub fn from_id(id: impl Into<String>, bible: Arc<BibleContext>) -> Self {
        EntityCore {
            id: id.into(),
            data: Value::Object(Default::default()),
            bible,
        }
    }

    pub fn from_payload(data: Value, bible: Arc<BibleContext>) -> Self {
        let id = data
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        EntityCore { id, data, bible }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn replace_data(&mut self, data: Value) {
        self.data = data;
    }

    pub fn bible(&self) -> &Arc<BibleContext> {
        &self.bible
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.data.get(key).and_then(Value::as_u64)
    }

    /// Id of a `previous`/`next` sibling link, when the payload carries one.
    pub fn sibling_id(&self, key: &str) -> Option<&str> {
        self.data.get(key)?.get("id")?.as_str()
    }

    pub fn set_field(&mut self, key: &str, value: Value) {
        if let Value::Object(map) = &mut self.data {
            map.insert(key.to_string(), value);
        }
    }
}
