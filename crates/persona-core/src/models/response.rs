use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::item::LikertScale;
use crate::error::CoreError;

/// One answered item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub item_id: String,
    pub value: i32,
}

impl Response {
    pub fn new(item_id: impl Into<String>, value: i32) -> Self {
        Self {
            item_id: item_id.into(),
            value,
        }
    }
}

/// Answers keyed by item id. Re-answering an item replaces its value in
/// place; the original answer order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ResponseSet(Vec<Response>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Last write wins.
    pub fn record(&mut self, item_id: impl Into<String>, value: i32) {
        let item_id = item_id.into();
        match self.0.iter_mut().find(|r| r.item_id == item_id) {
            Some(existing) => existing.value = value,
            None => self.0.push(Response { item_id, value }),
        }
    }

    /// Record an answer after checking it against the scale.
    pub fn record_on_scale(
        &mut self,
        item_id: impl Into<String>,
        value: i32,
        scale: LikertScale,
    ) -> Result<(), CoreError> {
        let item_id = item_id.into();
        let value = scale.check(&item_id, value)?;
        self.record(item_id, value);
        Ok(())
    }

    pub fn get(&self, item_id: &str) -> Option<i32> {
        self.0.iter().find(|r| r.item_id == item_id).map(|r| r.value)
    }

    pub fn remove(&mut self, item_id: &str) -> Option<Response> {
        let idx = self.0.iter().position(|r| r.item_id == item_id)?;
        Some(self.0.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.0.iter()
    }

    /// Answer values in answer order.
    pub fn values(&self) -> Vec<i32> {
        self.0.iter().map(|r| r.value).collect()
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.0
    }
}

impl FromIterator<Response> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for response in iter {
            set.record(response.item_id, response.value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
