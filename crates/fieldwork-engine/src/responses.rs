//! In-memory response collection.
//!
//! Keyed by question id, so at most one response per question is ever
//! current. Everything entering the store passes through
//! [`Response::sanitized`] first.

use std::collections::BTreeMap;

use fieldwork_catalog::Catalog;
use fieldwork_core::models::response::Response;

#[derive(Debug, Clone, Default)]
pub struct ResponseStore {
    by_question: BTreeMap<String, Response>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing response for the question, unconditionally.
    pub fn upsert(
        &mut self,
        question_id: impl Into<String>,
        answer: impl Into<String>,
        timestamp: jiff::Timestamp,
    ) {
        self.insert(Response::new(question_id, answer, timestamp));
    }

    pub fn insert(&mut self, response: Response) {
        let response = response.sanitized();
        self.by_question
            .insert(response.question_id.clone(), response);
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.by_question.get(question_id)
    }

    /// Deduplicate by question id, keeping the response with the greatest
    /// timestamp on conflict — regardless of the order responses arrive.
    /// Used when reconciling a freshly-loaded session with responses
    /// already in memory.
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = Response>) {
        for response in incoming {
            let response = response.sanitized();
            match self.by_question.get(&response.question_id) {
                Some(existing) if existing.timestamp >= response.timestamp => {}
                _ => {
                    self.by_question
                        .insert(response.question_id.clone(), response);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.by_question.values()
    }

    /// Responses in catalog order, for the wire and for export. Responses to
    /// questions not in the catalog are kept (appended last, in id order)
    /// rather than silently dropped on a save/load cycle.
    pub fn in_catalog_order(&self, catalog: &Catalog) -> Vec<Response> {
        let mut ordered: Vec<Response> = catalog
            .ordered_questions()
            .filter_map(|q| self.by_question.get(&q.id).cloned())
            .collect();
        ordered.extend(
            self.by_question
                .values()
                .filter(|r| catalog.question(&r.question_id).is_none())
                .cloned(),
        );
        ordered
    }
}

impl FromIterator<Response> for ResponseStore {
    fn from_iter<T: IntoIterator<Item = Response>>(iter: T) -> Self {
        let mut store = Self::new();
        store.merge(iter);
        store
    }
}
