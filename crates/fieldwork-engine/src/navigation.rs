//! Position tracking over the catalog.
//!
//! A state machine over `(category index, question index within category)`.
//! Navigation requests never fail: out-of-range moves are clamped no-ops.
//! There is no terminal state — completion is a session-level flag, not a
//! position.

use fieldwork_catalog::Catalog;
use fieldwork_core::models::question::{Category, Question};

use crate::responses::ResponseStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    category: usize,
    question: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(category: usize, question: usize) -> Self {
        Self { category, question }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.category, self.question)
    }

    pub fn category_index(&self) -> usize {
        self.category
    }

    pub fn question_index(&self) -> usize {
        self.question
    }

    pub fn current_category<'a>(&self, catalog: &'a Catalog) -> Option<&'a Category> {
        catalog.categories().get(self.category)
    }

    pub fn current_question<'a>(&self, catalog: &'a Catalog) -> Option<&'a Question> {
        let category = self.current_category(catalog)?;
        catalog.questions_in(&category.code).get(self.question).copied()
    }

    fn category_len(&self, catalog: &Catalog) -> usize {
        self.current_category(catalog)
            .map(|c| catalog.questions_in(&c.code).len())
            .unwrap_or(0)
    }

    /// Advance within the current category. Does not cross the category
    /// boundary — completing a category is an explicit decision, made via
    /// [`Navigator::next_category`].
    pub fn next_question(&mut self, catalog: &Catalog) -> bool {
        if self.question + 1 < self.category_len(catalog) {
            self.question += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_question(&mut self) -> bool {
        if self.question > 0 {
            self.question -= 1;
            true
        } else {
            false
        }
    }

    pub fn jump_to_question(&mut self, catalog: &Catalog, index: usize) -> bool {
        if index < self.category_len(catalog) {
            self.question = index;
            true
        } else {
            false
        }
    }

    pub fn next_category(&mut self, catalog: &Catalog) -> bool {
        if self.category + 1 < catalog.categories().len() {
            self.category += 1;
            self.question = 0;
            true
        } else {
            false
        }
    }

    pub fn previous_category(&mut self) -> bool {
        if self.category > 0 {
            self.category -= 1;
            self.question = 0;
            true
        } else {
            false
        }
    }

    pub fn jump_to_category(&mut self, catalog: &Catalog, code: &str) -> bool {
        match catalog.category_position(code) {
            Some(position) => {
                self.category = position;
                self.question = 0;
                true
            }
            None => false,
        }
    }

    /// Where an interrupted interview picks back up: the question after the
    /// last substantive (non-blank, non-`"SKIPPED"`) answer in catalog
    /// order. The end of a category rolls over to the next category's first
    /// question; an empty response set starts from the beginning; the very
    /// end of the survey stays put.
    pub fn resume_position(catalog: &Catalog, store: &ResponseStore) -> (usize, usize) {
        let mut last: Option<(usize, usize, usize)> = None;

        for (ci, category) in catalog.categories().iter().enumerate() {
            let questions = catalog.questions_in(&category.code);
            for (qi, question) in questions.iter().enumerate() {
                if store.get(&question.id).is_some_and(|r| r.is_answered()) {
                    last = Some((ci, qi, questions.len()));
                }
            }
        }

        match last {
            None => (0, 0),
            Some((ci, qi, len)) => {
                if qi + 1 < len {
                    (ci, qi + 1)
                } else if ci + 1 < catalog.categories().len() {
                    (ci + 1, 0)
                } else {
                    (ci, qi)
                }
            }
        }
    }

    pub fn resume(&mut self, catalog: &Catalog, store: &ResponseStore) {
        let (category, question) = Self::resume_position(catalog, store);
        self.category = category;
        self.question = question;
    }
}
