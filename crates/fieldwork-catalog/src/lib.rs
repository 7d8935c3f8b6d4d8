//! fieldwork-catalog
//!
//! The built-in platform-worker survey: category sequence, question
//! definitions, answer validation, and catalog integrity checking.
//! Pure data and pure functions — no I/O.

pub mod data;
pub mod integrity;
pub mod validate;

use fieldwork_core::models::question::{Category, Question};

/// An ordered question catalog. The built-in survey is exposed via
/// [`Catalog::builtin`]; tests and alternate surveys can construct their own.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog from a category sequence and question list.
    /// Category ordinals are assigned from their position in `categories`.
    pub fn new(categories: Vec<(String, String)>, questions: Vec<Question>) -> Self {
        let categories = categories
            .into_iter()
            .enumerate()
            .map(|(ordinal, (code, display_name))| Category {
                code,
                display_name,
                ordinal,
            })
            .collect();
        Self {
            categories,
            questions,
        }
    }

    /// The built-in platform-worker survey.
    pub fn builtin() -> &'static Catalog {
        &data::BUILTIN
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn category(&self, code: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.code == code)
    }

    pub fn category_position(&self, code: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.code == code)
    }

    /// Questions belonging to one category, in catalog order.
    pub fn questions_in(&self, category_code: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category_code == category_code)
            .collect()
    }

    /// All questions in catalog order: category ordinal first, then the
    /// question's position within its category.
    pub fn ordered_questions(&self) -> impl Iterator<Item = &Question> {
        self.categories
            .iter()
            .flat_map(|c| self.questions.iter().filter(|q| q.category_code == c.code))
    }
}
