//! Catalog integrity checking.
//!
//! Run once at load time against a whole catalog. Errors mean the catalog
//! is unusable; warnings flag sloppy data worth fixing.

use std::collections::HashSet;

use fieldwork_core::models::question::{InputType, Question};

use crate::Catalog;

#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ids follow `<CATEGORY>_<NUMBER>[letter]`: uppercase letters, an
/// underscore, digits, optional lowercase follow-up suffix.
fn id_well_formed(id: &str) -> bool {
    let Some((prefix, rest)) = id.split_once('_') else {
        return false;
    };
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }
    let digits: &str = rest.trim_end_matches(|c: char| c.is_ascii_lowercase());
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn check_question(question: &Question, catalog: &Catalog, report: &mut IntegrityReport) {
    let id = if question.id.trim().is_empty() {
        "unknown"
    } else {
        &question.id
    };

    for (name, value) in [
        ("id", &question.id),
        ("text", &question.text),
        ("categoryName", &question.category_name),
        ("categoryCode", &question.category_code),
    ] {
        if value.trim().is_empty() {
            report
                .errors
                .push(format!("question {id}: missing required field '{name}'"));
        }
    }

    match (&question.input_type, &question.choices) {
        (InputType::SingleChoice, None) => {
            report
                .errors
                .push(format!("question {id}: single-choice question has no choices"));
        }
        (InputType::SingleChoice, Some(choices)) => {
            if choices.is_empty() {
                report
                    .errors
                    .push(format!("question {id}: single-choice question has no choices"));
            } else if choices.iter().any(|c| c.trim().is_empty()) {
                report
                    .warnings
                    .push(format!("question {id}: contains blank choices"));
            }
        }
        (_, Some(_)) => {
            report.warnings.push(format!(
                "question {id}: carries choices but is not single-choice"
            ));
        }
        (_, None) => {}
    }

    if let Some(parent) = &question.follow_up_of
        && catalog.question(parent).is_none()
    {
        report.errors.push(format!(
            "question {id}: follow-up parent '{parent}' not found"
        ));
    }

    if !question.id.trim().is_empty() && !id_well_formed(&question.id) {
        report.warnings.push(format!(
            "question {id}: id doesn't follow CATEGORY_NUMBER[letter]"
        ));
    }

    if catalog.category(&question.category_code).is_none() {
        report.errors.push(format!(
            "question {id}: category '{}' not in the category sequence",
            question.category_code
        ));
    }
}

/// Validate every question plus cross-question constraints.
pub fn check_catalog(catalog: &Catalog) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    let mut seen = HashSet::new();

    for question in catalog.questions() {
        check_question(question, catalog, &mut report);

        if !seen.insert(question.id.as_str()) {
            report
                .errors
                .push(format!("duplicate question id: {}", question.id));
        }
    }

    report
}
