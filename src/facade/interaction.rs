use crate::core::{AnimalRecord, InputError, TableError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The four text fields a user types for one animal, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    pub name: String,
    pub location: String,
    pub size: String,
    #[serde(alias = "image_ref")]
    pub image: String,
}

impl RawFields {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            size: size.into(),
            image: image.into(),
        }
    }

    /// Prefills a form from an existing record.
    pub fn from_record(record: &AnimalRecord) -> Self {
        Self::new(
            record.name.clone(),
            record.location.clone(),
            crate::core::format_size(record.size),
            record.image_ref.clone(),
        )
    }

    /// Turns the raw text into a record, refusing blanks and sizes that are
    /// not finite positive numbers.
    pub fn parse(&self) -> Result<AnimalRecord, InputError> {
        if self.name.is_empty() {
            return Err(InputError::MissingField("name"));
        }
        if self.location.is_empty() {
            return Err(InputError::MissingField("location"));
        }
        if self.size.trim().is_empty() {
            return Err(InputError::MissingField("size"));
        }
        if self.image.is_empty() {
            return Err(InputError::MissingField("image"));
        }

        let size = self
            .size
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s > 0.0)
            .ok_or_else(|| InputError::InvalidSize(self.size.clone()))?;

        Ok(AnimalRecord::new(
            self.name.clone(),
            self.image.clone(),
            self.location.clone(),
            size,
        ))
    }
}

/// What the user is asked to fill in.
#[derive(Debug, Clone)]
pub struct FieldPrompt {
    pub title: String,
    pub defaults: RawFields,
    pub size_unit: String,
}

impl FieldPrompt {
    pub fn add(table_label: &str, size_unit: &str) -> Self {
        Self {
            title: format!("Add animal to {}", table_label),
            defaults: RawFields::default(),
            size_unit: size_unit.to_string(),
        }
    }

    pub fn edit(record: &AnimalRecord, size_unit: &str) -> Self {
        Self {
            title: format!("Edit {}", record.name),
            defaults: RawFields::from_record(record),
            size_unit: size_unit.to_string(),
        }
    }

    /// Field labels in the order they are asked for.
    pub fn labels(&self) -> [String; 4] {
        [
            "Name".to_string(),
            "Location".to_string(),
            format!("Size ({})", self.size_unit),
            "Image URL".to_string(),
        ]
    }
}

/// How a session talks to whoever is driving it.
pub trait UserInteraction {
    /// Asks for the four animal fields. `None` means the user cancelled,
    /// which the session treats as a blank form.
    fn collect_fields(&mut self, prompt: &FieldPrompt) -> Option<RawFields>;

    /// Shows why an action was refused.
    fn report_rejection(&mut self, error: &TableError);
}

/// Headless interaction: answers prompts from a queue and keeps every report.
#[derive(Debug, Default)]
pub struct RecordingInteraction {
    pub answers: VecDeque<Option<RawFields>>,
    pub prompts: Vec<String>,
    pub reports: Vec<String>,
}

impl RecordingInteraction {
    pub fn answering(answers: impl IntoIterator<Item = RawFields>) -> Self {
        Self {
            answers: answers.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answers: VecDeque::from(vec![None]),
            ..Self::default()
        }
    }
}

impl UserInteraction for RecordingInteraction {
    fn collect_fields(&mut self, prompt: &FieldPrompt) -> Option<RawFields> {
        self.prompts.push(prompt.title.clone());
        self.answers.pop_front().flatten()
    }

    fn report_rejection(&mut self, error: &TableError) {
        self.reports.push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_fields() {
        let record = RawFields::new("Rex", "UK", " 2.5 ", "r.jpg").parse().unwrap();
        assert_eq!(record, AnimalRecord::new("Rex", "r.jpg", "UK", 2.5));
    }

    #[test]
    fn test_parse_reports_first_missing_field() {
        let err = RawFields::new("Rex", "", "", "").parse().unwrap_err();
        assert_eq!(err, InputError::MissingField("location"));
    }

    #[test]
    fn test_parse_rejects_bad_sizes() {
        for size in ["abc", "0", "-4", "NaN", "inf"] {
            let err = RawFields::new("Rex", "UK", size, "r.jpg").parse().unwrap_err();
            assert_eq!(err, InputError::InvalidSize(size.to_string()));
        }
    }

    #[test]
    fn test_edit_prefill_of_large_size_parses_back() {
        let record = AnimalRecord::new("Kraken", "k.jpg", "Sea", 1e20);
        let prompt = FieldPrompt::edit(&record, "ft");
        assert_eq!(prompt.defaults.parse().unwrap(), record);
    }

    #[test]
    fn test_edit_prompt_prefills_record() {
        let prompt = FieldPrompt::edit(&AnimalRecord::new("Lion", "l.jpg", "Africa", 8.0), "ft");
        assert_eq!(prompt.defaults, RawFields::new("Lion", "Africa", "8", "l.jpg"));
    }

    #[test]
    fn test_size_label_uses_unit() {
        let prompt = FieldPrompt::add("Dogs", "m");
        assert_eq!(prompt.labels()[2], "Size (m)");
    }
}
