//! Editable form state and its coercion into a [`FeatureVector`].

use thiserror::Error;

use crate::schema::{FEATURE_COUNT, FIELDS, FeatureVector, FieldKind, FieldSpec};

/// Two-option selector value for binary fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BinaryChoice {
    Yes,
    #[default]
    No,
}

impl BinaryChoice {
    pub const ALL: [BinaryChoice; 2] = [BinaryChoice::Yes, BinaryChoice::No];

    pub fn label(self) -> &'static str {
        match self {
            BinaryChoice::Yes => "Yes",
            BinaryChoice::No => "No",
        }
    }

    pub fn encode(self) -> f64 {
        match self {
            BinaryChoice::Yes => 1.0,
            BinaryChoice::No => 0.0,
        }
    }
}

/// Raw user input for one field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Choice(BinaryChoice),
}

impl FieldValue {
    /// Initial value shown when the form is built.
    pub fn initial(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Numeric => FieldValue::Text(String::new()),
            FieldKind::Binary => FieldValue::Choice(BinaryChoice::default()),
        }
    }
}

/// Reasons a numeric entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric field was blank or whitespace-only.
    #[error("{field} is empty")]
    EmptyField { field: &'static str },
    /// A numeric field did not parse as a float.
    #[error("could not convert '{input}' in {field} to a number")]
    NonNumeric { field: &'static str, input: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { field } | ValidationError::NonNumeric { field, .. } => {
                field
            }
        }
    }
}

/// One value per schema field, in schema order.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: Vec<FieldValue>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Build the form: numeric entries empty, selectors on "No".
    pub fn new() -> Self {
        Self {
            values: FIELDS
                .iter()
                .map(|field| FieldValue::initial(field.kind))
                .collect(),
        }
    }

    /// Iterate fields with their current values, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> {
        FIELDS.iter().zip(self.values.iter())
    }

    /// Iterate fields with mutable values, for input widgets.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = (&'static FieldSpec, &mut FieldValue)> {
        FIELDS.iter().zip(self.values.iter_mut())
    }

    pub fn value(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    /// Replace the text of a numeric field. Returns false for binary or unknown fields.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.values.get_mut(index) {
            Some(FieldValue::Text(current)) => {
                *current = text.into();
                true
            }
            _ => false,
        }
    }

    /// Change a binary selector. Returns false for numeric or unknown fields.
    pub fn set_choice(&mut self, index: usize, choice: BinaryChoice) -> bool {
        match self.values.get_mut(index) {
            Some(FieldValue::Choice(current)) => {
                *current = choice;
                true
            }
            _ => false,
        }
    }

    /// Coerce every field into the classifier's input vector.
    ///
    /// Stops at the first field that fails validation, in schema order.
    pub fn to_feature_vector(&self) -> Result<FeatureVector, ValidationError> {
        let mut out = [0.0; FEATURE_COUNT];
        for (slot, (field, value)) in out.iter_mut().zip(self.fields()) {
            *slot = coerce(field, value)?;
        }
        Ok(FeatureVector::new(out))
    }
}

fn coerce(field: &FieldSpec, value: &FieldValue) -> Result<f64, ValidationError> {
    match value {
        FieldValue::Choice(choice) => Ok(choice.encode()),
        FieldValue::Text(text) => parse_numeric(field.name, text),
    }
}

fn parse_numeric(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NonNumeric {
            field,
            input: trimmed.to_string(),
        })
}
