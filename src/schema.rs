//! Input schema shared by the prediction form and the classifier loader.
//!
//! The field order below is positional: it is the order the classifier was
//! trained on. Both the form and model artifact validation read it from here.

use std::fmt;
use std::ops::Index;

/// How a field is entered and encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text entry parsed as a float.
    Numeric,
    /// Two-option Yes/No selector encoded as 1.0 / 0.0.
    Binary,
}

/// One named input slot of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Numeric,
        }
    }

    const fn binary(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Binary,
        }
    }
}

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 10;

/// Ordered form fields, in classifier input order.
pub static FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec::numeric("CGPA"),
    FieldSpec::numeric("Internships"),
    FieldSpec::numeric("Projects"),
    FieldSpec::numeric("Workshops/Certifications"),
    FieldSpec::numeric("Aptitude Test Score"),
    FieldSpec::numeric("Soft Skills Rating"),
    FieldSpec::binary("Extracurricular Activities"),
    FieldSpec::binary("Placement Training"),
    FieldSpec::numeric("SSC Marks"),
    FieldSpec::numeric("HSC Marks"),
];

/// Position of a named field in [`FIELDS`].
pub fn field_index(name: &str) -> Option<usize> {
    FIELDS.iter().position(|field| field.name == name)
}

/// Field names in classifier input order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|field| field.name)
}

/// Fixed-order numeric encoding of one form submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// True when every value is a finite float.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|value| value.is_finite())
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_matches_training_layout() {
        let names: Vec<_> = field_names().collect();
        assert_eq!(
            names,
            [
                "CGPA",
                "Internships",
                "Projects",
                "Workshops/Certifications",
                "Aptitude Test Score",
                "Soft Skills Rating",
                "Extracurricular Activities",
                "Placement Training",
                "SSC Marks",
                "HSC Marks",
            ]
        );
    }

    #[test]
    fn only_activity_and_training_fields_are_binary() {
        let binary: Vec<_> = FIELDS
            .iter()
            .enumerate()
            .filter(|(_, field)| field.kind == FieldKind::Binary)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(binary, vec![6, 7]);
    }

    #[test]
    fn field_index_resolves_names() {
        assert_eq!(field_index("CGPA"), Some(0));
        assert_eq!(field_index("HSC Marks"), Some(9));
        assert_eq!(field_index("GPA"), None);
    }

    #[test]
    fn feature_vector_display_lists_values_in_order() {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = 8.5;
        values[9] = 90.0;
        let text = FeatureVector::new(values).to_string();
        assert_eq!(text, "[8.5, 0, 0, 0, 0, 0, 0, 0, 0, 90]");
    }
}
