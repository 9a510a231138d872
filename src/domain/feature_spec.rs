// ============================================================
// Layer 3 — Domains and Feature Specs
// ============================================================
// Defines the three prediction domains and, for each, the
// fixed, ordered list of numeric input fields its model was
// trained on.
//
// The field order here is a *positional contract* with the
// trained model: field i of the form maps to column i of the
// training data. There is no schema that enforces this — the
// order in these tables is the single source of truth for both
// the form display and the model input, so the coupling can
// never drift between the two.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three disease domains this system can predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Domain {
    /// All domains, in menu order.
    pub const ALL: [Domain; 3] = [
        Domain::Diabetes,
        Domain::HeartDisease,
        Domain::Parkinsons,
    ];

    /// The feature spec (ordered field list) for this domain.
    pub fn spec(&self) -> &'static FeatureSpec {
        match self {
            Domain::Diabetes     => &DIABETES_SPEC,
            Domain::HeartDisease => &HEART_DISEASE_SPEC,
            Domain::Parkinsons   => &PARKINSONS_SPEC,
        }
    }

    /// File name of this domain's model artifact inside the
    /// models directory.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            Domain::Diabetes     => "diabetes_model.json",
            Domain::HeartDisease => "heart_disease_model.json",
            Domain::Parkinsons   => "parkinsons_model.json",
        }
    }

    /// Short human-readable name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Diabetes     => "diabetes",
            Domain::HeartDisease => "heart disease",
            Domain::Parkinsons   => "Parkinson's",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named input field of a domain's feature spec.
#[derive(Debug, Clone, Copy)]
pub struct FeatureField {
    /// Dataset column name — identifies the field to the model
    pub name: &'static str,

    /// Human-readable label shown on the input form
    pub label: &'static str,
}

/// The fixed, ordered list of numeric inputs a domain's model
/// expects. Order and length are part of the model contract.
#[derive(Debug)]
pub struct FeatureSpec {
    /// Fields in training-column order
    pub fields: &'static [FeatureField],
}

impl FeatureSpec {
    /// Number of fields the model expects (its input dimensionality).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The converted, ordered numeric vector passed to a model's
/// prediction call. Created only by the feature adapter, so its
/// length always matches the spec it was converted against.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

// ─── Field tables ─────────────────────────────────────────────────────────────
// Column order matches the datasets the models were trained on
// (Pima diabetes, Cleveland heart disease, UCI Parkinson's).
// Do not reorder.

const fn field(name: &'static str, label: &'static str) -> FeatureField {
    FeatureField { name, label }
}

static DIABETES_FIELDS: [FeatureField; 8] = [
    field("Pregnancies",              "Number of Pregnancies"),
    field("Glucose",                  "Glucose Level"),
    field("BloodPressure",            "Blood Pressure"),
    field("SkinThickness",            "Skin Thickness"),
    field("Insulin",                  "Insulin Level"),
    field("BMI",                      "BMI"),
    field("DiabetesPedigreeFunction", "Diabetes Pedigree Function"),
    field("Age",                      "Age"),
];

static HEART_DISEASE_FIELDS: [FeatureField; 13] = [
    field("age",      "Age"),
    field("sex",      "Sex (1=Male, 0=Female)"),
    field("cp",       "Chest Pain Type (0-3)"),
    field("trestbps", "Resting Blood Pressure"),
    field("chol",     "Cholesterol"),
    field("fbs",      "Fasting Blood Sugar > 120 (1/0)"),
    field("restecg",  "Resting ECG (0-2)"),
    field("thalach",  "Max Heart Rate"),
    field("exang",    "Exercise Induced Angina (1/0)"),
    field("oldpeak",  "ST Depression"),
    field("slope",    "Slope (0-2)"),
    field("ca",       "Major Vessels (0-3)"),
    field("thal",     "Thal (0=Normal, 1=Fixed, 2=Reversible)"),
];

static PARKINSONS_FIELDS: [FeatureField; 22] = [
    field("MDVP:Fo(Hz)",      "MDVP:Fo(Hz)"),
    field("MDVP:Fhi(Hz)",     "MDVP:Fhi(Hz)"),
    field("MDVP:Flo(Hz)",     "MDVP:Flo(Hz)"),
    field("MDVP:Jitter(%)",   "MDVP:Jitter(%)"),
    field("MDVP:Jitter(Abs)", "MDVP:Jitter(Abs)"),
    field("MDVP:RAP",         "MDVP:RAP"),
    field("MDVP:PPQ",         "MDVP:PPQ"),
    field("Jitter:DDP",       "Jitter:DDP"),
    field("MDVP:Shimmer",     "MDVP:Shimmer"),
    field("MDVP:Shimmer(dB)", "MDVP:Shimmer(dB)"),
    field("Shimmer:APQ3",     "Shimmer:APQ3"),
    field("Shimmer:APQ5",     "Shimmer:APQ5"),
    field("MDVP:APQ",         "MDVP:APQ"),
    field("Shimmer:DDA",      "Shimmer:DDA"),
    field("NHR",              "NHR"),
    field("HNR",              "HNR"),
    field("RPDE",             "RPDE"),
    field("DFA",              "DFA"),
    field("spread1",          "spread1"),
    field("spread2",          "spread2"),
    field("D2",               "D2"),
    field("PPE",              "PPE"),
];

static DIABETES_SPEC: FeatureSpec = FeatureSpec { fields: &DIABETES_FIELDS };
static HEART_DISEASE_SPEC: FeatureSpec = FeatureSpec { fields: &HEART_DISEASE_FIELDS };
static PARKINSONS_SPEC: FeatureSpec = FeatureSpec { fields: &PARKINSONS_FIELDS };

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lengths_match_model_dimensionality() {
        assert_eq!(Domain::Diabetes.spec().len(), 8);
        assert_eq!(Domain::HeartDisease.spec().len(), 13);
        assert_eq!(Domain::Parkinsons.spec().len(), 22);
    }

    #[test]
    fn test_diabetes_field_order_is_training_order() {
        let names: Vec<&str> = Domain::Diabetes.spec()
            .fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec![
            "Pregnancies", "Glucose", "BloodPressure", "SkinThickness",
            "Insulin", "BMI", "DiabetesPedigreeFunction", "Age",
        ]);
    }

    #[test]
    fn test_heart_disease_field_order_is_training_order() {
        let names: Vec<&str> = Domain::HeartDisease.spec()
            .fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec![
            "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg",
            "thalach", "exang", "oldpeak", "slope", "ca", "thal",
        ]);
    }

    #[test]
    fn test_parkinsons_spec_starts_and_ends_correctly() {
        let fields = Domain::Parkinsons.spec().fields;
        assert_eq!(fields[0].name, "MDVP:Fo(Hz)");
        assert_eq!(fields[18].name, "spread1");
        assert_eq!(fields[21].name, "PPE");
    }

    #[test]
    fn test_artifact_names() {
        assert_eq!(Domain::Diabetes.artifact_name(), "diabetes_model.json");
        assert_eq!(Domain::HeartDisease.artifact_name(), "heart_disease_model.json");
        assert_eq!(Domain::Parkinsons.artifact_name(), "parkinsons_model.json");
    }
}
