// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `predict` and `fields`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - value-enum parsing for the domain name
//
// Note that --values stays a list of raw STRINGS here: numeric
// conversion belongs to the feature adapter (Layer 4), which is
// the single place the "is this a number" decision is made.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use crate::domain::feature_spec::Domain;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict a disease outcome from clinical feature values
    Predict(PredictArgs),

    /// Show a domain's input fields in the order the model expects
    Fields(FieldsArgs),
}

/// The domain names as typed on the command line.
/// Converted into the domain-layer enum at the boundary —
/// the application layer never sees clap types.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DomainArg {
    /// Diabetes prediction (8 fields)
    Diabetes,
    /// Heart disease prediction (13 fields)
    Heart,
    /// Parkinson's disease prediction (22 fields)
    Parkinsons,
}

impl From<DomainArg> for Domain {
    fn from(a: DomainArg) -> Self {
        match a {
            DomainArg::Diabetes   => Domain::Diabetes,
            DomainArg::Heart      => Domain::HeartDisease,
            DomainArg::Parkinsons => Domain::Parkinsons,
        }
    }
}

/// All arguments for the `predict` command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Which disease domain to predict
    #[arg(long, value_enum)]
    pub domain: DomainArg,

    /// Comma-separated feature values, in the domain's field order
    /// (run `fields --domain <domain>` to see the order)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Directory containing the pre-trained model artifacts
    #[arg(long, default_value = "saved_models")]
    pub models_dir: String,
}

/// All arguments for the `fields` command
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Which disease domain's fields to list
    #[arg(long, value_enum)]
    pub domain: DomainArg,
}
