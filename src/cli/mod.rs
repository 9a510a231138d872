// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `predict` — runs one prediction for one domain
//   2. `fields`  — prints a domain's ordered input fields
//
// This layer is also the submission boundary for errors: user
// input errors (non-numeric value, wrong field count) collapse
// into ONE generic message, exactly as the original form did.
// Startup failures and internal contract errors are NOT
// flattened — they propagate with full context and a non-zero
// exit, because they are defects or deployment problems, never
// the user's typing.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, FieldsArgs, PredictArgs};

use crate::domain::error::PredictError;
use crate::domain::feature_spec::Domain;

/// Shown for any user input error — deliberately generic, with
/// no per-field detail, matching the original form's behaviour.
const INVALID_INPUT_MSG: &str = "Please enter valid numeric values.";

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "health-assistant",
    version = "0.1.0",
    about = "Predict diabetes, heart disease, and Parkinson's from clinical features."
)]
pub struct Cli {
    /// The subcommand to run (predict or fields)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    ///
    /// The match moves the args out of `self`, so the handlers
    /// are associated functions that take the args by value
    /// instead of borrowing the partially-moved Cli.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict(args) => Self::run_predict(args),
            Commands::Fields(args)  => Self::run_fields(args),
        }
    }

    /// Handles the `predict` subcommand.
    /// Builds the use case (loading the model store) and runs
    /// exactly one prediction.
    fn run_predict(args: PredictArgs) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;

        let domain: Domain = args.domain.into();
        tracing::info!("Predicting {domain} from {} values", args.values.len());

        let use_case = PredictUseCase::new(&args.models_dir)?;

        match use_case.predict(domain, &args.values) {
            Ok(outcome) => {
                println!("\n{outcome}");
                Ok(())
            }
            // Collapse user input errors into the one generic
            // message; let everything else propagate loudly
            Err(e) => match e.downcast_ref::<PredictError>() {
                Some(pe) if pe.is_user_input_error() => {
                    tracing::debug!("Rejected submission: {pe}");
                    println!("\n{INVALID_INPUT_MSG}");
                    Ok(())
                }
                _ => Err(e),
            },
        }
    }

    /// Handles the `fields` subcommand.
    /// Prints the domain's fields in the exact order the model
    /// expects them — the same order `--values` must use.
    fn run_fields(args: FieldsArgs) -> Result<()> {
        let domain: Domain = args.domain.into();
        let spec = domain.spec();

        println!("{} prediction — {} fields, in order:", domain, spec.len());
        for (i, field) in spec.fields.iter().enumerate() {
            if field.name == field.label {
                println!("  {:2}. {}", i + 1, field.name);
            } else {
                println!("  {:2}. {} — {}", i + 1, field.name, field.label);
            }
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use commands::DomainArg;
    use crate::ml::model::{LinearClassifier, ModelKind};
    use std::path::Path;

    fn write_all_artifacts(dir: &Path) {
        for domain in Domain::ALL {
            let n = domain.spec().len();
            let model = LinearClassifier {
                algorithm:    ModelKind::LinearSvc,
                n_features:   n,
                scaler_mean:  vec![0.0; n],
                scaler_scale: vec![1.0; n],
                coefficients: vec![0.05; n],
                intercept:    -0.3,
            };
            std::fs::write(
                dir.join(domain.artifact_name()),
                serde_json::to_string(&model).unwrap(),
            )
            .unwrap();
        }
    }

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fields_dispatch_runs() {
        let cli = Cli {
            command: Commands::Fields(FieldsArgs {
                domain: DomainArg::Parkinsons,
            }),
        };
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_predict_dispatch_runs_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());

        let cli = Cli {
            command: Commands::Predict(PredictArgs {
                domain:     DomainArg::Diabetes,
                values:     raw(&["2", "120", "70", "30", "80", "25.0", "0.5", "35"]),
                models_dir: dir.path().display().to_string(),
            }),
        };
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_invalid_values_collapse_to_the_generic_message() {
        // A non-numeric value is a user error: the command prints
        // the generic message and exits cleanly, it does not fail
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());

        let cli = Cli {
            command: Commands::Predict(PredictArgs {
                domain:     DomainArg::Diabetes,
                values:     raw(&["2", "abc", "70", "30", "80", "25.0", "0.5", "35"]),
                models_dir: dir.path().display().to_string(),
            }),
        };
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_missing_models_dir_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            command: Commands::Predict(PredictArgs {
                domain:     DomainArg::Heart,
                values:     raw(&["63"]),
                models_dir: dir.path().join("empty").display().to_string(),
            }),
        };
        assert!(cli.run().is_err());
    }
}
