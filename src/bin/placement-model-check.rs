//! Developer utility to validate a classifier artifact and optionally run one prediction.
//!
//! Usage: `placement-model-check <model.json> [10 feature values]`

use std::path::PathBuf;

use placement::form::{BinaryChoice, FormState};
use placement::ml::{self, ModelKind};
use placement::prediction::PredictionController;
use placement::schema::{FEATURE_COUNT, FIELDS, FieldKind};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

struct Options {
    model_path: PathBuf,
    values: Vec<String>,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let model = ml::load_classifier(&options.model_path).map_err(|err| err.to_string())?;
    println!("Model: {}", options.model_path.display());
    println!("Kind: {}", model.model.name());
    println!("Version: {}", model.model_version);
    match &model.model {
        ModelKind::LogisticRegression(logreg) => {
            println!("Threshold: {}", logreg.threshold);
            println!("Scaled inputs: {}", logreg.scaling.is_some());
        }
        ModelKind::GradientBoostedStumps(stumps) => {
            println!("Stumps: {}", stumps.stumps.len());
        }
    }
    println!();
    println!("Features:");
    for (idx, name) in model.features.iter().enumerate() {
        println!("  {idx:>2} {name}");
    }

    if options.values.is_empty() {
        return Ok(());
    }
    let form = build_form(&options.values)?;
    let mut controller = PredictionController::new(Box::new(model));
    *controller.form_mut() = form;
    let result = controller.submit().map_err(|err| err.to_string())?;
    println!();
    println!("{result}");
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Options, String> {
    let mut iter = args.into_iter();
    let model_path = match iter.next() {
        Some(arg) if arg == "-h" || arg == "--help" => return Err(help_text()),
        Some(arg) => PathBuf::from(arg),
        None => return Err(help_text()),
    };
    let values: Vec<String> = iter.collect();
    if !values.is_empty() && values.len() != FEATURE_COUNT {
        return Err(format!(
            "Expected {FEATURE_COUNT} feature values, got {}\n\n{}",
            values.len(),
            help_text()
        ));
    }
    Ok(Options { model_path, values })
}

fn build_form(values: &[String]) -> Result<FormState, String> {
    let mut form = FormState::new();
    for (idx, (field, value)) in FIELDS.iter().zip(values).enumerate() {
        match field.kind {
            FieldKind::Numeric => {
                form.set_text(idx, value.as_str());
            }
            FieldKind::Binary => {
                let choice = match value.trim().to_ascii_lowercase().as_str() {
                    "yes" | "1" => BinaryChoice::Yes,
                    "no" | "0" => BinaryChoice::No,
                    other => {
                        return Err(format!("{} must be Yes or No, got '{other}'", field.name));
                    }
                };
                form.set_choice(idx, choice);
            }
        }
    }
    Ok(form)
}

fn help_text() -> String {
    let fields: Vec<&str> = FIELDS.iter().map(|field| field.name).collect();
    format!(
        "Usage: placement-model-check <model.json> [values...]\n\
         Values, in order: {}",
        fields.join(", ")
    )
}
