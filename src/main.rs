/// Command-line entry point: validate one report image
///
/// Reads an image path plus optional claims from the arguments, runs the
/// full validation pipeline, and prints the result as pretty JSON. Runs
/// with whatever detection capability the shared registry holds; with
/// none attached the content check reports `skipped`.

use std::process::ExitCode;

use report_verifier::detect::registry;
use report_verifier::{validate_report, ImageSource, ValidationRequest};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: report-verifier <image> [latitude longitude] [category]");
        return ExitCode::from(2);
    };

    let mut request = ValidationRequest::new(ImageSource::Path(path.into()));
    if let (Some(latitude), Some(longitude)) = (parse_degrees(args.get(1)), parse_degrees(args.get(2))) {
        request = request.with_location(latitude, longitude);
    }
    if let Some(category) = args.get(3) {
        request = request.with_category(category.clone());
    }

    let capability = registry::global().acquire(None).capability();
    match validate_report(&request, &capability) {
        Ok(result) => {
            let json = result
                .to_json_pretty()
                .expect("validation result serializes");
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("validation failed: {error}");
            ExitCode::FAILURE
        }
    }
}

fn parse_degrees(arg: Option<&String>) -> Option<f64> {
    arg.and_then(|value| value.parse().ok()).filter(|d: &f64| d.is_finite())
}
