use log::debug;
use recipe_fields::{
    load_config, Difficulty, Email, FieldValidator, PreparationTime, Username, ValidationConfig,
    ValidationError,
};
use serde_json::{json, Value};
use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-fields <title|ingredients|prep-time|prep-format|email|difficulty|username> <value|->";

/// The value broke a field rule
const EXIT_REJECTED: u8 = 1;
/// Bad arguments, unreadable input or broken configuration
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    debug!("{:#?}", config);

    let args: Vec<String> = env::args().collect();
    match run(&args, &config, io::stdin().lock(), &mut io::stdout(), &mut io::stderr()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Validate the field named in `args` and report it. Returns the exit code.
fn run(
    args: &[String],
    config: &ValidationConfig,
    mut stdin: impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    // Get the field and value from command-line arguments
    let (Some(field), Some(value)) = (args.get(1), args.get(2)) else {
        writeln!(err, "{}", USAGE)?;
        return Ok(EXIT_USAGE);
    };

    // "-" reads the value from stdin, for multi-line ingredient lists
    let raw = if value == "-" {
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf)?;
        buf
    } else {
        value.clone().into_bytes()
    };

    let validator = FieldValidator::from_config(config);

    let Some(result) = validate(&validator, field, &raw) else {
        writeln!(err, "Unknown field '{}'\n{}", field, USAGE)?;
        return Ok(EXIT_USAGE);
    };

    match result {
        Ok(value) => {
            writeln!(out, "{}", json!({ "field": field, "value": value }))?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(EXIT_REJECTED)
        }
    }
}

/// Validate one field. `None` means the field name is unknown.
fn validate(
    validator: &FieldValidator,
    field: &str,
    raw: &[u8],
) -> Option<Result<Value, ValidationError>> {
    let text = String::from_utf8_lossy(raw);

    let result = match field {
        "title" => validator.title(raw).map(|t| json!(t)),
        "ingredients" => validator.ingredients(raw).map(|i| json!(i)),
        "email" => Email::from_bytes(raw).map(|e| json!(e)),
        "username" => Username::from_bytes(raw).map(|u| json!(u)),
        "difficulty" => text.parse::<Difficulty>().map(|d| json!(d)),
        "prep-format" => PreparationTime::from_format(&text).map(|p| json!(p.minutes())),
        "prep-time" => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidInput {
                field: "preparation_time",
                reason: "must be a whole number of minutes".to_string(),
            })
            .and_then(PreparationTime::new)
            .map(|p| json!(p.minutes())),
        _ => return None,
    };

    Some(result)
}
