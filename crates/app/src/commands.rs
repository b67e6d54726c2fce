//! Command handlers.
//!
//! Each handler returns the text to print and whether the command
//! succeeded; `main` does the printing and picks the exit code.

use std::fmt::Write as _;
use std::path::Path;

use ptf_application::{
    GlobalsRepository, ReplayController, ResponseValidator, get_global, log_context, remove_global,
    set_global,
};
use ptf_domain::{
    EndpointDescriptor, OutgoingRequest, ReceivedResponse, ReplayKey, RequestBody, SCOPE_HEADER,
    TestResults, decode_structured_token, slugify,
};
use ptf_infrastructure::{
    CollectingReporter, FileGlobalsRepository, NextRequestSlot, SystemClock, TokioFileSystem,
};

use crate::cli::{GlobalsCommand, ReplayArgs, ValidateArgs};
use crate::error::CliError;

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout.
    pub output: String,
    /// False when the exit code should be 1.
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

fn repository() -> FileGlobalsRepository<TokioFileSystem> {
    FileGlobalsRepository::new(TokioFileSystem::new())
}

async fn read_input(path: &Path) -> Result<String, CliError> {
    tokio::fs::read_to_string(path).await.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// `ptf slugify`
#[must_use]
pub fn slugify_text(text: &str) -> Outcome {
    Outcome::ok(slugify(text))
}

/// `ptf decode-token`
///
/// # Errors
///
/// Returns an error if the token has no decodable JSON payload.
pub fn decode_token(token: &str) -> Result<Outcome, CliError> {
    let payload = decode_structured_token(token)?;
    Ok(Outcome::ok(serde_json::to_string_pretty(&payload)?))
}

/// `ptf replay`: loads the globals, triggers, saves them back and prints
/// the next step.
///
/// # Errors
///
/// Returns an error if the globals cannot be loaded or saved, or if the
/// stored replay state is corrupted.
pub async fn replay(globals_path: &Path, args: &ReplayArgs) -> Result<Outcome, CliError> {
    let repository = repository();
    let mut globals = repository.load(globals_path).await?;
    let mut slot = NextRequestSlot::new();

    let next = {
        let mut controller = ReplayController::new(&mut globals, &mut slot);
        match &args.key {
            Some(key) => controller.trigger_replay_keyed(
                &args.target,
                args.times,
                &ReplayKey::explicit(key),
            )?,
            None => controller.trigger_replay(&args.target, args.times, &args.name)?,
        }
    };

    repository.save(globals_path, &globals).await?;
    Ok(Outcome::ok(format!("next: {next}")))
}

/// `ptf validate-options`: prints every assertion and a summary line.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or the response body
/// is not JSON. Failed assertions are not errors.
pub async fn validate_options(args: &ValidateArgs) -> Result<Outcome, CliError> {
    let response = ReceivedResponse::parse(args.status, &read_input(&args.response).await?)?;

    let mut request = OutgoingRequest::new("");
    if let Some(path) = &args.request {
        request = request.with_body(RequestBody::json(read_input(path).await?));
    }
    if let Some(scope) = &args.scope {
        request = request.with_header(SCOPE_HEADER, scope.as_str());
    }

    let mut endpoint = EndpointDescriptor::new(args.name.as_str(), args.key.as_str());
    if let Some(options_key) = &args.options_key {
        endpoint = endpoint.with_options_key(options_key.as_str());
    }

    log_context("validating options response", &request, Some(&response));

    let mut reporter = CollectingReporter::new(&SystemClock::new());
    ResponseValidator::new(&mut reporter).validate_options_response(
        &request,
        &response,
        &endpoint,
        args.expects_query,
    );
    let results = reporter.finish();

    Ok(Outcome {
        output: render_results(&results),
        success: results.all_passed(),
    })
}

/// `ptf globals get|set|remove`
///
/// # Errors
///
/// Returns an error if the globals cannot be loaded or saved.
pub async fn globals(globals_path: &Path, command: &GlobalsCommand) -> Result<Outcome, CliError> {
    let repository = repository();
    let mut globals = repository.load(globals_path).await?;

    match command {
        GlobalsCommand::Get { key } => Ok(get_global(&globals, key).map_or_else(
            || Outcome {
                output: format!("global '{key}' is not set"),
                success: false,
            },
            Outcome::ok,
        )),
        GlobalsCommand::Set { key, value } => {
            set_global(&mut globals, key, value.as_str());
            repository.save(globals_path, &globals).await?;
            Ok(Outcome::ok(format!("{key} = {value}")))
        }
        GlobalsCommand::Remove { key } => {
            if remove_global(&mut globals, key).is_none() {
                return Ok(Outcome {
                    output: format!("global '{key}' is not set"),
                    success: false,
                });
            }
            repository.save(globals_path, &globals).await?;
            Ok(Outcome::ok(format!("removed {key}")))
        }
    }
}

fn render_results(results: &TestResults) -> String {
    let mut out = String::new();
    for result in &results.results {
        match &result.error {
            None => {
                let _ = writeln!(out, "PASS  {}", result.label);
            }
            Some(error) => {
                let _ = writeln!(out, "FAIL  {}: {error}", result.label);
            }
        }
    }
    let _ = write!(
        out,
        "{} passed, {} failed ({:.0}%)",
        results.passed,
        results.failed,
        results.pass_rate()
    );
    out
}
