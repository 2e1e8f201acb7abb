use std::path::Path;

use crate::adapter::{load_document, resolve_format};
use crate::error::{AppError, AppResult};
use crate::export::csv::export_elements_to_csv;
use crate::pipeline::assembler::ProcessingOutcome;
use crate::pipeline::validate::{validate_structure, ValidationReport, ValidationVerdict};
use crate::process_upload;
use crate::report::console::format_console_summary;
use crate::report::report_model::UploadResponse;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// process subcommand
// ============================================================================

/// Process a dump and write the JSON response or console summary.
pub fn cmd_process(
    input: &str,
    format: &str,
    report: &str,
    output: Option<&str>,
    pretty: bool,
    tracer: &TraceLogger,
) -> AppResult<()> {
    let (validation, outcome) = prepare("process", input, format, tracer)?;

    tracing::info!(
        input,
        elements = outcome.elements.len(),
        discarded = outcome.discarded_count(),
        "processed upload"
    );

    let filename = display_name(input);
    let content = match report {
        "summary" => format_console_summary(&filename, &validation, &outcome),
        _ => {
            let response = UploadResponse::from_outcome(&filename, outcome);
            let mut json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            json.push('\n');
            json
        }
    };

    write_output(output, &content)
}

// ============================================================================
// validate subcommand
// ============================================================================

/// Print the validation verdict as JSON and return whether the dump is usable.
pub fn cmd_validate(input: &str, format: &str, tracer: &TraceLogger) -> AppResult<bool> {
    let event = TraceEvent::now("validate", &display_name(input));

    let data = match resolve_format(format, Path::new(input))
        .and_then(|fmt| load_document(Path::new(input), fmt))
    {
        Ok(data) => data,
        Err(e) => {
            tracer.log(&event.with_error(&e));
            return Err(e);
        }
    };

    let result = validate_structure(&data);
    let event = match &result {
        Ok(report) => event.with_validation(report),
        Err(err) => event.with_pipeline_error(err),
    };
    tracer.log(&event);

    let verdict = ValidationVerdict::from(&result);
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(verdict.valid)
}

// ============================================================================
// export subcommand
// ============================================================================

/// Write the CSV table and return the number of rows exported.
pub fn cmd_export(
    input: &str,
    format: &str,
    output: Option<&str>,
    tracer: &TraceLogger,
) -> AppResult<usize> {
    let (_, outcome) = prepare("export", input, format, tracer)?;

    let csv = export_elements_to_csv(&outcome.elements);
    write_output(output, &csv)?;

    if let Some(path) = output {
        tracing::info!(path, rows = outcome.elements.len(), "exported csv");
    }
    Ok(outcome.elements.len())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load, validate and process one upload, recording a trace event either way.
fn prepare(
    command: &str,
    input: &str,
    format: &str,
    tracer: &TraceLogger,
) -> AppResult<(ValidationReport, ProcessingOutcome)> {
    let event = TraceEvent::now(command, &display_name(input));

    let result = resolve_format(format, Path::new(input))
        .and_then(|fmt| load_document(Path::new(input), fmt))
        .and_then(|data| process_upload(&data).map_err(AppError::from));

    match &result {
        Ok((validation, outcome)) => {
            tracer.log(&event.with_validation(validation).with_outcome(outcome));
        }
        Err(AppError::Pipeline(err)) => tracer.log(&event.with_pipeline_error(err)),
        Err(e) => tracer.log(&event.with_error(e)),
    }

    result
}

fn write_output(output: Option<&str>, content: &str) -> AppResult<()> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}

/// File name component of an input path, for display.
pub fn display_name(input: &str) -> String {
    Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string())
}
