use ui_elements::cli::commands::{cmd_export, cmd_process, cmd_validate};
use ui_elements::cli::config::{init_logging, load_config, Cli, Commands};
use ui_elements::trace::logger::TraceLogger;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config
    let tracer = TraceLogger::from_option(cli.trace.as_deref().or(config.trace.path.as_deref()));

    match cli.command {
        Commands::Process {
            input,
            format,
            report,
            output,
        } => {
            let report = report.unwrap_or_else(|| config.process.report.clone());
            cmd_process(
                &input,
                &format,
                &report,
                output.as_deref(),
                config.process.pretty,
                &tracer,
            )?;
        }
        Commands::Validate { input, format } => {
            if !cmd_validate(&input, &format, &tracer)? {
                std::process::exit(1);
            }
        }
        Commands::Export {
            input,
            format,
            output,
        } => {
            let output = output.or(config.export.output);
            cmd_export(&input, &format, output.as_deref(), &tracer)?;
        }
    }

    Ok(())
}
