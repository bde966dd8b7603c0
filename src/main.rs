use clap::Parser;
use formwork::cli::commands::{cmd_apply, cmd_request, cmd_reset, cmd_serialize};
use formwork::cli::config::{Cli, Commands, load_config};
use formwork::trace::logger::OpLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace file: CLI > config
    let logger = match cli.trace.as_deref().or(config.trace.file.as_deref()) {
        Some(path) => OpLogger::new(path),
        None => OpLogger::disabled(),
    };

    match cli.command {
        Commands::Serialize {
            form,
            skip_empty,
            pretty,
        } => {
            cmd_serialize(
                &form,
                skip_empty || config.serialize.skip_empty,
                pretty,
                cli.verbose,
                &logger,
            )?;
        }
        Commands::Apply { form, data, output } => {
            cmd_apply(&form, &data, output.as_deref(), cli.verbose, &logger)?;
        }
        Commands::Reset {
            form,
            clear_hidden,
            output,
        } => {
            cmd_reset(&form, clear_hidden, output.as_deref(), &logger)?;
        }
        Commands::Request {
            form,
            method,
            url,
            skip_empty,
        } => {
            cmd_request(
                &form,
                &method,
                &url,
                skip_empty || config.serialize.skip_empty,
                cli.verbose,
                &logger,
            )?;
        }
    }

    Ok(())
}
