//! The analyze command - explain an error message.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use copydesk_domain::{ErrorAnalysisRequest, TextGenerator};
use copydesk_engine::Engine;
use std::io::Read;

/// Analyze an error message from an argument or stdin.
pub async fn execute<G>(args: &AnalyzeArgs, engine: &Engine<G>, formatter: &Formatter) -> Result<()>
where
    G: TextGenerator + Send + Sync,
{
    let message = resolve_message(args)?;

    let request = ErrorAnalysisRequest {
        error_message: message,
        language: args.language.into(),
    };

    let response = engine.analyze_error(&request).await?;
    println!("{}", formatter.format_analysis(&response));
    Ok(())
}

fn resolve_message(args: &AnalyzeArgs) -> Result<String> {
    let message = if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.message.clone().ok_or_else(|| {
            CliError::InvalidInput("Provide an error message or pass --stdin".to_string())
        })?
    };

    let message = message.trim().to_string();
    if message.is_empty() {
        return Err(CliError::InvalidInput(
            "The error message is empty".to_string(),
        ));
    }
    Ok(message)
}
