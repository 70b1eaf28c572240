//! The copy command - generate UX copy suggestions.

use crate::cli::CopyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use copydesk_domain::{CopyRequest, FavoriteCopy, TextGenerator};
use copydesk_engine::Engine;
use copydesk_store::StateStore;

/// Generate copy suggestions and optionally save one as a favorite.
pub async fn execute<G>(
    args: &CopyArgs,
    engine: &Engine<G>,
    store: &mut StateStore,
    formatter: &Formatter,
) -> Result<()>
where
    G: TextGenerator + Send + Sync,
{
    let request = CopyRequest {
        component: args.component.into(),
        tone: args.tone.into(),
        service: args.service.into(),
        detail: args.detail.clone(),
    };

    let response = engine.generate_copy(&request).await?;
    println!("{}", formatter.format_copy(&response));

    if let Some(n) = args.save {
        let suggestion = n
            .checked_sub(1)
            .and_then(|i| response.suggestions.get(i))
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "--save expects a suggestion number between 1 and {}",
                    response.suggestions.len()
                ))
            })?;

        store.add_favorite(FavoriteCopy::new(&request, suggestion.clone()))?;
        println!("{}", formatter.success(&format!("Saved suggestion {}", n)));
    }

    Ok(())
}
