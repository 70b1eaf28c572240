//! The concept command - one front-end concept per day.

use crate::cli::ConceptArgs;
use crate::error::Result;
use crate::output::Formatter;
use copydesk_domain::TextGenerator;
use copydesk_engine::Engine;
use copydesk_store::StateStore;

/// Show the daily concept, fetching a fresh one only when today's is not
/// cached or `--refresh` was passed.
pub async fn execute<G>(
    args: &ConceptArgs,
    engine: &Engine<G>,
    store: &mut StateStore,
    formatter: &Formatter,
) -> Result<()>
where
    G: TextGenerator + Send + Sync,
{
    let today = chrono::Local::now().date_naive();

    if !args.refresh {
        if let Some(concept) = store.daily_concept(today) {
            println!("{}", formatter.format_concept(&concept, true));
            return Ok(());
        }
    }

    let concept = engine.daily_concept().await?;
    store.set_daily_concept(&concept, today)?;
    println!("{}", formatter.format_concept(&concept, false));
    Ok(())
}
