//! The theme command - show, set, or toggle the theme preference.

use crate::cli::{ThemeAction, ThemeArgs};
use crate::error::Result;
use crate::output::Formatter;
use copydesk_store::StateStore;

/// Show or change the stored theme.
pub fn execute(args: &ThemeArgs, store: &mut StateStore, formatter: &Formatter) -> Result<()> {
    match &args.action {
        None | Some(ThemeAction::Show) => {
            println!("{}", store.theme().as_str());
        }
        Some(ThemeAction::Set { theme }) => {
            store.set_theme((*theme).into())?;
            println!(
                "{}",
                formatter.success(&format!("Theme set to {}", store.theme().as_str()))
            );
        }
        Some(ThemeAction::Toggle) => {
            let next = store.theme().toggle();
            store.set_theme(next)?;
            println!(
                "{}",
                formatter.success(&format!("Theme set to {}", next.as_str()))
            );
        }
    }
    Ok(())
}
