//! The favorites command - list and remove saved copy.

use crate::cli::{FavoritesAction, FavoritesArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use copydesk_domain::FavoriteCopy;
use copydesk_store::StateStore;
use uuid::Uuid;

/// List favorites or remove one by id prefix.
pub fn execute(args: &FavoritesArgs, store: &mut StateStore, formatter: &Formatter) -> Result<()> {
    match &args.action {
        None | Some(FavoritesAction::List) => {
            let favorites = store.favorites();
            println!("{}", formatter.format_favorites(&favorites));
        }
        Some(FavoritesAction::Remove { id }) => {
            let target = find_by_prefix(&store.favorites(), id)?;
            store.remove_favorite(target)?;
            println!("{}", formatter.success("Favorite removed"));
        }
    }
    Ok(())
}

/// Resolve a full id or unique prefix against the stored favorites
fn find_by_prefix(favorites: &[FavoriteCopy], prefix: &str) -> Result<Uuid> {
    let matches: Vec<Uuid> = favorites
        .iter()
        .filter(|f| f.id.to_string().starts_with(prefix))
        .map(|f| f.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::InvalidInput(format!(
            "No favorite matches id '{}'",
            prefix
        ))),
        _ => Err(CliError::InvalidInput(format!(
            "Id '{}' is ambiguous, use more characters",
            prefix
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copydesk_domain::{CopyRequest, ServiceDomain, Tone, UiComponent};

    fn sample(suggestion: &str) -> FavoriteCopy {
        let request = CopyRequest {
            component: UiComponent::Button,
            tone: Tone::Neutral,
            service: ServiceDomain::Commerce,
            detail: "checkout".to_string(),
        };
        FavoriteCopy::new(&request, suggestion)
    }

    #[test]
    fn test_full_id_matches() {
        let favorite = sample("Buy now");
        let id = favorite.id;
        assert_eq!(
            find_by_prefix(&[favorite], &id.to_string()).unwrap(),
            id
        );
    }

    #[test]
    fn test_unique_prefix_matches() {
        let favorite = sample("Buy now");
        let id = favorite.id;
        let prefix: String = id.to_string().chars().take(8).collect();
        assert_eq!(find_by_prefix(&[favorite], &prefix).unwrap(), id);
    }

    #[test]
    fn test_unknown_prefix_is_rejected() {
        assert!(matches!(
            find_by_prefix(&[sample("x")], "zzzzzzzz"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ambiguous_prefix_is_rejected() {
        // Every UUID string starts with an empty prefix
        let favorites = vec![sample("a"), sample("b")];
        assert!(matches!(
            find_by_prefix(&favorites, ""),
            Err(CliError::InvalidInput(_))
        ));
    }
}
