//! Output formatting for copy, analysis, conversion, and favorites.

use crate::config::OutputFormat;
use colored::Colorize;
use copydesk_domain::{
    ConversionResponse, CopyResponse, ErrorAnalysisResponse, FavoriteCopy, Theme,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Formats results for terminal display.
pub struct Formatter {
    format: OutputFormat,
    color: bool,
    theme: Theme,
}

#[derive(Tabled)]
struct CopyRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Suggestion")]
    suggestion: String,
}

#[derive(Tabled)]
struct FavoriteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Tone")]
    tone: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Suggestion")]
    suggestion: String,
    #[tabled(rename = "Saved")]
    saved: String,
}

impl Formatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color: bool, theme: Theme) -> Self {
        Self {
            format,
            color,
            theme,
        }
    }

    /// Format generated copy suggestions
    pub fn format_copy(&self, response: &CopyResponse) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Quiet => response.suggestions.join("\n"),
            OutputFormat::Table => {
                let rows: Vec<CopyRow> = response
                    .suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, s)| CopyRow {
                        index: i + 1,
                        suggestion: s.clone(),
                    })
                    .collect();

                let mut out = Table::new(rows).with(Style::rounded()).to_string();
                if let Some(description) = &response.description {
                    out.push('\n');
                    out.push_str(&self.dim(description));
                }
                out
            }
        }
    }

    /// Format an error analysis
    pub fn format_analysis(&self, response: &ErrorAnalysisResponse) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Quiet => format!("{}\n{}", response.summary, response.solution),
            OutputFormat::Table => format!(
                "{}\n{}\n\n{}\n{}",
                self.heading("Cause"),
                response.summary,
                self.heading("Fix"),
                response.solution
            ),
        }
    }

    /// Format a conversion result
    pub fn format_conversion(&self, response: &ConversionResponse) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Quiet => response.result.clone(),
            OutputFormat::Table => {
                let mut out = response.result.clone();
                if let Some(explanation) = &response.explanation {
                    out.push('\n');
                    out.push_str(&self.dim(explanation));
                }
                out
            }
        }
    }

    /// Format the daily concept
    pub fn format_concept(&self, concept: &str, cached: bool) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
                "concept": concept,
                "cached": cached,
            }))
            .unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Quiet => concept.to_string(),
            OutputFormat::Table => {
                let source = if cached { "cached" } else { "fresh" };
                format!(
                    "{} {}\n\n{}",
                    self.heading("Today's concept"),
                    self.dim(&format!("({})", source)),
                    concept
                )
            }
        }
    }

    /// Format the favorites list
    pub fn format_favorites(&self, favorites: &[FavoriteCopy]) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(favorites).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Quiet => favorites
                .iter()
                .map(|f| format!("{}\t{}", f.id, f.suggestion))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Table => {
                if favorites.is_empty() {
                    return self.dim("No favorites saved yet.");
                }

                let rows: Vec<FavoriteRow> = favorites
                    .iter()
                    .map(|f| FavoriteRow {
                        id: short_id(&f.id.to_string()),
                        component: f.component.as_str().to_string(),
                        tone: f.tone.as_str().to_string(),
                        service: f.service.as_str().to_string(),
                        suggestion: f.suggestion.clone(),
                        saved: f.created_at.format("%Y-%m-%d").to_string(),
                    })
                    .collect();

                Table::new(rows).with(Style::rounded()).to_string()
            }
        }
    }

    /// Format a success message
    pub fn success(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "✓".green(), message)
        } else {
            format!("✓ {}", message)
        }
    }

    /// Format an error message
    pub fn error(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "✗".red(), message.red())
        } else {
            format!("✗ {}", message)
        }
    }

    /// Format an informational message
    pub fn info(&self, message: &str) -> String {
        if self.color {
            let marker = match self.theme {
                Theme::Light => "ℹ".blue(),
                Theme::Dark => "ℹ".cyan(),
            };
            format!("{} {}", marker, message)
        } else {
            format!("ℹ {}", message)
        }
    }

    /// Format a warning message
    pub fn warning(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "⚠".yellow(), message.yellow())
        } else {
            format!("⚠ {}", message)
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            match self.theme {
                Theme::Light => text.blue().bold().to_string(),
                Theme::Dark => text.cyan().bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// First eight characters of a UUID, enough to disambiguate in a short list
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use copydesk_domain::{CopyRequest, ServiceDomain, Tone, UiComponent};

    fn plain(format: OutputFormat) -> Formatter {
        Formatter::new(format, false, Theme::Light)
    }

    #[test]
    fn test_copy_quiet_is_one_suggestion_per_line() {
        let response = CopyResponse {
            suggestions: vec!["One".to_string(), "Two".to_string(), "Three".to_string()],
            description: None,
        };
        assert_eq!(
            plain(OutputFormat::Quiet).format_copy(&response),
            "One\nTwo\nThree"
        );
    }

    #[test]
    fn test_copy_table_numbers_suggestions() {
        let response = CopyResponse {
            suggestions: vec!["Buy now".to_string()],
            description: None,
        };
        let out = plain(OutputFormat::Table).format_copy(&response);
        assert!(out.contains("Buy now"));
        assert!(out.contains('1'));
    }

    #[test]
    fn test_analysis_json_round_trips() {
        let response = ErrorAnalysisResponse {
            summary: "x is undefined".to_string(),
            solution: "Check the variable".to_string(),
        };
        let out = plain(OutputFormat::Json).format_analysis(&response);
        let parsed: ErrorAnalysisResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_empty_favorites_message() {
        let out = plain(OutputFormat::Table).format_favorites(&[]);
        assert!(out.contains("No favorites"));
    }

    #[test]
    fn test_favorites_table_shows_short_id() {
        let request = CopyRequest {
            component: UiComponent::Button,
            tone: Tone::Friendly,
            service: ServiceDomain::Delivery,
            detail: "order".to_string(),
        };
        let favorite = FavoriteCopy::new(&request, "Order placed!");
        let short = short_id(&favorite.id.to_string());

        let out = plain(OutputFormat::Table).format_favorites(&[favorite]);
        assert!(out.contains(&short));
        assert!(out.contains("Order placed!"));
    }

    #[test]
    fn test_uncolored_markers() {
        let f = plain(OutputFormat::Table);
        assert_eq!(f.success("saved"), "✓ saved");
        assert_eq!(f.error("failed"), "✗ failed");
    }
}
