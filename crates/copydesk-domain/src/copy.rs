//! UX copy generation - requests, responses, and favorites

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UI component the copy is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiComponent {
    /// Action button label
    Button,
    /// Modal body copy
    Modal,
    /// Push/in-app notification
    Notification,
    /// Error message
    Error,
    /// Informational helper text
    Info,
    /// Confirm/cancel dialog
    Dialog,
}

impl UiComponent {
    /// Get the component name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            UiComponent::Button => "button",
            UiComponent::Modal => "modal",
            UiComponent::Notification => "notification",
            UiComponent::Error => "error",
            UiComponent::Info => "info",
            UiComponent::Dialog => "dialog",
        }
    }

    /// Human-readable label interpolated into prompts
    pub fn label(&self) -> &'static str {
        match self {
            UiComponent::Button => "button",
            UiComponent::Modal => "modal",
            UiComponent::Notification => "notification",
            UiComponent::Error => "error message",
            UiComponent::Info => "informational helper text",
            UiComponent::Dialog => "confirm/cancel dialog",
        }
    }

    /// Parse a component from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "button" => Some(UiComponent::Button),
            "modal" => Some(UiComponent::Modal),
            "notification" => Some(UiComponent::Notification),
            "error" => Some(UiComponent::Error),
            "info" => Some(UiComponent::Info),
            "dialog" => Some(UiComponent::Dialog),
            _ => None,
        }
    }
}

impl std::str::FromStr for UiComponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid component: {}", s))
    }
}

/// Tone and manner of the generated copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Warm and approachable
    Friendly,
    /// Formal and polite
    Formal,
    /// Witty and playful
    Funny,
    /// Plain and neutral
    Neutral,
}

impl Tone {
    /// Get the tone name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Funny => "funny",
            Tone::Neutral => "neutral",
        }
    }

    /// Human-readable label interpolated into prompts
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Funny => "witty",
            Tone::Neutral => "neutral",
        }
    }

    /// Parse a tone from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "friendly" => Some(Tone::Friendly),
            "formal" => Some(Tone::Formal),
            "funny" => Some(Tone::Funny),
            "neutral" => Some(Tone::Neutral),
            _ => None,
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tone: {}", s))
    }
}

/// Service domain the product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceDomain {
    /// Food delivery
    Delivery,
    /// E-commerce
    Commerce,
    /// Social networking
    Social,
    /// Banking and fintech
    Finance,
    /// Health and wellness
    Healthcare,
}

impl ServiceDomain {
    /// Get the service name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceDomain::Delivery => "delivery",
            ServiceDomain::Commerce => "commerce",
            ServiceDomain::Social => "social",
            ServiceDomain::Finance => "finance",
            ServiceDomain::Healthcare => "healthcare",
        }
    }

    /// Human-readable label interpolated into prompts
    pub fn label(&self) -> &'static str {
        match self {
            ServiceDomain::Delivery => "food delivery",
            ServiceDomain::Commerce => "e-commerce",
            ServiceDomain::Social => "social networking",
            ServiceDomain::Finance => "finance",
            ServiceDomain::Healthcare => "healthcare",
        }
    }

    /// Parse a service domain from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "delivery" => Some(ServiceDomain::Delivery),
            "commerce" => Some(ServiceDomain::Commerce),
            "social" => Some(ServiceDomain::Social),
            "finance" => Some(ServiceDomain::Finance),
            "healthcare" => Some(ServiceDomain::Healthcare),
            _ => None,
        }
    }
}

impl std::str::FromStr for ServiceDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid service domain: {}", s))
    }
}

/// Request for UX copy suggestions. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRequest {
    /// Which UI component the copy is for
    pub component: UiComponent,

    /// Tone and manner
    pub tone: Tone,

    /// Service domain of the product
    pub service: ServiceDomain,

    /// Free-text description of the situation
    pub detail: String,
}

/// Generated UX copy suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyResponse {
    /// Suggested copy variants, capped at three entries
    pub suggestions: Vec<String>,

    /// Optional free-text commentary from the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CopyResponse {
    /// Fallback when the model output contains no parseable JSON
    pub fn parse_fallback() -> Self {
        Self {
            suggestions: vec![
                "A network error occurred.".to_string(),
                "Please try again.".to_string(),
                "Please try again in a moment.".to_string(),
            ],
            description: None,
        }
    }

    /// Fallback when the parsed output has the wrong shape
    pub fn shape_fallback() -> Self {
        Self {
            suggestions: vec![
                "Copy generation failed.".to_string(),
                "Please try again.".to_string(),
                "Please try again in a moment.".to_string(),
            ],
            description: None,
        }
    }
}

/// A saved copy suggestion together with the request that produced it.
///
/// Owned by client-side state only, never synced externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteCopy {
    /// Unique identifier
    pub id: Uuid,

    /// Component the copy was generated for
    pub component: UiComponent,

    /// Tone of the request
    pub tone: Tone,

    /// Service domain of the request
    pub service: ServiceDomain,

    /// Situation description of the request
    pub detail: String,

    /// The chosen suggestion
    pub suggestion: String,

    /// When the favorite was saved
    pub created_at: DateTime<Utc>,
}

impl FavoriteCopy {
    /// Create a favorite from a request snapshot and one chosen suggestion
    pub fn new(request: &CopyRequest, suggestion: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            component: request.component,
            tone: request.tone,
            service: request.service,
            detail: request.detail.clone(),
            suggestion: suggestion.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_round_trip() {
        for c in [
            UiComponent::Button,
            UiComponent::Modal,
            UiComponent::Notification,
            UiComponent::Error,
            UiComponent::Info,
            UiComponent::Dialog,
        ] {
            assert_eq!(UiComponent::parse(c.as_str()), Some(c));
        }
        assert_eq!(UiComponent::parse("banner"), None);
    }

    #[test]
    fn test_tone_parsing_is_case_insensitive() {
        assert_eq!(Tone::parse("Friendly"), Some(Tone::Friendly));
        assert_eq!(Tone::parse("FORMAL"), Some(Tone::Formal));
        assert_eq!(Tone::parse("sarcastic"), None);
    }

    #[test]
    fn test_fallbacks_have_exactly_three_suggestions() {
        assert_eq!(CopyResponse::parse_fallback().suggestions.len(), 3);
        assert_eq!(CopyResponse::shape_fallback().suggestions.len(), 3);
        assert_ne!(
            CopyResponse::parse_fallback(),
            CopyResponse::shape_fallback()
        );
    }

    #[test]
    fn test_favorite_snapshots_request() {
        let request = CopyRequest {
            component: UiComponent::Button,
            tone: Tone::Friendly,
            service: ServiceDomain::Delivery,
            detail: "order confirmation".to_string(),
        };

        let favorite = FavoriteCopy::new(&request, "Order placed!");
        assert_eq!(favorite.component, UiComponent::Button);
        assert_eq!(favorite.detail, "order confirmation");
        assert_eq!(favorite.suggestion, "Order placed!");
    }

    #[test]
    fn test_favorite_ids_are_unique() {
        let request = CopyRequest {
            component: UiComponent::Modal,
            tone: Tone::Neutral,
            service: ServiceDomain::Finance,
            detail: "session timeout".to_string(),
        };

        let a = FavoriteCopy::new(&request, "x");
        let b = FavoriteCopy::new(&request, "x");
        assert_ne!(a.id, b.id);
    }
}
