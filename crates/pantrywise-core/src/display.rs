//! Display attributes for domain enums.
//!
//! Screens colour and label things by status, category, priority and so on.
//! Each mapping is a lookup table on the enum itself, so there is exactly
//! one place that decides that "expired" is red.

use serde::{Deserialize, Serialize};

use crate::dose::{ComplianceBand, DoseCondition};
use crate::item::{Category, StatusKind};
use crate::notification::NotificationKind;
use crate::shopping::Priority;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
}

/// Semantic colour slot, resolved against a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Brand colour.
    Primary,
    /// Good state.
    Success,
    /// Needs attention.
    Warning,
    /// Bad state.
    Error,
}

/// Colour palette as `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: &'static str,
    /// Card surface.
    pub surface: &'static str,
    /// Brand colour.
    pub primary: &'static str,
    /// Body text.
    pub text: &'static str,
    /// Secondary text.
    pub text_muted: &'static str,
    /// Dividers and outlines.
    pub border: &'static str,
    /// Good state.
    pub success: &'static str,
    /// Needs attention.
    pub warning: &'static str,
    /// Bad state.
    pub error: &'static str,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: "#93B1A6",
            surface: "#FFFFFF",
            primary: "#183D3D",
            text: "#183D3D",
            text_muted: "#5C8374",
            border: "#E0E0E0",
            success: "#4CAF50",
            warning: "#FF9800",
            error: "#F44336",
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: "#040D12",
            surface: "#183D3D",
            primary: "#5C8374",
            text: "#93B1A6",
            text_muted: "#93B1A6",
            border: "#2A4A4A",
            success: "#4CAF50",
            warning: "#FF9800",
            error: "#F44336",
        }
    }

    /// Palette for a theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Resolve a colour token.
    #[must_use]
    pub const fn resolve(&self, token: ColorToken) -> &'static str {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
        }
    }
}

impl StatusKind {
    /// Colour of the status badge and progress bar.
    #[must_use]
    pub const fn color(&self) -> ColorToken {
        match self {
            Self::Fresh => ColorToken::Success,
            Self::Expiring => ColorToken::Warning,
            Self::Expired => ColorToken::Error,
        }
    }
}

impl Priority {
    /// Colour of the priority badge.
    #[must_use]
    pub const fn color(&self) -> ColorToken {
        match self {
            Self::High => ColorToken::Error,
            Self::Medium => ColorToken::Warning,
            Self::Low => ColorToken::Success,
        }
    }
}

impl ComplianceBand {
    /// Colour of the compliance bar.
    #[must_use]
    pub const fn color(&self) -> ColorToken {
        match self {
            Self::Complete => ColorToken::Success,
            Self::Good => ColorToken::Primary,
            Self::Partial => ColorToken::Warning,
            Self::Poor => ColorToken::Error,
        }
    }
}

impl Category {
    /// Human-readable display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Medicine => "Medicine",
            Self::Cosmetics => "Cosmetics",
            Self::Cleaning => "Cleaning",
            Self::Food => "Food",
            Self::Batteries => "Batteries",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }

    /// Icon for this category.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Medicine => "💊",
            Self::Cosmetics => "🧴",
            Self::Cleaning => "🧽",
            Self::Food => "🥫",
            Self::Batteries => "🔋",
            Self::Other | Self::Custom(_) => "📦",
        }
    }
}

impl DoseCondition {
    /// Human-readable label.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WithFood => "With food",
            Self::EmptyStomach => "Empty stomach",
        }
    }

    /// Icon for this condition.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::WithFood => "🍽️",
            Self::EmptyStomach => "⏰",
        }
    }
}

impl NotificationKind {
    /// Icon name for this kind.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Expiry | Self::Expired => "alert-triangle",
            Self::Medicine => "pill",
            Self::Restock => "shopping-bag",
        }
    }

    /// Accent colour for this kind.
    #[must_use]
    pub const fn color(&self) -> ColorToken {
        match self {
            Self::Expiry => ColorToken::Warning,
            Self::Expired => ColorToken::Error,
            Self::Medicine => ColorToken::Success,
            Self::Restock => ColorToken::Primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_resolve() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(palette.resolve(StatusKind::Fresh.color()), "#4CAF50");
        assert_eq!(palette.resolve(StatusKind::Expiring.color()), "#FF9800");
        assert_eq!(palette.resolve(StatusKind::Expired.color()), "#F44336");
    }

    #[test]
    fn test_primary_differs_by_theme() {
        assert_eq!(Palette::light().resolve(ColorToken::Primary), "#183D3D");
        assert_eq!(Palette::dark().resolve(ColorToken::Primary), "#5C8374");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Medicine.display_name(), "Medicine");
        assert_eq!(Category::Custom("Garden".to_string()).display_name(), "Garden");
        assert_eq!(Category::Custom("Garden".to_string()).icon(), "📦");
    }

    #[test]
    fn test_priority_and_band_colors() {
        assert_eq!(Priority::High.color(), ColorToken::Error);
        assert_eq!(Priority::Low.color(), ColorToken::Success);
        assert_eq!(ComplianceBand::Good.color(), ColorToken::Primary);
        assert_eq!(NotificationKind::Expired.color(), ColorToken::Error);
        assert_eq!(DoseCondition::EmptyStomach.display_name(), "Empty stomach");
    }
}
