//! Theme configuration for `Tagdeck`.
//!
//! Light, airy palette with a sky-blue accent. Values are exposed as CSS
//! custom properties so the stylesheet never hard-codes colors.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PAGE: &str = "#f8fafc";
        /// Card surfaces.
        pub const CARD: &str = "#ffffff";
        /// Player letterbox.
        pub const MEDIA: &str = "rgba(0, 0, 0, 0.05)";
        /// Hover state background.
        pub const HOVER: &str = "#f1f5f9";
        /// Active row background.
        pub const ACTIVE: &str = "#f0f9ff";
        /// Tag chip background.
        pub const CHIP: &str = "#f3f4f6";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#1f2937";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#6b7280";
        /// Placeholder and empty-state text.
        pub const MUTED: &str = "#9ca3af";
        /// Text on accent surfaces.
        pub const ON_ACCENT: &str = "#ffffff";
    }

    /// Accent colors.
    pub mod accent {
        /// Primary accent.
        pub const PRIMARY: &str = "#0ea5e9";
        /// Primary accent for hover states.
        pub const PRIMARY_DIM: &str = "#0284c7";
        /// Headline accent.
        pub const HEADLINE: &str = "#0284c7";
        /// Focus and active ring.
        pub const RING: &str = "#bae6fd";
    }

    /// Border colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "#e5e7eb";
        /// Subtle border for cards.
        pub const SUBTLE: &str = "#f3f4f6";
    }

    /// Shadows.
    pub mod shadow {
        /// Card shadow.
        pub const CARD: &str = "0 1px 2px rgba(0, 0, 0, 0.05)";
        /// Hovered row shadow.
        pub const HOVER: &str = "0 1px 3px rgba(0, 0, 0, 0.1)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Noto Sans KR', sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Extra small text.
        pub const XS: &str = "0.75rem";
        /// Small text.
        pub const SM: &str = "0.875rem";
        /// Large text.
        pub const LG: &str = "1.125rem";
        /// Heading.
        pub const HEADING: &str = "1.5rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Extra small spacing.
    pub const XS: &str = "0.25rem";
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "0.75rem";
    /// Large spacing.
    pub const LG: &str = "1rem";
    /// Extra large spacing.
    pub const XL: &str = "1.5rem";
}

/// Border radius values.
pub mod radius {
    /// Small radius.
    pub const SM: &str = "0.125rem";
    /// Medium radius.
    pub const MD: &str = "0.375rem";
    /// Full/pill radius.
    pub const FULL: &str = "9999px";
}

/// Transition timing.
pub mod animation {
    /// Hover and selection feedback.
    pub const FAST: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Layout breakpoints.
pub mod layout {
    /// Maximum content width.
    pub const MAX_WIDTH: &str = "80rem";
    /// Minimum player and sidebar height.
    pub const PANEL_MIN_HEIGHT: &str = "220px";
    /// Maximum height of the scrollable playlist.
    pub const LIST_MAX_HEIGHT: &str = "60vh";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-page: {bg_page};
  --bg-card: {bg_card};
  --bg-media: {bg_media};
  --bg-hover: {bg_hover};
  --bg-active: {bg_active};
  --bg-chip: {bg_chip};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-muted: {text_muted};
  --text-on-accent: {text_on_accent};

  /* Accent colors */
  --accent-primary: {accent_primary};
  --accent-primary-dim: {accent_primary_dim};
  --accent-headline: {accent_headline};
  --accent-ring: {accent_ring};

  /* Borders and shadows */
  --border-default: {border_default};
  --border-subtle: {border_subtle};
  --shadow-card: {shadow_card};
  --shadow-hover: {shadow_hover};

  /* Typography */
  --font-family: {font_family};
  --font-size-xs: {font_xs};
  --font-size-sm: {font_sm};
  --font-size-lg: {font_lg};
  --font-size-heading: {font_heading};

  /* Spacing */
  --spacing-xs: {spacing_xs};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};
  --spacing-xl: {spacing_xl};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-full: {radius_full};

  /* Transitions */
  --transition-fast: {transition_fast};

  /* Layout */
  --layout-max-width: {max_width};
  --panel-min-height: {panel_min_height};
  --list-max-height: {list_max_height};
}}",
        bg_page = colors::background::PAGE,
        bg_card = colors::background::CARD,
        bg_media = colors::background::MEDIA,
        bg_hover = colors::background::HOVER,
        bg_active = colors::background::ACTIVE,
        bg_chip = colors::background::CHIP,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_muted = colors::text::MUTED,
        text_on_accent = colors::text::ON_ACCENT,
        accent_primary = colors::accent::PRIMARY,
        accent_primary_dim = colors::accent::PRIMARY_DIM,
        accent_headline = colors::accent::HEADLINE,
        accent_ring = colors::accent::RING,
        border_default = colors::border::DEFAULT,
        border_subtle = colors::border::SUBTLE,
        shadow_card = colors::shadow::CARD,
        shadow_hover = colors::shadow::HOVER,
        font_family = typography::FONT_FAMILY,
        font_xs = typography::sizes::XS,
        font_sm = typography::sizes::SM,
        font_lg = typography::sizes::LG,
        font_heading = typography::sizes::HEADING,
        spacing_xs = spacing::XS,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        spacing_xl = spacing::XL,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_full = radius::FULL,
        transition_fast = animation::FAST,
        max_width = layout::MAX_WIDTH,
        panel_min_height = layout::PANEL_MIN_HEIGHT,
        list_max_height = layout::LIST_MAX_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-page: #f8fafc;"));
        assert!(css.contains("--accent-primary"));
        assert!(css.contains("--list-max-height: 60vh;"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PAGE.starts_with('#'));
        assert!(colors::accent::PRIMARY.starts_with('#'));
    }
}
