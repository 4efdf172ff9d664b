use serde::{Deserialize, Serialize};

/// Color theme for the TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All color definitions for a theme
///
/// Seven slots, nothing more: every rendered element derives its style from
/// one of these, so swapping the theme repaints the whole screen on the
/// next draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub input_bg: Color,
    pub card_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub button_bg: Color,
    pub button_text: Color,
}

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    /// Get the dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x0f1729),
                input_bg: Color::rgb(0x1e293a),
                card_bg: Color::rgb(0x1f1f1f),
                text: Color::rgb(0xffffff),
                muted: Color::rgb(0x94a3b8),
                button_bg: Color::rgb(0x334da6),
                button_text: Color::rgb(0xffffff),
            },
        }
    }

    /// Get the light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xffffff),
                input_bg: Color::rgb(0xf2f2f2),
                card_bg: Color::rgb(0xfafafa),
                text: Color::rgb(0x0f1729),
                muted: Color::rgb(0x595959),
                button_bg: Color::rgb(0x1f80e6),
                button_text: Color::rgb(0xffffff),
            },
        }
    }

    /// Pick a theme by the dark flag
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Host dark-mode signal. Terminals rarely expose a real night-mode flag,
/// so a probe answers None when it cannot tell.
pub trait HostThemeProbe {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reads the COLORFGBG hint some terminals export ("<fg>;<bg>", background
/// index last). ANSI backgrounds 0-6 and 8 are the dark half of the palette.
pub struct ColorFgBgProbe;

impl HostThemeProbe for ColorFgBgProbe {
    fn prefers_dark(&self) -> Option<bool> {
        let value = std::env::var("COLORFGBG").ok()?;
        let bg: u8 = value.split(';').next_back()?.parse().ok()?;
        Some(bg <= 6 || bg == 8)
    }
}

/// Fallback for hosts that expose no theme signal at all
pub struct NoProbe;

impl HostThemeProbe for NoProbe {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// Detect whether the host prefers dark mode
///
/// Never fails: when no probe can answer, dark wins, because who uses light
/// theme in a terminal?
pub fn detect_dark() -> bool {
    detect_with(&[&ColorFgBgProbe, &NoProbe])
}

fn detect_with(probes: &[&dyn HostThemeProbe]) -> bool {
    probes
        .iter()
        .find_map(|probe| probe.prefers_dark())
        .unwrap_or(true)
}
