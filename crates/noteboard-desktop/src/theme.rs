//! Theme configuration for the desktop app

use std::sync::OnceLock;

use noteboard_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    resolve_with_system(mode, || {
        *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
    })
}

fn resolve_with_system(mode: ThemeMode, system_is_dark: impl FnOnce() -> bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System if system_is_dark() => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;

    match Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
    {
        Ok(output) => {
            let is_dark = registry_reports_dark(&String::from_utf8_lossy(&output.stdout));
            tracing::debug!("System theme detected from registry: dark={}", is_dark);
            is_dark
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

/// `AppsUseLightTheme` is `0x0` when apps use the dark theme.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn registry_reports_dark(reg_output: &str) -> bool {
    reg_output
        .lines()
        .filter(|line| line.contains("AppsUseLightTheme"))
        .any(|line| line.split_whitespace().last() == Some("0x0"))
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => {
            let is_dark = String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark");
            tracing::debug!("System theme detected: dark={}", is_dark);
            is_dark
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").map_or_else(
        |_| {
            tracing::debug!("GTK_THEME not set, defaulting to light mode");
            false
        },
        |theme| {
            let is_dark = theme.to_lowercase().contains("dark");
            tracing::debug!("System theme detected from GTK_THEME: dark={}", is_dark);
            is_dark
        },
    )
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f3f4f6",
    bg_tertiary: "#e5e7eb",
    text_primary: "#374151",
    text_secondary: "#4b5563",
    text_muted: "#9ca3af",
    border: "#d1d5db",
    border_light: "#e5e7eb",
    accent: "#3b82f6",
    accent_text: "#ffffff",
    error: "#ef4444",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#111827",
    bg_secondary: "#1f2937",
    bg_tertiary: "#374151",
    text_primary: "#f3f4f6",
    text_secondary: "#d1d5db",
    text_muted: "#6b7280",
    border: "#4b5563",
    border_light: "#374151",
    accent: "#60a5fa",
    accent_text: "#111827",
    error: "#f87171",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_modes_ignore_system_preference() {
        assert_eq!(
            resolve_with_system(ThemeMode::Light, || true),
            ResolvedTheme::Light
        );
        assert_eq!(
            resolve_with_system(ThemeMode::Dark, || false),
            ResolvedTheme::Dark
        );
    }

    #[test]
    fn system_mode_follows_detection() {
        assert_eq!(
            resolve_with_system(ThemeMode::System, || true),
            ResolvedTheme::Dark
        );
        assert_eq!(
            resolve_with_system(ThemeMode::System, || false),
            ResolvedTheme::Light
        );
    }

    #[test]
    fn registry_dark_value_is_detected() {
        let dark = "\r\nHKEY_CURRENT_USER\\SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize\r\n    AppsUseLightTheme    REG_DWORD    0x0\r\n";
        let light = "\r\n    AppsUseLightTheme    REG_DWORD    0x1\r\n";

        assert!(registry_reports_dark(dark));
        assert!(!registry_reports_dark(light));
        assert!(!registry_reports_dark(""));
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_eq!(ResolvedTheme::Light.palette().bg_primary, "#ffffff");
        assert_eq!(ResolvedTheme::Dark.palette().bg_primary, "#111827");
    }
}
