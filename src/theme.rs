//! Theme system for the visualizer
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/slate/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// An RGBA color, stored as components and converted to packed ARGB for
/// the softbuffer pixel format at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML (colors as hex strings)
#[derive(Debug, Clone, Deserialize)]
struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
    pub mode_bar: ModeBarThemeData,
    pub table: TableThemeData,
    pub charts: ChartThemeData,
}

#[derive(Debug, Clone, Deserialize)]
struct UiThemeData {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ModeBarThemeData {
    pub background: String,
    pub button: String,
    pub button_active: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TableThemeData {
    pub header_foreground: String,
    pub grid: String,
    pub scrollbar_track: String,
    pub scrollbar_thumb: String,
    pub scrollbar_thumb_border: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartThemeData {
    pub outline: String,
    pub axis: String,
    pub label: String,
    pub pie_palette: Vec<String>,
    pub bar_palette: Vec<String>,
}

/// General UI colors
#[derive(Debug, Clone)]
pub struct UiTheme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub title: Color,
}

/// Mode switcher bar colors
#[derive(Debug, Clone)]
pub struct ModeBarTheme {
    pub background: Color,
    pub button: Color,
    pub button_active: Color,
    pub foreground: Color,
}

/// Table grid colors
#[derive(Debug, Clone)]
pub struct TableTheme {
    pub header_foreground: Color,
    pub grid: Color,
    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
    pub scrollbar_thumb_border: Color,
}

/// Chart colors and palettes
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub outline: Color,
    pub axis: Color,
    pub label: Color,
    /// Slice fill colors, cycled by rank
    pub pie_palette: Vec<Color>,
    /// Bar fill colors, cycled by position
    pub bar_palette: Vec<Color>,
}

impl ChartTheme {
    /// Color for the pie slice at the given rank, cycling the palette
    pub fn pie_color(&self, rank: usize) -> Color {
        self.pie_palette[rank % self.pie_palette.len()]
    }

    /// Color for the bar at the given position, cycling the palette
    pub fn bar_color(&self, index: usize) -> Color {
        self.bar_palette[index % self.bar_palette.len()]
    }
}

/// Fully resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub ui: UiTheme,
    pub mode_bar: ModeBarTheme,
    pub table: TableTheme,
    pub charts: ChartTheme,
}

impl Theme {
    /// Parse a theme from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;

        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }

        let _ = data.description;

        let parse_palette = |strings: &[String], what: &str| -> Result<Vec<Color>, String> {
            if strings.is_empty() {
                return Err(format!("{} palette must not be empty", what));
            }
            strings.iter().map(|s| Color::from_hex(s)).collect()
        };

        Ok(Theme {
            name: data.name,
            ui: UiTheme {
                background: Color::from_hex(&data.ui.background)?,
                foreground: Color::from_hex(&data.ui.foreground)?,
                muted: Color::from_hex(&data.ui.muted)?,
                title: Color::from_hex(&data.ui.title)?,
            },
            mode_bar: ModeBarTheme {
                background: Color::from_hex(&data.mode_bar.background)?,
                button: Color::from_hex(&data.mode_bar.button)?,
                button_active: Color::from_hex(&data.mode_bar.button_active)?,
                foreground: Color::from_hex(&data.mode_bar.foreground)?,
            },
            table: TableTheme {
                header_foreground: Color::from_hex(&data.table.header_foreground)?,
                grid: Color::from_hex(&data.table.grid)?,
                scrollbar_track: Color::from_hex(&data.table.scrollbar_track)?,
                scrollbar_thumb: Color::from_hex(&data.table.scrollbar_thumb)?,
                scrollbar_thumb_border: Color::from_hex(&data.table.scrollbar_thumb_border)?,
            },
            charts: ChartTheme {
                outline: Color::from_hex(&data.charts.outline)?,
                axis: Color::from_hex(&data.charts.axis)?,
                label: Color::from_hex(&data.charts.label)?,
                pie_palette: parse_palette(&data.charts.pie_palette, "pie")?,
                bar_palette: parse_palette(&data.charts.bar_palette, "bar")?,
            },
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        // The embedded dark theme is validated by tests; parsing it cannot
        // fail for a released binary.
        Theme::from_yaml(DARK_YAML).expect("embedded dark theme must parse")
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
///
/// Searches in order:
/// 1. `~/.config/slate/themes/{id}.yaml`
/// 2. Embedded builtin themes
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(themes_dir) = crate::config_paths::user_themes_dir() {
        let user_path = themes_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    BUILTIN_THEMES
        .iter()
        .find(|t| t.id == id)
        .map(|t| Theme::from_yaml(t.yaml))
        .unwrap_or_else(|| Err(format!("Unknown theme: {}", id)))
}
