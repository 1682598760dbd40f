//! User configuration — scroll tuning, keybindings, and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/tide-scroll/config.toml` (default
//! `~/.config/tide-scroll/config.toml`).  Loading is lenient: a bad line is
//! logged and skipped, and an out-of-range scroll setting falls back to its
//! default.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::scroll::ScrollConfig;
use crate::error::ConfigError;

// ───────────────────────────────────────── actions ───────────

/// Keyboard actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleDebug,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for serialisation and the help line).
    pub const ALL: &[Action] = &[
        Action::LineUp,
        Action::LineDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::ToggleDebug,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::LineUp => "line_up",
            Action::LineDown => "line_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::ToggleDebug => "toggle_debug",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Display / config-file form, e.g. `"Ctrl+c"`, `"PageDown"`, `"j"`.
    pub fn to_config_string(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"PageUp"`, `"k"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "esc" | "escape" => KeyCode::Esc,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Controller tuning (speed, smoothing, settle threshold).
    pub scroll: ScrollConfig,
    /// Interval between animation frames while the controller is moving.
    pub frame_ms: u64,
    /// Virtual pixels per terminal row.
    pub row_height: f64,
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            frame_ms: 16,
            row_height: 10.0,
            bindings: Self::default_bindings(),
        }
    }
}

impl AppConfig {
    /// Accepted frame interval, in milliseconds.
    pub const FRAME_MS_RANGE: (u64, u64) = (4, 100);

    /// Set the frame interval, clamped into [`Self::FRAME_MS_RANGE`].
    pub fn set_frame_ms(&mut self, ms: u64) {
        let (lo, hi) = Self::FRAME_MS_RANGE;
        self.frame_ms = ms.clamp(lo, hi);
    }

    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use KeyCode::{Char, Down, End, Esc, Home, Up};
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Action::LineUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(Action::LineDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(
            Action::PageDown,
            vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)],
        );
        m.insert(Action::Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        // Terminals disagree on whether `G` carries SHIFT.
        m.insert(
            Action::Bottom,
            vec![
                KeyBind::new(End, n),
                KeyBind::new(Char('G'), n),
                KeyBind::new(Char('G'), KeyModifiers::SHIFT),
            ],
        );
        m.insert(Action::ToggleDebug, vec![KeyBind::new(Char('d'), n)]);
        m.insert(Action::Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action bound to a key event.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        Action::ALL.iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|binds| binds.iter().any(|b| b.matches(event)))
        })
    }

    /// First binding of an action, for the status bar.
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].to_config_string(),
            _ => "?".into(),
        }
    }

    /// Check every numeric setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scroll.validate()?;
        if self.frame_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval(self.frame_ms));
        }
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(ConfigError::InvalidRowHeight(self.row_height));
        }
        Ok(())
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&path, self.serialise())
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Parse the key-value format.  Invalid entries are logged and ignored.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if let Err(e) = config.apply_entry(key, value) {
                tracing::warn!("config: {e}");
            }
        }

        let defaults = ScrollConfig::default();
        let mut scroll = config.scroll;
        let valid = |patch: ScrollConfig| patch.validate().is_ok();
        if !valid(ScrollConfig { speed: scroll.speed, ..defaults }) {
            tracing::warn!(speed = scroll.speed, "config: speed out of range, using default");
            scroll.speed = defaults.speed;
        }
        if !valid(ScrollConfig { smoothing: scroll.smoothing, ..defaults }) {
            tracing::warn!(smoothing = scroll.smoothing, "config: smoothing out of range, using default");
            scroll.smoothing = defaults.smoothing;
        }
        if !valid(ScrollConfig { threshold: scroll.threshold, ..defaults }) {
            tracing::warn!(threshold = scroll.threshold, "config: threshold out of range, using default");
            scroll.threshold = defaults.threshold;
        }
        config.scroll = scroll;
        if config.frame_ms == 0 {
            config.frame_ms = Self::default().frame_ms;
        }
        if !(config.row_height.is_finite() && config.row_height > 0.0) {
            config.row_height = Self::default().row_height;
        }

        config
    }

    fn apply_entry(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parse_err = || ConfigError::Parse {
            key: key.to_string(),
            value: value.to_string(),
        };
        let number = || value.parse::<f64>().map_err(|_| parse_err());

        match key {
            "speed" => self.scroll.speed = number()?,
            "smoothing" => self.scroll.smoothing = number()?,
            "threshold" => self.scroll.threshold = number()?,
            "row_height" => self.row_height = number()?,
            "frame_ms" => self.set_frame_ms(value.parse::<u64>().map_err(|_| parse_err())?),
            _ => {
                let Some(action) = Action::from_config_key(key) else {
                    return Err(parse_err());
                };
                let parsed: Vec<KeyBind> = value
                    .split(',')
                    .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                    .collect();
                if parsed.is_empty() {
                    return Err(parse_err());
                }
                self.bindings.insert(action, parsed);
            }
        }
        Ok(())
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# tide-scroll configuration".to_string(),
            String::new(),
            "# Scrolling".to_string(),
            format!("speed = {}", self.scroll.speed),
            format!("smoothing = {}", self.scroll.smoothing),
            format!("threshold = {}", self.scroll.threshold),
            format!("frame_ms = {}", self.frame_ms),
            format!("row_height = {}", self.row_height),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/tide-scroll/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("tide-scroll").join("config.toml")
}
