//! Built-in slider presets, embedded as JSON

use std::fmt;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use draggable_ball::SliderConfig;

const SOURCES: [(&str, &str); 3] = [
    ("Classic", include_str!("../../assets/presets/classic.json")),
    ("Compact", include_str!("../../assets/presets/compact.json")),
    ("Sunset", include_str!("../../assets/presets/sunset.json")),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: SliderConfig,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Parsed presets; falls back to the default configuration if any fails
pub static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| match load_presets() {
    Ok(presets) => {
        tracing::debug!("Loaded {} presets", presets.len());
        presets
    }
    Err(e) => {
        tracing::warn!("Failed to load presets, using defaults: {:#}", e);
        vec![Preset {
            name: "Classic",
            config: SliderConfig::default(),
        }]
    }
});

fn load_presets() -> Result<Vec<Preset>> {
    SOURCES
        .iter()
        .map(|&(name, json)| {
            let config = SliderConfig::from_json(json)
                .with_context(|| format!("Invalid preset '{}'", name))?;
            Ok(Preset { name, config })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_parse() {
        let presets = load_presets().expect("embedded presets are valid");
        assert_eq!(presets.len(), SOURCES.len());
        assert_eq!(presets[0].config.ball_size, 60.0);
    }

    #[test]
    fn test_presets_override_defaults() {
        let presets = load_presets().expect("embedded presets are valid");
        let compact = presets.iter().find(|p| p.name == "Compact").expect("compact preset");
        assert_eq!(compact.config.capsule_width, Some(260.0));
        assert_eq!(compact.config.motion.hint_interval_ms, 3000);
        assert_eq!(compact.config.motion.hint_duration_ms, 1400);
        assert!(!compact.config.top_inner_shadow.show);
    }
}
