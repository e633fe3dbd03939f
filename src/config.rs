//! Game configuration, loaded from the bundled `assets/game.json`.

use crate::model::{NavTarget, TargetKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Most badges the board has room for.
pub const MAX_TARGETS: usize = 6;

const BUNDLED: &str = include_str!("../assets/game.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate target key `{0}`")]
    DuplicateKey(String),
    #[error("section target `{0}` has no sectionId")]
    MissingSection(String),
    #[error("link target `{0}` has no href")]
    MissingHref(String),
    #[error("step interval must be positive")]
    ZeroStep,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub step_ms: f64,
    /// Floor applied to `step_ms` when reduced motion is requested.
    pub reduced_motion_step_ms: f64,
    pub countdown_secs: u32,
    pub award: u32,
    pub exit_delay_ms: i32,
    /// Largest frame delta fed to the step accumulator.
    pub max_frame_ms: f64,
    pub high_score_key: String,
    pub targets: Vec<NavTarget>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_ms: 120.0,
            reduced_motion_step_ms: 160.0,
            countdown_secs: 3,
            award: 10,
            exit_delay_ms: 140,
            max_frame_ms: 250.0,
            high_score_key: "snake_high".into(),
            targets: default_targets(),
        }
    }
}

fn section(key: &str, label: &str, icon: &str) -> NavTarget {
    NavTarget {
        key: key.into(),
        label: label.into(),
        icon: icon.into(),
        kind: TargetKind::Section,
        section_id: Some(key.into()),
        href: None,
    }
}

fn link(key: &str, label: &str, icon: &str, href: &str) -> NavTarget {
    NavTarget {
        key: key.into(),
        label: label.into(),
        icon: icon.into(),
        kind: TargetKind::Link,
        section_id: None,
        href: Some(href.into()),
    }
}

/// The page's own sections plus the outbound links.
fn default_targets() -> Vec<NavTarget> {
    vec![
        section("about", "About", "👤"),
        section("projects", "Projects", "🛠️"),
        section("contact", "Contact", "✉️"),
        link("github", "GitHub", "🐱", "https://github.com/lemanrza"),
        link("resume", "Resume", "📄", "/resume.pdf"),
    ]
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The bundled config, or defaults if it fails to load.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{e}; using built-in defaults");
                Self::default()
            }
        }
    }

    /// Checks targets and timing, truncating the target list to `MAX_TARGETS`.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if !(self.step_ms > 0.0) {
            return Err(ConfigError::ZeroStep);
        }
        if self.targets.len() > MAX_TARGETS {
            log::warn!(
                "{} targets configured, only the first {} are used",
                self.targets.len(),
                MAX_TARGETS
            );
            self.targets.truncate(MAX_TARGETS);
        }
        let mut seen = HashSet::new();
        for t in &self.targets {
            if !seen.insert(t.key.as_str()) {
                return Err(ConfigError::DuplicateKey(t.key.clone()));
            }
            match t.kind {
                TargetKind::Section if t.section_id.is_none() => {
                    return Err(ConfigError::MissingSection(t.key.clone()));
                }
                TargetKind::Link if t.href.is_none() => {
                    return Err(ConfigError::MissingHref(t.key.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn step_interval(&self, reduced_motion: bool) -> f64 {
        if reduced_motion {
            self.step_ms.max(self.reduced_motion_step_ms)
        } else {
            self.step_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let cfg = GameConfig::from_json(BUNDLED).unwrap();
        assert_eq!(cfg.step_ms, 120.0);
        assert_eq!(cfg.exit_delay_ms, 140);
        assert_eq!(cfg.high_score_key, "snake_high");
        assert_eq!(cfg.targets.len(), 5);
        assert_eq!(cfg.targets[0].section_id.as_deref(), Some("about"));
        assert_eq!(cfg.targets[3].kind, TargetKind::Link);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = GameConfig::from_json(r#"{ "stepMs": 90 }"#).unwrap();
        assert_eq!(cfg.step_ms, 90.0);
        assert_eq!(cfg.award, 10);
        assert_eq!(cfg.countdown_secs, 3);
        assert_eq!(cfg.targets, GameConfig::default().targets);
    }

    #[test]
    fn defaults_match_the_bundled_targets() {
        let bundled = GameConfig::from_json(BUNDLED).unwrap();
        let mut fallback = GameConfig::default();
        assert!(fallback.validate().is_ok());
        assert_eq!(fallback.targets, bundled.targets);
    }

    #[test]
    fn fallback_config_lays_out_every_badge() {
        use crate::model::{Board, GridDimensions};
        use crate::state::layout::layout_badges;

        let cfg = GameConfig::default();
        let mut board = Board::new(GridDimensions::default());
        board.badges = layout_badges(&cfg.targets, board.dims);
        assert_eq!(board.badges.len(), 5);
        assert!(board.badges.iter().all(|b| b.target.intent().is_some()));
    }

    #[test]
    fn reduced_motion_raises_interval() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.step_interval(false), 120.0);
        assert_eq!(cfg.step_interval(true), 160.0);
        let slow = GameConfig {
            step_ms: 200.0,
            ..GameConfig::default()
        };
        assert_eq!(slow.step_interval(true), 200.0);
    }

    #[test]
    fn rejects_bad_targets() {
        let dup = r#"{ "targets": [
            { "key": "a", "label": "A", "icon": "", "kind": "section", "sectionId": "a" },
            { "key": "a", "label": "B", "icon": "", "kind": "section", "sectionId": "b" }
        ] }"#;
        assert!(matches!(
            GameConfig::from_json(dup),
            Err(ConfigError::DuplicateKey(k)) if k == "a"
        ));

        let no_href = r#"{ "targets": [
            { "key": "gh", "label": "GitHub", "icon": "", "kind": "link" }
        ] }"#;
        assert!(matches!(
            GameConfig::from_json(no_href),
            Err(ConfigError::MissingHref(_))
        ));

        assert!(matches!(
            GameConfig::from_json(r#"{ "stepMs": 0 }"#),
            Err(ConfigError::ZeroStep)
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn extra_targets_are_truncated() {
        let targets: Vec<String> = (0..8)
            .map(|i| {
                format!(
                    r#"{{ "key": "t{i}", "label": "T", "icon": "", "kind": "section", "sectionId": "s{i}" }}"#
                )
            })
            .collect();
        let raw = format!(r#"{{ "targets": [{}] }}"#, targets.join(","));
        let cfg = GameConfig::from_json(&raw).unwrap();
        assert_eq!(cfg.targets.len(), MAX_TARGETS);
        assert_eq!(cfg.targets[5].key, "t5");
    }
}
