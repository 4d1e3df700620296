// Light/dark palettes, resolved from the page's ambient theme flag

use crate::types::DecisionLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    // Read the page's `data-theme` attribute at render time. Never cached:
    // the renderer asks again on every repaint so a theme toggle between
    // frames takes effect on the next one. Anything that isn't explicitly
    // "light" (including a missing attribute) is dark.
    pub fn resolve() -> Self {
        let flag = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|root| root.get_attribute("data-theme"));
        Self::from_flag(flag.as_deref())
    }

    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

// Region fill/border pairs per theme. Same neon hues in both themes; light
// mode just runs them more opaque against the brighter page background.
pub struct RegionColors {
    pub fill: &'static str,
    pub border: &'static str,
}

// Marker color for a point the engine labeled with something this build
// doesn't recognize.
pub const FALLBACK_DOT: &str = "#00e5ff";

pub fn region_colors(theme: Theme, label: DecisionLabel) -> RegionColors {
    match theme {
        Theme::Dark => match label {
            DecisionLabel::Approve => RegionColors {
                fill: "rgba(0, 255, 204, 0.1)",
                border: "rgba(0, 255, 204, 0.4)",
            },
            DecisionLabel::Abstain => RegionColors {
                fill: "rgba(189, 0, 255, 0.1)",
                border: "rgba(189, 0, 255, 0.4)",
            },
            DecisionLabel::StepUpAuth => RegionColors {
                fill: "rgba(255, 170, 0, 0.1)",
                border: "rgba(255, 170, 0, 0.4)",
            },
            DecisionLabel::EscalateInvest => RegionColors {
                fill: "rgba(255, 51, 102, 0.1)",
                border: "rgba(255, 51, 102, 0.4)",
            },
            DecisionLabel::Decline => RegionColors {
                fill: "rgba(255, 0, 51, 0.1)",
                border: "rgba(255, 0, 51, 0.4)",
            },
        },
        Theme::Light => match label {
            DecisionLabel::Approve => RegionColors {
                fill: "rgba(0, 255, 204, 0.15)",
                border: "rgba(0, 255, 204, 0.6)",
            },
            DecisionLabel::Abstain => RegionColors {
                fill: "rgba(189, 0, 255, 0.15)",
                border: "rgba(189, 0, 255, 0.6)",
            },
            DecisionLabel::StepUpAuth => RegionColors {
                fill: "rgba(255, 170, 0, 0.15)",
                border: "rgba(255, 170, 0, 0.6)",
            },
            DecisionLabel::EscalateInvest => RegionColors {
                fill: "rgba(255, 51, 102, 0.15)",
                border: "rgba(255, 51, 102, 0.6)",
            },
            DecisionLabel::Decline => RegionColors {
                fill: "rgba(255, 0, 51, 0.15)",
                border: "rgba(255, 0, 51, 0.6)",
            },
        },
    }
}

pub fn dot_color(label: Option<DecisionLabel>) -> &'static str {
    match label {
        Some(DecisionLabel::Approve) => "#00ffcc",
        Some(DecisionLabel::Abstain) => "#bd00ff",
        Some(DecisionLabel::StepUpAuth) => "#ffaa00",
        Some(DecisionLabel::EscalateInvest) => "#ff3366",
        Some(DecisionLabel::Decline) => "#ff0033",
        None => FALLBACK_DOT,
    }
}

pub fn text_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(255,255,255,0.8)",
        Theme::Light => "rgba(0,0,0,0.8)",
    }
}

pub fn grid_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(255,255,255,0.15)",
        Theme::Light => "rgba(0,0,0,0.15)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_foreign_flag_defaults_to_dark() {
        assert_eq!(Theme::from_flag(None), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("light")), Theme::Light);
    }

    #[test]
    fn unknown_decision_gets_the_fallback_marker() {
        assert_eq!(dot_color(None), FALLBACK_DOT);
        assert_ne!(dot_color(Some(DecisionLabel::Approve)), FALLBACK_DOT);
    }
}
