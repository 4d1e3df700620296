// Core data model for the decision landscape

// ============================================================================
// DECISION LABELS
// ============================================================================

// The five routing outcomes the decision engine can return
//
// Decision semantics: each label is both a region identity on the landscape
// and the color key for a plotted transaction. The engine routes on a
// risk score (fraud probability) and an uncertainty score (ensemble
// disagreement); the landscape only displays what the engine decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionLabel {
    // Low risk, confident model: let the transaction through
    Approve,

    // Low risk but the ensemble disagrees with itself: hold for review
    Abstain,

    // Medium risk, or high risk the model is sure about but not sure
    // enough to decline outright: challenge the customer
    StepUpAuth,

    // High risk with real model uncertainty: route to an investigator
    EscalateInvest,

    // High risk, confident model: block the transaction
    Decline,
}

impl DecisionLabel {
    // All five labels in landscape drawing order (left-to-right, low
    // uncertainty first where regions stack)
    pub const ALL: [DecisionLabel; 5] = [
        DecisionLabel::Approve,
        DecisionLabel::Abstain,
        DecisionLabel::StepUpAuth,
        DecisionLabel::EscalateInvest,
        DecisionLabel::Decline,
    ];

    // Parse the wire spelling used by the prediction API.
    // Unknown labels are not an error: the caller stores None and the
    // renderer falls back to a neutral marker color.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "APPROVE" => Some(Self::Approve),
            "ABSTAIN" => Some(Self::Abstain),
            "STEP_UP_AUTH" => Some(Self::StepUpAuth),
            "ESCALATE_INVEST" => Some(Self::EscalateInvest),
            "DECLINE" => Some(Self::Decline),
            _ => None,
        }
    }

    // Wire spelling (matches the engine's JSON output)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Abstain => "ABSTAIN",
            Self::StepUpAuth => "STEP_UP_AUTH",
            Self::EscalateInvest => "ESCALATE_INVEST",
            Self::Decline => "DECLINE",
        }
    }
}

// ============================================================================
// PLOTTED POINT
// ============================================================================

// A single evaluated transaction on the landscape
//
// Immutable once created; owned exclusively by the PointStore. `decision`
// is None when the engine sent a label this build doesn't know, in which
// case the dot renders in the fallback color.
#[derive(Debug, Clone, Copy)]
pub struct PlotPoint {
    // Fraud probability in [0, 1]
    pub risk: f64,

    // Bootstrap-ensemble standard deviation; usually in [0, ~0.10] but
    // values above the display ceiling are legal (clamped for drawing only)
    pub uncertainty: f64,

    pub decision: Option<DecisionLabel>,
}

impl PlotPoint {
    pub fn new(risk: f64, uncertainty: f64, decision: Option<DecisionLabel>) -> Self {
        Self { risk, uncertainty, decision }
    }
}

// ============================================================================
// THRESHOLDS AND DATA BOUNDS
// ============================================================================

// Routing thresholds, mirrored from the decision engine's configuration.
// Invariant: 0 < T_AUTH < T_ESCALATE < T_DECLINE < RISK_MAX.
pub const T_AUTH: f64 = 0.30;
pub const T_ESCALATE: f64 = 0.60;
pub const T_DECLINE: f64 = 0.80;
pub const U_THRESHOLD: f64 = 0.02;

// Fixed data-space bounds of the plot.
// X-axis: risk score [0.0, 1.0]
// Y-axis: uncertainty [0.0, 0.10], displayed top=high / bottom=low
pub const RISK_MIN: f64 = 0.0;
pub const RISK_MAX: f64 = 1.0;
pub const UNC_MIN: f64 = 0.0;
pub const UNC_MAX: f64 = 0.10;

// Plot margins in CSS pixels (room for tick labels and axis titles)
pub const MARGIN_TOP: f64 = 16.0;
pub const MARGIN_RIGHT: f64 = 16.0;
pub const MARGIN_BOTTOM: f64 = 44.0;
pub const MARGIN_LEFT: f64 = 54.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_strictly_increase_inside_the_risk_range() {
        assert!(RISK_MIN < T_AUTH);
        assert!(T_AUTH < T_ESCALATE);
        assert!(T_ESCALATE < T_DECLINE);
        assert!(T_DECLINE < RISK_MAX);
        assert!(UNC_MIN < U_THRESHOLD && U_THRESHOLD < UNC_MAX);
    }

    #[test]
    fn label_parse_round_trips() {
        for label in DecisionLabel::ALL {
            assert_eq!(DecisionLabel::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn unknown_label_parses_to_none() {
        assert_eq!(DecisionLabel::parse("MANUAL_REVIEW"), None);
        assert_eq!(DecisionLabel::parse(""), None);
        assert_eq!(DecisionLabel::parse("approve"), None);
    }
}
