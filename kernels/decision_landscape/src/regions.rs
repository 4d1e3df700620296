// Static partition of the risk × uncertainty plane into decision regions

use crate::types::{
    DecisionLabel, RISK_MAX, RISK_MIN, T_AUTH, T_DECLINE, T_ESCALATE, UNC_MAX, UNC_MIN,
    U_THRESHOLD,
};

// ============================================================================
// REGION GEOMETRY
// ============================================================================

// One axis-aligned rectangle in data space.
//
// Membership is half-open: a point belongs if risk ∈ [risk_min, risk_max)
// and uncertainty ∈ [unc_min, unc_max), so rects that share an edge never
// both claim it: the boundary goes to the higher-risk / higher-uncertainty
// side. The outer plot edges (risk = RISK_MAX, unc = UNC_MAX) are closed so
// the rects still cover the full rectangle of valid inputs.
#[derive(Debug, Clone, Copy)]
pub struct RegionRect {
    pub risk_min: f64,
    pub risk_max: f64,
    pub unc_min: f64,
    pub unc_max: f64,
}

impl RegionRect {
    pub fn contains(&self, risk: f64, unc: f64) -> bool {
        let risk_ok = risk >= self.risk_min
            && (risk < self.risk_max || (self.risk_max == RISK_MAX && risk == RISK_MAX));
        let unc_ok = unc >= self.unc_min
            && (unc < self.unc_max || (self.unc_max == UNC_MAX && unc >= UNC_MAX));
        risk_ok && unc_ok
    }
}

// A decision region: one label, one or more rectangles.
//
// STEP_UP_AUTH is the only non-convex region (a full-height band for
// medium risk plus a low-uncertainty strip under ESCALATE_INVEST), so a
// region owns a list of rects rather than exactly one, so the renderer never
// has to special-case it.
#[derive(Debug, Clone)]
pub struct Region {
    pub label: DecisionLabel,
    pub rects: Vec<RegionRect>,
}

impl Region {
    pub fn contains(&self, risk: f64, unc: f64) -> bool {
        self.rects.iter().any(|r| r.contains(risk, unc))
    }
}

fn rect(risk_min: f64, risk_max: f64, unc_min: f64, unc_max: f64) -> RegionRect {
    RegionRect { risk_min, risk_max, unc_min, unc_max }
}

// Derive the five regions from the four thresholds. Together the rects
// tile [RISK_MIN, RISK_MAX] × [UNC_MIN, UNC_MAX] with no overlap.
pub fn region_model() -> Vec<Region> {
    vec![
        // APPROVE: risk < T_AUTH, uncertainty < U_THRESHOLD
        Region {
            label: DecisionLabel::Approve,
            rects: vec![rect(RISK_MIN, T_AUTH, UNC_MIN, U_THRESHOLD)],
        },
        // ABSTAIN: risk < T_AUTH, uncertainty >= U_THRESHOLD
        Region {
            label: DecisionLabel::Abstain,
            rects: vec![rect(RISK_MIN, T_AUTH, U_THRESHOLD, UNC_MAX)],
        },
        // STEP_UP_AUTH: T_AUTH <= risk < T_ESCALATE at any uncertainty,
        // plus T_ESCALATE <= risk < T_DECLINE when the model is confident
        Region {
            label: DecisionLabel::StepUpAuth,
            rects: vec![
                rect(T_AUTH, T_ESCALATE, UNC_MIN, UNC_MAX),
                rect(T_ESCALATE, T_DECLINE, UNC_MIN, U_THRESHOLD),
            ],
        },
        // ESCALATE_INVEST: risk >= T_ESCALATE, uncertainty >= U_THRESHOLD
        Region {
            label: DecisionLabel::EscalateInvest,
            rects: vec![rect(T_ESCALATE, RISK_MAX, U_THRESHOLD, UNC_MAX)],
        },
        // DECLINE: risk >= T_DECLINE, uncertainty < U_THRESHOLD
        Region {
            label: DecisionLabel::Decline,
            rects: vec![rect(T_DECLINE, RISK_MAX, UNC_MIN, U_THRESHOLD)],
        },
    ]
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

// Classify a point by the same predicates the engine routes on.
//
// Ties break toward the higher-risk / higher-uncertainty region: risk
// exactly at a threshold belongs to the region above it. Classification
// always uses the raw uncertainty; values past the display ceiling are
// clamped for pixel placement only, never here.
pub fn classify(risk: f64, uncertainty: f64) -> DecisionLabel {
    if risk < T_AUTH {
        if uncertainty < U_THRESHOLD {
            DecisionLabel::Approve
        } else {
            DecisionLabel::Abstain
        }
    } else if risk < T_ESCALATE {
        DecisionLabel::StepUpAuth
    } else if uncertainty >= U_THRESHOLD {
        DecisionLabel::EscalateInvest
    } else if risk < T_DECLINE {
        DecisionLabel::StepUpAuth
    } else {
        DecisionLabel::Decline
    }
}
