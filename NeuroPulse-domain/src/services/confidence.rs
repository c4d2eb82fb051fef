//! Confidence and explanation for a case assessment.
//!
//! Both are heuristics over which inputs are present, not model outputs.

use std::collections::BTreeMap;

use crate::entities::risk::{CaseFeatures, TrendSummary};
use crate::services::risk::{EXTENDED_EVT_WINDOW_MINUTES, IV_TPA_WINDOW_MINUTES, SUSPECTED_LVO_FAST_SCORE};

const BASE_CONFIDENCE: f64 = 0.5;
const COMPLETENESS_WEIGHT: f64 = 0.3;
const STABILITY_WEIGHT: f64 = 0.2;
const QUALITY_WEIGHT: f64 = 0.3;
const ANOMALY_WEIGHT: f64 = 0.2;

const HEART_RATE_VOLATILITY_LIMIT: f64 = 0.2;
const SYSTOLIC_BP_VOLATILITY_LIMIT: f64 = 0.15;
const SPO2_VOLATILITY_LIMIT: f64 = 0.1;

/// Confidence in `[0, 1]` for an assessment made from these features.
///
/// Rises with the number of inputs present, stable trends and in-range
/// values, and drops slightly while GCS is deteriorating. Trend terms only
/// apply when a trend summary is given.
pub fn prediction_confidence(features: &CaseFeatures, trend: Option<&TrendSummary>) -> f64 {
    let vitals = &features.vitals;
    let mut confidence = BASE_CONFIDENCE;

    let present = [
        vitals.heart_rate_bpm.is_some(),
        vitals.systolic_bp_mmhg.is_some(),
        vitals.spo2_pct.is_some(),
        vitals.gcs_total.is_some(),
        features.fast_score.is_some(),
        features.minutes_since_symptom_onset.is_some(),
    ]
    .into_iter()
    .filter(|&present| present)
    .count();
    confidence += present as f64 * 0.1 * COMPLETENESS_WEIGHT;

    if let Some(trend) = trend {
        let volatile = [
            (trend.heart_rate_volatility, HEART_RATE_VOLATILITY_LIMIT),
            (trend.systolic_bp_volatility, SYSTOLIC_BP_VOLATILITY_LIMIT),
            (trend.spo2_volatility, SPO2_VOLATILITY_LIMIT),
        ]
        .into_iter()
        .filter(|(volatility, limit)| volatility.is_some_and(|v| v > *limit))
        .count();
        let stability = (1.0 - volatile as f64 * 0.1).max(0.0);
        confidence += stability * STABILITY_WEIGHT;

        if trend.gcs_deteriorating {
            confidence -= 0.1 * ANOMALY_WEIGHT;
        }
    }

    let mut quality = 0.0;
    if features.fast_score.is_some_and(|score| score >= SUSPECTED_LVO_FAST_SCORE) {
        quality += 0.15;
    }
    if vitals.gcs_total.is_some_and(|gcs| (13..=15).contains(&gcs)) {
        quality += 0.1;
    }
    if features
        .minutes_since_symptom_onset
        .is_some_and(|mins| mins <= EXTENDED_EVT_WINDOW_MINUTES)
    {
        quality += 0.05;
    }
    confidence += quality * QUALITY_WEIGHT;

    confidence.clamp(0.0, 1.0)
}

/// Relative weight of each present feature, scaled so the strongest is 1.0.
///
/// Features that are absent or unremarkable are left out; an empty map means
/// nothing stood out.
pub fn feature_importance(features: &CaseFeatures) -> BTreeMap<String, f64> {
    let vitals = &features.vitals;
    let mut importance = BTreeMap::new();

    if let Some(score) = features.fast_score.filter(|&score| score > 0) {
        importance.insert("fast_score".to_string(), (f64::from(score) / 3.0).min(1.0));
    }
    if vitals.face_droop {
        importance.insert("face_droop".to_string(), 0.8);
    }
    if vitals.arm_weakness {
        importance.insert("arm_weakness".to_string(), 0.85);
    }
    if vitals.speech_abnormality {
        importance.insert("speech_abnormality".to_string(), 0.75);
    }

    match vitals.gcs_total {
        Some(gcs) if gcs < 13 => {
            importance.insert("gcs_total".to_string(), 0.9);
        }
        Some(gcs) if gcs < 15 => {
            importance.insert("gcs_total".to_string(), 0.6);
        }
        _ => {}
    }

    if let Some(mins) = features.minutes_since_symptom_onset {
        let weight = if mins <= IV_TPA_WINDOW_MINUTES {
            0.9
        } else if mins <= EXTENDED_EVT_WINDOW_MINUTES {
            0.7
        } else {
            0.4
        };
        importance.insert("time_window".to_string(), weight);
    }

    match vitals.systolic_bp_mmhg {
        Some(sbp) if sbp > 180 => {
            importance.insert("systolic_bp".to_string(), 0.5);
        }
        Some(sbp) if sbp < 100 => {
            importance.insert("systolic_bp".to_string(), 0.4);
        }
        _ => {}
    }

    let max = importance.values().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for weight in importance.values_mut() {
            *weight /= max;
        }
    }

    importance
}
