use crate::entities::risk::{
    RiskAssessment, RiskAssessmentRequest, RiskCategory, SnapshotAssessment, TreatmentWindow,
    TriageRequest, TriageResult, VitalSnapshot,
};
use crate::services::classifier::{
    classify_blood_pressure, classify_glasgow_coma_score, classify_heart_rate,
    classify_oxygen_saturation,
};
use crate::services::confidence::{feature_importance, prediction_confidence};
use crate::services::routing::choose_destination;

/// Standard IV tPA window in minutes (4.5 hours)
pub const IV_TPA_WINDOW_MINUTES: u32 = 270;

/// Extended window for some EVT candidates in minutes (6 hours)
pub const EXTENDED_EVT_WINDOW_MINUTES: u32 = 360;

/// FAST score at or above which EMS suspects a large vessel occlusion
pub const SUSPECTED_LVO_FAST_SCORE: u8 = 2;

/// Map model probabilities to a clinical risk category.
///
/// Either probability can raise the category; NaN compares false everywhere
/// and falls through to `Low`.
pub fn categorize_risk(stroke_probability: f64, lvo_probability: f64) -> RiskCategory {
    if stroke_probability >= 0.8 || lvo_probability >= 0.6 {
        RiskCategory::Critical
    } else if stroke_probability >= 0.6 || lvo_probability >= 0.4 {
        RiskCategory::High
    } else if stroke_probability >= 0.3 {
        RiskCategory::Moderate
    } else {
        RiskCategory::Low
    }
}

/// Which treatment window the patient is in
pub fn assess_treatment_window(minutes_since_onset: Option<u32>) -> TreatmentWindow {
    match minutes_since_onset {
        None => TreatmentWindow::UnknownOnset,
        Some(mins) if mins <= IV_TPA_WINDOW_MINUTES => TreatmentWindow::IvTpa,
        Some(mins) if mins <= EXTENDED_EVT_WINDOW_MINUTES => TreatmentWindow::ExtendedEvt,
        Some(_) => TreatmentWindow::OutsideStandard,
    }
}

pub fn is_suspected_lvo(fast_score: Option<u8>) -> bool {
    fast_score.is_some_and(|score| score >= SUSPECTED_LVO_FAST_SCORE)
}

/// Assess a validated risk request
pub fn assess_risk(request: &RiskAssessmentRequest) -> RiskAssessment {
    let category = categorize_risk(request.stroke_probability, request.lvo_probability);

    RiskAssessment {
        category,
        display_color: category.display_color(),
        treatment_window: assess_treatment_window(request.minutes_since_symptom_onset),
        suspected_lvo: is_suspected_lvo(request.fast_score),
    }
}

/// Classify each vital present in the snapshot and collect risk factors
pub fn assess_snapshot(snapshot: &VitalSnapshot) -> SnapshotAssessment {
    let heart_rate = snapshot.heart_rate_bpm.map(classify_heart_rate);
    let blood_pressure = match (snapshot.systolic_bp_mmhg, snapshot.diastolic_bp_mmhg) {
        (Some(systolic), Some(diastolic)) => Some(classify_blood_pressure(systolic, diastolic)),
        _ => None,
    };
    let oxygen_saturation = snapshot.spo2_pct.map(classify_oxygen_saturation);
    let glasgow_coma_score = snapshot.gcs_total.map(classify_glasgow_coma_score);

    let most_severe = [heart_rate, blood_pressure, oxygen_saturation, glasgow_coma_score]
        .into_iter()
        .flatten()
        .map(|result| result.tier)
        .max();

    let mut risk_factors = Vec::new();
    if snapshot.face_droop {
        risk_factors.push("Face droop".to_string());
    }
    if snapshot.arm_weakness {
        risk_factors.push("Arm weakness".to_string());
    }
    if snapshot.speech_abnormality {
        risk_factors.push("Speech abnormality".to_string());
    }
    if let Some(gcs) = snapshot.gcs_total.filter(|&gcs| gcs < 15) {
        risk_factors.push(format!("Reduced GCS ({})", gcs));
    }
    if let Some(systolic) = snapshot.systolic_bp_mmhg.filter(|&sbp| sbp > 180) {
        risk_factors.push(format!("Elevated systolic BP ({})", systolic));
    }

    SnapshotAssessment {
        heart_rate,
        blood_pressure,
        oxygen_saturation,
        glasgow_coma_score,
        most_severe,
        risk_factors,
    }
}

/// Run the whole case assessment on a validated triage request
pub fn triage(request: &TriageRequest) -> TriageResult {
    let risk = assess_risk(&request.risk_request());

    TriageResult {
        risk,
        snapshot: assess_snapshot(&request.features.vitals),
        confidence: prediction_confidence(&request.features, request.trend.as_ref()),
        feature_importance: feature_importance(&request.features),
        destination: choose_destination(risk.suspected_lvo, &request.centers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::classification::{DisplayColor, SeverityTier};
    use crate::entities::risk::CaseFeatures;
    use crate::entities::routing::{DestinationType, StrokeCenter, StrokeCenterLevel};

    #[test]
    fn test_categorize_risk() {
        assert_eq!(categorize_risk(0.85, 0.1), RiskCategory::Critical);
        assert_eq!(categorize_risk(0.1, 0.6), RiskCategory::Critical);
        assert_eq!(categorize_risk(0.6, 0.0), RiskCategory::High);
        assert_eq!(categorize_risk(0.2, 0.4), RiskCategory::High);
        assert_eq!(categorize_risk(0.3, 0.39), RiskCategory::Moderate);
        assert_eq!(categorize_risk(0.29, 0.39), RiskCategory::Low);
        assert_eq!(categorize_risk(f64::NAN, f64::NAN), RiskCategory::Low);
    }

    #[test]
    fn test_risk_category_colors() {
        assert_eq!(RiskCategory::Low.display_color(), DisplayColor::Success);
        assert_eq!(RiskCategory::Moderate.display_color(), DisplayColor::Warning);
        assert_eq!(RiskCategory::Critical.display_color(), DisplayColor::Error);
        assert!(RiskCategory::High < RiskCategory::Critical);
    }

    #[test]
    fn test_treatment_window() {
        assert_eq!(assess_treatment_window(None), TreatmentWindow::UnknownOnset);
        assert_eq!(assess_treatment_window(Some(0)), TreatmentWindow::IvTpa);
        assert_eq!(assess_treatment_window(Some(270)), TreatmentWindow::IvTpa);
        assert_eq!(assess_treatment_window(Some(271)), TreatmentWindow::ExtendedEvt);
        assert_eq!(assess_treatment_window(Some(360)), TreatmentWindow::ExtendedEvt);
        assert_eq!(assess_treatment_window(Some(361)), TreatmentWindow::OutsideStandard);
        assert_eq!(TreatmentWindow::IvTpa.note(), "Within typical IV tPA window.");
    }

    #[test]
    fn test_suspected_lvo() {
        assert!(!is_suspected_lvo(None));
        assert!(!is_suspected_lvo(Some(1)));
        assert!(is_suspected_lvo(Some(2)));
        assert!(is_suspected_lvo(Some(4)));
    }

    #[test]
    fn test_assess_risk() {
        let request = RiskAssessmentRequest {
            stroke_probability: 0.7,
            lvo_probability: 0.2,
            minutes_since_symptom_onset: Some(300),
            fast_score: Some(3),
        };

        let assessment = assess_risk(&request);
        assert_eq!(assessment.category, RiskCategory::High);
        assert_eq!(assessment.display_color, DisplayColor::Error);
        assert_eq!(assessment.treatment_window, TreatmentWindow::ExtendedEvt);
        assert!(assessment.suspected_lvo);
    }

    #[test]
    fn test_assess_full_snapshot() {
        let snapshot = VitalSnapshot {
            heart_rate_bpm: Some(88),
            systolic_bp_mmhg: Some(190),
            diastolic_bp_mmhg: Some(100),
            spo2_pct: Some(93),
            gcs_total: Some(13),
            ..Default::default()
        };

        let assessment = assess_snapshot(&snapshot);
        assert_eq!(assessment.heart_rate.map(|r| r.tier), Some(SeverityTier::Normal));
        assert_eq!(assessment.blood_pressure.map(|r| r.tier), Some(SeverityTier::VeryHigh));
        assert_eq!(assessment.oxygen_saturation.map(|r| r.tier), Some(SeverityTier::Low));
        assert_eq!(
            assessment.glasgow_coma_score.and_then(|r| r.display_color),
            Some(DisplayColor::Info)
        );
        assert_eq!(assessment.most_severe, Some(SeverityTier::VeryHigh));
        assert_eq!(
            assessment.risk_factors,
            vec!["Reduced GCS (13)".to_string(), "Elevated systolic BP (190)".to_string()]
        );
    }

    #[test]
    fn test_fast_findings_lead_risk_factors() {
        let snapshot = VitalSnapshot {
            systolic_bp_mmhg: Some(200),
            gcs_total: Some(12),
            face_droop: true,
            speech_abnormality: true,
            ..Default::default()
        };

        let assessment = assess_snapshot(&snapshot);
        assert_eq!(
            assessment.risk_factors,
            vec![
                "Face droop".to_string(),
                "Speech abnormality".to_string(),
                "Reduced GCS (12)".to_string(),
                "Elevated systolic BP (200)".to_string(),
            ]
        );
        // Findings alone do not classify anything
        assert!(assessment.blood_pressure.is_none());
    }

    #[test]
    fn test_triage_combines_assessments() {
        let request = TriageRequest {
            stroke_probability: 0.9,
            lvo_probability: 0.7,
            features: CaseFeatures {
                vitals: VitalSnapshot {
                    heart_rate_bpm: Some(96),
                    systolic_bp_mmhg: Some(185),
                    diastolic_bp_mmhg: Some(95),
                    spo2_pct: Some(95),
                    gcs_total: Some(14),
                    arm_weakness: true,
                    ..Default::default()
                },
                fast_score: Some(3),
                minutes_since_symptom_onset: Some(45),
            },
            trend: None,
            centers: vec![
                StrokeCenter {
                    hospital_id: "st-mary".to_string(),
                    level: StrokeCenterLevel::Primary,
                    travel_minutes: Some(10),
                    additional_door_to_needle_minutes: Some(30),
                },
                StrokeCenter {
                    hospital_id: "university".to_string(),
                    level: StrokeCenterLevel::Comprehensive,
                    travel_minutes: Some(22),
                    additional_door_to_needle_minutes: Some(20),
                },
            ],
        };

        let result = triage(&request);
        assert_eq!(result.risk.category, RiskCategory::Critical);
        assert_eq!(result.risk.treatment_window, TreatmentWindow::IvTpa);
        assert_eq!(result.snapshot.most_severe, Some(SeverityTier::VeryHigh));
        assert_eq!(result.snapshot.risk_factors[0], "Arm weakness");
        // 0.5 + 0.6 * 0.3 + 0.3 * 0.3
        assert!((result.confidence - 0.77).abs() < 1e-9);
        assert_eq!(result.feature_importance.get("fast_score"), Some(&1.0));

        let destination = result.destination.expect("destination chosen");
        assert_eq!(destination.hospital_id, "university");
        assert_eq!(destination.destination, DestinationType::ComprehensiveCenter);
    }

    #[test]
    fn test_assess_partial_snapshot() {
        // Blood pressure needs both components
        let snapshot = VitalSnapshot {
            systolic_bp_mmhg: Some(120),
            spo2_pct: Some(97),
            ..Default::default()
        };

        let assessment = assess_snapshot(&snapshot);
        assert!(assessment.blood_pressure.is_none());
        assert!(assessment.heart_rate.is_none());
        assert_eq!(assessment.most_severe, Some(SeverityTier::Normal));
        assert!(assessment.risk_factors.is_empty());
    }

    #[test]
    fn test_assess_empty_snapshot() {
        let assessment = assess_snapshot(&VitalSnapshot::default());
        assert_eq!(assessment, SnapshotAssessment::default());
        assert!(assessment.most_severe.is_none());
    }

    #[test]
    fn test_most_severe_prefers_very_tiers() {
        let snapshot = VitalSnapshot {
            heart_rate_bpm: Some(110),
            gcs_total: Some(7),
            ..Default::default()
        };

        let assessment = assess_snapshot(&snapshot);
        assert_eq!(assessment.most_severe, Some(SeverityTier::VeryLow));
    }
}
