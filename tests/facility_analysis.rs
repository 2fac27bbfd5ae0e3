use std::collections::BTreeMap;

use chrono::NaiveDate;
use fivestar_engine::analysis::AnalysisEngine;
use fivestar_engine::domain::{
    Ccn, DeficiencyRecord, DomainCategory, Facility, HealthInspectionRecord, OwnershipType,
    Priority, QualityMeasureSet, SeverityLetter, StaffingMetrics, StarRatings,
};

fn facility(ratings: StarRatings) -> Facility {
    Facility {
        ccn: Ccn("165330".to_string()),
        bed_count: 75,
        resident_count: 62,
        ownership: OwnershipType::ForProfit,
        special_focus: false,
        abuse_flag: false,
        ratings,
    }
}

fn mid_ratings() -> StarRatings {
    StarRatings {
        overall: 3,
        health_inspection: 3,
        staffing: 3,
        quality_measures: 3,
    }
}

fn staffing_metrics(total: f64, rn: f64) -> StaffingMetrics {
    StaffingMetrics {
        total_nurse_hprd: total,
        rn_hprd: rn,
        lpn_hprd: 0.85,
        cna_hprd: 2.10,
        weekend_total_hprd: total * 0.95,
        rn_turnover_pct: 30.0,
        total_turnover_pct: 42.0,
        admin_turnover_pct: 15.0,
        state_avg_total_hprd: 3.55,
        national_avg_total_hprd: 3.71,
    }
}

fn healthy_measures() -> QualityMeasureSet {
    QualityMeasureSet {
        percent_antipsychotic_meds: 8.0,
        percent_pressure_ulcers: 3.0,
        percent_falls_major_injury: 1.0,
        percent_catheter_use: 0.9,
        percent_uti: 1.2,
        percent_rehospitalized: 14.0,
        percent_flu_vaccinated: 98.0,
        state_overall_pct: 73.5,
        national_overall_pct: 71.8,
    }
}

fn clean_survey() -> HealthInspectionRecord {
    HealthInspectionRecord {
        survey_date: NaiveDate::from_ymd_opt(2026, 1, 22).expect("valid survey date"),
        deficiency_counts: BTreeMap::new(),
        fine_amount_cents: 0,
        payment_denial_days: 0,
        state_avg_deficiencies: 7.1,
        national_avg_deficiencies: 8.4,
    }
}

fn citation(tag: &str, category: &str, letter: SeverityLetter) -> DeficiencyRecord {
    DeficiencyRecord {
        tag: tag.to_string(),
        category: category.to_string(),
        scope_severity: letter,
        corrected: false,
    }
}

#[test]
fn understaffed_facility_gets_both_hprd_recommendations() {
    let engine = AnalysisEngine::standard();
    let metrics = staffing_metrics(3.00, 0.40);

    let recommendations = engine
        .analyze(&facility(mid_ratings()), None, None, Some(&metrics), None)
        .expect("standard tables are valid");

    let total = recommendations
        .iter()
        .find(|rec| rec.id == "staffing-total-hprd")
        .expect("total HPRD recommendation present");
    assert_eq!(total.target_value, 3.35);
    assert_eq!(total.category, DomainCategory::Staffing);

    let rn = recommendations
        .iter()
        .find(|rec| rec.id == "staffing-rn-hprd")
        .expect("RN HPRD recommendation present");
    assert_eq!(rn.target_value, 0.48);
}

#[test]
fn elevated_antipsychotic_use_is_flagged_high_priority() {
    let engine = AnalysisEngine::standard();
    let mut measures = healthy_measures();
    measures.percent_antipsychotic_meds = 22.0;
    let mut ratings = mid_ratings();
    ratings.quality_measures = 2;

    let recommendations = engine
        .analyze(&facility(ratings), None, None, None, Some(&measures))
        .expect("standard tables are valid");

    let rec = recommendations
        .iter()
        .find(|rec| rec.id == "qm-antipsychotic")
        .expect("antipsychotic recommendation present");
    assert_eq!(rec.priority, Priority::High);
    assert_eq!(rec.current_value, 22.0);
}

#[test]
fn repeated_tag_produces_a_pattern_recommendation() {
    let engine = AnalysisEngine::standard();
    let citations = vec![
        citation("F689", "Accidents and Supervision", SeverityLetter::D),
        citation("F689", "Accidents and Supervision", SeverityLetter::E),
    ];

    let recommendations = engine
        .analyze(
            &facility(mid_ratings()),
            None,
            Some(&citations),
            None,
            None,
        )
        .expect("standard tables are valid");

    let rec = recommendations
        .iter()
        .find(|rec| rec.id == "inspection-repeat-category")
        .expect("pattern recommendation present");
    assert_eq!(rec.current_value, 2.0);
}

#[test]
fn immediate_jeopardy_outranks_a_five_star_health_rating() {
    let engine = AnalysisEngine::standard();
    let mut survey = clean_survey();
    survey.deficiency_counts.insert(SeverityLetter::K, 1);
    let mut ratings = mid_ratings();
    ratings.health_inspection = 5;

    let recommendations = engine
        .analyze(
            &facility(ratings),
            Some(std::slice::from_ref(&survey)),
            None,
            None,
            None,
        )
        .expect("standard tables are valid");

    let rec = recommendations
        .iter()
        .find(|rec| rec.id == "inspection-severe-deficiency")
        .expect("severe recommendation present");
    assert_eq!(rec.priority, Priority::High);
    // No headroom above five stars, so the capped impact is zero.
    assert_eq!(rec.estimated_impact, 0.0);
}

#[test]
fn five_star_facility_with_clean_metrics_gets_an_empty_list() {
    let engine = AnalysisEngine::standard();
    let ratings = StarRatings {
        overall: 5,
        health_inspection: 5,
        staffing: 5,
        quality_measures: 5,
    };
    let metrics = staffing_metrics(4.20, 0.80);
    let measures = healthy_measures();
    let surveys = vec![clean_survey()];

    let recommendations = engine
        .analyze(
            &facility(ratings),
            Some(&surveys),
            Some(&[]),
            Some(&metrics),
            Some(&measures),
        )
        .expect("standard tables are valid");
    assert!(recommendations.is_empty());
}

#[test]
fn missing_data_slices_are_skipped_not_errors() {
    let engine = AnalysisEngine::standard();
    let recommendations = engine
        .analyze(&facility(mid_ratings()), None, None, None, None)
        .expect("no data is not an error");
    assert!(recommendations.is_empty());
}

#[test]
fn analysis_is_deterministic_across_calls() {
    let engine = AnalysisEngine::standard();
    let metrics = staffing_metrics(2.80, 0.40);
    let mut measures = healthy_measures();
    measures.percent_antipsychotic_meds = 22.0;
    measures.percent_flu_vaccinated = 80.0;
    let citations = vec![
        citation("F689", "Accidents and Supervision", SeverityLetter::G),
        citation("F689", "Accidents and Supervision", SeverityLetter::D),
    ];
    let mut survey = clean_survey();
    survey.deficiency_counts.insert(SeverityLetter::D, 9);
    survey.fine_amount_cents = 325_000;
    let surveys = vec![survey];

    let run = || {
        engine
            .analyze(
                &facility(mid_ratings()),
                Some(&surveys),
                Some(&citations),
                Some(&metrics),
                Some(&measures),
            )
            .expect("standard tables are valid")
    };
    assert_eq!(run(), run());
}

#[test]
fn ranked_list_places_high_priority_findings_first() {
    let engine = AnalysisEngine::standard();
    let metrics = staffing_metrics(3.40, 0.60);
    let mut survey = clean_survey();
    survey.fine_amount_cents = 100_000;
    let surveys = vec![survey];

    let recommendations = engine
        .analyze(
            &facility(mid_ratings()),
            Some(&surveys),
            None,
            Some(&metrics),
            None,
        )
        .expect("standard tables are valid");

    assert!(recommendations.len() >= 2);
    for pair in recommendations.windows(2) {
        assert!(
            pair[0].priority <= pair[1].priority,
            "priorities must be non-descending in the ranked list"
        );
    }
    assert_eq!(recommendations[0].priority, Priority::High);
}

#[test]
fn discharge_function_scores_come_back_in_valid_ranges() {
    use fivestar_engine::scoring::{GgAssessment, GgItemPair, GgResponse, GG_SCORE_MAX};
    use fivestar_engine::thresholds::DiagnosisCategory;

    let engine = AnalysisEngine::standard();
    let mut items = [GgItemPair {
        admission: GgResponse::Performance(3),
        discharge: GgResponse::Performance(5),
    }; 10];
    items[4].discharge = GgResponse::NotAttemptedMedicalCondition;

    let scores = engine.discharge_function_scores(&GgAssessment {
        items,
        age_years: 81.0,
        bims_score: 13.0,
        diagnosis: DiagnosisCategory::Stroke,
        comorbidity_count: 3,
        length_of_stay_days: 30.0,
    });

    assert!(scores.expected >= 0.0 && scores.expected <= GG_SCORE_MAX);
    // Nine fives plus one imputed item (admission 3 + delta 1), never zero.
    assert_eq!(scores.observed, 49.0);
}

#[test]
fn recommendation_json_matches_the_dashboard_contract() {
    let engine = AnalysisEngine::standard();
    let metrics = staffing_metrics(3.00, 0.40);
    let recommendations = engine
        .analyze(&facility(mid_ratings()), None, None, Some(&metrics), None)
        .expect("standard tables are valid");

    let value = serde_json::to_value(&recommendations[0]).expect("recommendation serializes");
    assert_eq!(value["category"], "staffing");
    assert_eq!(value["priority"], "medium");
    assert!(value["timeframe"] == "short_term" || value["timeframe"] == "immediate");
    assert!(value["action_steps"].as_array().is_some());
}
