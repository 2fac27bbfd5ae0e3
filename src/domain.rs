use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// CMS Certification Number identifying one certified facility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ccn(pub String);

/// Ownership structure reported on the provider enrollment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipType {
    ForProfit,
    NonProfit,
    Government,
}

/// The four published star ratings, each an integer from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRatings {
    pub overall: u8,
    pub health_inspection: u8,
    pub staffing: u8,
    pub quality_measures: u8,
}

impl StarRatings {
    pub fn for_domain(&self, category: DomainCategory) -> u8 {
        match category {
            DomainCategory::HealthInspection => self.health_inspection,
            DomainCategory::Staffing => self.staffing,
            DomainCategory::QualityMeasures => self.quality_measures,
        }
    }
}

/// Read-only facility snapshot supplied by the persistence collaborator.
///
/// The engine never mutates it and never looks anything up beyond what the
/// caller hands over for a single analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub ccn: Ccn,
    pub bed_count: u32,
    pub resident_count: u32,
    pub ownership: OwnershipType,
    pub special_focus: bool,
    pub abuse_flag: bool,
    pub ratings: StarRatings,
}

/// Payroll-based staffing intensity metrics, hours per resident day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingMetrics {
    pub total_nurse_hprd: f64,
    pub rn_hprd: f64,
    pub lpn_hprd: f64,
    pub cna_hprd: f64,
    pub weekend_total_hprd: f64,
    pub rn_turnover_pct: f64,
    pub total_turnover_pct: f64,
    pub admin_turnover_pct: f64,
    pub state_avg_total_hprd: f64,
    pub national_avg_total_hprd: f64,
}

/// The quality measures the engine tracks, long-stay unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureCode {
    LongStayAntipsychotic,
    LongStayPressureUlcers,
    LongStayFallsMajorInjury,
    LongStayCatheter,
    LongStayUti,
    ShortStayRehospitalization,
    FluVaccination,
}

/// Fixed collection of clinical-outcome percentages for one facility, with
/// the state/national overall comparison figures the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMeasureSet {
    pub percent_antipsychotic_meds: f64,
    pub percent_pressure_ulcers: f64,
    pub percent_falls_major_injury: f64,
    pub percent_catheter_use: f64,
    pub percent_uti: f64,
    pub percent_rehospitalized: f64,
    pub percent_flu_vaccinated: f64,
    pub state_overall_pct: f64,
    pub national_overall_pct: f64,
}

impl QualityMeasureSet {
    pub fn value(&self, code: MeasureCode) -> f64 {
        match code {
            MeasureCode::LongStayAntipsychotic => self.percent_antipsychotic_meds,
            MeasureCode::LongStayPressureUlcers => self.percent_pressure_ulcers,
            MeasureCode::LongStayFallsMajorInjury => self.percent_falls_major_injury,
            MeasureCode::LongStayCatheter => self.percent_catheter_use,
            MeasureCode::LongStayUti => self.percent_uti,
            MeasureCode::ShortStayRehospitalization => self.percent_rehospitalized,
            MeasureCode::FluVaccination => self.percent_flu_vaccinated,
        }
    }
}

/// CMS scope/severity classification letter for one cited deficiency.
///
/// The letter encodes both axes of the grid: rows A-C carry potential for
/// minimal harm, D-F potential for more than minimal harm, G-I actual harm,
/// and J-L immediate jeopardy; within a row the letters step through
/// isolated, pattern, widespread scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

/// How widely a deficient practice was observed during the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficiencyScope {
    Isolated,
    Pattern,
    Widespread,
}

/// Harm row of the scope/severity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityRow {
    PotentialMinimalHarm,
    PotentialHarm,
    ActualHarm,
    ImmediateJeopardy,
}

impl SeverityLetter {
    pub const ALL: [SeverityLetter; 12] = [
        SeverityLetter::A,
        SeverityLetter::B,
        SeverityLetter::C,
        SeverityLetter::D,
        SeverityLetter::E,
        SeverityLetter::F,
        SeverityLetter::G,
        SeverityLetter::H,
        SeverityLetter::I,
        SeverityLetter::J,
        SeverityLetter::K,
        SeverityLetter::L,
    ];

    pub fn scope(&self) -> DeficiencyScope {
        match self {
            SeverityLetter::A | SeverityLetter::D | SeverityLetter::G | SeverityLetter::J => {
                DeficiencyScope::Isolated
            }
            SeverityLetter::B | SeverityLetter::E | SeverityLetter::H | SeverityLetter::K => {
                DeficiencyScope::Pattern
            }
            SeverityLetter::C | SeverityLetter::F | SeverityLetter::I | SeverityLetter::L => {
                DeficiencyScope::Widespread
            }
        }
    }

    pub fn severity_row(&self) -> SeverityRow {
        match self {
            SeverityLetter::A | SeverityLetter::B | SeverityLetter::C => {
                SeverityRow::PotentialMinimalHarm
            }
            SeverityLetter::D | SeverityLetter::E | SeverityLetter::F => SeverityRow::PotentialHarm,
            SeverityLetter::G | SeverityLetter::H | SeverityLetter::I => SeverityRow::ActualHarm,
            SeverityLetter::J | SeverityLetter::K | SeverityLetter::L => {
                SeverityRow::ImmediateJeopardy
            }
        }
    }

    /// G through L: actual harm or immediate jeopardy.
    pub fn is_severe(&self) -> bool {
        self.severity_row() >= SeverityRow::ActualHarm
    }
}

/// One standard health survey event, most recent first in the caller's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInspectionRecord {
    pub survey_date: NaiveDate,
    pub deficiency_counts: BTreeMap<SeverityLetter, u32>,
    pub fine_amount_cents: u64,
    pub payment_denial_days: u32,
    pub state_avg_deficiencies: f64,
    pub national_avg_deficiencies: f64,
}

impl HealthInspectionRecord {
    pub fn total_deficiencies(&self) -> u32 {
        self.deficiency_counts.values().sum()
    }

    pub fn severe_deficiencies(&self) -> u32 {
        self.deficiency_counts
            .iter()
            .filter(|(letter, _)| letter.is_severe())
            .map(|(_, count)| count)
            .sum()
    }
}

/// One cited deficiency; used only for repeat-category pattern detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeficiencyRecord {
    pub tag: String,
    pub category: String,
    pub scope_severity: SeverityLetter,
    pub corrected: bool,
}

/// CMS rating domain a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainCategory {
    HealthInspection,
    Staffing,
    QualityMeasures,
}

/// Urgency band; declaration order doubles as the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Rough resource requirement; declaration order doubles as the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

/// Expected remediation horizon for the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    LongTerm,
}

/// One improvement recommendation, freshly built on every analysis call.
///
/// Carries no identity beyond the call; deduplication and timestamping are
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub category: DomainCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub current_value: f64,
    pub target_value: f64,
    pub estimated_impact: f64,
    pub estimated_cost: CostTier,
    pub timeframe: Timeframe,
    pub action_steps: Vec<String>,
}
