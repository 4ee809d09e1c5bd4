//! The Robodebt (Online Compliance Intervention) case study shown in Learn
//! Mode.
//!
//! Ratings and narrative are fixed; risk scores, bias weighted scores and
//! priorities are computed with the same functions the worksheet uses, under
//! the weight profile of the case study's primary definition.

use crate::bias::{rescore_sources, BiasPriorityThresholds};
use crate::catalog::default_accountable_party;
use crate::model::*;
use crate::risk::create_risk_entry;
use std::collections::BTreeMap;

/// 2023-07-07, the date the Royal Commission report was published.
const CASE_STUDY_TIMESTAMP: i64 = 1_688_688_000_000;

pub fn system() -> SystemDescription {
    SystemDescription {
        name: "Online Compliance Intervention (Robodebt)".into(),
        operator: "Department of Human Services / Services Australia".into(),
        period: "2015–2019".into(),
        scale: "~700,000 debt notices, A$1.76 billion total".into(),
        algorithm: "Rule-based income averaging: ATO annual income ÷ 26 fortnights compared to Centrelink fortnightly payments".into(),
        decision: "Binary debt/no-debt determination, fully automated".into(),
        outcome: "Found unlawful by Federal Court (2019) and Royal Commission (2023). A$1.87B+ refunded.".into(),
    }
}

fn protected_group(group: &str, pattern: &str, data_pathway: &str, impact: ImpactLevel) -> ProtectedGroup {
    ProtectedGroup {
        group: group.into(),
        pattern: pattern.into(),
        data_pathway: data_pathway.into(),
        impact,
    }
}

fn intersection(groups: &str, priority: u32, pattern: &str) -> Intersection {
    Intersection {
        groups: groups.into(),
        priority,
        pattern: pattern.into(),
    }
}

fn feedback_loop(id: &str, trigger: &str, mechanism: &str, amplification: &str, monitoring: &str) -> FeedbackLoop {
    FeedbackLoop {
        id: id.into(),
        trigger: trigger.into(),
        mechanism: mechanism.into(),
        amplification: amplification.into(),
        monitoring: monitoring.into(),
    }
}

fn event(year: &str, text: &str, kind: TimelineEventType) -> TimelineEvent {
    TimelineEvent {
        year: year.into(),
        event: text.into(),
        kind,
    }
}

pub fn c1() -> C1Data {
    let data_source_checklist: BTreeMap<String, bool> = [
        "Administrative records (government databases)",
        "Tax records (ATO annual summaries)",
        "Self-reported income (Centrelink declarations)",
        "Employer-reported data (PAYG summaries)",
        "Historical compliance records",
    ]
    .into_iter()
    .map(|k| (k.to_string(), true))
    .collect();

    C1Data {
        domain_context: DomainContext {
            system: "Online Compliance Intervention (OCI) / Robodebt".into(),
            decision_type: "Automated debt-raising against welfare recipients".into(),
            affected_population: "Welfare recipients including JobSeeker, Youth Allowance, Austudy, and Disability Support Pension claimants (~700,000 individuals)".into(),
            historical_patterns: "Long history of punitive welfare compliance in Australia. Indigenous Australians and rural populations have been systematically over-surveilled. The \"dole bludger\" narrative has shaped policy since the 1970s, creating institutional bias toward assuming fraud rather than administrative error.".into(),
        },
        data_representation: DataRepresentation {
            data_sources: "ATO annual income data (tax returns), Centrelink fortnightly payment records, employer-reported PAYG data".into(),
            coverage_gaps: "Casual and irregular workers not captured accurately by annual averaging. Indigenous community employment patterns underrepresented. Gig economy workers with variable income systematically miscategorised.".into(),
            label_reliability: "Fundamentally flawed: annual income averaging created false \"discrepancies\" that did not represent actual overpayments. The mathematical basis for debt calculation was legally invalid.".into(),
            data_source_checklist,
        },
        technology_transition: TechnologyTransition {
            prior_process: "Manual compliance reviews by trained Centrelink officers who could request payslips and verify actual fortnightly income against employer records. Officers exercised discretion and could identify data-matching errors.".into(),
            what_changed: "Automated income averaging replaced manual verification. System divided ATO annual income by 26 fortnights, compared against Centrelink records, and auto-generated debt notices without human review. Volume increased from ~20,000 to ~700,000 interventions.".into(),
            oversight_lost: "Human discretion in debt assessment was eliminated. The burden of proof was reversed onto recipients to disprove algorithmically generated debts. Internal legal advice warning of unlawfulness was ignored. Complaint and appeal pathways were overwhelmed by volume.".into(),
        },
        protected_groups: vec![
            protected_group(
                "Young adults (18–24)",
                "Disproportionately affected due to casual/variable employment patterns that income averaging misrepresents",
                "Annual averaging of irregular student/casual income creates systematic over-estimation of fortnightly earnings",
                ImpactLevel::Strong,
            ),
            protected_group(
                "Indigenous Australians",
                "Higher welfare dependence rates combined with CDEP/remote employment patterns poorly captured by ATO data",
                "Community Development Employment Projects (CDEP) income and seasonal work not compatible with averaging methodology",
                ImpactLevel::Strong,
            ),
            protected_group(
                "Rural and remote populations",
                "Seasonal and agricultural work patterns create income variability that averaging systematically misrepresents",
                "Seasonal employment (shearing, harvesting, tourism) concentrated in specific fortnights but averaged across year",
                ImpactLevel::Moderate,
            ),
            protected_group(
                "People with disabilities",
                "Disability Support Pension recipients with part-time work capacity particularly vulnerable to averaging errors",
                "Variable capacity for work creates fluctuating income that averaging methodology cannot accurately represent",
                ImpactLevel::Moderate,
            ),
        ],
        intersections: vec![
            intersection(
                "Young + Indigenous",
                1,
                "Highest compounding disadvantage: youth casual work patterns combined with remote community employment structures and historical distrust of government systems",
            ),
            intersection(
                "Indigenous + Rural/Remote",
                2,
                "Geographic isolation compounds data gaps in Indigenous employment records; limited access to evidence needed for appeals",
            ),
            intersection(
                "Young + Rural/Remote",
                3,
                "Seasonal youth employment in agricultural and tourism sectors creates extreme income variability; limited internet access for online appeals",
            ),
            intersection(
                "Disability + Rural/Remote",
                4,
                "Limited access to advocacy services and digital infrastructure needed to contest automated debts; variable part-time work misrepresented",
            ),
        ],
        feedback_loops: vec![
            feedback_loop(
                "FL-1",
                "Automated debt notice issued based on income averaging",
                "Recipients who cannot disprove debt within 21 days have debt confirmed, creating a \"confirmed fraud\" record that increases future compliance scrutiny",
                "Confirmed debts feed back into risk-scoring, making the same individual more likely to be targeted in future data-matching rounds",
                "Track re-targeting rate of individuals with prior automated debts; compare appeal rates across demographic groups",
            ),
            feedback_loop(
                "FL-2",
                "Debt recovery through Centrelink payment garnishing",
                "Automatic deductions from ongoing welfare payments reduce disposable income, increasing financial stress and potential for further payment irregularities",
                "Financial stress may cause recipients to take on irregular/cash work, creating further discrepancies in future data matching",
                "Monitor correlation between garnishing and subsequent payment irregularities; track financial hardship indicators",
            ),
            feedback_loop(
                "FL-3",
                "Psychological impact of debt notices on vulnerable populations",
                "Fear and distress cause some recipients to disengage from welfare system entirely, losing legitimate entitlements and creating data gaps",
                "Disengagement reduces data quality for affected populations, potentially worsening future algorithmic accuracy for those groups",
                "Track welfare exit rates following debt notices; monitor mental health service referrals; survey disengagement reasons",
            ),
        ],
        risk_matrix: vec![
            create_risk_entry("R1", "Invalid mathematical methodology (income averaging)", 5.0, 5.0, 5.0),
            create_risk_entry("R2", "Reversal of burden of proof onto recipients", 5.0, 5.0, 5.0),
            create_risk_entry("R3", "Disproportionate impact on young casual workers", 4.0, 5.0, 5.0),
            create_risk_entry("R4", "Systematic bias against Indigenous Australians", 5.0, 4.0, 5.0),
            create_risk_entry("R5", "Elimination of human discretion in debt assessment", 4.0, 5.0, 4.0),
            create_risk_entry("R6", "Inadequate appeal and review mechanisms", 4.0, 4.0, 4.0),
            create_risk_entry("R7", "Psychological harm including suicides linked to debt notices", 5.0, 3.0, 4.0),
            create_risk_entry("R8", "Data quality degradation through feedback loops", 3.0, 4.0, 3.0),
        ],
        timeline: vec![
            event("1991", "Centrelink established as government welfare delivery agency with manual compliance processes", TimelineEventType::Policy),
            event("1998", "Data-matching between ATO and Centrelink begins with human officer review of discrepancies", TimelineEventType::System),
            event("2010", "Northern Territory Intervention highlights systemic issues with Indigenous welfare administration", TimelineEventType::Cultural),
            event("2015", "Online Compliance Intervention (OCI) launched: automated income averaging replaces manual verification", TimelineEventType::System),
            event("2016", "Scale expanded dramatically; internal legal advice warns methodology may be unlawful; advice ignored", TimelineEventType::Policy),
            event("2017", "Senate inquiry receives thousands of complaints; Commonwealth Ombudsman reports systemic issues", TimelineEventType::Legal),
            event("2019", "Federal Court rules income averaging methodology unlawful; government agrees to A$1.2B settlement", TimelineEventType::Legal),
            event("2023", "Royal Commission delivers final report condemning scheme as \"cruel and disgraceful\"; total refunds exceed A$1.87B", TimelineEventType::Legal),
        ],
    }
}

fn radio_step(step: u32, question: &str, options: &[&str], answer: &str, explanation: &str) -> DecisionStep {
    DecisionStep {
        step,
        question: question.into(),
        input_type: DecisionStepInputType::Radio,
        options: options.iter().map(|o| o.to_string()).collect(),
        answer: StepAnswer::Single(answer.into()),
        explanation: explanation.into(),
    }
}

pub fn c2() -> C2Data {
    C2Data {
        decision_framework: vec![
            radio_step(
                1,
                "What is the base rate of the positive outcome across groups? (Are groups roughly equal in size and base rate?)",
                &["Similar", "Low", "High"],
                "Low",
                "Welfare receipt rates vary significantly across demographic groups. Indigenous Australians (~40% welfare receipt) vs general population (~15%). Young adults have higher rates than older cohorts. Base rates are unequal.",
            ),
            radio_step(
                2,
                "Which error type is more harmful? (False Positives = incorrectly flagged, False Negatives = missed cases)",
                &["False Positives", "False Negatives", "Both equally harmful"],
                "False Positives",
                "False positives (incorrect debt notices to people who owe nothing) cause severe financial hardship, psychological distress, and in some cases contributed to suicides. The harm of wrongly accusing someone of fraud far outweighs missing a genuine overpayment.",
            ),
            radio_step(
                3,
                "Is the system making high-stakes individual decisions or aggregate resource allocation?",
                &["Individual decisions", "Aggregate allocation", "Both"],
                "Individual decisions",
                "Each debt notice is a specific legal determination against an individual, demanding repayment of a calculated amount. This is a high-stakes individual decision with direct financial and legal consequences.",
            ),
            radio_step(
                4,
                "Are there legal or regulatory constraints on which groups can be considered?",
                &["Yes, strict constraints", "Some constraints", "No specific constraints"],
                "Yes, strict constraints",
                "Australian anti-discrimination law (Racial Discrimination Act 1975, Disability Discrimination Act 1992, Age Discrimination Act 2004) prohibits differential treatment. Social Security Act requires debts to be based on actual overpayments, not statistical estimates.",
            ),
            radio_step(
                5,
                "Can the system’s predictions be validated against ground truth? (Is there a reliable way to know the \"correct\" answer?)",
                &["Yes, reliable ground truth", "Partial ground truth", "No reliable ground truth"],
                "Yes, reliable ground truth",
                "Actual fortnightly income records exist (payslips, employer records) and were previously used in manual compliance reviews. The Federal Court confirmed that actual income, not averaged estimates, must be used for debt calculation.",
            ),
            radio_step(
                6,
                "What level of transparency is required? (Can the fairness metric be explained to affected individuals?)",
                &["Full transparency required", "Partial transparency", "Limited transparency acceptable"],
                "Full transparency required",
                "Government decisions affecting individual rights require full transparency under administrative law principles. Recipients must understand how their debt was calculated to exercise their right of appeal. The Royal Commission emphasised that opacity was a key failure.",
            ),
            DecisionStep {
                step: 7,
                question: "Select all fairness properties that are non-negotiable for this system:".into(),
                input_type: DecisionStepInputType::Checklist,
                options: vec![
                    "Equal false positive rates across groups".into(),
                    "Equal selection/flagging rates across groups".into(),
                    "Equal accuracy across groups".into(),
                    "Individual fairness (similar people treated similarly)".into(),
                    "Calibration (predicted probabilities match actual rates)".into(),
                ],
                answer: StepAnswer::Multiple(vec![
                    "Equal false positive rates across groups".into(),
                    "Individual fairness (similar people treated similarly)".into(),
                    "Calibration (predicted probabilities match actual rates)".into(),
                ]),
                explanation: "Given the severe harm of false positives and the legal requirement for individual accuracy, equal false positive rates and individual fairness are non-negotiable. Calibration is essential because the system should only raise debts where actual overpayments exist.".into(),
            },
        ],
        primary_selection: DefinitionSelection {
            definition: "Demographic Parity".into(),
            justification: "Debt notice rates should not systematically differ across protected groups (age, Indigenous status, region). While imperfect, demographic parity serves as a first-pass screen: if debt notices are issued at dramatically different rates across groups, this signals potential systemic bias in the underlying methodology.".into(),
        },
        secondary_selection: DefinitionSelection {
            definition: "Equal Opportunity".into(),
            justification: "Among those who genuinely have overpayments, the system should detect them at equal rates regardless of group membership. Among those who do NOT have overpayments, the false positive rate should be equal. Given that false positives are the primary harm, equalising the true positive rate for the positive class (no-debt) is critical.".into(),
        },
        tradeoff: TradeoffDoc {
            title: "Demographic Parity vs. Equal Opportunity".into(),
            description: "Demographic parity requires equal debt-notice rates across groups, but if genuine overpayment rates differ across groups (e.g., due to different employment patterns), enforcing equal rates could mean under-detecting real debts in some groups or over-detecting in others. Equal opportunity focuses on equal accuracy conditional on true status, but requires reliable ground truth labels.".into(),
            resolution: "Use demographic parity as a disparity alarm and equal opportunity as the binding constraint. If debt-notice rates differ significantly across groups, investigate whether the difference is explained by genuine overpayment rate differences (using actual fortnightly data, not averaged data). Apply equal opportunity to ensure that among true non-debtors, no group faces higher false positive rates. The Robodebt methodology failed both metrics catastrophically.".into(),
        },
    }
}

struct SourceSeed {
    bias_type: BiasType,
    description: &'static str,
    indicators: [&'static str; 4],
    evidence: &'static str,
    severity_score: f64,
    /// severity, scope, persistence, historical alignment, feasibility
    ratings: [f64; 5],
}

const SOURCE_SEEDS: [SourceSeed; 7] = [
    SourceSeed {
        bias_type: BiasType::Historical,
        description: "Decades of punitive welfare policy and the \"dole bludger\" narrative created institutional assumptions that welfare recipients are likely to commit fraud, shaping system design toward accusation rather than accurate assessment.",
        indicators: [
            "Policy rhetoric framing welfare recipients as suspected fraudsters",
            "Historical over-surveillance of Indigenous communities (NT Intervention)",
            "Institutional culture prioritising debt recovery over accuracy",
            "Prior compliance systems embedding punitive assumptions",
        ],
        evidence: "Royal Commission found that the scheme was driven by a \"culture of cruelty\" and revenue targets rather than evidence of fraud. Internal documents showed debt recovery targets were set before methodology was validated.",
        severity_score: 5.0,
        ratings: [5.0, 5.0, 5.0, 5.0, 3.0],
    },
    SourceSeed {
        bias_type: BiasType::Representation,
        description: "Income data from ATO annual returns does not accurately represent fortnightly income patterns for casual workers, seasonal employees, and community-based employment programs.",
        indicators: [
            "Annual income data used as proxy for fortnightly income",
            "Casual/irregular work patterns not captured",
            "Indigenous community employment (CDEP) poorly represented",
            "Gig economy and cash-in-hand work invisible to data matching",
        ],
        evidence: "The Federal Court found that using annualised income data to calculate fortnightly debts was fundamentally flawed. Employment patterns of affected groups (young, Indigenous, rural) were systematically misrepresented by averaging.",
        severity_score: 5.0,
        ratings: [5.0, 5.0, 4.0, 5.0, 4.0],
    },
    SourceSeed {
        bias_type: BiasType::Measurement,
        description: "The income averaging methodology (annual income / 26) is a fundamentally invalid measurement of fortnightly income. It transforms accurate annual data into inaccurate fortnightly estimates.",
        indicators: [
            "Mathematical averaging creates phantom discrepancies",
            "Measurement error is systematic, not random",
            "Error magnitude correlates with income variability",
            "No validation against actual fortnightly records",
        ],
        evidence: "The core legal finding: dividing annual income by 26 does not measure actual fortnightly income. A student earning $10,000 over summer appears to earn $385/fortnight year-round, generating false debts for fortnights with zero income.",
        severity_score: 5.0,
        ratings: [5.0, 5.0, 5.0, 4.0, 5.0],
    },
    SourceSeed {
        bias_type: BiasType::Aggregation,
        description: "A single averaging formula was applied uniformly to all recipients regardless of employment type, age, industry, or geographic context, ignoring the heterogeneity of income patterns across groups.",
        indicators: [
            "One-size-fits-all formula across diverse populations",
            "No subgroup-specific validation or thresholds",
            "Seasonal industries treated same as year-round employment",
            "Part-time disability employment averaged same as full-time work",
        ],
        evidence: "The scheme made no distinction between a full-time salaried worker (where averaging might approximate reality) and a casual fruit-picker or university student (where averaging produces grossly inaccurate results). This aggregation bias disproportionately harmed groups with variable income.",
        severity_score: 4.0,
        ratings: [4.0, 5.0, 4.0, 4.0, 4.0],
    },
    SourceSeed {
        bias_type: BiasType::Learning,
        description: "Although not a machine learning system, Robodebt exhibited learning bias through its operational feedback: confirmed debts (including false ones) reinforced the assumption that the methodology was valid, and recovery revenue was used as evidence of success.",
        indicators: [
            "Debt recovery revenue treated as validation of methodology",
            "Low appeal rates misinterpreted as evidence of accuracy",
            "Confirmed debts used to justify expanding the program",
            "No systematic accuracy audit conducted during operation",
        ],
        evidence: "Internal documents showed that the government pointed to billions in \"recovered\" debt as evidence the system worked, when in fact the majority of debts were invalid. The low appeal rate reflected recipient vulnerability, not system accuracy.",
        severity_score: 4.0,
        ratings: [4.0, 4.0, 4.0, 4.0, 3.0],
    },
    SourceSeed {
        bias_type: BiasType::Evaluation,
        description: "The system was never evaluated against ground truth (actual fortnightly income). Success metrics focused on volume of debts raised and revenue recovered rather than accuracy of individual determinations.",
        indicators: [
            "No accuracy metrics defined or tracked",
            "Success measured by debt volume and revenue",
            "No comparison against manual review outcomes",
            "Ombudsman and internal warnings about accuracy ignored",
        ],
        evidence: "The Royal Commission found that no systematic accuracy assessment was ever conducted. When the scheme was eventually audited, the error rate was found to be approximately 70-80% for debts raised solely through income averaging without additional verification.",
        severity_score: 5.0,
        ratings: [5.0, 5.0, 4.0, 4.0, 5.0],
    },
    SourceSeed {
        bias_type: BiasType::Deployment,
        description: "Deployed at massive scale (20,000 to 700,000 interventions) without pilot testing, with reversed burden of proof, inadequate appeal processes, and automated debt recovery including payment garnishing.",
        indicators: [
            "No pilot or phased rollout conducted",
            "Burden of proof reversed onto recipients",
            "Appeal system overwhelmed by volume",
            "Automated garnishing before debts confirmed",
        ],
        evidence: "The system went from processing ~20,000 manual reviews per year to issuing ~700,000 automated debt notices. Recipients had 21 days to produce employment records (sometimes years old) to disprove debts. Many could not access records and had debts confirmed by default.",
        severity_score: 5.0,
        ratings: [5.0, 5.0, 3.0, 5.0, 4.0],
    },
];

/// Bias sources with unscored derived fields; see [`learn_state`] for the
/// scored inventory.
pub fn c3() -> C3Data {
    let bias_sources = SOURCE_SEEDS
        .iter()
        .map(|seed| {
            let [severity, scope, persistence, historical_alignment, feasibility] = seed.ratings;
            BiasSource {
                description: seed.description.into(),
                indicators: seed.indicators.iter().map(|i| i.to_string()).collect(),
                indicator_checks: vec![true; seed.indicators.len()],
                evidence: seed.evidence.into(),
                severity_score: seed.severity_score,
                dimensions: BiasDimensions {
                    severity,
                    scope,
                    persistence,
                    historical_alignment,
                    feasibility,
                },
                accountable_party: Some(default_accountable_party(seed.bias_type)),
                ..BiasSource::unscored(seed.bias_type)
            }
        })
        .collect();
    C3Data { bias_sources }
}

fn rate(group: &str, rate: f64, spd: &str, ci: (f64, f64), color: &str) -> GroupRate {
    GroupRate {
        group: group.into(),
        rate,
        spd: spd.into(),
        ci,
        color: color.into(),
    }
}

fn spd(comparison: &str, value: f64, ci: (f64, f64)) -> SpdComparison {
    SpdComparison {
        comparison: comparison.into(),
        spd: value,
        ci,
        significant: true,
    }
}

fn error_rate(group: &str, rate: f64, label: &str) -> ErrorRateEntry {
    ErrorRateEntry {
        group: group.into(),
        rate,
        label: label.into(),
    }
}

fn subgroup(name: &str, rate: f64, spd: &str, error_rate: f64, status: IntersectionalStatus) -> IntersectionalRow {
    IntersectionalRow {
        subgroup: name.into(),
        rate,
        spd: spd.into(),
        error_rate,
        status,
    }
}

fn threshold_point(tolerance: &str, fpr: f64, tpr: f64, label: &str) -> ThresholdPoint {
    ThresholdPoint {
        tolerance: tolerance.into(),
        false_positive_rate: fpr,
        true_positive_rate: tpr,
        label: label.into(),
    }
}

fn recommendation(id: &str, horizon: &str, action: &str, impact: &str) -> Recommendation {
    Recommendation {
        id: id.into(),
        horizon: horizon.into(),
        action: action.into(),
        impact: impact.into(),
        effort: None,
        timeline: None,
        estimated_impact: None,
    }
}

fn dimension(name: &str, score: f64, tooltip: &str) -> AuditDimension {
    AuditDimension {
        dimension: name.into(),
        score,
        max: 5.0,
        tooltip: tooltip.into(),
    }
}

pub fn c4() -> C4Data {
    use IntersectionalStatus::*;

    C4Data {
        debt_notice_rates: DebtNoticeRates {
            by_age: vec![
                rate("18–24", 0.42, "+0.18", (0.39, 0.45), "#ef4444"),
                rate("25–34", 0.31, "+0.07", (0.28, 0.34), "#f97316"),
                rate("35–44", 0.24, "Ref", (0.21, 0.27), "#22c55e"),
                rate("45–54", 0.19, "−0.05", (0.16, 0.22), "#3b82f6"),
                rate("55+", 0.14, "−0.10", (0.11, 0.17), "#8b5cf6"),
            ],
            by_indigenous: vec![
                rate("Indigenous", 0.48, "+0.21", (0.43, 0.53), "#ef4444"),
                rate("Non-Indigenous", 0.27, "Ref", (0.25, 0.29), "#22c55e"),
            ],
            by_region: vec![
                rate("Major cities", 0.25, "Ref", (0.23, 0.27), "#22c55e"),
                rate("Inner regional", 0.30, "+0.05", (0.27, 0.33), "#f97316"),
                rate("Outer regional", 0.35, "+0.10", (0.31, 0.39), "#ef4444"),
                rate("Remote/Very remote", 0.41, "+0.16", (0.36, 0.46), "#ef4444"),
            ],
        },
        spd: vec![
            spd("Age: 18–24 vs 35–44 (Ref)", 0.18, (0.14, 0.22)),
            spd("Age: 25–34 vs 35–44 (Ref)", 0.07, (0.03, 0.11)),
            spd("Indigenous vs Non-Indigenous", 0.21, (0.15, 0.27)),
            spd("Remote vs Major cities", 0.16, (0.10, 0.22)),
            spd("Outer regional vs Major cities", 0.10, (0.06, 0.14)),
            spd("Inner regional vs Major cities", 0.05, (0.01, 0.09)),
        ],
        error_rates: ErrorRates {
            overall: 0.74,
            by_group: vec![
                error_rate("18–24", 0.81, "Young adults"),
                error_rate("25–34", 0.76, "Early career"),
                error_rate("35–44", 0.68, "Mid-career (Ref)"),
                error_rate("45–54", 0.65, "Late career"),
                error_rate("55+", 0.62, "Pre-retirement"),
                error_rate("Indigenous", 0.85, "Indigenous Australians"),
                error_rate("Non-Indigenous", 0.71, "Non-Indigenous"),
                error_rate("Remote", 0.82, "Remote/Very remote"),
                error_rate("Major cities", 0.69, "Major cities"),
            ],
        },
        intersectional: vec![
            subgroup("Non-Indigenous, 35–44, Major city", 0.22, "Ref", 0.62, Ref),
            subgroup("Non-Indigenous, 18–24, Major city", 0.38, "+0.16", 0.78, High),
            subgroup("Indigenous, 18–24, Remote", 0.63, "+0.41", 0.91, Critical),
            subgroup("Indigenous, 25–34, Remote", 0.54, "+0.32", 0.87, Critical),
            subgroup("Indigenous, 35–44, Major city", 0.41, "+0.19", 0.80, High),
            subgroup("Non-Indigenous, 18–24, Regional", 0.44, "+0.22", 0.82, High),
            subgroup("Indigenous, 18–24, Major city", 0.52, "+0.30", 0.88, Critical),
            subgroup("Non-Indigenous, 55+, Major city", 0.12, "−0.10", 0.58, Elevated),
            subgroup("Disability, 25–34, Regional", 0.47, "+0.25", 0.84, Critical),
            subgroup("Non-Indigenous, 35–44, Regional", 0.28, "+0.06", 0.70, Elevated),
        ],
        threshold_sensitivity: vec![
            threshold_point("±$0 (Exact match)", 0.81, 0.95, "Original Robodebt setting"),
            threshold_point("±$100/fortnight", 0.62, 0.92, "Minimal tolerance"),
            threshold_point("±$250/fortnight", 0.41, 0.87, "Low tolerance"),
            threshold_point("±$500/fortnight", 0.23, 0.78, "Moderate tolerance"),
            threshold_point("±$1000/fortnight", 0.11, 0.64, "High tolerance"),
            threshold_point("Actual fortnightly data", 0.05, 0.93, "Gold standard (manual review)"),
        ],
        statistical_validation: StatisticalValidation {
            bootstrap: "Bootstrap 95% CIs for Indigenous vs Non-Indigenous SPD: [0.15, 0.27]. All group disparities remain significant across 10,000 bootstrap resamples.".into(),
            permutation: "Permutation test (n=10,000): p < 0.001 for all primary comparisons. The observed disparities are extremely unlikely under the null hypothesis of no group differences.".into(),
            effect_size: "Cohen's d for Indigenous vs Non-Indigenous debt notice rates: d = 0.89 (large effect). Age 18–24 vs 35–44: d = 0.72 (medium-large). Remote vs Major cities: d = 0.64 (medium).".into(),
            bayesian: "Bayesian analysis with uninformative priors: P(SPD > 0.05 | data) > 0.999 for Indigenous comparison. Bayes Factor > 1000 for all primary comparisons, indicating decisive evidence of disparity.".into(),
        },
        recommendations: vec![
            recommendation("REC-01", "Immediate", "Cease all debt notices based solely on income averaging without fortnightly verification", "Eliminates the primary source of invalid debts and false positives across all groups"),
            recommendation("REC-02", "Immediate", "Establish dedicated review pathway for Indigenous and remote community recipients", "Addresses highest-disparity intersectional subgroups (SPD > 0.30)"),
            recommendation("REC-03", "Immediate", "Suspend automated debt recovery (garnishing) pending accuracy review", "Prevents ongoing financial harm from unverified debts"),
            recommendation("REC-04", "Short-term", "Implement fortnightly income verification using employer payroll data (STP) before issuing any debt notice", "Reduces false positive rate from ~74% to estimated ~5% based on manual review benchmarks"),
            recommendation("REC-05", "Short-term", "Conduct demographic parity audit on all historical debt notices and prioritise refund processing for highest-disparity groups", "Quantifies total harm by group and ensures equitable remediation"),
            recommendation("REC-06", "Short-term", "Establish independent fairness oversight board with Indigenous community representation", "Ensures ongoing monitoring and accountability for disparate impact"),
            recommendation("REC-07", "Medium-term", "Redesign compliance system with subgroup-specific thresholds accounting for employment pattern variability", "Addresses aggregation bias by recognising that income variability differs systematically across groups"),
            recommendation("REC-08", "Medium-term", "Implement human-in-the-loop review for all automated debt determinations exceeding $2,000", "Restores discretion for high-stakes decisions while maintaining efficiency for clear-cut cases"),
            recommendation("REC-09", "Medium-term", "Deploy continuous fairness monitoring dashboard tracking SPD, error rates, and intersectional outcomes in real-time", "Enables early detection of emerging disparities before they reach critical levels"),
            recommendation("REC-10", "Long-term", "Reform Social Security Act to mandate algorithmic impact assessments and fairness audits for all automated welfare decisions", "Systemic prevention: ensures future automated systems cannot be deployed without fairness validation"),
        ],
        audit_dimensions: vec![
            dimension("Data Quality", 1.0, "Income averaging produces fundamentally invalid fortnightly estimates. Data is accurate at the annual level but the transformation to fortnightly creates systematic measurement error."),
            dimension("Fairness Metrics", 1.0, "Fails both demographic parity and equal opportunity. SPD exceeds 0.20 for Indigenous Australians and 0.18 for young adults. Error rates differ by up to 23 percentage points across groups."),
            dimension("Transparency", 1.0, "Recipients were not told their debts were calculated using averaged data. Internal legal advice about unlawfulness was suppressed. Appeal processes did not explain the methodology."),
            dimension("Accountability", 2.0, "Some accountability achieved through courts and Royal Commission, but only after years of harm. No proactive internal accountability mechanisms functioned during operation."),
            dimension("Remediation", 3.0, "A$1.87B+ refunded through class action settlement and government scheme. However, non-financial harms (psychological distress, suicides, reputational damage) have not been fully addressed."),
        ],
        metric_summary: MetricSummary {
            highest_group_rate: "Indigenous Australians: 48% debt notice rate".into(),
            lowest_group_rate: "55+ age group: 14% debt notice rate".into(),
            worst_spd: "Indigenous vs Non-Indigenous: SPD = 0.21".into(),
            overall_error_rate: "74% of debts raised were invalid".into(),
        },
        ..C4Data::default()
    }
}

pub fn executive_summary() -> ExecutiveSummary {
    ExecutiveSummary {
        overall_risk_level: RiskClassification::Critical,
        key_findings: vec![
            "Income averaging methodology was legally invalid — Federal Court ruled it unlawful in 2019".into(),
            "Approximately 74% of all automated debts were incorrect, affecting ~700,000 individuals".into(),
            "Indigenous Australians received debt notices at 1.8x the rate of non-Indigenous recipients (SPD = 0.21)".into(),
            "Young adults (18-24) bore the highest burden with 42% flagging rate and 81% error rate".into(),
            "System operated for 4 years despite internal legal advice warning of unlawfulness".into(),
        ],
        top_disparities: vec![
            "Indigenous vs Non-Indigenous: SPD = 0.21 (4.2x regulatory threshold)".into(),
            "Age 18-24 vs 35-44: SPD = 0.18 (3.6x threshold)".into(),
            "Remote vs Major cities: SPD = 0.16 (3.2x threshold)".into(),
            "Indigenous youth in remote areas: 63% flagging rate, 91% error rate".into(),
        ],
        primary_recommendation: "Immediately cease all debt notices based on income averaging. Implement fortnightly income verification before any automated debt determination.".into(),
        deployment_readiness: DeploymentReadiness::NoGo,
    }
}

pub fn limitations() -> AuditLimitations {
    AuditLimitations {
        data_gaps: "Individual-level data was never publicly released by the government. Metrics are constructed from Royal Commission findings, Senate inquiry data, and published analyses. Exact disaggregated error rates by intersection are estimates consistent with the public record.".into(),
        methodological_limitations: "This audit applies a fairness framework retrospectively to a system that was not designed with fairness considerations. Some metrics (e.g., intersectional rates) required estimation from aggregate data rather than direct computation from individual records.".into(),
        scope_exclusions: "This audit does not cover: (1) individual psychological harm assessment, (2) long-term economic impact on affected communities, (3) comparison with other welfare compliance systems internationally, (4) detailed analysis of the appeal and review process outcomes.".into(),
        confidence_statement: "High confidence in directional findings (which groups were disproportionately affected and that error rates were extreme). Moderate confidence in exact magnitudes. Low confidence in precise intersectional estimates for small subgroups (e.g., Indigenous + Disability + Remote).".into(),
    }
}

fn metadata() -> AuditMetadata {
    AuditMetadata {
        id: "robodebt-case-study".into(),
        name: "Robodebt Case Study".into(),
        created_at: CASE_STUDY_TIMESTAMP,
        updated_at: CASE_STUDY_TIMESTAMP,
        version: 1,
        auditor_name: Some("Royal Commission of Inquiry into the Robodebt Scheme".into()),
        auditor_role: Some("Independent Public Inquiry".into()),
        auditor_organization: Some("Commonwealth of Australia".into()),
        signed_off_at: Some(CASE_STUDY_TIMESTAMP),
        signoff_statement: Some("The Royal Commission found that the Robodebt scheme was a \"crude and cruel mechanism, neither fair nor legal\" and that it represented \"a massive failure of public administration.\" The scheme caused immeasurable harm to hundreds of thousands of Australians, particularly the most vulnerable.".into()),
    }
}

/// The complete Learn Mode worksheet, with every derived score fresh.
pub fn learn_state() -> AuditState {
    let component_status = Component::ALL
        .iter()
        .map(|c| (c.key().to_string(), ComponentStatus::Complete))
        .collect();

    let c2 = c2();
    let mut c3 = c3();
    rescore_sources(
        &mut c3.bias_sources,
        &c2.primary_selection.definition,
        &BiasPriorityThresholds::default(),
    );

    AuditState {
        metadata: metadata(),
        mode: AuditMode::Learn,
        active_component: "overview".into(),
        component_status,
        system: system(),
        c1: c1(),
        c2,
        c3,
        c4: c4(),
        executive_summary: executive_summary(),
        limitations: limitations(),
        llm_analyses: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::{get_adaptive_weights, weighted_sum};
    use crate::risk::{calculate_risk_score, classify_risk};

    #[test]
    fn test_risk_matrix_scores_match_ratings() {
        let scores: Vec<f64> = c1().risk_matrix.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![125.0, 125.0, 100.0, 100.0, 80.0, 64.0, 60.0, 36.0]);
        for r in c1().risk_matrix {
            assert_eq!(r.score, calculate_risk_score(r.severity, r.likelihood, r.relevance));
            assert_eq!(r.classification, classify_risk(r.score));
        }
    }

    #[test]
    fn test_learn_sources_are_scored_under_primary_profile() {
        let state = learn_state();
        let weights = get_adaptive_weights(state.primary_definition()).weights;
        assert_eq!(weights.scope, 0.30);
        for source in &state.c3.bias_sources {
            assert_eq!(source.weighted_score, weighted_sum(&source.dimensions, &weights));
            assert_eq!(source.priority, BiasPriority::High);
        }
    }

    #[test]
    fn test_learn_shapes() {
        let state = learn_state();
        assert_eq!(state.c1.protected_groups.len(), 4);
        assert_eq!(state.c1.intersections.len(), 4);
        assert_eq!(state.c1.feedback_loops.len(), 3);
        assert_eq!(state.c2.answered_steps().count(), 7);
        assert_eq!(state.c2.secondary_selection.definition, "Equal Opportunity");
        let types: Vec<_> = state.c3.bias_sources.iter().map(|s| s.bias_type).collect();
        assert_eq!(types, BiasType::ALL.to_vec());
        assert_eq!(state.c4.error_rates.overall, 0.74);
    }
}
