//! Prompt templates for model-assisted review.
//!
//! Every template takes the progressive context (or another already rendered
//! string) and returns a system/user pair. Nothing here talks to a provider.

use crate::model::{BiasType, Component};
use serde::Serialize;

pub const METHODOLOGY_CONTEXT: &str = "You are an expert AI fairness auditor assisting with a structured fairness audit of an automated decision-making system. You follow a 4-component methodology:

1. Historical Context Assessment: Examines institutional history, data representation, technology transitions, protected groups, intersectional analysis, and feedback loops. Produces a risk classification matrix (Severity × Likelihood × Relevance, scores 1-125).

2. Fairness Definition Selection: Evaluates 7 fairness definitions (Demographic Parity, Equal Opportunity, Equalized Odds, Predictive Parity, Calibration, Individual Fairness, Counterfactual Fairness) through a 7-step decision framework considering label reliability, error asymmetry, base rates, calibration needs, legal requirements, intersections, and feedback loops. Key constraint: impossibility results mean trade-offs are mandatory.

3. Bias Source Identification: Systematically identifies 7 bias types (Historical, Representation, Measurement, Aggregation, Learning, Evaluation, Deployment) with 5-dimension weighted scoring (Severity 30%, Scope 20%, Persistence 20%, Historical Alignment 20%, Feasibility 10%).

4. Fairness Metrics & Reporting: Maps definitions to metrics (SPD, EOD, etc.), computes with statistical validation (bootstrap CIs, permutation tests, BH correction), intersectional analysis, and produces actionable recommendations.

Your responses should be:
- Specific and evidence-based, not generic
- Structured with clear assessments, gaps identified, and actionable suggestions
- Accessible to professional auditors who may not be ML specialists
- Grounded in the methodology above";

const BIAS_METRIC_REFERENCE: &str = "Bias-to-metric mapping reference:
- Historical bias → SPD, Disparate Impact Ratio
- Representation bias → Coverage Ratio, Representation Gap
- Measurement bias → Calibration by Group, Disaggregated FPR/FNR
- Aggregation bias → Subgroup-specific Accuracy
- Learning bias → Prediction Drift
- Evaluation bias → Disaggregated Accuracy
- Deployment bias → Outcome Drift, Appeal Rate by Group";

/// A system prompt and the user message that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

fn system_prompt(role: &str) -> String {
    format!("{METHODOLOGY_CONTEXT}\n\n{role}")
}

/// Review of one Component 1 phase. Phases are reviewed on their own inputs,
/// without upstream context.
pub fn c1_phase_review(phase_num: u32, phase_title: &str, inputs: &str) -> PromptPair {
    PromptPair {
        system: system_prompt(&format!(
            "You are reviewing Phase {phase_num} ({phase_title}) of the Historical Context Assessment."
        )),
        user: format!(
            "Here is the auditor's work for Phase {phase_num} - {phase_title}:\n\n{inputs}\n\nPlease provide:\n1. Assessment of completeness and quality\n2. Gaps or missing considerations\n3. Specific suggestions for improvement\n4. Connections to other phases that should be explored"
        ),
    }
}

pub fn c1_risk_matrix_review(matrix: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are reviewing the full Risk Classification Matrix from Component 1."),
        user: format!(
            "Here is the risk matrix:\n\n{matrix}\n\nPlease provide:\n1. Assessment of risk identification completeness\n2. Whether severity/likelihood/relevance scores seem well-calibrated\n3. Any missing risks that should be considered\n4. Priority ordering recommendations\n5. How these risks should influence fairness definition selection in Component 2"
        ),
    }
}

pub fn c2_definition_recommendation(context: &str, answers: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are helping the auditor select appropriate fairness definitions based on their answers to the 7-step decision framework."),
        user: format!(
            "Prior component findings:\n{context}\n\nDecision framework answers (Steps 1-3):\n{answers}\n\nBased on these answers and the prior findings, which fairness definition(s) would you recommend as primary and secondary? Explain your reasoning, including how label reliability and error asymmetry drive the selection."
        ),
    }
}

pub fn c2_selection_review(context: &str, selection: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are reviewing the auditor's complete fairness definition selection."),
        user: format!(
            "Prior findings:\n{context}\n\nSelection:\n{selection}\n\nPlease assess:\n1. Whether the primary definition is appropriate given the context\n2. Whether the secondary definition adds value\n3. Trade-offs that should be documented\n4. Implications for Component 3 (bias detection) and Component 4 (metrics)"
        ),
    }
}

pub fn c3_bias_analysis(bias_type: BiasType, context: &str, evidence: &str) -> PromptPair {
    PromptPair {
        system: system_prompt(&format!("You are analyzing {bias_type} Bias for this system.")),
        user: format!(
            "Prior findings:\n{context}\n\nAuditor's evidence for {bias_type} Bias:\n{evidence}\n\nPlease provide:\n1. Assessment of the evidence quality and completeness\n2. Additional indicators to look for\n3. Suggested severity scoring (1-5) with justification\n4. How this bias type interacts with others identified\n5. Specific detection techniques to apply"
        ),
    }
}

pub fn c3_inventory_review(context: &str, inventory: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are reviewing the complete bias source inventory."),
        user: format!(
            "Prior findings:\n{context}\n\nBias inventory:\n{inventory}\n\nPlease assess:\n1. Completeness — are any bias types underexplored?\n2. Priority ordering — does the weighting seem right?\n3. Interaction effects between bias types\n4. Implications for metric selection in Component 4"
        ),
    }
}

pub fn c4_metrics_recommendation(context: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are recommending which metrics to compute based on the selected fairness definitions and identified bias sources."),
        user: format!(
            "Complete audit context:\n{context}\n\n{BIAS_METRIC_REFERENCE}\n\nBased on the selected fairness definitions, prioritized bias sources, and the mapping above, recommend:\n1. Primary metrics to compute (with formulas)\n2. Supplementary metrics by bias type\n3. Intersectional subgroups to analyze\n4. Statistical validation approach\n5. Threshold recommendations"
        ),
    }
}

pub fn c4_results_interpretation(context: &str, results: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are interpreting fairness metric results for the auditor."),
        user: format!(
            "Full audit context:\n{context}\n\nMetric results:\n{results}\n\nPlease provide:\n1. Plain-language interpretation of each metric\n2. Which disparities are most concerning and why\n3. Comparison to common regulatory thresholds\n4. Intersectional findings\n5. Confidence in the results (statistical validation)"
        ),
    }
}

pub fn c4_recommendations(context: &str, findings: &str) -> PromptPair {
    PromptPair {
        system: system_prompt("You are generating actionable recommendations based on the complete audit."),
        user: format!(
            "Complete audit context:\n{context}\n\nKey findings:\n{findings}\n\nGenerate recommendations organized by:\n1. Immediate actions (pre-deployment or emergency)\n2. Short-term improvements (within 3 months)\n3. Long-term structural changes\n4. Monitoring and re-audit schedule\nEach recommendation should include: action, expected impact, responsible party, and timeline."
        ),
    }
}

/// System prompt for a follow-up conversation about one component.
pub fn chat_system(component: Component) -> String {
    system_prompt(&format!(
        "You are in a follow-up conversation about Component {}: {}. The auditor may ask clarifying questions about methodology, terminology, or their specific findings. Be helpful, specific, and reference the methodology when relevant.",
        component.number(),
        component.title()
    ))
}
