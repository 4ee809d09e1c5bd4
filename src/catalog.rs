//! Static reference data: the fairness definition catalog and the default
//! accountable party for each bias type.
//!
//! Catalog names are display names. Only some of them have an adaptive weight
//! profile, and the match is exact: "Equalised Odds" here does not select the
//! "Equalized Odds" profile and scores with the base weights.

use crate::model::{AccountableParty, BiasType, FairnessDefinition};

struct DefinitionEntry {
    id: &'static str,
    name: &'static str,
    formula: &'static str,
    plain_language: &'static str,
    when_to_use: &'static str,
    limitations: &'static str,
}

const DEFINITIONS: [DefinitionEntry; 7] = [
    DefinitionEntry {
        id: "demographic-parity",
        name: "Demographic Parity",
        formula: "P(Ŷ=1 | G=a) = P(Ŷ=1 | G=b)",
        plain_language: "Each group should receive the positive outcome (or negative action like a debt notice) at the same rate. If 30% of one group gets flagged, roughly 30% of every group should be flagged.",
        when_to_use: "When the decision should not correlate with group membership at all, especially for initial screening or when base rates are similar across groups.",
        limitations: "May conflict with accuracy if true base rates differ across groups. Can be gamed by equalising rates without improving accuracy.",
    },
    DefinitionEntry {
        id: "equal-opportunity",
        name: "Equal Opportunity",
        formula: "P(Ŷ=1 | Y=1, G=a) = P(Ŷ=1 | Y=1, G=b)",
        plain_language: "Among people who truly deserve the positive outcome, each group should be selected at the same rate. If you actually owe a debt, the system should catch you at the same rate regardless of your group.",
        when_to_use: "When you want to ensure that qualified individuals from all groups have equal chances of being correctly identified. Best when ground truth labels are reliable.",
        limitations: "Requires reliable ground truth labels. Does not constrain false positive rates directly. May allow different rates of harm across groups.",
    },
    DefinitionEntry {
        id: "equalised-odds",
        name: "Equalised Odds",
        formula: "P(Ŷ=1 | Y=y, G=a) = P(Ŷ=1 | Y=y, G=b) for y ∈ {0, 1}",
        plain_language: "Both the true positive rate AND the false positive rate should be equal across groups. The system should be equally accurate for everyone, whether they truly owe a debt or not.",
        when_to_use: "When both types of errors (missing a true case and falsely flagging someone) matter, and you want equal accuracy across all groups.",
        limitations: "Very difficult to satisfy perfectly. Requires reliable ground truth. May require sacrificing some overall accuracy to equalise across groups.",
    },
    DefinitionEntry {
        id: "predictive-parity",
        name: "Predictive Parity",
        formula: "P(Y=1 | Ŷ=1, G=a) = P(Y=1 | Ŷ=1, G=b)",
        plain_language: "When the system flags someone, the probability that the flag is correct should be the same across groups. A debt notice should be equally likely to be valid regardless of the recipient’s group.",
        when_to_use: "When the precision of positive predictions is critical and you want to ensure that being flagged means the same thing for everyone.",
        limitations: "Can be satisfied while still having very different false positive rates across groups. Does not ensure equal treatment of those NOT flagged.",
    },
    DefinitionEntry {
        id: "calibration",
        name: "Calibration",
        formula: "P(Y=1 | S=s, G=a) = P(Y=1 | S=s, G=b) = s",
        plain_language: "If the system says there is a 70% chance someone owes a debt, then about 70% of people given that score should actually owe a debt, and this should hold true in every group.",
        when_to_use: "When the system outputs probability scores rather than binary decisions, and those scores need to be meaningful and trustworthy for all groups.",
        limitations: "Provably incompatible with equalised odds when base rates differ (Chouldechova, 2017). Focuses on score reliability rather than outcome fairness.",
    },
    DefinitionEntry {
        id: "individual-fairness",
        name: "Individual Fairness",
        formula: "d(f(x_i), f(x_j)) ≤ L · d(x_i, x_j)",
        plain_language: "Similar people should be treated similarly. Two individuals with similar incomes, work patterns, and circumstances should receive similar debt determinations, regardless of their demographic group.",
        when_to_use: "When individual-level fairness is paramount and you can define meaningful similarity between individuals. Complementary to group-level metrics.",
        limitations: "Requires defining a similarity metric, which involves subjective choices. Computationally expensive for large populations. Does not prevent systematic group-level disparities.",
    },
    DefinitionEntry {
        id: "counterfactual-fairness",
        name: "Counterfactual Fairness",
        formula: "P(Ŷ_A←a | X=x, A=a) = P(Ŷ_A←a′ | X=x, A=a)",
        plain_language: "A decision is fair if it would remain the same in a hypothetical world where the individual belonged to a different group. Would this person still receive a debt notice if they were not Indigenous?",
        when_to_use: "When you want to reason about whether group membership causally influenced the decision. Useful for identifying indirect discrimination through proxy variables.",
        limitations: "Requires strong causal assumptions. Counterfactuals are inherently unobservable. Defining \"everything else being equal\" is philosophically and practically challenging.",
    },
];

/// The seven fairness definitions offered in Component 2, in display order.
pub fn fairness_definitions() -> Vec<FairnessDefinition> {
    DEFINITIONS
        .iter()
        .map(|d| FairnessDefinition {
            id: d.id.to_string(),
            name: d.name.to_string(),
            formula: d.formula.to_string(),
            plain_language: d.plain_language.to_string(),
            when_to_use: d.when_to_use.to_string(),
            limitations: d.limitations.to_string(),
        })
        .collect()
}

pub fn definition_names() -> impl Iterator<Item = &'static str> {
    DEFINITIONS.iter().map(|d| d.name)
}

pub fn find_definition(name: &str) -> Option<FairnessDefinition> {
    fairness_definitions().into_iter().find(|d| d.name == name)
}

/// Who owns remediation of each bias type unless the auditor says otherwise.
pub fn default_accountable_party(bias_type: BiasType) -> AccountableParty {
    match bias_type {
        BiasType::Historical | BiasType::Deployment => AccountableParty::Leadership,
        BiasType::Representation => AccountableParty::DataTeam,
        BiasType::Measurement | BiasType::Aggregation => AccountableParty::ModelTeam,
        BiasType::Learning | BiasType::Evaluation => AccountableParty::ProductTeam,
    }
}
