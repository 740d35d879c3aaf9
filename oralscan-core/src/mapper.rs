//! Result Mapper
//!
//! Turns a classification label from the predictor into the text shown to
//! the user: headline message, cause, associated factors, histopathologic
//! features and a numbered recommendation.
//!
//! The mapping is a static table keyed by [`ScreeningLabel`]. Labels the
//! predictor may add in the future land on [`ScreeningLabel::Unknown`], which
//! has its own row instead of an implicit fallthrough.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label string the predictor uses for malignant tissue
pub const ORAL_CANCER_LABEL: &str = "Oral Cancer";

/// Label string the predictor uses for healthy tissue
pub const NORMAL_LABEL: &str = "Normal";

/// Closed set of screening outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningLabel {
    OralCancer,
    Normal,
    Unknown,
}

impl ScreeningLabel {
    /// Every variant, in table order
    pub const ALL: [ScreeningLabel; 3] = [
        ScreeningLabel::OralCancer,
        ScreeningLabel::Normal,
        ScreeningLabel::Unknown,
    ];

    /// Classify a raw predictor label. Matching is exact, as the predictor
    /// emits its class names verbatim.
    pub fn from_prediction(label: &str) -> Self {
        match label {
            ORAL_CANCER_LABEL => ScreeningLabel::OralCancer,
            NORMAL_LABEL => ScreeningLabel::Normal,
            _ => ScreeningLabel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningLabel::OralCancer => ORAL_CANCER_LABEL,
            ScreeningLabel::Normal => NORMAL_LABEL,
            ScreeningLabel::Unknown => "Unknown",
        }
    }

    /// Healthy results render with the reassuring style; everything else,
    /// including unknown labels, renders as an alert.
    pub fn is_normal(&self) -> bool {
        matches!(self, ScreeningLabel::Normal)
    }
}

impl fmt::Display for ScreeningLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cause, associated factors and histopathologic features for a label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub cause: String,
    pub conditions: Vec<String>,
    pub symptoms: Vec<String>,
}

/// Everything the result card shows for one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPresentation {
    pub label: ScreeningLabel,
    pub message: String,
    pub info: DiseaseInfo,
    /// Numbered steps separated by newlines; empty for unknown labels
    pub recommendation: String,
}

impl ResultPresentation {
    /// Recommendation split into its individual numbered lines
    pub fn recommendation_steps(&self) -> Vec<&str> {
        self.recommendation
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

struct PresentationRow {
    label: ScreeningLabel,
    message: &'static str,
    cause: &'static str,
    conditions: &'static [&'static str],
    symptoms: &'static [&'static str],
    recommendation: &'static [&'static str],
}

static PRESENTATIONS: [PresentationRow; 3] = [
    PresentationRow {
        label: ScreeningLabel::OralCancer,
        message: "Histopathologic features are consistent with Oral Squamous Cell Carcinoma (OSCC). Immediate specialist evaluation is recommended.",
        cause: "Malignant transformation of oral epithelial cells due to prolonged exposure to carcinogenic factors.",
        conditions: &[
            "Tobacco use",
            "Excessive alcohol consumption",
            "HPV infection",
            "Chronic mucosal irritation",
            "Poor oral hygiene",
        ],
        symptoms: &[
            "Non-healing oral ulcer",
            "Cellular dysplasia",
            "Abnormal epithelial thickening",
            "Pain or bleeding",
            "Tissue invasion",
        ],
        recommendation: &[
            "1. Consult an oral pathologist or oncologist immediately.",
            "2. Confirm diagnosis via biopsy.",
            "3. Early diagnosis improves survival outcomes.",
            "4. Follow standard clinical staging and treatment.",
        ],
    },
    PresentationRow {
        label: ScreeningLabel::Normal,
        message: "The histopathologic image shows normal oral tissue architecture with no evidence of malignancy.",
        cause: "Preserved stratified squamous epithelium with normal cellular morphology.",
        conditions: &["Healthy epithelial layers", "No dysplasia"],
        symptoms: &["Normal cellular architecture", "No malignant features"],
        recommendation: &[
            "1. Maintain good oral hygiene.",
            "2. Avoid tobacco and excessive alcohol.",
            "3. Schedule routine dental check-ups.",
            "4. Seek medical advice if symptoms arise.",
        ],
    },
    PresentationRow {
        label: ScreeningLabel::Unknown,
        message: "Unable to determine the result. Please try another image.",
        cause: "",
        conditions: &[],
        symptoms: &[],
        recommendation: &[],
    },
];

fn row(label: ScreeningLabel) -> &'static PresentationRow {
    // Table holds one row per variant, so the search always succeeds.
    PRESENTATIONS
        .iter()
        .find(|row| row.label == label)
        .unwrap_or(&PRESENTATIONS[2])
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Headline message for a label
pub fn disease_message(label: ScreeningLabel) -> &'static str {
    row(label).message
}

/// Cause / factors / features record for a label
pub fn disease_info(label: ScreeningLabel) -> DiseaseInfo {
    let row = row(label);
    DiseaseInfo {
        cause: row.cause.to_string(),
        conditions: owned(row.conditions),
        symptoms: owned(row.symptoms),
    }
}

/// Newline-separated recommendation for a label
pub fn disease_solution(label: ScreeningLabel) -> String {
    row(label).recommendation.join("\n")
}

/// Map a label to its full presentation
pub fn present_label(label: ScreeningLabel) -> ResultPresentation {
    ResultPresentation {
        label,
        message: disease_message(label).to_string(),
        info: disease_info(label),
        recommendation: disease_solution(label),
    }
}

/// Map a raw predictor label to its full presentation. Total: any string
/// produces a presentation.
pub fn present(prediction: &str) -> ResultPresentation {
    present_label(ScreeningLabel::from_prediction(prediction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_label() {
        for label in ScreeningLabel::ALL {
            assert_eq!(row(label).label, label);
        }
    }

    #[test]
    fn test_oral_cancer_presentation() {
        let p = present("Oral Cancer");
        assert_eq!(p.label, ScreeningLabel::OralCancer);
        assert!(p.message.contains("Oral Squamous Cell Carcinoma (OSCC)"));
        assert_eq!(
            p.info.cause,
            "Malignant transformation of oral epithelial cells due to prolonged exposure to carcinogenic factors."
        );
        assert_eq!(p.info.conditions.len(), 5);
        assert_eq!(p.info.symptoms.len(), 5);

        let steps = p.recommendation_steps();
        assert_eq!(steps.len(), 4);
        assert!(steps[0].starts_with("1. Consult an oral pathologist or oncologist"));
        assert!(steps[3].starts_with("4. "));
    }

    #[test]
    fn test_normal_presentation() {
        let p = present("Normal");
        assert_eq!(
            p.message,
            "The histopathologic image shows normal oral tissue architecture with no evidence of malignancy."
        );
        assert_eq!(p.info.conditions, vec!["Healthy epithelial layers", "No dysplasia"]);
        assert_eq!(p.recommendation_steps().len(), 4);
        assert_eq!(p.recommendation_steps()[0], "1. Maintain good oral hygiene.");
        assert!(p.label.is_normal());
    }

    #[test]
    fn test_unknown_presentation_is_empty() {
        for raw in ["", "normal", "Leukoplakia", "Oral Cancer "] {
            let p = present(raw);
            assert_eq!(p.label, ScreeningLabel::Unknown, "label {:?}", raw);
            assert_eq!(
                p.message,
                "Unable to determine the result. Please try another image."
            );
            assert_eq!(p.info, DiseaseInfo::default());
            assert!(p.recommendation.is_empty());
            assert!(p.recommendation_steps().is_empty());
            assert!(!p.label.is_normal());
        }
    }

    #[test]
    fn test_recommendation_is_newline_joined() {
        let solution = disease_solution(ScreeningLabel::OralCancer);
        assert_eq!(solution.lines().count(), 4);
        assert!(solution.contains("2. Confirm diagnosis via biopsy.\n3. "));
    }

    #[test]
    fn test_label_round_trips_through_str() {
        assert_eq!(ScreeningLabel::from_prediction(ORAL_CANCER_LABEL).as_str(), ORAL_CANCER_LABEL);
        assert_eq!(ScreeningLabel::from_prediction(NORMAL_LABEL).to_string(), NORMAL_LABEL);
    }
}
