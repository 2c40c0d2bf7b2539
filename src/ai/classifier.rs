//! Reply classification
//!
//! Buckets a free-text AI reply into a discrete advisory outcome using
//! case-insensitive keyword containment. Classification is a strategy seam:
//! call sites talk to [`ReplyClassifier`], and the keyword implementation is
//! only the default — a structured model output could replace it without
//! touching the client.

use crate::directory;
use serde::{Deserialize, Serialize};

/// Advisory fitness tier, from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// No tier keyword matched
    Low,
    /// "一般" tier
    Medium,
    /// "合适" tier
    High,
    /// Highest urgency; always forces human handoff
    Critical,
}

impl FitnessLevel {
    /// String form used in API payloads and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Low => "low",
            FitnessLevel::Medium => "medium",
            FitnessLevel::High => "high",
            FitnessLevel::Critical => "critical",
        }
    }
}

/// Structured advisory outcome derived from a reply text
///
/// Derived solely from the reply; no other input influences it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// The raw reply text shown to the visitor
    pub reply: String,
    /// Advisory tier
    pub fitness_level: FitnessLevel,
    /// First department found in scan order, if any
    pub recommended_department: Option<String>,
    /// Whether the visitor should be routed to a human
    pub needs_human_handoff: bool,
}

/// Strategy seam for turning reply text into an [`AnalysisResult`]
pub trait ReplyClassifier: Send + Sync {
    /// Classify a reply text
    fn classify(&self, reply: &str) -> AnalysisResult;
}

/// Keyword-containment classifier
///
/// Tier vocabularies are tested in fixed priority order
/// (critical > high > medium, else low); the department scan walks the
/// roster order, not the text order.
pub struct KeywordClassifier {
    critical: Vec<String>,
    high: Vec<String>,
    medium: Vec<String>,
    handoff: Vec<String>,
    departments: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            critical: to_owned(&["危急", "critical", "立即就医"]),
            high: to_owned(&["合适", "high", "尽快就医"]),
            medium: to_owned(&["一般", "medium"]),
            handoff: to_owned(&["转人工", "人工客服", "hr"]),
            departments: directory::scan_order()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl KeywordClassifier {
    /// Build a classifier with custom vocabularies
    ///
    /// Keywords are matched against the lower-cased reply, so they should be
    /// provided lower-cased.
    pub fn new(
        critical: Vec<String>,
        high: Vec<String>,
        medium: Vec<String>,
        handoff: Vec<String>,
        departments: Vec<String>,
    ) -> Self {
        Self {
            critical,
            high,
            medium,
            handoff,
            departments,
        }
    }

    fn fitness_level(&self, content: &str) -> FitnessLevel {
        if contains_any(content, &self.critical) {
            FitnessLevel::Critical
        } else if contains_any(content, &self.high) {
            FitnessLevel::High
        } else if contains_any(content, &self.medium) {
            FitnessLevel::Medium
        } else {
            FitnessLevel::Low
        }
    }
}

fn contains_any(content: &str, words: &[String]) -> bool {
    words.iter().any(|w| content.contains(w.as_str()))
}

impl ReplyClassifier for KeywordClassifier {
    fn classify(&self, reply: &str) -> AnalysisResult {
        let content = reply.to_lowercase();

        let fitness_level = self.fitness_level(&content);

        // First match in scan order wins, regardless of text position.
        let recommended_department = self
            .departments
            .iter()
            .find(|d| content.contains(d.as_str()))
            .cloned();

        let needs_human_handoff =
            contains_any(&content, &self.handoff) || fitness_level == FitnessLevel::Critical;

        AnalysisResult {
            reply: reply.to_string(),
            fitness_level,
            recommended_department,
            needs_human_handoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(reply: &str) -> AnalysisResult {
        KeywordClassifier::default().classify(reply)
    }

    #[test]
    fn critical_outranks_lower_tiers_anywhere_in_text() {
        let result = classify("目前情况一般，但总体评估为危急，您非常合适这份工作");
        assert_eq!(result.fitness_level, FitnessLevel::Critical);
        assert!(result.needs_human_handoff);
    }

    #[test]
    fn tier_keywords_are_case_insensitive() {
        assert_eq!(classify("评估结果：CRITICAL").fitness_level, FitnessLevel::Critical);
        assert_eq!(classify("评估结果：High").fitness_level, FitnessLevel::High);
        assert_eq!(classify("评估结果：MEDIUM").fitness_level, FitnessLevel::Medium);
    }

    #[test]
    fn unmatched_text_defaults_to_low() {
        let result = classify("欢迎咨询青蓝公司招聘事宜");
        assert_eq!(result.fitness_level, FitnessLevel::Low);
        assert!(!result.needs_human_handoff);
        assert!(result.recommended_department.is_none());
    }

    #[test]
    fn department_pick_follows_scan_order_not_text_order() {
        // 惩戒部 appears first in the text, but 控制部 comes first in scan order.
        let result = classify("建议先去惩戒部报到，再到控制部登记");
        assert_eq!(result.recommended_department.as_deref(), Some("控制部"));
    }

    #[test]
    fn handoff_phrases_force_human_consult() {
        assert!(classify("请转人工处理").needs_human_handoff);
        assert!(classify("建议联系人工客服").needs_human_handoff);
        assert!(classify("请联系HR专员确认").needs_human_handoff);
    }

    #[test]
    fn worked_example_from_the_hiring_flow() {
        let result = classify("经过评估您的状态为critical，建议立即前往惩戒部面试");
        assert_eq!(result.fitness_level, FitnessLevel::Critical);
        assert_eq!(result.recommended_department.as_deref(), Some("惩戒部"));
        assert!(result.needs_human_handoff);
    }
}
