//! Offline applicant trait analysis
//!
//! Counts trait keywords in a self-introduction, weighs them against each
//! department's requirement profile, and buckets the best match into a
//! fitness tier. This is the local advisory path used when the AI service
//! is unreachable, and it backs `POST /api/analyze` directly.

use crate::ai::FitnessLevel;
use crate::directory::{self, TRAIT_NAMES};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Keyword vocabulary per trait, indexed like [`TRAIT_NAMES`]
static QUALITY_KEYWORDS: Lazy<[Vec<&'static str>; 4]> = Lazy::new(|| {
    [
        // 勇气
        vec![
            "勇气", "勇敢", "强壮", "积极", "上进", "外向", "果断", "无畏", "胆量", "冒险",
            "大胆", "敢闯",
        ],
        // 谨慎
        vec![
            "谨慎", "细心", "周密", "慎重", "稳妥", "内向", "善良", "温和", "耐心", "细致",
            "小心",
        ],
        // 自律
        vec![
            "自律", "约束", "纪律", "规矩", "坚持", "克制", "守时", "负责", "可靠", "专注",
            "自制", "恪守",
        ],
        // 正义
        vec![
            "正义", "责任", "热情", "梦想", "公平", "公正", "助人", "奉献", "理想", "信念",
            "道德", "仁爱",
        ],
    ]
});

/// Result of an applicant analysis
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantReport {
    /// One-line summary of the dominant traits
    pub quality_analysis: String,
    /// Match tier of the best department
    pub fitness_level: FitnessLevel,
    /// Best-matching department
    pub recommended_department: String,
    /// Traits that stood out in the introduction
    pub possible_causes: Vec<String>,
    /// Follow-up suggestions for the applicant
    pub suggestions: Vec<String>,
    /// Whether a human consult should follow
    pub needs_human_consult: bool,
}

impl ApplicantReport {
    /// Render the report as an advisory chat reply.
    ///
    /// Used by the chat endpoint when the AI call fails and the local
    /// analysis stands in for it.
    pub fn advisory_text(&self) -> String {
        let mut text = format!(
            "{}。\n推荐部门：{}（匹配程度：{}）",
            self.quality_analysis,
            self.recommended_department,
            self.fitness_level.as_str()
        );
        for suggestion in &self.suggestions {
            text.push('\n');
            text.push_str("• ");
            text.push_str(suggestion);
        }
        text
    }
}

fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    haystack.matches(needle).count() as u32
}

/// Analyze a self-introduction and recommend a department
pub fn analyze_applicant(introduction: &str) -> ApplicantReport {
    let intro = introduction.to_lowercase();

    // Trait scores by keyword occurrence count.
    let mut trait_scores = [0u32; 4];
    for (i, keywords) in QUALITY_KEYWORDS.iter().enumerate() {
        for keyword in keywords {
            trait_scores[i] += count_occurrences(&intro, keyword);
        }
    }

    // Weighted match against each department; first roster entry wins ties.
    let mut best_dept = directory::all()[0].name;
    let mut max_score = 0u32;
    for dept in directory::all() {
        let score: u32 = dept
            .requirements
            .iter()
            .zip(trait_scores.iter())
            .map(|(weight, count)| weight * count)
            .sum();
        if score > max_score {
            max_score = score;
            best_dept = dept.name;
        }
    }

    let fitness_level = if max_score < 5 {
        FitnessLevel::Low
    } else if max_score < 15 {
        FitnessLevel::Medium
    } else if max_score < 25 {
        FitnessLevel::High
    } else {
        FitnessLevel::Critical
    };

    let mut sorted_traits: Vec<(usize, u32)> = trait_scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| *score > 0)
        .collect();
    sorted_traits.sort_by(|a, b| b.1.cmp(&a.1));

    let quality_analysis = match sorted_traits.as_slice() {
        [] => "无法分析您的特质".to_string(),
        [(first, _)] => format!("您的核心特质是{}", TRAIT_NAMES[*first]),
        [(first, _), (second, _), ..] => format!(
            "您的核心特质是{}和{}",
            TRAIT_NAMES[*first], TRAIT_NAMES[*second]
        ),
    };

    let possible_causes: Vec<String> = trait_scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score > 2)
        .map(|(i, _)| format!("您在自我介绍中体现了较强的{}特质", TRAIT_NAMES[i]))
        .collect();

    let mut suggestions = vec![
        format!("推荐您进一步了解{}的职责要求", best_dept),
        "建议准备相关面试材料，突出您的优势特质".to_string(),
    ];
    match fitness_level {
        FitnessLevel::Critical => {
            suggestions.push("您与推荐部门匹配度极高，请务必申请面试！".to_string());
        }
        FitnessLevel::Low => {
            suggestions.push("建议您重新考虑职业方向，或咨询HR获取更多指导".to_string());
        }
        _ => {}
    }

    let needs_human_consult =
        matches!(fitness_level, FitnessLevel::Low | FitnessLevel::Critical);

    ApplicantReport {
        quality_analysis,
        fitness_level,
        recommended_department: best_dept.to_string(),
        possible_causes,
        suggestions,
        needs_human_consult,
    }
}
