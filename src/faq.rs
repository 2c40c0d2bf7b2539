//! FAQ knowledge list
//!
//! Fixed question/answer entries grouped by category, with keyword search
//! over question and answer text. The front-end FAQ browser consumes this
//! as-is.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One FAQ entry
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    /// Category label
    pub category: &'static str,
    /// Question text
    pub question: &'static str,
    /// Answer text
    pub answer: &'static str,
}

static FAQ_ENTRIES: Lazy<Vec<FaqEntry>> = Lazy::new(|| {
    vec![
        FaqEntry {
            category: "一般类",
            question: "青蓝公司到底是做什么的？听起来很神秘。",
            answer: "青蓝公司是一家专注于“认知能量”研究与应用的尖端科技企业，核心业务是收容“异常”并从中提取纯净能源“脑啡肽”。我们的愿景是：重塑世界，臻于完美。",
        },
        FaqEntry {
            category: "一般类",
            question: "公司的名字“青蓝”有什么含义？",
            answer: "青出于蓝而胜于蓝。公司相信唯有直面最深沉的黑暗，方能铸就超越当下的未来，这正是“青蓝”二字的寓意。",
        },
        FaqEntry {
            category: "一般类",
            question: "工作环境安全吗？听说有风险。",
            answer: "公司为每位员工配备EGO防护装备，安保部7x24小时待命，所有作业均遵循严格规程。风险客观存在，但“以谨慎规避风险”是我们的核心价值观之一。",
        },
        FaqEntry {
            category: "一般类",
            question: "公司的上下班时间是怎样的？需要加班吗？",
            answer: "标准工作时间为9:00-18:00。控制部与安保部实行轮班制；发生收容突破事件时可能需要应急响应，应急时长计入调休。",
        },
        FaqEntry {
            category: "一般类",
            question: "公司有食堂吗？伙食怎么样？",
            answer: "福利部运营公司食堂与休息区，提供高品质餐饮。用福利部的话说：“一杯咖啡，一份温暖，支撑我们走过漫漫长夜。”",
        },
        FaqEntry {
            category: "一般类",
            question: "新人刚入职会有人带吗？",
            answer: "会的。培训部负责全部新员工的入职培训与心理韧性培养，并为每位新人指定引导员，帮助你安全度过适应期。",
        },
        FaqEntry {
            category: "一般类",
            question: "完整的招聘流程是怎样的？",
            answer: "流程为：提交自我介绍 → AI初步评估 → 部门推荐 → 预约面试 → 部长面谈 → 入职培训。AI评估结果仅作参考，最终决定由面试官做出。",
        },
        FaqEntry {
            category: "一般类",
            question: "AI初步评估会评估什么？",
            answer: "AI会根据您的自我介绍分析勇气、谨慎、自律、正义四项特质，并据此推荐匹配的部门与合适程度。",
        },
        FaqEntry {
            category: "一般类",
            question: "我没有相关经验，可以申请吗？",
            answer: "可以。多数岗位更看重特质匹配而非经验，培训部会提供完整的岗前培训。",
        },
        FaqEntry {
            category: "一般类",
            question: "如果面试失败了，还可以再申请吗？",
            answer: "可以。面试结果保留三个月，期满后可重新提交申请；建议期间参加培训部的公开课程提升匹配度。",
        },
        FaqEntry {
            category: "部门相关",
            question: "公司里哪个部门最核心？",
            answer: "每个部门都是能源提取链条上不可或缺的一环。构筑部统筹“光之种”计划，控制部是运营的神经中枢，但没有任何一环可以独立运转。",
        },
        FaqEntry {
            category: "部门相关",
            question: "我想申请安保部，需要什么条件？",
            answer: "安保部要求极高的勇气与正义感：冷静、果断、优秀的团队协作能力，以及在极端压力下作战的意志。体能测试与心理评估为必经环节。",
        },
        FaqEntry {
            category: "部门相关",
            question: "情报部的工作是不是就是看监控？",
            answer: "不是。情报部是数据分析与处理核心，负责将无序的异常观察数据转化为结构化情报，包括风险评级与工作流程优化，远不止“看监控”。",
        },
        FaqEntry {
            category: "部门相关",
            question: "福利部除了发福利还做什么？",
            answer: "福利部管理食堂与休息区、组织心理辅导课程、分配EGO装备与防护物资，并处理员工投诉与建议，是公司的士气维护中心。",
        },
        FaqEntry {
            category: "部门相关",
            question: "惩戒部听起来很可怕，他们是做什么的？",
            answer: "惩戒部处理最高危险等级的异常突破事件与严重违规的纪律制裁，是公司最锋利的矛。他们的标语是：“谈判由别人负责。我们只负责带来终结。”",
        },
        FaqEntry {
            category: "部门相关",
            question: "研发部（Binah）和构筑部（Keter）有什么区别？",
            answer: "研发部解析异常本质并研发EGO装备，是技术的源泉；构筑部是最高指挥中心，统筹“光之种”计划的宏观进程。一个负责理解，一个负责方向。",
        },
    ]
});

/// All entries, in fixed order
pub fn all() -> &'static [FaqEntry] {
    &FAQ_ENTRIES
}

/// Distinct categories, in first-appearance order
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for entry in FAQ_ENTRIES.iter() {
        if !seen.contains(&entry.category) {
            seen.push(entry.category);
        }
    }
    seen
}

/// Filter entries by optional category and keyword.
///
/// The keyword matches question or answer text, case-insensitively.
pub fn search(category: Option<&str>, keyword: Option<&str>) -> Vec<&'static FaqEntry> {
    let keyword = keyword.map(str::to_lowercase);
    FAQ_ENTRIES
        .iter()
        .filter(|entry| match category {
            Some(c) if c != "全部" => entry.category == c,
            _ => true,
        })
        .filter(|entry| match &keyword {
            Some(k) if !k.is_empty() => {
                entry.question.to_lowercase().contains(k)
                    || entry.answer.to_lowercase().contains(k)
            }
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_without_filters_returns_everything() {
        assert_eq!(search(None, None).len(), all().len());
    }

    #[test]
    fn category_filter_is_exact_and_quan_bu_means_all() {
        let dept = search(Some("部门相关"), None);
        assert!(!dept.is_empty());
        assert!(dept.iter().all(|e| e.category == "部门相关"));
        assert_eq!(search(Some("全部"), None).len(), all().len());
    }

    #[test]
    fn keyword_matches_question_and_answer_text() {
        let hits = search(None, Some("惩戒部"));
        assert!(!hits.is_empty());
        // "EGO" only appears in answers; keyword search is case-insensitive.
        assert!(!search(None, Some("ego")).is_empty());
    }

    #[test]
    fn categories_preserve_first_appearance_order() {
        assert_eq!(categories(), vec!["一般类", "部门相关"]);
    }
}
