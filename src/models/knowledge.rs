use serde::{Deserialize, Serialize};
use std::fmt;

/// Header line that precedes the tip block of a knowledge response.
pub const TIPS_HEADER: &str = "📝 Quick Tips:";

/// Prefix applied to every tip in a tip block.
pub const TIP_BULLET: &str = "• ";

/// 知识条目
///
/// A keyword mapped to a canned health response and optional tips.
/// Entries live in a static ordered slice; slice order is match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// 匹配关键词（小写）
    pub keyword: &'static str,
    /// 响应文本
    pub response: &'static str,
    /// 建议列表，可为空
    pub tips: &'static [&'static str],
}

impl KnowledgeEntry {
    /// Whether this entry's keyword occurs in already lower-cased `text`.
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.keyword)
    }

    /// Response text with the tip block appended when tips are present.
    pub fn render(&self) -> String {
        let mut out = String::from(self.response);
        if let Some(block) = format_tips(self.tips) {
            out.push_str("\n\n");
            out.push_str(&block);
        }
        out
    }
}

/// Formats a tip block: the header, then one bulleted tip per line.
///
/// Returns `None` for an empty tip list so callers never render a bare header.
pub fn format_tips(tips: &[&str]) -> Option<String> {
    if tips.is_empty() {
        return None;
    }

    let lines: Vec<String> = tips
        .iter()
        .map(|tip| format!("{}{}", TIP_BULLET, tip))
        .collect();

    Some(format!("{}\n{}", TIPS_HEADER, lines.join("\n")))
}

/// 接种年龄组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Adult,
    Elderly,
}

impl AgeGroup {
    /// Detection order used when a vaccination query names several groups.
    pub const DETECTION_ORDER: [AgeGroup; 3] = [AgeGroup::Child, AgeGroup::Adult, AgeGroup::Elderly];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 疫苗接种表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccinationTable {
    pub child: &'static str,
    pub adult: &'static str,
    pub elderly: &'static str,
}

impl VaccinationTable {
    pub fn schedule_for(&self, group: AgeGroup) -> &'static str {
        match group {
            AgeGroup::Child => self.child,
            AgeGroup::Adult => self.adult,
            AgeGroup::Elderly => self.elderly,
        }
    }
}

/// 响应类别
///
/// Which branch of the classifier produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Greeting,
    Help,
    Knowledge,
    Vaccination,
    VaccinationClarification,
    Emergency,
    Tip,
    Fallback,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 8] = [
        ResponseCategory::Greeting,
        ResponseCategory::Help,
        ResponseCategory::Knowledge,
        ResponseCategory::Vaccination,
        ResponseCategory::VaccinationClarification,
        ResponseCategory::Emergency,
        ResponseCategory::Tip,
        ResponseCategory::Fallback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResponseCategory::Greeting => "greeting",
            ResponseCategory::Help => "help",
            ResponseCategory::Knowledge => "knowledge",
            ResponseCategory::Vaccination => "vaccination",
            ResponseCategory::VaccinationClarification => "vaccination_clarification",
            ResponseCategory::Emergency => "emergency",
            ResponseCategory::Tip => "tip",
            ResponseCategory::Fallback => "fallback",
        }
    }

    /// Position in [`ResponseCategory::ALL`], used for counter arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseResult {
    /// 响应文本
    pub response_text: String,
    /// 命中的分支
    pub category: ResponseCategory,
}

impl ResponseResult {
    pub fn new(category: ResponseCategory, response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: KnowledgeEntry = KnowledgeEntry {
        keyword: "cough",
        response: "For cough: drink warm fluids.",
        tips: &["Try honey", "Avoid cold drinks"],
    };

    #[test]
    fn test_format_tips_empty_is_none() {
        assert!(format_tips(&[]).is_none());
    }

    #[test]
    fn test_format_tips_layout() {
        let block = format_tips(&["one", "two"]).unwrap();
        assert_eq!(block, "📝 Quick Tips:\n• one\n• two");
    }

    #[test]
    fn test_render_appends_tip_block() {
        let rendered = ENTRY.render();
        assert!(rendered.starts_with("For cough: drink warm fluids.\n\n📝 Quick Tips:\n"));
        assert!(rendered.ends_with("• Try honey\n• Avoid cold drinks"));
    }

    #[test]
    fn test_render_without_tips_is_plain_response() {
        let entry = KnowledgeEntry {
            tips: &[],
            ..ENTRY
        };
        assert_eq!(entry.render(), "For cough: drink warm fluids.");
    }

    #[test]
    fn test_category_index_matches_all_order() {
        for (i, category) in ResponseCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_age_group_serializes_snake_case() {
        let json = serde_json::to_string(&AgeGroup::Elderly).unwrap();
        assert_eq!(json, "\"elderly\"");
    }
}
