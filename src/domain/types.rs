// ==========================================
// 人力排班系统 - 领域类型定义
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 班次偏好窗口
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次偏好 (Shift Preference)
// ==========================================
// 偏好窗口按"小时落入区间"判定,区间为闭区间:
// - morning    [7, 13]
// - afternoon  [13, 19]
// - evening    [16, 22]   (与 afternoon 刻意重叠)
// - night      {23} ∪ [0, 6]
// - flex       全天
// 未识别的偏好标签不匹配任何小时
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftPreference {
    Morning,
    Afternoon,
    Evening,
    Night,
    Flex,
    Other(String), // 未识别标签,原样保留
}

impl ShiftPreference {
    /// 解析偏好标签（不区分大小写）
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "morning" => ShiftPreference::Morning,
            "afternoon" => ShiftPreference::Afternoon,
            "evening" => ShiftPreference::Evening,
            "night" => ShiftPreference::Night,
            "flex" => ShiftPreference::Flex,
            _ => ShiftPreference::Other(tag.trim().to_string()),
        }
    }

    /// 判断给定小时是否落入偏好窗口
    ///
    /// # 参数
    /// - hour: 小时 (0-23)
    ///
    /// # 返回
    /// - true: 落入窗口
    pub fn matches_hour(&self, hour: u32) -> bool {
        match self {
            ShiftPreference::Morning => (7..=13).contains(&hour),
            ShiftPreference::Afternoon => (13..=19).contains(&hour),
            ShiftPreference::Evening => (16..=22).contains(&hour),
            ShiftPreference::Night => hour == 23 || hour <= 6,
            ShiftPreference::Flex => hour <= 23,
            ShiftPreference::Other(_) => false,
        }
    }

    /// 偏好匹配分 (1 匹配 / 0 不匹配)
    pub fn match_score(&self, hour: u32) -> u8 {
        if self.matches_hour(hour) {
            1
        } else {
            0
        }
    }
}

impl Default for ShiftPreference {
    fn default() -> Self {
        ShiftPreference::Flex
    }
}

impl fmt::Display for ShiftPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftPreference::Morning => write!(f, "morning"),
            ShiftPreference::Afternoon => write!(f, "afternoon"),
            ShiftPreference::Evening => write!(f, "evening"),
            ShiftPreference::Night => write!(f, "night"),
            ShiftPreference::Flex => write!(f, "flex"),
            ShiftPreference::Other(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<String> for ShiftPreference {
    fn from(tag: String) -> Self {
        ShiftPreference::parse(&tag)
    }
}

impl From<ShiftPreference> for String {
    fn from(pref: ShiftPreference) -> Self {
        pref.to_string()
    }
}
