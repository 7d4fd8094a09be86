// ==========================================
// 人力排班系统 - 排班约束配置
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 6. 可选配置对象
// ==========================================
// 约束对象全链路接收但当前不参与资格与打分,
// 仅作为向前兼容的扩展挂点（班次模板/角色配额等留待后续接入）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("配置 JSON 解析失败: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

// ==========================================
// ShiftTemplate - 班次模板
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub name: String,
    pub start: u32, // 起始小时
    pub end: u32,   // 结束小时（可跨午夜,如 19 -> 7）
}

// ==========================================
// RoleRequirement - 角色配额
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub skill_min: i32,
    pub min_on_shift: u32,
}

// ==========================================
// SchedulingConstraints - 排班约束
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConstraints {
    #[serde(default)]
    pub max_shift_hours: Option<u32>,

    #[serde(default)]
    pub min_rest_hours_between_shifts: Option<u32>,

    #[serde(default)]
    pub max_week_hours: Option<f64>,

    #[serde(default)]
    pub shift_templates: Vec<ShiftTemplate>,

    #[serde(default)]
    pub role_requirements: HashMap<String, RoleRequirement>,
}

impl SchedulingConstraints {
    /// 从 JSON 文件加载排班约束
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let constraints = serde_json::from_str(&content)?;
        Ok(constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_constraints_json() {
        let json = r#"{
            "max_shift_hours": 12,
            "min_rest_hours_between_shifts": 12,
            "max_week_hours": 48,
            "shift_templates": [
                {"name": "day", "start": 7, "end": 19},
                {"name": "night", "start": 19, "end": 7}
            ],
            "role_requirements": {
                "ICU": {"skill_min": 3, "min_on_shift": 2}
            }
        }"#;
        let c: SchedulingConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(c.max_shift_hours, Some(12));
        assert_eq!(c.max_week_hours, Some(48.0));
        assert_eq!(c.shift_templates.len(), 2);
        assert_eq!(c.shift_templates[1].end, 7);
        assert_eq!(c.role_requirements["ICU"].skill_min, 3);
    }

    #[test]
    fn test_parse_partial_constraints_json() {
        // 字段全部可缺省
        let c: SchedulingConstraints = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SchedulingConstraints::default());
    }
}
