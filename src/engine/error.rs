// ==========================================
// 人力排班系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum ScheduleError {
    // ===== 输入校验错误 =====
    #[error("需求槽非法 (timestamp {timestamp}): {message}")]
    InvalidSlot { timestamp: String, message: String },

    // ===== 导出错误 =====
    #[error("排班结果导出失败: {0}")]
    ExportError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ScheduleError {
    fn from(err: std::io::Error) -> Self {
        ScheduleError::ExportError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ScheduleError {
    fn from(err: csv::Error) -> Self {
        ScheduleError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ScheduleResult<T> = Result<T, ScheduleError>;
