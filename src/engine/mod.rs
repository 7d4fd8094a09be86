// ==========================================
// 人力排班系统 - 引擎层
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 组件依赖顺序
// ==========================================
// 职责: 实现排班业务规则,不做文件 I/O（导出除外,见 orchestrator）
// 红线: 槽必须按时间升序严格串行处理,台账状态依赖历史
// ==========================================

pub mod committer;
pub mod coverage;
pub mod error;
pub mod ledger;
pub mod normalizer;
pub mod orchestrator;
pub mod ranker;

// 重导出核心引擎
pub use committer::AssignmentCommitter;
pub use coverage::CoverageAggregator;
pub use error::{ScheduleError, ScheduleResult};
pub use ledger::{EmployeeLedger, LedgerEntry, MIN_REST_GAP_HOURS};
pub use normalizer::DemandNormalizer;
pub use orchestrator::{ScheduleOrchestrator, ScheduleRunResult};
pub use ranker::{CandidateRanker, EligibilityMode, ScoredCandidate};
