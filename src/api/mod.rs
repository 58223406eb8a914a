// ==========================================
// BarOmatic - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 CLI 及库调用方使用
// ==========================================

pub mod error;
pub mod export;
pub mod plan_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use export::{render_text_summary, report_to_json, supply_csv_string, write_supply_csv};
pub use plan_api::{PlanApi, PlanReport};
pub use validator::{parse_draft_json, PlanWarning, RequestValidator};
