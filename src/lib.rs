// ==========================================
// BarOmatic - 核心库
// ==========================================
// 系统定位: 活动吧台饮品需求估算与备货清单
// 主流程: 请求校验 → 需求估算 → 比例分配 → 逐吧台备货
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 系统配置与静态目录
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AudienceType, EventKind, StationKind, TimeOfDay};

// 领域实体
pub use domain::{
    AllocationEntry, EventRequest, EventRequestDraft, Quantity, Station, SupplyLine,
    SupplySection, SupplyUnit,
};

// 配置
pub use config::{ConfigManager, PlannerConfig, StationCatalog};

// 引擎
pub use engine::{
    Allocator, DemandEstimator, EventPlan, EventPlanner, PopularityModel, StaffingCalculator,
    SupplyCalculator,
};

// API
pub use api::{ApiError, ApiResult, PlanApi, PlanReport, PlanWarning};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "BarOmatic";
