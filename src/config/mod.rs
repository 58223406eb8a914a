// ==========================================
// BarOmatic - 配置层
// ==========================================
// 职责: 系统配置管理,支持文件 + 环境变量覆写
// 静态配置: 吧台目录、人气乘数表
// ==========================================

pub mod config_manager;
pub mod error;
pub mod planner_config;
pub mod popularity_table;
pub mod station_catalog;

// 重导出核心配置类型
pub use config_manager::{config_keys, get_default_config_path, snapshot_of, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use planner_config::{
    DemandParameters, PlannerConfig, RequestLimits, StaffingParameters, DURATION_HOURS_CEILING,
    GUEST_COUNT_CEILING, STRONG_DAMPENING,
};
pub use station_catalog::{single_station_base_cap, StationCatalog};
