// ==========================================
// BarOmatic - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含配置加载逻辑,不含引擎逻辑
// ==========================================

pub mod allocation;
pub mod event;
pub mod station;
pub mod supply;
pub mod types;

// 重导出核心类型
pub use allocation::{sanitize, AllocationEntry};
pub use event::{EventRequest, EventRequestDraft};
pub use station::{contains_strong, Station};
pub use supply::{PackCount, Quantity, SupplyLine, SupplySection, SupplyUnit};
pub use types::{AudienceType, EventKind, StationKind, TimeOfDay};
