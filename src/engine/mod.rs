// ==========================================
// BarOmatic - 引擎层
// ==========================================
// 职责: 需求估算、分配、备货换算等业务规则引擎
// 主流程: PopularityModel → DemandEstimator → Allocator → SupplyCalculator
// 红线: 引擎无 IO、无共享可变状态
// ==========================================

pub mod allocator;
pub mod demand;
pub mod orchestrator;
pub mod popularity;
pub mod staffing;
pub mod supply;

// 重导出核心引擎
pub use allocator::Allocator;
pub use demand::{duration_multiplier, DemandEstimator};
pub use orchestrator::{EventPlan, EventPlanner, StationPlan};
pub use popularity::PopularityModel;
pub use staffing::{StaffingCalculator, StaffingEstimate};
pub use supply::SupplyCalculator;
