// ==========================================
// BarOmatic - 引擎编排器
// ==========================================
// 用途: 协调需求估算 → 分配 → 备货计算的执行顺序
// 输入: 已校验的 EventRequest
// 输出: EventPlan（活动摘要 + 每吧台分配与备货清单）
// 红线: 纯函数，无共享可变状态；相同请求得到逐位相同的结果
// ==========================================

use crate::config::planner_config::PlannerConfig;
use crate::domain::allocation::{sanitize, AllocationEntry};
use crate::domain::event::EventRequest;
use crate::domain::supply::SupplyLine;
use crate::domain::types::{AudienceType, StationKind, TimeOfDay};
use crate::engine::allocator::Allocator;
use crate::engine::demand::DemandEstimator;
use crate::engine::staffing::{StaffingCalculator, StaffingEstimate};
use crate::engine::supply::SupplyCalculator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// StationPlan - 单吧台结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationPlan {
    pub station: StationKind,
    pub display_name: String,
    pub allocation: AllocationEntry,
    pub supplies: Vec<SupplyLine>,
}

// ==========================================
// EventPlan - 活动结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPlan {
    pub guest_count: u32,
    pub duration_hours: f64,
    pub time_of_day: TimeOfDay,
    pub audience: AudienceType,

    // 需求摘要
    pub total_drinks_per_guest: f64,
    pub total_drinks: f64, // round(人均 × 来宾数)
    pub dampening_factor: f64,
    pub station_count: usize,

    pub staffing: StaffingEstimate,
    pub stations: Vec<StationPlan>,
}

impl EventPlan {
    /// 分配条目（按吧台顺序）
    pub fn allocations(&self) -> impl Iterator<Item = &AllocationEntry> {
        self.stations.iter().map(|s| &s.allocation)
    }

    /// 全部备货行数
    pub fn supply_line_count(&self) -> usize {
        self.stations.iter().map(|s| s.supplies.len()).sum()
    }
}

// ==========================================
// EventPlanner - 引擎编排器
// ==========================================
#[derive(Debug, Clone)]
pub struct EventPlanner {
    demand: DemandEstimator,
    allocator: Allocator,
    supply: SupplyCalculator,
    staffing: StaffingCalculator,
}

impl EventPlanner {
    /// 创建编排器
    ///
    /// # 参数
    /// - config: 规划器配置（只读，跨请求共享）
    pub fn new(config: Arc<PlannerConfig>) -> Self {
        let demand_params = Arc::new(config.demand.clone());
        Self {
            demand: DemandEstimator::new(demand_params),
            allocator: Allocator::new(),
            supply: SupplyCalculator::new(),
            staffing: StaffingCalculator::new(config.staffing.clone()),
        }
    }

    pub fn allocator(&self) -> &Allocator {
        &self.allocator
    }

    pub fn staffing(&self) -> &StaffingCalculator {
        &self.staffing
    }

    /// 执行完整规划流程
    #[instrument(skip(self, request), fields(
        guests = request.guest_count(),
        hours = request.duration_hours(),
        time_of_day = %request.time_of_day(),
        audience = %request.audience(),
        station_count = request.stations().len()
    ))]
    pub fn plan(&self, request: &EventRequest) -> EventPlan {
        let stations = request.stations();
        let guests = request.guest_count();
        let hours = request.duration_hours();
        let tod = request.time_of_day();
        let audience = request.audience();

        // ==========================================
        // 步骤1: DemandEstimator - 人均杯数
        // ==========================================
        let total_drinks_per_guest =
            self.demand
                .total_drinks_per_guest(stations, hours, tod, audience);
        debug!(total_drinks_per_guest, "步骤1: 需求估算完成");

        // ==========================================
        // 步骤2: Allocator - 按人气比例分配
        // ==========================================
        let allocations =
            self.allocator
                .distribute(stations, total_drinks_per_guest, guests, tod, audience);
        debug!(entries = allocations.len(), "步骤2: 需求分配完成");

        // ==========================================
        // 步骤3: SupplyCalculator - 逐吧台备货
        // ==========================================
        let station_plans: Vec<StationPlan> = stations
            .iter()
            .zip(allocations)
            .map(|(station, allocation)| StationPlan {
                station: station.kind,
                display_name: station.display_name.clone(),
                supplies: self
                    .supply
                    .calculate(station.kind, guests, hours, allocation.total_drinks),
                allocation,
            })
            .collect();

        let total_drinks = sanitize((total_drinks_per_guest * f64::from(guests)).round());
        let plan = EventPlan {
            guest_count: guests,
            duration_hours: hours,
            time_of_day: tod,
            audience,
            total_drinks_per_guest,
            total_drinks,
            dampening_factor: self.allocator.dampening_factor(stations),
            station_count: stations.len(),
            staffing: self.staffing.estimate(guests, hours),
            stations: station_plans,
        };

        info!(
            total_drinks_per_guest,
            total_drinks,
            supply_lines = plan.supply_line_count(),
            "活动规划完成"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationCatalog;
    use crate::domain::station::Station;

    fn request(kinds: &[StationKind], guests: u32, hours: f64) -> EventRequest {
        let catalog = StationCatalog::builtin();
        let stations: Vec<Station> = kinds.iter().map(|k| catalog.get(*k).clone()).collect();
        EventRequest::new_unchecked(
            guests,
            hours,
            TimeOfDay::Evening,
            AudienceType::Social,
            None,
            stations,
        )
    }

    fn planner() -> EventPlanner {
        EventPlanner::new(Arc::new(PlannerConfig::default()))
    }

    #[test]
    fn test_single_beer_plan() {
        let plan = planner().plan(&request(&[StationKind::Beer], 100, 4.0));
        assert!((plan.total_drinks_per_guest - 3.696).abs() < 1e-9);
        assert_eq!(plan.total_drinks, 370.0);
        assert_eq!(plan.stations.len(), 1);
        let entry = plan.stations[0].allocation;
        assert_eq!(entry.drinks_per_guest, plan.total_drinks_per_guest);
        assert!((entry.total_drinks - 369.6).abs() < 1e-9);
        assert_eq!(plan.dampening_factor, 0.8);
        assert_eq!(plan.staffing.workers, 3);
    }

    #[test]
    fn test_empty_station_set() {
        let plan = planner().plan(&request(&[], 100, 4.0));
        assert_eq!(plan.total_drinks_per_guest, 0.0);
        assert_eq!(plan.total_drinks, 0.0);
        assert!(plan.stations.is_empty());
        assert_eq!(plan.supply_line_count(), 0);
        assert_eq!(plan.dampening_factor, 1.0);
    }

    #[test]
    fn test_multi_station_allocation_sums_to_total() {
        let plan = planner().plan(&request(
            &[StationKind::Cocktails, StationKind::Shakes, StationKind::Wine],
            400,
            6.0,
        ));
        let sum: f64 = plan.allocations().map(|a| a.drinks_per_guest).sum();
        assert!((sum - plan.total_drinks_per_guest).abs() < 1e-9);
        assert_eq!(plan.station_count, 3);
        assert!(plan.stations.iter().all(|s| !s.supplies.is_empty()));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let req = request(&[StationKind::Espresso, StationKind::IceBarad], 275, 3.25);
        let p = planner();
        assert_eq!(p.plan(&req), p.plan(&req));
    }
}
