// ==========================================
// BarOmatic - 人力估算
// ==========================================
// 职责: 按来宾数估算吧员人数与人工费用
// 公式: workers = ceil(guests / guests_per_worker)
//       total_cost = workers × hours × hourly_rate
// 不参与需求估算，仅与需求摘要一同输出
// ==========================================

use crate::config::planner_config::StaffingParameters;
use crate::domain::allocation::sanitize;
use crate::domain::supply::ceil_to_u64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingEstimate {
    pub workers: u64,
    pub hourly_rate: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone)]
pub struct StaffingCalculator {
    params: StaffingParameters,
}

impl StaffingCalculator {
    pub fn new(params: StaffingParameters) -> Self {
        Self { params }
    }

    pub fn estimate(&self, guest_count: u32, duration_hours: f64) -> StaffingEstimate {
        let per_worker = f64::from(self.params.guests_per_worker.max(1));
        let workers = ceil_to_u64(f64::from(guest_count) / per_worker);
        let total_cost = sanitize(workers as f64 * duration_hours * self.params.hourly_rate);

        StaffingEstimate {
            workers,
            hourly_rate: self.params.hourly_rate,
            total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let calc = StaffingCalculator::new(StaffingParameters::default());
        let est = calc.estimate(100, 4.0);
        assert_eq!(est.workers, 3);
        assert_eq!(est.total_cost, 540.0);

        let est = calc.estimate(40, 2.5);
        assert_eq!(est.workers, 1);
        assert_eq!(est.total_cost, 112.5);
    }

    #[test]
    fn test_custom_parameters() {
        let calc = StaffingCalculator::new(StaffingParameters {
            guests_per_worker: 25,
            hourly_rate: 60.0,
        });
        let est = calc.estimate(51, 3.0);
        assert_eq!(est.workers, 3);
        assert_eq!(est.total_cost, 540.0);
    }
}
