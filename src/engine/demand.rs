// ==========================================
// BarOmatic - 需求估算引擎
// ==========================================
// 职责: 估算整场活动的人均杯数
// 分支:
// - 无吧台 → 0
// - 单吧台 → 单吧台上限（参考 4 小时活动按时长缩放）
// - 多吧台 → 人气累加 + 时长曲线，含强吧台时整体 × 衰减系数（至多一次）
// 红线: 输出恒为有限非负数
// ==========================================

use crate::config::planner_config::{DemandParameters, STRONG_DAMPENING};
use crate::config::station_catalog::single_station_base_cap;
use crate::domain::allocation::sanitize;
use crate::domain::station::{contains_strong, Station};
use crate::domain::types::{AudienceType, TimeOfDay};
use crate::engine::popularity::PopularityModel;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

// 时长曲线分段（小时）与各段速率倍数
const FIRST_HOUR_END: f64 = 1.0;
const PEAK_END: f64 = 3.0;
const DECLINE_END: f64 = 6.0;
const FIRST_HOUR_FACTOR: f64 = 2.0;
const PEAK_FACTOR: f64 = 1.0;
const DECLINE_FACTOR: f64 = 0.6;
const TAIL_FACTOR: f64 = 0.25;

// ==========================================
// DemandEstimator - 需求估算引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct DemandEstimator {
    params: Arc<DemandParameters>,
    popularity: PopularityModel,
}

impl DemandEstimator {
    pub fn new(params: Arc<DemandParameters>) -> Self {
        Self {
            params,
            popularity: PopularityModel::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 人均杯数（整场活动）
    #[instrument(skip(self, stations), fields(station_count = stations.len()))]
    pub fn total_drinks_per_guest(
        &self,
        stations: &[Station],
        duration_hours: f64,
        time_of_day: TimeOfDay,
        audience: AudienceType,
    ) -> f64 {
        match stations {
            [] => 0.0,
            [single] => self.single_station_cap(single, duration_hours, time_of_day, audience),
            _ => {
                let mut total =
                    self.undamped_total(stations, duration_hours, time_of_day, audience);
                if contains_strong(stations) {
                    total *= STRONG_DAMPENING;
                    debug!(dampening = STRONG_DAMPENING, "应用强吧台衰减");
                }
                finite_or_zero(total, "total_drinks_per_guest")
            }
        }
    }

    /// 多吧台未衰减总量（人气累加 + 时长曲线）
    pub fn undamped_total(
        &self,
        stations: &[Station],
        duration_hours: f64,
        time_of_day: TimeOfDay,
        audience: AudienceType,
    ) -> f64 {
        let popularity_sum: f64 = stations
            .iter()
            .map(|s| {
                self.popularity.adjusted_popularity(s, time_of_day, audience)
                    * self.params.popularity_weight
            })
            .sum();

        let base_rate = self.params.base_rate(time_of_day);
        let duration_multiplier = duration_multiplier(duration_hours, base_rate);

        debug!(
            popularity_sum,
            base_rate, duration_multiplier, "多吧台需求分量"
        );

        popularity_sum + duration_multiplier
    }

    /// 单吧台上限
    ///
    /// 规则:
    /// 1) base_cap 取自按种类的参考表（4 小时活动）
    /// 2) 按时长线性缩放
    /// 3) 乘以调整比例（调整后人气 / 基础人气）
    /// 4) 不小于 0
    pub fn single_station_cap(
        &self,
        station: &Station,
        duration_hours: f64,
        time_of_day: TimeOfDay,
        audience: AudienceType,
    ) -> f64 {
        let base_cap = single_station_base_cap(station.kind);
        let normalized_cap = base_cap * (duration_hours / self.params.reference_event_hours);
        let multiplier = self
            .popularity
            .adjustment_ratio(station, time_of_day, audience);

        let final_cap = finite_or_zero(normalized_cap * multiplier, "single_station_cap");
        debug!(
            station = %station.kind,
            base_cap, normalized_cap, multiplier, final_cap, "单吧台上限"
        );
        final_cap
    }
}

/// 时长曲线（前重后轻的四段线性）
///
/// 首小时 ×2，1-3 小时 ×1，3-6 小时 ×0.6，6 小时以后 ×0.25
pub fn duration_multiplier(hours: f64, base_rate: f64) -> f64 {
    let h = if hours.is_finite() { hours.max(0.0) } else { 0.0 };

    let first_hour = h.min(FIRST_HOUR_END);
    let peak = (h - FIRST_HOUR_END).max(0.0).min(PEAK_END - FIRST_HOUR_END);
    let decline = (h - PEAK_END).max(0.0).min(DECLINE_END - PEAK_END);
    let tail = (h - DECLINE_END).max(0.0);

    first_hour * base_rate * FIRST_HOUR_FACTOR
        + peak * base_rate * PEAK_FACTOR
        + decline * base_rate * DECLINE_FACTOR
        + tail * base_rate * TAIL_FACTOR
}

fn finite_or_zero(value: f64, what: &str) -> f64 {
    if !value.is_finite() {
        warn!(what, value, "数值退化，按 0 处理");
    }
    sanitize(value)
}
