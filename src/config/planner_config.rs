use crate::domain::types::TimeOfDay;
use serde::{Deserialize, Serialize};

/// 强吧台衰减系数（固定口径，不开放配置）
pub const STRONG_DAMPENING: f64 = 0.8;

/// 来宾数硬上限，配置只能收紧
pub const GUEST_COUNT_CEILING: u32 = 30_000;

/// 活动时长硬上限（小时），配置只能收紧
pub const DURATION_HOURS_CEILING: f64 = 24.0;

/// 需求估算参数
///
/// 默认值即生产口径；ConfigManager 可按键覆写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandParameters {
    /// 上午基础饮用速率（杯/人/小时）
    pub morning_base_rate: f64,
    /// 下午基础饮用速率
    pub afternoon_base_rate: f64,
    /// 晚上基础饮用速率
    pub evening_base_rate: f64,
    /// 多吧台人气累加系数（防止吧台越多总量越膨胀）
    pub popularity_weight: f64,
    /// 单吧台上限的参考活动时长（小时）
    pub reference_event_hours: f64,
}

impl Default for DemandParameters {
    fn default() -> Self {
        Self {
            morning_base_rate: 0.7,
            afternoon_base_rate: 0.9,
            evening_base_rate: 1.2,
            popularity_weight: 0.5,
            reference_event_hours: 4.0,
        }
    }
}

impl DemandParameters {
    pub fn base_rate(&self, time_of_day: TimeOfDay) -> f64 {
        match time_of_day {
            TimeOfDay::Morning => self.morning_base_rate,
            TimeOfDay::Afternoon => self.afternoon_base_rate,
            TimeOfDay::Evening => self.evening_base_rate,
        }
    }
}

/// 请求校验上限
///
/// 生效值取配置与硬上限中较小者。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    pub max_guest_count: u32,
    pub max_duration_hours: f64,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_guest_count: GUEST_COUNT_CEILING,
            max_duration_hours: DURATION_HOURS_CEILING,
        }
    }
}

impl RequestLimits {
    /// 生效来宾数上限
    pub fn effective_max_guest_count(&self) -> u32 {
        self.max_guest_count.min(GUEST_COUNT_CEILING)
    }

    /// 生效时长上限
    pub fn effective_max_duration_hours(&self) -> f64 {
        self.max_duration_hours.min(DURATION_HOURS_CEILING)
    }
}

/// 人力参数（不参与需求估算）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingParameters {
    /// 每名服务人员覆盖的宾客数
    pub guests_per_worker: u32,
    /// 时薪
    pub hourly_rate: f64,
}

impl Default for StaffingParameters {
    fn default() -> Self {
        Self {
            guests_per_worker: 40,
            hourly_rate: 45.0,
        }
    }
}

/// 规划器完整配置（不可变，跨请求共享）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub demand: DemandParameters,
    pub limits: RequestLimits,
    pub staffing: StaffingParameters,
}
