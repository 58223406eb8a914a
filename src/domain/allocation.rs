// ==========================================
// BarOmatic - 需求分配结果
// ==========================================

use crate::domain::types::StationKind;
use serde::{Deserialize, Serialize};

// ==========================================
// AllocationEntry - 单吧台分配
// ==========================================
// 红线: 两个字段恒为有限非负数（分配器负责清洗）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub station: StationKind,
    pub drinks_per_guest: f64, // 人均杯数
    pub total_drinks: f64,     // 总杯数
}

impl AllocationEntry {
    /// 构造并清洗（NaN/Infinity/负数 → 0）
    pub fn sanitized(station: StationKind, drinks_per_guest: f64, total_drinks: f64) -> Self {
        Self {
            station,
            drinks_per_guest: sanitize(drinks_per_guest),
            total_drinks: sanitize(total_drinks),
        }
    }

    /// 是否已清洗
    pub fn is_sane(&self) -> bool {
        self.drinks_per_guest.is_finite()
            && self.total_drinks.is_finite()
            && self.drinks_per_guest >= 0.0
            && self.total_drinks >= 0.0
    }
}

/// 数值清洗：非有限值或负数归零
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
