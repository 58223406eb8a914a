// ==========================================
// BarOmatic - 吧台领域模型
// ==========================================
// 职责: 静态目录条目（启动时创建，永不修改）
// 备货规则表按 kind 挂在 engine::supply::rules
// ==========================================

use crate::domain::types::StationKind;
use serde::{Deserialize, Serialize};

// ==========================================
// Station - 吧台目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub kind: StationKind,            // 种类（规则表的键）
    pub id: String,                   // 目录标识
    pub display_name: String,         // 显示名称
    pub base_popularity: f64,         // 基础人气 (0.0 - 1.0)
    pub is_strong: bool,              // 酒精/浓咖啡类“强吧台”标记
}

impl Station {
    pub fn new(
        kind: StationKind,
        display_name: &str,
        base_popularity: f64,
        is_strong: bool,
    ) -> Self {
        Self {
            kind,
            id: kind.id().to_string(),
            display_name: display_name.to_string(),
            base_popularity,
            is_strong,
        }
    }
}

/// 是否包含任一强吧台
pub fn contains_strong(stations: &[Station]) -> bool {
    stations.iter().any(|s| s.is_strong)
}
