// ==========================================
// BarOmatic - 活动请求领域模型
// ==========================================
// EventRequestDraft: 外部输入（未校验，吧台为名称字符串）
// EventRequest:      已校验请求（只能经由 RequestValidator 构造）
// ==========================================

use crate::domain::station::Station;
use crate::domain::types::{AudienceType, EventKind, TimeOfDay};
use serde::{Deserialize, Serialize};

// ==========================================
// EventRequestDraft - 原始请求
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRequestDraft {
    pub guest_count: i64,
    pub duration_hours: f64,
    pub time_of_day: String,

    /// 受众类型（social/professional）；与 event_kind 至少给一个
    #[serde(default)]
    pub audience: Option<String>,

    /// 活动类型（wedding/convention/...）
    #[serde(default)]
    pub event_kind: Option<String>,

    /// 吧台名称（目录标识或显示名称）
    #[serde(default)]
    pub stations: Vec<String>,
}

// ==========================================
// EventRequest - 已校验请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRequest {
    guest_count: u32,
    duration_hours: f64,
    time_of_day: TimeOfDay,
    audience: AudienceType,
    event_kind: Option<EventKind>,
    stations: Vec<Station>,
}

impl EventRequest {
    /// 仅供校验器使用：字段合法性由调用方保证
    pub(crate) fn new_unchecked(
        guest_count: u32,
        duration_hours: f64,
        time_of_day: TimeOfDay,
        audience: AudienceType,
        event_kind: Option<EventKind>,
        stations: Vec<Station>,
    ) -> Self {
        Self {
            guest_count,
            duration_hours,
            time_of_day,
            audience,
            event_kind,
            stations,
        }
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn audience(&self) -> AudienceType {
        self.audience
    }

    pub fn event_kind(&self) -> Option<EventKind> {
        self.event_kind
    }

    /// 已解析、去重的吧台（保持输入顺序）
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}
