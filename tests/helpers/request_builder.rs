// ==========================================
// 请求构建器 - 用于集成测试
// ==========================================

use baromatic::api::{PlanWarning, RequestValidator};
use baromatic::config::{RequestLimits, StationCatalog};
use baromatic::domain::{EventRequest, EventRequestDraft};

// ==========================================
// EventRequestDraft 构建器
// ==========================================

pub struct RequestBuilder {
    draft: EventRequestDraft,
}

impl RequestBuilder {
    /// 默认: 100 位来宾、4 小时、晚上、社交
    pub fn new() -> Self {
        Self {
            draft: EventRequestDraft {
                guest_count: 100,
                duration_hours: 4.0,
                time_of_day: "evening".to_string(),
                audience: Some("social".to_string()),
                event_kind: None,
                stations: Vec::new(),
            },
        }
    }

    pub fn guests(mut self, guests: i64) -> Self {
        self.draft.guest_count = guests;
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.draft.duration_hours = hours;
        self
    }

    pub fn time_of_day(mut self, tod: &str) -> Self {
        self.draft.time_of_day = tod.to_string();
        self
    }

    pub fn audience(mut self, audience: &str) -> Self {
        self.draft.audience = Some(audience.to_string());
        self
    }

    pub fn no_audience(mut self) -> Self {
        self.draft.audience = None;
        self
    }

    pub fn event_kind(mut self, kind: &str) -> Self {
        self.draft.event_kind = Some(kind.to_string());
        self
    }

    pub fn station(mut self, name: &str) -> Self {
        self.draft.stations.push(name.to_string());
        self
    }

    pub fn stations(mut self, names: &[&str]) -> Self {
        self.draft
            .stations
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn build(self) -> EventRequestDraft {
        self.draft
    }

    /// 经默认配置校验，得到 EventRequest
    pub fn validated(self) -> (EventRequest, Vec<PlanWarning>) {
        let limits = RequestLimits::default();
        RequestValidator::new(&limits, StationCatalog::builtin())
            .validate(&self.draft)
            .unwrap_or_else(|e| panic!("请求校验失败: {}", e))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
