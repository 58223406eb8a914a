// ==========================================
// BarOmatic - 请求校验器
// ==========================================
// 职责: 将原始请求校验并解析为 EventRequest
// 致命: 来宾数 / 时长 / 时段 / 受众 / 吧台列表为空 → InvalidRequest（指明字段）
// 非致命: 未知吧台、重复吧台 → 剔除并返回告警，计算继续
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::planner_config::RequestLimits;
use crate::config::station_catalog::StationCatalog;
use crate::domain::event::{EventRequest, EventRequestDraft};
use crate::domain::station::Station;
use crate::domain::types::{AudienceType, EventKind, StationKind, TimeOfDay};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

// ==========================================
// PlanWarning - 非致命告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PlanWarning {
    /// 目录中不存在的吧台名称（已剔除）
    UnknownStation(String),
    /// 重复选择的吧台（只保留首次出现）
    DuplicateStation(String),
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::UnknownStation(name) => write!(f, "未知吧台 '{}'，已从选择中剔除", name),
            PlanWarning::DuplicateStation(name) => write!(f, "吧台 '{}' 重复选择，已合并", name),
        }
    }
}

// ==========================================
// JSON 请求解析
// ==========================================
// 逐字段读取，类型错误同样归为 InvalidRequest 并指明字段

/// 从 JSON 文本解析原始请求
///
/// # 返回
/// - Err(ApiError::Serialization): 不是合法 JSON
/// - Err(ApiError::InvalidRequest): 顶层不是对象，或字段缺失/类型错误
pub fn parse_draft_json(raw: &str) -> ApiResult<EventRequestDraft> {
    let value: Value = serde_json::from_str(raw)?;
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::invalid("request", "顶层必须是 JSON 对象"))?;

    Ok(EventRequestDraft {
        guest_count: integer_field(object, "guest_count")?,
        duration_hours: number_field(object, "duration_hours")?,
        time_of_day: string_field(object, "time_of_day")?,
        audience: optional_string_field(object, "audience")?,
        event_kind: optional_string_field(object, "event_kind")?,
        stations: string_list_field(object, "stations")?,
    })
}

fn required<'v>(object: &'v Map<String, Value>, field: &str) -> ApiResult<&'v Value> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ApiError::invalid(field, "缺少字段")),
        Some(value) => Ok(value),
    }
}

fn integer_field(object: &Map<String, Value>, field: &str) -> ApiResult<i64> {
    let value = required(object, field)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    // 100.0 这类整数值浮点按整数接受
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => Ok(f as i64),
        Some(f) => Err(ApiError::invalid(field, format!("必须是整数，实际为 {}", f))),
        None => Err(ApiError::invalid(field, format!("必须是整数，实际为 {}", value))),
    }
}

fn number_field(object: &Map<String, Value>, field: &str) -> ApiResult<f64> {
    let value = required(object, field)?;
    value
        .as_f64()
        .ok_or_else(|| ApiError::invalid(field, format!("必须是数字，实际为 {}", value)))
}

fn string_field(object: &Map<String, Value>, field: &str) -> ApiResult<String> {
    let value = required(object, field)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ApiError::invalid(field, format!("必须是字符串，实际为 {}", value)))
}

fn optional_string_field(object: &Map<String, Value>, field: &str) -> ApiResult<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ApiError::invalid(field, format!("必须是字符串，实际为 {}", other))),
    }
}

fn string_list_field(object: &Map<String, Value>, field: &str) -> ApiResult<Vec<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ApiError::invalid(field, format!("元素必须是字符串，实际为 {}", item))
                })
            })
            .collect(),
        Some(other) => Err(ApiError::invalid(field, format!("必须是字符串数组，实际为 {}", other))),
    }
}

// ==========================================
// RequestValidator - 请求校验器
// ==========================================
pub struct RequestValidator<'a> {
    limits: &'a RequestLimits,
    catalog: &'a StationCatalog,
}

impl<'a> RequestValidator<'a> {
    pub fn new(limits: &'a RequestLimits, catalog: &'a StationCatalog) -> Self {
        Self { limits, catalog }
    }

    /// 校验并解析请求
    ///
    /// # 返回
    /// - Ok((EventRequest, 告警列表))
    /// - Err(ApiError::InvalidRequest): 任一字段非法，不产生部分结果
    pub fn validate(&self, draft: &EventRequestDraft) -> ApiResult<(EventRequest, Vec<PlanWarning>)> {
        let guest_count = self.validate_guest_count(draft.guest_count)?;
        let duration_hours = self.validate_duration(draft.duration_hours)?;
        let time_of_day = draft
            .time_of_day
            .parse::<TimeOfDay>()
            .map_err(|reason| ApiError::invalid("time_of_day", reason))?;
        let (audience, event_kind) =
            resolve_audience(draft.audience.as_deref(), draft.event_kind.as_deref())?;

        if draft.stations.is_empty() {
            return Err(ApiError::invalid("stations", "至少选择一个吧台"));
        }
        let (stations, warnings) = self.resolve_stations(&draft.stations);

        Ok((
            EventRequest::new_unchecked(
                guest_count,
                duration_hours,
                time_of_day,
                audience,
                event_kind,
                stations,
            ),
            warnings,
        ))
    }

    fn validate_guest_count(&self, raw: i64) -> ApiResult<u32> {
        let max = self.limits.effective_max_guest_count();
        if raw < 1 || raw > i64::from(max) {
            return Err(ApiError::invalid(
                "guest_count",
                format!("必须在 [1, {}] 内，实际为 {}", max, raw),
            ));
        }
        u32::try_from(raw).map_err(|e| ApiError::invalid("guest_count", e.to_string()))
    }

    fn validate_duration(&self, raw: f64) -> ApiResult<f64> {
        let max = self.limits.effective_max_duration_hours();
        if !raw.is_finite() || raw <= 0.0 || raw > max {
            return Err(ApiError::invalid(
                "duration_hours",
                format!("必须在 (0, {}] 内，实际为 {}", max, raw),
            ));
        }
        Ok(raw)
    }

    /// 解析吧台名称（保持输入顺序，剔除未知与重复）
    fn resolve_stations(&self, names: &[String]) -> (Vec<Station>, Vec<PlanWarning>) {
        let mut seen: HashSet<StationKind> = HashSet::new();
        let mut stations = Vec::new();
        let mut warnings = Vec::new();

        for name in names {
            match self.catalog.resolve(name) {
                None => {
                    warn!(station = %name, "未知吧台，已剔除");
                    warnings.push(PlanWarning::UnknownStation(name.trim().to_string()));
                }
                Some(station) if !seen.insert(station.kind) => {
                    warn!(station = %station.kind, "重复吧台，已合并");
                    warnings.push(PlanWarning::DuplicateStation(station.display_name.clone()));
                }
                Some(station) => stations.push(station.clone()),
            }
        }

        (stations, warnings)
    }
}

/// 受众解析: 直接给出受众，或由活动类型推导；两者同时给出时必须一致
fn resolve_audience(
    audience: Option<&str>,
    event_kind: Option<&str>,
) -> ApiResult<(AudienceType, Option<EventKind>)> {
    let kind = event_kind
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<EventKind>())
        .transpose()
        .map_err(|reason| ApiError::invalid("event_kind", reason))?;
    let direct = audience
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<AudienceType>())
        .transpose()
        .map_err(|reason| ApiError::invalid("audience", reason))?;

    match (direct, kind) {
        (Some(a), Some(k)) if a != k.audience() => Err(ApiError::invalid(
            "audience",
            format!("与活动类型 {} 的受众 {} 不一致", k, k.audience()),
        )),
        (Some(a), k) => Ok((a, k)),
        (None, Some(k)) => Ok((k.audience(), Some(k))),
        (None, None) => Err(ApiError::invalid(
            "audience",
            "audience 与 event_kind 至少提供一个",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(stations: &[&str]) -> EventRequestDraft {
        EventRequestDraft {
            guest_count: 120,
            duration_hours: 4.0,
            time_of_day: "evening".to_string(),
            audience: Some("social".to_string()),
            event_kind: None,
            stations: stations.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn validate(d: &EventRequestDraft) -> ApiResult<(EventRequest, Vec<PlanWarning>)> {
        let limits = RequestLimits::default();
        RequestValidator::new(&limits, StationCatalog::builtin()).validate(d)
    }

    fn failed_field(d: &EventRequestDraft) -> String {
        match validate(d) {
            Err(ApiError::InvalidRequest { field, .. }) => field,
            other => panic!("Expected InvalidRequest, got {:?}", other.map(|(r, _)| r)),
        }
    }

    #[test]
    fn test_valid_request() {
        let (request, warnings) = validate(&draft(&["Beer", "wine"])).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(request.guest_count(), 120);
        assert_eq!(request.stations().len(), 2);
        assert_eq!(request.audience(), AudienceType::Social);
    }

    #[test]
    fn test_guest_count_bounds() {
        let mut d = draft(&["Beer"]);
        d.guest_count = 0;
        assert_eq!(failed_field(&d), "guest_count");
        d.guest_count = 30_001;
        assert_eq!(failed_field(&d), "guest_count");
        d.guest_count = 30_000;
        assert!(validate(&d).is_ok());
    }

    #[test]
    fn test_duration_bounds() {
        let mut d = draft(&["Beer"]);
        for bad in [0.0, -1.0, 24.5, f64::NAN, f64::INFINITY] {
            d.duration_hours = bad;
            assert_eq!(failed_field(&d), "duration_hours");
        }
        d.duration_hours = 24.0;
        assert!(validate(&d).is_ok());
    }

    #[test]
    fn test_time_of_day_and_empty_stations() {
        let mut d = draft(&["Beer"]);
        d.time_of_day = "midnight".to_string();
        assert_eq!(failed_field(&d), "time_of_day");

        let d = draft(&[]);
        assert_eq!(failed_field(&d), "stations");
    }

    #[test]
    fn test_event_kind_drives_audience() {
        let mut d = draft(&["Espresso Bar"]);
        d.audience = None;
        d.event_kind = Some("Company Convention".to_string());
        let (request, _) = validate(&d).unwrap();
        assert_eq!(request.audience(), AudienceType::Professional);
        assert_eq!(request.event_kind(), Some(EventKind::CompanyConvention));

        d.audience = Some("social".to_string());
        assert_eq!(failed_field(&d), "audience");

        d.audience = None;
        d.event_kind = None;
        assert_eq!(failed_field(&d), "audience");
    }

    #[test]
    fn test_unknown_and_duplicate_stations_warn() {
        let (request, warnings) =
            validate(&draft(&["Beer", "Sake Bar", "beer", "Shakes"])).unwrap();
        let kinds: Vec<StationKind> = request.stations().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StationKind::Beer, StationKind::Shakes]);
        assert_eq!(
            warnings,
            vec![
                PlanWarning::UnknownStation("Sake Bar".to_string()),
                PlanWarning::DuplicateStation("Beer".to_string()),
            ]
        );
    }

    #[test]
    fn test_loose_limits_are_capped() {
        let limits = RequestLimits {
            max_guest_count: 100_000,
            max_duration_hours: 72.0,
        };
        let validator = RequestValidator::new(&limits, StationCatalog::builtin());

        let mut d = draft(&["Beer"]);
        d.guest_count = 30_001;
        assert!(matches!(
            validator.validate(&d),
            Err(ApiError::InvalidRequest { ref field, .. }) if field == "guest_count"
        ));

        let mut d = draft(&["Beer"]);
        d.duration_hours = 30.0;
        assert!(matches!(
            validator.validate(&d),
            Err(ApiError::InvalidRequest { ref field, .. }) if field == "duration_hours"
        ));
    }

    fn parse_failed_field(raw: &str) -> String {
        match parse_draft_json(raw) {
            Err(ApiError::InvalidRequest { field, .. }) => field,
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_draft_json() {
        let raw = r#"{"guest_count": 100.0, "duration_hours": 4, "time_of_day": "evening",
                      "event_kind": "Wedding", "stations": ["Beer", "Wine"]}"#;
        let d = parse_draft_json(raw).unwrap();
        assert_eq!(d.guest_count, 100);
        assert_eq!(d.duration_hours, 4.0);
        assert_eq!(d.audience, None);
        assert_eq!(d.event_kind.as_deref(), Some("Wedding"));
        assert_eq!(d.stations, vec!["Beer".to_string(), "Wine".to_string()]);
    }

    #[test]
    fn test_parse_draft_json_names_mistyped_field() {
        let base = r#""duration_hours": 4, "time_of_day": "evening", "audience": "social""#;
        assert_eq!(
            parse_failed_field(&format!(r#"{{"guest_count": "abc", {}}}"#, base)),
            "guest_count"
        );
        assert_eq!(
            parse_failed_field(&format!(r#"{{"guest_count": 100.5, {}}}"#, base)),
            "guest_count"
        );
        assert_eq!(parse_failed_field(&format!("{{{}}}", base)), "guest_count");
        assert_eq!(
            parse_failed_field(r#"{"guest_count": 10, "duration_hours": "long", "time_of_day": "evening"}"#),
            "duration_hours"
        );
        assert_eq!(
            parse_failed_field(r#"{"guest_count": 10, "duration_hours": 2, "time_of_day": 3}"#),
            "time_of_day"
        );
        assert_eq!(
            parse_failed_field(&format!(r#"{{"guest_count": 10, {}, "stations": ["Beer", 7]}}"#, base)),
            "stations"
        );
        assert_eq!(parse_failed_field("[1, 2]"), "request");
        assert!(matches!(parse_draft_json("{oops"), Err(ApiError::Serialization(_))));
    }

    #[test]
    fn test_all_unknown_yields_empty_selection() {
        let (request, warnings) = validate(&draft(&["Sake", "Mead"])).unwrap();
        assert!(request.stations().is_empty());
        assert_eq!(warnings.len(), 2);
    }
}
