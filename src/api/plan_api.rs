// ==========================================
// BarOmatic - 活动规划 API
// ==========================================
// 职责: 请求校验 → 引擎编排 → 规划报告
// 附带: 衰减系数独立查询、人力费用查询
// 红线: 无状态，每次调用都是请求到结果的一次性变换
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::api::validator::{parse_draft_json, PlanWarning, RequestValidator};
use crate::config::{snapshot_of, ConfigManager, PlannerConfig, StationCatalog};
use crate::domain::event::{EventRequest, EventRequestDraft};
use crate::domain::station::Station;
use crate::domain::types::EventKind;
use crate::engine::{EventPlan, EventPlanner, StaffingEstimate};

// ==========================================
// PlanReport - 规划报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub plan_id: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_kind: Option<EventKind>,
    pub warnings: Vec<PlanWarning>,
    /// 生效配置快照（JSON，键有序）
    pub config_snapshot: String,
    pub plan: EventPlan,
}

// ==========================================
// PlanApi - 活动规划 API
// ==========================================

/// 活动规划API
///
/// 职责：
/// 1. 校验原始请求（字段错误直接拒绝，未知吧台降级为告警）
/// 2. 驱动 EventPlanner 完成估算、分配、备货
/// 3. 生成带 ID、时间戳、配置快照的报告
pub struct PlanApi {
    config: Arc<PlannerConfig>,
    catalog: &'static StationCatalog,
    planner: EventPlanner,
}

impl PlanApi {
    /// 从配置管理器创建（配置非法时返回 ApiError::Config）
    pub fn new(config_manager: &ConfigManager) -> ApiResult<Self> {
        let config = config_manager.load_planner_config()?;
        Ok(Self::with_config(config))
    }

    /// 使用给定配置创建
    pub fn with_config(config: PlannerConfig) -> Self {
        let config = Arc::new(config);
        Self {
            planner: EventPlanner::new(config.clone()),
            catalog: StationCatalog::builtin(),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    // ==========================================
    // 规划接口
    // ==========================================

    /// 规划一场活动
    ///
    /// # 返回
    /// - Ok(PlanReport): 规划报告（含非致命告警）
    /// - Err(ApiError::InvalidRequest): 请求字段非法
    #[instrument(skip(self, draft), fields(guests = draft.guest_count, stations = draft.stations.len()))]
    pub fn plan_event(&self, draft: &EventRequestDraft) -> ApiResult<PlanReport> {
        let validator = RequestValidator::new(&self.config.limits, self.catalog);
        let (request, warnings) = validator.validate(draft)?;

        let plan = self.plan_request(&request);
        let report = PlanReport {
            plan_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            event_kind: request.event_kind(),
            warnings,
            config_snapshot: snapshot_of(&self.config),
            plan,
        };

        info!(
            plan_id = %report.plan_id,
            total_drinks = report.plan.total_drinks,
            warnings = report.warnings.len(),
            "规划报告已生成"
        );
        Ok(report)
    }

    /// 从 JSON 文本规划（字段类型错误同样报告字段名）
    pub fn plan_event_json(&self, raw: &str) -> ApiResult<PlanReport> {
        let draft = parse_draft_json(raw)?;
        self.plan_event(&draft)
    }

    /// 对已校验请求执行规划（确定性，不含 ID/时间戳）
    pub fn plan_request(&self, request: &EventRequest) -> EventPlan {
        self.planner.plan(request)
    }

    // ==========================================
    // 独立查询
    // ==========================================

    /// 衰减系数（按名称解析吧台，未知名称忽略）
    pub fn dampening_factor(&self, station_names: &[String]) -> f64 {
        let stations: Vec<Station> = station_names
            .iter()
            .filter_map(|name| {
                let resolved = self.catalog.resolve(name);
                if resolved.is_none() {
                    warn!(station = %name, "未知吧台，衰减系数计算时忽略");
                }
                resolved.cloned()
            })
            .collect();
        self.planner.allocator().dampening_factor(&stations)
    }

    /// 人力与费用
    pub fn staffing_cost(&self, guest_count: u32, duration_hours: f64) -> StaffingEstimate {
        self.planner.staffing().estimate(guest_count, duration_hours)
    }
}

impl Default for PlanApi {
    fn default() -> Self {
        Self::with_config(PlannerConfig::default())
    }
}
