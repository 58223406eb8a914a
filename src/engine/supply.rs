// ==========================================
// BarOmatic - 备货计算引擎
// ==========================================
// 职责: 将单个吧台分得的总杯数换算为备货清单
// 输入: 吧台种类 + 来宾人数 + 时长 + 分得总杯数
// 输出: 有序 SupplyLine 列表（分区顺序与规则表一致）
// 红线: 只向上取整（宁多勿少）；各吧台之间无共享状态
// ==========================================

mod rules;

pub use rules::{RuleContext, CUP_BUFFER};

use crate::domain::allocation::sanitize;
use crate::domain::supply::SupplyLine;
use crate::domain::types::StationKind;
use tracing::{debug, instrument};

// ==========================================
// SupplyCalculator - 备货计算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplyCalculator {
    // 无状态引擎，不需要注入依赖
}

impl SupplyCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算单吧台备货清单
    ///
    /// 输入先规整: 来宾数至少 1；时长与杯数非有限或为负时按 0 处理。
    #[instrument(skip(self), fields(station = %kind))]
    pub fn calculate(
        &self,
        kind: StationKind,
        guest_count: u32,
        duration_hours: f64,
        total_drinks: f64,
    ) -> Vec<SupplyLine> {
        let ctx = Self::normalize(guest_count, duration_hours, total_drinks);
        let lines = rules::lines_for(kind, &ctx);
        debug!(line_count = lines.len(), drinks = ctx.drinks, "备货清单生成完成");
        lines
    }

    fn normalize(guest_count: u32, duration_hours: f64, total_drinks: f64) -> RuleContext {
        RuleContext {
            guests: f64::from(guest_count.max(1)),
            hours: sanitize(duration_hours),
            drinks: sanitize(total_drinks),
        }
    }
}
