// ==========================================
// BarOmatic - 报告导出
// ==========================================
// 格式: JSON（完整报告） / CSV（备货清单） / 纯文本摘要
// CSV 列: station,section,label,quantity,unit,pack
// ==========================================

use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::plan_api::PlanReport;
use crate::domain::supply::Quantity;
use crate::engine::EventPlan;

/// CSV 行（数量为下单口径，已向上取整）
#[derive(Debug, Serialize)]
struct SupplyRow<'a> {
    station: &'a str,
    section: &'a str,
    label: &'a str,
    quantity: u64,
    unit: &'a str,
    pack: String,
}

/// 报告 → 格式化 JSON
pub fn report_to_json(report: &PlanReport) -> ApiResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 备货清单写入 CSV
pub fn write_supply_csv<W: io::Write>(plan: &EventPlan, writer: W) -> ApiResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for station in &plan.stations {
        let station_id = station.station.id();
        for line in &station.supplies {
            csv_writer.serialize(SupplyRow {
                station: station_id,
                section: line.section.title(),
                label: &line.label,
                quantity: line.quantity.ordered(),
                unit: line.unit.symbol(),
                pack: line
                    .pack
                    .as_ref()
                    .map(|p| format!("{} {}", p.count, p.noun))
                    .unwrap_or_default(),
            })?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| ApiError::Export(e.to_string()))
}

/// 备货清单 → CSV 字符串
pub fn supply_csv_string(plan: &EventPlan) -> ApiResult<String> {
    let mut buffer = Vec::new();
    write_supply_csv(plan, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ApiError::Export(e.to_string()))
}

/// 纯文本摘要（CLI 默认输出）
pub fn render_text_summary(report: &PlanReport) -> String {
    let plan = &report.plan;
    let mut out = String::new();

    // String 的 fmt::Write 不会失败
    let _ = writeln!(out, "Plan {}", report.plan_id);
    if let Some(kind) = report.event_kind {
        let _ = writeln!(out, "Event: {}", kind);
    }
    let _ = writeln!(
        out,
        "Guests: {}  Duration: {}h  Time: {}  Audience: {}",
        plan.guest_count, plan.duration_hours, plan.time_of_day, plan.audience
    );
    let _ = writeln!(
        out,
        "Drinks per guest: {:.2}  Total drinks: {}  Stations: {}  Dampening: {}",
        plan.total_drinks_per_guest, plan.total_drinks, plan.station_count, plan.dampening_factor
    );
    let _ = writeln!(
        out,
        "Staff: {} workers  Cost: {:.2}",
        plan.staffing.workers, plan.staffing.total_cost
    );
    for warning in &report.warnings {
        let _ = writeln!(out, "! {}", warning);
    }

    for station in &plan.stations {
        let _ = writeln!(
            out,
            "\n=== {} === ({:.2} per guest, {:.0} drinks)",
            station.display_name,
            station.allocation.drinks_per_guest,
            station.allocation.total_drinks.ceil()
        );
        let mut current = None;
        for line in &station.supplies {
            if current != Some(line.section) {
                let _ = writeln!(out, "--- {} ---", line.section);
                current = Some(line.section);
            }
            let exact = match line.quantity {
                Quantity::Amount(v) if v.fract() != 0.0 => format!("  [{:.3}]", v),
                _ => String::new(),
            };
            let _ = writeln!(out, "{:<32}: {}{}", line.label, line.display_quantity(), exact);
        }
    }

    out
}
