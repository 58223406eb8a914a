// ==========================================
// 集成测试公共辅助
// ==========================================

#![allow(dead_code)]

pub mod request_builder;

pub use request_builder::RequestBuilder;

use baromatic::domain::SupplyLine;

/// 浮点比较容差
pub const EPS: f64 = 1e-9;

/// 按标签查找备货行（找不到直接 panic）
pub fn line<'a>(lines: &'a [SupplyLine], label: &str) -> &'a SupplyLine {
    lines
        .iter()
        .find(|l| l.label == label)
        .unwrap_or_else(|| panic!("缺少备货行: {}", label))
}

/// 按标签取下单数量
pub fn ordered(lines: &[SupplyLine], label: &str) -> u64 {
    line(lines, label).quantity.ordered()
}
