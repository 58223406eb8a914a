// ==========================================
// BarOmatic - 备货清单领域模型
// ==========================================
// 数量口径: 计数类为整数（已向上取整）；体积/重量保留实数，展示时向上取整
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 清单分区
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplySection {
    Consumables, // 耗材
    Milks,       // 奶类
    Alcohols,    // 酒类
    Mixers,      // 调配辅料
    Equipment,   // 设备/器具
}

impl SupplySection {
    pub fn title(&self) -> &'static str {
        match self {
            SupplySection::Consumables => "Consumables",
            SupplySection::Milks => "Milks",
            SupplySection::Alcohols => "Alcohols",
            SupplySection::Mixers => "Mixers",
            SupplySection::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for SupplySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ==========================================
// 计量单位
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyUnit {
    Pieces,
    Bottles,
    Barrels,
    Packages,
    Liters,
    Milliliters,
    Kilograms,
    Grams,
}

impl SupplyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SupplyUnit::Pieces => "pcs",
            SupplyUnit::Bottles => "bottles",
            SupplyUnit::Barrels => "barrels",
            SupplyUnit::Packages => "pkgs",
            SupplyUnit::Liters => "L",
            SupplyUnit::Milliliters => "ml",
            SupplyUnit::Kilograms => "kg",
            SupplyUnit::Grams => "g",
        }
    }
}

impl fmt::Display for SupplyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ==========================================
// 数量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Quantity {
    Count(u64),  // 计数（已向上取整）
    Amount(f64), // 体积/重量（实数，>= 0）
}

impl Quantity {
    /// 下单数量（向上取整）
    pub fn ordered(&self) -> u64 {
        match *self {
            Quantity::Count(n) => n,
            Quantity::Amount(v) => ceil_to_u64(v),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Quantity::Count(n) => n as f64,
            Quantity::Amount(v) => v,
        }
    }
}

// ==========================================
// 包装/个数换算（例如 "3 kg (25 bananas)"）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackCount {
    pub count: u64,
    pub noun: String,
}

// ==========================================
// SupplyLine - 备货行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyLine {
    pub label: String,
    pub section: SupplySection,
    pub quantity: Quantity,
    pub unit: SupplyUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack: Option<PackCount>,
}

impl SupplyLine {
    /// 展示文本（数量向上取整）
    pub fn display_quantity(&self) -> String {
        let base = format!("{} {}", self.quantity.ordered(), self.unit.symbol());
        match &self.pack {
            Some(pack) => format!("{} ({} {})", base, pack.count, pack.noun),
            None => base,
        }
    }
}

/// 向上取整时的容差：吸收 100 × 1.1 = 110.00000000000001 这类表示误差
pub const CEIL_TOLERANCE: f64 = 1e-9;

/// 非负有限实数向上取整为 u64（非有限或非正数 → 0）
pub fn ceil_to_u64(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let ceiled = (value - CEIL_TOLERANCE).ceil();
    if ceiled <= 0.0 {
        0
    } else if ceiled >= u64::MAX as f64 {
        u64::MAX
    } else {
        ceiled as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_to_u64_absorbs_representation_noise() {
        assert_eq!(ceil_to_u64(100.0 * 1.1), 110);
        assert_eq!(ceil_to_u64(110.2), 111);
        assert_eq!(ceil_to_u64(0.0001), 1);
        assert_eq!(ceil_to_u64(0.0), 0);
        assert_eq!(ceil_to_u64(-3.0), 0);
        assert_eq!(ceil_to_u64(f64::NAN), 0);
    }

    #[test]
    fn test_display_quantity_with_pack() {
        let line = SupplyLine {
            label: "Banana".to_string(),
            section: SupplySection::Consumables,
            quantity: Quantity::Amount(2.4),
            unit: SupplyUnit::Kilograms,
            pack: Some(PackCount {
                count: 20,
                noun: "bananas".to_string(),
            }),
        };
        assert_eq!(line.display_quantity(), "3 kg (20 bananas)");
    }
}
