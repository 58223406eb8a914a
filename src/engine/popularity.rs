// ==========================================
// BarOmatic - 人气模型
// ==========================================
// 职责: 计算吧台在给定时段、受众下的调整后人气
// 公式: base_popularity × 时段乘数 × 受众乘数
// ==========================================

use crate::config::popularity_table::{audience_multiplier, time_multiplier};
use crate::domain::station::Station;
use crate::domain::types::{AudienceType, TimeOfDay};

// ==========================================
// PopularityModel - 人气模型
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityModel {
    // 无状态引擎，不需要注入依赖
}

impl PopularityModel {
    pub fn new() -> Self {
        Self {}
    }

    /// 调整后人气
    pub fn adjusted_popularity(
        &self,
        station: &Station,
        time_of_day: TimeOfDay,
        audience: AudienceType,
    ) -> f64 {
        station.base_popularity
            * time_multiplier(station.kind, time_of_day)
            * audience_multiplier(station.kind, audience)
    }

    /// 调整比例（调整后人气 / 基础人气）
    ///
    /// 基础人气为 0 时返回 0，避免除零。
    pub fn adjustment_ratio(
        &self,
        station: &Station,
        time_of_day: TimeOfDay,
        audience: AudienceType,
    ) -> f64 {
        if station.base_popularity <= 0.0 {
            return 0.0;
        }
        let ratio = self.adjusted_popularity(station, time_of_day, audience) / station.base_popularity;
        if ratio.is_finite() {
            ratio
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationCatalog;
    use crate::domain::types::StationKind;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_beer_evening_social() {
        let model = PopularityModel::new();
        let beer = StationCatalog::builtin().get(StationKind::Beer);
        let p = model.adjusted_popularity(beer, TimeOfDay::Evening, AudienceType::Social);
        assert!((p - 0.66).abs() < EPS, "got {}", p);
        let r = model.adjustment_ratio(beer, TimeOfDay::Evening, AudienceType::Social);
        assert!((r - 1.32).abs() < EPS, "got {}", r);
    }

    #[test]
    fn test_espresso_morning_professional() {
        let model = PopularityModel::new();
        let espresso = StationCatalog::builtin().get(StationKind::Espresso);
        let p = model.adjusted_popularity(espresso, TimeOfDay::Morning, AudienceType::Professional);
        assert!((p - 0.1 * 3.0 * 1.3).abs() < EPS);
    }

    #[test]
    fn test_zero_base_popularity_ratio_is_zero() {
        let model = PopularityModel::new();
        let mut station = StationCatalog::builtin().get(StationKind::Wine).clone();
        station.base_popularity = 0.0;
        assert_eq!(
            model.adjustment_ratio(&station, TimeOfDay::Evening, AudienceType::Social),
            0.0
        );
    }

    #[test]
    fn test_all_values_non_negative() {
        let model = PopularityModel::new();
        for station in StationCatalog::builtin().stations() {
            for tod in TimeOfDay::ALL {
                for audience in AudienceType::ALL {
                    let p = model.adjusted_popularity(station, tod, audience);
                    assert!(p.is_finite() && p >= 0.0);
                }
            }
        }
    }
}
