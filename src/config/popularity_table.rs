// ==========================================
// BarOmatic - 人气乘数表
// ==========================================
// 时段乘数: 11 种吧台 × 3 个时段
// 受众乘数: 11 种吧台 × 2 种受众
// 红线: 数值来自业务数据调优，原样保留，不做推导
// ==========================================

use crate::domain::types::{AudienceType, StationKind, TimeOfDay};

/// 时段乘数
pub fn time_multiplier(kind: StationKind, time_of_day: TimeOfDay) -> f64 {
    let (morning, afternoon, evening) = match kind {
        StationKind::Espresso => (3.0, 1.3, 0.5),
        StationKind::EasyDrinks => (1.2, 1.0, 0.8),
        StationKind::SodaDrinks => (0.8, 0.9, 0.7),
        StationKind::Shakes => (0.8, 1.0, 1.1),
        StationKind::Cocktails => (0.01, 0.6, 1.0), // 上午几乎无人点
        StationKind::CocktailsNoAlcohol => (0.7, 1.0, 1.0),
        StationKind::ClassicAlcoholGold | StationKind::ClassicAlcoholPremium => (0.04, 0.8, 1.0),
        StationKind::Beer => (0.04, 0.5, 1.1),
        StationKind::Wine => (0.05, 0.5, 1.1),
        StationKind::IceBarad => (1.2, 1.3, 0.8),
    };

    match time_of_day {
        TimeOfDay::Morning => morning,
        TimeOfDay::Afternoon => afternoon,
        TimeOfDay::Evening => evening,
    }
}

/// 受众乘数
pub fn audience_multiplier(kind: StationKind, audience: AudienceType) -> f64 {
    let (social, professional) = match kind {
        StationKind::Espresso => (1.05, 1.30),
        StationKind::EasyDrinks => (1.20, 1.30),
        StationKind::SodaDrinks => (1.20, 1.30),
        StationKind::Shakes => (1.10, 0.85),
        // 无酒精鸡尾酒沿用含酒精鸡尾酒的受众口径
        StationKind::Cocktails | StationKind::CocktailsNoAlcohol => (1.18, 0.90),
        StationKind::ClassicAlcoholGold | StationKind::ClassicAlcoholPremium => (1.20, 0.85),
        StationKind::Beer | StationKind::Wine => (1.20, 0.90),
        StationKind::IceBarad => (1.15, 0.80),
    };

    match audience {
        AudienceType::Social => social,
        AudienceType::Professional => professional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alcohol_suppressed_in_morning() {
        for kind in [
            StationKind::ClassicAlcoholGold,
            StationKind::ClassicAlcoholPremium,
            StationKind::Beer,
            StationKind::Wine,
        ] {
            let m = time_multiplier(kind, TimeOfDay::Morning);
            assert!((0.04..=0.05).contains(&m), "{:?} morning = {}", kind, m);
        }
        assert_eq!(time_multiplier(StationKind::Cocktails, TimeOfDay::Morning), 0.01);
        assert_eq!(time_multiplier(StationKind::Espresso, TimeOfDay::Morning), 3.0);
    }

    #[test]
    fn test_professional_bias() {
        assert_eq!(audience_multiplier(StationKind::Espresso, AudienceType::Professional), 1.3);
        assert_eq!(audience_multiplier(StationKind::ClassicAlcoholGold, AudienceType::Social), 1.20);
        for kind in [
            StationKind::ClassicAlcoholGold,
            StationKind::Beer,
            StationKind::Wine,
            StationKind::Cocktails,
        ] {
            let m = audience_multiplier(kind, AudienceType::Professional);
            assert!((0.85..=0.90).contains(&m));
        }
    }

    #[test]
    fn test_no_alcohol_cocktails_share_cocktail_audience_factors() {
        for audience in AudienceType::ALL {
            assert_eq!(
                audience_multiplier(StationKind::CocktailsNoAlcohol, audience),
                audience_multiplier(StationKind::Cocktails, audience)
            );
        }
        assert_eq!(audience_multiplier(StationKind::CocktailsNoAlcohol, AudienceType::Social), 1.18);
        assert_eq!(
            audience_multiplier(StationKind::CocktailsNoAlcohol, AudienceType::Professional),
            0.90
        );
    }
}
