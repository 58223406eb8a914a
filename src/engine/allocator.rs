// ==========================================
// BarOmatic - 需求分配引擎
// ==========================================
// 职责: 将人均杯数按调整后人气比例拆分到各吧台
// 输入: 已选吧台 + 人均杯数 + 来宾人数 + 时段/受众
// 输出: 每个吧台一条 AllocationEntry（顺序与输入一致）
// 红线: 返回前逐条清洗，NaN/Infinity/负数一律归零
// ==========================================

use crate::config::planner_config::STRONG_DAMPENING;
use crate::domain::allocation::AllocationEntry;
use crate::domain::station::{contains_strong, Station};
use crate::domain::types::{AudienceType, TimeOfDay};
use crate::engine::popularity::PopularityModel;
use tracing::{debug, instrument, warn};

// ==========================================
// Allocator - 需求分配引擎
// ==========================================
// 无状态引擎
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    popularity: PopularityModel,
}

impl Allocator {
    pub fn new() -> Self {
        Self {
            popularity: PopularityModel::new(),
        }
    }

    /// 衰减系数（含强吧台 → 0.8，否则 1.0）
    ///
    /// 可脱离完整分配单独查询。
    pub fn dampening_factor(&self, stations: &[Station]) -> f64 {
        if contains_strong(stations) {
            STRONG_DAMPENING
        } else {
            1.0
        }
    }

    /// 按比例分配
    ///
    /// 规则:
    /// 1) 无吧台 → 空列表
    /// 2) 单吧台 → 独占全部人均杯数
    /// 3) 多吧台 → contribution = 调整后人气 × 衰减系数，按占比拆分
    ///    贡献和 <= 0 或非有限时以 1.0 代替，避免除零
    #[instrument(skip(self, stations), fields(station_count = stations.len()))]
    pub fn distribute(
        &self,
        stations: &[Station],
        total_drinks_per_guest: f64,
        guest_count: u32,
        time_of_day: TimeOfDay,
        audience: AudienceType,
    ) -> Vec<AllocationEntry> {
        let guests = f64::from(guest_count);

        match stations {
            [] => Vec::new(),
            [single] => vec![self.checked_entry(
                single,
                total_drinks_per_guest,
                total_drinks_per_guest * guests,
            )],
            _ => {
                let dampening = self.dampening_factor(stations);
                let contributions: Vec<f64> = stations
                    .iter()
                    .map(|s| {
                        self.popularity.adjusted_popularity(s, time_of_day, audience) * dampening
                    })
                    .collect();

                let mut sum: f64 = contributions.iter().sum();
                if !sum.is_finite() || sum <= 0.0 {
                    warn!(sum, "贡献和退化，以 1.0 代替");
                    sum = 1.0;
                }
                debug!(dampening, contribution_sum = sum, "分配参数");

                stations
                    .iter()
                    .zip(contributions)
                    .map(|(station, contribution)| {
                        let share = contribution / sum;
                        let drinks_per_guest = total_drinks_per_guest * share;
                        self.checked_entry(station, drinks_per_guest, drinks_per_guest * guests)
                    })
                    .collect()
            }
        }
    }

    fn checked_entry(
        &self,
        station: &Station,
        drinks_per_guest: f64,
        total_drinks: f64,
    ) -> AllocationEntry {
        let entry = AllocationEntry::sanitized(station.kind, drinks_per_guest, total_drinks);
        if entry.drinks_per_guest != drinks_per_guest || entry.total_drinks != total_drinks {
            warn!(
                station = %station.kind,
                drinks_per_guest, total_drinks, "分配结果含非法数值，已清洗"
            );
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationCatalog;
    use crate::domain::types::StationKind;

    fn allocator() -> Allocator {
        Allocator::new()
    }

    fn stations(kinds: &[StationKind]) -> Vec<Station> {
        let catalog = StationCatalog::builtin();
        kinds.iter().map(|k| catalog.get(*k).clone()).collect()
    }

    #[test]
    fn test_dampening_factor() {
        let a = allocator();
        assert_eq!(a.dampening_factor(&stations(&[StationKind::Beer])), 0.8);
        assert_eq!(
            a.dampening_factor(&stations(&[StationKind::Shakes, StationKind::SodaDrinks])),
            1.0
        );
        assert_eq!(a.dampening_factor(&[]), 1.0);
    }

    #[test]
    fn test_empty_yields_no_entries() {
        let entries = allocator().distribute(&[], 3.0, 100, TimeOfDay::Evening, AudienceType::Social);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_single_station_takes_everything() {
        let entries = allocator().distribute(
            &stations(&[StationKind::Wine]),
            2.5,
            80,
            TimeOfDay::Evening,
            AudienceType::Social,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].drinks_per_guest, 2.5);
        assert_eq!(entries[0].total_drinks, 200.0);
    }

    #[test]
    fn test_shares_sum_to_total() {
        let set = stations(&[
            StationKind::Espresso,
            StationKind::Shakes,
            StationKind::Beer,
            StationKind::IceBarad,
        ]);
        let entries = allocator().distribute(&set, 4.2, 250, TimeOfDay::Afternoon, AudienceType::Professional);
        let sum: f64 = entries.iter().map(|e| e.drinks_per_guest).sum();
        assert!((sum - 4.2).abs() < 1e-9);
        for (entry, station) in entries.iter().zip(&set) {
            assert_eq!(entry.station, station.kind);
            assert!((entry.total_drinks - entry.drinks_per_guest * 250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_contributions_fall_back_without_nan() {
        let mut set = stations(&[StationKind::Beer, StationKind::Wine]);
        for s in &mut set {
            s.base_popularity = 0.0;
        }
        let entries = allocator().distribute(&set, 3.0, 10, TimeOfDay::Evening, AudienceType::Social);
        assert_eq!(entries.len(), 2);
        for e in entries {
            assert!(e.is_sane());
            assert_eq!(e.drinks_per_guest, 0.0);
        }
    }

    #[test]
    fn test_non_finite_total_is_sanitized() {
        let entries = allocator().distribute(
            &stations(&[StationKind::Beer, StationKind::Shakes]),
            f64::INFINITY,
            100,
            TimeOfDay::Evening,
            AudienceType::Social,
        );
        assert!(entries.iter().all(|e| e.is_sane()));
    }
}
