// ==========================================
// BarOmatic - 吧台静态目录
// ==========================================
// 职责: 11 种吧台的标识、显示名称、基础人气、强吧台标记、单吧台上限
// 红线: 目录为静态配置，运行期不可修改
// ==========================================

use crate::domain::station::Station;
use crate::domain::types::StationKind;
use std::collections::HashMap;
use std::sync::OnceLock;

// ==========================================
// StationCatalog - 吧台目录
// ==========================================
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
    lookup: HashMap<String, StationKind>,
}

impl StationCatalog {
    /// 内置目录（进程内共享一份）
    pub fn builtin() -> &'static StationCatalog {
        static CATALOG: OnceLock<StationCatalog> = OnceLock::new();
        CATALOG.get_or_init(StationCatalog::build)
    }

    fn build() -> Self {
        let stations: Vec<Station> = StationKind::ALL
            .iter()
            .map(|&kind| {
                let (display_name, base_popularity, is_strong) = catalog_row(kind);
                Station::new(kind, display_name, base_popularity, is_strong)
            })
            .collect();

        let mut lookup = HashMap::new();
        for station in &stations {
            lookup.insert(normalize_name(&station.id), station.kind);
            lookup.insert(normalize_name(&station.display_name), station.kind);
        }
        // 旧版界面使用过的拼写
        for (alias, kind) in ALIASES {
            lookup.insert(normalize_name(alias), *kind);
        }

        Self { stations, lookup }
    }

    /// 全部吧台（按目录顺序）
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// 按种类取条目
    pub fn get(&self, kind: StationKind) -> &Station {
        // stations 按 StationKind::ALL 顺序构建
        &self.stations[kind_index(kind)]
    }

    /// 按名称解析（目录标识或显示名称，忽略大小写与首尾空白）
    pub fn resolve(&self, name: &str) -> Option<&Station> {
        self.lookup
            .get(&normalize_name(name))
            .map(|kind| self.get(*kind))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// 单吧台上限基数（参考 4 小时活动的人均杯数）
pub fn single_station_base_cap(kind: StationKind) -> f64 {
    match kind {
        StationKind::Espresso => 0.4,
        StationKind::Cocktails => 2.5,
        StationKind::CocktailsNoAlcohol => 2.5,
        StationKind::ClassicAlcoholGold | StationKind::ClassicAlcoholPremium => 3.2,
        StationKind::Beer | StationKind::Wine => 2.8,
        StationKind::EasyDrinks | StationKind::SodaDrinks => 2.7,
        StationKind::Shakes => 1.1,
        StationKind::IceBarad => 1.4,
    }
}

// (显示名称, 基础人气, 强吧台)
fn catalog_row(kind: StationKind) -> (&'static str, f64, bool) {
    match kind {
        StationKind::Espresso => ("Espresso Bar", 0.1, true),
        StationKind::EasyDrinks => ("Easy Drinks", 0.4, false),
        StationKind::SodaDrinks => ("Soda Drinks", 0.3, false),
        StationKind::Shakes => ("Shakes", 0.3, false),
        StationKind::Cocktails => ("Cocktails", 0.4, true),
        StationKind::CocktailsNoAlcohol => ("Cocktails (no alcohol)", 0.3, true),
        StationKind::ClassicAlcoholGold => ("Classic Alcohol Bar - Gold", 0.7, true),
        StationKind::ClassicAlcoholPremium => ("Classic Alcohol Bar - Premium", 0.8, true),
        StationKind::Beer => ("Beer", 0.5, true),
        StationKind::Wine => ("Wine", 0.4, true),
        StationKind::IceBarad => ("Ice / Barad", 0.3, false),
    }
}

const ALIASES: &[(&str, StationKind)] = &[
    ("Espresso", StationKind::Espresso),
    ("Ice Barad", StationKind::IceBarad),
    ("Classic Alcohol Gold", StationKind::ClassicAlcoholGold),
    ("Classic Alcohol Premium", StationKind::ClassicAlcoholPremium),
];

fn kind_index(kind: StationKind) -> usize {
    StationKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
