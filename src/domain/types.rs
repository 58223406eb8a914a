// ==========================================
// BarOmatic - 领域类型定义
// ==========================================
// 时段 / 受众类型 / 活动类型 / 吧台种类
// 序列化格式: snake_case (与请求文件一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 时段 (Time Of Day)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,   // 上午
    Afternoon, // 下午
    Evening,   // 晚上
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            other => Err(format!("未知时段: {}（仅支持 morning/afternoon/evening）", other)),
        }
    }
}

// ==========================================
// 受众类型 (Audience Type)
// ==========================================
// 社交类活动偏向酒精吧台，商务类活动偏向咖啡/软饮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceType {
    Social,       // 社交
    Professional, // 商务
}

impl AudienceType {
    pub const ALL: [AudienceType; 2] = [AudienceType::Social, AudienceType::Professional];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceType::Social => "social",
            AudienceType::Professional => "professional",
        }
    }
}

impl fmt::Display for AudienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudienceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "social" => Ok(AudienceType::Social),
            "professional" => Ok(AudienceType::Professional),
            other => Err(format!("未知受众类型: {}（仅支持 social/professional）", other)),
        }
    }
}

// ==========================================
// 活动类型 (Event Kind)
// ==========================================
// 前五类为社交活动，其余为商务活动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Wedding,
    SinglesParty,
    Party,
    Performance,
    PoolParty,
    BarMitzva,
    Convention,
    CompanyConvention,
    SecurityConvention,
    SalesEvent,
    Launch,
}

impl EventKind {
    pub const ALL: [EventKind; 11] = [
        EventKind::Wedding,
        EventKind::SinglesParty,
        EventKind::Party,
        EventKind::Performance,
        EventKind::PoolParty,
        EventKind::BarMitzva,
        EventKind::Convention,
        EventKind::CompanyConvention,
        EventKind::SecurityConvention,
        EventKind::SalesEvent,
        EventKind::Launch,
    ];

    /// 活动类型对应的受众类型
    pub fn audience(&self) -> AudienceType {
        match self {
            EventKind::Wedding
            | EventKind::SinglesParty
            | EventKind::Party
            | EventKind::Performance
            | EventKind::PoolParty => AudienceType::Social,
            EventKind::BarMitzva
            | EventKind::Convention
            | EventKind::CompanyConvention
            | EventKind::SecurityConvention
            | EventKind::SalesEvent
            | EventKind::Launch => AudienceType::Professional,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventKind::Wedding => "Wedding",
            EventKind::SinglesParty => "Singles Party",
            EventKind::Party => "Party",
            EventKind::Performance => "Performance",
            EventKind::PoolParty => "Pool Party",
            EventKind::BarMitzva => "Bar Mitzva",
            EventKind::Convention => "Convention",
            EventKind::CompanyConvention => "Company Convention",
            EventKind::SecurityConvention => "Security Convention",
            EventKind::SalesEvent => "Sales Event",
            EventKind::Launch => "Launch",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for EventKind {
    type Err = String;

    /// 同时接受 snake_case 标识与显示名称（忽略大小写、空格、连字符）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                let name: String = kind
                    .display_name()
                    .to_lowercase()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect();
                name == key
            })
            .ok_or_else(|| format!("未知活动类型: {}", s.trim()))
    }
}

// ==========================================
// 吧台种类 (Station Kind)
// ==========================================
// 固定 11 种，作为静态目录的键
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    Espresso,
    EasyDrinks,
    SodaDrinks,
    Shakes,
    Cocktails,
    CocktailsNoAlcohol,
    ClassicAlcoholGold,
    ClassicAlcoholPremium,
    Beer,
    Wine,
    IceBarad,
}

impl StationKind {
    pub const ALL: [StationKind; 11] = [
        StationKind::Espresso,
        StationKind::EasyDrinks,
        StationKind::SodaDrinks,
        StationKind::Shakes,
        StationKind::Cocktails,
        StationKind::CocktailsNoAlcohol,
        StationKind::ClassicAlcoholGold,
        StationKind::ClassicAlcoholPremium,
        StationKind::Beer,
        StationKind::Wine,
        StationKind::IceBarad,
    ];

    /// 目录标识（稳定，用于请求文件与导出）
    pub fn id(&self) -> &'static str {
        match self {
            StationKind::Espresso => "espresso",
            StationKind::EasyDrinks => "easy_drinks",
            StationKind::SodaDrinks => "soda_drinks",
            StationKind::Shakes => "shakes",
            StationKind::Cocktails => "cocktails",
            StationKind::CocktailsNoAlcohol => "cocktails_no_alcohol",
            StationKind::ClassicAlcoholGold => "classic_alcohol_gold",
            StationKind::ClassicAlcoholPremium => "classic_alcohol_premium",
            StationKind::Beer => "beer",
            StationKind::Wine => "wine",
            StationKind::IceBarad => "ice_barad",
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_parse() {
        assert_eq!("Morning".parse::<TimeOfDay>().unwrap(), TimeOfDay::Morning);
        assert_eq!(" evening ".parse::<TimeOfDay>().unwrap(), TimeOfDay::Evening);
        assert!("night".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_event_kind_audience() {
        assert_eq!(EventKind::Wedding.audience(), AudienceType::Social);
        assert_eq!(EventKind::PoolParty.audience(), AudienceType::Social);
        assert_eq!(EventKind::BarMitzva.audience(), AudienceType::Professional);
        assert_eq!(EventKind::Launch.audience(), AudienceType::Professional);
    }

    #[test]
    fn test_event_kind_parse_accepts_display_and_snake_case() {
        assert_eq!("Pool Party".parse::<EventKind>().unwrap(), EventKind::PoolParty);
        assert_eq!("company_convention".parse::<EventKind>().unwrap(), EventKind::CompanyConvention);
        assert_eq!("bar-mitzva".parse::<EventKind>().unwrap(), EventKind::BarMitzva);
        assert!("funeral".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_station_kind_serde_matches_id() {
        for kind in StationKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
