// ==========================================
// BarOmatic - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 扁平 key-value（JSON 文件） + 环境变量覆写
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::planner_config::{
    DemandParameters, PlannerConfig, RequestLimits, StaffingParameters, DURATION_HOURS_CEILING,
    GUEST_COUNT_CEILING,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 环境变量前缀: BAROMATIC_<KEY 大写>
pub const ENV_PREFIX: &str = "BAROMATIC_";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    source: Option<String>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 配置文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径，内容为扁平 JSON 对象 {"key": value}
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let label = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: label.clone(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw, &label)
    }

    /// 从 JSON 字符串加载
    ///
    /// 值允许为字符串/数字/布尔；嵌套对象或数组视为格式错误。
    pub fn from_json_str(raw: &str, source: &str) -> ConfigResult<Self> {
        let parsed: Value = serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        let object = match parsed {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::ParseError {
                    path: source.to_string(),
                    message: format!("顶层必须是 JSON 对象，实际为 {}", json_kind(&other)),
                })
            }
        };

        let mut manager = Self {
            values: HashMap::new(),
            source: Some(source.to_string()),
        };

        for (key, value) in object {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ConfigError::InvalidValue {
                        key,
                        value: other.to_string(),
                        message: "仅支持字符串/数字/布尔值".to_string(),
                    })
                }
            };
            manager.set_value(&key, &text);
        }

        debug!(source = %source, keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 设置单个配置值（未知键会记录告警并忽略）
    pub fn set_value(&mut self, key: &str, value: &str) {
        let key = key.trim().to_lowercase();
        if !config_keys::ALL.contains(&key.as_str()) {
            warn!(key = %key, "忽略未知配置键");
            return;
        }
        self.values.insert(key, value.trim().to_string());
    }

    /// 链式设置配置值
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.set_value(key, value);
        self
    }

    /// 以 (变量名, 值) 序列覆写配置，仅处理 BAROMATIC_ 前缀
    pub fn with_overrides<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            if let Some(rest) = name.strip_prefix(ENV_PREFIX) {
                let key = rest.to_lowercase();
                if config_keys::ALL.contains(&key.as_str()) {
                    debug!(key = %key, "环境变量覆写配置");
                    self.values.insert(key, value.trim().to_string());
                }
            }
        }
        self
    }

    /// 应用进程环境变量覆写
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::vars())
    }

    /// 配置来源（文件路径），无文件时为 None
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// 读取原始配置值
    pub fn get_global_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    // ==========================================
    // 类型化读取
    // ==========================================

    fn get_f64_or_default(&self, key: &str, default: f64, min: f64, max: f64) -> ConfigResult<f64> {
        let value = match self.values.get(key) {
            None => default,
            Some(raw) => raw.parse::<f64>().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?,
        };

        if !value.is_finite() || value < min || value > max {
            return Err(ConfigError::OutOfRange {
                key: key.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    fn get_u32_or_default(&self, key: &str, default: u32, min: u32, max: u32) -> ConfigResult<u32> {
        let value = match self.values.get(key) {
            None => default,
            Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?,
        };

        if value < min || value > max {
            return Err(ConfigError::OutOfRange {
                key: key.to_string(),
                value: value as f64,
                min: min as f64,
                max: max as f64,
            });
        }
        Ok(value)
    }

    // ==========================================
    // 规划器配置
    // ==========================================

    /// 构建规划器配置（缺省键取默认值，并做范围校验）
    pub fn load_planner_config(&self) -> ConfigResult<PlannerConfig> {
        let d = DemandParameters::default();
        let l = RequestLimits::default();
        let s = StaffingParameters::default();

        let demand = DemandParameters {
            morning_base_rate: self.get_f64_or_default(
                config_keys::MORNING_BASE_RATE,
                d.morning_base_rate,
                0.0,
                10.0,
            )?,
            afternoon_base_rate: self.get_f64_or_default(
                config_keys::AFTERNOON_BASE_RATE,
                d.afternoon_base_rate,
                0.0,
                10.0,
            )?,
            evening_base_rate: self.get_f64_or_default(
                config_keys::EVENING_BASE_RATE,
                d.evening_base_rate,
                0.0,
                10.0,
            )?,
            popularity_weight: self.get_f64_or_default(
                config_keys::POPULARITY_WEIGHT,
                d.popularity_weight,
                0.0,
                10.0,
            )?,
            reference_event_hours: self.get_f64_or_default(
                config_keys::REFERENCE_EVENT_HOURS,
                d.reference_event_hours,
                0.5,
                24.0,
            )?,
        };

        let limits = RequestLimits {
            max_guest_count: self.get_u32_or_default(
                config_keys::MAX_GUEST_COUNT,
                l.max_guest_count,
                1,
                GUEST_COUNT_CEILING,
            )?,
            max_duration_hours: self.get_f64_or_default(
                config_keys::MAX_DURATION_HOURS,
                l.max_duration_hours,
                1.0,
                DURATION_HOURS_CEILING,
            )?,
        };

        let staffing = StaffingParameters {
            guests_per_worker: self.get_u32_or_default(
                config_keys::GUESTS_PER_WORKER,
                s.guests_per_worker,
                1,
                10_000,
            )?,
            hourly_rate: self.get_f64_or_default(
                config_keys::HOURLY_RATE,
                s.hourly_rate,
                0.0,
                100_000.0,
            )?,
        };

        Ok(PlannerConfig {
            demand,
            limits,
            staffing,
        })
    }

    /// 获取生效配置的快照（JSON格式，键有序）
    ///
    /// # 用途
    /// - 随规划报告输出，保证结果可复现
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let config = self.load_planner_config()?;
        Ok(snapshot_of(&config))
    }
}

/// 将规划器配置展开为有序的 key-value 快照
pub fn snapshot_of(config: &PlannerConfig) -> String {
    let mut map: BTreeMap<&str, String> = BTreeMap::new();
    map.insert(config_keys::MORNING_BASE_RATE, config.demand.morning_base_rate.to_string());
    map.insert(config_keys::AFTERNOON_BASE_RATE, config.demand.afternoon_base_rate.to_string());
    map.insert(config_keys::EVENING_BASE_RATE, config.demand.evening_base_rate.to_string());
    map.insert(config_keys::POPULARITY_WEIGHT, config.demand.popularity_weight.to_string());
    map.insert(
        config_keys::REFERENCE_EVENT_HOURS,
        config.demand.reference_event_hours.to_string(),
    );
    map.insert(config_keys::MAX_GUEST_COUNT, config.limits.max_guest_count.to_string());
    map.insert(config_keys::MAX_DURATION_HOURS, config.limits.max_duration_hours.to_string());
    map.insert(config_keys::GUESTS_PER_WORKER, config.staffing.guests_per_worker.to_string());
    map.insert(config_keys::HOURLY_RATE, config.staffing.hourly_rate.to_string());

    // BTreeMap<&str, String> 序列化不会失败
    serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 获取默认配置文件路径
///
/// # 返回
/// - BAROMATIC_CONFIG_PATH 环境变量（非空时）
/// - 用户配置目录/baromatic/config.json
/// - 回退: ./baromatic.json
pub fn get_default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("BAROMATIC_CONFIG_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("baromatic").join("config.json"),
        None => PathBuf::from("./baromatic.json"),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 基础饮用速率
    pub const MORNING_BASE_RATE: &str = "morning_base_rate";
    pub const AFTERNOON_BASE_RATE: &str = "afternoon_base_rate";
    pub const EVENING_BASE_RATE: &str = "evening_base_rate";

    // 多吧台估算
    pub const POPULARITY_WEIGHT: &str = "popularity_weight";

    // 单吧台上限
    pub const REFERENCE_EVENT_HOURS: &str = "reference_event_hours";

    // 请求校验
    pub const MAX_GUEST_COUNT: &str = "max_guest_count";
    pub const MAX_DURATION_HOURS: &str = "max_duration_hours";

    // 人力
    pub const GUESTS_PER_WORKER: &str = "guests_per_worker";
    pub const HOURLY_RATE: &str = "hourly_rate";

    pub const ALL: [&str; 9] = [
        MORNING_BASE_RATE,
        AFTERNOON_BASE_RATE,
        EVENING_BASE_RATE,
        POPULARITY_WEIGHT,
        REFERENCE_EVENT_HOURS,
        MAX_GUEST_COUNT,
        MAX_DURATION_HOURS,
        GUESTS_PER_WORKER,
        HOURLY_RATE,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manager_yields_defaults() {
        let config = ConfigManager::new().load_planner_config().unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_json_values_override_defaults() {
        let raw = r#"{"evening_base_rate": 1.5, "hourly_rate": "60", "max_guest_count": 500}"#;
        let config = ConfigManager::from_json_str(raw, "inline")
            .unwrap()
            .load_planner_config()
            .unwrap();
        assert_eq!(config.demand.evening_base_rate, 1.5);
        assert_eq!(config.staffing.hourly_rate, 60.0);
        assert_eq!(config.limits.max_guest_count, 500);
        assert_eq!(config.demand.morning_base_rate, 0.7);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let manager = ConfigManager::from_json_str(r#"{"season_mode": "AUTO"}"#, "inline").unwrap();
        assert!(manager.get_global_config_value("season_mode").is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let manager = ConfigManager::from_json_str(r#"{"popularity_weight": 0.7}"#, "inline")
            .unwrap()
            .with_overrides(vec![
                ("BAROMATIC_POPULARITY_WEIGHT".to_string(), "0.9".to_string()),
                ("PATH".to_string(), "/usr/bin".to_string()),
            ]);
        let config = manager.load_planner_config().unwrap();
        assert_eq!(config.demand.popularity_weight, 0.9);
    }

    #[test]
    fn test_malformed_value_reports_key() {
        let manager = ConfigManager::new().with_value("guests_per_worker", "forty");
        match manager.load_planner_config() {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, "guests_per_worker");
                assert_eq!(value, "forty");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_value() {
        let manager = ConfigManager::new().with_value("popularity_weight", "11");
        assert!(matches!(
            manager.load_planner_config(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_limits_cannot_be_raised_past_ceiling() {
        for (key, value) in [("max_guest_count", "30001"), ("max_duration_hours", "24.5")] {
            let manager = ConfigManager::new().with_value(key, value);
            match manager.load_planner_config() {
                Err(ConfigError::OutOfRange { key: k, .. }) => assert_eq!(k, key),
                other => panic!("Expected OutOfRange for {}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_dampening_is_not_configurable() {
        let manager = ConfigManager::new().with_overrides(vec![(
            "BAROMATIC_STRONG_DAMPENING".to_string(),
            "0.5".to_string(),
        )]);
        assert!(manager.get_global_config_value("strong_dampening").is_none());
        assert_eq!(manager.load_planner_config().unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_nested_value_rejected() {
        let result = ConfigManager::from_json_str(r#"{"hourly_rate": {"value": 1}}"#, "inline");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_snapshot_is_ordered_json() {
        let snapshot = ConfigManager::new().get_config_snapshot().unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed.len(), config_keys::ALL.len());
        assert_eq!(parsed["hourly_rate"], "45");
    }
}
