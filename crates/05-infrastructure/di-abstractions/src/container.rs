//! 注册表配置与统计

use serde::{Deserialize, Serialize};

/// 单例首次解析时的并发策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// 乐观模式：调用工厂时不持锁，并发的首次解析可能各自调用工厂，最后写入者留在缓存中
    #[default]
    Optimistic,
    /// 单飞模式：同一键的并发首次解析排队等待，工厂只调用一次
    ///
    /// 闸门不可重入，工厂内部不能再解析自身的键。
    SingleFlight,
}

/// 注册表配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 单例解析的并发策略
    pub resolution_policy: ResolutionPolicy,
}

impl RegistryConfig {
    /// 使用单飞模式
    pub fn single_flight() -> Self {
        Self {
            resolution_policy: ResolutionPolicy::SingleFlight,
        }
    }
}

/// 注册表统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// 已注册工厂数量
    pub registered_factories: usize,
    /// 已缓存实例数量
    pub cached_instances: usize,
    /// 至少有一个工厂或实例的抽象类型数量
    pub registered_types: usize,
}
