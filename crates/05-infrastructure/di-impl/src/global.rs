//! 进程级共享注册表
//!
//! 核心 API 不依赖全局状态，宿主程序需要环境式访问时再使用这里的实例。

use crate::registry::Registry;
use once_cell::sync::Lazy;

/// 全局注册表，首次访问时以默认配置创建
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// 获取全局注册表
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}
