//! 解析选项

use crate::factory::FactoryArgs;
use std::any::Any;

/// 解析选项
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// 是否按单例解析：命中缓存直接返回，否则构造后写入缓存
    pub singleton: bool,
    /// 传给工厂的构造参数
    pub factory_args: FactoryArgs,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            singleton: true,
            factory_args: FactoryArgs::default(),
        }
    }
}

impl ResolveOptions {
    /// 默认选项：单例、无构造参数
    pub fn new() -> Self {
        Self::default()
    }

    /// 瞬时解析：每次都调用工厂，结果不缓存
    pub fn transient() -> Self {
        Self::default().with_singleton(false)
    }

    /// 设置是否按单例解析
    pub fn with_singleton(mut self, singleton: bool) -> Self {
        self.singleton = singleton;
        self
    }

    /// 设置构造参数
    pub fn with_factory_args(mut self, factory_args: FactoryArgs) -> Self {
        self.factory_args = factory_args;
        self
    }

    /// 追加一个构造参数
    pub fn with_factory_arg<A: Any + Send + Sync>(mut self, arg: A) -> Self {
        self.factory_args.push(arg);
        self
    }
}
