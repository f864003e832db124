//! 组件注册表抽象接口

use crate::container::RegistryStats;
use crate::factory::FactoryArgs;
use crate::resolver::ResolveOptions;
use di_common::{BoxError, DependencyResult, SlotName};
use std::sync::Arc;

/// 组件注册表 trait
///
/// 以 (抽象类型, 槽位名) 为键保存工厂与实例。所有方法都只需要 `&self`，
/// 实现方负责内部同步，调用方可以在多个线程中直接共享。
pub trait ComponentRegistry: Send + Sync {
    /// 注册工厂，已存在的工厂会被直接覆盖
    fn register_factory<T, F, E>(&self, slot: impl Into<SlotName>, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&FactoryArgs) -> Result<Arc<T>, E> + Send + Sync + 'static,
        E: Into<BoxError>;

    /// 解析实例
    ///
    /// 单例模式下先查缓存，未命中时调用工厂并写入缓存；瞬时模式每次都调用工厂。
    /// 工厂返回的错误原样透传，且不会写入缓存。
    fn resolve<T>(&self, slot: impl Into<SlotName>, options: ResolveOptions) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static;

    /// 使用默认选项解析单例
    fn get<T>(&self, slot: impl Into<SlotName>) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve::<T>(slot, ResolveOptions::default())
    }

    /// 检查是否已缓存实例（只注册了工厂不算）
    fn instance_exists<T>(&self, slot: impl Into<SlotName>) -> bool
    where
        T: ?Sized + 'static;

    /// 检查是否已注册工厂
    fn factory_exists<T>(&self, slot: impl Into<SlotName>) -> bool
    where
        T: ?Sized + 'static;

    /// 注入实例，槽位已有实例时返回 `InstanceAlreadyExists`
    fn add_instance<T>(&self, slot: impl Into<SlotName>, instance: Arc<T>) -> DependencyResult<()>
    where
        T: ?Sized + Send + Sync + 'static;

    /// 覆盖实例
    fn replace_instance<T>(&self, slot: impl Into<SlotName>, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static;

    /// 删除实例，槽位不存在时什么也不做
    fn delete_instance<T>(&self, slot: impl Into<SlotName>)
    where
        T: ?Sized + 'static;

    /// 获取统计信息
    fn stats(&self) -> RegistryStats;
}
