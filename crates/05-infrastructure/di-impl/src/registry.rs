//! 注册表实现

use crate::single_flight::SingleFlight;
use di_abstractions::{
    downcast_instance, erase_factory, erase_instance, ComponentRegistry, ErasedFactory,
    ErasedInstance, FactoryArgs, RegistryConfig, RegistryStats, ResolutionPolicy, ResolveOptions,
};
use di_common::{BoxError, DependencyError, DependencyResult, SlotName, TypeKey};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

type Table<V> = HashMap<TypeKey, HashMap<SlotName, V>>;

/// 工厂表与实例表，由同一把读写锁保护
#[derive(Default)]
struct Tables {
    factories: Table<ErasedFactory>,
    instances: Table<ErasedInstance>,
}

impl Tables {
    fn factory(&self, key: &TypeKey, slot: &SlotName) -> Option<ErasedFactory> {
        self.factories.get(key)?.get(slot).cloned()
    }

    fn instance(&self, key: &TypeKey, slot: &SlotName) -> Option<ErasedInstance> {
        self.instances.get(key)?.get(slot).cloned()
    }
}

/// 依赖注入注册表
///
/// 工厂调用期间不持有表锁，慢工厂不会阻塞其他类型的注册与解析。
/// 首次单例解析的并发行为由 [`ResolutionPolicy`] 决定。
pub struct Registry {
    config: RegistryConfig,
    tables: RwLock<Tables>,
    flights: SingleFlight,
}

impl Registry {
    /// 使用默认配置创建注册表
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// 使用指定配置创建注册表
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            tables: RwLock::new(Tables::default()),
            flights: SingleFlight::default(),
        }
    }

    /// 当前配置
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// 读取缓存并还原类型
    fn cached<T>(&self, key: TypeKey, slot: &SlotName) -> DependencyResult<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let Some(erased) = self.tables.read().instance(&key, slot) else {
            return Ok(None);
        };
        downcast_instance::<T>(&erased)
            .map(Some)
            .ok_or_else(|| DependencyError::type_mismatch(key.name(), slot.as_str()))
    }

    /// 调用工厂构造新实例，不写缓存
    fn construct<T>(&self, key: TypeKey, slot: &SlotName, args: &FactoryArgs) -> DependencyResult<(ErasedInstance, Arc<T>)>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let factory = self
            .tables
            .read()
            .factory(&key, slot)
            .ok_or_else(|| DependencyError::factory_not_found(key.name(), slot.as_str()))?;

        let erased = factory(args)?;
        let instance = downcast_instance::<T>(&erased)
            .ok_or_else(|| DependencyError::type_mismatch(key.name(), slot.as_str()))?;
        Ok((erased, instance))
    }

    /// 构造新实例并写入缓存
    fn construct_and_cache<T>(&self, key: TypeKey, slot: &SlotName, args: &FactoryArgs) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let (erased, instance) = self.construct::<T>(key, slot, args)?;

        let replaced = self
            .tables
            .write()
            .instances
            .entry(key)
            .or_default()
            .insert(slot.clone(), erased)
            .is_some();
        debug!(type_name = key.name(), slot = %slot, replaced, "缓存单例实例");

        Ok(instance)
    }

    #[cfg(test)]
    fn insert_erased(&self, key: TypeKey, slot: SlotName, erased: ErasedInstance) {
        self.tables.write().instances.entry(key).or_default().insert(slot, erased);
    }

    #[cfg(test)]
    fn pending_flights(&self) -> usize {
        self.flights.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

impl ComponentRegistry for Registry {
    fn register_factory<T, F, E>(&self, slot: impl Into<SlotName>, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&FactoryArgs) -> Result<Arc<T>, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let key = TypeKey::of::<T>();
        let slot = slot.into();
        let factory = erase_factory(factory);

        debug!(type_name = key.name(), slot = %slot, "注册工厂");
        self.tables
            .write()
            .factories
            .entry(key)
            .or_default()
            .insert(slot, factory);
    }

    fn resolve<T>(&self, slot: impl Into<SlotName>, options: ResolveOptions) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let slot = slot.into();

        if !options.singleton {
            return self
                .construct::<T>(key, &slot, &options.factory_args)
                .map(|(_, instance)| instance);
        }

        if let Some(instance) = self.cached::<T>(key, &slot)? {
            trace!(type_name = key.name(), slot = %slot, "命中单例缓存");
            return Ok(instance);
        }

        match self.config.resolution_policy {
            ResolutionPolicy::Optimistic => {
                self.construct_and_cache::<T>(key, &slot, &options.factory_args)
            }
            ResolutionPolicy::SingleFlight => self.flights.run(key, &slot, || -> DependencyResult<Arc<T>> {
                // 排队期间其他调用方可能已经完成构造
                if let Some(instance) = self.cached::<T>(key, &slot)? {
                    return Ok(instance);
                }
                self.construct_and_cache::<T>(key, &slot, &options.factory_args)
            }),
        }
    }

    fn instance_exists<T>(&self, slot: impl Into<SlotName>) -> bool
    where
        T: ?Sized + 'static,
    {
        let slot = slot.into();
        self.tables
            .read()
            .instances
            .get(&TypeKey::of::<T>())
            .is_some_and(|slots| slots.contains_key(&slot))
    }

    fn factory_exists<T>(&self, slot: impl Into<SlotName>) -> bool
    where
        T: ?Sized + 'static,
    {
        let slot = slot.into();
        self.tables
            .read()
            .factories
            .get(&TypeKey::of::<T>())
            .is_some_and(|slots| slots.contains_key(&slot))
    }

    fn add_instance<T>(&self, slot: impl Into<SlotName>, instance: Arc<T>) -> DependencyResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let slot = slot.into();

        let mut tables = self.tables.write();
        let slots = tables.instances.entry(key).or_default();
        if slots.contains_key(&slot) {
            return Err(DependencyError::instance_already_exists(key.name(), slot.as_str()));
        }

        debug!(type_name = key.name(), slot = %slot, "注入实例");
        slots.insert(slot, erase_instance(instance));
        Ok(())
    }

    fn replace_instance<T>(&self, slot: impl Into<SlotName>, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let slot = slot.into();
        let erased = erase_instance(instance);

        debug!(type_name = key.name(), slot = %slot, "覆盖实例");
        self.tables
            .write()
            .instances
            .entry(key)
            .or_default()
            .insert(slot, erased);
    }

    fn delete_instance<T>(&self, slot: impl Into<SlotName>)
    where
        T: ?Sized + 'static,
    {
        let key = TypeKey::of::<T>();
        let slot = slot.into();

        let mut tables = self.tables.write();
        let Some(slots) = tables.instances.get_mut(&key) else {
            return;
        };
        if slots.remove(&slot).is_some() {
            debug!(type_name = key.name(), slot = %slot, "删除实例");
        }
        if slots.is_empty() {
            tables.instances.remove(&key);
        }
    }

    fn stats(&self) -> RegistryStats {
        let tables = self.tables.read();
        let registered_types = tables
            .factories
            .keys()
            .chain(tables.instances.keys())
            .collect::<std::collections::HashSet<_>>()
            .len();

        RegistryStats {
            registered_factories: tables.factories.values().map(HashMap::len).sum(),
            cached_instances: tables.instances.values().map(HashMap::len).sum(),
            registered_types,
        }
    }
}
