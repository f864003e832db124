//! 组件工厂抽象
//!
//! 提供工厂参数容器以及工厂、实例的类型擦除与安全还原

use di_common::{BoxError, DependencyError};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 类型擦除后的实例
///
/// 内部包裹的是 `Arc<T>`，因此 `T` 可以是 `dyn Trait` 这类不定长类型。
pub type ErasedInstance = Arc<dyn Any + Send + Sync>;

/// 类型擦除后的工厂函数
pub type ErasedFactory =
    Arc<dyn Fn(&FactoryArgs) -> Result<ErasedInstance, DependencyError> + Send + Sync>;

/// 工厂构造参数
///
/// 调用方在解析时传入的不透明参数列表，按顺序交给工厂。
#[derive(Clone, Default)]
pub struct FactoryArgs {
    args: Vec<Arc<dyn Any + Send + Sync>>,
}

impl FactoryArgs {
    /// 创建空参数列表
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加参数
    pub fn push<A: Any + Send + Sync>(&mut self, arg: A) {
        self.args.push(Arc::new(arg));
    }

    /// 追加参数（构建器风格）
    pub fn with<A: Any + Send + Sync>(mut self, arg: A) -> Self {
        self.push(arg);
        self
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// 是否没有参数
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 按位置取出指定类型的参数，位置越界或类型不符时返回 `None`
    pub fn get<A: Any>(&self, index: usize) -> Option<&A> {
        self.args.get(index)?.downcast_ref::<A>()
    }

    /// 取出第一个指定类型的参数
    pub fn find<A: Any>(&self) -> Option<&A> {
        self.args.iter().find_map(|arg| arg.downcast_ref::<A>())
    }

    /// 遍历所有参数
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Any + Send + Sync)> {
        self.args.iter().map(|arg| arg.as_ref())
    }
}

impl fmt::Debug for FactoryArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryArgs")
            .field("len", &self.args.len())
            .finish()
    }
}

/// 擦除实例类型
pub fn erase_instance<T>(instance: Arc<T>) -> ErasedInstance
where
    T: ?Sized + Send + Sync + 'static,
{
    Arc::new(instance)
}

/// 还原实例类型，类型不符时返回 `None`
pub fn downcast_instance<T>(erased: &ErasedInstance) -> Option<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    erased.downcast_ref::<Arc<T>>().cloned()
}

/// 擦除工厂类型
///
/// 工厂返回的错误被包装为 [`DependencyError::Construction`]，内容不做任何改动。
pub fn erase_factory<T, F, E>(factory: F) -> ErasedFactory
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn(&FactoryArgs) -> Result<Arc<T>, E> + Send + Sync + 'static,
    E: Into<BoxError>,
{
    Arc::new(move |args: &FactoryArgs| {
        factory(args)
            .map(erase_instance::<T>)
            .map_err(|err| DependencyError::Construction(err.into()))
    })
}
