//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义以 (抽象类型, 槽位名) 为键的注册表接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 组件注册表接口
//! - [`FactoryArgs`] - 工厂构造参数
//! - [`ResolveOptions`] - 解析选项
//! - [`RegistryConfig`] - 注册表配置

pub mod container;
pub mod factory;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;

pub use di_common::{BoxError, DependencyError, DependencyResult, SlotName, TypeKey};
