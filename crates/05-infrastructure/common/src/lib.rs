//! # DI Common
//!
//! 依赖注入注册表各 crate 共享的基础类型。
//!
//! ## 核心类型
//!
//! - [`TypeKey`] - 抽象类型键，由编译期 `TypeId` 派生
//! - [`SlotName`] - 实例槽位名，默认为 `"default"`
//! - [`DependencyError`] - 注册与解析过程中的错误

pub mod errors;
pub mod metadata;

pub use errors::*;
pub use metadata::*;
