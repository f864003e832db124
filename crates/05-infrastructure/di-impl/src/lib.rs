//! # 依赖注入具体实现
//!
//! 提供以 (抽象类型, 槽位名) 为键的并发安全注册表 [`Registry`]。
//!
//! ```
//! use di_abstractions::{ComponentRegistry, FactoryArgs, ResolveOptions, SlotName};
//! use di_impl::Registry;
//! use std::sync::Arc;
//!
//! trait Clock: Send + Sync {
//!     fn now(&self) -> u64;
//! }
//!
//! struct FixedClock(u64);
//!
//! impl Clock for FixedClock {
//!     fn now(&self) -> u64 {
//!         self.0
//!     }
//! }
//!
//! let registry = Registry::new();
//! registry.register_factory::<dyn Clock, _, _>(SlotName::DEFAULT, |args: &FactoryArgs| {
//!     let start = args.get::<u64>(0).copied().unwrap_or(0);
//!     Ok::<_, std::convert::Infallible>(Arc::new(FixedClock(start)) as Arc<dyn Clock>)
//! });
//!
//! let clock = registry
//!     .resolve::<dyn Clock>(SlotName::DEFAULT, ResolveOptions::new().with_factory_arg(7_u64))
//!     .unwrap();
//! assert_eq!(clock.now(), 7);
//! assert!(registry.instance_exists::<dyn Clock>(SlotName::DEFAULT));
//! ```

pub mod global;
pub mod registry;
mod single_flight;

pub use global::global;
pub use registry::Registry;
