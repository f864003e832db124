//! 元数据定义
//!
//! 提供注册表两级键：抽象类型键 [`TypeKey`] 与实例槽位名 [`SlotName`]

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 抽象类型键
///
/// 由编译期的 [`TypeId`] 唯一确定，同时保留完整类型名用于日志与错误信息。
/// 相等性与哈希只比较 `TypeId`，因此不同模块中同名的类型不会冲突。
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    /// 类型ID
    id: TypeId,
    /// 完整类型名（包含模块路径）
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型键
    ///
    /// `T` 可以是不定长类型，例如 `dyn Trait`。
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 实例槽位名
///
/// 同一抽象类型下的具名变体，默认槽位为 `"default"`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotName(Cow<'static, str>);

impl SlotName {
    /// 默认槽位
    pub const DEFAULT: SlotName = SlotName(Cow::Borrowed("default"));

    /// 从静态字符串创建槽位名（不分配内存）
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// 槽位名字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为默认槽位
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}

impl Default for SlotName {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&'static str> for SlotName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for SlotName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&SlotName> for SlotName {
    fn from(name: &SlotName) -> Self {
        name.clone()
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
