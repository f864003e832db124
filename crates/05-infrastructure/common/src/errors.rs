//! 错误类型定义

use thiserror::Error;

/// 工厂返回的构造错误（类型擦除）
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("工厂未注册: {type_name} [{slot}]")]
    FactoryNotFound { type_name: String, slot: String },

    #[error("实例已存在: {type_name} [{slot}]")]
    InstanceAlreadyExists { type_name: String, slot: String },

    #[error("实例类型不匹配: {type_name} [{slot}]")]
    TypeMismatch { type_name: String, slot: String },

    /// 工厂返回的错误，原样透传
    #[error(transparent)]
    Construction(BoxError),
}

impl DependencyError {
    /// 创建工厂未注册错误
    pub fn factory_not_found(type_name: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::FactoryNotFound {
            type_name: type_name.into(),
            slot: slot.into(),
        }
    }

    /// 创建实例已存在错误
    pub fn instance_already_exists(type_name: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::InstanceAlreadyExists {
            type_name: type_name.into(),
            slot: slot.into(),
        }
    }

    /// 创建实例类型不匹配错误
    pub fn type_mismatch(type_name: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::TypeMismatch {
            type_name: type_name.into(),
            slot: slot.into(),
        }
    }

    /// 包装工厂构造错误
    pub fn construction(source: impl Into<BoxError>) -> Self {
        Self::Construction(source.into())
    }

    /// 是否为工厂未注册错误
    pub fn is_factory_not_found(&self) -> bool {
        matches!(self, Self::FactoryNotFound { .. })
    }

    /// 是否为实例已存在错误
    pub fn is_instance_already_exists(&self) -> bool {
        matches!(self, Self::InstanceAlreadyExists { .. })
    }

    /// 取出工厂构造错误
    pub fn into_construction(self) -> Option<BoxError> {
        match self {
            Self::Construction(source) => Some(source),
            _ => None,
        }
    }
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
