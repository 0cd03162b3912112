//! 数据模型模块
//! 认证核心只持有身份投影与租户路径，完整实体由资源层维护

pub mod auth;
pub mod identity;
pub mod tenant;
