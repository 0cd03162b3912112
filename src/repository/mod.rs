//! 数据访问层
//! 身份存储由资源层实现（sqlx 等），认证核心只依赖这个查询接口

use crate::{error::AppError, models::identity::Identity};
use std::future::Future;

/// External lookup into the persisted user store.
///
/// Contract: implementations must exclude soft-deleted rows — a record with
/// `is_deleted = true` is never returned, by email or by any other key.
pub trait IdentityStore: Send + Sync {
    /// Look up a non-deleted identity by its unique email
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Identity>, AppError>> + Send;
}
