//! 租户范围与角色检查服务
//!
//! 旧版九个控制器各自复制同一段 userType 分支判断；
//! 这里集中为一组纯函数，按声明集 + 租户路径做一次判定

use crate::{
    auth::claims::{AccessScope, ClaimSet},
    error::AppError,
    models::identity::Role,
    models::tenant::{ResourceKind, TenantPath},
};
use uuid::Uuid;

/// 集合读取的过滤谓词
///
/// 资源层把它翻译成查询条件（组织内全部分支，或仅单个分支）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantFilter {
    /// 匹配组织内所有行
    Organization(Uuid),
    /// 仅匹配单个分支的行
    Branch(Uuid),
}

impl TenantFilter {
    /// 判断某行的租户路径是否落在过滤范围内
    pub fn matches(&self, path: &TenantPath) -> bool {
        match self {
            TenantFilter::Organization(organization_id) => {
                path.organization_id == *organization_id
            }
            TenantFilter::Branch(branch_id) => path.branch_id == Some(*branch_id),
        }
    }
}

/// 每种资源的写操作所需角色（声明式策略表）
pub fn write_roles(resource: ResourceKind) -> &'static [Role] {
    match resource {
        ResourceKind::Organization | ResourceKind::Branch | ResourceKind::User => &[Role::Owner],
        ResourceKind::Center | ResourceKind::Poc => &[Role::BranchAdmin, Role::Staff],
    }
}

/// 读取判定：请求行的租户路径是否在声明集的范围内
pub fn can_read(claims: &ClaimSet, path: &TenantPath) -> bool {
    match claims.scope {
        AccessScope::Organization { organization_id } => {
            path.organization_id == organization_id
        }
        AccessScope::Branch { branch_id, .. } => path.branch_id == Some(branch_id),
    }
}

/// 读取检查，越界返回 NotFound
///
/// 租户不匹配统一按"行不存在"处理，跨租户不泄露行的存在性
pub fn require_read(claims: &ClaimSet, path: &TenantPath) -> Result<(), AppError> {
    if can_read(claims, path) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = %claims.user_id,
            user_type = claims.user_type(),
            "Tenant scope check failed for read"
        );
        Err(AppError::NotFound)
    }
}

/// 写入检查：角色在策略表内，且租户路径在范围内
pub fn require_write(
    claims: &ClaimSet,
    resource: ResourceKind,
    path: &TenantPath,
) -> Result<(), AppError> {
    if !write_roles(resource).contains(&claims.role) {
        tracing::warn!(
            user_id = %claims.user_id,
            role = %claims.role,
            resource = ?resource,
            "Role check failed for write"
        );
        return Err(AppError::Forbidden);
    }

    require_read(claims, path)
}

/// 外键目标校验：创建或换父时，目标父级的租户路径必须在范围内
///
/// 没有这一步，分支用户可以在请求体里塞一个外部 branch id，
/// 把子行挂到自己范围之外的分支下
pub fn require_parent(claims: &ClaimSet, parent: &TenantPath) -> Result<(), AppError> {
    if can_read(claims, parent) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = %claims.user_id,
            user_type = claims.user_type(),
            "Parent reference outside tenant scope"
        );
        Err(AppError::BadRequest("Invalid parent reference".to_string()))
    }
}

/// 集合读取的范围过滤
pub fn list_filter(claims: &ClaimSet) -> TenantFilter {
    match claims.scope {
        AccessScope::Organization { organization_id } => {
            TenantFilter::Organization(organization_id)
        }
        AccessScope::Branch { branch_id, .. } => TenantFilter::Branch(branch_id),
    }
}
