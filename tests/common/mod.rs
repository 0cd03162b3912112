//! 测试公共模块
//! 提供测试配置、身份构造与内存身份存储

use mcs_auth::{
    auth::password::PasswordHasher,
    config::{AppConfig, LoggingConfig, SecurityConfig},
    error::AppError,
    models::identity::{Identity, Role, UserLevel},
    repository::IdentityStore,
};
use secrecy::Secret;
use std::collections::HashMap;
use uuid::Uuid;

/// 创建测试配置
pub fn create_test_config() -> AppConfig {
    AppConfig {
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new("test-secret-key-for-testing-only-min-32-chars".to_string()),
            token_exp_secs: 86400,
        },
    }
}

/// 组织级身份
pub fn org_identity(organization_id: Uuid, role: Role, email: &str, password: &str) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: PasswordHasher::new().hash(password).expect("hash password"),
        role,
        level: UserLevel::Org,
        organization_id,
        branch_id: None,
        is_deleted: false,
    }
}

/// 分支级身份
pub fn branch_identity(
    organization_id: Uuid,
    branch_id: Uuid,
    role: Role,
    email: &str,
    password: &str,
) -> Identity {
    Identity {
        branch_id: Some(branch_id),
        level: UserLevel::Branch,
        ..org_identity(organization_id, role, email, password)
    }
}

/// 内存身份存储，遵循存储契约：软删除的行不返回
pub struct InMemoryIdentityStore {
    identities: HashMap<String, Identity>,
}

impl InMemoryIdentityStore {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: identities
                .into_iter()
                .map(|i| (i.email.clone(), i))
                .collect(),
        }
    }
}

impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        Ok(self
            .identities
            .get(email)
            .filter(|i| !i.is_deleted)
            .cloned())
    }
}

/// 不过滤软删除的存储，用于验证登录流程自身的拦截
pub struct UnfilteredIdentityStore {
    identities: HashMap<String, Identity>,
}

impl UnfilteredIdentityStore {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: identities
                .into_iter()
                .map(|i| (i.email.clone(), i))
                .collect(),
        }
    }
}

impl IdentityStore for UnfilteredIdentityStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        Ok(self.identities.get(email).cloned())
    }
}
