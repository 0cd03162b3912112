//! 认证服务：登录与令牌签发

use crate::{
    auth::claims::derive_claims,
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    error::AppError,
    models::auth::{LoginRequest, LoginResponse},
    repository::IdentityStore,
};
use std::sync::Arc;

pub struct AuthService<S> {
    store: S,
    jwt_service: Arc<JwtService>,
    hasher: PasswordHasher,
}

impl<S: IdentityStore> AuthService<S> {
    pub fn new(store: S, jwt_service: Arc<JwtService>) -> Self {
        Self {
            store,
            jwt_service,
            hasher: PasswordHasher::new(),
        }
    }

    /// 用户登录
    ///
    /// 两个失败分支返回同一个 AuthFailure：
    /// 对外不区分"账号不存在"与"密码错误"，防止账号枚举
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        // 按邮箱查找未删除的身份
        let identity = self
            .store
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::AuthFailure)?;

        // 软删除的身份不允许登录（存储层契约之外再拦一次）
        if identity.is_deleted {
            tracing::debug!(user_id = %identity.id, "Login attempt for deleted identity");
            return Err(AppError::AuthFailure);
        }

        // 验证密码
        if !self.hasher.verify(&req.password, &identity.password_hash) {
            return Err(AppError::AuthFailure);
        }

        // 派生声明并签发令牌
        let claims = derive_claims(&identity)?;
        let token = self.jwt_service.generate_token(&claims)?;

        tracing::info!(user_id = %claims.user_id, user_type = claims.user_type(), "Login succeeded");

        Ok(LoginResponse {
            token,
            user_type: claims.user_type().to_string(),
            user_id: claims.user_id,
            organization_id: claims.organization_id(),
            branch_id: claims.branch_id(),
            role: claims.role,
        })
    }
}
