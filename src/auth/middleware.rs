//! JWT 认证中间件
//! 每个请求只解码一次令牌，解码结果附加到请求扩展

use crate::{auth::claims::ClaimSet, auth::jwt::JwtService, error::AppError};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

// 实现 FromRequestParts 以便在 handler 中直接提取 ClaimSet
impl<S> FromRequestParts<S> for ClaimSet
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ClaimSet>()
            .cloned()
            .ok_or(AppError::InvalidToken)
    }
}

/// 从 Authorization 头提取令牌
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(|t| t.to_string()))
        .ok_or(AppError::InvalidToken)
}

/// JWT 认证中间件 - 必须认证
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从 Authorization 头提取令牌
    let token = extract_token(req.headers())?;

    // 验证令牌并重建声明集
    let claims = jwt_service.validate_token(&token)?;

    // 附加到请求扩展
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
