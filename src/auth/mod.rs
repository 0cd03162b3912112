//! 认证模块
//! 密码哈希、JWT 签发/校验、声明模型与令牌传输

pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::{derive_claims, AccessScope, ClaimSet};
pub use jwt::JwtService;
pub use password::PasswordHasher;
