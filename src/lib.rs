//! MCS 认证与授权核心
//! 多租户后台（组织/分支/中心/POC）的登录、令牌与租户范围判定

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod telemetry;
