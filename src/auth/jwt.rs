//! JWT token generation and validation
//!
//! Tokens are self-contained: validation is a pure function of the token and
//! the signing key, with no store lookup. There is no revocation list, so a
//! deleted or demoted user's token stays valid until its natural expiry.

use crate::{
    auth::claims::{AccessScope, ClaimSet},
    config::AppConfig,
    error::AppError,
    models::identity::Role,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire form of the claims inside a token.
///
/// Claims are plaintext-readable without the key; nothing confidential goes
/// in here beyond what the login response already returns.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Role name (Owner, BranchAdmin, Staff)
    pub role: Role,

    /// Access scope (Organization or Branch)
    pub user_type: String,

    /// Organization the user belongs to
    pub organization_id: Uuid,

    /// Branch, present only for branch-scoped users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Uuid>,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_exp_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        Ok(Self {
            encoding_key,
            decoding_key,
            token_exp_secs: config.security.token_exp_secs,
        })
    }

    /// Generate a signed token embedding the claim set
    pub fn generate_token(&self, claim_set: &ClaimSet) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token_exp_secs as i64);

        let claims = Claims {
            sub: claim_set.user_id.to_string(),
            email: claim_set.email.clone(),
            role: claim_set.role,
            user_type: claim_set.user_type().to_string(),
            organization_id: claim_set.organization_id(),
            branch_id: claim_set.branch_id(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Validate signature and expiry, then rebuild the typed claim set.
    ///
    /// Every failure collapses to `InvalidToken`; the caller cannot tell an
    /// expired token from a malformed one.
    pub fn validate_token(&self, token: &str) -> Result<ClaimSet, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                AppError::InvalidToken
            })?
            .claims;

        Self::claim_set_from_wire(claims)
    }

    fn claim_set_from_wire(claims: Claims) -> Result<ClaimSet, AppError> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::debug!("Token subject is not a valid id");
            AppError::InvalidToken
        })?;

        let scope = match claims.user_type.as_str() {
            "Organization" => AccessScope::Organization {
                organization_id: claims.organization_id,
            },
            "Branch" => {
                // A branch-typed token must name its branch; without one there
                // is nothing to scope to, so the token is rejected outright.
                let branch_id = claims.branch_id.ok_or_else(|| {
                    tracing::debug!("Branch token without branch id");
                    AppError::InvalidToken
                })?;
                AccessScope::Branch {
                    organization_id: claims.organization_id,
                    branch_id,
                }
            }
            other => {
                tracing::debug!(user_type = %other, "Unknown user type in token");
                return Err(AppError::InvalidToken);
            }
        };

        Ok(ClaimSet {
            user_id,
            email: claims.email,
            role: claims.role,
            scope,
        })
    }
}
