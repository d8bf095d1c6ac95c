// src/infrastructure/security/session_token.rs
//! Session tokens minted by the identity provider.
//!
//! Wire format: `base64url(claims_json) "." base64url(hmac_sha256(secret, first_segment))`,
//! both segments unpadded.
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        identity::{Viewer, ViewerProvider},
        time::Clock,
    },
};
use crate::domain::user::{ExternalUserId, SessionClaims, role_of};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Clone)]
pub struct HmacViewerProvider {
    secret: Arc<[u8]>,
    clock: Arc<dyn Clock>,
}

impl HmacViewerProvider {
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ApplicationError::infrastructure(format!(
                "session signing secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        Ok(Self {
            secret: Arc::from(secret),
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    /// Mint a token for `claims`. Used by local tooling and tests.
    pub fn sign(&self, claims: &SessionClaims) -> ApplicationResult<String> {
        let json = serde_json::to_vec(claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    pub fn verify(&self, token: &str) -> ApplicationResult<SessionClaims> {
        let (payload, signature) = token
            .trim()
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed session token"))?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| ApplicationError::unauthorized("malformed session token signature"))?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("invalid session token signature"))?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| ApplicationError::unauthorized("malformed session token payload"))?;
        let claims: SessionClaims = serde_json::from_slice(&json).map_err(|err| {
            ApplicationError::unauthorized(format!("invalid session claims: {err}"))
        })?;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(ApplicationError::unauthorized("session token expired"));
        }

        Ok(claims)
    }
}

#[async_trait]
impl ViewerProvider for HmacViewerProvider {
    async fn current_viewer(&self, bearer: Option<&str>) -> ApplicationResult<Option<Viewer>> {
        let Some(token) = bearer else {
            return Ok(None);
        };

        let claims = self.verify(token)?;
        let role = role_of(&claims);
        let external_id = ExternalUserId::new(claims.sub)
            .map_err(|_| ApplicationError::unauthorized("session token has no subject"))?;

        Ok(Some(Viewer {
            external_id,
            name: claims.name,
            email: claims.email,
            image_url: claims.image_url,
            role,
        }))
    }
}
