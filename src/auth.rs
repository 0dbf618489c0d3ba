//! The bearer-token guard protecting the API.
//!
//! Requests carry a signed token in the `Authorization: Bearer <token>`
//! header. The [Claims] extractor verifies the signature and expiry against
//! the server-held secret and hands the caller identity to the route
//! handler; extraction happens before any handler code runs, so a request
//! that fails here never touches a store.
//!
//! Verification is stateless: there is no revocation list or session
//! store, so a token stays valid until it expires.
//!
//! The stores themselves are identity-agnostic. This service holds one
//! user's ledger, so handlers take the caller identity for logging but do
//! not partition store access by subject.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error};

/// How long a freshly minted token stays valid.
const TOKEN_LIFETIME_MINUTES: i64 = 60;

/// The contents of a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The subject the token was issued to.
    pub sub: String,
    /// Email associated with the token.
    pub email: String,
    /// The time the token was issued, as a unix timestamp.
    pub iat: usize,
    /// The expiry time of the token, as a unix timestamp.
    pub exp: usize,
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::debug!("rejected request: missing or malformed Authorization header");
                Error::Unauthenticated
            })?;

        let state = AppState::from_ref(state);
        let token_data = decode_token(bearer.token(), state.decoding_key())?;

        Ok(token_data.claims)
    }
}

/// Sign a token for `subject`/`email`, valid for the next
/// [TOKEN_LIFETIME_MINUTES] minutes.
///
/// Token issuance is an operator concern (see the `mint_token` binary);
/// there is no sign-in flow in this service.
///
/// # Errors
/// Returns [Error::Internal] if signing fails.
pub fn encode_token(
    subject: &str,
    email: &str,
    encoding_key: &EncodingKey,
) -> Result<String, Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        email: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::minutes(TOKEN_LIFETIME_MINUTES)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, encoding_key)
        .map_err(|error| Error::Internal(format!("could not sign token: {error}")))
}

/// Verify a token's signature and expiry and decode its claims.
///
/// All failures surface as [Error::Unauthenticated]; the specific reason
/// (expired vs. invalid) is only logged server-side.
pub fn decode_token(token: &str, decoding_key: &DecodingKey) -> Result<TokenData<Claims>, Error> {
    decode(token, decoding_key, &Validation::default()).map_err(|error| {
        match error.kind() {
            ErrorKind::ExpiredSignature => tracing::debug!("rejected bearer token: expired"),
            _ => tracing::debug!("rejected bearer token: invalid ({error})"),
        }

        Error::Unauthenticated
    })
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Json, Router};
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::{
        auth::{self, Claims},
        AppState, Error,
    };

    fn get_test_app_state() -> AppState {
        AppState::new("foobar")
    }

    #[test]
    fn decode_token_returns_the_encoded_identity() {
        let state = get_test_app_state();

        let token = auth::encode_token("user-1", "jane@example.com", state.encoding_key()).unwrap();
        let claims = auth::decode_token(&token, state.decoding_key())
            .unwrap()
            .claims;

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "jane@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn decode_token_rejects_garbage() {
        let state = get_test_app_state();

        let result = auth::decode_token("not-a-token", state.decoding_key());

        assert_eq!(result.unwrap_err(), Error::Unauthenticated);
    }

    #[test]
    fn decode_token_rejects_wrong_secret() {
        let state = get_test_app_state();
        let other = AppState::new("a different secret");

        let token = auth::encode_token("user-1", "jane@example.com", state.encoding_key()).unwrap();
        let result = auth::decode_token(&token, other.decoding_key());

        assert_eq!(result.unwrap_err(), Error::Unauthenticated);
    }

    #[test]
    fn decode_token_rejects_expired_token() {
        let state = get_test_app_state();
        let issued = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "jane@example.com".to_string(),
            iat: issued.timestamp() as usize,
            exp: (issued + Duration::minutes(60)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("foobar".as_ref()),
        )
        .unwrap();

        let result = auth::decode_token(&token, state.decoding_key());

        assert_eq!(result.unwrap_err(), Error::Unauthenticated);
    }

    async fn handler_with_auth(claims: Claims) -> Json<Claims> {
        Json(claims)
    }

    fn protected_app(state: AppState) -> Router {
        Router::new()
            .route("/protected", get(handler_with_auth))
            .with_state(state)
    }

    #[tokio::test]
    async fn protected_route_accepts_a_valid_token() {
        let state = get_test_app_state();
        let token = auth::encode_token("user-1", "jane@example.com", state.encoding_key()).unwrap();

        let server = TestServer::new(protected_app(state)).expect("Could not create test server.");

        let response = server.get("/protected").authorization_bearer(token).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Claims>().email, "jane@example.com");
    }

    #[tokio::test]
    async fn protected_route_rejects_missing_header() {
        let server = TestServer::new(protected_app(get_test_app_state()))
            .expect("Could not create test server.");

        server
            .get("/protected")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn protected_route_rejects_empty_token() {
        let server = TestServer::new(protected_app(get_test_app_state()))
            .expect("Could not create test server.");

        server
            .get("/protected")
            .authorization_bearer("")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
