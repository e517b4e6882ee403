//! HS256 token helpers.
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{de::DeserializeOwned, Serialize};

#[inline]
pub fn encode_jwt<T: Serialize>(claims: &T, secret: &[u8]) -> Result<String, JwtError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
}

/// Decode and validate a token: signature, `exp`, and the expected issuer.
#[inline]
pub fn decode_jwt<T: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    issuer: &str,
) -> Result<TokenData<T>, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_issuer(&[issuer]);
    decode::<T>(token, &DecodingKey::from_secret(secret), &validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        iss: String,
        exp: i64,
    }

    fn claims(iss: &str, ttl: i64) -> TestClaims {
        TestClaims {
            sub: "42".into(),
            iss: iss.into(),
            exp: chrono::Utc::now().timestamp() + ttl,
        }
    }

    #[test]
    fn test_encode_then_decode() {
        let token = encode_jwt(&claims("brandfluence", 600), b"secret").unwrap();
        let data = decode_jwt::<TestClaims>(&token, b"secret", "brandfluence").unwrap();
        assert_eq!(data.claims.sub, "42");
    }

    #[test]
    fn test_wrong_secret_or_issuer_fails() {
        let token = encode_jwt(&claims("brandfluence", 600), b"secret").unwrap();
        assert!(decode_jwt::<TestClaims>(&token, b"other", "brandfluence").is_err());
        assert!(decode_jwt::<TestClaims>(&token, b"secret", "someone-else").is_err());
    }

    #[test]
    fn test_expired_token_fails() {
        let token = encode_jwt(&claims("brandfluence", -3600), b"secret").unwrap();
        assert!(decode_jwt::<TestClaims>(&token, b"secret", "brandfluence").is_err());
    }
}
