use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Helper function to parse expiry values
    fn parse_expiry(key: &str, default: &str) -> i64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // Validate secret key length (HS256 requires at least 32 bytes)
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        // Sessions last a week; there is no refresh flow to rotate them.
        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", "604800");

        if access_token_expiry <= 0 {
            panic!("JWT_ACCESS_EXPIRY must be a positive number of seconds");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "AlumNet".to_string());

        Self {
            secret_key,
            issuer,
            access_token_expiry,
        }
    }
}
