/// Token struct holding the opaque access token and computed expiration
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub expires_at: i64, // UNIX timestamp
}

impl Token {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }
}
