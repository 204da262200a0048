/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "careerflow_token";
/// Storage key for the JSON-serialized user profile.
pub const USER_KEY: &str = "careerflow_user";
/// Storage key for the optional ISO-8601 token expiry timestamp.
pub const TOKEN_EXPIRY_KEY: &str = "careerflow_token_expiry";

/// The persisted credential triple, exactly as stored.
///
/// The user value is kept as an unparsed JSON string at this layer;
/// deserializing it (and failing closed when it is malformed) is the
/// session layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCredentials {
    pub token: String,
    pub user_json: String,
    pub expires_at: Option<String>,
}

/// Origin-scoped key-value persistence for the credential triple.
///
/// Implementations are plain string storage with no schema awareness. The
/// contract callers rely on:
///
/// - [`write`](Self::write) stores all three entries as one unit; a reader
///   never observes a token without a user or vice versa.
/// - [`read_all`](Self::read_all) returns the triple, or `None` when either
///   the token or the user entry is missing.
/// - [`clear`](Self::clear) removes all three entries and is idempotent;
///   clearing an empty store is not an error. This is the single eviction
///   path shared by logout and the unauthorized-response handler.
pub trait CredentialStore: Clone + 'static {
    fn read_all(&self) -> Option<RawCredentials>;

    fn write(&self, credentials: &RawCredentials);

    fn clear(&self);

    /// The bearer token, if a complete credential triple is stored.
    ///
    /// This is what the HTTP layer reads on every outbound request; it goes
    /// through [`read_all`](Self::read_all) so a half-written record never
    /// produces an `Authorization` header.
    fn token(&self) -> Option<String> {
        self.read_all().map(|credentials| credentials.token)
    }
}
