//! Session Management
//!
//! Login, restore and logout on top of the key-value store. Sessions live
//! for 24 hours; expired entries are evicted lazily on the next check.

use std::rc::Rc;

use uuid::Uuid;

use super::storage::{
    KeyValueStore, KEY_ACCESS_TOKEN, KEY_LAST_LOGIN_TYPE, KEY_REMEMBER_CHOICE, KEY_REMEMBER_TOKEN,
    KEY_SESSION, KEY_SESSION_EXPIRES, KEY_USERNAME, KEY_USER_TYPE,
};

/// Session lifetime in milliseconds (24 hours).
pub const SESSION_DURATION_MS: i64 = 24 * 60 * 60 * 1000;

/// Minimum accepted password length for the demo credential check.
const MIN_PASSWORD_LEN: usize = 4;

/// Access role a user logs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Patient,
    Therapist,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Patient => "patient",
            UserType::Therapist => "therapist",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "patient" => Some(UserType::Patient),
            "therapist" => Some(UserType::Therapist),
            _ => None,
        }
    }
}

/// Payload recovered from a persisted remember-me token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RememberToken {
    pub username: String,
    pub user_type: Option<UserType>,
}

/// Guards access to the portal: validates credentials, owns the persisted
/// session and the remember-me token.
#[derive(Clone)]
pub struct AuthGate {
    store: Rc<dyn KeyValueStore>,
}

impl AuthGate {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Validates credentials and starts a session on success.
    ///
    /// `remember` controls whether a remember-me token is written for the
    /// next visit; declining also records the choice so no automatic
    /// restore happens later.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        user_type: UserType,
        remember: bool,
    ) -> bool {
        let username = username.trim();
        if !authenticate(username, password) {
            return false;
        }

        self.start_session(username, user_type);

        if remember {
            self.store
                .set(KEY_REMEMBER_TOKEN, &generate_remember_token(username, user_type));
            self.store.set(KEY_REMEMBER_CHOICE, "true");
        } else {
            self.store.remove(KEY_REMEMBER_TOKEN);
            self.store.set(KEY_REMEMBER_CHOICE, "false");
        }

        true
    }

    /// Whether a live session exists. An expired session is cleared as a
    /// side effect.
    pub fn is_logged_in(&self) -> bool {
        if self.store.get(KEY_SESSION).is_none() {
            return false;
        }
        let expires = self
            .store
            .get(KEY_SESSION_EXPIRES)
            .and_then(|v| v.parse::<i64>().ok());
        match expires {
            Some(expires) if now_ms() < expires => true,
            _ => {
                self.clear_session();
                false
            }
        }
    }

    /// Re-opens a session from a valid remember-me token.
    pub fn restore_session(&self) -> bool {
        let Some(token) = self.remember_token() else {
            return false;
        };
        // Tokens from older builds may lack a usable type.
        let user_type = token.user_type.unwrap_or_else(|| self.last_login_type());
        self.start_session(&token.username, user_type);
        true
    }

    /// Ensures a usable session: a live one wins, otherwise a restore is
    /// attempted unless the user declined remember-me.
    pub fn ensure_session(&self) -> bool {
        if self.is_logged_in() {
            return true;
        }
        if self.remember_choice() == Some(false) {
            return false;
        }
        self.restore_session()
    }

    /// Ends the session and drops the remember-me token.
    pub fn logout(&self) {
        self.clear_session();
        self.store.remove(KEY_REMEMBER_TOKEN);
    }

    pub fn username(&self) -> Option<String> {
        self.store.get(KEY_USERNAME)
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.store.get(KEY_USER_TYPE).and_then(|v| UserType::parse(&v))
    }

    /// Username stored in the remember-me token, for prefilling the login
    /// form. A malformed token is purged.
    pub fn remembered_username(&self) -> Option<String> {
        self.remember_token().map(|t| t.username)
    }

    pub fn has_remember_token(&self) -> bool {
        self.remember_token().is_some()
    }

    pub fn remember_choice(&self) -> Option<bool> {
        match self.store.get(KEY_REMEMBER_CHOICE).as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    pub fn set_remember_choice(&self, remember: bool) {
        self.store
            .set(KEY_REMEMBER_CHOICE, if remember { "true" } else { "false" });
        if !remember {
            self.store.remove(KEY_REMEMBER_TOKEN);
        }
    }

    /// User type selected at the last login attempt; defaults to patient.
    pub fn last_login_type(&self) -> UserType {
        self.store
            .get(KEY_LAST_LOGIN_TYPE)
            .and_then(|v| UserType::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_last_login_type(&self, user_type: UserType) {
        self.store.set(KEY_LAST_LOGIN_TYPE, user_type.as_str());
    }

    fn start_session(&self, username: &str, user_type: UserType) {
        let expires = now_ms() + SESSION_DURATION_MS;
        self.store.set(KEY_SESSION, &generate_session_token());
        self.store.set(KEY_SESSION_EXPIRES, &expires.to_string());
        self.store.set(KEY_USERNAME, username);
        self.store.set(KEY_USER_TYPE, user_type.as_str());
        self.store
            .set(KEY_ACCESS_TOKEN, &base64_encode(&format!("{username}:{expires}")));
        self.set_last_login_type(user_type);
    }

    fn clear_session(&self) {
        self.store.remove(KEY_SESSION);
        self.store.remove(KEY_SESSION_EXPIRES);
        self.store.remove(KEY_USERNAME);
        self.store.remove(KEY_USER_TYPE);
        self.store.remove(KEY_ACCESS_TOKEN);
    }

    fn remember_token(&self) -> Option<RememberToken> {
        let raw = self.store.get(KEY_REMEMBER_TOKEN)?;
        match parse_remember_token(&raw) {
            Some(token) => Some(token),
            None => {
                self.store.remove(KEY_REMEMBER_TOKEN);
                None
            }
        }
    }
}

/// Demo credential check standing in for the backend call: any trimmed
/// non-empty username with a password of at least four characters passes.
fn authenticate(username: &str, password: &str) -> bool {
    !username.is_empty() && password.len() >= MIN_PASSWORD_LEN
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn generate_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Builds a remember-me token: base64 of `remember:user:type:ts:nonce`.
fn generate_remember_token(username: &str, user_type: UserType) -> String {
    let payload = format!(
        "remember:{}:{}:{}:{}",
        username,
        user_type.as_str(),
        now_ms(),
        Uuid::new_v4().simple()
    );
    base64_encode(&payload)
}

/// Decodes and validates a remember-me token. Returns `None` for anything
/// that does not decode to the expected shape.
fn parse_remember_token(raw: &str) -> Option<RememberToken> {
    let decoded = base64_decode(raw)?;
    let text = String::from_utf8(decoded).ok()?;
    let mut parts = text.splitn(5, ':');

    if parts.next()? != "remember" {
        return None;
    }
    let username = parts.next()?;
    if username.is_empty() {
        return None;
    }
    let user_type = UserType::parse(parts.next()?);
    parts.next()?.parse::<i64>().ok()?;
    parts.next()?;

    Some(RememberToken {
        username: username.to_string(),
        user_type,
    })
}

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn base64_encode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity((bytes.len() + 2) / 3 * 4);

    for chunk in bytes.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = chunk.get(1).copied().unwrap_or(0) as u32;
        let b2 = chunk.get(2).copied().unwrap_or(0) as u32;
        let triple = (b0 << 16) | (b1 << 8) | b2;

        out.push(BASE64_ALPHABET[(triple >> 18) as usize & 0x3f] as char);
        out.push(BASE64_ALPHABET[(triple >> 12) as usize & 0x3f] as char);
        out.push(if chunk.len() > 1 {
            BASE64_ALPHABET[(triple >> 6) as usize & 0x3f] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            BASE64_ALPHABET[triple as usize & 0x3f] as char
        } else {
            '='
        });
    }

    out
}

fn base64_decode(input: &str) -> Option<Vec<u8>> {
    let input = input.trim_end_matches('=');
    let mut out = Vec::with_capacity(input.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for ch in input.bytes() {
        let value = BASE64_ALPHABET.iter().position(|&c| c == ch)? as u32;
        buffer = (buffer << 6) | value;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStore;

    fn gate() -> AuthGate {
        AuthGate::new(Rc::new(MemoryStore::new()))
    }

    #[test]
    fn test_login_rejects_short_password() {
        let auth = gate();
        assert!(!auth.login("erika", "abc", UserType::Patient, false));
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_login_rejects_blank_username() {
        let auth = gate();
        assert!(!auth.login("   ", "secret", UserType::Patient, false));
    }

    #[test]
    fn test_login_starts_session() {
        let auth = gate();
        assert!(auth.login("erika", "secret", UserType::Therapist, false));
        assert!(auth.is_logged_in());
        assert_eq!(auth.username().as_deref(), Some("erika"));
        assert_eq!(auth.user_type(), Some(UserType::Therapist));
        assert_eq!(auth.last_login_type(), UserType::Therapist);
    }

    #[test]
    fn test_username_is_trimmed_on_login() {
        let auth = gate();
        assert!(auth.login("  erika  ", "secret", UserType::Patient, false));
        assert_eq!(auth.username().as_deref(), Some("erika"));
    }

    #[test]
    fn test_expired_session_self_clears() {
        let auth = gate();
        assert!(auth.login("erika", "secret", UserType::Patient, false));
        auth.store
            .set(KEY_SESSION_EXPIRES, &(now_ms() - 1).to_string());

        assert!(!auth.is_logged_in());
        assert_eq!(auth.store.get(KEY_SESSION), None);
        assert_eq!(auth.store.get(KEY_USERNAME), None);
    }

    #[test]
    fn test_remember_token_roundtrip() {
        let auth = gate();
        assert!(auth.login("erika", "secret", UserType::Therapist, true));
        auth.clear_session();
        assert!(!auth.is_logged_in());

        assert!(auth.ensure_session());
        assert!(auth.is_logged_in());
        assert_eq!(auth.username().as_deref(), Some("erika"));
        assert_eq!(auth.user_type(), Some(UserType::Therapist));
    }

    #[test]
    fn test_declined_remember_blocks_restore() {
        let auth = gate();
        assert!(auth.login("erika", "secret", UserType::Patient, true));
        auth.clear_session();
        auth.set_remember_choice(false);

        assert!(!auth.ensure_session());
        assert!(!auth.has_remember_token());
    }

    #[test]
    fn test_malformed_remember_token_is_purged() {
        let auth = gate();
        auth.store.set(KEY_REMEMBER_TOKEN, "not-base64!!");
        assert_eq!(auth.remembered_username(), None);
        assert_eq!(auth.store.get(KEY_REMEMBER_TOKEN), None);

        // Decodes, but the payload shape is wrong.
        auth.store
            .set(KEY_REMEMBER_TOKEN, &base64_encode("something:else"));
        assert!(!auth.restore_session());
        assert_eq!(auth.store.get(KEY_REMEMBER_TOKEN), None);
    }

    #[test]
    fn test_logout_clears_session_and_token() {
        let auth = gate();
        assert!(auth.login("erika", "secret", UserType::Patient, true));
        auth.logout();

        assert!(!auth.is_logged_in());
        assert!(!auth.has_remember_token());
        // The explicit choice survives so no silent restore happens.
        assert_eq!(auth.remember_choice(), Some(true));
    }

    #[test]
    fn test_remember_token_parse_tolerates_unknown_type() {
        let raw = base64_encode("remember:erika:admin:1700000000000:abc");
        let token = parse_remember_token(&raw).unwrap();
        assert_eq!(token.username, "erika");
        assert_eq!(token.user_type, None);
    }

    #[test]
    fn test_base64_roundtrip() {
        for input in ["", "a", "ab", "abc", "remember:erika:patient:1:x"] {
            let encoded = base64_encode(input);
            let decoded = base64_decode(&encoded).unwrap();
            assert_eq!(String::from_utf8(decoded).unwrap(), input);
        }
    }

    #[test]
    fn test_base64_rejects_invalid_characters() {
        assert_eq!(base64_decode("§§§§"), None);
    }
}
