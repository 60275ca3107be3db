//! Credential store module
//!
//! Holds the hardcoded demo credential set and the lookup used by the login
//! endpoint. Records are kept in declaration order and the first full match
//! wins; comparison is exact and case-sensitive on both fields.

/// A static username/password/role triple used for demo authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Credential {
    fn new(username: &str, password: &str, role: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }
}

/// Read-only, declaration-ordered credential set.
///
/// Built once at startup and injected into the handler set, so the
/// authentication policy stays testable and swappable.
pub struct CredentialStore {
    records: Vec<Credential>,
}

impl CredentialStore {
    pub const fn new(records: Vec<Credential>) -> Self {
        Self { records }
    }

    /// The demo user set shipped with this service.
    pub fn demo() -> Self {
        Self::new(vec![
            Credential::new("admin", "nimc123", "Administrator"),
            Credential::new("officer", "officer123", "Registration Officer"),
            Credential::new("staff", "staff123", "Support Staff"),
        ])
    }

    /// Find the first record matching both username and password exactly.
    pub fn verify(&self, username: &str, password: &str) -> Option<&Credential> {
        self.records
            .iter()
            .find(|c| c.username == username && c.password == password)
    }
}
