use axum::http::HeaderMap;
use std::collections::HashMap;

/// Identity extracted from a validated credential.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub name: String,
}

/// Per-request credential check consumed by the private endpoint.
///
/// Handlers see only "authenticated plus name"; how the credential is
/// validated stays behind this trait.
pub trait Authenticator: Send + Sync {
    /// `Some` when the request carries a valid credential.
    fn authenticate(&self, headers: &HeaderMap) -> Option<CallerIdentity>;
}

/// Validates `Authorization: Bearer <token>` against a configured
/// token-to-caller-name table.
pub struct BearerAuth {
    tokens: HashMap<String, String>,
}

impl BearerAuth {
    /// Parses a comma-separated `token:name` spec, e.g. `"abc123:alice,def456:bob"`.
    /// An empty spec is valid and authenticates nobody.
    pub fn from_token_spec(spec: &str) -> anyhow::Result<Self> {
        let mut tokens = HashMap::new();

        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (token, name) = pair
                .split_once(':')
                .ok_or_else(|| anyhow::anyhow!("Invalid auth token entry: {}", pair))?;
            if token.is_empty() || name.is_empty() {
                return Err(anyhow::anyhow!("Invalid auth token entry: {}", pair));
            }
            tokens.insert(token.to_string(), name.to_string());
        }

        Ok(Self { tokens })
    }
}

impl Authenticator for BearerAuth {
    fn authenticate(&self, headers: &HeaderMap) -> Option<CallerIdentity> {
        let auth_value = headers.get("Authorization")?.to_str().ok()?;
        let token = auth_value.strip_prefix("Bearer ")?;

        self.tokens.get(token).map(|name| CallerIdentity {
            name: name.clone(),
        })
    }
}
