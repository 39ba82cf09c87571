use serde::Deserialize;
use web_sys::window;

const ADMIN_SESSION_KEY: &str = "admin";

/// Admin session blob persisted by the login flow. Read-only here; the
/// page component loads it once and passes the token into API calls.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSession {
    /// Bearer token for the seller API
    pub jwt: String,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load the admin session from localStorage, if present and well-formed
pub fn load_admin_session() -> Option<AdminSession> {
    let raw = get_local_storage()?.get_item(ADMIN_SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_blob_parses() {
        let session: AdminSession =
            serde_json::from_str(r#"{"jwt": "abc.def.ghi", "name": "Shop admin"}"#).unwrap();
        assert_eq!(session.jwt, "abc.def.ghi");
    }
}
