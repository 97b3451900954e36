/**
 * Form Types
 *
 * Form bodies accepted by the authentication handlers.
 */

use serde::{Deserialize, Serialize};

/// Login form (`POST /login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form (`POST /register`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub platform_account_id: String,
    /// Blank is treated as "no token"
    #[serde(default)]
    pub access_token: Option<String>,
}

impl RegisterForm {
    /// Access token with surrounding whitespace removed; blank becomes `None`
    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(token: Option<&str>) -> RegisterForm {
        RegisterForm {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            platform_account_id: String::new(),
            access_token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_blank_access_token_is_none() {
        assert_eq!(form(None).access_token(), None);
        assert_eq!(form(Some("")).access_token(), None);
        assert_eq!(form(Some("   ")).access_token(), None);
        assert_eq!(form(Some(" tok ")).access_token(), Some("tok".to_string()));
    }
}
