use crate::{ClientError, ClientResult, RegisterRequest};

use eco_core::Role;

const REQUIRED_FIELDS: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

/// Login and registration fields, plus the inline error shown beside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub mode: FormMode,
    pub login: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
    pub role: Role,
    pub error: Option<String>,
}

impl CredentialForm {
    pub fn login(login: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            role,
            ..Self::default()
        }
    }

    pub fn register(
        login: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            mode: FormMode::Register,
            login: login.into(),
            password: password.into(),
            full_name: full_name.into(),
            phone: phone.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    /// Switches between login and registration, dropping any stale error.
    pub fn switch_mode(&mut self, mode: FormMode) {
        self.mode = mode;
        self.error = None;
    }

    /// Clears every field and returns to login mode as an end user.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[track_caller]
    pub fn validate(&self) -> ClientResult<()> {
        let mut required = vec![&self.login, &self.password];
        if self.mode == FormMode::Register {
            required.extend([&self.full_name, &self.phone, &self.address]);
        }

        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ClientError::validation(REQUIRED_FIELDS));
        }
        Ok(())
    }

    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            login: self.login.trim().to_string(),
            password: self.password.clone(),
            fullname: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.address.trim().to_string(),
        }
    }
}
