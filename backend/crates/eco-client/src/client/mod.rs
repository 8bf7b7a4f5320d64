pub(crate) mod credential_client;
pub(crate) mod error;
pub(crate) mod envelope;

pub use credential_client::{CredentialClient, LOGIN_PATH, LoginGrant, REGISTER_PATH};
pub use envelope::{RegisterRequest, ResponseEnvelope};
pub use error::{ClientError, Result as ClientResult};
