//! Remote credential exchange against the EcoChain authentication service,
//! and the login/registration form flow built on it.

pub(crate) mod client;
pub(crate) mod credential_flow;
pub(crate) mod credential_form;

#[cfg(test)]
mod tests;

pub use client::{
    ClientError, ClientResult, CredentialClient, LOGIN_PATH, LoginGrant, REGISTER_PATH,
    RegisterRequest, ResponseEnvelope,
};
pub use credential_flow::{CredentialFlow, FlowOutcome};
pub use credential_form::{CredentialForm, FormMode};
