use color_eyre::eyre::Report;
use secrecy::Secret;
use thiserror::Error;

use super::{
    Email, MemberRoster, MemberUpdate, NewMember, NewPartner, NewProject,
    PartnerList, PartnerUpdate, ProjectList, ProjectUpdate,
};

// The backend owns every resource; these gateways are the only way in or
// out. One trait per resource, mirroring the backend's route groups.

#[async_trait::async_trait]
pub trait MemberGateway {
    async fn list(&self) -> Result<MemberRoster, GatewayError>;
    async fn add(&mut self, new_member: NewMember) -> Result<(), GatewayError>;
    async fn update(
        &mut self,
        id: i64,
        update: MemberUpdate,
    ) -> Result<(), GatewayError>;
    async fn delete(&mut self, id: i64) -> Result<(), GatewayError>;
}

#[async_trait::async_trait]
pub trait PartnerGateway {
    async fn list(&self) -> Result<PartnerList, GatewayError>;
    async fn add(&mut self, new_partner: NewPartner)
        -> Result<(), GatewayError>;
    async fn update(
        &mut self,
        id: i64,
        update: PartnerUpdate,
    ) -> Result<(), GatewayError>;
    async fn delete(&mut self, id: i64) -> Result<(), GatewayError>;
}

#[async_trait::async_trait]
pub trait ProjectGateway {
    async fn list(&self) -> Result<ProjectList, GatewayError>;
    async fn add(&mut self, new_project: NewProject)
        -> Result<(), GatewayError>;
    async fn update(
        &mut self,
        id: i64,
        update: ProjectUpdate,
    ) -> Result<(), GatewayError>;
    async fn delete(&mut self, id: i64) -> Result<(), GatewayError>;
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Resource with ID not found: {0}")]
    IdNotFound(i64),
    #[error("Backend rejected the request with status {0}")]
    RequestFailed(u16),
    #[error("Backend response violates the contract: {0}")]
    ContractViolation(String),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for GatewayError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IdNotFound(a), Self::IdNotFound(b)) => a == b,
            (Self::RequestFailed(a), Self::RequestFailed(b)) => a == b,
            (Self::ContractViolation(a), Self::ContractViolation(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

// The hosted auth provider. Sign-in yields the provider's session token;
// observing the session happens by decoding the token's claims.
#[async_trait::async_trait]
pub trait AuthGateway {
    async fn sign_in(
        &self,
        email: &Email,
        password: &Secret<String>,
    ) -> Result<Secret<String>, AuthGatewayError>;
    async fn sign_out(
        &self,
        token: &Secret<String>,
    ) -> Result<(), AuthGatewayError>;
}

#[derive(Debug, Error)]
pub enum AuthGatewayError {
    #[error("Incorrect credentials")]
    IncorrectCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for AuthGatewayError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::IncorrectCredentials, Self::IncorrectCredentials)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
