use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    AuthGateway, EmailClient, MemberGateway, PartnerGateway, ProjectGateway,
};
use crate::services::query_cache::QueryCache;

pub type MemberGatewayType = Arc<RwLock<dyn MemberGateway + Send + Sync>>;
pub type PartnerGatewayType = Arc<RwLock<dyn PartnerGateway + Send + Sync>>;
pub type ProjectGatewayType = Arc<RwLock<dyn ProjectGateway + Send + Sync>>;
pub type AuthGatewayType = Arc<dyn AuthGateway + Send + Sync>;
pub type EmailClientType = Arc<dyn EmailClient + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub members: MemberGatewayType,
    pub partners: PartnerGatewayType,
    pub projects: ProjectGatewayType,
    pub auth: AuthGatewayType,
    pub email_client: EmailClientType,
    pub cache: QueryCache,
}

impl AppState {
    pub fn new(
        members: MemberGatewayType,
        partners: PartnerGatewayType,
        projects: ProjectGatewayType,
        auth: AuthGatewayType,
        email_client: EmailClientType,
        cache: QueryCache,
    ) -> Self {
        Self {
            members,
            partners,
            projects,
            auth,
            email_client,
            cache,
        }
    }
}
