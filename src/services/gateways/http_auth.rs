use color_eyre::eyre::eyre;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::{AuthGateway, AuthGatewayError, Email};

pub struct HttpAuthGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    token: Secret<String>,
}

#[async_trait::async_trait]
impl AuthGateway for HttpAuthGateway {
    #[tracing::instrument(name = "Signing in with auth provider", skip_all)]
    async fn sign_in(
        &self,
        email: &Email,
        password: &Secret<String>,
    ) -> Result<Secret<String>, AuthGatewayError> {
        let request = SignInRequest {
            email: email.as_ref().expose_secret(),
            password: password.expose_secret(),
        };

        let response = self
            .http_client
            .post(format!("{}/sessions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthGatewayError::UnexpectedError(eyre!(e)))?;

        match response.status() {
            status if status.is_success() => {
                let body: SignInResponse =
                    response.json().await.map_err(|e| {
                        AuthGatewayError::UnexpectedError(eyre!(e))
                    })?;
                Ok(body.token)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AuthGatewayError::IncorrectCredentials)
            }
            status => Err(AuthGatewayError::UnexpectedError(eyre!(
                "auth provider returned status {status}"
            ))),
        }
    }

    #[tracing::instrument(name = "Signing out with auth provider", skip_all)]
    async fn sign_out(
        &self,
        token: &Secret<String>,
    ) -> Result<(), AuthGatewayError> {
        let response = self
            .http_client
            .delete(format!("{}/sessions", self.base_url))
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| AuthGatewayError::UnexpectedError(eyre!(e)))?;

        if !response.status().is_success() {
            return Err(AuthGatewayError::UnexpectedError(eyre!(
                "auth provider returned status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
