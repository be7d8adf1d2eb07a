use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref BACKEND_BASE_URL: String =
        load_or_default(env::BACKEND_BASE_URL_ENV_VAR, "http://localhost:8080");
    pub static ref AUTH_BASE_URL: String =
        load_or_default(env::AUTH_BASE_URL_ENV_VAR, "http://localhost:8081");
    pub static ref AUTH_TOKEN_SECRET: Secret<String> = set_auth_token_secret();
    pub static ref EMAIL_BASE_URL: String = load_or_default(
        env::EMAIL_BASE_URL_ENV_VAR,
        prod::email_client::BASE_URL
    );
    pub static ref EMAIL_SERVICE_ID: String = set_email_service_id();
    pub static ref EMAIL_TEMPLATE_ID: String = set_email_template_id();
    pub static ref EMAIL_PUBLIC_KEY: Secret<String> = set_email_public_key();
}

fn load_env() {
    dotenv().ok();
}

fn set_auth_token_secret() -> Secret<String> {
    load_env();
    let secret = std_env::var(env::AUTH_TOKEN_SECRET_ENV_VAR)
        .expect("AUTH_TOKEN_SECRET must be set.");
    if secret.is_empty() {
        panic!("AUTH_TOKEN_SECRET must not be empty.");
    }
    Secret::new(secret)
}

fn set_email_service_id() -> String {
    load_env();
    std_env::var(env::EMAIL_SERVICE_ID_ENV_VAR)
        .expect("EMAIL_SERVICE_ID must be set")
}

fn set_email_template_id() -> String {
    load_env();
    std_env::var(env::EMAIL_TEMPLATE_ID_ENV_VAR)
        .expect("EMAIL_TEMPLATE_ID must be set")
}

fn set_email_public_key() -> Secret<String> {
    load_env();
    Secret::new(
        std_env::var(env::EMAIL_PUBLIC_KEY_ENV_VAR)
            .expect("EMAIL_PUBLIC_KEY must be set"),
    )
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const BACKEND_BASE_URL_ENV_VAR: &str = "BACKEND_BASE_URL";
    pub const AUTH_BASE_URL_ENV_VAR: &str = "AUTH_BASE_URL";
    pub const AUTH_TOKEN_SECRET_ENV_VAR: &str = "AUTH_TOKEN_SECRET";
    pub const EMAIL_BASE_URL_ENV_VAR: &str = "EMAIL_BASE_URL";
    pub const EMAIL_SERVICE_ID_ENV_VAR: &str = "EMAIL_SERVICE_ID";
    pub const EMAIL_TEMPLATE_ID_ENV_VAR: &str = "EMAIL_TEMPLATE_ID";
    pub const EMAIL_PUBLIC_KEY_ENV_VAR: &str = "EMAIL_PUBLIC_KEY";
}

pub const SESSION_COOKIE_NAME: &str = "session";
pub const NOTICE_COOKIE_NAME: &str = "notice";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.emailjs.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
    pub mod backend_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
    pub mod backend_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
