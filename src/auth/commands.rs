// src/auth/commands.rs

use tracing::info;

use super::api;
use super::models::Credentials;
use super::session::SessionStore;
use crate::api::ApiClient;
use crate::common::{safe_token_log, ClientError, ValidationResult};

fn validate_credentials(creds: &Credentials) -> ValidationResult {
    let mut result = ValidationResult::new();
    if creds.username.trim().is_empty() {
        result.add_error("username", "Username is required");
    }
    if creds.password.is_empty() {
        result.add_error("password", "Password is required");
    }
    result
}

pub async fn register(
    client: &ApiClient,
    store: &SessionStore,
    username: String,
    password: String,
) -> Result<(), ClientError> {
    let creds = Credentials { username, password };
    validate_credentials(&creds).into_result()?;

    let response = api::register(client, &creds).await?;
    match response.token {
        Some(token) => {
            info!(token = %safe_token_log(&token), "registered and signed in");
            store.set(token, response.data)?;
            println!("Account created. You are signed in as {}.", creds.username);
        }
        None => {
            println!("Account created. Run `smarthire auth login` to sign in.");
        }
    }
    Ok(())
}

pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    username: String,
    password: String,
) -> Result<(), ClientError> {
    let creds = Credentials { username, password };
    validate_credentials(&creds).into_result()?;

    let response = api::login(client, &creds).await?;
    let token = response.token.ok_or_else(|| {
        ClientError::InvalidResponse("login response did not contain a token".to_string())
    })?;

    info!(token = %safe_token_log(&token), "login successful");
    store.set(token, response.data)?;
    println!("Login successful.");
    Ok(())
}

pub fn logout(store: &SessionStore) -> Result<(), ClientError> {
    store.clear()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(store: &SessionStore) -> Result<(), ClientError> {
    let session = store.load();
    match (&session.token, &session.user) {
        (Some(_), Some(user)) => {
            println!(
                "Signed in as {}",
                user.username.as_deref().unwrap_or("(unknown user)")
            );
        }
        (Some(_), None) => println!("Signed in (no profile stored)."),
        _ => println!("Not signed in."),
    }
    Ok(())
}
