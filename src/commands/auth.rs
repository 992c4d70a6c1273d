use anyhow::Result;
use log::debug;

use crate::api::Auth;
use crate::api::types::SignupRequest;

#[tracing::instrument(skip(auth, password))]
pub async fn login(auth: &Auth, email: &str, password: &str) -> Result<()> {
    let user = auth.login(email, password).await?;
    debug!("logged in as {}", user.id);
    println!("Logged in as {}", user.email);
    Ok(())
}

#[tracing::instrument(skip(auth, password))]
pub async fn signup(
    auth: &Auth,
    email: &str,
    password: &str,
    name: Option<String>,
) -> Result<()> {
    let user = auth
        .signup(&SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name,
        })
        .await?;
    println!("Account created for {}", user.email);
    Ok(())
}

#[tracing::instrument(skip(auth))]
pub async fn me(auth: &Auth) -> Result<()> {
    let user = auth.me().await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

#[tracing::instrument(skip(auth))]
pub async fn logout(auth: &Auth) -> Result<()> {
    auth.logout().await?;
    println!("Logged out.");
    Ok(())
}
