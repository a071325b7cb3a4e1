//! Account commands: session establishment and teardown.

use anyhow::Result;
use appforge_core::session::{Session, SessionManager};

pub async fn login(sessions: &SessionManager, email: &str, password: &str) -> Result<()> {
    let session = sessions.login(email, password).await?;
    print_session("Logged in", &session);
    Ok(())
}

pub async fn signup(
    sessions: &SessionManager,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let session = sessions.signup(name, email, password).await?;
    print_session("Account created", &session);
    Ok(())
}

pub async fn oauth(sessions: &SessionManager, provider: &str) -> Result<()> {
    let session = sessions.oauth_login(provider).await?;
    print_session(&format!("Logged in via {}", provider), &session);
    Ok(())
}

pub async fn logout(sessions: &SessionManager) -> Result<()> {
    let was_authenticated = sessions.is_authenticated().await;
    sessions.logout().await?;
    if was_authenticated {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

pub async fn whoami(sessions: &SessionManager) -> Result<()> {
    match sessions.current_session().await {
        Some(session) => print_session("Current session", &session),
        None => println!("Not logged in."),
    }
    Ok(())
}

fn print_session(heading: &str, session: &Session) {
    let identity = &session.identity;
    println!("{}: {} <{}>", heading, identity.name, identity.email);
    println!(
        "  role: {}  plan: {} ({})",
        identity.role, identity.subscription.plan, identity.subscription.status
    );
    if let Some(expires_at) = identity.subscription.expires_at {
        println!("  plan expires: {}", expires_at.format("%Y-%m-%d"));
    }
}
