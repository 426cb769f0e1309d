use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse<'a> {
    authenticated: bool,
    user: &'a str,
    role: &'a str,
}

pub async fn run(
    username: &str,
    password: &str,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !ctx.login(username, password).await {
        anyhow::bail!("Invalid credentials");
    }
    let user = ctx
        .session_user()
        .ok_or_else(|| anyhow::anyhow!("login succeeded but no session user was recorded"))?;
    output(
        &LoginResponse {
            authenticated: true,
            user: &user.username,
            role: user.role.as_str(),
        },
        flags.format,
    )
}
