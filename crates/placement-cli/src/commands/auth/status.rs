use placement_auth::expiry::decode_expiry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<String>,
    email: Option<String>,
    role: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

pub fn run(ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match ctx.session_user() {
        Some(user) => {
            let expires_at = ctx
                .gate
                .access_token()
                .and_then(|token| decode_expiry(&token).ok())
                .map(|expiry| expiry.to_rfc3339());
            AuthStatusResponse {
                authenticated: true,
                user: Some(user.username.clone()),
                email: Some(user.email.clone()),
                role: Some(user.role.as_str().to_string()),
                expires_at,
                token_source: ctx
                    .gate
                    .tokens()
                    .source()
                    .map(|source| source.as_str().to_string()),
                note: None,
            }
        }
        None => AuthStatusResponse {
            authenticated: false,
            user: None,
            email: None,
            role: None,
            expires_at: None,
            token_source: None,
            note: Some("no active session; run `placement auth login`".into()),
        },
    };

    output(&status, flags.format)
}
