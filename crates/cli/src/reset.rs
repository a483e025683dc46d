use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use client::{Navigator, OriginApi, PasswordResetForm, SubmitOutcome, MISMATCH_HELPER_TEXT};
use secrecy::SecretString;
use shared_types::AppConfig;

/// Route of the browser form; the post-reset target is resolved from here.
const PAGE_PATH: &str = "/initialization/password/";

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Read the password and its confirmation from the first two lines of stdin
    #[arg(long)]
    pub stdin: bool,

    /// Origin web UI base URL (overrides config.toml)
    #[arg(long)]
    pub server: Option<String>,

    /// Value of the origin's `login` session cookie
    #[arg(long, env = "ORIGIN_UI_LOGIN_COOKIE", hide_env_values = true)]
    pub login_cookie: Option<String>,
}

/// The terminal has nowhere to go; the target is only reported.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn current_path(&self) -> String {
        PAGE_PATH.to_string()
    }

    fn push(&self, path: &str) {
        tracing::info!(target_route = path, "Web UI would continue at");
    }
}

pub async fn run(args: ResetPasswordArgs, config: AppConfig) -> Result<()> {
    let (password, confirm) = if args.stdin {
        read_passwords(std::io::stdin().lock())?
    } else {
        prompt_passwords()?
    };

    let mut form = PasswordResetForm::new();
    form.set_password(password);
    form.set_confirm_password(confirm);

    let mut api_config = config.api;
    if let Some(server) = args.server {
        api_config.base_url = server;
    }
    let mut api = OriginApi::from_config(&api_config)?;
    if let Some(cookie) = args.login_cookie {
        api = api.with_login_cookie(SecretString::from(cookie));
    }

    match form.on_submit(&api, &TerminalNavigator).await {
        SubmitOutcome::Navigated(_) => {
            println!("Password reset succeeded");
            Ok(())
        }
        SubmitOutcome::Mismatch => bail!(MISMATCH_HELPER_TEXT),
        SubmitOutcome::Failed => bail!("Password reset failed"),
        SubmitOutcome::Busy => bail!("A password reset is already in progress"),
    }
}

fn prompt_passwords() -> Result<(String, String)> {
    let password = rpassword::prompt_password("Password: ").context("reading password")?;
    let confirm =
        rpassword::prompt_password("Confirm Password: ").context("reading confirmation")?;
    Ok((password, confirm))
}

/// Read the password and its confirmation as the first two lines. A single
/// line counts as both, for scripts that pipe one value.
fn read_passwords(reader: impl BufRead) -> Result<(String, String)> {
    let mut lines = reader.lines();

    let password = lines
        .next()
        .ok_or_else(|| anyhow!("no password on stdin"))?
        .context("reading password from stdin")?;
    let confirm = match lines.next() {
        Some(line) => line.context("reading confirmation from stdin")?,
        None => password.clone(),
    };

    Ok((strip_cr(password), strip_cr(confirm)))
}

fn strip_cr(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}
