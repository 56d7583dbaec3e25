//! OTP login
//!
//! Prompts for username and mobile number, sends a code, then asks for it
//! back. A match persists the session and moves on to the report screen.

use anyhow::Result;
use console::Term;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::Output;
use crate::config::OtpDelivery;
use crate::error::Error;
use crate::navigation::{Navigator, Route};
use crate::session::{ConsoleOtpSender, LoginFlow, RandomOtp};

use super::{load_config, open_store};

pub async fn execute(
    username: Option<String>,
    mobile: Option<String>,
    custom_config: Option<&str>,
    output: &Output,
) -> Result<()> {
    let config = load_config(custom_config)?;
    let store = open_store(&config)?;

    let mut nav = Navigator::launch(&store).await?;
    if nav.current() == Route::Report {
        output.success("Already logged in");
        return Ok(());
    }
    nav.push(Route::Login);

    output.header("Login");
    let username = match username {
        Some(username) => username,
        None => prompt("Username")?,
    };
    let mobile = match mobile {
        Some(mobile) => mobile,
        None => prompt("Mobile Number")?,
    };

    let sender = match config.auth.otp_delivery {
        OtpDelivery::Console if output.is_stderr() => ConsoleOtpSender::new(Term::stderr()),
        OtpDelivery::Console => ConsoleOtpSender::new(Term::stdout()),
    };
    let mut flow = LoginFlow::new(RandomOtp, sender);

    if let Err(e) = flow.send_otp(&mobile).await {
        output.alert(e.title(), &e.to_string());
        return Ok(());
    }
    output.success("OTP Sent");

    let otp = prompt("Enter OTP")?;
    match flow.login(&username, &mobile, &otp, &store, &mut nav).await {
        Ok(()) => {
            output.success("Logged in");
            output.verbose(&format!("Now on: {}", nav.current()));
            Ok(())
        }
        Err(e @ (Error::InvalidOtp | Error::Validation(_))) => {
            output.alert(e.title(), &e.to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt(label: &str) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
