//! # Royal Dashboard Entry Point
//!
//! Headless front door for the dashboard back end.
//!
//! ```text
//! royal-dashboard                      print landing-page stats as JSON
//! royal-dashboard bill f1 f1 f3 card   ring up a bill and export its invoice
//! ```
//!
//! Configuration comes from the `ROYAL_*` environment variables (see
//! `ConfigState::from_env`).

use std::process::ExitCode;

use royal_core::PaymentMethod;
use royal_dashboard::commands::{cart, dashboard, invoice};
use royal_dashboard::error::ApiResult;
use royal_dashboard::render::ExportFormat;
use royal_dashboard::{init_tracing, App};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> ApiResult<String> {
    let app = App::bootstrap()?;

    match args.split_first() {
        Some((command, rest)) if command == "bill" => ring_up(&app, rest).await,
        _ => {
            let stats = dashboard::get_dashboard_stats(&app.store, &app.cart)?;
            Ok(to_json(&stats))
        }
    }
}

/// Item ids go on the bill in order; a trailing `cash` or `card` picks the
/// payment method.
async fn ring_up(app: &App, args: &[String]) -> ApiResult<String> {
    for arg in args {
        match arg.parse::<PaymentMethod>() {
            Ok(method) => {
                cart::set_payment_method(&app.cart, method)?;
            }
            Err(_) => {
                cart::add_to_cart(&app.store, &app.cart, arg)?;
            }
        }
    }

    let exported = invoice::export_invoice(&app.cart, &app.config, ExportFormat::Typst, None).await?;
    Ok(to_json(&exported))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
