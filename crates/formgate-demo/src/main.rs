mod catalog;
mod config;
mod forms;
mod mock_api;

use crate::catalog::{ControlValue, InputCatalog};
use crate::config::Config;
use crate::forms::{comment_form, registration_form, COMMENT_MAX_LEN};
use crate::mock_api::MockApi;
use anyhow::Result;
use formgate::{FormSession, FormValidator, SubmitState};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("formgate demo starting...");

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    println!(
        "API latency: {}ms, fail submissions: {}",
        config.api.latency_ms, config.api.fail_submissions
    );

    let api = MockApi::new(
        Duration::from_millis(config.api.latency_ms),
        config.api.fail_submissions,
    );

    run_registration(api.clone()).await?;
    run_comment_form();

    if config.demo.show_catalog {
        run_catalog()?;
    }

    println!("\nMock API accepted {} submission(s)", api.size().await);
    for submission in api.submissions().await {
        println!("  {} at {}", submission.id, submission.received_at);
    }
    Ok(())
}

/// The registration walkthrough: a bad email is caught on blur, fixed,
/// and the form is then submitted through the mock API.
async fn run_registration(api: MockApi) -> Result<()> {
    print_banner("Registration form (errors shown after blur)");

    let mut session = FormSession::new(registration_form(), api);

    let form = session.form_mut();
    form.set_value("name", "Ada Lovelace");
    form.set_value("email", "ada@");
    form.set_value("age", "36");
    form.set_value("website", "https://ada.dev");
    form.set_value("password", "Analytic1");

    // Typing alone shows nothing, even though the email is invalid.
    println!("typed an invalid email, before blur:");
    print_fields(session.form());

    session.form_mut().mark_touched("email");
    println!("after blur:");
    print_fields(session.form());

    // Submitting now is blocked locally.
    session.submit().await;
    if let SubmitState::Failed(reason) = session.state() {
        println!("submit blocked: {}", reason);
    }

    session.form_mut().set_value("email", "ada@example.com");
    println!("after fixing the email:");
    print_fields(session.form());

    session.submit().await;
    match session.state() {
        SubmitState::Succeeded(message) => {
            info!("Registration accepted");
            println!("submit ok: {}", message);
        }
        SubmitState::Failed(reason) => println!("submit failed: {}", reason),
        _ => {}
    }

    // A successful submission clears the form.
    println!("after submit:");
    print_fields(session.form());
    Ok(())
}

/// The comment form walkthrough: errors appear while typing, plus the
/// live character counter.
fn run_comment_form() {
    print_banner("Comment form (errors shown while typing)");

    let mut form = comment_form();

    form.set_value("comment", "Too short");
    println!(
        "comment ({}/{}): {:?}",
        form.value("comment").len(),
        COMMENT_MAX_LEN,
        form.display("comment")
    );

    form.set_value(
        "comment",
        "This comment is long enough to pass validation.",
    );
    println!(
        "comment ({}/{}): {:?}",
        form.value("comment").len(),
        COMMENT_MAX_LEN,
        form.display("comment")
    );
}

/// The input catalog walkthrough: one handler for every control shape,
/// live JSON state, then a reset.
fn run_catalog() -> Result<()> {
    print_banner("Input catalog (single change handler, live state)");

    let mut catalog = InputCatalog::standard();
    let names: Vec<&str> = catalog.controls().iter().map(|control| control.name).collect();
    println!("{} controls: {}", catalog.len(), names.join(", "));

    catalog.apply("text", ControlValue::text("hello"));
    catalog.apply("range", ControlValue::text("80"));
    catalog.apply("checkbox", ControlValue::Toggle(true));
    catalog.apply(
        "file",
        ControlValue::FileName(Some("resume.pdf".to_string())),
    );

    println!("checkbox is now {:?}", catalog.value("checkbox"));
    println!("{}", catalog.state_json()?);

    catalog.reset();
    println!("after reset: {} controls back to defaults", catalog.len());
    Ok(())
}

fn print_banner(title: &str) {
    println!("\n=== {} ===", title);
}

fn print_fields(form: &FormValidator) {
    for field in form.field_names() {
        println!("  {:12} {:?} -> {:?}", field, form.value(field), form.display(field));
    }
}
