//! # Address form demo
//!
//! Renders an address form through the accessible renderer and prints the
//! markup:
//!
//! - **Settings**: defaults, or a TOML file via `--config`, then
//!   `A11Y_FORMS_*` environment overrides
//! - **Logging**: `tracing` subscriber configured from the settings
//! - **Audit**: `--audit` prints accessibility findings for the output
//!
//! ## Running
//!
//! ```bash
//! cargo run --package address-form-demo -- --audit
//! ```

mod address;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use a11y_forms::audit::audit_fragment;
use a11y_forms::{AccessibleFieldRenderer, FormContext};
use a11y_forms_core::logging::{render_span, setup_logging};
use a11y_forms_core::settings_loader;

use address::AddressSubmission;

#[derive(Debug, Parser)]
#[command(name = "address-form", about = "Render an accessible address form")]
struct Cli {
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model name used to prefix field names.
    #[arg(long, default_value = "address")]
    prefix: String,

    /// Print accessibility findings after the markup.
    #[arg(long)]
    audit: bool,

    /// Print the effective settings as JSON and exit.
    #[arg(long)]
    show_settings: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => settings_loader::from_toml_file_with_env(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => settings_loader::from_env().context("loading settings from environment")?,
    };
    setup_logging(&settings);

    if cli.show_settings {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let renderer = AccessibleFieldRenderer::with_settings(settings)?;
    let submission = AddressSubmission::sample();
    let form = FormContext::new(&renderer)
        .prefix(cli.prefix.as_str())
        .value("street", submission.street.as_str())
        .value("zip", submission.zip.as_str())
        .value("type", submission.address_type.as_str())
        .errors(submission.errors());

    let html = {
        let span = render_span(&cli.prefix);
        let _guard = span.enter();
        address::render(&form)?
    };
    println!("{html}");

    if cli.audit {
        let findings = audit_fragment(&html, renderer.settings());
        if findings.is_empty() {
            tracing::info!("audit passed");
        }
        for finding in &findings {
            println!("{finding}");
        }
    }

    Ok(())
}
