// SPDX-License-Identifier: MIT
//
// apathy is the demonstration runner for the Apathy theme toolkit.
//
// Walks through every theme operation once and prints a human-readable
// summary to stdout. Log events (activation, operation hooks, conversion
// notices) go to stderr through tracing; set RUST_LOG to adjust.
//
//   Theme::new ──► describe ──► activation scope ──► color count summary
//        │
//        ├──► create_color_scheme (hooked)
//        ├──► gradient / safe_color_conversion
//        ├──► process_data / to_json / theme_config
//        └──► async_operation (always fails, logged)

use std::io::{self, Write};
use std::process::ExitCode;

use apathy_color::{gradient, safe_color_conversion};
use apathy_theme::{
    DataItem, Theme, ThemeError, ThemeKind, TokenColor, TokenSettings, create_color_scheme,
    process_data, theme_config,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum DemoError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Color(#[from] apathy_color::ColorError),
}

const CONVERSION_SAMPLES: [&str; 5] =
    ["#FF7A00", "rgb(10, 20, 30)", "rgb(300, 0, 0)", "rgb(10 20 30)", "notacolor"];

/// "1 color" / "3 colors".
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn run_demo(out: &mut impl Write) -> Result<(), DemoError> {
    let mut theme = Theme::new("Apathy VS Code");

    writeln!(out, "Theme: {theme}")?;
    writeln!(out, "Colors: {:?}", theme.colors())?;

    theme.with_activation(|active| -> Result<(), DemoError> {
        writeln!(out, "Theme Information:")?;
        writeln!(out, "    Name: {}", active.name)?;
        writeln!(out, "    Version: {}", active.version())?;
        writeln!(out, "    Background: {}", active.color("background"))?;
        Ok(())
    })?;

    let count = theme.color_count();
    writeln!(out, "Theme '{}' has {} defined", theme.name, plural(count, "color"))?;

    let scheme = create_color_scheme("apathy", &theme.colors());
    writeln!(
        out,
        "Scheme '{}': background {} foreground {} accent {}",
        scheme.name, scheme.background, scheme.foreground, scheme.accent
    )?;

    let ramp = gradient(theme.color("background"), theme.color("accent"), 4)?;
    writeln!(out, "Gradient: {}", ramp.join(" "))?;

    for sample in CONVERSION_SAMPLES {
        match safe_color_conversion(sample) {
            Some((r, g, b)) => writeln!(out, "Convert {sample:?}: ({r}, {g}, {b})")?,
            None => writeln!(out, "Convert {sample:?}: none")?,
        }
    }

    let items = [Some(DataItem::from("accent")), None, Some(DataItem::from(42))];
    writeln!(out, "Processed: {}", process_data(&items).join(", "))?;

    theme.add_token_color(TokenColor::new(
        ["comment", "punctuation.definition.comment", "string.comment"],
        TokenSettings::foreground("#5A5A5A").with_font_style("italic"),
    ));
    writeln!(out, "{}", theme.to_json(ThemeKind::Dark)?)?;

    let config = theme_config();
    writeln!(
        out,
        "Config: default theme '{}', up to {}",
        config.default_theme,
        plural(usize::try_from(config.max_colors).unwrap_or(usize::MAX), "color")
    )?;

    match theme.async_operation() {
        Ok(result) => writeln!(out, "{result}")?,
        Err(err) => tracing::warn!(error = %err, "async operation unavailable"),
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_demo(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demo failed");
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
