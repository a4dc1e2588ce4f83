//! Argument parsing and command execution.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::Style;
use std::path::PathBuf;
use themeswitch::{
    ColorMode, ControllerConfig, Cycle, Document, FileStore, MarkupRenderer, OsPreference,
    SystemPreference, ThemeController, ThemeMode,
};

#[derive(Debug, Parser)]
#[command(
    name = "themeswitch",
    version,
    about = "Inspect and change the persisted light/dark theme preference"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Origin the preference is scoped to
    #[arg(long, global = true, default_value = "localhost")]
    pub origin: String,

    /// Preference file to use instead of the per-origin data file
    #[arg(long, global = true, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// YAML controller configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use the two-state dark/light cycle
    #[arg(long, global = true)]
    pub binary: bool,

    /// Override the detected system preference
    #[arg(long, global = true, value_name = "MODE")]
    pub system: Option<ColorMode>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the stored mode and what it resolves to
    Status,
    /// Advance to the next mode and persist it
    Toggle,
    /// Persist an explicit mode
    Set {
        /// auto, dark or light
        mode: ThemeMode,
    },
    /// Print the toggle button and root attribute markup
    Markup,
}

/// System signal chosen on the command line.
#[derive(Debug, Clone, Copy)]
enum Signal {
    Fixed(ColorMode),
    Os,
}

impl SystemPreference for Signal {
    fn color_mode(&self) -> ColorMode {
        match self {
            Signal::Fixed(mode) => *mode,
            Signal::Os => OsPreference.color_mode(),
        }
    }
}

type Controller = ThemeController<FileStore, Signal, Document>;

impl GlobalArgs {
    fn load_config(&self) -> Result<ControllerConfig> {
        let mut config = match &self.config {
            Some(path) => ControllerConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ControllerConfig::default(),
        };
        if self.binary {
            config.cycle = Cycle::Binary;
        }
        Ok(config)
    }

    fn open_store(&self) -> Result<FileStore> {
        match &self.state {
            Some(path) => Ok(FileStore::new(path)),
            None => FileStore::for_origin(&self.origin)
                .with_context(|| format!("opening preference store for {}", self.origin)),
        }
    }

    fn signal(&self) -> Signal {
        self.system.map(Signal::Fixed).unwrap_or(Signal::Os)
    }

    fn controller(&self) -> Result<Controller> {
        let config = self.load_config()?;
        let page = Document::new().with_icon(&config.icon.selector, "bi");
        let store = self.open_store()?;
        tracing::debug!(path = %store.path().display(), "using preference file");
        ThemeController::load(store, self.signal(), page, config)
            .context("loading theme preference")
    }
}

/// Executes the parsed command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let mut controller = cli.global.controller()?;
    match &cli.command {
        Command::Status => Ok(describe(&controller)),
        Command::Toggle => {
            controller.toggle().context("toggling theme")?;
            Ok(describe(&controller))
        }
        Command::Set { mode } => {
            controller
                .set_mode(*mode)
                .with_context(|| format!("setting theme to {mode}"))?;
            Ok(describe(&controller))
        }
        Command::Markup => {
            let renderer = MarkupRenderer::new(controller.config().clone())?;
            let button = renderer.toggle_button(controller.mode())?;
            let attribute = renderer.root_attribute(controller.resolve())?;
            Ok(format!("{attribute}\n{button}"))
        }
    }
}

fn describe(controller: &Controller) -> String {
    let label = Style::new().bold();
    let value = Style::new().cyan();
    let rendered = controller
        .rendered()
        .map(ColorMode::as_str)
        .unwrap_or("unset");
    format!(
        "{} {}\n{} {}",
        label.apply_to("mode:"),
        value.apply_to(controller.mode()),
        label.apply_to("rendered:"),
        value.apply_to(rendered),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn run_with(state: &Path, args: &[&str]) -> Result<String> {
        let mut argv = vec!["themeswitch", "--state"];
        argv.push(state.to_str().unwrap());
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;
        run(&cli)
    }

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).into_owned()
    }

    #[test]
    fn test_status_without_state_uses_auto() {
        let dir = tempdir().unwrap();
        let state = dir.path().join("prefs.json");
        let out = run_with(&state, &["status", "--system", "dark"]).unwrap();
        assert_eq!(plain(out), "mode: auto\nrendered: dark");
        assert!(!state.exists());
    }

    #[test]
    fn test_toggle_persists_between_runs() {
        let dir = tempdir().unwrap();
        let state = dir.path().join("prefs.json");

        run_with(&state, &["toggle", "--system", "light"]).unwrap();
        let out = run_with(&state, &["toggle", "--system", "light"]).unwrap();
        assert_eq!(plain(out), "mode: light\nrendered: light");
    }

    #[test]
    fn test_set_auto_rejected_in_binary() {
        let dir = tempdir().unwrap();
        let state = dir.path().join("prefs.json");
        let args = ["set", "auto", "--binary", "--system", "dark"];
        let err = run_with(&state, &args).unwrap_err();
        assert!(format!("{err:#}").contains("not supported"));
    }

    #[test]
    fn test_markup_reflects_stored_mode() {
        let dir = tempdir().unwrap();
        let state = dir.path().join("prefs.json");
        std::fs::write(&state, r#"{"theme":"dark"}"#).unwrap();
        let out = run_with(&state, &["markup", "--system", "light"]).unwrap();
        assert!(out.starts_with(r#"data-bs-theme="dark""#));
        assert!(out.contains("bi-moon"));
    }

    #[test]
    fn test_corrupt_state_file_fails_status() {
        let dir = tempdir().unwrap();
        let state = dir.path().join("prefs.json");
        std::fs::write(&state, "not json").unwrap();
        let args = ["status", "--system", "light"];
        let err = run_with(&state, &args).unwrap_err();
        assert!(format!("{err:#}").contains("loading theme preference"));
    }

    #[test]
    fn test_invalid_mode_argument() {
        let result = Cli::try_parse_from(["themeswitch", "set", "sepia"]);
        assert!(result.is_err());
    }
}
