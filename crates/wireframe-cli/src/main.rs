//! `wireframe-ui`: generate a design-token file for a wireframe layout.
//!
//! Usage: `wireframe-ui [--yes] [--grid NAME] [--base-font-size PX]
//! [--contrast-ratio R] [--format js|json] [--output PATH] [--tailwind PATH]
//! [--from TOKENS]`

mod prompt;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wireframe_tokens::emit::{self, TokenFormat};
use wireframe_tokens::tailwind::TailwindTheme;
use wireframe_tokens::{derive_tokens, Configuration, RawConfiguration, Settings, TokenError};

use prompt::Prompter;

#[derive(Parser, Debug)]
#[command(name = "wireframe-ui", version)]
#[command(about = "Generate typography, spacing and layout tokens for a wireframe UI")]
struct Args {
    /// Skip prompts; unanswered questions take the saved defaults
    #[arg(short = 'y', long)]
    yes: bool,

    /// Grid system ("8-point + 4-point baseline" / "8pt", or "2x Grid" / "2x")
    #[arg(long)]
    grid: Option<String>,

    /// Base font size in pixels
    #[arg(long = "base-font-size")]
    base_font_size: Option<String>,

    /// Scale ratio between heading levels
    #[arg(long = "contrast-ratio")]
    contrast_ratio: Option<String>,

    /// Regenerate from an existing token file: its inputs become the
    /// defaults and nothing is prompted
    #[arg(long, value_name = "TOKENS")]
    from: Option<PathBuf>,

    /// Token file format
    #[arg(long)]
    format: Option<TokenFormat>,

    /// Token file path, or a directory to place it in
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a Tailwind config extending its theme with the tokens
    #[arg(long)]
    tailwind: Option<PathBuf>,

    /// Print the token file to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Store the resolved answers as the defaults for future runs
    #[arg(long = "save-defaults")]
    save_defaults: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so `--stdout` output stays clean. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "wireframe=info",
        1 => "wireframe=debug",
        _ => "wireframe=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), TokenError> {
    let mut settings = Settings::load()?;
    let defaults = starting_defaults(args.from.as_deref(), &settings.defaults)?;

    let config = if args.yes || args.from.is_some() {
        let no_prompts: Option<&mut Prompter<io::Empty, io::Sink>> = None;
        resolve_configuration(args, &defaults, no_prompts)?
    } else {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stderr());
        resolve_configuration(args, &defaults, Some(&mut prompter))?
    };

    let tokens = derive_tokens(&config)?;
    let format = args.format.unwrap_or(settings.output.format);

    if args.stdout {
        io::stdout().write_all(emit::render(&tokens, format)?.as_bytes())?;
    } else {
        let target = args
            .output
            .clone()
            .or_else(|| settings.output.file.clone())
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
        let path = emit::write_token_file(&target, &tokens, format)?;
        println!("Wireframe UI token file generated: {}", path.display());
    }

    if let Some(path) = &args.tailwind {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, TailwindTheme::from_tokens(&tokens).render_config()?)?;
        info!(path = %path.display(), "Wrote Tailwind config");
    }

    if args.save_defaults {
        settings.defaults = config;
        let path = settings.save()?;
        println!("Defaults saved to {}", path.display());
    }

    Ok(())
}

/// Defaults for this run: the inputs recorded in `--from`, if given, else
/// the saved settings.
fn starting_defaults(
    from: Option<&Path>,
    saved: &Configuration,
) -> Result<Configuration, TokenError> {
    match from {
        Some(path) => {
            let tokens = emit::read_token_file(path)?;
            info!(path = %path.display(), "Regenerating from existing token file");
            Ok(tokens.configuration())
        }
        None => Ok(*saved),
    }
}

/// Combine flags, prompt answers and saved defaults into a validated
/// configuration. Without a prompter, missing answers take the defaults.
fn resolve_configuration<R: BufRead, W: Write>(
    args: &Args,
    defaults: &Configuration,
    mut prompter: Option<&mut Prompter<R, W>>,
) -> Result<Configuration, TokenError> {
    let grid_system = match (&args.grid, prompter.as_deref_mut()) {
        (Some(grid), _) => grid.clone(),
        (None, Some(p)) => p.grid_system(defaults.grid_system)?,
        (None, None) => defaults.grid_system.label().to_string(),
    };
    let base_font_size = match (&args.base_font_size, prompter.as_deref_mut()) {
        (Some(base), _) => base.clone(),
        (None, Some(p)) => p.base_font_size(defaults.base_font_size)?,
        (None, None) => defaults.base_font_size.to_string(),
    };
    let contrast_ratio = match (&args.contrast_ratio, prompter.as_deref_mut()) {
        (Some(ratio), _) => ratio.clone(),
        (None, Some(p)) => p.contrast_ratio(defaults.contrast_ratio)?,
        (None, None) => defaults.contrast_ratio.to_string(),
    };

    let config = Configuration::try_from(RawConfiguration {
        grid_system,
        base_font_size,
        contrast_ratio,
    })?;
    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wireframe_tokens::GridSystem;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wireframe-ui").chain(argv.iter().copied())).unwrap()
    }

    fn no_prompts() -> Option<&'static mut Prompter<io::Empty, io::Sink>> {
        None
    }

    #[test]
    fn test_defaults_without_prompts() {
        let config =
            resolve_configuration(&args(&["-y"]), &Configuration::default(), no_prompts()).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let argv = args(&[
            "-y",
            "--grid",
            "2x",
            "--base-font-size",
            "18",
            "--contrast-ratio",
            "1.5",
        ]);
        let config = resolve_configuration(&argv, &Configuration::default(), no_prompts()).unwrap();
        assert_eq!(config.grid_system, GridSystem::TwoX);
        assert_eq!(config.base_font_size, 18.0);
        assert_eq!(config.contrast_ratio, 1.5);
    }

    #[test]
    fn test_non_numeric_flag_is_invalid_configuration() {
        let argv = args(&["--base-font-size", "abc"]);
        let err = resolve_configuration(&argv, &Configuration::default(), no_prompts()).unwrap_err();
        assert!(matches!(err, TokenError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_prompts_only_for_missing_answers() {
        let argv = args(&["--grid", "2x Grid"]);
        let mut prompter = Prompter::new(Cursor::new(b"20\n3\n".to_vec()), Vec::new());
        let config =
            resolve_configuration(&argv, &Configuration::default(), Some(&mut prompter)).unwrap();
        assert_eq!(config.grid_system, GridSystem::TwoX);
        assert_eq!(config.base_font_size, 20.0);
        assert_eq!(config.contrast_ratio, 1.333);
    }

    #[test]
    fn test_from_token_file_supplies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let source = Configuration::new(GridSystem::TwoX, 18.0, 1.5).unwrap();
        let path = emit::write_token_file(
            &dir.path().join("tokens.js"),
            &derive_tokens(&source).unwrap(),
            TokenFormat::JsModule,
        )
        .unwrap();

        let defaults = starting_defaults(Some(&path), &Configuration::default()).unwrap();
        assert_eq!(defaults, source);

        let argv = args(&["--from", path.to_str().unwrap(), "--contrast-ratio", "1.25"]);
        let config = resolve_configuration(&argv, &defaults, no_prompts()).unwrap();
        assert_eq!(config.grid_system, GridSystem::TwoX);
        assert_eq!(config.base_font_size, 18.0);
        assert_eq!(config.contrast_ratio, 1.25);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = starting_defaults(Some(&dir.path().join("absent.js")), &Configuration::default())
            .unwrap_err();
        assert!(matches!(err, TokenError::Io(_)));
        assert_eq!(
            starting_defaults(None, &Configuration::default()).unwrap(),
            Configuration::default()
        );
    }

    #[test]
    fn test_format_flag_parses() {
        assert_eq!(args(&["--format", "json"]).format, Some(TokenFormat::Json));
        assert!(Args::try_parse_from(["wireframe-ui", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(args(&["-vv"]).verbose, 2);
    }
}
