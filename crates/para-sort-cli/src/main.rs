use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use para_sort_core::config::Config;
use para_sort_core::{
    Classification, LocationSuggestion, NoteClassifier, NoteTemplate, ParaSortError, Result,
    TagResult,
};

mod args;
mod logging;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    let json = cli.json;

    let result = match cli.command {
        Some(Commands::Classify { file }) => handle_classify(&base_dir, file.as_deref(), json),
        Some(Commands::Tags {
            file,
            content_type,
            max,
        }) => handle_tags(
            &base_dir,
            file.as_deref(),
            content_type.as_deref(),
            max,
            json,
        ),
        Some(Commands::Analyze { file, content_type }) => {
            handle_analyze(&base_dir, file.as_deref(), content_type.as_deref(), json)
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "para-sort", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("PARA_SORT_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".para-sort"))
        .unwrap_or_else(|| PathBuf::from(".para-sort"))
}

/// Read the note from `file`, or stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(ParaSortError::InputNotFound {
                    path: path.to_path_buf(),
                });
            }
            tracing::debug!(path = %path.display(), "reading note");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn load_classifier(base_dir: &Path) -> Result<NoteClassifier> {
    let config = Config::load(base_dir)?;
    NoteClassifier::from_config(&config)
}

fn handle_classify(base_dir: &Path, file: Option<&Path>, json: bool) -> Result<()> {
    let classifier = load_classifier(base_dir)?;
    let content = read_input(file)?;

    let classification = classifier.classify(&content);
    let location = classifier.resolve_location(&classification);
    let template = classifier.select_template(&content, &classification);

    if json {
        let value = serde_json::json!({
            "classification": classification,
            "location": location,
            "template": template,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_classification(&classification);
    print_location(&location);
    print_template(template);
    Ok(())
}

fn handle_tags(
    base_dir: &Path,
    file: Option<&Path>,
    content_type: Option<&str>,
    max: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut classifier = load_classifier(base_dir)?;
    if let Some(max) = max {
        classifier = classifier.with_max_tags(max);
    }
    let content = read_input(file)?;

    let tags = classifier.suggest_tags(&content, content_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    print_tags(&tags);
    Ok(())
}

fn handle_analyze(
    base_dir: &Path,
    file: Option<&Path>,
    content_type: Option<&str>,
    json: bool,
) -> Result<()> {
    let classifier = load_classifier(base_dir)?;
    let content = read_input(file)?;

    let analysis = classifier.analyze(&content, content_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_classification(&analysis.classification);
    print_location(&analysis.location);
    print_template(analysis.template);
    println!();
    print_tags(&analysis.tags);
    Ok(())
}

fn print_classification(classification: &Classification) {
    println!("{}", "=== Classification Results ===".cyan().bold());
    println!(
        "Primary Location: {}",
        classification.primary_location.to_string().green()
    );
    println!("Subject Tags: {}", classification.subject_tags.join(", "));
    let scores: Vec<String> = classification
        .scores
        .iter()
        .map(|(cat, n)| format!("{}={}", cat, n))
        .collect();
    println!("Scores: {}", scores.join(" ").dimmed());
}

fn print_location(location: &LocationSuggestion) {
    println!();
    println!("{}", "=== Suggested Location ===".cyan().bold());
    println!("Path: {}", location.path.green());
    println!("Reason: {}", location.reason);
}

fn print_template(template: NoteTemplate) {
    println!();
    println!("{}", "=== Suggested Template ===".cyan().bold());
    println!("Template: {}", template.file_name().green());
}

fn print_tags(tags: &TagResult) {
    println!(
        "{}",
        format!(
            "=== Suggested Tags ({} tags) ===",
            tags.suggested_tags.len()
        )
        .cyan()
        .bold()
    );
    println!("{}", hashtags(&tags.suggested_tags));
    println!();
    println!(
        "{}",
        format!("=== All Found Tags ({}) ===", tags.tag_count)
            .cyan()
            .bold()
    );
    println!("{}", hashtags(&tags.all_found_tags));
}

fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(", ")
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(ParaSortError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtags() {
        let tags = vec!["project".to_string(), "task".to_string()];
        assert_eq!(hashtags(&tags), "#project, #task");
        assert_eq!(hashtags(&[]), "");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/para-sort/note.md"))).unwrap_err();
        assert!(matches!(err, ParaSortError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_resolve_base_dir_prefers_flag() {
        let dir = resolve_base_dir(Some(PathBuf::from("/tmp/vault-config")));
        assert_eq!(dir, PathBuf::from("/tmp/vault-config"));
    }
}
