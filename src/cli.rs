//! コマンドライン引数の解析

use crate::config::ListKind;
use crate::error::{Result, WraptorError};
use crate::options::RunOptions;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: wraptor [--config-dir DIR] [--log-file FILE] [--verbose] [COMMAND]

Commands:
  config                     edit the language lists interactively (default)
  list                       print the wrap, no-wrap and undecided languages
  decide LANG                print the wrap mode chosen for LANG
  move FROM TO LANG...       move languages between whitelist, undecided and blacklist
  simulate LANG...           open in-memory tabs and show the applied wrap modes ('-' = no language)
  init [--defaults]          create the configuration directory
  path                       print the configuration directory and list files
  help                       show this message";

/// サブコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Config,
    List,
    Decide(String),
    Move {
        from: ListKind,
        to: ListKind,
        languages: Vec<String>,
    },
    /// `None` は言語が検出されない文書
    Simulate(Vec<Option<String>>),
    Init { defaults: bool },
    Path,
    Help,
}

/// 解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub options: RunOptions,
    pub command: Command,
}

fn usage_error(message: impl Into<String>) -> WraptorError {
    WraptorError::Usage(message.into())
}

/// 引数を解析（プログラム名は含まない）
pub fn parse_args(args: &[String]) -> Result<Cli> {
    let mut options = RunOptions::default();
    let mut iter = args.iter().peekable();

    while let Some(&arg) = iter.peek() {
        match arg.as_str() {
            "--config-dir" => {
                iter.next();
                let value = iter
                    .next()
                    .ok_or_else(|| usage_error("--config-dir needs a directory"))?;
                options.config_dir = Some(PathBuf::from(value));
            }
            "--log-file" => {
                iter.next();
                let value = iter
                    .next()
                    .ok_or_else(|| usage_error("--log-file needs a path"))?;
                options.log_path = Some(PathBuf::from(value));
            }
            "-v" | "--verbose" => {
                iter.next();
                options.verbose = true;
            }
            "-h" | "--help" => {
                return Ok(Cli {
                    options,
                    command: Command::Help,
                })
            }
            other if other.starts_with('-') => {
                return Err(usage_error(format!("unknown option {}", other)));
            }
            _ => break,
        }
    }

    let rest: Vec<&String> = iter.collect();
    let command = match rest.split_first() {
        None => Command::Config,
        Some((name, params)) => parse_command(name, params)?,
    };

    Ok(Cli { options, command })
}

fn parse_command(name: &str, params: &[&String]) -> Result<Command> {
    let command = match name {
        "config" => {
            expect_no_params(name, params)?;
            Command::Config
        }
        "list" => {
            expect_no_params(name, params)?;
            Command::List
        }
        "path" => {
            expect_no_params(name, params)?;
            Command::Path
        }
        "help" => Command::Help,
        "decide" => match params {
            [language] => Command::Decide(language.to_string()),
            _ => return Err(usage_error("decide takes exactly one language")),
        },
        "move" => match params {
            [from, to, languages @ ..] if !languages.is_empty() => Command::Move {
                from: from.parse::<ListKind>()?,
                to: to.parse::<ListKind>()?,
                languages: languages.iter().map(|lang| lang.to_string()).collect(),
            },
            _ => return Err(usage_error("move takes FROM TO and at least one language")),
        },
        "simulate" => {
            if params.is_empty() {
                return Err(usage_error("simulate takes at least one language"));
            }
            Command::Simulate(
                params
                    .iter()
                    .map(|lang| (lang.as_str() != "-").then(|| lang.to_string()))
                    .collect(),
            )
        }
        "init" => match params {
            [] => Command::Init { defaults: false },
            [flag] if flag.as_str() == "--defaults" => Command::Init { defaults: true },
            _ => return Err(usage_error("init only accepts --defaults")),
        },
        other => return Err(usage_error(format!("unknown command {}", other))),
    };
    Ok(command)
}

fn expect_no_params(name: &str, params: &[&String]) -> Result<()> {
    if params.is_empty() {
        Ok(())
    } else {
        Err(usage_error(format!("{} takes no arguments", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_opens_the_config_ui() {
        let cli = parse_args(&[]).unwrap();
        assert_eq!(cli.command, Command::Config);
        assert_eq!(cli.options, RunOptions::default());
    }

    #[test]
    fn global_options_precede_the_command() {
        let cli = parse_args(&args(&["--config-dir", "/tmp/w", "-v", "decide", "Markdown"])).unwrap();
        assert_eq!(cli.options.config_dir, Some(PathBuf::from("/tmp/w")));
        assert!(cli.options.verbose);
        assert_eq!(cli.command, Command::Decide("Markdown".to_string()));
    }

    #[test]
    fn move_parses_list_names() {
        let cli = parse_args(&args(&["move", "undecided", "black", "json", "yaml"])).unwrap();
        assert_eq!(
            cli.command,
            Command::Move {
                from: ListKind::Undecided,
                to: ListKind::Blacklist,
                languages: vec!["json".to_string(), "yaml".to_string()],
            }
        );
    }

    #[test]
    fn move_rejects_unknown_list() {
        let err = parse_args(&args(&["move", "greylist", "whitelist", "json"])).unwrap_err();
        assert!(matches!(err, WraptorError::List(ListError::UnknownList { .. })));
    }

    #[test]
    fn simulate_dash_means_no_language() {
        let cli = parse_args(&args(&["simulate", "markdown", "-"])).unwrap();
        assert_eq!(
            cli.command,
            Command::Simulate(vec![Some("markdown".to_string()), None])
        );
    }

    #[test]
    fn usage_errors() {
        for bad in [
            vec!["decide"],
            vec!["move", "whitelist", "blacklist"],
            vec!["list", "extra"],
            vec!["--config-dir"],
            vec!["--bogus"],
            vec!["frobnicate"],
            vec!["init", "--force"],
        ] {
            let err = parse_args(&args(&bad)).unwrap_err();
            assert!(matches!(err, WraptorError::Usage(_)), "{:?}", bad);
        }
    }

    #[test]
    fn init_with_defaults() {
        let cli = parse_args(&args(&["init", "--defaults"])).unwrap();
        assert_eq!(cli.command, Command::Init { defaults: true });
    }
}
