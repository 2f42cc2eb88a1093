use crate::commands::{self, CommandResult, UploadSettings};
use crate::domain::outcome::LoggedUrl;
use crate::presentation::output;
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

const EXAMPLES: &str = "example:
   anon up {files_name}
   anon d {urls}";

#[derive(Debug, Parser)]
#[command(
    name = "anon",
    about = "Upload your files to an anonymous file host",
    after_help = EXAMPLES,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print the version of anonupload
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the upload endpoint used instead of the built-in one
    Setup {
        /// Endpoint URL; asked for interactively when omitted
        url: Option<String>,
    },

    /// Upload files
    Up {
        /// One or more files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Upload without asking to rename each file
        #[arg(long)]
        no_rename: bool,

        #[command(flatten)]
        upload: UploadFlags,
    },

    /// Download files and upload them directly
    D {
        /// One or more URLs to download
        #[arg(required = true)]
        urls: Vec<String>,

        /// Download directory (CWD by default)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Delete each file after upload
        #[arg(long, visible_alias = "del")]
        delete: bool,

        #[command(flatten)]
        upload: UploadFlags,
    },
}

/// Flags shared by `up` and `d`.
#[derive(Debug, Args)]
pub struct UploadFlags {
    /// Retention period for hosts that support it, e.g. 1w
    #[arg(long, value_name = "DURATION")]
    pub expires: Option<String>,

    /// Record the short URL in urls.txt instead of the full one
    #[arg(long)]
    pub log_short: bool,
}

impl UploadFlags {
    fn settings(self, show_progress: bool) -> UploadSettings {
        UploadSettings {
            expires: self.expires,
            logged_url: if self.log_short {
                LoggedUrl::Short
            } else {
                LoggedUrl::Full
            },
            show_progress,
        }
    }
}

/// 解析済みのコマンドラインを各コマンドに振り分ける
pub async fn run(cli: Cli) -> Result<()> {
    if cli.version {
        output::output_result(&CommandResult::Version {
            version: env!("CARGO_PKG_VERSION"),
        });
        return Ok(());
    }

    let show_progress = !cli.quiet;
    let result = match cli.command {
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Some(Command::Setup { url }) => {
            commands::setup::execute(url).context("Setup command failed")?
        }
        Some(Command::Up {
            files,
            no_rename,
            upload,
        }) => commands::upload::execute(&files, !no_rename, upload.settings(show_progress))
            .await
            .context("Upload command failed")?,
        Some(Command::D {
            urls,
            path,
            delete,
            upload,
        }) => commands::download::execute(&urls, path, delete, upload.settings(show_progress))
            .await
            .context("Download command failed")?,
    };

    output::output_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid command line")
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_up_with_several_files() {
        let cli = parse(&["anon", "up", "a.txt", "b.txt", "--expires", "1w"]);

        let Some(Command::Up {
            files,
            no_rename,
            upload,
        }) = cli.command
        else {
            panic!("expected up");
        };
        assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(!no_rename);
        assert_eq!(upload.expires.as_deref(), Some("1w"));
    }

    #[test]
    fn test_up_requires_a_file() {
        assert!(Cli::try_parse_from(["anon", "up"]).is_err());
    }

    #[test]
    fn test_download_flags() {
        let cli = parse(&["anon", "-q", "d", "https://x/a.bin", "-p", "out", "--del", "--log-short"]);

        assert!(cli.quiet);
        let Some(Command::D {
            urls,
            path,
            delete,
            upload,
        }) = cli.command
        else {
            panic!("expected d");
        };
        assert_eq!(urls, vec!["https://x/a.bin".to_string()]);
        assert_eq!(path, Some(PathBuf::from("out")));
        assert!(delete);
        assert_eq!(upload.settings(false).logged_url, LoggedUrl::Short);
    }

    #[test]
    fn test_version_flag_and_bare_invocation() {
        assert!(parse(&["anon", "-v"]).version);
        assert!(parse(&["anon", "--version"]).version);

        let bare = parse(&["anon"]);
        assert!(!bare.version);
        assert!(bare.command.is_none());
    }

    #[test]
    fn test_setup_url_is_optional() {
        assert!(matches!(
            parse(&["anon", "setup"]).command,
            Some(Command::Setup { url: None })
        ));
        assert!(matches!(
            parse(&["anon", "setup", "https://file.io"]).command,
            Some(Command::Setup { url: Some(_) })
        ));
    }
}
