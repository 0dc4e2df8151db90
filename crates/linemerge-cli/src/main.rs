use anyhow::Result;
use clap::{Parser, Subcommand};
use linemerge_core::SerializeOptions;

#[derive(Parser)]
#[command(name = "linemerge", version, about = "Merge ignore files and other line-oriented documents")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge files into one document (stdout unless --out is given)
    Merge {
        #[arg(required = true)]
        files: Vec<String>,
        #[arg(long)]
        out: Option<String>,
        /// Print per-source merge statistics to stderr
        #[arg(long)]
        stats: bool,
        /// Do not put a blank line before a comment block at the top of the output
        #[arg(long)]
        no_leading_blank: bool,
        #[arg(long)]
        force: bool,
    },
    /// Print the tokens of a file as JSON
    Tokenize {
        file: String,
    },
    /// Merge JSON token arrays and print the result as JSON
    MergeRaw {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Render a JSON token array as text
    Serialize {
        file: String,
    },
    /// Merge the sources listed in .linemerge/config.toml
    Build {
        #[arg(long)]
        dry_run: bool,
    },
    /// Report comments that would be dropped and lines that would collapse
    Lint {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Merge files into ./.gitignore, keeping its existing lines first
    Gitignore {
        #[arg(required = true)]
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Merge{files, out, stats, no_leading_blank, force} => {
            let options = SerializeOptions { leading_blank_line: !no_leading_blank };
            linemerge_core::cmd_merge(&files, out.as_deref(), stats, options, force)?
        }
        Command::Tokenize{file} => linemerge_core::cmd_tokenize(&file)?,
        Command::MergeRaw{files} => linemerge_core::cmd_merge_raw(&files)?,
        Command::Serialize{file} => linemerge_core::cmd_serialize(&file)?,
        Command::Build{dry_run} => linemerge_core::cmd_build(dry_run)?,
        Command::Lint{files} => linemerge_core::cmd_lint(&files)?,
        Command::Gitignore{files} => linemerge_core::cmd_gitignore(&files)?,
    }
    Ok(())
}
