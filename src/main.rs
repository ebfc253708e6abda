use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use clap::{ArgGroup, Parser, Subcommand};
use resume_rank::ircore::doc::cfg::{RankCfg, CFG_NAME};
use resume_rank::ircore::doc::dir::collect_files;
use resume_rank::ircore::doc::SourceDocument;
use resume_rank::ircore::{export, extract, token, RankedResult, Ranker};

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Rank resumes against a job description
struct Cli {
    #[clap(short, long, value_parser, default_value_t = String::from(CFG_NAME))]
    /// Config file
    config: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Rank resumes by similarity to a job description
    #[clap(group(ArgGroup::new("job_source").required(true)))]
    Rank {
        #[clap(value_parser, required = true)]
        /// Resume files or directories
        files: Vec<PathBuf>,
        #[clap(short, long, value_parser, group = "job_source")]
        /// Job description text
        job: Option<String>,
        #[clap(long, value_parser, group = "job_source")]
        /// Read the job description from a file
        job_file: Option<PathBuf>,
        #[clap(long, value_parser)]
        /// Export the ranking as CSV
        csv: Option<PathBuf>,
        #[clap(long, action)]
        /// Print the ranking as JSON
        json: bool,
        #[clap(long, action)]
        /// Do not show matching keywords
        hide_keywords: bool,
    },
    /// Print the terms of a text
    Tokenize {
        #[clap(value_parser)]
        /// text to tokenize
        text: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = RankCfg::load(Path::new(&cli.config));

    match &cli.command {
        Commands::Rank { files, job, job_file, csv, json, hide_keywords } => {
            let job_description = match read_job_description(job, job_file) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(2);
                }
            };
            if let Err(e) = command_rank(cfg, files, &job_description, csv, *json, *hide_keywords).await {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        Commands::Tokenize { text } => command_tokenize(text),
    }
}

// clap guarantees exactly one of the two is set
fn read_job_description(job: &Option<String>, job_file: &Option<PathBuf>) -> Result<String, String> {
    match (job, job_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))
        }
        (None, None) => Ok(String::new()),
    }
}

async fn command_rank(
    cfg: RankCfg,
    paths: &[PathBuf],
    job_description: &str,
    csv: &Option<PathBuf>,
    json: bool,
    hide_keywords: bool,
) -> Result<(), Box<dyn Error>> {
    let mut documents = vec![];
    for path in collect_files(paths)? {
        documents.push(SourceDocument::load(&path).map_err(|e| format!("{}: {}", path.display(), e))?);
    }

    extract::init();
    let mut ranker = Ranker::new(cfg);
    let results = ranker.rank(documents, job_description).await?;

    if json {
        println!("{}", export::to_json(&results)?);
    } else {
        print_results(&results, !hide_keywords);
    }
    if let Some(csv_path) = csv {
        export::write_csv(csv_path, &results)?;
        println!("ranking exported to {}", csv_path.display());
    }
    Ok(())
}

fn print_results(results: &[RankedResult], show_keywords: bool) {
    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Resume".len());
    if show_keywords {
        println!("{:<4}  {:<name_width$}  {:>11}  Top Matching Keywords", "Rank", "Resume", "Match Score");
    } else {
        println!("{:<4}  {:<name_width$}  {:>11}", "Rank", "Resume", "Match Score");
    }
    for (i, result) in results.iter().enumerate() {
        let score = format!("{}%", result.score_display());
        if show_keywords {
            println!("{:<4}  {:<name_width$}  {:>11}  {}", i + 1, result.name, score, result.keywords.join(", "));
        } else {
            println!("{:<4}  {:<name_width$}  {:>11}", i + 1, result.name, score);
        }
    }
}

fn command_tokenize(text: &str) {
    for term in token::tokenize(text) {
        println!("{}", term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_job_source_is_exclusive() {
        let err = Cli::try_parse_from(["rrank", "rank", "a.pdf", "--job", "python", "--job-file", "job.txt"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_job_source_is_required() {
        let err = Cli::try_parse_from(["rrank", "rank", "a.pdf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_job_source_accepts_either() {
        let cli = Cli::try_parse_from(["rrank", "rank", "a.pdf", "-j", "python developer"]).unwrap();
        match cli.command {
            Commands::Rank { job, job_file, .. } => {
                assert_eq!(job.as_deref(), Some("python developer"));
                assert!(job_file.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
        let cli = Cli::try_parse_from(["rrank", "rank", "a.pdf", "--job-file", "job.txt"]).unwrap();
        match cli.command {
            Commands::Rank { job, job_file, .. } => {
                assert!(job.is_none());
                assert_eq!(job_file, Some(PathBuf::from("job.txt")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
