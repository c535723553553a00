//! peval - peer-evaluation comment templates
//!
//! The `peval` command reads the markdown comments that carry PE workflow
//! state on GitHub issues, and writes edited state back.
//!
//! ## Commands
//!
//! - `parse`: find the conforming comment in a comments JSON file
//! - `show`: same, for an issue held in a comment store directory
//! - `render`: turn a record JSON file into comment markdown
//! - `respond`: agree or disagree with one section of the tester-response
//!   comment and write the re-rendered comment back

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use peval_core::obs::emit_comment_updated;
use peval_core::{
    require_conforming, select_conforming, select_unique, IssueSpan, ParsedTemplate, RawComment,
    SectionTitle, TeamResponseRecord, TeamResponseTemplate, Template, TesterResponseRecord,
    TesterResponseTemplate,
};
use peval_state::{CommentStore, FsCommentStore, RepoContext};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "peval")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse and edit PE workflow comments on GitHub issues", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the comment conforming to a template in a comments JSON file
    Parse {
        /// Comments JSON file (GitHub list-comments response)
        #[arg(short, long)]
        comments: PathBuf,

        /// Template to match
        #[arg(short, long, value_enum, default_value_t = TemplateKind::TesterResponse)]
        template: TemplateKind,

        /// Fail when more than one comment conforms
        #[arg(long)]
        strict: bool,

        /// Emit JSON output instead of terminal text
        #[arg(long)]
        json: bool,
    },

    /// Show the conforming comment of an issue in the comment store
    Show {
        /// Issue number
        #[arg(long)]
        issue: u64,

        #[command(flatten)]
        store: StoreArgs,

        /// Template to match
        #[arg(short, long, value_enum, default_value_t = TemplateKind::TesterResponse)]
        template: TemplateKind,

        /// Fail when more than one comment conforms
        #[arg(long)]
        strict: bool,

        /// Emit JSON output instead of terminal text
        #[arg(long)]
        json: bool,
    },

    /// Render a record JSON file as comment markdown
    Render {
        /// Record JSON file
        #[arg(short, long)]
        record: PathBuf,

        /// Template to render
        #[arg(short, long, value_enum, default_value_t = TemplateKind::TesterResponse)]
        template: TemplateKind,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Agree or disagree with one section of an issue's tester-response comment
    Respond {
        /// Issue number
        #[arg(long)]
        issue: u64,

        #[command(flatten)]
        store: StoreArgs,

        /// Section title (severity, type, response, ...)
        #[arg(short, long)]
        section: String,

        #[command(flatten)]
        verdict: Verdict,

        /// Print the new comment body instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TemplateKind {
    /// Tester's verdict on the team's response (`# Items for the Tester to Verify`)
    TesterResponse,
    /// The team's own response (`## Duplicate status (if any):`)
    TeamResponse,
}

#[derive(Args)]
struct StoreArgs {
    /// Comment store directory
    #[arg(long, env = "PEVAL_STORE_DIR", default_value = ".peval/issues")]
    store_dir: PathBuf,

    /// GitHub organisation (default: $PEVAL_ORG or testathor)
    #[arg(long)]
    org: Option<String>,

    /// Repository (default: $PEVAL_REPO or pe)
    #[arg(long)]
    repo: Option<String>,
}

impl StoreArgs {
    fn context(&self) -> RepoContext {
        let mut ctx = RepoContext::from_env();
        if let Some(org) = &self.org {
            ctx.org = org.clone();
        }
        if let Some(repo) = &self.repo {
            ctx.repo = repo.clone();
        }
        ctx
    }

    fn open(&self) -> FsCommentStore {
        FsCommentStore::new(&self.store_dir)
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Verdict {
    /// Disagree with the team's choice, giving a reason
    #[arg(long, value_name = "REASON")]
    disagree: Option<String>,

    /// Accept the team's choice
    #[arg(long)]
    agree: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    peval_core::init_tracing(cli.log_json, level);

    match cli.command {
        Commands::Parse {
            comments,
            template,
            strict,
            json,
        } => {
            let comments: Vec<RawComment> = read_json_file(&comments)?;
            match template {
                TemplateKind::TesterResponse => {
                    cmd_report::<TesterResponseTemplate>(&comments, strict, json)
                }
                TemplateKind::TeamResponse => {
                    cmd_report::<TeamResponseTemplate>(&comments, strict, json)
                }
            }
        }
        Commands::Show {
            issue,
            store,
            template,
            strict,
            json,
        } => {
            let ctx = store.context();
            let _span = IssueSpan::enter(&ctx.slug(), issue);
            let comments = store
                .open()
                .list_comments(&ctx, issue)
                .await
                .with_context(|| format!("Failed to load {ctx}#{issue}"))?;
            match template {
                TemplateKind::TesterResponse => {
                    cmd_report::<TesterResponseTemplate>(&comments, strict, json)
                }
                TemplateKind::TeamResponse => {
                    cmd_report::<TeamResponseTemplate>(&comments, strict, json)
                }
            }
        }
        Commands::Render {
            record,
            template,
            output,
        } => {
            let body = match template {
                TemplateKind::TesterResponse => cmd_render::<TesterResponseTemplate>(&record)?,
                TemplateKind::TeamResponse => cmd_render::<TeamResponseTemplate>(&record)?,
            };
            write_output(&body, output.as_deref())
        }
        Commands::Respond {
            issue,
            store,
            section,
            verdict,
            dry_run,
        } => {
            let ctx = store.context();
            let _span = IssueSpan::enter(&ctx.slug(), issue);
            let outcome = cmd_respond(
                &store.open(),
                &ctx,
                issue,
                &SectionTitle::from(section.as_str()),
                verdict.disagree.as_deref(),
                dry_run,
            )
            .await?;
            println!("{outcome}");
            Ok(())
        }
    }
}

/// Terminal rendering of a template's record.
trait Describe: Template {
    fn describe(record: &Self::Record) -> String;
}

impl Describe for TesterResponseTemplate {
    fn describe(record: &TesterResponseRecord) -> String {
        let mut out = format!("Team's response: {}\n", record.team_response());
        out.push_str(&format!(
            "Tester disagrees: {}\n",
            if record.tester_disagree() { "yes" } else { "no" }
        ));
        for response in record.tester_responses() {
            let mark = if response.disagree_checkbox_value {
                "x"
            } else {
                " "
            };
            out.push_str(&format!(
                "  [{mark}] {}: team chose {}\n",
                response.title, response.team_chose
            ));
            if let Some(reason) = &response.reason_for_disagreement {
                out.push_str(&format!("      reason: {reason}\n"));
            }
        }
        out
    }
}

impl Describe for TeamResponseTemplate {
    fn describe(record: &TeamResponseRecord) -> String {
        let mut out = format!("Team's response: {}\n", record.team_response);
        match record.duplicate_of {
            Some(issue) => out.push_str(&format!("Duplicate of: #{issue}\n")),
            None => out.push_str("Duplicate of: -\n"),
        }
        out
    }
}

/// Select the conforming comment and print it.
fn cmd_report<T: Describe>(comments: &[RawComment], strict: bool, json: bool) -> Result<()> {
    let parsed = if strict {
        select_unique::<T>(comments)?
    } else {
        select_conforming::<T>(comments)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print!("{}", describe_outcome::<T>(&parsed, comments));
    }
    Ok(())
}

fn describe_outcome<T: Describe>(parsed: &ParsedTemplate<T::Record>, comments: &[RawComment]) -> String {
    match parsed {
        ParsedTemplate::Conforming { record, comment } => format!(
            "{} comment {} by {}\n{}",
            T::NAME,
            comment.id,
            comment.author,
            T::describe(record)
        ),
        ParsedTemplate::NotConforming => {
            let mut out = format!(
                "No comment conforms to {} ({} candidates)\n",
                T::NAME,
                comments.len()
            );
            for comment in comments {
                if let Err(failure) = T::parse(&comment.body) {
                    let (line, column) = failure.line_col(&comment.body);
                    out.push_str(&format!(
                        "  comment {}: {line}:{column}: {}\n",
                        comment.id, failure.kind
                    ));
                }
            }
            out
        }
    }
}

/// Read a record and render it.
fn cmd_render<T: Template>(path: &Path) -> Result<String>
where
    T::Record: DeserializeOwned,
{
    let record: T::Record = read_json_file(path)?;
    Ok(T::render(&record)?)
}

/// Edit one section of the tester-response comment and write it back.
///
/// Returns a one-line summary, or the new body on a dry run.
async fn cmd_respond(
    store: &dyn CommentStore,
    ctx: &RepoContext,
    issue: u64,
    section: &SectionTitle,
    disagree: Option<&str>,
    dry_run: bool,
) -> Result<String> {
    let comments = store
        .list_comments(ctx, issue)
        .await
        .with_context(|| format!("Failed to load {ctx}#{issue}"))?;
    let (record, comment) = require_conforming::<TesterResponseTemplate>(&comments)?;

    let edited = match disagree {
        Some(reason) => record.with_disagreement(section, reason)?,
        None => record.with_agreement(section)?,
    };
    let body = TesterResponseTemplate::render(&edited)
        .with_context(|| format!("Refusing to write comment {}", comment.id))?;

    if dry_run {
        return Ok(body);
    }
    if body == comment.body {
        info!(comment_id = comment.id, "comment already up to date");
        return Ok(format!("Comment {} on {ctx}#{issue} unchanged", comment.id));
    }

    let updated = store
        .update_comment(ctx, issue, comment.id, &body)
        .await
        .with_context(|| format!("Failed to update comment {}", comment.id))?;
    emit_comment_updated(TesterResponseTemplate::NAME, updated.id, updated.body.len());

    Ok(format!(
        "Updated comment {} on {ctx}#{issue}: {section} {}",
        updated.id,
        if disagree.is_some() {
            "disagreed"
        } else {
            "agreed"
        }
    ))
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn write_output(body: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, body)
            .with_context(|| format!("Failed to write to {}", path.display())),
        None => {
            print!("{body}");
            Ok(())
        }
    }
}
