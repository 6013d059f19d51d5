use chrono::Local;
use clap::{ArgGroup, Parser};
use entry_scaffold::config::ScaffoldConfig;
use entry_scaffold::editor::editor_from_env;
use entry_scaffold::output;
use entry_scaffold::scaffold::{ScaffoldError, Scaffolder};
use entry_scaffold::types::{ContentKind, EntryRequest, Intent, Status};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entry")]
#[command(about = "Create a new post or page, or edit an existing one")]
#[command(long_about = "\
Create a new post or page, or edit an existing one

The title is turned into a slug (\"My First Post\" -> my-first-post) and the
whole content tree is searched for <slug>.<ext>. Without --create or --edit
the tool edits the entry if it exists and creates it otherwise.

New entries are written with a metadata header to:

  content/posts/<year>/<month>/<slug>.<ext>    (--post)
  content/pages/<year>/<month>/<slug>.<ext>    (--page)

Directory names and defaults can be changed in an optional entry.toml in the
site root.")]
#[command(version)]
#[command(group(ArgGroup::new("kind").required(true).args(["post", "page"])))]
struct Cli {
    /// Title of the entry
    title: String,

    /// Fail if the entry already exists (otherwise it is edited)
    #[arg(long, conflicts_with = "edit")]
    create: bool,

    /// Fail if the entry does not exist (otherwise it is created)
    #[arg(long)]
    edit: bool,

    /// Editor to use instead of $EDITOR
    #[arg(long, value_name = "PROGRAM")]
    editor: Option<String>,

    /// Do not start an editor
    #[arg(long)]
    no_edit: bool,

    /// Tag to assign (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Author name (repeatable)
    #[arg(long = "author", value_name = "NAME")]
    authors: Vec<String>,

    /// Category of the entry
    #[arg(long)]
    category: Option<String>,

    /// One-line summary
    #[arg(long, visible_alias = "summery")]
    summary: Option<String>,

    /// Publication status [default: draft]
    #[arg(long, value_enum)]
    status: Option<Status>,

    /// File extension for new entries [default: rst]
    #[arg(long)]
    ext: Option<String>,

    /// Work on a post
    #[arg(long)]
    post: bool,

    /// Work on a page
    #[arg(long)]
    page: bool,

    /// Site root containing the content directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Build the request, filling gaps from config defaults.
    fn to_request(&self, config: &ScaffoldConfig) -> EntryRequest {
        let kind = if self.page {
            ContentKind::Page
        } else {
            ContentKind::Post
        };
        let intent = if self.create {
            Intent::CreateOnly
        } else if self.edit {
            Intent::EditOnly
        } else {
            Intent::Infer
        };
        let authors = if self.authors.is_empty() {
            config.defaults.authors.clone()
        } else {
            self.authors.clone()
        };

        let mut request = EntryRequest::new(&self.title, kind).with_tags(self.tags.iter().cloned());
        request.authors = authors;
        request.category = self.category.clone().unwrap_or_default();
        request.summary = self.summary.clone().unwrap_or_default();
        request.status = self.status.unwrap_or(config.defaults.status);
        request.extension = self
            .ext
            .clone()
            .unwrap_or_else(|| config.defaults.extension.clone());
        request.intent = intent;
        request.suppress_editor = self.no_edit;
        request.editor_override = self.editor.clone();
        request
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("entry_scaffold=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

fn run(cli: &Cli) -> Result<(), ScaffoldError> {
    let scaffolder = Scaffolder::load(&cli.root)?.with_env_editor(editor_from_env());
    let request = cli.to_request(scaffolder.config());
    let now = Local::now().naive_local();

    scaffolder.run(&request, now, output::print_event)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
