use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use shelf_core::VERSION;

/// Shelf - a small library catalog for books, members and loans
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding books.json and members.json
    #[arg(short, long, global = true, env = "SHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for `book add`
#[derive(Args)]
pub struct BookAddArgs {
    /// Book title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Book author
    #[arg(value_name = "AUTHOR")]
    pub author: String,

    /// Number of copies (at least 1)
    #[arg(short, long, default_value = "1")]
    pub copies: NonZeroU32,
}

/// Arguments for `book remove`
#[derive(Args)]
pub struct BookRemoveArgs {
    /// Book ID
    #[arg(value_name = "ID")]
    pub id: u32,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Output flags shared by list and search commands
#[derive(Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Field matched by `book search`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    Title,
    Author,
}

/// Arguments for `book search`
#[derive(Args)]
pub struct BookSearchArgs {
    /// Keyword (case-insensitive substring; empty matches everything)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Field to search
    #[arg(long, value_enum, default_value_t = SearchField::Title)]
    pub by: SearchField,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `member register`
#[derive(Args)]
pub struct MemberRegisterArgs {
    /// Member name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `issue` and `return`
#[derive(Args)]
pub struct LoanArgs {
    /// Member ID
    #[arg(value_name = "MEMBER_ID")]
    pub member_id: u32,

    /// Book ID
    #[arg(value_name = "BOOK_ID")]
    pub book_id: u32,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum BookSubcommand {
    /// Add a book
    Add(BookAddArgs),

    /// Remove a book with no copies on loan
    Remove(BookRemoveArgs),

    /// List all books
    List(OutputArgs),

    /// Search books by title or author
    Search(BookSearchArgs),
}

#[derive(Subcommand)]
pub enum MemberSubcommand {
    /// Register a new member
    Register(MemberRegisterArgs),

    /// List all members
    List(OutputArgs),
}

#[derive(Args)]
pub struct BookArgs {
    #[command(subcommand)]
    pub command: BookSubcommand,
}

#[derive(Args)]
pub struct MemberArgs {
    #[command(subcommand)]
    pub command: MemberSubcommand,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage books
    Book(BookArgs),

    /// Manage members
    Member(MemberArgs),

    /// Issue a book to a member
    Issue(LoanArgs),

    /// Return a book from a member
    Return(LoanArgs),

    /// Check the saved catalog's integrity
    Check,

    /// Start the interactive menu (default)
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
