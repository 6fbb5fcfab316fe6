//! Shelf CLI - a small library catalog for books, members and loans
//!
//! This is the command-line interface for Shelf. It wraps the core catalog
//! in an interactive menu and a set of one-shot commands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod shell;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{BookSubcommand, Cli, Commands, MemberSubcommand};
use crate::commands::{books, loans, maintenance, members, misc};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);

        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(error[idx + "\nHint:".len()..].trim_start())),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Book(args)) => match &args.command {
            BookSubcommand::Add(add_args) => {
                books::handle_add(ctx, add_args)?;
            }
            BookSubcommand::Remove(remove_args) => {
                books::handle_remove(ctx, remove_args)?;
            }
            BookSubcommand::List(list_args) => {
                books::handle_list(ctx, list_args)?;
            }
            BookSubcommand::Search(search_args) => {
                books::handle_search(ctx, search_args)?;
            }
        },
        Some(Commands::Member(args)) => match &args.command {
            MemberSubcommand::Register(register_args) => {
                members::handle_register(ctx, register_args)?;
            }
            MemberSubcommand::List(list_args) => {
                members::handle_list(ctx, list_args)?;
            }
        },
        Some(Commands::Issue(args)) => {
            loans::handle_issue(ctx, args)?;
        }
        Some(Commands::Return(args)) => {
            loans::handle_return(ctx, args)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        Some(Commands::Shell) | None => {
            commands::shell::handle_shell(ctx)?;
        }
    }

    Ok(())
}
