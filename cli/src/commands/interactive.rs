use std::io::{Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use tokio::io::{AsyncBufReadExt, BufReader};

use ipscope_common::config::Config;
use ipscope_common::resolver::HostnameResolver;
use ipscope_common::info;
use ipscope_core::inspector;

use crate::terminal::{print, render};

const PROMPT: &str = "address> ";

#[derive(Debug, PartialEq, Eq)]
enum Entry<'a> {
    Quit,
    Clear,
    Address(&'a str),
}

fn parse_entry(line: &str) -> Entry<'_> {
    match line.trim() {
        "quit" | "exit" | "q" => Entry::Quit,
        "clear" | "c" => Entry::Clear,
        _ => Entry::Address(line),
    }
}

/// Prompt loop: every line is checked like a single CLI run.
pub async fn run(cfg: &Config, resolver: Option<&dyn HostnameResolver>) -> anyhow::Result<()> {
    print::header("interactive mode", cfg.quiet);
    info!("Enter an address to check it, `clear` to reset the screen, `quit` to leave");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_entry(&line) {
            Entry::Quit => break,
            Entry::Clear => clear_screen()?,
            Entry::Address(input) => {
                let report = inspector::inspect(input, resolver).await;
                render::report(&report, cfg);
            }
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Print(PROMPT.bold()))?;
    out.flush()
}

fn clear_screen() -> std::io::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
