// src/cli.rs
use std::{env, error::Error, io::{self, Write}};

use crate::config::options::{CliOptions, Command};
use crate::kb::{self, DumpTarget};
use crate::query;

pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_args(env::args().skip(1))?;

    if opts.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    if opts.is_empty() {
        return Err("Nothing to do (try --query <text> or --help)".into());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for cmd in &opts.commands {
        execute(cmd, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// Run one command, writing its output to `out`.
pub fn execute<W: Write>(cmd: &Command, out: &mut W) -> Result<(), Box<dyn Error>> {
    match cmd {
        Command::Search(q) => {
            logf!("CLI: search {:?}", q);
            writeln!(out, "{}", query::search(q))?;
        }
        Command::ListTerms => {
            logf!("CLI: list terms");
            for t in kb::terms() {
                writeln!(out, "{}\t{}", t.term, t.definition)?;
            }
        }
        Command::FilterTerms(needle) => {
            let hits = kb::filter_terms(needle);
            logf!("CLI: filter terms {:?} ({} hit(s))", needle, hits.len());
            for t in hits {
                writeln!(out, "{}\t{}", t.term, t.definition)?;
            }
        }
        Command::Dump(target) => {
            logf!("CLI: dump {:?}", target);
            writeln!(out, "{}", kb::to_json(*target)?)?;
        }
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CliOptions::new();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-q" | "--query" => {
                // Absent query is a boundary violation; "" is a legal query.
                let v = args.next().ok_or(query::QueryError::MissingQuery)?;
                opts.commands.push(Command::Search(v));}
            "--list-terms" => opts.commands.push(Command::ListTerms),
            "--filter-terms" => {
                let v = args.next().ok_or("Missing value for --filter-terms")?;
                opts.commands.push(Command::FilterTerms(v));}
            "--dump" => {
                let v = args.next().ok_or("Missing value for --dump")?;
                let target = DumpTarget::parse(&v)
                    .ok_or_else(|| format!("Unknown dump target: {}", v))?;
                opts.commands.push(Command::Dump(target));}
            "-h" | "--help" => opts.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}
