mod args;

use crate::args::Args;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use github_user_lib::{parse_each_str, parse_str, DecodeError, User};
use log::info;
use std::fs::read_to_string;
use std::io::{stdin, Read};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let input = read_input(&args)?;
    let (users, rejected) = decode_input(&input, args.skip_invalid)?;

    for e in &rejected {
        eprintln!("{} {}", "skipped:".red(), e);
    }

    if args.json {
        println!("{}", render_json(&users)?);
        return Ok(());
    }

    for user in &users {
        println!("{}", render_user(user));
    }

    println!("({} users)", users.len());

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    match args.path.as_ref() {
        Some(path) => {
            info!("reading users from {}", path.display());
            read_to_string(path).with_context(|| format!("could not read {}", path.display()))
        }
        None => {
            info!("reading users from stdin");
            let mut s = String::new();
            stdin()
                .read_to_string(&mut s)
                .context("could not read stdin")?;
            Ok(s)
        }
    }
}

fn decode_input(input: &str, skip_invalid: bool) -> Result<(Vec<User>, Vec<DecodeError>)> {
    if !skip_invalid {
        let users = parse_str(input)?.into_users();
        return Ok((users, Vec::new()));
    }

    let mut users = Vec::new();
    let mut rejected = Vec::new();
    for result in parse_each_str(input)? {
        match result {
            Ok(user) => users.push(user),
            Err(e) => rejected.push(e),
        }
    }
    Ok((users, rejected))
}

fn render_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string_pretty(users)?)
}

fn render_user(user: &User) -> String {
    format!(
        "{} ({}) [{}] {}",
        user.login().yellow(),
        user.id(),
        user.avatar_url().map_or("-", |u| u.as_str()),
        user.name().unwrap_or_default(),
    )
}
