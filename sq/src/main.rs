mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use searchstring::{Condition, ParsedQuery, TextSegment, Transform, domains, emails, parse_with};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Report {
    conditions: Vec<Condition>,
    text_segments: Vec<TextSegment>,
    parsed: ParsedQuery,
    canonical: String,
}

fn report(query: &str, transforms: &[&dyn Transform]) -> Report {
    let parsed = parse_with(query, transforms);
    Report {
        conditions: parsed.conditions().to_vec(),
        text_segments: parsed.text_segments().to_vec(),
        parsed: parsed.parsed_query(),
        canonical: parsed.to_string(),
    }
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(report).context("Failed to render JSON report")?;
        println!("{rendered}");
        return Ok(());
    }

    for condition in &report.conditions {
        let sign = if condition.negated { "-" } else { "" };
        println!("condition: {sign}{}:{}", condition.keyword, condition.value);
    }
    for segment in &report.text_segments {
        let sign = if segment.negated { "-" } else { "" };
        println!("text: {sign}{}", segment.text);
    }
    for (keyword, values) in &report.parsed.include {
        println!("include: {keyword} = {}", values.join(", "));
    }
    for (keyword, values) in &report.parsed.exclude {
        println!("exclude: {keyword} = {}", values.join(", "));
    }
    println!("canonical: {}", report.canonical);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut transforms: Vec<&dyn Transform> = Vec::new();
    if cli.emails {
        transforms.push(&emails);
    }
    if cli.domains {
        transforms.push(&domains);
    }

    if let Some(query) = cli.query {
        return print_report(&report(&query, &transforms), cli.json);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        if stdin
            .read_line(&mut line)
            .context("Failed to read stdin")?
            == 0
        {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "/bye" {
            break;
        }
        print_report(&report(line, &transforms), cli.json)?;
    }

    Ok(())
}
