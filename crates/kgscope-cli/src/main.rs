//! kgscope command-line driver.
//!
//! Reads a ranked answer set from a JSON file, selects one answer, and
//! prints the normalized display graph plus layout options as JSON for a
//! rendering surface.
//!
//! Run with: cargo run -p kgscope-cli -- answers.json [--config view.toml] [--answer-id ID | --index N]

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kgscope_answers::{Answer, AnswerSelectionIndex};
use kgscope_common::{TypeColorMap, ViewConfig};
use kgscope_graph::normalize_subgraph;

struct CliArgs {
    answers_path: String,
    config_path: Option<String>,
    answer_id: Option<i64>,
    index: Option<usize>,
}

const USAGE: &str = "usage: kgscope <answers.json> [--config <view.toml>] [--answer-id <id> | --index <n>]";

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut answers_path = None;
        let mut config_path = None;
        let mut answer_id = None;
        let mut index = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    config_path = Some(args.next().context("--config takes a path")?);
                }
                "--answer-id" => {
                    let value = args.next().context("--answer-id takes an id")?;
                    answer_id = Some(value.parse().context("--answer-id must be an integer")?);
                }
                "--index" => {
                    let value = args.next().context("--index takes an ordinal")?;
                    index = Some(value.parse().context("--index must be a non-negative integer")?);
                }
                other if answers_path.is_none() && !other.starts_with('-') => {
                    answers_path = Some(other.to_string());
                }
                other => bail!("unexpected argument: {other}\n{USAGE}"),
            }
        }

        Ok(Self {
            answers_path: answers_path.context(USAGE)?,
            config_path,
            answer_id,
            index,
        })
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => ViewConfig::from_toml(path)?,
        None => ViewConfig::default(),
    };

    let content = std::fs::read_to_string(&args.answers_path)
        .with_context(|| format!("reading {}", args.answers_path))?;
    let answers: Vec<Answer> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", args.answers_path))?;
    if answers.is_empty() {
        bail!("answer set is empty");
    }

    let mut selection = AnswerSelectionIndex::new(answers);
    let answer = match (args.answer_id, args.index) {
        (Some(id), _) => selection
            .select_by_id(id)
            .with_context(|| format!("no answer with id {id}"))?
            .clone(),
        (None, Some(index)) => {
            if index >= selection.len() {
                bail!("index {index} out of range, {} answers", selection.len());
            }
            selection.select(index).clone()
        }
        (None, None) => selection.select(0).clone(),
    };

    info!(
        answer = answer.id,
        confidence = answer.confidence,
        "selected answer"
    );

    let graph = answer
        .result_graph
        .as_ref()
        .context("selected answer carries no result graph")?;
    let colors = TypeColorMap::new(config.concepts.iter().cloned());

    match normalize_subgraph(graph, &colors, &config.view) {
        Some(view) => println!("{}", serde_json::to_string_pretty(&view)?),
        None => info!("nothing to render"),
    }

    Ok(())
}
