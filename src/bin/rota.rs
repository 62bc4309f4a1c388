use std::error::Error;
use std::path::PathBuf;
use std::{env, fs, io};

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rota::engine::Engine;
use rota::input::normalise_items;
use rota::perm::PermutationOrder;
use rota::print::{tabulate_rotation, tabulate_summary};
use rota::schedule::{today, Rotation};
use rota::session::{Session, View};
use rota::state::{Event, State};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// query string to restore the rotation from
    #[clap(short = 'q', long, default_value = "")]
    query: String,

    /// item to rotate, replacing the items in the query (repeatable)
    #[clap(short = 'i', long = "item")]
    items: Vec<String>,

    /// file to source the items from, one per line
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// randomizer, clamped to the range permitted by the items
    #[clap(short = 'r', long, allow_hyphen_values = true)]
    randomizer: Option<String>,

    /// date the rotation starts from (YYYY-MM-DD)
    #[clap(short = 's', long)]
    rotation_start: Option<String>,

    /// permutation order: natural or lsf
    #[clap(short = 'o', long, default_value_t = PermutationOrder::NaturalOrder)]
    order: PermutationOrder,

    /// print the rotation as JSON
    #[clap(long)]
    json: bool,

    /// comma-separated ordering of the items to find the randomizer for
    #[clap(long, value_delimiter = ',')]
    rank: Option<Vec<String>>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.items.is_empty() && self.file.is_some() {
            bail!("at most one of the -i or -f flags may be specified");
        }
        Ok(())
    }
}

#[derive(Default)]
struct Latest {
    rotation: Rotation,
}
impl View for Latest {
    fn ready(&mut self, state: &State, rotation: &Rotation) {
        debug!("restored {state:?}");
        self.rotation = rotation.clone();
    }

    fn update(&mut self, state: &State, rotation: &Rotation) {
        debug!("updated to {state:?}");
        self.rotation = rotation.clone();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let mut session = Session::open(
        Engine::new(args.order),
        &args.query,
        today(),
        Latest::default(),
    )?;
    if let Some(text) = read_items(&args)? {
        session.dispatch(Event::ItemsEdited(text))?;
    }
    if let Some(randomizer) = &args.randomizer {
        session.dispatch(Event::RandomizerEdited(randomizer.clone()))?;
    }
    if let Some(rotation_start) = &args.rotation_start {
        session.dispatch(Event::RotationStartEdited(rotation_start.clone()))?;
    }

    let state = session.state();
    info!(
        "\n{}",
        Console::default().render(&tabulate_summary(
            state.items().len(),
            state.randomizer(),
            state.max_randomizer()
        ))
    );
    if let Some(arrangement) = &args.rank {
        let arrangement = normalise_items(arrangement);
        let randomizer = session.engine().rank(state.items(), &arrangement)?;
        info!("randomizer for {arrangement:?} in {} order: {randomizer}", args.order);
    }
    info!("location: {}", session.location());

    let rotation = session.into_view().rotation;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rotation)?);
    } else {
        info!("\n{}", Console::default().render(&tabulate_rotation(&rotation)));
    }
    Ok(())
}

fn read_items(args: &Args) -> anyhow::Result<Option<String>> {
    if let Some(path) = args.file.as_ref() {
        return Ok(Some(fs::read_to_string(path)?));
    }
    if !args.items.is_empty() {
        return Ok(Some(args.items.join("\n")));
    }
    Ok(None)
}
