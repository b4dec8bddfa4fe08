use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use graphreel::{
    fs::{TraceExport, load_graph},
    graph::{Graph, Preset, generate_default},
    playback::DEFAULT_SPEED_MILLIS,
    session::{Frame, Session},
    traversal::{Algorithm, Trace},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Step-by-step traces of graph traversals
#[derive(Parser, Debug)]
#[command(name = "graphreel")]
#[command(version, about = "Step-by-step traces of graph traversals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Traversal algorithm: dfs or bfs
    #[arg(short, long, default_value_t = Algorithm::DepthFirst)]
    algorithm: Algorithm,

    /// Built-in preset graph: simple, tree or cycle
    #[arg(short, long, conflicts_with = "graph")]
    preset: Option<Preset>,

    /// JSON graph file: {"nodes": ["A", ...], "edges": [["A", "B"], ...]}
    #[arg(short, long)]
    graph: Option<PathBuf>,
}

impl GraphArgs {
    fn is_default_graph(&self) -> bool {
        self.preset.is_none() && self.graph.is_none()
    }

    fn load(&self) -> anyhow::Result<Graph> {
        if let Some(path) = &self.graph {
            return load_graph(path)
                .with_context(|| format!("Failed to load graph from {}", path.display()));
        }
        Ok(self.preset.map_or_else(generate_default, Preset::graph))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a trace and print every step
    Trace {
        #[command(flatten)]
        source: GraphArgs,

        /// Print the trace as a JSON document
        #[arg(long)]
        json: bool,
    },
    /// Play the trace back in real time
    Play {
        #[command(flatten)]
        source: GraphArgs,

        /// Milliseconds per step, clamped to 100..=1000
        #[arg(short, long, default_value_t = DEFAULT_SPEED_MILLIS)]
        speed: u64,
    },
    /// Describe an algorithm
    Info {
        #[arg(short, long, default_value_t = Algorithm::DepthFirst)]
        algorithm: Algorithm,
    },
}

fn print_trace(trace: &Trace) {
    let width = trace.len().to_string().len();
    for (index, snapshot) in trace.iter().enumerate() {
        println!("[{index:>width$}] {}", snapshot.message());
        println!(
            "{:width$}   visited: [{}]  {}: [{}]",
            "",
            snapshot.visit_order_labels(),
            trace.algorithm().frontier_name(),
            snapshot.frontier_labels(),
        );
    }
    println!("{}", trace.stats());
}

fn print_frame(frame: &Frame) {
    let Some(snapshot) = &frame.snapshot else {
        return;
    };
    println!(
        "step {}/{} ({:.0}%) {}",
        frame.progress.step(),
        frame.len,
        frame.progress.percent(),
        snapshot.message()
    );
}

async fn play(mut session: Session) -> anyhow::Result<()> {
    let mut updates = session.controller().subscribe();
    session.play();
    print_frame(&session.frame());

    while session.frame().state.playing {
        tokio::select! {
            changed = updates.changed() => {
                changed.context("Playback controller went away")?;
                print_frame(&session.frame());
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for ctrl-c")?;
                session.pause();
                info!("playback interrupted");
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graphreel=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Trace { source, json } => {
            let graph = source.load()?;
            let trace = source.algorithm.run(Arc::new(graph));
            if json {
                let mut stdout = io::stdout().lock();
                TraceExport::new(&trace)
                    .write_json(&mut stdout)
                    .context("Failed to write trace JSON")?;
                writeln!(stdout)?;
            } else {
                print_trace(&trace);
            }
        }
        Commands::Play { source, speed } => {
            let session = if source.is_default_graph() {
                let mut session = Session::with_speed(speed);
                session.select_algorithm(source.algorithm);
                session
            } else {
                Session::with_graph(source.load()?, source.algorithm, speed)
            };
            play(session).await?;
        }
        Commands::Info { algorithm } => {
            let info = algorithm.info();
            println!("{} ({})", info.name, info.category);
            println!(
                "time: {}  space: {}  difficulty: {}",
                info.time_complexity, info.space_complexity, info.difficulty
            );
            println!();
            println!("{}", info.description);
            println!();
            println!("{}", info.code);
        }
    }
    Ok(())
}
