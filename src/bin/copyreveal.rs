use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "copyreveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a scene's clock and print one JSON snapshot per step.
    Simulate(SimulateArgs),
    /// Print the default reveal profile as JSON.
    Profile,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Clock step in seconds.
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// Stop once the clock reaches this many seconds.
    #[arg(long, default_value_t = 3.0)]
    until: f64,

    /// Scroll to `y` when the clock reaches `t`, given as `t:y`. Repeatable.
    #[arg(long = "scroll-at")]
    scroll_at: Vec<ScrollAt>,

    /// Include each block's inner markup in the snapshots.
    #[arg(long)]
    markup: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollAt {
    at: f64,
    y: f64,
}

impl FromStr for ScrollAt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (t, y) = s
            .split_once(':')
            .ok_or_else(|| format!("expected 't:y', got '{s}'"))?;
        let at = t
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad time '{t}': {e}"))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad scroll offset '{y}': {e}"))?;
        if !at.is_finite() || !y.is_finite() {
            return Err(format!("'{s}' must be finite"));
        }
        Ok(Self { at, y })
    }
}

#[derive(serde::Serialize)]
struct Frame {
    #[serde(flatten)]
    snapshot: copyreveal::SceneSnapshot,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    markup: Vec<BlockMarkup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<copyreveal::StageEvent>,
}

#[derive(serde::Serialize)]
struct BlockMarkup {
    id: String,
    html: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Profile => cmd_profile(),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<copyreveal::SceneDef> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let def: copyreveal::SceneDef =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(def)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.dt.is_finite() && args.dt > 0.0) {
        anyhow::bail!("--dt must be a positive number of seconds");
    }
    let def = read_scene_json(&args.in_path)?;
    let mut scene = def.build(copyreveal::init())?;

    let mut scrolls = args.scroll_at.clone();
    scrolls.sort_by(|a, b| a.at.total_cmp(&b.at));
    let mut scrolls = scrolls.into_iter().peekable();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    loop {
        while let Some(s) = scrolls.next_if(|s| s.at <= scene.stage.now() + 1e-9) {
            scene.stage.scroll_to(s.y);
        }

        let frame = Frame {
            snapshot: scene.snapshot(),
            markup: if args.markup {
                scene
                    .blocks
                    .iter()
                    .map(|b| BlockMarkup {
                        id: b.id.clone(),
                        html: copyreveal::inner_markup(scene.stage.document(), b.section),
                    })
                    .collect()
            } else {
                Vec::new()
            },
            events: scene.stage.drain_events(),
        };
        serde_json::to_writer(&mut out, &frame).with_context(|| "write snapshot")?;
        writeln!(out).with_context(|| "write snapshot")?;

        if scene.stage.now() + 1e-9 >= args.until {
            break;
        }
        let step = args.dt.min(args.until - scene.stage.now());
        scene.stage.advance(step);
    }

    scene.unmount_all();
    Ok(())
}

fn cmd_profile() -> anyhow::Result<()> {
    let engine = copyreveal::init();
    let json = serde_json::to_string_pretty(engine.default_profile())
        .with_context(|| "serialize profile")?;
    println!("{json}");
    Ok(())
}
