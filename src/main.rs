use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::BufRead;
use std::path::PathBuf;
use word_maze::pathfinding::{render_route, shortest_route};
use word_maze::sentences::sentence_for_level;
use word_maze::{MazeConfig, MazeGenerator, MazeStyle, WordMaze};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Simple,
    Standard,
    Complex,
}

impl From<StyleArg> for MazeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Simple => MazeStyle::Simple,
            StyleArg::Standard => MazeStyle::Standard,
            StyleArg::Complex => MazeStyle::Complex,
        }
    }
}

/// Generate mazes and word-maze levels as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maze width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Maze height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Generation pipeline; overrides the config file
    #[arg(long, value_enum, conflicts_with = "level")]
    style: Option<StyleArg>,

    /// Regenerate until start and goal are connected
    #[arg(long, conflicts_with = "level")]
    solvable: bool,

    /// Draw the shortest start-to-goal route over the printed maze
    #[arg(long, conflicts_with = "level")]
    solve: bool,

    /// Lay out a word-maze level instead of a bare maze
    #[arg(long)]
    level: Option<u32>,

    /// Sentence to hide in the level (defaults to a built-in one)
    #[arg(long, requires = "level")]
    sentence: Option<String>,

    /// Number of mazes to generate; only the last is printed
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Serve puffin profiling data while running
    #[arg(long)]
    profile: bool,
}

fn build_config(args: &Args) -> anyhow::Result<MazeConfig> {
    let mut config = match &args.config {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MazeConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(style) = args.style {
        config.style = style.into();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = build_config(&args)?;

    let _server = if args.profile {
        puffin::set_scopes_on(true);
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr).context("starting puffin server")?;
        info!("Serving profile data on {addr}");
        Some(server)
    } else {
        None
    };

    if let Some(level) = args.level {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sentence = args
            .sentence
            .clone()
            .unwrap_or_else(|| sentence_for_level(level, &mut rng).to_string());

        let game = WordMaze::new(config, level, &sentence)?;
        print!("{game}");
        println!(
            "level {} | sentence {:?} | {} letters placed",
            game.level(),
            game.sentence(),
            game.letters().len()
        );
    } else {
        let style = config.style;
        let (start, goal) = (config.start(), config.goal());
        let mut generator = MazeGenerator::new(config)?;
        let mut last = None;
        for _ in 0..args.repeat.max(1) {
            let grid = if args.solvable {
                generator.generate_solvable(style)?
            } else {
                generator.generate_style(style)
            };
            puffin::GlobalProfiler::lock().new_frame();
            last = Some(grid);
        }
        if let Some(grid) = last {
            if !args.solve {
                print!("{grid}");
            } else if let Some(route) = shortest_route(&grid, start, goal) {
                print!("{}", render_route(&grid, &route));
                info!("Shortest route {start:?} -> {goal:?}: {} steps", route.len() - 1);
            } else {
                print!("{grid}");
                warn!("No route from {start:?} to {goal:?}");
            }
        }
    }

    if args.profile {
        info!("Press Enter to stop the profile server");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
