use anyhow::{Context, Result};
use bintree_gen::{gen_bin_tree, Shape, Tree, TreeConfig, Value, DEFAULT_HEIGHT, DEFAULT_ROOT};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bintree-gen", about = "Build perfect binary trees without recursion")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a single tree and print it.
    Build {
        /// Number of edges from root to the deepest leaf (negative = empty tree).
        #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_hyphen_values = true)]
        height: i64,
        /// Value at the root.
        #[arg(long, default_value_t = DEFAULT_ROOT, allow_hyphen_values = true)]
        root: Value,
        /// Output shape: dict, list, namedtuple or ordered_dict.
        #[arg(long, default_value = "dict")]
        shape: String,
        /// Branch function for left children.
        #[arg(long, value_enum, default_value_t = Branch::Inc)]
        left: Branch,
        /// Branch function for right children.
        #[arg(long, value_enum, default_value_t = Branch::Dec)]
        right: Branch,
        /// Print the tree as JSON instead of its native notation.
        #[arg(long)]
        json: bool,
    },
    /// Print the demonstration trees for every shape.
    Demo,
}

/// Branch function presets selectable from the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    /// r + 1
    Inc,
    /// r - 1
    Dec,
    /// r * r
    Square,
    /// r * 2
    Double,
    /// r / 2
    Half,
    /// r
    Same,
}

impl Branch {
    fn apply(self, r: Value) -> Value {
        match self {
            Branch::Inc => r.wrapping_add(1),
            Branch::Dec => r.wrapping_sub(1),
            Branch::Square => r.wrapping_mul(r),
            Branch::Double => r.wrapping_mul(2),
            Branch::Half => r / 2,
            Branch::Same => r,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            height,
            root,
            shape,
            left,
            right,
            json,
        } => run_build(height, root, &shape, left, right, json)?,
        Commands::Demo => run_demo(),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_build(
    height: i64,
    root: Value,
    shape: &str,
    left: Branch,
    right: Branch,
    json: bool,
) -> Result<()> {
    let config = TreeConfig::default()
        .with_height(height)
        .with_root(root)
        .with_shape_name(shape)
        .context("invalid --shape")?;
    info!(?config, ?left, ?right, "building tree");

    let tree = config.build(|r| left.apply(r), |r| right.apply(r));
    if json {
        println!("{}", render_json(&tree)?);
    } else {
        println!("{tree}");
    }

    Ok(())
}

#[cfg(feature = "visualize")]
fn render_json(tree: &Tree) -> Result<String> {
    serde_json::to_string(tree).context("failed to render tree as JSON")
}

#[cfg(not(feature = "visualize"))]
fn render_json(_tree: &Tree) -> Result<String> {
    anyhow::bail!("JSON output requires the `visualize` feature")
}

fn run_demo() {
    let titles = [
        (Shape::Dict, "Dict"),
        (Shape::List, "List"),
        (Shape::Record, "Record (namedtuple)"),
        (Shape::OrderedDict, "Ordered mapping (ordered_dict)"),
    ];

    for (i, (shape, title)) in titles.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{title}");
        println!("{}", TreeConfig::default().with_shape(shape).build_default());
    }

    println!();
    println!("Custom branches (left = r + 1, right = r * r)");
    let custom = gen_bin_tree(
        2,
        5,
        |r| Branch::Inc.apply(r),
        |r| Branch::Square.apply(r),
        Shape::Dict,
    );
    println!("{custom}");
}
