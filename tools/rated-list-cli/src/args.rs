//! Argument parsing.
//!
//! Reference: SPEC_FULL.md Section 6 (CLI surface)

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rated-list-cli")]
#[command(about = "Simulate the rated-list peer reputation engine under an adversary")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a random peer graph, run one adversary against it, and print a
    /// classification report.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Number of vertices in the generated peer graph.
    #[arg(long, default_value_t = 500)]
    pub nodes: usize,

    /// Erdős–Rényi edge probability between any two distinct vertices.
    #[arg(long, default_value_t = 0.02)]
    pub edge_prob: f64,

    /// Seed for the graph generator, peer oracle shuffling, and adversary
    /// randomness.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Vertex index bound as the local node. Random (seeded) if omitted.
    #[arg(long)]
    pub own: Option<usize>,

    /// Adversary strategy to run.
    #[arg(long, value_enum, default_value = "sybil")]
    pub attack: AttackKind,

    /// Candidate ordering strategy for each sample.
    #[arg(long, value_enum, default_value = "high")]
    pub strategy: StrategyKind,

    /// `SybilAttack`: fraction of vertices to mark malicious.
    #[arg(long, default_value_t = 0.2)]
    pub sybil_rate: f64,

    /// `EclipseAttack`: vertex index to isolate. Required for `--attack eclipse`.
    #[arg(long)]
    pub target: Option<usize>,

    /// `EclipseAttack`: notional budget fraction (accepted, unused — see
    /// `rated_list_sim::adversary::EclipseAttack`).
    #[arg(long, default_value_t = 0.0)]
    pub eclipse_rate: f64,

    /// `BalancingAttack`: vertex index whose neighbours are split into an
    /// honest head and poisoned siblings. Required for `--attack balancing`.
    #[arg(long)]
    pub balance_root: Option<usize>,

    /// `DefunctSubTreeAttack`: vertex index marking the root of the defunct
    /// branch. Required for `--attack defunct`.
    #[arg(long)]
    pub defunct_root: Option<usize>,

    /// `DefunctSubTreeAttack`: vertex index excluded from the defunct branch
    /// (the branch's live parent). Required for `--attack defunct`.
    #[arg(long)]
    pub defunct_parent: Option<usize>,

    /// Print the report as JSON instead of the human-readable summary.
    /// Requires the `json` feature.
    #[arg(long)]
    pub format_json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    Sybil,
    Eclipse,
    Balancing,
    Defunct,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    High,
    Low,
    Random,
    All,
}

impl From<StrategyKind> for rated_list_sim::QueryStrategy {
    fn from(value: StrategyKind) -> Self {
        match value {
            StrategyKind::High => rated_list_sim::QueryStrategy::High,
            StrategyKind::Low => rated_list_sim::QueryStrategy::Low,
            StrategyKind::Random => rated_list_sim::QueryStrategy::Random,
            StrategyKind::All => rated_list_sim::QueryStrategy::All,
        }
    }
}
