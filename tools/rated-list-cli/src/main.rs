//! `rated-list-cli`: wires a random peer graph, an adversary, and a sampling
//! strategy together and prints the resulting classification report.
//!
//! Reference: SPEC_FULL.md Section 2 (System overview, component I), Section 6
//! (CLI surface) — an external collaborator with no normative contract, but
//! present because the ambient stack (argument parsing, structured logging)
//! is never dropped just because the surface it drives is out of scope.

mod args;
mod error;
mod random_graph;

use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rated_list_core::{RatedListConfig, Root, Sha256Hasher};
use rated_list_sim::{Adversary, BalancingAttack, DefunctSubTreeAttack, EclipseAttack, SimulationDriver, SybilAttack};

use args::{AttackKind, Cli, Command, SimulateArgs};
use error::CliError;
use random_graph::{erdos_renyi, node_id_for_index};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let Command::Simulate(args) = cli.command;

    match run_simulate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_simulate(args: &SimulateArgs) -> Result<(), CliError> {
    if args.nodes == 0 {
        return Err(CliError::EmptyGraph);
    }
    if let Some(own) = args.own {
        if own >= args.nodes {
            return Err(CliError::OwnOutOfRange(own, args.nodes));
        }
    }

    info!(nodes = args.nodes, edge_prob = args.edge_prob, seed = args.seed, "building peer graph");
    let graph = erdos_renyi(args.nodes, args.edge_prob, args.seed);

    let mut own_rng = StdRng::seed_from_u64(args.seed ^ 0xA11A_5EED_u64);
    let own_index = args.own.unwrap_or_else(|| own_rng.gen_range(0..args.nodes));
    let own_id = node_id_for_index(own_index);

    let config = RatedListConfig::default();
    let mut driver = SimulationDriver::new(graph, own_id, config, Box::new(Sha256Hasher), args.seed);

    let mut adversary = build_adversary(args, args.nodes)?;
    let root = Root::new({
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&args.seed.to_le_bytes());
        bytes
    });

    let report = driver.run(adversary.as_mut(), root, args.strategy.into());

    if args.format_json {
        print_json(&report)?;
    } else {
        println!("own_id: vertex {own_index}");
        println!("{report}");
    }

    Ok(())
}

fn build_adversary(args: &SimulateArgs, nodes: usize) -> Result<Box<dyn Adversary>, CliError> {
    let clamp = |index: usize| index.min(nodes.saturating_sub(1));

    let adversary: Box<dyn Adversary> = match args.attack {
        AttackKind::Sybil => Box::new(SybilAttack::new(args.sybil_rate, args.seed)),
        AttackKind::Eclipse => {
            let target = args
                .target
                .ok_or(CliError::MissingAttackFlag { attack: "eclipse", flag: "--target" })?;
            Box::new(EclipseAttack::new(node_id_for_index(clamp(target)), args.eclipse_rate))
        }
        AttackKind::Balancing => {
            let root_node = args
                .balance_root
                .ok_or(CliError::MissingAttackFlag { attack: "balancing", flag: "--balance-root" })?;
            Box::new(BalancingAttack::new(node_id_for_index(clamp(root_node)), args.seed))
        }
        AttackKind::Defunct => {
            let defunct_root = args
                .defunct_root
                .ok_or(CliError::MissingAttackFlag { attack: "defunct", flag: "--defunct-root" })?;
            let parent = args
                .defunct_parent
                .ok_or(CliError::MissingAttackFlag { attack: "defunct", flag: "--defunct-parent" })?;
            Box::new(DefunctSubTreeAttack::new(node_id_for_index(clamp(defunct_root)), node_id_for_index(clamp(parent))))
        }
    };

    Ok(adversary)
}

#[cfg(feature = "json")]
fn print_json(report: &rated_list_sim::Report) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(report)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json(report: &rated_list_sim::Report) -> Result<(), CliError> {
    eprintln!("warning: --format-json requires the `json` feature; printing text instead");
    println!("{report}");
    Ok(())
}
