use anyhow::{anyhow, Result};
use clap::{arg, Command};
use geo_tsp::geo::GeoModel;
use geo_tsp::io::{TourSink, TourWriter, TspTextReader};
use geo_tsp::local::{Descent, LocalSearchConfig};
use geo_tsp::solver::{SolverConfig, Strategy, TspSolver};
use geo_tsp::tour::MoveKind;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("geo-tsp")
        .about("Builds random, greedy, and improved tours for a geographic point file")
        .arg(
            arg!(<INPUT> "Point file: a count, then `label latitude longitude` records")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"output-dir" [DIR] "Directory for solution files (defaults to the input's directory)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64)))
        .arg(
            arg!(--strategy [STRATEGY] "Improvement strategy")
                .value_parser(["vns", "ils"])
                .default_value("vns"),
        )
        .arg(
            arg!(--neighborhoods [LIST] "Comma-separated VNS neighborhoods, or the ILS neighborhood")
                .default_value("two-opt,exchange,reinsertion"),
        )
        .arg(
            arg!(--perturbation [K] "Random exchanges per ILS perturbation")
                .value_parser(clap::value_parser!(usize))
                .default_value("3"),
        )
        .arg(arg!(--"best-improvement" "Accept only the best candidate of each sweep"))
        .arg(arg!(--precompute "Cache all pairwise distances before searching"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<PathBuf>("INPUT")
        .ok_or_else(|| anyhow!("missing INPUT"))?;
    let output_dir = match matches.get_one::<PathBuf>("output-dir") {
        Some(dir) => dir.clone(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let neighborhoods = matches
        .get_one::<String>("neighborhoods")
        .map(String::as_str)
        .unwrap_or_default()
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<MoveKind>)
        .collect::<geo_tsp::Result<Vec<_>>>()?;

    let strategy = match matches.get_one::<String>("strategy").map(String::as_str) {
        Some("ils") => Strategy::Ils {
            neighborhood: neighborhoods
                .first()
                .copied()
                .ok_or_else(|| anyhow!("ILS needs a neighborhood"))?,
        },
        _ => Strategy::Vns,
    };

    let descent = if matches.get_flag("best-improvement") {
        Descent::BestImprovement
    } else {
        Descent::FirstImprovement
    };

    let mut config = SolverConfig::default()
        .with_strategy(strategy)
        .with_neighborhoods(neighborhoods)
        .with_local_search(LocalSearchConfig::default().with_descent(descent))
        .with_perturbation_strength(*matches.get_one::<usize>("perturbation").unwrap_or(&3))
        .with_precompute_distances(matches.get_flag("precompute"));
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }

    let model = TspTextReader::open(input)
        .and_then(|mut reader| GeoModel::from_source(&mut reader))
        .map_err(|e| anyhow!("failed to load {}: {}", input.display(), e))?;
    let report = TspSolver::solve(&model, &config)?;

    let files = [
        ("random_solution.txt", &report.random.tour),
        ("greedy_solution.txt", &report.greedy.tour),
        ("improved_solution.txt", &report.improved.tour),
    ];
    for (name, tour) in files {
        TourWriter::create(output_dir.join(name))?.write_tour(tour)?;
    }

    println!("Random solution distance: {:.3}", report.random.cost);
    println!("Greedy solution distance: {:.3}", report.greedy.cost);
    println!(
        "Improved solution distance: {:.3} ({:.1}% below greedy)",
        report.improved.cost,
        report.improvement_ratio() * 100.0
    );
    let route: Vec<&str> = model.labels(&report.improved.tour).collect();
    println!("Improved route: {}", route.join(" -> "));
    println!("Solution files written to {}", output_dir.display());
    for (name, _) in files {
        println!("  {}", output_dir.join(name).display());
    }

    Ok(())
}
