use std::str::FromStr;
use std::time::Instant;

use clap::{App, ArgMatches, load_yaml};
use log::{error, info};

use palette_color::{CheckerResult, ColorError, Heuristic, Result, checker};
use palette_color::util::{RunStats, export_results, parse_arg, random_graph};


/// reads an argument (all arguments have a default value)
fn arg<T: FromStr>(main_args:&ArgMatches, name:&str) -> Result<T> {
    parse_arg(name, main_args.value_of(name).unwrap_or_default())
}

fn run(main_args:&ArgMatches) -> Result<()> {
    let heuristic:Heuristic = main_args.value_of("heuristic").unwrap_or_default().parse()?;
    let n:usize = arg(main_args, "vertices")?;
    let density:f64 = arg(main_args, "density")?;
    let seed:u64 = arg(main_args, "seed")?;
    let k:usize = arg(main_args, "colors")?;
    let perf_file = main_args.value_of("perf");
    // build the instance
    info!("random graph: {} vertices, density {}, seed {}", n, density, seed);
    let graph = random_graph(n, density, seed)?;
    graph.display_statistics();
    info!("=======================");
    let palette:Vec<usize> = (0..k).collect();
    // solve it
    let t_start = Instant::now();
    let outcome = heuristic.run(&graph, &palette);
    let duration = t_start.elapsed().as_secs_f32();
    let nb_colors = match &outcome {
        Ok(coloring) => match checker(&graph, coloring, &palette) {
            CheckerResult::Ok(nb_colors) => Some(nb_colors),
            other => {
                error!("invalid solution (reason: {:?})", other);
                None
            }
        },
        Err(ColorError::PaletteExhausted { palette_size }) => {
            info!("{} ran out of colors ({} available)", heuristic, palette_size);
            None
        },
        Err(_) => None,
    };
    info!("{} took {:.3} seconds. Nb colors: {:?}", heuristic, duration, nb_colors);
    let stats = RunStats {
        heuristic: heuristic.to_string(),
        nb_vertices: graph.nb_vertices(),
        nb_edges: graph.nb_edges(),
        palette_size: k,
        nb_colors,
        time_searched: duration,
    };
    // export results
    export_results(&stats, perf_file)?;
    outcome.map(|_| ())
}

/** colors a seeded random graph with one of the heuristics */
pub fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();
    // parse arguments
    let yaml = load_yaml!("palette_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
