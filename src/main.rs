use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wgraph::{
    shape::{total_area, Circle, Rectangle, Shape},
    Graph, GraphError, WeightedGraph,
};

fn run() -> Result<(), GraphError> {
    let mut graph: WeightedGraph = WeightedGraph::try_new(4)?;
    graph.add_edge(0, 1, 1.0)?;
    graph.add_edge(0, 2, 2.0)?;
    graph.add_edge(1, 2, 3.0)?;
    graph.add_edge(2, 3, 4.0)?;
    info!(edges = graph.edge_count(), "graph built");

    println!("Neighbors of vertex 0:");
    for edge in graph.neighbors(0)? {
        println!("  to: {}, weight: {}", edge.to, edge.weight);
    }

    println!();
    print!("{}", graph.display());

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Rectangle {
            width: 4.0,
            height: 6.0,
        }),
    ];
    println!();
    for shape in &shapes {
        println!("{} area: {:.2}", shape.name(), shape.area());
    }
    println!("total area: {:.2}", total_area(&shapes));
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::from_default_env().add_directive(
        "wgraph=info"
            .parse()
            .unwrap_or_else(|_| tracing::Level::INFO.into()),
    );
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
