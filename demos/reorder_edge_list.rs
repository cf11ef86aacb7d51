//! Run with: cargo run --example reorder_edge_list -- <input> <output> [resolution]
use community_reorder::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: reorder_edge_list <input> <output> [resolution]");
        return ExitCode::FAILURE;
    };
    let resolution = match args.next().map(|r| r.parse::<f64>()) {
        None => 1.0,
        Some(Ok(r)) => r,
        Some(Err(e)) => {
            eprintln!("invalid resolution: {e}");
            return ExitCode::FAILURE;
        }
    };

    let timer = RecordingTimer::new();
    let pipeline =
        ReorderPipeline::new(Louvain::new().with_resolution(resolution)).with_timer(&timer);
    match pipeline.run(&input, &output) {
        Ok(summary) => {
            println!(
                "{} vertices, {} edges, {} communities, modularity {:?}",
                summary.vertices, summary.edges, summary.communities, summary.modularity
            );
            for (stage, elapsed) in timer.records() {
                println!("{stage} done in {:.6} sec.", elapsed.as_secs_f64());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("reorder failed: {e}");
            ExitCode::FAILURE
        }
    }
}
