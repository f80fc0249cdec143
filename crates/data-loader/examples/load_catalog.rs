use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let model_dir = Path::new("model");

    println!("Loading recommendation catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(model_dir)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let n = catalog.len();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", n);
    println!("Similarity entries: {}", n * n);
    println!("\nPerformance: {:.0} entries/second",
             (n * n) as f64 / elapsed.as_secs_f64());
}
