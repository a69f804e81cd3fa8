//! Sharing one index between threads with `SyncQuadtree`.
//!
//! Run with: cargo run --example shared_index --features sync --release

use quadaxis::{Entry, QuadtreeBuilder, Rectangle, SyncQuadtree};
use std::thread;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SyncQuadtree Multi-threaded Example ===\n");

    let index: SyncQuadtree<Entry<(usize, usize), f64>> =
        QuadtreeBuilder::new(Rectangle::of(0.0, 1_000.0, 1_000.0, 1_000.0))
            .max_depth(8)
            .build_sync()?;

    println!("1. Concurrent writers");
    let mut handles = vec![];
    for thread_id in 0..4 {
        let index = index.clone();
        handles.push(thread::spawn(move || {
            for i in 0..1_000 {
                let x = 1.0 + (i % 100) as f64 * 9.9;
                let y = 1.0 + thread_id as f64 * 250.0 + (i / 100) as f64 * 20.0;
                index.insert(Entry::new(Rectangle::new(x, y, 0.5, 0.5), (thread_id, i)));
            }
            println!("   Thread {} completed 1000 inserts", thread_id);
        }));
    }
    for handle in handles {
        handle.join().map_err(|_| "writer thread panicked")?;
    }
    println!("   Total elements: {}\n", index.len());

    println!("2. Concurrent readers");
    let mut handles = vec![];
    for thread_id in 0..3 {
        let index = index.clone();
        handles.push(thread::spawn(move || {
            let band = Rectangle::of(0.0, 250.0 * (thread_id + 1) as f64, 1_000.0, 250.0);
            let hits = index.count(&band);
            println!("   Reader {} sees {} elements in its band", thread_id, hits);
        }));
    }
    for handle in handles {
        handle.join().map_err(|_| "reader thread panicked")?;
    }

    println!("\n3. Borrowed access under one read lock");
    let owners = index.read(|tree| {
        let mut owners: Vec<usize> = tree
            .query(&Rectangle::new(500.0, 500.0, 10.0, 10.0))
            .iter()
            .map(|entry| entry.payload().0)
            .collect();
        owners.sort_unstable();
        owners.dedup();
        owners
    });
    println!("   Writers owning elements near the center: {:?}", owners);

    Ok(())
}
