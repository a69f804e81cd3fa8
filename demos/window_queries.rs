//! Walkthrough of the quadtree index: inserting tagged rectangles, window
//! queries, query statistics and early exit.
//!
//! Run this example with:
//! ```bash
//! cargo run --example window_queries
//! ```

use quadaxis::prelude::*;
use std::ops::ControlFlow;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Quadtree Window Query Demo ===\n");

    println!("Part 1: Landmarks");
    println!("{}", "-".repeat(50));
    landmarks()?;
    println!();

    println!("Part 2: Elements on split lines");
    println!("{}", "-".repeat(50));
    split_lines();
    println!();

    println!("Part 3: Larger dataset");
    println!("{}", "-".repeat(50));
    larger_dataset()?;
    println!();

    println!("=== Demo Complete ===");
    Ok(())
}

fn landmarks() -> Result<()> {
    let world = Rectangle::new(0.0, 0.0, 180.0, 90.0);
    let mut index: Quadtree<Entry<&str, f64>> = QuadtreeBuilder::new(world).max_depth(12).build()?;

    let places = [
        ("Empire State Building", -73.9857, 40.7484),
        ("Statue of Liberty", -74.0445, 40.6892),
        ("Central Park", -73.9654, 40.7829),
        ("Eiffel Tower", 2.2945, 48.8584),
        ("Greenwich", 0.0, 51.4769),
    ];
    for (name, lon, lat) in places {
        index.try_insert(Entry::new(Rectangle::new(lon, lat, 0.005, 0.005), name))?;
        println!("  Indexed: {}", name);
    }

    let manhattan = Rectangle::from_corners((-74.05, 40.68), (-73.90, 40.80));
    println!("\n  Within Manhattan window:");
    for entry in index.query(&manhattan) {
        println!("    - {}", entry.payload());
    }

    // Point windows work too
    let hits = index.query(&Point::new(0.0, 51.4769));
    println!("\n  At the prime meridian: {:?}", hits.iter().map(|e| e.payload()).collect::<Vec<_>>());

    Ok(())
}

fn split_lines() {
    let area = Rectangle::of(0.0, 16.0, 16.0, 16.0);
    let mut index = Quadtree::new(area, 4);

    // Crosses the vertical root split, sorted by its Y position
    index.insert(Rectangle::of(7.0, 3.0, 2.0, 1.0));
    // Crosses the horizontal root split, sorted by its X position
    index.insert(Rectangle::of(1.0, 9.0, 1.0, 2.0));
    // Fits a depth-4 quadrant
    index.insert(Rectangle::of(4.5, 6.5, 0.1, 0.1));

    let stats = index.stats();
    println!(
        "  {} elements in {} quadtree nodes and {} axis nodes, deepest level {}",
        stats.element_count, stats.quad_node_count, stats.axis_node_count, stats.deepest_level
    );

    let window = Rectangle::of(3.0, 7.0, 2.0, 2.0);
    let result = index.query_with_stats(&window);
    println!("  Window {:?}", window);
    println!("    found {} element(s)", result.len());
    println!("    {:?}", result.stats);
}

fn larger_dataset() -> Result<()> {
    let area = Rectangle::new(0.0, 0.0, 1_000.0, 1_000.0);
    let config = IndexConfig::default()
        .with_max_depth(10)
        .with_element_capacity(250_000);
    let mut index: Quadtree<Entry<usize, f64>> = QuadtreeBuilder::new(area).config(config).build()?;

    let start = Instant::now();
    for i in 0..500 {
        for j in 0..500 {
            let x = -998.0 + i as f64 * 4.0;
            let y = -998.0 + j as f64 * 4.0;
            index.insert(Entry::new(Rectangle::new(x, y, 0.75, 0.75), i * 500 + j));
        }
    }
    println!("  Inserted {} elements in {:?}", index.len(), start.elapsed());
    println!("  {:?}", index.stats());

    let window = Rectangle::new(100.0, -200.0, 40.0, 40.0);
    let start = Instant::now();
    let result = index.query_with_stats(&window);
    println!(
        "  Window query: {} hits in {:?} ({} candidates tested)",
        result.len(),
        start.elapsed(),
        result.stats.candidates_tested
    );

    let mut first = None;
    let _ = index.query_for_each(&window, |entry| {
        first = Some(*entry.payload());
        ControlFlow::Break(())
    });
    println!("  First hit found by early exit: {:?}", first);

    println!("  Limited query: {} of {}", index.query_with_limit(&window, 10).len(), index.count(&window));

    Ok(())
}
