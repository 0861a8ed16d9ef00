//! Builds the three sample trees, prints their traversals and levels, then searches and compares
//! them.
//!
//! Set `RUST_LOG=ordered_tree=trace` to see every insertion.

use std::io::{self, Write};

use ordered_tree::{trees_equal, Order, Tree};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();
}

fn main() -> io::Result<()> {
    setup_logging();

    //       8
    //     /   \
    //    5     10
    //   / \   /
    //  1   6 9
    let tree1: Tree<i32> = [8, 5, 10, 1, 6, 9].into_iter().collect();
    let tree2: Tree<i32> = [8, 5, 10, 1, 6, 9].into_iter().collect();

    //       8
    //     /   \
    //    5     10
    //   / \
    //  1   6
    //       \
    //        7
    let tree3: Tree<i32> = [8, 5, 10, 1, 6, 7].into_iter().collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Tree 1 traversals:")?;
    for (label, order) in [
        ("Pre-order", Order::Pre),
        ("In-order", Order::In),
        ("Post-order", Order::Post),
        ("Level-order", Order::Level),
    ] {
        write!(out, "{}: ", label)?;
        tree1.write_order(order, &mut out)?;
    }

    for (name, tree) in [("Tree 1", &tree1), ("Tree 2", &tree2), ("Tree 3", &tree3)] {
        writeln!(out, "\n{}: (height {})", name, tree.height())?;
        tree.write_levels(&mut out)?;
    }

    for (name, tree, target) in [("Tree 1", &tree1, 6), ("Tree 2", &tree2, 13)] {
        let found = if tree.search(&target) { "found" } else { "not found" };
        writeln!(out, "\nNode with value {} in {} {}.", target, name, found)?;
    }

    let yes_no = |equal: bool| if equal { "Yes" } else { "No" };
    writeln!(
        out,
        "\nAre tree1 and tree2 equal? {}",
        yes_no(trees_equal(&tree1, &tree2))
    )?;
    writeln!(
        out,
        "Are tree1 and tree3 equal? {}",
        yes_no(trees_equal(&tree1, &tree3))
    )?;

    Ok(())
}
