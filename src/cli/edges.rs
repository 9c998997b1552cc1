//! Edge subcommands for inspecting and mutating the edge list

use clap::Subcommand;

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// List all edges in file order
    List,

    /// Insert a directed edge and, by default, its mirror
    Add {
        /// Start vertex
        from: String,

        /// End vertex
        to: String,

        /// Traversal cost
        #[arg(long, default_value_t = 1.0)]
        cost: f64,

        /// Insert only from -> to, without the mirror edge
        #[arg(long)]
        one_way: bool,
    },

    /// Remove an edge and, by default, its mirror
    Remove {
        /// Start vertex
        from: String,

        /// End vertex
        to: String,

        /// Remove only from -> to, leaving any mirror edge in place
        #[arg(long)]
        one_way: bool,
    },
}
