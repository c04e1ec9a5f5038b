use crate::serializable_struct;
use serde::{Deserialize, Serialize};
use std::fmt;

serializable_struct! {
    HopReport {
        destination: usize,
        from: String,
        to: String,
        distance: f64,
    }
}

serializable_struct! {
    RouteReport {
        hops: Vec<HopReport>,
        total_distance: f64,
        longest_hop: f64,
        indices: Vec<usize>,
        names: Vec<String>,
    }
}

serializable_struct! {
    ProgressReport {
        attempts: u64,
        percent_complete: f64,
        rate: f64,
        skipped: u64,
        successes: u64,
        best_fitness: f64,
    }
}

serializable_struct! {
    RunSummary {
        attempts: u64,
        successes: u64,
        skipped: u64,
        saturated: bool,
        best_fitness: f64,
        elapsed_secs: f64,
        route: RouteReport,
    }
}

impl fmt::Display for HopReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} {} -> {}  ({:.1}ly)",
            self.destination, self.from, self.to, self.distance
        )
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hop in &self.hops {
            writeln!(f, "{}", hop)?;
        }
        writeln!(f)?;
        writeln!(f, "Total distance {:.1} ly", self.total_distance)?;
        writeln!(f, "Longest hop distance {:.1} ly", self.longest_hop)?;
        writeln!(f, "Compact route {:?}", self.indices)?;
        write!(f, "Route names: {}", self.names.join(", "))
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On mutation {} ({:.1}%) at {:.0} tests/s. {} prior mutations skipped, {} successful. Best dist {}",
            self.attempts,
            self.percent_complete,
            self.rate,
            self.skipped,
            self.successes,
            self.best_fitness
        )
    }
}
