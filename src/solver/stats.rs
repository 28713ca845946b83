use std::collections::HashMap;
use std::time::Duration;

use prettytable::{Cell, Row, Table};

use crate::solver::module::ModuleDescriptor;

/// Work attributed to one module across a solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerModuleStats {
    pub checks: u64,
    pub violations: u64,
    pub time_spent_micros: u64,
}

/// Counters collected while solving. The underclued meta-solver threads one
/// `SearchStats` through all of its sub-solves, so counters accumulate.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Search-tree nodes visited (one per branching cell).
    pub nodes: u64,
    /// Branches rejected by validation or exhausted by recursion.
    pub backtracks: u64,
    /// Incremental checks skipped thanks to a watch mask.
    pub skips: u64,
    /// Full core searches run (more than one only in underclued mode).
    pub solves: u64,
    pub module_stats: HashMap<usize, PerModuleStats>,
}

impl SearchStats {
    pub fn record_check(&mut self, module_id: usize, elapsed: Duration) {
        let entry = self.module_stats.entry(module_id).or_default();
        entry.checks += 1;
        entry.time_spent_micros += elapsed.as_micros() as u64;
    }

    pub fn record_violation(&mut self, module_id: usize) {
        self.module_stats.entry(module_id).or_default().violations += 1;
    }
}

/// Renders per-module counters as a table, slowest module last.
pub fn render_stats_table(stats: &SearchStats, descriptors: &[ModuleDescriptor]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Module"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Violations"),
        Cell::new("Time / Check (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&usize, &PerModuleStats)> = stats.module_stats.iter().collect();
    sorted_stats.sort_by_key(|(_, module_stats)| module_stats.time_spent_micros);

    for (module_id, module_stats) in sorted_stats {
        let descriptor = &descriptors[*module_id];
        let avg_time = if module_stats.checks > 0 {
            module_stats.time_spent_micros as f64 / module_stats.checks as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&module_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&module_stats.checks.to_string()),
            Cell::new(&module_stats.violations.to_string()),
            Cell::new(&format!("{avg_time:.2}")),
            Cell::new(&format!(
                "{:.2}",
                module_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
