//! Aggregation engine.
//!
//! A session owns the whole log set and the registered counters. The first pass derives one
//! record per line and feeds it to every counter. Counters registered after that pass are
//! backfilled from the same records, so every table always reflects the complete log set.


use crate::counter::CategoryCounter;
use crate::enrichment::user_agent::ClassificationCache;
use crate::record::ParsedRecord;
use crate::report::{CategoryReport, render};

pub struct AnalysisSession {
    lines: Vec<String>,
    cache: ClassificationCache,
    counters: Vec<Box<dyn CategoryCounter>>,
    /// Records derived by the first pass, replayed to late counters.
    records: Vec<ParsedRecord>,
    calculated: bool,
}

impl AnalysisSession {
    pub fn new(lines: Vec<String>, cache: ClassificationCache) -> Self {
        Self {
            lines,
            cache,
            counters: Vec::new(),
            records: Vec::new(),
            calculated: false,
        }
    }

    pub fn with_counters(
        lines: Vec<String>,
        cache: ClassificationCache,
        counters: Vec<Box<dyn CategoryCounter>>,
    ) -> Self {
        Self {
            counters,
            ..Self::new(lines, cache)
        }
    }

    /// Derive every record and feed it to every registered counter.
    ///
    /// Single-shot: a second call counts everything again. Use [`Self::calculate`] unless
    /// that is what you want.
    pub fn run_full_pass(&mut self) {
        tracing::info!(
            lines = self.lines.len(),
            counters = self.counters.len(),
            "starting analysis pass"
        );

        let records: Vec<ParsedRecord> = self
            .lines
            .iter()
            .map(|line| ParsedRecord::derive(line, &self.cache))
            .collect();

        for record in &records {
            for counter in &mut self.counters {
                counter.consume(record);
            }
        }

        self.records = records;
        self.calculated = true;

        tracing::info!(
            distinct_user_agents = self.cache.len(),
            "analysis pass finished"
        );
    }

    /// Run the pass unless it already ran.
    pub fn calculate(&mut self) {
        if !self.calculated {
            self.run_full_pass();
        }
    }

    /// Add a counter. After the first pass the new counter is backfilled with every record
    /// before it joins the list; counters already registered are not touched.
    pub fn register_counter(&mut self, mut counter: Box<dyn CategoryCounter>) {
        if self.calculated {
            tracing::debug!(
                category = counter.category_name(),
                records = self.records.len(),
                "backfilling late counter"
            );
            for record in &self.records {
                counter.consume(record);
            }
        }
        self.counters.push(counter);
    }

    pub fn counters(&self) -> &[Box<dyn CategoryCounter>] {
        &self.counters
    }

    pub fn total_records(&self) -> usize {
        self.lines.len()
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    pub fn cache(&self) -> &ClassificationCache {
        &self.cache
    }

    /// Per-category breakdowns in registration order, running the pass if needed.
    pub fn category_reports(&mut self) -> Vec<CategoryReport> {
        self.calculate();
        let total = self.total_records();

        self.counters
            .iter()
            .map(|c| CategoryReport::new(c.category_name(), c.frequency_table(), total))
            .collect()
    }

    /// Text report for every category, running the pass if needed.
    pub fn report(&mut self) -> String {
        self.calculate();
        let total = self.total_records();

        self.counters
            .iter()
            .map(|c| render(c.frequency_table(), c.category_name(), total))
            .collect()
    }
}
