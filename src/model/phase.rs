use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::model::dilemma::Language;

/// Career tier, derived from how far the player has progressed through
/// the catalog. Flavor only (music, labels); it never gates logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intern,
    Junior,
    Supervisor,
    Manager,
    Magnate,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Intern,
        Phase::Junior,
        Phase::Supervisor,
        Phase::Manager,
        Phase::Magnate,
    ];

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Phase::Intern, Language::Es) => "Becario",
            (Phase::Intern, Language::En) => "Intern",
            (Phase::Junior, _) => "Junior",
            (Phase::Supervisor, _) => "Supervisor",
            (Phase::Manager, Language::Es) => "Gerente",
            (Phase::Manager, Language::En) => "Manager",
            (Phase::Magnate, Language::Es) => "Magnate",
            (Phase::Magnate, Language::En) => "Magnate",
        }
    }
}

/// Partition of the catalog range into contiguous ascending bands, one
/// per phase. Band boundaries are configuration, and correctness never
/// influences the phase, only how far the player has come.
#[derive(Debug, Clone)]
pub struct PhaseSchedule {
    bands: Vec<(usize, Phase)>,
}

impl PhaseSchedule {
    /// Builds a schedule from each band's first position. Starts must be
    /// ascending and the first band must cover position 0.
    pub fn from_starts(bands: Vec<(usize, Phase)>) -> anyhow::Result<Self> {
        match bands.first() {
            None => bail!("phase schedule needs at least one band"),
            Some(&(start, _)) if start != 0 => {
                bail!("first phase band must start at position 0, not {start}")
            }
            Some(_) => {}
        }
        for pair in bands.windows(2) {
            if pair[1].0 < pair[0].0 {
                bail!("phase bands must be in ascending order");
            }
        }
        Ok(Self { bands })
    }

    /// Default configuration: spread the catalog evenly over all phases,
    /// earlier phases absorbing the remainder.
    pub fn even_split(catalog_len: usize) -> Self {
        let base = catalog_len / Phase::ALL.len();
        let remainder = catalog_len % Phase::ALL.len();
        let mut bands = Vec::with_capacity(Phase::ALL.len());
        let mut start = 0;
        for (index, phase) in Phase::ALL.into_iter().enumerate() {
            bands.push((start, phase));
            start += base + usize::from(index < remainder);
        }
        Self { bands }
    }

    /// Pure and total: every position maps to a phase, and anything at or
    /// past the last band start (including positions past the catalog
    /// end) maps to the terminal phase.
    pub fn resolve(&self, position: usize) -> Phase {
        let mut current = self.bands[0].1;
        for &(start, phase) in &self.bands {
            if position >= start {
                current = phase;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split_partitions_the_whole_catalog() {
        let schedule = PhaseSchedule::even_split(10);
        let expected = [
            Phase::Intern,
            Phase::Intern,
            Phase::Junior,
            Phase::Junior,
            Phase::Supervisor,
            Phase::Supervisor,
            Phase::Manager,
            Phase::Manager,
            Phase::Magnate,
            Phase::Magnate,
        ];
        for (position, phase) in expected.into_iter().enumerate() {
            assert_eq!(schedule.resolve(position), phase, "position {position}");
        }
    }

    #[test]
    fn remainder_goes_to_the_earlier_phases() {
        // 13 = 3 + 3 + 3 + 2 + 2
        let schedule = PhaseSchedule::even_split(13);
        assert_eq!(schedule.resolve(2), Phase::Intern);
        assert_eq!(schedule.resolve(3), Phase::Junior);
        assert_eq!(schedule.resolve(8), Phase::Supervisor);
        assert_eq!(schedule.resolve(9), Phase::Manager);
        assert_eq!(schedule.resolve(11), Phase::Magnate);
        assert_eq!(schedule.resolve(12), Phase::Magnate);
    }

    #[test]
    fn tiny_catalogs_skip_the_later_bands() {
        let schedule = PhaseSchedule::even_split(3);
        assert_eq!(schedule.resolve(0), Phase::Intern);
        assert_eq!(schedule.resolve(1), Phase::Junior);
        assert_eq!(schedule.resolve(2), Phase::Supervisor);
    }

    #[test]
    fn resolve_is_total_and_monotonic() {
        let schedule = PhaseSchedule::even_split(7);
        let mut previous = schedule.resolve(0);
        for position in 1..20 {
            let phase = schedule.resolve(position);
            assert!(phase >= previous, "phase regressed at {position}");
            previous = phase;
        }
    }

    #[test]
    fn positions_past_the_catalog_map_to_the_terminal_phase() {
        let schedule = PhaseSchedule::even_split(10);
        assert_eq!(schedule.resolve(10), Phase::Magnate);
        assert_eq!(schedule.resolve(500), Phase::Magnate);
    }

    #[test]
    fn custom_bands_resolve_by_position_only() {
        let schedule = PhaseSchedule::from_starts(vec![
            (0, Phase::Intern),
            (1, Phase::Junior),
        ])
        .unwrap();
        assert_eq!(schedule.resolve(0), Phase::Intern);
        assert_eq!(schedule.resolve(1), Phase::Junior);
        assert_eq!(schedule.resolve(2), Phase::Junior);
    }

    #[test]
    fn bad_band_configurations_are_rejected() {
        assert!(PhaseSchedule::from_starts(Vec::new()).is_err());
        assert!(PhaseSchedule::from_starts(vec![(2, Phase::Intern)]).is_err());
        assert!(PhaseSchedule::from_starts(vec![
            (0, Phase::Intern),
            (5, Phase::Junior),
            (3, Phase::Supervisor),
        ])
        .is_err());
    }
}
