//! @acp:module "Planner Policy"
//! @acp:summary "Target section count and display-order ranking"
//! @acp:domain planner
//! @acp:layer logic

use super::profile::Tone;
use super::types::CountRange;

impl CountRange {
    /// Number of sections a page should hold at the given tone.
    ///
    /// Low tone asks for the minimum, high tone for the maximum and medium for
    /// the floor of the midpoint, so the target never decreases as tone rises.
    pub fn target(&self, tone: Tone) -> usize {
        match tone {
            Tone::Low => self.min,
            Tone::Medium => self.min + self.max.saturating_sub(self.min) / 2,
            Tone::High => self.max,
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Display rank of a section: listed ids by their position in the preferred
/// order, unlisted ids after all of them by catalog position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Listed(usize),
    Unlisted(usize),
}

pub fn rank(id: &str, preferred_order: &[String], catalog_index: usize) -> Rank {
    match preferred_order.iter().position(|p| p == id) {
        Some(pos) => Rank::Listed(pos),
        None => Rank::Unlisted(catalog_index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_by_tone() {
        let range = CountRange { min: 5, max: 9 };
        assert_eq!(range.target(Tone::Low), 5);
        assert_eq!(range.target(Tone::Medium), 7);
        assert_eq!(range.target(Tone::High), 9);
    }

    #[test]
    fn test_medium_target_floors_midpoint() {
        let range = CountRange { min: 4, max: 7 };
        assert_eq!(range.target(Tone::Medium), 5);

        let fixed = CountRange { min: 3, max: 3 };
        for tone in Tone::ALL {
            assert_eq!(fixed.target(tone), 3);
        }
    }

    #[test]
    fn test_target_is_monotonic() {
        for (min, max) in [(0, 0), (1, 10), (3, 4), (6, 10)] {
            let range = CountRange { min, max };
            assert!(range.target(Tone::Low) <= range.target(Tone::Medium));
            assert!(range.target(Tone::Medium) <= range.target(Tone::High));
            assert!(range.contains(range.target(Tone::Medium)));
        }
    }

    #[test]
    fn test_unlisted_ids_rank_last_in_catalog_order() {
        let order = vec!["hero".to_string(), "cta".to_string()];
        let hero = rank("hero", &order, 5);
        let cta = rank("cta", &order, 0);
        let faq = rank("faq", &order, 1);
        let team = rank("team", &order, 3);

        assert!(hero < cta);
        assert!(cta < faq);
        assert!(faq < team);
    }
}
