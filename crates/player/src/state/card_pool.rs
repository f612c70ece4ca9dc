//! Selectable card pool for the loadout browser.

use hearthsheet_domain::character::LoadoutMode;
use hearthsheet_domain::game_data::DomainCard;
use hearthsheet_domain::GameData;

/// Browser filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub mode: LoadoutMode,
    pub class_domains: Vec<String>,
    /// Domains ticked in the filter bar. Empty means "no preference".
    pub selected_domains: Vec<String>,
    pub max_level: u8,
}

impl CardFilter {
    pub fn new(mode: LoadoutMode, class_domains: Vec<String>, max_level: u8) -> Self {
        Self {
            mode,
            class_domains,
            selected_domains: Vec::new(),
            max_level,
        }
    }

    /// Toggle a domain in the filter bar.
    pub fn toggle_domain(&mut self, domain: &str) {
        if let Some(pos) = self
            .selected_domains
            .iter()
            .position(|d| d.eq_ignore_ascii_case(domain))
        {
            self.selected_domains.remove(pos);
        } else {
            self.selected_domains.push(domain.to_string());
        }
    }
}

pub struct CardPool<'a> {
    data: &'a dyn GameData,
}

impl<'a> CardPool<'a> {
    pub fn new(data: &'a dyn GameData) -> Self {
        Self { data }
    }

    /// Domains the filter resolves to for the current mode.
    ///
    /// `ClassDomains` keeps only selected class domains, or every class domain
    /// when none of the selection applies. `AllDomains` uses the selection, or
    /// every known domain when nothing is selected. `Homebrew` browses nothing.
    pub fn effective_domains(&self, filter: &CardFilter) -> Vec<String> {
        match filter.mode {
            LoadoutMode::ClassDomains => {
                let chosen: Vec<String> = filter
                    .selected_domains
                    .iter()
                    .filter(|d| {
                        filter
                            .class_domains
                            .iter()
                            .any(|c| c.eq_ignore_ascii_case(d))
                    })
                    .cloned()
                    .collect();
                if chosen.is_empty() {
                    filter.class_domains.clone()
                } else {
                    chosen
                }
            }
            LoadoutMode::AllDomains => {
                if filter.selected_domains.is_empty() {
                    self.data.known_domains()
                } else {
                    filter.selected_domains.clone()
                }
            }
            LoadoutMode::Homebrew => Vec::new(),
        }
    }

    /// Official cards plus matching homebrew cards, ascending by level.
    pub fn selectable(&self, homebrew: &[DomainCard], filter: &CardFilter) -> Vec<DomainCard> {
        if !filter.mode.browses_cards() {
            return Vec::new();
        }
        let domains = self.effective_domains(filter);
        let matches = |card: &&DomainCard| {
            card.level <= filter.max_level && domains.iter().any(|d| card.in_domain(d))
        };

        let mut pool: Vec<DomainCard> = self
            .data
            .domain_cards()
            .iter()
            .filter(matches)
            .chain(homebrew.iter().filter(matches))
            .cloned()
            .collect();
        pool.sort_by_key(|card| card.level);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;

    fn names(cards: &[DomainCard]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    fn druid_filter(max_level: u8) -> CardFilter {
        CardFilter::new(
            LoadoutMode::ClassDomains,
            vec!["Sage".into(), "Arcana".into()],
            max_level,
        )
    }

    #[test]
    fn class_domains_limit_the_pool() {
        let data = fixtures::game_data();
        let pool = CardPool::new(&data).selectable(&[], &druid_filter(2));
        assert_eq!(
            names(&pool),
            vec![
                "Gifted Tracker",
                "Nature's Tongue",
                "Rune Ward",
                "Conjured Steeds",
                "Cinder Grasp"
            ]
        );
    }

    #[test]
    fn selected_filters_narrow_class_domains() {
        let data = fixtures::game_data();
        let mut filter = druid_filter(3);
        filter.toggle_domain("arcana");
        filter.toggle_domain("Bone");
        let pool = CardPool::new(&data).selectable(&[], &filter);
        assert!(pool.iter().all(|c| c.domain == "Arcana"));
        assert_eq!(pool.len(), 3);

        filter.toggle_domain("ARCANA");
        assert_eq!(filter.selected_domains, vec!["Bone"]);
        // only non-class domains selected: fall back to the class domains
        let pool = CardPool::new(&data).selectable(&[], &filter);
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn all_domains_opens_every_domain() {
        let data = fixtures::game_data();
        let mut filter = druid_filter(1);
        filter.mode = LoadoutMode::AllDomains;
        let pool = CardPool::new(&data).selectable(&[], &filter);
        assert_eq!(pool.len(), 5);

        filter.toggle_domain("Codex");
        let pool = CardPool::new(&data).selectable(&[], &filter);
        assert_eq!(names(&pool), vec!["Book of Ava"]);
    }

    #[test]
    fn homebrew_joins_and_sorts_by_level() {
        let data = fixtures::game_data();
        let homebrew = vec![
            DomainCard::new("Thorn Lash", 1, "Sage"),
            DomainCard::new("Tidecall", 1, "Midnight"),
            DomainCard::new("Bramble Crown", 9, "Sage"),
        ];
        let pool = CardPool::new(&data).selectable(&homebrew, &druid_filter(2));
        assert_eq!(pool.len(), 6);
        assert_eq!(pool[3].name, "Thorn Lash");
        assert!(pool.windows(2).all(|w| w[0].level <= w[1].level));
    }

    #[test]
    fn homebrew_mode_browses_nothing() {
        let data = fixtures::game_data();
        let mut filter = druid_filter(10);
        filter.mode = LoadoutMode::Homebrew;
        let homebrew = vec![DomainCard::new("Thorn Lash", 1, "Sage")];
        assert!(CardPool::new(&data).selectable(&homebrew, &filter).is_empty());
    }
}
