//! Loadout manager - active and vault card collections.
//!
//! The two collections stay disjoint and within their limits. A move into a
//! full collection becomes a pending swap that the next target selection
//! completes. Every mutation emits the full selection to `on_change`.

use std::fmt;

use hearthsheet_domain::character::{LoadoutMode, LoadoutRules, LoadoutSelection};
use hearthsheet_domain::game_data::DomainCard;

/// Collection a pending swap started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSource {
    Active,
    Vault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSwap {
    pub source: SwapSource,
    pub card_name: String,
}

/// Result of a UI-level move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    Moved,
    /// Destination full; waiting for a swap target.
    SwapPending,
    Ignored,
}

type ChangeListener = Box<dyn FnMut(&LoadoutSelection)>;

pub struct LoadoutManager {
    selection: LoadoutSelection,
    rules: LoadoutRules,
    pending_swap: Option<PendingSwap>,
    on_change: ChangeListener,
}

impl fmt::Debug for LoadoutManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadoutManager")
            .field("selection", &self.selection)
            .field("rules", &self.rules)
            .field("pending_swap", &self.pending_swap)
            .finish_non_exhaustive()
    }
}

fn position(cards: &[DomainCard], name: &str) -> Option<usize> {
    cards.iter().position(|card| card.name == name)
}

impl LoadoutManager {
    /// Hydrate from a persisted selection.
    pub fn new(
        selection: LoadoutSelection,
        rules: LoadoutRules,
        on_change: impl FnMut(&LoadoutSelection) + 'static,
    ) -> Self {
        Self {
            selection,
            rules,
            pending_swap: None,
            on_change: Box::new(on_change),
        }
    }

    pub fn selection(&self) -> &LoadoutSelection {
        &self.selection
    }

    pub fn rules(&self) -> &LoadoutRules {
        &self.rules
    }

    pub fn pending_swap(&self) -> Option<&PendingSwap> {
        self.pending_swap.as_ref()
    }

    pub fn active_is_full(&self) -> bool {
        !self.rules.active_has_room(self.selection.active_cards.len())
    }

    pub fn vault_is_full(&self) -> bool {
        !self.rules.vault_has_room(self.selection.vault_cards.len())
    }

    fn emit(&mut self) {
        (self.on_change)(&self.selection);
    }

    // =========================================================================
    // Toggles and direct moves
    // =========================================================================

    /// Remove the card from active if present, else add it when there is room.
    /// A card held in the vault is left alone.
    pub fn toggle_active(&mut self, card: &DomainCard) -> bool {
        if let Some(pos) = position(&self.selection.active_cards, &card.name) {
            self.selection.active_cards.remove(pos);
        } else if self.selection.is_in_vault(&card.name) || self.active_is_full() {
            tracing::debug!(card = %card.name, "Active toggle ignored");
            return false;
        } else {
            self.selection.active_cards.push(card.clone());
        }
        self.emit();
        true
    }

    /// Vault counterpart of [`toggle_active`](Self::toggle_active).
    pub fn toggle_vault(&mut self, card: &DomainCard) -> bool {
        if let Some(pos) = position(&self.selection.vault_cards, &card.name) {
            self.selection.vault_cards.remove(pos);
        } else if self.selection.is_active(&card.name) || self.vault_is_full() {
            tracing::debug!(card = %card.name, "Vault toggle ignored");
            return false;
        } else {
            self.selection.vault_cards.push(card.clone());
        }
        self.emit();
        true
    }

    pub fn move_to_vault(&mut self, card_name: &str) -> bool {
        if self.vault_is_full() {
            return false;
        }
        let Some(pos) = position(&self.selection.active_cards, card_name) else {
            return false;
        };
        let card = self.selection.active_cards.remove(pos);
        self.selection.vault_cards.push(card);
        self.emit();
        true
    }

    pub fn move_to_active(&mut self, card_name: &str) -> bool {
        if self.active_is_full() {
            return false;
        }
        let Some(pos) = position(&self.selection.vault_cards, card_name) else {
            return false;
        };
        let card = self.selection.vault_cards.remove(pos);
        self.selection.active_cards.push(card);
        self.emit();
        true
    }

    /// Exchange one active card with one vault card. Works on full collections.
    pub fn swap_cards(&mut self, active_name: &str, vault_name: &str) -> bool {
        let (Some(a), Some(v)) = (
            position(&self.selection.active_cards, active_name),
            position(&self.selection.vault_cards, vault_name),
        ) else {
            return false;
        };
        let leaving_active = self.selection.active_cards.remove(a);
        let leaving_vault = self.selection.vault_cards.remove(v);
        self.selection.active_cards.push(leaving_vault);
        self.selection.vault_cards.push(leaving_active);
        self.emit();
        true
    }

    // =========================================================================
    // Swap protocol
    // =========================================================================

    pub fn request_move_to_vault(&mut self, card_name: &str) -> MoveRequest {
        self.request_move(SwapSource::Active, card_name)
    }

    pub fn request_move_to_active(&mut self, card_name: &str) -> MoveRequest {
        self.request_move(SwapSource::Vault, card_name)
    }

    fn request_move(&mut self, source: SwapSource, card_name: &str) -> MoveRequest {
        let (present, destination_full) = match source {
            SwapSource::Active => (self.selection.is_active(card_name), self.vault_is_full()),
            SwapSource::Vault => (self.selection.is_in_vault(card_name), self.active_is_full()),
        };
        if !present {
            return MoveRequest::Ignored;
        }
        if !destination_full {
            self.pending_swap = None;
            let moved = match source {
                SwapSource::Active => self.move_to_vault(card_name),
                SwapSource::Vault => self.move_to_active(card_name),
            };
            return if moved {
                MoveRequest::Moved
            } else {
                MoveRequest::Ignored
            };
        }
        self.pending_swap = Some(PendingSwap {
            source,
            card_name: card_name.to_string(),
        });
        MoveRequest::SwapPending
    }

    /// Complete the pending swap with a card from the other collection.
    pub fn select_swap_target(&mut self, target_name: &str) -> bool {
        let Some(pending) = self.pending_swap.clone() else {
            return false;
        };
        let swapped = match pending.source {
            SwapSource::Active => self.swap_cards(&pending.card_name, target_name),
            SwapSource::Vault => self.swap_cards(target_name, &pending.card_name),
        };
        if swapped {
            self.pending_swap = None;
        }
        swapped
    }

    pub fn cancel_swap(&mut self) -> bool {
        self.pending_swap.take().is_some()
    }

    // =========================================================================
    // Removal, homebrew, mode
    // =========================================================================

    /// Remove a card from whichever collection holds it.
    pub fn remove_card(&mut self, card_name: &str) -> bool {
        let before = self.selection.active_cards.len() + self.selection.vault_cards.len();
        self.selection.active_cards.retain(|c| c.name != card_name);
        self.selection.vault_cards.retain(|c| c.name != card_name);
        if self.selection.active_cards.len() + self.selection.vault_cards.len() == before {
            return false;
        }
        if self
            .pending_swap
            .as_ref()
            .is_some_and(|p| p.card_name == card_name)
        {
            self.pending_swap = None;
        }
        self.emit();
        true
    }

    /// Add a user-authored card. Blank or duplicate names are rejected.
    pub fn add_homebrew_card(&mut self, card: DomainCard) -> bool {
        let name = card.name.trim().to_string();
        if name.is_empty() || self.selection.homebrew_cards.iter().any(|c| c.name == name) {
            return false;
        }
        let card = DomainCard { name, ..card };
        self.selection.homebrew_cards.push(card);
        self.emit();
        true
    }

    /// Delete a homebrew card, also taking it out of active and vault.
    pub fn remove_homebrew_card(&mut self, card_name: &str) -> bool {
        let Some(pos) = position(&self.selection.homebrew_cards, card_name) else {
            return false;
        };
        self.selection.homebrew_cards.remove(pos);
        self.selection.active_cards.retain(|c| c.name != card_name);
        self.selection.vault_cards.retain(|c| c.name != card_name);
        if self
            .pending_swap
            .as_ref()
            .is_some_and(|p| p.card_name == card_name)
        {
            self.pending_swap = None;
        }
        self.emit();
        true
    }

    pub fn set_mode(&mut self, mode: LoadoutMode) -> bool {
        if self.selection.mode == mode {
            return false;
        }
        self.selection.mode = mode;
        self.emit();
        true
    }
}
