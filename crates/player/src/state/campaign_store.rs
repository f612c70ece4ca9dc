//! GM campaign store with write-through persistence.

use hearthsheet_domain::campaign::SessionNote;
use hearthsheet_domain::{CampaignId, CampaignMetadata, CampaignRecord, Npc, NpcId, SessionNoteId};

use crate::infrastructure::persistence::CampaignPersistence;
use crate::ports::outbound::{StorageProvider, TimeProvider};

/// Holds one campaign record. Every successful mutation is saved before the
/// call returns.
pub struct CampaignStore<S: StorageProvider, T: TimeProvider> {
    id: CampaignId,
    record: CampaignRecord,
    persistence: CampaignPersistence<S>,
    clock: T,
}

impl<S: StorageProvider, T: TimeProvider> CampaignStore<S, T> {
    /// Hydrate the campaign from storage. Unreadable fields start from
    /// their defaults without affecting the others.
    pub fn open(id: CampaignId, storage: S, key_prefix: impl Into<String>, clock: T) -> Self {
        let persistence = CampaignPersistence::new(storage, key_prefix);
        let record = persistence.load(id);
        tracing::info!(
            campaign = %id,
            npcs = record.npcs.len(),
            notes = record.session_notes.len(),
            "Opened campaign store"
        );
        Self {
            id,
            record,
            persistence,
            clock,
        }
    }

    pub fn id(&self) -> CampaignId {
        self.id
    }

    pub fn record(&self) -> &CampaignRecord {
        &self.record
    }

    fn commit(&self, op: &'static str, changed: bool) -> bool {
        if changed {
            self.persistence.save(self.id, &self.record);
        } else {
            tracing::debug!(campaign = %self.id, op, "Campaign unchanged");
        }
        changed
    }

    pub fn update_metadata(&mut self, patch: impl FnOnce(&mut CampaignMetadata)) -> bool {
        let before = self.record.metadata.clone();
        patch(&mut self.record.metadata);
        let changed = self.record.metadata != before;
        self.commit("update_metadata", changed)
    }

    pub fn add_npc(&mut self, name: &str) -> Option<NpcId> {
        let id = self.record.add_npc(Npc::new(name.trim()));
        self.commit("add_npc", id.is_some());
        id
    }

    pub fn update_npc(&mut self, id: NpcId, patch: impl FnOnce(&mut Npc)) -> bool {
        let changed = self.record.update_npc(id, patch);
        self.commit("update_npc", changed)
    }

    pub fn remove_npc(&mut self, id: NpcId) -> bool {
        let changed = self.record.remove_npc(id);
        self.commit("remove_npc", changed)
    }

    /// Start a note for the current session, stamped with the store's clock.
    pub fn add_session_note(&mut self, title: &str, body: &str) -> SessionNoteId {
        let now = self.clock.now_utc();
        let id = self.record.add_session_note(title, body, now);
        self.commit("add_session_note", true);
        id
    }

    pub fn update_session_note(
        &mut self,
        id: SessionNoteId,
        patch: impl FnOnce(&mut SessionNote),
    ) -> bool {
        let now = self.clock.now_utc();
        let changed = self.record.update_session_note(id, patch, now);
        self.commit("update_session_note", changed)
    }

    pub fn remove_session_note(&mut self, id: SessionNoteId) -> bool {
        let changed = self.record.remove_session_note(id);
        self.commit("remove_session_note", changed)
    }

    pub fn notes_for_session(&self, session_number: u32) -> Vec<&SessionNote> {
        self.record.notes_for_session(session_number)
    }
}
