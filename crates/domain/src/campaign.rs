//! GM-facing campaign data: metadata, NPCs, and session notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{NpcId, SessionNoteId};

/// Campaign-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignMetadata {
    pub name: String,
    pub description: String,
    pub setting: String,
    pub current_session: u32,
}

/// A non-player character tracked by the GM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
}

impl Npc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NpcId::new(),
            name: name.into(),
            role: String::new(),
            description: String::new(),
            notes: String::new(),
        }
    }
}

/// Notes for one play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionNote {
    pub id: SessionNoteId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub session_number: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// All persisted fields of one campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub metadata: CampaignMetadata,
    pub npcs: Vec<Npc>,
    pub session_notes: Vec<SessionNote>,
}

impl CampaignRecord {
    /// Add an NPC. Blank names are ignored.
    pub fn add_npc(&mut self, npc: Npc) -> Option<NpcId> {
        if npc.name.trim().is_empty() {
            return None;
        }
        let id = npc.id;
        self.npcs.push(npc);
        Some(id)
    }

    pub fn update_npc(&mut self, id: NpcId, patch: impl FnOnce(&mut Npc)) -> bool {
        match self.npcs.iter_mut().find(|n| n.id == id) {
            Some(npc) => {
                patch(npc);
                npc.id = id;
                true
            }
            None => false,
        }
    }

    pub fn remove_npc(&mut self, id: NpcId) -> bool {
        let before = self.npcs.len();
        self.npcs.retain(|n| n.id != id);
        self.npcs.len() != before
    }

    /// Start a note for the current session.
    pub fn add_session_note(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> SessionNoteId {
        let note = SessionNote {
            id: SessionNoteId::new(),
            title: title.into(),
            body: body.into(),
            session_number: self.metadata.current_session,
            created_at: now,
            updated_at: now,
        };
        let id = note.id;
        self.session_notes.push(note);
        id
    }

    pub fn update_session_note(
        &mut self,
        id: SessionNoteId,
        patch: impl FnOnce(&mut SessionNote),
        now: DateTime<Utc>,
    ) -> bool {
        match self.session_notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                let created_at = note.created_at;
                patch(note);
                note.id = id;
                note.created_at = created_at;
                note.updated_at = now;
                true
            }
            None => false,
        }
    }

    pub fn remove_session_note(&mut self, id: SessionNoteId) -> bool {
        let before = self.session_notes.len();
        self.session_notes.retain(|n| n.id != id);
        self.session_notes.len() != before
    }

    /// Notes of one session, oldest first.
    pub fn notes_for_session(&self, session_number: u32) -> Vec<&SessionNote> {
        let mut notes: Vec<&SessionNote> = self
            .session_notes
            .iter()
            .filter(|n| n.session_number == session_number)
            .collect();
        notes.sort_by_key(|n| n.created_at);
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn npc_lifecycle() {
        let mut campaign = CampaignRecord::default();
        assert!(campaign.add_npc(Npc::new("   ")).is_none());

        let id = campaign.add_npc(Npc::new("Marlowe")).expect("named npc");
        assert!(campaign.update_npc(id, |npc| npc.role = "Innkeeper".to_string()));
        assert_eq!(campaign.npcs[0].role, "Innkeeper");
        assert!(campaign.remove_npc(id));
        assert!(!campaign.update_npc(id, |_| {}));
    }

    #[test]
    fn session_note_update_keeps_creation_time() {
        let mut campaign = CampaignRecord::default();
        campaign.metadata.current_session = 3;
        let id = campaign.add_session_note("Opening", "The caravan arrives", at(10));

        assert!(campaign.update_session_note(
            id,
            |note| {
                note.body = "The caravan burns".to_string();
                note.created_at = at(1);
            },
            at(12),
        ));

        let note = &campaign.session_notes[0];
        assert_eq!(note.session_number, 3);
        assert_eq!(note.created_at, at(10));
        assert_eq!(note.updated_at, at(12));
        assert_eq!(campaign.notes_for_session(3).len(), 1);
        assert!(campaign.notes_for_session(2).is_empty());
    }
}
