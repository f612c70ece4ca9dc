//! Per-field persistence of GM campaign records.

use hearthsheet_domain::{CampaignId, CampaignRecord};

use super::field_store::FieldStore;
use crate::ports::outbound::{storage_keys, StorageProvider};

const METADATA: &str = "metadata";
const NPCS: &str = "npcs";
const SESSION_NOTES: &str = "sessionNotes";

#[derive(Clone)]
pub struct CampaignPersistence<S: StorageProvider> {
    fields: FieldStore<S>,
    prefix: String,
}

impl<S: StorageProvider> CampaignPersistence<S> {
    pub fn new(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            fields: FieldStore::new(storage),
            prefix: prefix.into(),
        }
    }

    fn key(&self, id: CampaignId, field: &str) -> String {
        storage_keys::campaign_field(&self.prefix, id, field)
    }

    pub fn load(&self, id: CampaignId) -> CampaignRecord {
        let d = CampaignRecord::default();
        CampaignRecord {
            metadata: self.fields.read(&self.key(id, METADATA), d.metadata),
            npcs: self.fields.read(&self.key(id, NPCS), d.npcs),
            session_notes: self
                .fields
                .read(&self.key(id, SESSION_NOTES), d.session_notes),
        }
    }

    pub fn save(&self, id: CampaignId, record: &CampaignRecord) {
        self.fields.write(&self.key(id, METADATA), &record.metadata);
        self.fields.write(&self.key(id, NPCS), &record.npcs);
        self.fields
            .write(&self.key(id, SESSION_NOTES), &record.session_notes);
    }
}
