//! Class and subclass selection flow.

use hearthsheet_domain::character::{ClassDraft, Companion};
use hearthsheet_domain::game_data::{GameClass, Subclass};
use hearthsheet_domain::GameData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassStep {
    #[default]
    SelectClass,
    SelectSubclass,
    Review,
}

pub struct ClassSelectionWizard<'a> {
    data: &'a dyn GameData,
    step: ClassStep,
    class: Option<&'a GameClass>,
    subclass: Option<&'a Subclass>,
}

impl<'a> ClassSelectionWizard<'a> {
    pub fn new(data: &'a dyn GameData) -> Self {
        Self {
            data,
            step: ClassStep::SelectClass,
            class: None,
            subclass: None,
        }
    }

    pub fn step(&self) -> ClassStep {
        self.step
    }

    pub fn class(&self) -> Option<&'a GameClass> {
        self.class
    }

    pub fn subclass(&self) -> Option<&'a Subclass> {
        self.subclass
    }

    /// Subclasses offered for the chosen class.
    pub fn subclass_options(&self) -> Vec<&'a Subclass> {
        match self.class {
            Some(class) => self.data.subclasses_for(&class.name),
            None => Vec::new(),
        }
    }

    /// Choose a class. A different class discards the subclass picked for
    /// the previous one.
    pub fn select_class(&mut self, name: &str) -> bool {
        if self.step != ClassStep::SelectClass {
            return false;
        }
        let Some(class) = self.data.class(name) else {
            tracing::debug!(class = name, "Unknown class");
            return false;
        };
        if self.class.map(|c| c.name.as_str()) != Some(class.name.as_str()) {
            self.subclass = None;
        }
        self.class = Some(class);
        self.step = ClassStep::SelectSubclass;
        true
    }

    pub fn select_subclass(&mut self, name: &str) -> bool {
        if self.step != ClassStep::SelectSubclass {
            return false;
        }
        let Some(class) = self.class else {
            return false;
        };
        let Some(subclass) = self.data.subclass(&class.name, name) else {
            tracing::debug!(class = %class.name, subclass = name, "Subclass not offered");
            return false;
        };
        self.subclass = Some(subclass);
        self.step = ClassStep::Review;
        true
    }

    /// Step back, dropping the choice made on the step being returned to.
    pub fn back(&mut self) -> bool {
        match self.step {
            ClassStep::SelectClass => return false,
            ClassStep::SelectSubclass => {
                self.class = None;
                self.subclass = None;
                self.step = ClassStep::SelectClass;
            }
            ClassStep::Review => {
                self.subclass = None;
                self.step = ClassStep::SelectSubclass;
            }
        }
        true
    }

    /// Build the draft from the reviewed choice and reset the wizard.
    pub fn confirm(&mut self) -> Option<ClassDraft> {
        if self.step != ClassStep::Review {
            return None;
        }
        let (class, subclass) = (self.class?, self.subclass?);
        let draft = ClassDraft {
            class_name: Some(class.name.clone()),
            subclass_name: Some(subclass.name.clone()),
            domains: class.domains.clone(),
            companion: subclass.companion.as_ref().map(Companion::from_spec),
        };
        self.reset();
        Some(draft)
    }

    pub fn reset(&mut self) {
        self.step = ClassStep::SelectClass;
        self.class = None;
        self.subclass = None;
    }
}
