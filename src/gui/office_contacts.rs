use std::sync::Arc;

use crate::api::persons::get_person_contacts;
use crate::loader::MountContext;
use crate::models::{OfficeContact, OfficeContactType};
use crate::panel::{Panel, PanelState};

use super::show_placeholder;

/// Rendered form of one office contact. Absent or blank values produce no line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub header: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub kind: OfficeContactType,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl From<&OfficeContact> for ContactCard {
    fn from(contact: &OfficeContact) -> Self {
        Self {
            header: present(&contact.city).map(|city| format!("{} office", city)),
            phone: present(&contact.phone).map(str::to_string),
            fax: present(&contact.fax).map(str::to_string),
            kind: contact.kind,
        }
    }
}

impl ContactCard {
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            OfficeContactType::CentralOffice => "Central office",
            OfficeContactType::DistrictOffice => "District office",
            OfficeContactType::Other => "Office",
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                if let Some(header) = &self.header {
                    ui.strong(header);
                }
                ui.weak(self.kind_label());
                if let Some(phone) = &self.phone {
                    ui.label(format!("Phone: {}", phone));
                }
                if let Some(fax) = &self.fax {
                    ui.label(format!("Fax: {}", fax));
                }
            });
        });
    }
}

/// Offices of one person, loaded from `/api/persons/{id}/contacts`.
pub struct OfficeContactsPanel {
    person_id: String,
    panel: Panel<Vec<OfficeContact>>,
}

impl OfficeContactsPanel {
    pub fn new(person_id: impl Into<String>) -> Self {
        let person_id = person_id.into();
        Self {
            panel: Panel::new(format!("contacts for {}", person_id)),
            person_id,
        }
    }

    pub fn state(&self) -> &PanelState<Vec<OfficeContact>> {
        self.panel.state()
    }

    pub fn mount(&mut self, ctx: &MountContext) {
        if self.panel.is_mounted() {
            return;
        }
        let fetcher = Arc::clone(&ctx.fetcher);
        let person_id = self.person_id.clone();
        self.panel.mount(ctx, async move {
            get_person_contacts(fetcher.as_ref(), &person_id).await
        });
    }

    pub fn poll(&mut self) -> bool {
        self.panel.poll()
    }

    pub fn retry(&mut self, ctx: &MountContext) {
        *self = Self::new(self.person_id.clone());
        self.mount(ctx);
    }

    pub fn cards(&self) -> Option<Vec<ContactCard>> {
        self.panel
            .data()
            .map(|contacts| contacts.iter().map(ContactCard::from).collect())
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.mount(ctx);
        self.poll();

        let retry = match self.panel.state() {
            PanelState::Loaded(contacts) => {
                for (index, contact) in contacts.iter().enumerate() {
                    ui.push_id(index, |ui| ContactCard::from(contact).show(ui));
                }
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry {
            self.retry(ctx);
        }
    }
}
