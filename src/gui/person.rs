use std::sync::Arc;

use crate::api::persons::get_person;
use crate::loader::MountContext;
use crate::models::{Person, Role};
use crate::panel::{Panel, PanelState};

use super::office_contacts::OfficeContactsPanel;
use super::state_rep::StateRepDetails;
use super::{show_fields, show_placeholder, Field, Link};

/// Heading shown above a person's details.
pub fn role_heading(role: &Role) -> &'static str {
    match role {
        Role::CouncilMember(_) => "Council Member",
        Role::Senator(_) => "Senator",
        Role::AssemblyMember(_) => "Assembly Member",
        Role::Staffer => "Staffer",
    }
}

/// Council member and staffer fields; state representatives go through
/// [`StateRepDetails`].
pub fn person_fields(person: &Person) -> (Vec<Field>, Option<Link>) {
    let mut fields = vec![
        Field::new("Name", &person.name),
        Field::new("Title", &person.title),
        Field::new("Email", &person.email),
    ];

    match &person.role {
        Role::CouncilMember(member) => {
            fields.push(Field::new("Party", &person.party));
            fields.push(Field::new("Borough", &member.borough));
            fields.push(Field::new("Term start", &member.term_start));
            fields.push(Field::new("Term end", &member.term_end));
            let website = (!member.website.is_empty()).then(|| Link {
                label: "Council website".to_string(),
                url: member.website.clone(),
            });
            (fields, website)
        }
        _ => (fields, None),
    }
}

/// Details and offices of a single person.
pub struct PersonDetail {
    person_id: String,
    panel: Panel<Person>,
    contacts: OfficeContactsPanel,
}

impl PersonDetail {
    pub fn new(person_id: impl Into<String>) -> Self {
        let person_id = person_id.into();
        Self {
            panel: Panel::new(format!("person {}", person_id)),
            contacts: OfficeContactsPanel::new(person_id.clone()),
            person_id,
        }
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn state(&self) -> &PanelState<Person> {
        self.panel.state()
    }

    pub fn contacts(&self) -> &OfficeContactsPanel {
        &self.contacts
    }

    pub fn mount(&mut self, ctx: &MountContext) {
        if !self.panel.is_mounted() {
            let fetcher = Arc::clone(&ctx.fetcher);
            let person_id = self.person_id.clone();
            self.panel
                .mount(ctx, async move { get_person(fetcher.as_ref(), &person_id).await });
        }
        self.contacts.mount(ctx);
    }

    pub fn poll(&mut self) -> bool {
        let person = self.panel.poll();
        let contacts = self.contacts.poll();
        person || contacts
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.mount(ctx);
        self.poll();

        let retry = match self.panel.state() {
            PanelState::Loaded(person) => {
                show_person(ui, person);
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry {
            self.panel = Panel::new(format!("person {}", self.person_id));
            self.mount(ctx);
        }

        ui.add_space(8.0);
        ui.heading("Offices");
        self.contacts.show(ui, ctx);
    }
}

fn show_person(ui: &mut egui::Ui, person: &Person) {
    ui.heading(role_heading(&person.role));
    if let Some(rep) = person.role.state_representative() {
        StateRepDetails::new(person, rep).show(ui);
        return;
    }

    let (fields, website) = person_fields(person);
    show_fields(ui, "person_fields", &fields);
    if let Some(link) = website {
        ui.hyperlink_to(link.label, link.url);
    }
}

/// Lookup form plus the currently opened person.
#[derive(Default)]
pub struct PersonPage {
    query: String,
    detail: Option<PersonDetail>,
}

impl PersonPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the open person. The previous detail is dropped, which discards
    /// any of its loads still in flight.
    pub fn open(&mut self, person_id: &str, ctx: &MountContext) {
        let person_id = person_id.trim();
        if person_id.is_empty() {
            return;
        }
        let mut detail = PersonDetail::new(person_id);
        detail.mount(ctx);
        self.detail = Some(detail);
    }

    pub fn detail(&self) -> Option<&PersonDetail> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut PersonDetail> {
        self.detail.as_mut()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        let mut submitted = false;
        egui::Grid::new("person_lookup").num_columns(3).show(ui, |ui| {
            ui.label("Person ID:");
            let response = ui.text_edit_singleline(&mut self.query);
            submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            submitted |= ui.button("Open").clicked();
            ui.end_row();
        });
        if submitted {
            let query = self.query.clone();
            self.open(&query, ctx);
        }

        ui.separator();
        match &mut self.detail {
            Some(detail) => detail.show(ui, ctx),
            None => {
                ui.label("Enter a person ID to see their details.");
            }
        }
    }
}
