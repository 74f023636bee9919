use crate::models::{Person, StateRepresentative};

use super::{show_fields, Field, Link};

/// What the state representative panel shows for one person.
///
/// Name, title, email and party are always present. The district website and
/// twitter rows only exist when the backend gave a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRepDetails {
    pub fields: Vec<Field>,
    pub website: Option<Link>,
    pub twitter: Option<Link>,
}

impl StateRepDetails {
    pub fn new(person: &Person, rep: &StateRepresentative) -> Self {
        let fields = vec![
            Field::new("Name", &person.name),
            Field::new("Title", &person.title),
            Field::new("Email", &person.email),
            Field::new("Party", &person.party),
        ];

        let website = (!rep.website.is_empty()).then(|| Link {
            label: format!("District {}", rep.district),
            url: rep.website.clone(),
        });
        let twitter = (!person.twitter.is_empty()).then(|| Link {
            label: format!("@{}", person.twitter),
            url: format!("https://twitter.com/{}", person.twitter),
        });

        Self {
            fields,
            website,
            twitter,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        show_fields(ui, "state_rep_fields", &self.fields);
        egui::Grid::new("state_rep_links").num_columns(2).show(ui, |ui| {
            if let Some(link) = &self.website {
                ui.strong("District website");
                ui.hyperlink_to(&link.label, &link.url);
                ui.end_row();
            }
            if let Some(link) = &self.twitter {
                ui.strong("Twitter");
                ui.hyperlink_to(&link.label, &link.url);
                ui.end_row();
            }
        });
    }
}
