use std::sync::Arc;

use crate::api::users::get_users;
use crate::loader::MountContext;
use crate::models::User;
use crate::panel::{Panel, PanelState};

use super::show_placeholder;

pub struct UsersPage {
    panel: Panel<Vec<User>>,
}

impl Default for UsersPage {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersPage {
    pub fn new() -> Self {
        Self {
            panel: Panel::new("users"),
        }
    }

    pub fn state(&self) -> &PanelState<Vec<User>> {
        self.panel.state()
    }

    pub fn mount(&mut self, ctx: &MountContext) {
        if self.panel.is_mounted() {
            return;
        }
        let fetcher = Arc::clone(&ctx.fetcher);
        self.panel
            .mount(ctx, async move { get_users(fetcher.as_ref()).await });
    }

    pub fn poll(&mut self) -> bool {
        self.panel.poll()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.mount(ctx);
        self.poll();

        let retry = match self.panel.state() {
            PanelState::Loaded(users) => {
                egui::Grid::new("users")
                    .striped(true)
                    .num_columns(3)
                    .show(ui, |ui| {
                        ui.strong("Name");
                        ui.strong("Email");
                        ui.strong("Bill updates");
                        ui.end_row();

                        for user in users {
                            ui.label(&user.name);
                            ui.label(&user.email);
                            ui.label(if user.send_bill_update_notifications {
                                "Subscribed"
                            } else {
                                "Off"
                            });
                            ui.end_row();
                        }
                    });
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry {
            *self = Self::new();
            self.mount(ctx);
        }
    }
}
