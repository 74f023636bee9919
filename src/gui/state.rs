use crate::loader::MountContext;

use super::bills::BillsPage;
use super::council_members::CouncilMembersPage;
use super::person::PersonPage;
use super::users::UsersPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    CouncilMembers,
    Representatives,
    Bills,
    Users,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::CouncilMembers,
        Tab::Representatives,
        Tab::Bills,
        Tab::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::CouncilMembers => "Council Members",
            Tab::Representatives => "People",
            Tab::Bills => "Bills",
            Tab::Users => "Users",
        }
    }
}

/// The page currently on screen. Only one exists at a time, so leaving a tab
/// drops its page and discards whatever it was still loading.
pub enum Page {
    CouncilMembers(CouncilMembersPage),
    Representatives(PersonPage),
    Bills(BillsPage),
    Users(UsersPage),
}

impl Page {
    fn new(tab: Tab) -> Self {
        match tab {
            Tab::CouncilMembers => Page::CouncilMembers(CouncilMembersPage::new()),
            Tab::Representatives => Page::Representatives(PersonPage::new()),
            Tab::Bills => Page::Bills(BillsPage::new()),
            Tab::Users => Page::Users(UsersPage::new()),
        }
    }
}

pub struct AppState {
    ctx: MountContext,
    backend_label: String,
    tab: Tab,
    page: Page,
    status_message: String,
}

impl AppState {
    pub fn new(ctx: MountContext, backend_label: impl Into<String>) -> Self {
        Self {
            ctx,
            backend_label: backend_label.into(),
            tab: Tab::default(),
            page: Page::new(Tab::default()),
            status_message: String::new(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Switch tabs. Re-selecting the current tab keeps its page.
    pub fn open(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        log::debug!("Opening {:?}", tab);
        self.tab = tab;
        self.page = Page::new(tab);
        self.status_message = format!("Viewing {}", tab.title());
    }

    pub fn show_page(&mut self, ui: &mut egui::Ui) {
        let ctx = &self.ctx;
        match &mut self.page {
            Page::CouncilMembers(page) => page.show(ui, ctx),
            Page::Representatives(page) => page.show(ui, ctx),
            Page::Bills(page) => page.show(ui, ctx),
            Page::Users(page) => page.show(ui, ctx),
        }
    }
}
