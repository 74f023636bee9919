use std::sync::Arc;

use crate::api::council::get_council_members;
use crate::loader::MountContext;
use crate::models::CouncilMemberRow;
use crate::panel::{Panel, PanelState};

use super::show_placeholder;

const LABEL: &str = "council members";

/// One table row, keyed by member id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub key: String,
    pub cells: [String; 3],
}

impl MemberRow {
    /// Widget id of one cell, stable across reorders of the backend list.
    pub fn cell_id(&self, column: usize) -> egui::Id {
        egui::Id::new(("council_member", &self.key, column))
    }
}

impl From<&CouncilMemberRow> for MemberRow {
    fn from(member: &CouncilMemberRow) -> Self {
        Self {
            key: member.id.clone(),
            cells: [
                member.name.clone(),
                member.term_start.clone(),
                member.term_end.clone(),
            ],
        }
    }
}

pub struct CouncilMembersPage {
    panel: Panel<Vec<CouncilMemberRow>>,
}

impl Default for CouncilMembersPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CouncilMembersPage {
    pub const HEADERS: [&'static str; 3] = ["Name", "Term Start", "Term End"];

    pub fn new() -> Self {
        Self {
            panel: Panel::new(LABEL),
        }
    }

    pub fn state(&self) -> &PanelState<Vec<CouncilMemberRow>> {
        self.panel.state()
    }

    pub fn mount(&mut self, ctx: &MountContext) {
        if self.panel.is_mounted() {
            return;
        }
        let fetcher = Arc::clone(&ctx.fetcher);
        self.panel
            .mount(ctx, async move { get_council_members(fetcher.as_ref()).await });
    }

    pub fn poll(&mut self) -> bool {
        self.panel.poll()
    }

    /// Start over with a fresh load after a failure.
    pub fn retry(&mut self, ctx: &MountContext) {
        *self = Self::new();
        self.mount(ctx);
    }

    /// Rows in backend order; `None` until loaded.
    pub fn rows(&self) -> Option<Vec<MemberRow>> {
        self.panel
            .data()
            .map(|members| members.iter().map(MemberRow::from).collect())
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.mount(ctx);
        self.poll();

        let retry = match self.panel.state() {
            PanelState::Loaded(members) => {
                show_table(ui, members);
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry {
            self.retry(ctx);
        }
    }
}

fn show_table(ui: &mut egui::Ui, members: &[CouncilMemberRow]) {
    egui::Grid::new("council_members")
        .striped(true)
        .num_columns(3)
        .show(ui, |ui| {
            for header in CouncilMembersPage::HEADERS {
                ui.strong(header);
            }
            ui.end_row();

            for row in members.iter().map(MemberRow::from) {
                for (column, cell) in row.cells.iter().enumerate() {
                    ui.push_id(row.cell_id(column), |ui| ui.label(cell));
                }
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockFetcher;
    use serde_json::json;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn settle(page: &mut CouncilMembersPage) {
        for _ in 0..400 {
            if page.poll() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("page never settled");
    }

    #[test]
    fn one_member_renders_one_row() {
        let runtime = Runtime::new().unwrap();
        let fetcher = MockFetcher::new().respond_json(
            "/council-members",
            json!([{
                "id": "1",
                "name": "A Member",
                "term_start": "2022-01-01",
                "term_end": "2026-01-01"
            }]),
        );
        let ctx = MountContext::new(Arc::new(fetcher), runtime.handle().clone());
        let mut page = CouncilMembersPage::new();

        assert!(page.rows().is_none());
        page.mount(&ctx);
        settle(&mut page);

        let rows = page.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "1");
        assert_eq!(rows[0].cells, ["A Member", "2022-01-01", "2026-01-01"]);
    }

    #[test]
    fn retry_issues_a_new_request() {
        let runtime = Runtime::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new().respond_status("/council-members", 503));
        let ctx = MountContext::new(fetcher.clone(), runtime.handle().clone());
        let mut page = CouncilMembersPage::new();

        page.mount(&ctx);
        page.mount(&ctx);
        settle(&mut page);
        assert!(matches!(page.state(), PanelState::Failed(_)));
        assert_eq!(fetcher.calls().len(), 1);

        page.retry(&ctx);
        assert!(page.state().is_unloaded());
        settle(&mut page);
        assert_eq!(fetcher.calls().len(), 2);
    }

    #[test]
    fn rows_with_the_same_name_keep_distinct_ids() {
        let first = MemberRow::from(&CouncilMemberRow {
            id: "1".into(),
            name: "Sam Lee".into(),
            term_start: "2022-01-01".into(),
            term_end: "2025-12-31".into(),
        });
        let second = MemberRow {
            key: "2".into(),
            ..first.clone()
        };

        assert_eq!(first.cells, second.cells);
        assert_ne!(first.cell_id(0), second.cell_id(0));
        assert_ne!(first.cell_id(0), first.cell_id(1));
        let renamed = MemberRow::from(&CouncilMemberRow {
            id: "1".into(),
            name: "Renamed".into(),
            term_start: String::new(),
            term_end: String::new(),
        });
        assert_eq!(first.cell_id(2), renamed.cell_id(2));
    }
}
