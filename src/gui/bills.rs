use std::sync::Arc;

use crate::api::bills::{get_attachments, get_bill, get_bills, get_power_hours, search_state_bills};
use crate::loader::MountContext;
use crate::models::{
    Bill, BillAttachment, BillKind, PowerHour, StateBillSearchResult, StateChamberBill,
};
use crate::panel::{Panel, PanelState};

use super::{show_fields, show_placeholder, Field};

/// Summary line of a bill in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRow {
    pub key: String,
    pub name: String,
    pub kind: &'static str,
    pub status: String,
    /// City file number, or the print numbers of each chamber version.
    pub reference: String,
}

impl From<&Bill> for BillRow {
    fn from(bill: &Bill) -> Self {
        let (kind, reference) = match &bill.kind {
            BillKind::City(city) => ("City", city.file.clone()),
            BillKind::State(state) => (
                "State",
                state
                    .chamber_bills()
                    .map(|(_, chamber_bill)| chamber_bill.print_no())
                    .collect::<Vec<_>>()
                    .join(" / "),
            ),
        };
        Self {
            key: bill.id.clone(),
            name: bill.display_name().to_string(),
            kind,
            status: bill.status.clone(),
            reference,
        }
    }
}

/// Detail fields of a bill, including the city or per-chamber specifics.
pub fn bill_fields(bill: &Bill) -> Vec<Field> {
    let mut fields = vec![
        Field::new("Name", &bill.name),
        Field::new("Description", &bill.description),
        Field::new("Status", &bill.status),
        Field::new("Tracked", if bill.tracked { "Yes" } else { "No" }),
    ];
    if !bill.code_name.is_empty() {
        fields.push(Field::new("Code name", &bill.code_name));
    }

    match &bill.kind {
        BillKind::City(city) => {
            fields.push(Field::new("File", &city.file));
            fields.push(Field::new("Committee", &city.council_body));
            fields.push(Field::new("Sponsors", city.sponsor_count.to_string()));
        }
        BillKind::State(state) => {
            fields.push(Field::new("Session", state.session_year.to_string()));
            for (chamber, chamber_bill) in state.chamber_bills() {
                fields.push(Field::new(chamber.label(), chamber_summary(chamber_bill)));
            }
        }
    }
    fields
}

fn chamber_summary(bill: &StateChamberBill) -> String {
    format!(
        "{} ({}, {} sponsors)",
        bill.print_no(),
        bill.status,
        bill.sponsor_count
    )
}

/// One opened bill, loaded fresh from the backend, with its power hours and
/// attachments.
pub struct BillDetail {
    bill_id: String,
    title: String,
    bill: Panel<Bill>,
    power_hours: Panel<Vec<PowerHour>>,
    attachments: Panel<Vec<BillAttachment>>,
}

impl BillDetail {
    /// `title` is shown while the bill itself is still loading.
    pub fn new(bill_id: impl Into<String>, title: impl Into<String>) -> Self {
        let bill_id = bill_id.into();
        Self {
            bill: Panel::new(format!("bill {}", bill_id)),
            power_hours: Panel::new(format!("power hours for {}", bill_id)),
            attachments: Panel::new(format!("attachments for {}", bill_id)),
            title: title.into(),
            bill_id,
        }
    }

    pub fn bill_id(&self) -> &str {
        &self.bill_id
    }

    pub fn bill(&self) -> &PanelState<Bill> {
        self.bill.state()
    }

    pub fn power_hours(&self) -> &PanelState<Vec<PowerHour>> {
        self.power_hours.state()
    }

    pub fn attachments(&self) -> &PanelState<Vec<BillAttachment>> {
        self.attachments.state()
    }

    pub fn mount(&mut self, ctx: &MountContext) {
        if !self.bill.is_mounted() {
            let fetcher = Arc::clone(&ctx.fetcher);
            let bill_id = self.bill_id.clone();
            self.bill
                .mount(ctx, async move { get_bill(fetcher.as_ref(), &bill_id).await });
        }
        if !self.power_hours.is_mounted() {
            let fetcher = Arc::clone(&ctx.fetcher);
            let bill_id = self.bill_id.clone();
            self.power_hours.mount(ctx, async move {
                get_power_hours(fetcher.as_ref(), &bill_id).await
            });
        }
        if !self.attachments.is_mounted() {
            let fetcher = Arc::clone(&ctx.fetcher);
            let bill_id = self.bill_id.clone();
            self.attachments.mount(ctx, async move {
                get_attachments(fetcher.as_ref(), &bill_id).await
            });
        }
    }

    pub fn poll(&mut self) -> bool {
        let bill = self.bill.poll();
        let power_hours = self.power_hours.poll();
        let attachments = self.attachments.poll();
        bill || power_hours || attachments
    }

    pub fn is_settled(&self) -> bool {
        !self.bill.state().is_unloaded()
            && !self.power_hours.state().is_unloaded()
            && !self.attachments.state().is_unloaded()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.mount(ctx);
        self.poll();

        let retry_bill = match self.bill.state() {
            PanelState::Loaded(bill) => {
                ui.heading(bill.display_name());
                show_fields(ui, "bill_fields", &bill_fields(bill));
                false
            }
            state => {
                ui.heading(&self.title);
                show_placeholder(ui, state)
            }
        };
        if retry_bill {
            self.bill = Panel::new(format!("bill {}", self.bill_id));
            self.mount(ctx);
        }

        ui.add_space(8.0);
        ui.strong("Power hours");
        let retry_power_hours = match self.power_hours.state() {
            PanelState::Loaded(power_hours) if power_hours.is_empty() => {
                ui.weak("None yet");
                false
            }
            PanelState::Loaded(power_hours) => {
                for power_hour in power_hours {
                    ui.horizontal(|ui| {
                        ui.hyperlink_to(&power_hour.title, &power_hour.spreadsheet_url);
                        ui.weak(&power_hour.created_at);
                    });
                }
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry_power_hours {
            self.power_hours = Panel::new(format!("power hours for {}", self.bill_id));
            self.mount(ctx);
        }

        ui.add_space(8.0);
        ui.strong("Attachments");
        let retry_attachments = match self.attachments.state() {
            PanelState::Loaded(attachments) if attachments.is_empty() => {
                ui.weak("None");
                false
            }
            PanelState::Loaded(attachments) => {
                for attachment in attachments {
                    ui.hyperlink_to(&attachment.name, &attachment.url);
                }
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry_attachments {
            self.attachments = Panel::new(format!("attachments for {}", self.bill_id));
            self.mount(ctx);
        }
    }
}

/// Print number, chamber, session, name and tracked flag of a search match.
pub fn search_result_cells(result: &StateBillSearchResult) -> [String; 5] {
    [
        format!("{}{}", result.base_print_no, result.active_version),
        result.chamber.label().to_string(),
        result.session_year.to_string(),
        result.name.clone(),
        if result.tracked { "Tracked" } else { "" }.to_string(),
    ]
}

/// Lookup of state bills by code name. Each search is a fresh panel.
#[derive(Default)]
pub struct StateBillSearch {
    code_name: String,
    session_year: String,
    error: Option<String>,
    results: Option<Panel<Vec<StateBillSearchResult>>>,
}

impl StateBillSearch {
    pub fn results(&self) -> Option<&PanelState<Vec<StateBillSearchResult>>> {
        self.results.as_ref().map(Panel::state)
    }

    /// Start a search, replacing the previous one. Blank code names are ignored.
    pub fn search(&mut self, code_name: &str, session_year: Option<i32>, ctx: &MountContext) -> bool {
        let code_name = code_name.trim().to_string();
        if code_name.is_empty() {
            return false;
        }
        let fetcher = Arc::clone(&ctx.fetcher);
        let mut panel = Panel::new(format!("state bill search {}", code_name));
        panel.mount(ctx, async move {
            search_state_bills(fetcher.as_ref(), &code_name, session_year).await
        });
        self.results = Some(panel);
        true
    }

    pub fn poll(&mut self) -> bool {
        self.results.as_mut().is_some_and(Panel::poll)
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.poll();

        let mut submitted = false;
        egui::Grid::new("state_bill_search").num_columns(2).show(ui, |ui| {
            ui.label("Code name:");
            ui.text_edit_singleline(&mut self.code_name);
            ui.end_row();
            ui.label("Session year:");
            ui.text_edit_singleline(&mut self.session_year);
            ui.end_row();
        });
        submitted |= ui.button("Search").clicked();

        if submitted {
            match parse_session_year(&self.session_year) {
                Ok(session_year) => {
                    self.error = None;
                    let code_name = self.code_name.clone();
                    self.search(&code_name, session_year, ctx);
                }
                Err(message) => self.error = Some(message),
            }
        }
        if let Some(message) = &self.error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, message);
        }

        let Some(results) = &self.results else {
            return;
        };
        let retry = match results.state() {
            PanelState::Loaded(matches) if matches.is_empty() => {
                ui.weak("No matching bills");
                false
            }
            PanelState::Loaded(matches) => {
                egui::Grid::new("state_bill_results")
                    .striped(true)
                    .num_columns(5)
                    .show(ui, |ui| {
                        for result in matches {
                            for cell in search_result_cells(result) {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
                false
            }
            state => show_placeholder(ui, state),
        };
        if retry {
            let code_name = self.code_name.clone();
            if let Ok(session_year) = parse_session_year(&self.session_year) {
                self.search(&code_name, session_year, ctx);
            }
        }
    }
}

fn parse_session_year(input: &str) -> Result<Option<i32>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| format!("\"{}\" is not a year", input))
}

pub struct BillsPage {
    panel: Panel<Vec<Bill>>,
    selected: Option<BillDetail>,
    search: StateBillSearch,
}

impl Default for BillsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BillsPage {
    pub fn new() -> Self {
        Self {
            panel: Panel::new("bills"),
            selected: None,
            search: StateBillSearch::default(),
        }
    }

    pub fn state(&self) -> &PanelState<Vec<Bill>> {
        self.panel.state()
    }

    pub fn selected(&self) -> Option<&BillDetail> {
        self.selected.as_ref()
    }

    pub fn selected_mut(&mut self) -> Option<&mut BillDetail> {
        self.selected.as_mut()
    }

    pub fn search(&mut self) -> &mut StateBillSearch {
        &mut self.search
    }

    pub fn mount(&mut self, ctx: &MountContext) {
        if self.panel.is_mounted() {
            return;
        }
        let fetcher = Arc::clone(&ctx.fetcher);
        self.panel
            .mount(ctx, async move { get_bills(fetcher.as_ref()).await });
    }

    pub fn poll(&mut self) -> bool {
        let bills = self.panel.poll();
        let detail = self.selected.as_mut().is_some_and(BillDetail::poll);
        let search = self.search.poll();
        bills || detail || search
    }

    pub fn rows(&self) -> Option<Vec<BillRow>> {
        self.panel
            .data()
            .map(|bills| bills.iter().map(BillRow::from).collect())
    }

    /// Open the listed bill with `bill_id`, replacing any bill already open.
    pub fn select(&mut self, bill_id: &str, ctx: &MountContext) -> bool {
        let Some(bill) = self
            .panel
            .data()
            .and_then(|bills| bills.iter().find(|bill| bill.id == bill_id))
        else {
            return false;
        };
        let mut detail = BillDetail::new(&bill.id, bill.display_name());
        detail.mount(ctx);
        self.selected = Some(detail);
        true
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &MountContext) {
        self.mount(ctx);
        self.poll();

        let mut clicked = None;
        let retry = match self.panel.state() {
            PanelState::Loaded(bills) => {
                egui::Grid::new("bills")
                    .striped(true)
                    .num_columns(4)
                    .show(ui, |ui| {
                        for header in ["Name", "Type", "Status", "Reference"] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for row in bills.iter().map(BillRow::from) {
                            if ui.link(&row.name).clicked() {
                                clicked = Some(row.key.clone());
                            }
                            ui.label(row.kind);
                            ui.label(&row.status);
                            ui.label(&row.reference);
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
            return;
        }
        if let Some(bill_id) = clicked {
            self.select(&bill_id, ctx);
        }

        ui.add_space(8.0);
        ui.collapsing("Search state bills", |ui| self.search.show(ui, ctx));

        if let Some(detail) = &mut self.selected {
            ui.separator();
            detail.show(ui, ctx);
        }
    }
}
