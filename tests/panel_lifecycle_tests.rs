//! Mount-to-render lifecycle of the detail panels, driven through
//! `MockFetcher` (or a dead backend) and headless egui frames.

mod common;

use std::sync::Arc;

use common::{mount_context, render_frame, settle};
use council_desk::api::mock::MockFetcher;
use council_desk::api::HttpFetcher;
use council_desk::gui::council_members::CouncilMembersPage;
use council_desk::gui::office_contacts::OfficeContactsPanel;
use council_desk::gui::person::{PersonDetail, PersonPage};
use council_desk::gui::state::Page;
use council_desk::gui::state_rep::StateRepDetails;
use council_desk::gui::{ui_main, AppState, Tab};
use council_desk::panel::PanelState;
use serde_json::json;
use tokio::runtime::Runtime;

#[test]
fn council_members_render_after_load() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(MockFetcher::new().respond_json(
        "/council-members",
        json!([{ "id": "1", "name": "A Member", "term_start": "2022-01-01", "term_end": "2026-01-01" }]),
    ));
    let ctx = mount_context(&runtime, fetcher.clone());
    let egui_ctx = egui::Context::default();
    let mut page = CouncilMembersPage::new();

    render_frame(&egui_ctx, |ui| page.show(ui, &ctx));
    assert!(settle(|| page.poll() || page.rows().is_some()));
    for _ in 0..3 {
        render_frame(&egui_ctx, |ui| page.show(ui, &ctx));
    }

    let rows = page.rows().expect("loaded");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells, ["A Member", "2022-01-01", "2026-01-01"]);
    assert_eq!(fetcher.calls(), vec!["/council-members".to_string()]);
}

#[test]
fn empty_contacts_render_no_cards() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(MockFetcher::new().respond_json("/api/persons/42/contacts", json!([])));
    let ctx = mount_context(&runtime, fetcher);
    let egui_ctx = egui::Context::default();
    let mut panel = OfficeContactsPanel::new("42");

    panel.mount(&ctx);
    assert!(settle(|| panel.poll()));
    render_frame(&egui_ctx, |ui| panel.show(ui, &ctx));

    assert!(panel.cards().expect("loaded").is_empty());
    assert!(matches!(panel.state(), PanelState::Loaded(_)));
}

#[test]
fn contact_cards_follow_backend_records() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(MockFetcher::new().respond_json(
        "/api/persons/42/contacts",
        json!([
            common::contact_json(Some("Albany"), Some("555-1234"), None),
            common::contact_json(None, None, Some("555-0000"))
        ]),
    ));
    let ctx = mount_context(&runtime, fetcher);
    let mut panel = OfficeContactsPanel::new("42");

    panel.mount(&ctx);
    assert!(settle(|| panel.poll()));

    let cards = panel.cards().expect("loaded");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].header.as_deref(), Some("Albany office"));
    assert_eq!(cards[0].phone.as_deref(), Some("555-1234"));
    assert!(cards[0].fax.is_none());
    assert!(cards[1].header.is_none());
    assert_eq!(cards[1].fax.as_deref(), Some("555-0000"));
}

#[test]
fn dead_backend_settles_into_failed_without_crashing() {
    let runtime = Runtime::new().expect("runtime");
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let ctx = mount_context(&runtime, Arc::new(HttpFetcher::new(format!("http://{addr}"))));
    let egui_ctx = egui::Context::default();
    let mut page = CouncilMembersPage::new();

    render_frame(&egui_ctx, |ui| page.show(ui, &ctx));
    assert!(settle(|| {
        page.poll();
        !page.state().is_unloaded()
    }));
    render_frame(&egui_ctx, |ui| page.show(ui, &ctx));

    assert!(matches!(page.state(), PanelState::Failed(_)));
    assert!(page.rows().is_none());
}

#[test]
fn person_detail_loads_person_and_contacts_once() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(
        MockFetcher::new()
            .respond_json("/api/persons/7", common::senator_json("7", "https://example.gov"))
            .respond_json(
                "/api/persons/7/contacts",
                json!([common::contact_json(Some("Albany"), Some("555-1234"), None)]),
            ),
    );
    let ctx = mount_context(&runtime, fetcher.clone());
    let egui_ctx = egui::Context::default();
    let mut detail = PersonDetail::new("7");

    for _ in 0..5 {
        render_frame(&egui_ctx, |ui| detail.show(ui, &ctx));
    }
    assert!(settle(|| {
        detail.poll();
        !detail.state().is_unloaded() && !detail.contacts().state().is_unloaded()
    }));
    render_frame(&egui_ctx, |ui| detail.show(ui, &ctx));

    let person = detail.state().loaded().expect("person loaded");
    let rep = person.role.state_representative().expect("state rep");
    let view = StateRepDetails::new(person, rep);
    assert_eq!(view.website.expect("website").label, "District 59");
    assert!(view.twitter.is_none());

    let mut calls = fetcher.calls();
    calls.sort();
    assert_eq!(calls, vec!["/api/persons/7", "/api/persons/7/contacts"]);
}

#[test]
fn opening_another_person_replaces_the_detail() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(
        MockFetcher::new()
            .respond_json("/api/persons/1", common::senator_json("1", ""))
            .respond_json("/api/persons/1/contacts", json!([]))
            .respond_json("/api/persons/2", common::senator_json("2", ""))
            .respond_json("/api/persons/2/contacts", json!([])),
    );
    let ctx = mount_context(&runtime, fetcher);
    let mut page = PersonPage::new();

    page.open("1", &ctx);
    page.open(" 2 ", &ctx);
    page.open("   ", &ctx);

    let detail = page.detail_mut().expect("a person is open");
    assert_eq!(detail.person_id(), "2");
    assert!(settle(|| {
        detail.poll();
        !detail.state().is_unloaded()
    }));
    assert_eq!(detail.state().loaded().map(|p| p.id.as_str()), Some("2"));
}

#[test]
fn person_id_with_a_slash_stays_on_the_person_endpoints() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(
        MockFetcher::new()
            .respond_json("/api/persons/7/contacts", json!([]))
            .respond_json("/api/persons/7/contacts/contacts", json!([])),
    );
    let ctx = mount_context(&runtime, fetcher.clone());
    let mut page = PersonPage::new();

    page.open("7/contacts", &ctx);
    let detail = page.detail_mut().expect("a person is open");
    assert!(settle(|| {
        detail.poll();
        !detail.state().is_unloaded() && !detail.contacts().state().is_unloaded()
    }));

    assert!(matches!(detail.state(), PanelState::Failed(_)));
    let mut calls = fetcher.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec!["/api/persons/7%2Fcontacts", "/api/persons/7%2Fcontacts/contacts"]
    );
}

#[test]
fn switching_tabs_builds_a_fresh_page() {
    let runtime = Runtime::new().expect("runtime");
    let fetcher = Arc::new(
        MockFetcher::new()
            .respond_json("/council-members", json!([]))
            .respond_json("/api/users", json!([])),
    );
    let ctx = mount_context(&runtime, fetcher.clone());
    let egui_ctx = egui::Context::default();
    let mut state = AppState::new(ctx, "http://backend.test");

    let _ = egui_ctx.run(egui::RawInput::default(), |ctx| ui_main(ctx, &mut state));
    assert_eq!(state.tab(), Tab::CouncilMembers);
    assert!(settle(|| fetcher.calls().len() == 1));

    state.open(Tab::Users);
    assert!(matches!(state.page(), Page::Users(_)));
    let _ = egui_ctx.run(egui::RawInput::default(), |ctx| ui_main(ctx, &mut state));
    assert!(settle(|| fetcher.calls().len() == 2));

    state.open(Tab::CouncilMembers);
    let _ = egui_ctx.run(egui::RawInput::default(), |ctx| ui_main(ctx, &mut state));
    assert!(settle(|| fetcher.calls().len() == 3));

    assert_eq!(
        fetcher.calls(),
        vec!["/council-members", "/api/users", "/council-members"]
    );
}
