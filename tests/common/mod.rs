//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use council_desk::api::Fetcher;
use council_desk::loader::MountContext;
use tokio::runtime::Runtime;

/// Mount context backed by `fetcher`, running fetches on `runtime`.
pub fn mount_context(runtime: &Runtime, fetcher: Arc<dyn Fetcher>) -> MountContext {
    MountContext::new(fetcher, runtime.handle().clone())
}

/// Poll until `step` reports a state change, or give up after ~2s.
pub fn settle(mut step: impl FnMut() -> bool) -> bool {
    for _ in 0..400 {
        if step() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Run one headless egui frame that draws into a central panel.
pub fn render_frame(ctx: &egui::Context, mut draw: impl FnMut(&mut egui::Ui)) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| draw(ui));
    });
}

pub fn contact_json(city: Option<&str>, phone: Option<&str>, fax: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "city": city,
        "phone": phone,
        "fax": fax,
        "type": "DISTRICT_OFFICE"
    })
}

pub fn senator_json(id: &str, website: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Jane Senator",
        "title": "State Senator",
        "email": "jane@senate.example",
        "twitter": "",
        "party": "D",
        "notes": "",
        "type": "SENATOR",
        "councilMember": null,
        "senator": { "website": website, "district": 59 },
        "assemblyMember": null
    })
}
