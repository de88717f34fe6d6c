// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        options::PageKind,
        state::AppState,
    },
    kb,
    query::{self, QueryEngine},
};

use super::{
    pages::Page,
    router,
    table_model::TableData,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // read-only view over the static knowledge base
    pub engine: QueryEngine,

    // Terminology tab rows after filtering
    pub terms: TableData,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let terms = TableData::from_terms_filtered(kb::terms(), &state.gui.term_filter);

        logf!("Init: rules={} leaves, terms={}, default page={:?}",
            kb::rules().leaf_count(),
            kb::terms().len(),
            router::all_pages()[state.gui.current_page_index].kind(),
        );

        Self {
            state,
            engine: QueryEngine::default(),
            terms,
            status: s!("Ready"),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Run the text box contents through the engine and keep the output.
    pub fn submit_search(&mut self) {
        let q = self.state.gui.query_text.clone();
        let blocks = self.engine.matches(&q);
        let n = blocks.len();

        logf!("UI: Search {:?} → {} result(s)", q, n);
        if q.is_empty() {
            logd!("UI: Empty query matches every entry");
        }

        self.state.results = Some(query::render(&blocks));
        self.state.gui.last_query = Some(q);
        self.status(format!("Search: {} result(s)", n));
    }

    /// Re-filter the Terminology table from the current filter text.
    pub fn rebuild_terms(&mut self) {
        let filter = &self.state.gui.term_filter;
        self.terms = TableData::from_terms_filtered(kb::terms(), filter);
        logd!("UI: Term filter {:?} → {} row(s)", filter, self.terms.nrows());
        self.status(format!("Terminology: {} of {} term(s)", self.terms.nrows(), kb::terms().len()));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
