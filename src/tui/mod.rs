// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive viewer shell (ratatui + crossterm): diagram pane, detail
//! drawer, mouse selection and the drawer resize gesture, plus a built-in
//! demo map.

use std::{
    collections::BTreeMap,
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::controller::{NavDirection, SelectionController};
use crate::gesture::{DragOutcome, SheetDrag};
use crate::geometry::NodeRect;
use crate::model::{
    Annotation, ContentGraph, Edge, IdError, Lane, LaneId, Meta, Node, NodeId, PanelKey,
    ReferenceEntry, ReferenceSection, Selection,
};
use crate::panel::{self, DrawerBlock, DrawerContent, SheetHeight};
use crate::render::{rasterize, RasterOptions, ScenePaint, SceneRaster};
use crate::scene::{build_scene, Scene};
use crate::track::{NoopTracker, Tracker};
use crate::viewport;

mod theme;
use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;

/// Event poll interval; also bounds toast expiry latency.
const TICK: Duration = Duration::from_millis(250);
/// Gesture units per terminal row and column.
const CELL_PX: f64 = 16.0;
const PX_PER_COL: f64 = 8.0;
/// Drawer width in the side-by-side layout.
const DRAWER_COLS: u16 = 46;
/// Horizontal and vertical pan step, in cells.
const PAN_COLS: u16 = 4;
const PAN_ROWS: u16 = 2;

/// Runs the viewer on the built-in demo map.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_map(demo_map()?, false)
}

/// Runs the viewer on a loaded map.
pub fn run_with_map(graph: ContentGraph, force_narrow: bool) -> Result<(), Box<dyn Error>> {
    run_with_tracker(graph, force_narrow, Box::new(NoopTracker))
}

pub fn run_with_tracker(
    graph: ContentGraph,
    force_narrow: bool,
    tracker: Box<dyn Tracker>,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(graph, force_narrow, tracker)?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    graph: ContentGraph,
    scene: Scene,
    raster: SceneRaster,
    controller: SelectionController,
    sheet: SheetHeight,
    drag: SheetDrag,
    /// Drawer height while a drag is live, in gesture units.
    live_sheet_px: Option<f64>,
    scroll_x: u16,
    scroll_y: u16,
    drawer_scroll: u16,
    force_narrow: bool,
    theme: TuiTheme,
    toast: Option<Toast>,
    should_quit: bool,
    // Cached from the last draw, for event hit-testing.
    frame_height: u16,
    diagram_area: Rect,
    drawer_area: Rect,
    handle_row: Option<u16>,
}

impl App {
    fn new(
        graph: ContentGraph,
        force_narrow: bool,
        tracker: Box<dyn Tracker>,
    ) -> Result<Self, Box<dyn Error>> {
        let scene = build_scene(&graph);
        let raster = rasterize(&scene, RasterOptions::default())?;
        let mut app = Self {
            graph,
            scene,
            raster,
            controller: SelectionController::new(tracker),
            sheet: SheetHeight::default(),
            drag: SheetDrag::default(),
            live_sheet_px: None,
            scroll_x: 0,
            scroll_y: 0,
            drawer_scroll: 0,
            force_narrow,
            theme: TuiTheme::from_env()?,
            toast: None,
            should_quit: false,
            frame_height: 0,
            diagram_area: Rect::default(),
            drawer_area: Rect::default(),
            handle_row: None,
        };
        app.set_toast_for("Welcome. Click a node or press Enter to begin, ? for help", 5);
        Ok(app)
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.set_toast_for(message, 2);
    }

    fn set_toast_for(&mut self, message: impl Into<String>, secs: u64) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(secs),
        });
    }

    fn drawer_open(&self) -> bool {
        !self.controller.selection().is_none()
    }

    fn current_drawer(&self) -> Option<DrawerContent> {
        match self.controller.selection() {
            Selection::None => None,
            Selection::Node(node_id) => {
                let node = self.graph.node(node_id)?;
                let previous = self.controller.neighbor(&self.graph, NavDirection::Previous);
                let next = self.controller.neighbor(&self.graph, NavDirection::Next);
                Some(panel::node_detail(&self.graph, node, previous, next))
            }
            Selection::Panel(key) => Some(panel::panel_detail(*key, self.graph.meta())),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.close_drawer(),
            KeyCode::Enter => self.select_walkthrough_start(),
            KeyCode::Left => self.step_or_pan(NavDirection::Previous),
            KeyCode::Right => self.step_or_pan(NavDirection::Next),
            KeyCode::Up => {
                if self.drawer_open() {
                    self.drawer_scroll = self.drawer_scroll.saturating_sub(1);
                } else {
                    self.pan(0, -(PAN_ROWS as i32));
                }
            }
            KeyCode::Down => {
                if self.drawer_open() {
                    self.drawer_scroll = self.drawer_scroll.saturating_add(1);
                } else {
                    self.pan(0, PAN_ROWS as i32);
                }
            }
            KeyCode::Char('h') => self.pan(-(PAN_COLS as i32), 0),
            KeyCode::Char('l') => self.pan(PAN_COLS as i32, 0),
            KeyCode::Char('k') => self.pan(0, -(PAN_ROWS as i32)),
            KeyCode::Char('j') => self.pan(0, PAN_ROWS as i32),
            KeyCode::Char('a') => self.open_panel(PanelKey::About),
            KeyCode::Char('c') => self.open_panel(PanelKey::Contact),
            KeyCode::Char('r') => self.open_panel(PanelKey::References),
            KeyCode::Char('?') => self.open_panel(PanelKey::Help),
            KeyCode::Tab => self.cycle_panel(),
            KeyCode::Char(ch @ '1'..='9') => {
                self.activate_link(ch as usize - '1' as usize);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.handle_row == Some(mouse.row) {
                    let height = self.current_sheet_px();
                    self.drag.begin(f64::from(mouse.row) * CELL_PX, height);
                } else if rect_contains(self.diagram_area, mouse.column, mouse.row) {
                    self.click_diagram(mouse.column, mouse.row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.drag.is_dragging() {
                    self.live_sheet_px = self
                        .drag
                        .update(f64::from(mouse.row) * CELL_PX, self.viewport_px());
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let viewport = self.viewport_px();
                match self.drag.finish(f64::from(mouse.row) * CELL_PX, viewport) {
                    Some(DragOutcome::Close) => self.close_drawer(),
                    Some(DragOutcome::Commit(height)) => {
                        self.sheet.commit(height);
                        self.live_sheet_px = None;
                    }
                    None => {}
                }
            }
            MouseEventKind::ScrollUp => {
                if rect_contains(self.drawer_area, mouse.column, mouse.row) {
                    self.drawer_scroll = self.drawer_scroll.saturating_sub(1);
                } else {
                    self.pan(0, -(PAN_ROWS as i32));
                }
            }
            MouseEventKind::ScrollDown => {
                if rect_contains(self.drawer_area, mouse.column, mouse.row) {
                    self.drawer_scroll = self.drawer_scroll.saturating_add(1);
                } else {
                    self.pan(0, PAN_ROWS as i32);
                }
            }
            _ => {}
        }
    }

    fn select_walkthrough_start(&mut self) {
        if !self.controller.selection().is_none() {
            return;
        }
        let Some(first) = self.graph.node_order().first().cloned() else {
            return;
        };
        if self.controller.select_node(&self.graph, &first) {
            self.on_selection_changed();
        }
    }

    fn step_or_pan(&mut self, direction: NavDirection) {
        if self.controller.selection().selected_node().is_some() {
            if self.controller.navigate(&self.graph, direction) {
                self.on_selection_changed();
            }
            return;
        }
        let step = PAN_COLS as i32;
        match direction {
            NavDirection::Previous => self.pan(-step, 0),
            NavDirection::Next => self.pan(step, 0),
        }
    }

    fn open_panel(&mut self, key: PanelKey) {
        self.controller.open_panel(key);
        self.on_selection_changed();
    }

    fn cycle_panel(&mut self) {
        let next = match self.controller.selection().active_panel() {
            Some(key) => {
                let idx = PanelKey::ALL
                    .iter()
                    .position(|panel| *panel == key)
                    .unwrap_or(0);
                PanelKey::ALL[(idx + 1) % PanelKey::ALL.len()]
            }
            None => PanelKey::About,
        };
        self.open_panel(next);
    }

    fn activate_link(&mut self, idx: usize) {
        let Some(content) = self.current_drawer() else {
            return;
        };
        let Some(link) = content.links().nth(idx) else {
            return;
        };
        self.controller
            .track(link.kind.track_path(), link.kind.track_title());
        self.set_toast(format!("Open: {}", link.url));
    }

    fn click_diagram(&mut self, column: u16, row: u16) {
        let col = usize::from(column - self.diagram_area.x) + usize::from(self.scroll_x);
        let row = usize::from(row - self.diagram_area.y) + usize::from(self.scroll_y);
        match self.raster.node_hit(col, row).cloned() {
            Some(node_id) => {
                if self.controller.select_node(&self.graph, &node_id) {
                    self.on_selection_changed();
                }
            }
            None => self.close_drawer(),
        }
    }

    fn close_drawer(&mut self) {
        self.controller.close();
        self.scene.apply_highlight(self.controller.selection());
        self.sheet.reset();
        self.drag.cancel();
        self.live_sheet_px = None;
        self.drawer_scroll = 0;
    }

    fn on_selection_changed(&mut self) {
        self.scene.apply_highlight(self.controller.selection());
        self.drawer_scroll = 0;
        self.sync_scroll_to_selection();
    }

    /// Centers the selected node in the visible diagram window.
    fn sync_scroll_to_selection(&mut self) {
        let Some(node_id) = self.controller.selection().selected_node() else {
            return;
        };
        let Some(node) = self.graph.node(node_id) else {
            return;
        };
        let rect = NodeRect::new(node.x(), node.y());
        let target = viewport::scroll_target(
            rect,
            self.raster.width() as f64,
            f64::from(self.diagram_area.width),
        );
        self.scroll_x = target.round() as u16;

        if let Some(cell) = self.raster.node_cell(node_id) {
            let center = cell.y + cell.height / 2;
            let half = usize::from(self.diagram_area.height) / 2;
            let max = self
                .raster
                .height()
                .saturating_sub(usize::from(self.diagram_area.height));
            self.scroll_y = center.saturating_sub(half).min(max) as u16;
        }
    }

    fn pan(&mut self, dx: i32, dy: i32) {
        let max_x = self
            .raster
            .width()
            .saturating_sub(usize::from(self.diagram_area.width)) as i32;
        let max_y = self
            .raster
            .height()
            .saturating_sub(usize::from(self.diagram_area.height)) as i32;
        self.scroll_x = (i32::from(self.scroll_x) + dx).clamp(0, max_x) as u16;
        self.scroll_y = (i32::from(self.scroll_y) + dy).clamp(0, max_y) as u16;
    }

    fn viewport_px(&self) -> f64 {
        f64::from(self.frame_height) * CELL_PX
    }

    fn current_sheet_px(&self) -> f64 {
        self.live_sheet_px
            .unwrap_or_else(|| self.sheet.resolve(self.viewport_px()))
    }

    fn is_narrow(&self, area: Rect) -> bool {
        self.force_narrow || viewport::is_narrow(f64::from(area.width) * PX_PER_COL)
    }

    fn toast_suffix(&self) -> Option<String> {
        match &self.toast {
            Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
            _ => None,
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    app.frame_height = area.height;
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let body = rows[0];
    let footer = rows[1];

    let drawer = app.current_drawer();
    let narrow = app.is_narrow(body);
    app.handle_row = None;

    let (diagram_area, drawer_area) = match &drawer {
        None => (body, Rect::default()),
        Some(_) if !narrow => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(20),
                    Constraint::Length(DRAWER_COLS.min(body.width / 2)),
                ])
                .split(body);
            (panes[0], panes[1])
        }
        Some(_) => {
            let sheet_rows = (app.current_sheet_px() / CELL_PX).round() as u16;
            // Order matters on tiny terminals where height - 3 dips below the
            // 3-row floor; the pane can never exceed the body itself.
            let sheet_rows = sheet_rows
                .min(body.height.saturating_sub(3))
                .max(3)
                .min(body.height);
            let panes = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(sheet_rows)])
                .split(body);
            app.handle_row = Some(panes[1].y);
            (panes[0], panes[1])
        }
    };
    app.diagram_area = diagram_area;
    app.drawer_area = drawer_area;

    // Re-clamp scroll against the current pane size.
    app.pan(0, 0);

    let diagram = Paragraph::new(diagram_text(app))
        .style(app.theme.base_style())
        .scroll((app.scroll_y, app.scroll_x));
    frame.render_widget(diagram, diagram_area);

    if let Some(content) = &drawer {
        render_drawer(frame, app, content, drawer_area, narrow);
    }

    let status = Paragraph::new(footer_line(app)).style(app.theme.base_style());
    frame.render_widget(status, footer);
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

/// The built-in demo map: a research project walkthrough across five lanes.
pub fn demo_map() -> Result<ContentGraph, Box<dyn Error>> {
    fn node_id(value: &str) -> Result<NodeId, IdError> {
        NodeId::new(value)
    }
    fn lane_id(value: &str) -> Result<LaneId, IdError> {
        LaneId::new(value)
    }

    let lane_defs = [
        ("problem", "PROBLEM", "#60a5fa"),
        ("technology", "TECHNOLOGY", "#2dd4bf"),
        ("methodology", "METHODOLOGY", "#fbbf24"),
        ("responses", "RESPONSES", "#a78bfa"),
        ("impact", "IMPACT", "#34d399"),
    ];
    let mut lanes = BTreeMap::new();
    for (key, label, color) in lane_defs {
        lanes.insert(lane_id(key)?, Lane::new(label, color));
    }

    let node_defs: [(&str, &str, &str, f64, f64, &str); 11] = [
        (
            "problem1",
            "Environmental\nDegradation",
            "problem",
            40.0,
            130.0,
            "Anthropogenic actions are disrupting natural systems, releasing greenhouse gases, and driving climate change. These activities are intensifying ecological stresses such as soil deterioration, environmental toxicity, biodiversity loss, and shifting disease patterns.\n\nTogether, these forces operate through feedback loops, where one source of pressure amplifies the effects of the others, weakening the capacity of ecosystems to adapt and recover. Addressing this challenge requires identifying leverage points within this interconnected system, where carefully designed, system-aware technologies can reinforce resilience at foundational ecological levels.",
        ),
        (
            "problem2",
            "Salt\nStress",
            "problem",
            40.0,
            310.0,
            "Globally, over 1 billion hectares of land are salt-affected; in Australia alone, 169 million hectares are classified as salt-affected soils. Soil salinisation is the accumulation of soluble sodium chloride (NaCl) salts in the soil solution at high concentrations.\n\nClimate change is accelerating this process through a cycle of extended dry periods, high evaporation, and intense rainfall events. In drought conditions, salts from shallow water tables rise into the root zone through capillary action. Flood events raise water tables and mobilise salts into the root zone.\n\nAt the plant level, saline stress (NaCl) imposes: osmotic stress reducing water uptake, ionic toxicity from Na⁺/Cl⁻ accumulation, and secondary oxidative stress through reactive oxygen species generation. These mechanisms compound to inhibit germination, stunt growth, and disrupt cellular function.",
        ),
        (
            "tech1",
            "Cold Atmospheric\nPlasma",
            "technology",
            310.0,
            130.0,
            "Plasma is an ionised gas, often called the fourth state of matter. Cold atmospheric plasma (CAP) is a non-thermal form generated at ambient temperature and pressure, producing reactive chemistry without thermal damage to biological materials. It is a relatively young field, but CAP is already being applied across agriculture, food safety, water purification, and biomedical treatment. When applied to water, CAP generates reactive oxygen and nitrogen species (RONS) without chemicals or high energy input, producing plasma-activated water (PAW). PAW has demonstrated effects on seed germination, plant growth, stress tolerance, fertiliser manufacturing, and pathogen resistance.",
        ),
        (
            "tech2",
            "PAW\nChemistry",
            "technology",
            310.0,
            310.0,
            "Plasma-activated water (PAW) is created when electrical energy transforms air and water into a liquid rich in reactive oxygen and nitrogen species (RONS). Key long-lived species include hydrogen peroxide (H₂O₂), nitrite (NO₂⁻), and nitrate (NO₃⁻), while shorter-lived radicals like hydroxyl (·OH) decay within seconds of generation. These RONS act as endogenous signalling molecules that trigger the plant's defences and growth pathways.",
        ),
        (
            "method1",
            "Multifactorial\nDesign",
            "methodology",
            580.0,
            130.0,
            "I'm proposing a multi-factorial design crossing three water treatments (distilled water control, synthetic RONS cocktail, and PAW) with a salinity gradient (0 to 200 mM NaCl).\n\nThe synthetic cocktail matches PAW's measured H₂O₂, NO₂⁻, and NO₃⁻ concentrations, pH, etc., isolating whether observed effects are due to PAW's unique reactive species profile or individual chemical components.\n\nMeasurements are taken across germination, early growth, and late growth, to track how stress responses accumulate over time. At each window, responses are measured at morphological, physiological, and molecular scales.\n\nExact salt concentrations, factor levels, plant responses, etc. are TBD.",
        ),
        (
            "method2",
            "Treatment\nProtocol",
            "methodology",
            580.0,
            310.0,
            "Seeds are primed in freshly generated PAW, synthetic RONS solution, or distilled water, then sown under defined salt conditions. PAW is freshly generated and characterised before each application to ensure batch-to-batch consistency. Observations follow a systematic schedule from germination through to late development, with tissue sampling at defined timepoints for physiological and molecular assays. Specific observation windows, sampling protocols, and assays are TBD.",
        ),
        (
            "resp1",
            "Germination &\nEarly Development",
            "responses",
            850.0,
            60.0,
            "Germination and early development represent the most vulnerable window in the plant life cycle. Under salinity stress, seeds experience a thermodynamic barrier (reduced osmotic potential), which prevents the water uptake needed to re-activate metabolism, while ion toxicity from Na⁺ and Cl⁻ accumulation compromises the developing embryo.\n\nHere I track whole-organism responses (germination rates, timing, radicle protrusion, seedling size, and biomass) to determine whether PAW priming changes the outcome at the most observable level.",
        ),
        (
            "resp2",
            "Stress\nPhysiology",
            "responses",
            850.0,
            230.0,
            "Salt stress triggers a biphasic response. Firstly, high salt concentrations create a thermodynamic barrier to water uptake that mimics drought (osmotic). The second phase is ionic: Na⁺ and Cl⁻ accumulate to toxic levels, damaging cellular membranes and the photosynthetic apparatus.\n\nHere I investigate how the plant manages its water status, membrane integrity, ion balance, PSII stability, and oxidative damage. Thus revealing whether PAW priming helps the plant maintain cellular homeostasis and pre-alerts its antioxidant defences before severe damage occurs.",
        ),
        (
            "resp3",
            "Molecular\nResponse",
            "responses",
            850.0,
            400.0,
            "Plants adapt phenotypically to stress (plasticity) and record stress through epigenetic markers. DNA methylation marks on the genome regulate gene activity, and these marks shift dynamically under salinity.\n\nHere I investigate whether PAW priming leaves a detectable molecular signature (such as epigenetic \"memory\") and assess changes due to treatment versus stress alone.",
        ),
        (
            "impact1",
            "Implications",
            "impact",
            1120.0,
            155.0,
            "This project tests whether PAW meets a specific standard: effects that are biologically meaningful and ecologically responsible.\n\nBy measuring across morphological, physiological, and molecular scales, the work is designed to be relevant across disciplines, plant biology, stress physiology, epigenetics, and restoration ecology, and gauge the use of plasma in reinforcing resilience.\n\nWhether PAW proves to be a viable, waste-free intervention for degraded soils depends on the evidence this project produces.",
        ),
        (
            "impact2",
            "Future\nDirections",
            "impact",
            1120.0,
            320.0,
            "Next phases beyond Honours: multi-species comparison, microbial community changes, soil changes, field-scale PAW application trials, transgenerational epigenetic inheritance studies, and environmental impact assessment.",
        ),
    ];
    let mut nodes = Vec::with_capacity(node_defs.len());
    for (id, label, lane, x, y, blurb) in node_defs {
        nodes.push(Node::new(node_id(id)?, label, lane_id(lane)?, x, y, blurb));
    }

    let edge_defs = [
        ("problem1", "problem2", "narrows to"),
        ("tech1", "tech2", "produces"),
        ("method1", "method2", "implemented through"),
        ("method2", "resp1", "produces"),
        ("resp1", "resp2", "deepens to"),
        ("resp2", "resp3", "deepens to"),
    ];
    let mut edges = Vec::with_capacity(edge_defs.len());
    for (from, to, label) in edge_defs {
        edges.push(Edge::new_with(
            node_id(from)?,
            node_id(to)?,
            Some(label.to_owned()),
        ));
    }

    let annotation_defs = [
        (
            "problem1",
            "This project is not an attempt to model the entire earth system: its biophysical, climatic, and anthropogenic dimensions are far beyond the scope of my honours. The goal is to hold a systems view while testing whether a specific technology can be precise and responsible enough to reinforce ecosystem resilience without creating new problems. That is the question driving this project, and the rest of the work that follows is an honest attempt to answer it, starting from the state of the earth as it is today.",
        ),
        (
            "problem2",
            "Saline stress is measurable at every biological scale, from whole-organism germination rates to molecular markers, which makes it a strong candidate for testing whether a technology produces effects that are both statistically detectable and biologically meaningful. It is also one of the most directly addressable forms of environmental degradation: the stressor can be precisely controlled in a laboratory setting, and the affected land area is large enough that any genuine intervention has real-world relevance.",
        ),
        (
            "tech1",
            "Cold atmospheric plasma is the technology being examined against the question that drives this project: can it be precise and responsible enough to reinforce ecosystem resilience without creating new problems? It is being examined because its properties suggest it could meet that standard.\n\nCAP requires low energy input, uses no chemical additives, and produces no waste products. The reactive species it generates are transient, decaying naturally over time, and are chemically identical to signalling molecules that plants already use internally. Whether these properties translate into a genuinely responsible intervention under real stress conditions is the tension this project is built around.",
        ),
        (
            "tech2",
            "PAW composition varies between plasma sources and setups, and changes with age, so every batch must be characterised.",
        ),
        (
            "method1",
            "The synthetic cocktail tells us whether PAW's effects come from its known chemistry or the plasma. The salinity gradient tests dose-response. The three developmental windows test whether early priming holds or fades.",
        ),
        (
            "method2",
            "Most PAW studies use different setups and methods, making comparison difficult. Specific protocols will be informed by a methodology review.",
        ),
        (
            "impact1",
            "The standard is intentionally high. A positive result means PAW passed a difficult test. A negative result is equally valuable.",
        ),
    ];
    let mut annotations = BTreeMap::new();
    for (id, relevance) in annotation_defs {
        annotations.insert(node_id(id)?, Annotation::new(Some(relevance)));
    }

    let order_defs = [
        "problem1", "problem2", "tech1", "tech2", "method1", "method2", "resp1", "resp2", "resp3",
        "impact1", "impact2",
    ];
    let mut node_order = Vec::with_capacity(order_defs.len());
    for id in order_defs {
        node_order.push(node_id(id)?);
    }

    let meta = Meta {
        title: "Can plasma-activated water prime plants for salinity resilience in biologically meaningful and ecologically responsible ways?".to_owned(),
        thesis: "Investigating whether plasma-activated water can prime plants for salinity tolerance. Linking PAW chemistry to seed physiology, stress biomarkers, and molecular responses, and if successful, a system-aware intervention for ecological resilience.".to_owned(),
        institution: "RMIT University".to_owned(),
        program: "Honours 2026".to_owned(),
        cta: "Looking for advisors, collaborators, and people happy to share what they know. Students, researchers, scientists, engineers, all welcome.".to_owned(),
        contact_name: "Ali Al Saleh".to_owned(),
        contact_email: "s372318@student.rmit.edu.au".to_owned(),
        profile_url: "https://www.linkedin.com/in/xyz-ali/".to_owned(),
        reference_sections: vec![
            ReferenceSection {
                title: "Salt Stress & Plant Tolerance".to_owned(),
                entries: vec![
                    ReferenceEntry {
                        text: "Chinnusamy, V. & Zhu, J.-K. (2003). Plant salt tolerance. Plant Responses to Abiotic Stress, Topics in Current Genetics, Vol. 4, pp. 241-270.".to_owned(),
                        url: "https://doi.org/10.1007/978-3-540-39402-0_10".to_owned(),
                    },
                    ReferenceEntry {
                        text: "Wicke, B. et al. (2011). The global technical and economic potential of bioenergy from salt-affected soils. Energy & Environmental Science, 4(8), 2669-2681.".to_owned(),
                        url: "https://doi.org/10.1039/C1EE01029H".to_owned(),
                    },
                ],
            },
            ReferenceSection {
                title: "Plasma-Activated Water".to_owned(),
                entries: vec![
                    ReferenceEntry {
                        text: "Antoni, V., Cortese, E. & Navazio, L. (2025). Plasma-activated water to foster sustainable agriculture. Plants, People, Planet, 7(6), 1596-1603.".to_owned(),
                        url: "https://doi.org/10.1002/ppp3.70025".to_owned(),
                    },
                    ReferenceEntry {
                        text: "Montalbetti, R. et al. (2025). Production and chemical composition of plasma activated water: a systematic review and meta-analysis. Plasma Processes and Polymers, 22(1), 2400249.".to_owned(),
                        url: "https://doi.org/10.1002/ppap.202400249".to_owned(),
                    },
                ],
            },
            ReferenceSection {
                title: "Experimental Design & Methods".to_owned(),
                entries: vec![
                    ReferenceEntry {
                        text: "International Seed Testing Association (ISTA). International Rules for Seed Testing.".to_owned(),
                        url: "https://www.seedtest.org".to_owned(),
                    },
                    ReferenceEntry {
                        text: "Asghari, A. et al. (2025). Effects of plasma-activated water on germination and initial seedling growth of wheat. PLOS ONE, 20(1), e0312008.".to_owned(),
                        url: "https://doi.org/10.1371/journal.pone.0312008".to_owned(),
                    },
                ],
            },
            ReferenceSection {
                title: "Stress Physiology & Biomarkers".to_owned(),
                entries: vec![
                    ReferenceEntry {
                        text: "Barrs, H.D. & Weatherley, P.E. (1962). A re-examination of the relative turgidity technique for estimating water deficits in leaves. Australian Journal of Biological Sciences, 15(3), 413-428.".to_owned(),
                        url: "https://doi.org/10.1071/BI9620413".to_owned(),
                    },
                    ReferenceEntry {
                        text: "Bates, L.S., Waldren, R.P. & Teare, I.D. (1973). Rapid determination of free proline for water-stress studies. Plant and Soil, 39, 205-207.".to_owned(),
                        url: "https://doi.org/10.1007/BF00018060".to_owned(),
                    },
                ],
            },
            ReferenceSection {
                title: "Epigenetics & Molecular Response".to_owned(),
                entries: vec![
                    ReferenceEntry {
                        text: "Sun, M., Yang, Z., Liu, L. & Duan, L. (2022). DNA methylation in plant responses and adaption to abiotic stresses. International Journal of Molecular Sciences, 23(13), 6910.".to_owned(),
                        url: "https://doi.org/10.3390/ijms23136910".to_owned(),
                    },
                    ReferenceEntry {
                        text: "Yaish, M.W. et al. (2018). Genome-wide DNA methylation analysis in response to salinity in the model plant caliph medic (Medicago truncatula). BMC Genomics, 19(1), 78.".to_owned(),
                        url: "https://doi.org/10.1186/s12864-018-4484-5".to_owned(),
                    },
                ],
            },
        ],
    };

    ContentGraph::new(nodes, edges, lanes, annotations, node_order, meta).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::{demo_map, App, CELL_PX};
    use crate::gesture::SheetDrag;
    use crate::model::{NodeId, PanelKey, Selection};
    use crate::panel::SheetHeight;
    use crate::track::test_support::RecordingTracker;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn test_app() -> (App, RecordingTracker) {
        let tracker = RecordingTracker::default();
        let graph = demo_map().expect("demo map");
        let mut app =
            App::new(graph, true, Box::new(tracker.clone())).expect("app");
        app.frame_height = 40;
        app.diagram_area = Rect::new(0, 0, 100, 30);
        (app, tracker)
    }

    #[test]
    fn demo_map_is_consistent() {
        let graph = demo_map().expect("demo map");
        assert_eq!(graph.nodes().len(), 11);
        assert_eq!(graph.edges().len(), 6);
        assert_eq!(graph.lanes().len(), 5);
        assert_eq!(graph.node_order().len(), 11);
        assert_eq!(graph.meta().reference_sections.len(), 5);
        assert!(!graph.meta().contact_email.is_empty());
    }

    #[test]
    fn enter_starts_the_walkthrough() {
        let (mut app, tracker) = test_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.controller.selection(),
            &Selection::Node(nid("problem1"))
        );
        assert_eq!(tracker.paths(), vec!["node/problem1"]);

        // Enter with something selected does nothing.
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(tracker.paths().len(), 1);
    }

    #[test]
    fn arrows_walk_only_while_a_node_is_open() {
        let (mut app, tracker) = test_app();
        app.handle_key(key(KeyCode::Right));
        assert!(app.controller.selection().is_none());
        assert!(tracker.paths().is_empty());

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(
            app.controller.selection(),
            &Selection::Node(nid("problem2"))
        );
        app.handle_key(key(KeyCode::Left));
        assert_eq!(
            app.controller.selection(),
            &Selection::Node(nid("problem1"))
        );
    }

    #[test]
    fn panel_keys_and_tab_cycle() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(
            app.controller.selection().active_panel(),
            Some(PanelKey::Contact)
        );
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(
            app.controller.selection().active_panel(),
            Some(PanelKey::References)
        );
    }

    #[test]
    fn escape_closes_and_resets_sheet_height() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Char('a')));
        app.sheet.commit(300.0);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.controller.selection().is_none());
        assert_eq!(app.sheet, SheetHeight::Auto);
    }

    #[test]
    fn digit_activates_contact_link() {
        let (mut app, tracker) = test_app();
        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(tracker.paths(), vec!["panel/contact", "contact/email"]);
        // Out-of-range digits are ignored.
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(tracker.paths().len(), 2);
    }

    #[test]
    fn clicking_a_node_selects_it() {
        let (mut app, _) = test_app();
        let cell = app.raster.node_cell(&nid("problem1")).expect("cell");
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            (cell.x + 2) as u16,
            (cell.y + 2) as u16,
        ));
        assert_eq!(
            app.controller.selection(),
            &Selection::Node(nid("problem1"))
        );

        // Background click deselects.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(app.controller.selection().is_none());
    }

    #[test]
    fn handle_drag_commits_a_user_height() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_row = Some(20);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 20));
        assert!(app.drag.is_dragging());
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 15));
        assert!(app.live_sheet_px.is_some());
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 15));

        // 544 + 80 dragged, clamped to 92% of the 640-unit viewport.
        let expected = app.frame_height as f64 * CELL_PX * 0.92;
        assert_eq!(app.sheet, SheetHeight::User(expected));
        assert_eq!(app.drag, SheetDrag::Idle);
        assert_eq!(app.live_sheet_px, None);
    }

    #[test]
    fn squeezing_the_sheet_closed_clears_selection() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_row = Some(5);

        // Drag far down: height collapses under the close threshold.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 39));
        assert!(app.controller.selection().is_none());
        assert_eq!(app.sheet, SheetHeight::Auto);
    }

    #[test]
    fn tiny_terminal_still_draws_the_open_sheet() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Enter));

        // 4 rows leaves no room for the usual 3-row diagram reserve; the
        // sheet pane must shrink instead of panicking.
        let backend = ratatui::backend::TestBackend::new(20, 4);
        let mut terminal = ratatui::Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| super::draw(frame, &mut app))
            .expect("draw");
    }

    #[test]
    fn selection_centers_the_viewport() {
        let (mut app, _) = test_app();
        let impact = nid("impact1");
        let graph = app.graph.clone();
        assert!(app.controller.select_node(&graph, &impact));
        app.on_selection_changed();
        assert!(app.scroll_x > 0);
        let emphasized = app
            .scene
            .node_box(&impact)
            .expect("node box")
            .outline
            .emphasized;
        assert!(emphasized);
    }
}
