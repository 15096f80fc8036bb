//! Interactive TUI for the onboarding wizard
//!
//! Renders the step sequence from `flow` and drives a `WizardController`.
//! The controller owns all form state; this module owns only transient UI
//! state (list cursor, field focus, quit overlay) and the terminal.
//!
//! # Flow
//!
//! 1. Profile basics (name)
//! 2. Interest domains, weekly time, methods, proficiency
//! 3. Personalization opt-in - taking it rebuilds the controller over the
//!    longer track with the draft carried forward
//! 4. Optional personalization steps
//! 5. Summary and submit
//!
//! # Key features
//!
//! - Per-step validation with inline error messages
//! - Quit confirmation dialog with overlay
//! - Step position indicator in the frame title
//! - Context-sensitive help text in the footer
//! - Panic-safe terminal cleanup

use std::io::{stdout, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Terminal,
};

use crate::onboarding::flow::{self, field, step_id};
use crate::wizard::{Draft, FieldKind, FieldValue, StepDefinition, WizardController, WizardOptions};

/// Result of running the wizard to the end of its event loop.
#[derive(Debug, Clone)]
pub enum WizardOutcome {
    /// The summary step validated and the draft snapshot was handed off.
    Completed(Draft),
    /// The user quit mid-flow; the partial draft is returned so the
    /// caller can offer to save it.
    Abandoned(Draft),
}

/// Action to take after handling an event.
#[derive(Debug, Clone)]
enum StepAction {
    NextStep,
    PrevStep,
    Quit,
    Stay,
    Complete(Draft),
}

/// Transient UI state layered over the controller.
struct OnboardingUi {
    controller: WizardController,
    /// Which track the current step sequence belongs to
    personalize: bool,
    /// List cursor on choice/multi-select/flag steps
    selected: usize,
    /// Focused input on multi-field text steps
    field_focus: usize,
    show_quit_confirm: bool,
}

impl OnboardingUi {
    fn new(initial_draft: Draft, resume_step: usize, personalize: bool) -> Self {
        let controller = WizardController::with_options(
            flow::build_steps(personalize),
            WizardOptions {
                initial_step_index: resume_step,
                initial_draft,
            },
        );
        let mut ui = Self {
            controller,
            personalize,
            selected: 0,
            field_focus: 0,
            show_quit_confirm: false,
        };
        ui.sync_cursor();
        ui
    }

    /// Swap to the other track, carrying the draft and position forward.
    ///
    /// Step sequences are immutable, so the branch is a rebuild, not a
    /// mutation.
    fn switch_track(&mut self, personalize: bool) {
        if self.personalize == personalize {
            return;
        }
        let options = WizardOptions {
            initial_step_index: self.controller.current_index(),
            initial_draft: self.controller.draft().clone(),
        };
        self.controller = WizardController::with_options(flow::build_steps(personalize), options);
        self.personalize = personalize;
    }

    /// Align the list cursor with whatever the draft already holds for
    /// the active step, so re-entering a step highlights the prior answer.
    fn sync_cursor(&mut self) {
        self.field_focus = 0;
        self.selected = 0;
        let Some(step) = self.controller.current_step() else {
            return;
        };
        let Some(spec) = step.fields.first() else {
            return;
        };
        match &spec.kind {
            FieldKind::Choice { options } => {
                if let Some(current) = self
                    .controller
                    .draft()
                    .get(&spec.name)
                    .and_then(|v| v.as_text())
                {
                    self.selected = options.iter().position(|o| o == current).unwrap_or(0);
                }
            }
            FieldKind::Flag => {
                // Yes is row 0, No is row 1
                if let Some(false) = self
                    .controller
                    .draft()
                    .get(&spec.name)
                    .and_then(|v| v.as_flag())
                {
                    self.selected = 1;
                }
            }
            _ => {}
        }
    }

    fn text_of(&self, name: &str) -> String {
        self.controller
            .draft()
            .get(name)
            .and_then(|v| v.as_text())
            .unwrap_or("")
            .to_string()
    }

    fn tags_of(&self, name: &str) -> Vec<String> {
        self.controller
            .draft()
            .get(name)
            .and_then(|v| v.as_tags())
            .map(|t| t.to_vec())
            .unwrap_or_default()
    }
}

// ============================================================================
// Terminal setup/teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry point
// ============================================================================

/// Run the onboarding wizard.
///
/// `initial_draft` and `resume_step` seed the controller (resume is a
/// construction input, never controller state); `personalize` preselects
/// the longer track.
pub fn run_onboarding(
    initial_draft: Draft,
    resume_step: usize,
    personalize: bool,
) -> Result<WizardOutcome> {
    let mut ui = OnboardingUi::new(initial_draft, resume_step, personalize);

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, &mut ui);
    teardown_terminal();

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ui: &mut OnboardingUi,
) -> Result<WizardOutcome> {
    loop {
        terminal.draw(|f| render_wizard(f, ui))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Quit confirmation overlay swallows everything else
        if ui.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    return Ok(WizardOutcome::Abandoned(ui.controller.draft().clone()));
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ui.show_quit_confirm = false;
                }
                _ => {}
            }
            continue;
        }

        if key.code == KeyCode::Esc {
            ui.show_quit_confirm = true;
            continue;
        }

        let action = handle_step_event(ui, key);
        match action {
            StepAction::NextStep => {
                if ui.controller.next_step() {
                    ui.sync_cursor();
                }
            }
            StepAction::PrevStep => {
                ui.controller.prev_step();
                ui.sync_cursor();
            }
            StepAction::Quit => {
                ui.show_quit_confirm = true;
            }
            StepAction::Complete(draft) => {
                return Ok(WizardOutcome::Completed(draft));
            }
            StepAction::Stay => {}
        }
    }
}

// ============================================================================
// Event handling
// ============================================================================

fn handle_step_event(ui: &mut OnboardingUi, key: KeyEvent) -> StepAction {
    let Some(step) = ui.controller.current_step().cloned() else {
        return StepAction::Stay;
    };

    match step.id.as_str() {
        step_id::PROFILE => handle_profile(ui, &step, key),
        step_id::PERSONALIZE => handle_personalize(ui, key),
        step_id::SUMMARY => handle_summary(ui, key),
        _ => match step.fields.first().map(|f| f.kind.clone()) {
            Some(FieldKind::Number { .. }) => handle_number(ui, &step, key),
            Some(FieldKind::Choice { options }) => handle_choice(ui, &step, &options, key),
            Some(FieldKind::MultiSelect { options }) => handle_multi(ui, &step, &options, key),
            Some(FieldKind::Flag) => handle_flag(ui, &step, key),
            _ => StepAction::Stay,
        },
    }
}

/// Text step with one input per field; Tab or arrows move focus.
fn handle_profile(ui: &mut OnboardingUi, step: &StepDefinition, key: KeyEvent) -> StepAction {
    let field_count = step.fields.len();
    let name = step.fields[ui.field_focus.min(field_count - 1)].name.clone();

    match key.code {
        KeyCode::Enter => StepAction::NextStep,
        KeyCode::Tab | KeyCode::Down => {
            ui.field_focus = (ui.field_focus + 1) % field_count;
            StepAction::Stay
        }
        KeyCode::Up => {
            ui.field_focus = ui.field_focus.checked_sub(1).unwrap_or(field_count - 1);
            StepAction::Stay
        }
        KeyCode::Char(c) => {
            let mut text = ui.text_of(&name);
            text.push(c);
            ui.controller.set_field(&name, FieldValue::Text(text));
            StepAction::Stay
        }
        KeyCode::Backspace => {
            let mut text = ui.text_of(&name);
            if text.pop().is_some() {
                ui.controller.set_field(&name, FieldValue::Text(text));
                StepAction::Stay
            } else {
                StepAction::PrevStep
            }
        }
        _ => StepAction::Stay,
    }
}

fn handle_number(ui: &mut OnboardingUi, step: &StepDefinition, key: KeyEvent) -> StepAction {
    let name = step.fields[0].name.clone();
    match key.code {
        KeyCode::Enter => StepAction::NextStep,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let mut text = ui.text_of(&name);
            text.push(c);
            ui.controller.set_field(&name, FieldValue::Text(text));
            StepAction::Stay
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
        KeyCode::Backspace => {
            let mut text = ui.text_of(&name);
            if text.pop().is_some() {
                ui.controller.set_field(&name, FieldValue::Text(text));
                StepAction::Stay
            } else {
                StepAction::PrevStep
            }
        }
        _ => StepAction::Stay,
    }
}

fn handle_choice(
    ui: &mut OnboardingUi,
    step: &StepDefinition,
    options: &[String],
    key: KeyEvent,
) -> StepAction {
    let name = step.fields[0].name.clone();
    match key.code {
        KeyCode::Up => {
            ui.selected = ui.selected.saturating_sub(1);
            StepAction::Stay
        }
        KeyCode::Down => {
            ui.selected = (ui.selected + 1).min(options.len().saturating_sub(1));
            StepAction::Stay
        }
        KeyCode::Enter => {
            ui.controller
                .set_field(&name, FieldValue::Text(options[ui.selected].clone()));
            StepAction::NextStep
        }
        KeyCode::Backspace => StepAction::PrevStep,
        KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
        _ => StepAction::Stay,
    }
}

fn handle_multi(
    ui: &mut OnboardingUi,
    step: &StepDefinition,
    options: &[String],
    key: KeyEvent,
) -> StepAction {
    let name = step.fields[0].name.clone();
    match key.code {
        KeyCode::Up => {
            ui.selected = ui.selected.saturating_sub(1);
            StepAction::Stay
        }
        KeyCode::Down => {
            ui.selected = (ui.selected + 1).min(options.len().saturating_sub(1));
            StepAction::Stay
        }
        KeyCode::Char(' ') => {
            // Toggle membership; the controller preserves selection order
            ui.controller
                .set_field(&name, FieldValue::Text(options[ui.selected].clone()));
            StepAction::Stay
        }
        KeyCode::Enter => StepAction::NextStep,
        KeyCode::Backspace => StepAction::PrevStep,
        KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
        _ => StepAction::Stay,
    }
}

fn handle_flag(ui: &mut OnboardingUi, step: &StepDefinition, key: KeyEvent) -> StepAction {
    let name = step.fields[0].name.clone();
    match key.code {
        KeyCode::Up | KeyCode::Down => {
            ui.selected = 1 - ui.selected.min(1);
            StepAction::Stay
        }
        KeyCode::Enter => {
            ui.controller
                .set_field(&name, FieldValue::Flag(ui.selected == 0));
            StepAction::NextStep
        }
        KeyCode::Backspace => StepAction::PrevStep,
        KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
        _ => StepAction::Stay,
    }
}

/// The opt-in step is a flag step that can also change the track.
fn handle_personalize(ui: &mut OnboardingUi, key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Up | KeyCode::Down => {
            ui.selected = 1 - ui.selected.min(1);
            StepAction::Stay
        }
        KeyCode::Enter => {
            let opted_in = ui.selected == 0;
            ui.controller
                .set_field(field::PERSONALIZE, FieldValue::Flag(opted_in));
            ui.switch_track(opted_in);
            StepAction::NextStep
        }
        KeyCode::Backspace => StepAction::PrevStep,
        KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
        _ => StepAction::Stay,
    }
}

fn handle_summary(ui: &mut OnboardingUi, key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter => {
            let mut snapshot = None;
            match ui.controller.submit(|draft| snapshot = Some(draft.clone())) {
                Ok(()) => match snapshot {
                    Some(draft) => StepAction::Complete(draft),
                    None => StepAction::Stay,
                },
                // Last step carries no fields, but a seeded draft could
                // still be rejected; stay and show the messages
                Err(_) => StepAction::Stay,
            }
        }
        KeyCode::Backspace => StepAction::PrevStep,
        KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
        _ => StepAction::Stay,
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Accent color per step
fn step_color(step: &StepDefinition) -> Color {
    match step.id.as_str() {
        step_id::PROFILE => Color::Cyan,
        step_id::DOMAINS | step_id::SOURCES => Color::Magenta,
        step_id::WEEKLY_TIME | step_id::TIMELINE => Color::Yellow,
        step_id::METHODS | step_id::MOTIVATION => Color::Blue,
        step_id::SUMMARY => Color::Green,
        _ => Color::Cyan,
    }
}

/// Render the complete wizard UI with persistent shell layout
fn render_wizard(f: &mut Frame, ui: &OnboardingUi) {
    let area = f.area();

    let logo_height = 8u16;
    let hint_height = 1u16;

    let box_width = 66u16;
    let ideal_box_height = 20u16;
    let box_height =
        ideal_box_height.min(area.height.saturating_sub(logo_height + hint_height + 2));

    let total_height = logo_height + box_height + hint_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    let logo_area = Rect::new(x, y, box_width.min(area.width), logo_height);
    render_logo(f, logo_area);

    let box_y = y + logo_height;
    let box_area = Rect::new(x, box_y, box_width.min(area.width), box_height.max(10));
    f.render_widget(Clear, box_area);

    let Some(step) = ui.controller.current_step() else {
        return;
    };
    let color = step_color(step);

    let title_text = format!(
        " Step {}/{} \u{00b7} {} ",
        ui.controller.current_index() + 1,
        ui.controller.step_count(),
        step.title
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    render_step(f, inner, ui, step);

    // Selection count on the bottom border for multi-select steps
    if let Some(spec) = step.fields.first() {
        if matches!(spec.kind, FieldKind::MultiSelect { .. }) {
            let count = ui.tags_of(&spec.name).len();
            let ct = format!(" {} selected ", count);
            let ct_len = ct.len() as u16;
            let ct_area = Rect::new(
                box_area.x + box_area.width - ct_len - 1,
                box_area.y + box_area.height - 1,
                ct_len,
                1,
            );
            f.render_widget(
                Paragraph::new(Span::styled(ct, Style::default().fg(Color::DarkGray))),
                ct_area,
            );
        }
    }

    let hint_y = box_area.y + box_area.height;
    let hint_area = Rect::new(x, hint_y, box_width.min(area.width), 1);
    render_help_bar(f, hint_area, ui, step);

    if ui.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

fn render_logo(f: &mut Frame, area: Rect) {
    let logo_lines = vec![
        Line::from(Span::styled(
            " ██████╗ ██╗   ██╗███████╗███████╗████████╗",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██╔═══██╗██║   ██║██╔════╝██╔════╝╚══██╔══╝",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║   ██║██║   ██║█████╗  ███████╗   ██║   ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║▄▄ ██║██║   ██║██╔══╝  ╚════██║   ██║   ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "╚██████╔╝╚██████╔╝███████╗███████║   ██║   ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            " ╚══▀▀═╝  ╚═════╝ ╚══════╝╚══════╝   ╚═╝   ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your learning journey, one quest at a time",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let logo_paragraph = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_paragraph, area);
}

fn render_step(f: &mut Frame, area: Rect, ui: &OnboardingUi, step: &StepDefinition) {
    // Reserve the last rows of the box for validation messages
    let error_lines = ui.controller.validation_errors().len().min(3) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(error_lines)])
        .split(area);

    match step.id.as_str() {
        step_id::PROFILE => render_profile(f, chunks[0], ui, step),
        step_id::PERSONALIZE => render_personalize(f, chunks[0], ui),
        step_id::SUMMARY => render_summary(f, chunks[0], ui),
        _ => match step.fields.first().map(|s| &s.kind) {
            Some(FieldKind::Number { min, max }) => {
                render_number(f, chunks[0], ui, step, *min, *max)
            }
            Some(FieldKind::Choice { options }) => {
                render_option_list(f, chunks[0], ui, step, options, false)
            }
            Some(FieldKind::MultiSelect { options }) => {
                render_option_list(f, chunks[0], ui, step, options, true)
            }
            Some(FieldKind::Flag) => render_flag(f, chunks[0], ui, step),
            _ => {}
        },
    }

    if error_lines > 0 {
        let messages: Vec<Line> = ui
            .controller
            .validation_errors()
            .values()
            .take(3)
            .map(|m| Line::from(Span::styled(format!("  {}", m), Style::default().fg(Color::Red))))
            .collect();
        f.render_widget(Paragraph::new(messages), chunks[1]);
    }
}

fn render_profile(f: &mut Frame, area: Rect, ui: &OnboardingUi, step: &StepDefinition) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Let's get to know you better",
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
    ];

    for (i, spec) in step.fields.iter().enumerate() {
        let value = ui.text_of(&spec.name);
        let focused = i == ui.field_focus;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![
            Span::styled(format!("  {:<12}", format!("{}:", spec.label)), label_style),
            Span::styled(value, Style::default().fg(Color::White).bold()),
        ];
        if focused {
            spans.push(Span::styled("\u{258c}", Style::default().fg(Color::Cyan)));
        }
        content.push(Line::from(spans));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        "  Tab switches fields",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(content), area);
}

fn render_number(
    f: &mut Frame,
    area: Rect,
    ui: &OnboardingUi,
    step: &StepDefinition,
    min: u32,
    max: u32,
) {
    let spec = &step.fields[0];
    let value = ui.text_of(&spec.name);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", spec.label),
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  How many hours can you dedicate each week? ({}-{})", min, max),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Hours: ", Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White).bold()),
            Span::styled("\u{258c}", Style::default().fg(Color::Yellow)),
        ]),
    ];
    f.render_widget(Paragraph::new(content), area);
}

fn render_option_list(
    f: &mut Frame,
    area: Rect,
    ui: &OnboardingUi,
    step: &StepDefinition,
    options: &[String],
    multi: bool,
) {
    let spec = &step.fields[0];
    let color = step_color(step);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let prompt = if multi {
        format!("  Select all that apply \u{00b7} {}", spec.label)
    } else {
        format!("  Select one \u{00b7} {}", spec.label)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            prompt,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let chosen = if multi {
        ui.tags_of(&spec.name)
    } else {
        vec![ui.text_of(&spec.name)]
    };

    let max_visible = chunks[1].height as usize;
    let start_idx = if ui.selected >= max_visible {
        ui.selected - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(max_visible)
        .map(|(i, opt)| {
            let is_chosen = chosen.iter().any(|c| c == opt);
            let marker = if multi {
                if is_chosen { "[x]" } else { "[ ]" }
            } else if is_chosen {
                "(\u{2022})"
            } else {
                "( )"
            };
            let style = if i == ui.selected {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if is_chosen {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", marker, opt)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(ui.selected.saturating_sub(start_idx)));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn render_yes_no(f: &mut Frame, area: Rect, ui: &OnboardingUi, prompt: &str, detail: &str) {
    let color = Color::Cyan;
    let options = ["Yes", "No"];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let desc = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", prompt),
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", detail),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(desc, chunks[0]);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == ui.selected {
                Style::default().fg(Color::Black).bg(color).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {}", opt)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(ui.selected));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn render_personalize(f: &mut Frame, area: Rect, ui: &OnboardingUi) {
    render_yes_no(
        f,
        area,
        ui,
        "Personalize your learning plan?",
        "Adds four short questions: motivation, timeline, certifications, sources",
    );
}

fn render_flag(f: &mut Frame, area: Rect, ui: &OnboardingUi, step: &StepDefinition) {
    let spec = &step.fields[0];
    render_yes_no(
        f,
        area,
        ui,
        &format!("{}?", spec.label),
        "This is optional - pick either and continue",
    );
}

fn render_summary(f: &mut Frame, area: Rect, ui: &OnboardingUi) {
    let color = Color::Green;
    let draft = ui.controller.draft();

    let text_or_dash = |name: &str| -> String {
        draft
            .get(name)
            .and_then(|v| v.as_text())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("\u{2014}")
            .to_string()
    };
    let tags_or_dash = |name: &str| -> String {
        let tags = ui.tags_of(name);
        if tags.is_empty() {
            "\u{2014}".to_string()
        } else {
            tags.join(", ")
        }
    };

    let full_name = {
        let first = text_or_dash(field::FIRST_NAME);
        let last = ui.text_of(field::LAST_NAME);
        if last.trim().is_empty() {
            first
        } else {
            format!("{} {}", first, last)
        }
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Profile Summary",
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
        summary_line("Name:", full_name, color),
        summary_line("Domains:", tags_or_dash(field::DOMAINS), color),
        summary_line(
            "Weekly time:",
            format!("{} h", text_or_dash(field::WEEKLY_HOURS)),
            color,
        ),
        summary_line("Methods:", tags_or_dash(field::METHODS), color),
        summary_line("Proficiency:", text_or_dash(field::PROFICIENCY), color),
    ];

    if flow::personalize_requested(draft) {
        let certs = match draft
            .get(field::CERTIFICATIONS)
            .and_then(|v| v.as_flag())
        {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "\u{2014}",
        };
        content.push(Line::from(""));
        content.push(summary_line("Motivation:", text_or_dash(field::MOTIVATION), color));
        content.push(summary_line("Timeline:", text_or_dash(field::TIMELINE), color));
        content.push(summary_line("Certifications:", certs.to_string(), color));
        content.push(summary_line("Sources:", tags_or_dash(field::SOURCES), color));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" to submit your profile", Style::default().fg(Color::DarkGray)),
    ]));

    f.render_widget(Paragraph::new(content), area);
}

fn summary_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_help_bar(f: &mut Frame, area: Rect, ui: &OnboardingUi, step: &StepDefinition) {
    let is_multi = step
        .fields
        .first()
        .map(|s| matches!(s.kind, FieldKind::MultiSelect { .. }))
        .unwrap_or(false);
    let is_text = matches!(
        step.fields.first().map(|s| &s.kind),
        Some(FieldKind::Text) | Some(FieldKind::Number { .. })
    );

    let mut spans = vec![];

    spans.push(Span::styled("  Enter", Style::default().fg(Color::Cyan)));
    if ui.controller.is_last_step() {
        spans.push(Span::styled(" submit  ", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(" next  ", Style::default().fg(Color::DarkGray)));
    }

    if is_multi {
        spans.push(Span::styled("Space", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(" toggle  ", Style::default().fg(Color::DarkGray)));
    }

    if ui.controller.current_index() > 0 {
        spans.push(Span::styled("Bksp", Style::default().fg(Color::Cyan)));
        if is_text {
            spans.push(Span::styled(
                " delete/back  ",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(" back  ", Style::default().fg(Color::DarkGray)));
        }
    }

    spans.push(Span::styled("Esc", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" quit", Style::default().fg(Color::DarkGray)));

    let help_line = Line::from(spans);
    let paragraph = Paragraph::new(help_line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(44, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Leave Onboarding? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your answers can be saved as a draft.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" leave  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" stay", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}
