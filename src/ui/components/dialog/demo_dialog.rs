//! Book a Demo dialog

use super::base::{render_dialog_frame, wrap_text, DialogConfig};
use crate::app::App;
use crate::state::{DemoField, DemoForm, DialogFocus, SubmissionStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::{draw_field, field_height, FieldView};
use crate::ui::{BRAND, MUTED};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 64;

const TITLE: &str = "Book a Demo";
const DESCRIPTION: &str = "Let's schedule a personalized demo of Lore. Fill out the form below and we'll get back to you shortly.";
const SUCCESS_TITLE: &str = "Request Submitted!";
const SUCCESS_BODY: &str = "We've received your demo request. Our team will reach out to you shortly to schedule a time.";

pub fn render_demo_dialog(frame: &mut Frame, app: &App) {
    let (Some(form), Some(status)) = (app.workflow.form(), app.workflow.status()) else {
        return;
    };

    let config = DialogConfig {
        title: TITLE,
        title_color: Color::White,
        border_color: BRAND,
        max_width: DIALOG_WIDTH,
    };
    let text_width = DIALOG_WIDTH.saturating_sub(4) as usize;
    let description = wrap_text(DESCRIPTION, text_width);
    let description_height = description.len() as u16 + 1;

    if *status == SubmissionStatus::Succeeded {
        let body = wrap_text(SUCCESS_BODY, text_width);
        let height = description_height + 3 + body.len() as u16;
        let inner = render_dialog_frame(frame, &config, height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(description_height), Constraint::Min(0)])
            .split(inner);
        draw_description(frame, chunks[0], description);
        draw_success(frame, chunks[1], body);
        return;
    }

    let error = status
        .failure_message()
        .map(|message| wrap_text(message, text_width.saturating_sub(2)));
    let error_title = status
        .failure_kind()
        .map(|kind| format!(" {} error ", kind.label()))
        .unwrap_or_default();
    let error_height = error.as_ref().map_or(0, |lines| lines.len() as u16 + 2);

    let mut constraints = vec![Constraint::Length(description_height)];
    constraints.extend(
        DemoField::ALL
            .iter()
            .map(|field| Constraint::Length(field_height(*field))),
    );
    constraints.push(Constraint::Length(error_height));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let content_height = description_height
        + DemoField::ALL.iter().map(|f| field_height(*f)).sum::<u16>()
        + error_height
        + BUTTON_HEIGHT;
    let inner = render_dialog_frame(frame, &config, content_height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    draw_description(frame, chunks[0], description);
    draw_fields(frame, &chunks[1..=DemoField::ALL.len()], app, form, status);

    let error_index = DemoField::ALL.len() + 1;
    if let Some(lines) = error {
        draw_error(frame, chunks[error_index], &error_title, lines);
    }
    draw_buttons(frame, chunks[error_index + 1], app);
}

fn draw_description(frame: &mut Frame, area: Rect, lines: Vec<String>) {
    let lines: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(MUTED))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_fields(
    frame: &mut Frame,
    areas: &[Rect],
    app: &App,
    form: &DemoForm,
    status: &SubmissionStatus,
) {
    for (field, area) in DemoField::ALL.iter().zip(areas.iter()) {
        let view = FieldView {
            field: *field,
            value: form.value(*field),
            is_active: app.state.dialog_focus == DialogFocus::Field(*field),
            is_missing: app.missing_fields.contains(field),
            is_disabled: status.is_in_flight(),
        };
        draw_field(frame, *area, &view);
    }
}

fn draw_error(frame: &mut Frame, area: Rect, title: &str, lines: Vec<String>) {
    let lines: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::LightRed))))
        .collect();
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(panel, area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let in_flight = app.workflow.is_in_flight();
    let focus = app.state.dialog_focus;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(18),
        ])
        .split(area);

    render_button(
        frame,
        chunks[1],
        "Cancel",
        focus == DialogFocus::Cancel,
        !in_flight,
    );

    let submit_label = if in_flight {
        "Submitting..."
    } else {
        "Request Demo"
    };
    render_button(
        frame,
        chunks[3],
        submit_label,
        focus == DialogFocus::Submit,
        app.workflow.can_submit(),
    );
}

fn draw_success(frame: &mut Frame, area: Rect, body: Vec<String>) {
    let mut lines = vec![
        Line::from(Span::styled(
            "✓",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            SUCCESS_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        body.into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(MUTED)))),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
