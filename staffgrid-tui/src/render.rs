//! Frame rendering: the table, the notice banners, and the intake form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use staffgrid_core::controller::GridController;
use staffgrid_core::model::{COLUMNS, Row};
use staffgrid_core::notify::{NoticeBoard, NoticeLevel};
use staffgrid_core::sort::SortDirection;

use crate::layout::{COLUMN_WIDTHS, FormField, ScreenLayout};

const TITLE: &str = "staffgrid — click a header to sort, double-click a cell to edit, Ctrl+Q quits";

pub fn draw(
    frame: &mut Frame,
    controller: &GridController,
    focus: FormField,
    layout: &ScreenLayout,
) {
    draw_line(
        frame,
        layout.title_y(),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::DarkGray))),
    );
    draw_table(frame, controller, layout);
    draw_notices(frame, controller.notices(), layout);
    draw_form(frame, controller, focus, layout);
}

/// Render one line at the given y, clipped to the frame.
fn draw_line(frame: &mut Frame, y: u16, line: Line<'_>) {
    let area = frame.area();
    if y < area.y || y >= area.y + area.height {
        return;
    }
    let rect = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(Paragraph::new(line), rect);
}

/// Pad or truncate cell text to its column width, with a trailing space as
/// the column separator.
fn pad_cell(text: &str, width: u16) -> String {
    let content_width = width.saturating_sub(1) as usize;
    let mut out: String = text.chars().take(content_width).collect();
    let used = out.chars().count();
    out.push_str(&" ".repeat(content_width - used));
    out.push(' ');
    out
}

fn draw_table(frame: &mut Frame, controller: &GridController, layout: &ScreenLayout) {
    let applied = controller.sort_state().applied();
    let header_style = Style::default().add_modifier(Modifier::BOLD);

    let header: Vec<Span<'_>> = COLUMNS
        .iter()
        .enumerate()
        .map(|(column, descriptor)| {
            let marker = match applied {
                Some((applied_column, direction)) if applied_column == column => {
                    match direction {
                        SortDirection::Ascending => " ▲",
                        SortDirection::Descending => " ▼",
                    }
                }
                _ => "",
            };
            let text = format!("{}{}", descriptor.label, marker);
            Span::styled(pad_cell(&text, COLUMN_WIDTHS[column]), header_style)
        })
        .collect();
    draw_line(frame, layout.header_y(), Line::from(header));

    let session = controller.editor().session();
    for (index, row) in controller.rows().iter().enumerate() {
        let spans = row_spans(row, index, session);
        draw_line(frame, layout.row_y(index), Line::from(spans));
    }
}

fn row_spans<'a>(
    row: &'a Row,
    index: usize,
    session: Option<&'a staffgrid_core::editor::EditSession>,
) -> Vec<Span<'a>> {
    let row_style = if row.active {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    (0..COLUMNS.len())
        .map(|column| {
            if let Some(session) = session
                && session.row == index
                && session.column == column
            {
                // The cell under edit shows the buffer and a block cursor in
                // place of its text.
                let text = format!("{}█", session.buffer());
                return Span::styled(
                    pad_cell(&text, COLUMN_WIDTHS[column]),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                );
            }
            Span::styled(pad_cell(row.cell(column), COLUMN_WIDTHS[column]), row_style)
        })
        .collect()
}

fn draw_notices(frame: &mut Frame, notices: &NoticeBoard, layout: &ScreenLayout) {
    for (index, (notice, _)) in notices.entries().iter().enumerate() {
        let style = match notice.level {
            NoticeLevel::Success => Style::default().fg(Color::Green),
            NoticeLevel::Error => Style::default().fg(Color::Red),
        };
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", notice.title),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(notice.message.clone(), style),
        ]);
        draw_line(frame, layout.notice_y(index), line);
    }
}

fn draw_form(
    frame: &mut Frame,
    controller: &GridController,
    focus: FormField,
    layout: &ScreenLayout,
) {
    let draft = controller.draft();

    for field in FormField::ALL {
        let value = match field {
            FormField::Name => draft.name.as_str(),
            FormField::Position => draft.position.as_str(),
            FormField::Age => draft.age.as_str(),
            FormField::Salary => draft.salary.as_str(),
            FormField::Office => draft.office.as_str(),
        };

        let focused = field == focus;
        let value_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        // The office field is a select, not free text.
        let rendered = if field == FormField::Office {
            format!("‹ {value} ›")
        } else if focused {
            format!("{value}█")
        } else {
            value.to_string()
        };

        let line = Line::from(vec![
            Span::styled(format!("{:<10}", format!("{}:", field.label())), Style::default()),
            Span::styled(rendered, value_style),
        ]);
        draw_line(frame, layout.field_y(field), line);
    }

    draw_line(
        frame,
        layout.save_y(),
        Line::from(Span::styled(
            "[ Save to table ]",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    );
}
