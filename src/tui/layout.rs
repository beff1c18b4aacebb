use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{Screen, TuiApp};

pub fn render(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // List or detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.screen {
        Screen::List => render_list(frame, app, chunks[0]),
        Screen::Detail => render_detail(frame, app, chunks[0]),
    }
    render_status_bar(frame, app, chunks[1]);
}

fn render_list(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let items: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| {
            let marker = if item.is_favorite() { "★" } else { " " };
            let line = Line::from(vec![
                Span::styled(
                    format!("{} {}", marker, item.name()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", item.tagline()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!(
        " Beers ({}) [{}/{}] ",
        app.items.len(),
        app.item_index + 1,
        app.items.len().max(1)
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.item_list_state);
}

fn render_detail(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let Some(detail) = app.detail.as_ref() else {
        return;
    };

    let favorite = if detail.is_favorite() { " ★" } else { "" };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}{}", detail.name(), favorite),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            detail.tagline_label(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(detail.abv_label()),
        Line::from(detail.ibu_label()),
        Line::from(Span::styled(
            format!("Image: {}", detail.image_url()),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from("─".repeat(area.width.saturating_sub(2) as usize)),
        Line::from(""),
    ];
    lines.extend(detail.description().lines().map(|l| Line::from(l.to_string())));

    let block = Block::default()
        .title(format!(" {} ", detail.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if let Some(ref msg) = app.status_message {
        if app.is_loading {
            format!("{}  (loading more beers...)", msg)
        } else {
            msg.clone()
        }
    } else if app.is_loading {
        "Loading more beers...".to_string()
    } else if app.screen == Screen::Detail {
        "j/k:Scroll  f:Favorite  o:Open image  Esc:Back  q:Quit".to_string()
    } else if !app.has_more {
        format!("{} beers, end of list  j/k:Nav  Enter:Details  f:Favorite  q:Quit", app.items.len())
    } else {
        "j/k:Nav  Enter:Details  f:Favorite  o:Open image  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_list_with_favorite_marker() {
        let mut app = TuiApp::new();
        let mut item = Item::new(1, "Buzz", "A Real Bitter Experience.", "", 4.5, Some(60.0), "");
        item.toggle_favorite();
        app.items = vec![item, Item::new(2, "Trashy Blonde", "You Know You Shouldn't", "", 4.1, None, "")];

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("★ Buzz"));
        assert!(text.contains("Trashy Blonde"));
        assert!(text.contains("Beers (2)"));
    }

    #[test]
    fn test_status_shows_loading() {
        let mut app = TuiApp::new();
        app.is_loading = true;

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("Loading more beers..."));
    }

    #[test]
    fn test_status_message_survives_loading() {
        let mut app = TuiApp::new();
        app.is_loading = true;
        app.set_status("Failed to open image".to_string());

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Failed to open image"));
        assert!(text.contains("loading more beers..."));
    }
}
