//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching business logic.
//!
//! ## For contributors
//!
//! * The layout is a two-row split: the feed on top and a one-line status
//!   bar at the bottom.  The detail overlay is drawn last, over the feed.
//! * Each category has its own card line in [`card_line`].  Colours come
//!   from the active [`Palette`].

use chrono::DateTime;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::feed::{FeedEntry, ItemData};
use crate::theme::Palette;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let palette = app.theme.palette();
    draw_feed_list(app, &palette, frame, main_area);
    draw_status_bar(app, &palette, frame, status_area);

    if app.detail_open {
        if let Some(entry) = app.selected_entry() {
            draw_details(entry, &palette, frame, main_area);
        }
    }
}

/// Render the scrollable feed.
fn draw_feed_list(app: &mut App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| ListItem::new(card_line(entry, palette)))
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(" Marketplace ")
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(palette.highlight_bg),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// One line per entry: badge, title, price, then a category-specific tail.
fn card_line<'a>(entry: &'a FeedEntry, palette: &Palette) -> Line<'a> {
    let badge_color = if entry.is_promotional() {
        palette.promo
    } else {
        palette.accent
    };

    let mut spans = vec![
        Span::styled(
            format!("{:<10}", entry.category.badge()),
            Style::default().fg(badge_color),
        ),
        Span::raw(" "),
        Span::styled(entry.title(), Style::default().fg(palette.text)),
    ];

    if let Some(price) = entry.data.price() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format_price(price), Style::default().fg(palette.price)));
    }

    let tail = match &entry.data {
        ItemData::Ad(ad) => ad.location.clone(),
        ItemData::Paid(paid) => paid.ad.location.clone(),
        ItemData::Trade(trade) => format!(
            "{} → {} at {}",
            trade.seller,
            trade.buyer,
            format_timestamp(&trade.timestamp)
        ),
        ItemData::Auction(auction) => format!("{} left", auction.time_left),
        ItemData::Suggestion(suggestion) => suggestion.reason.clone(),
    };
    if !tail.trim().is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(tail, Style::default().fg(palette.muted)));
    }

    Line::from(spans)
}

/// `"149.9"` → `"$149.90"`; anything unparseable is shown as given.
fn format_price(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(p) if p.is_finite() => format!("${p:.2}"),
        _ => raw.to_string(),
    }
}

fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let refreshed = app
        .last_refresh
        .map(|t| format!("updated {}", t.format("%H:%M")))
        .unwrap_or_default();
    let pending = if app.pending { "  [new]" } else { "" };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(palette.status)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", app.entries.len()),
            Style::default().fg(palette.price),
        ),
        Span::styled(pending, Style::default().fg(palette.promo)),
        Span::raw("  "),
        Span::styled(format!("sort: {}", app.sort), Style::default().fg(palette.accent)),
        Span::raw("  "),
        Span::styled(refreshed, Style::default().fg(palette.muted)),
        Span::raw("  q: quit  s: sort  r: refresh  ⏎: details  t: theme"),
    ]));
    frame.render_widget(status, area);
}

/// Centered overlay with the full listing.
fn draw_details(entry: &FeedEntry, palette: &Palette, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 70, 60);

    let label = |name: &'static str| Span::styled(format!("{name:<12}"), Style::default().fg(palette.muted));
    let mut lines = vec![
        Line::from(Span::styled(
            entry.title().to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label("kind"), Span::raw(entry.category.as_str())]),
        Line::from(vec![label("id"), Span::raw(entry.id().to_string())]),
    ];
    if let Some(price) = entry.data.price() {
        lines.push(Line::from(vec![label("price"), Span::raw(format_price(price))]));
    }

    match &entry.data {
        ItemData::Ad(ad) => {
            lines.push(Line::from(vec![label("location"), Span::raw(ad.location.clone())]));
            lines.push(Line::from(vec![label("category"), Span::raw(ad.category.clone())]));
            lines.push(Line::from(vec![label("seller"), Span::raw(ad.user.name.clone())]));
            lines.push(Line::from(vec![label("photos"), Span::raw(ad.image_urls.len().to_string())]));
        }
        ItemData::Paid(paid) => {
            lines.push(Line::from(vec![label("location"), Span::raw(paid.ad.location.clone())]));
            lines.push(Line::from(vec![label("seller"), Span::raw(paid.ad.user.name.clone())]));
            if paid.sponsored {
                lines.push(Line::from(Span::styled("Sponsored", Style::default().fg(palette.promo))));
            }
        }
        ItemData::Trade(trade) => {
            lines.push(Line::from(vec![label("seller"), Span::raw(trade.seller.clone())]));
            lines.push(Line::from(vec![label("buyer"), Span::raw(trade.buyer.clone())]));
            lines.push(Line::from(vec![label("when"), Span::raw(format_timestamp(&trade.timestamp))]));
        }
        ItemData::Auction(auction) => {
            lines.push(Line::from(vec![label("time left"), Span::raw(auction.time_left.clone())]));
            lines.push(Line::from(vec![label("location"), Span::raw(auction.location.clone())]));
            lines.push(Line::from(vec![label("seller"), Span::raw(auction.user.name.clone())]));
        }
        ItemData::Suggestion(suggestion) => {
            lines.push(Line::from(vec![label("why"), Span::raw(suggestion.reason.clone())]));
            lines.push(Line::from(vec![label("category"), Span::raw(suggestion.category.clone())]));
        }
    }

    let description = entry.data.description();
    if !description.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(description.to_string()));
    }

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Details (Esc to close) ")
                .borders(Borders::ALL),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(details, popup);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::app::tests::loaded_app;
    use crate::feed::{Interleaver, SortMode};

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();

        let buf = terminal.backend().buffer().clone();
        buf.content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn draw_does_not_panic_with_no_entries() {
        let mut app = App::new(SortMode::Popular, Interleaver::default(), StdRng::seed_from_u64(0));
        render(&mut app);
    }

    #[test]
    fn status_shows_count_and_sort() {
        let mut app = loaded_app();
        let text = render(&mut app);
        assert!(text.contains("12 items"), "status bar should show item count");
        assert!(text.contains("sort: popular"));
    }

    #[test]
    fn status_flags_a_pending_snapshot() {
        let mut app = loaded_app();
        assert!(!render(&mut app).contains("[new]"));

        app.pending = true;
        assert!(render(&mut app).contains("12 items  [new]"));
    }

    #[test]
    fn cards_show_badges() {
        let mut app = loaded_app();
        let text = render(&mut app);
        assert!(text.contains("TRADE"));
        assert!(text.contains("AUCTION"));
    }

    #[test]
    fn detail_overlay_renders_selected_entry() {
        let mut app = loaded_app();
        let index = app.entries.iter().position(|e| e.id() == "u1").unwrap();
        app.list_state.select(Some(index));
        app.toggle_details();

        let text = render(&mut app);
        assert!(text.contains("Details"));
        assert!(text.contains("time left"));
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price("149.9"), "$149.90");
        assert_eq!(format_price("call me"), "call me");
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(format_timestamp("2026-10-01T12:30:00Z"), "2026-10-01 12:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
