use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, BrowseScreen, HomeScreen, NoticeKind, Screen};
use crate::models::{AnalysisRecord, InventionSummary, Pattern, TimelineEntry};
use crate::query::SortOrder;
use crate::state::{CollectionView, DetailState, DetailView, Presentation, Provenance};
use crate::view::{self, Slice};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match &app.screen {
        Screen::Home(home) => render_home(frame, app, home, chunks[1]),
        Screen::Inventions(browse) => render_inventions(frame, app, browse, chunks[1]),
        Screen::Patterns(browse) => render_patterns(frame, app, browse, chunks[1]),
        Screen::Timeline { browse, order } => {
            render_timeline(frame, app, browse, *order, chunks[1])
        }
        Screen::Analysis(detail) => render_analysis(frame, app, detail, chunks[1]),
    }

    render_status(frame, app, chunks[2]);

    if app.show_help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let section = match &app.screen {
        Screen::Home(_) => "Home",
        Screen::Inventions(_) => "All Inventions",
        Screen::Patterns(_) => "Innovation Patterns",
        Screen::Timeline { .. } => "Timeline",
        Screen::Analysis(_) => "Origin Story",
    };

    let block = Block::default()
        .title(format!(" Invention Origins [{section}] "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tagline = "Why the best innovations come from wandering, not planning";
    let paragraph = Paragraph::new(tagline).style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Prompt => Color::Yellow,
            NoticeKind::Error => Color::Red,
        };
        Line::from(vec![
            Span::styled(
                format!("{} ", notice.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(notice.body.clone(), Style::default().fg(color)),
        ])
    } else if app.analyzing {
        Line::from(Span::styled(
            format!("{} Analyzing...", app.spinner()),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let hints = match &app.screen {
            Screen::Home(_) => "a:analyze  i:inventions  p:patterns  t:timeline  ?:help  q:quit",
            Screen::Timeline { .. } => "/:search  s:sort  j/k:nav  h:home  ?:help  q:quit",
            Screen::Analysis(_) => "j/k:scroll  h:home  ?:help  q:quit",
            _ => "/:search  j/k:nav  Enter:open  h:home  ?:help  q:quit",
        };
        let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
        if app.screen_failure().is_some() {
            spans.push(Span::styled(
                "  (service unreachable)",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Loading/empty placeholder for a list-backed panel, or `None` for a list.
fn placeholder<T>(
    view: &CollectionView<T>,
    app: &App,
    empty_text: &str,
) -> Option<Paragraph<'static>> {
    let text = match view.presentation() {
        Presentation::Loading => format!("{} Loading...", app.spinner()),
        Presentation::Empty => empty_text.to_string(),
        Presentation::List => return None,
    };
    Some(Paragraph::new(text).style(Style::default().fg(Color::DarkGray)))
}

fn selected_list<'a>(items: Vec<ListItem<'a>>, block: Block<'a>) -> List<'a> {
    List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
}

fn year_label(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "----".to_string())
}

fn badge_line<'a>(slice: &Slice<'a, String>, color: Color) -> Line<'a> {
    let mut spans: Vec<Span> = slice
        .items
        .iter()
        .map(|name| Span::styled(format!("[{name}] "), Style::default().fg(color)))
        .collect();
    if slice.has_more() {
        spans.push(Span::styled(
            format!("+{} more", slice.hidden()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

// Home

fn render_home(frame: &mut Frame, app: &App, home: &HomeScreen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Analyze input
            Constraint::Min(7),    // Recent discoveries
            Constraint::Length(12), // Patterns + timeline previews
        ])
        .split(area);

    render_analyze_input(frame, app, chunks[0]);
    render_recent(frame, app, home, chunks[1]);

    let previews = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[2]);

    render_patterns_preview(frame, app, &home.patterns, previews[0]);
    render_timeline_preview(frame, app, &home.timeline, previews[1]);
}

fn render_analyze_input(frame: &mut Frame, app: &App, area: Rect) {
    let border = if app.input_active {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" What invention's secret story do you want to uncover? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let cursor = if app.input_active { "_" } else { "" };
    let button = if app.analyzing {
        "Analyzing..."
    } else {
        "Enter: Explore Story"
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("> {}{cursor}", app.analyze_input), Style::default().fg(Color::White)),
            Span::styled(format!("   [{button}]"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("Try (Tab): {}", app.suggestions.join(", ")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_recent(frame: &mut Frame, app: &App, home: &HomeScreen, area: Rect) {
    let mut title = " Recent Discoveries ".to_string();
    let slice = view::preview_of(home.recent.items(), view::RECENT_INVENTIONS_PREVIEW);
    if slice.has_more() {
        title = format!(" Recent Discoveries (i: view all {} inventions) ", slice.total);
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if let Some(placeholder) = placeholder(
        &home.recent,
        app,
        "No discoveries yet. Analyze an invention to start the archive.",
    ) {
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let items: Vec<ListItem> = slice.items.iter().map(|inv| invention_item(inv)).collect();
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(selected_list(items, block), area, &mut state);
}

fn render_patterns_preview(frame: &mut Frame, app: &App, patterns: &CollectionView<Pattern>, area: Rect) {
    let block = Block::default()
        .title(" Innovation Patterns (p: explore all) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if let Some(placeholder) = placeholder(patterns, app, "No patterns identified yet.") {
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let slice = view::preview_of(patterns.items(), view::PATTERNS_PREVIEW);
    let mut lines = Vec::new();
    for pattern in &slice.items {
        lines.extend(pattern_lines(pattern, view::PATTERN_BADGES_PREVIEW, false));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_timeline_preview(
    frame: &mut Frame,
    app: &App,
    timeline: &CollectionView<TimelineEntry>,
    area: Rect,
) {
    let block = Block::default()
        .title(" Innovation Timeline (t: view full timeline) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if let Some(placeholder) = placeholder(timeline, app, "Timeline is empty.") {
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let slice = view::preview_of(timeline.items(), view::TIMELINE_PREVIEW);
    let lines: Vec<Line> = slice
        .items
        .iter()
        .flat_map(|entry| timeline_lines(entry))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

// Browse screens

fn search_block<'a>(app: &App, query: &str, placeholder_text: &str) -> Paragraph<'a> {
    let border = if app.input_active {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let text = if query.is_empty() && !app.input_active {
        Span::styled(placeholder_text.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        let cursor = if app.input_active { "_" } else { "" };
        Span::styled(format!("{query}{cursor}"), Style::default().fg(Color::White))
    };

    Paragraph::new(Line::from(vec![Span::raw("/ "), text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn browse_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

fn count_title(noun: (&str, &str), shown: usize, total: usize, query: &str) -> String {
    let (one, many) = noun;
    if query.trim().is_empty() {
        format!(" {total} {} ", if total == 1 { one } else { many })
    } else {
        let results = if shown == 1 { "result" } else { "results" };
        format!(" {shown} {results} found for \"{}\" ", query.trim())
    }
}

fn render_inventions(
    frame: &mut Frame,
    app: &App,
    browse: &BrowseScreen<InventionSummary>,
    area: Rect,
) {
    let (search_area, list_area) = browse_layout(area);
    frame.render_widget(search_block(app, &browse.query, "Search inventions..."), search_area);

    let visible = view::full(app.visible_inventions());
    let block = Block::default()
        .title(count_title(
            ("invention", "inventions"),
            visible.len(),
            browse.view.items().len(),
            &browse.query,
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let empty = if browse.query.trim().is_empty() {
        "No inventions yet. Press h and analyze one to be the first!"
    } else {
        "No inventions found. Try adjusting your search terms."
    };
    if let Some(placeholder) = placeholder(&browse.view, app, empty) {
        frame.render_widget(placeholder.block(block), list_area);
        return;
    }
    if visible.is_empty() {
        let paragraph = Paragraph::new(empty).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph.block(block), list_area);
        return;
    }

    let items: Vec<ListItem> = visible.items.iter().map(|inv| invention_item(inv)).collect();
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(selected_list(items, block), list_area, &mut state);
}

fn invention_item(invention: &InventionSummary) -> ListItem<'static> {
    let header = Line::from(vec![
        Span::styled(
            invention.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", year_label(invention.year)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("  Added {}", invention.added_on()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let summary = Line::from(Span::styled(
        format!("  {}", invention.summary),
        Style::default().fg(Color::Gray),
    ));
    ListItem::new(vec![header, summary])
}

fn render_patterns(frame: &mut Frame, app: &App, browse: &BrowseScreen<Pattern>, area: Rect) {
    let (search_area, body) = browse_layout(area);
    frame.render_widget(search_block(app, &browse.query, "Search patterns..."), search_area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(body);

    let visible = app.visible_patterns();
    let block = Block::default()
        .title(count_title(("pattern", "patterns"), visible.len(), browse.view.items().len(), &browse.query))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if let Some(placeholder) = placeholder(&browse.view, app, "No patterns identified yet.") {
        frame.render_widget(placeholder.block(block), panes[0]);
        return;
    }
    if visible.is_empty() {
        let paragraph = Paragraph::new("No patterns match your search.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph.block(block), panes[0]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|pattern| {
            let kind = pattern.kind();
            ListItem::new(Line::from(vec![
                Span::styled(pattern.label(), Style::default().fg(kind.color())),
                Span::styled(
                    format!("  ({})", pattern.inventions.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(selected_list(items, block), panes[0], &mut state);

    if let Some(pattern) = visible.get(app.selected_index) {
        let detail_block = Block::default()
            .title(format!(" {} ", pattern.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pattern.kind().color()));
        let lines = pattern_lines(pattern, view::PATTERN_BADGES_BROWSE, true);
        frame.render_widget(
            Paragraph::new(lines).block(detail_block).wrap(Wrap { trim: true }),
            panes[1],
        );
    }
}

fn pattern_lines(pattern: &Pattern, badges: usize, detailed: bool) -> Vec<Line<'_>> {
    let kind = pattern.kind();
    let mut lines = Vec::new();
    if !detailed {
        lines.push(Line::from(Span::styled(
            pattern.label(),
            Style::default().fg(kind.color()).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(pattern.description.as_str()));

    if detailed {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} inventions follow this pattern", pattern.inventions.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let slice = view::preview_of(&pattern.inventions, badges);
    lines.push(badge_line(&slice, kind.color()));

    if detailed {
        if !pattern.insights.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Key Insight",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(pattern.insights.as_str()));
        }
        if !pattern.examples.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Examples",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for example in &pattern.examples {
                for (key, value) in example {
                    lines.push(Line::from(format!("  {key}: {value}")));
                }
            }
        }
    } else {
        lines.push(Line::from(""));
    }
    lines
}

fn render_timeline(
    frame: &mut Frame,
    app: &App,
    browse: &BrowseScreen<TimelineEntry>,
    order: SortOrder,
    area: Rect,
) {
    let (search_area, list_area) = browse_layout(area);
    frame.render_widget(
        search_block(app, &browse.query, "Search inventions or discoveries..."),
        search_area,
    );

    let visible = app.visible_timeline();
    let title = format!(
        "{}[s: {}] ",
        count_title(("entry", "entries"), visible.len(), browse.view.items().len(), &browse.query),
        order.label()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if let Some(placeholder) = placeholder(&browse.view, app, "No timeline entries yet.") {
        frame.render_widget(placeholder.block(block), list_area);
        return;
    }
    if visible.is_empty() {
        let paragraph = Paragraph::new("No entries match your search.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph.block(block), list_area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|entry| ListItem::new(timeline_lines(entry)))
        .collect();
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(selected_list(items, block), list_area, &mut state);
}

fn timeline_lines(entry: &TimelineEntry) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", entry.year),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.invention.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            format!(
                "     Key Discovery: {}  ({} patterns, {} prerequisites)",
                entry.key_discovery, entry.pattern_count, entry.prerequisite_count
            ),
            Style::default().fg(Color::Gray),
        )),
    ]
}

// Analysis detail

fn render_analysis(frame: &mut Frame, app: &App, detail: &DetailView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let lines = match detail.state() {
        DetailState::Loading => vec![Line::from(format!(
            "{} Uncovering the hidden story...",
            app.spinner()
        ))],
        DetailState::NotFound => vec![
            Line::from(Span::styled(
                "Analysis not found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press h or Esc to return home."),
        ],
        DetailState::Failed(_) => vec![
            Line::from(Span::styled(
                "This story could not be loaded",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("The analysis service did not answer. Press h or Esc to return home."),
        ],
        DetailState::Ready(record) => analysis_lines(record),
    };

    let title = match (detail.record(), detail.provenance()) {
        (Some(r), Provenance::Supplied) => format!(" {} (just uncovered) ", r.analysis.invention_name),
        (Some(r), Provenance::MustFetch) => format!(" {} ", r.analysis.invention_name),
        (None, _) => " Origin Story ".to_string(),
    };

    let paragraph = Paragraph::new(lines)
        .block(block.title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn bullet_section<'a>(lines: &mut Vec<Line<'a>>, title: &str, items: &'a [String]) {
    if items.is_empty() {
        return;
    }
    lines.push(section_title(title));
    for item in items {
        lines.push(Line::from(format!("  • {item}")));
    }
    lines.push(Line::from(""));
}

fn analysis_lines(record: &AnalysisRecord) -> Vec<Line<'_>> {
    let analysis = &record.analysis;
    let mut lines = Vec::new();

    if let Some(year) = analysis.invention_year {
        lines.push(Line::from(Span::styled(
            format!("Invented in {year}"),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(analysis.summary.as_str()));
    lines.push(Line::from(""));

    lines.push(section_title("The Wandering Path"));
    if !analysis.narrative.is_empty() {
        lines.push(Line::from(analysis.narrative.as_str()));
    }
    lines.push(Line::from(""));

    if !analysis.patterns_identified.is_empty() {
        lines.push(section_title("Innovation Patterns"));
        for (raw, kind) in analysis.patterns_identified.iter().zip(analysis.pattern_kinds()) {
            let mut spans = vec![Span::styled(
                format!("  [{}]", kind.label_for(raw)),
                Style::default().fg(kind.color()),
            )];
            if let Some(explanation) = analysis.explanation_for(raw) {
                spans.push(Span::raw(format!(" {explanation}")));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    bullet_section(&mut lines, "Beautiful Accidents", &analysis.serendipity_moments);
    bullet_section(&mut lines, "Had to Happen First", &analysis.critical_prerequisites);
    bullet_section(
        &mut lines,
        "When Goals Got in the Way",
        &analysis.objective_blindness_examples,
    );

    if !analysis.discoveries.is_empty() {
        lines.push(section_title("The Chain of Accidents"));
        for (index, discovery) in analysis.discoveries.iter().enumerate() {
            let mut header = vec![Span::styled(
                format!("{}. {}", index + 1, discovery.title),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if let Some(year) = discovery.year {
                header.push(Span::styled(format!("  ({year})"), Style::default().fg(Color::Yellow)));
            }
            header.push(Span::styled(
                format!("  {}", discovery.discovery_type.label()),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::from(header));
            lines.push(Line::from(format!("   {}", discovery.description)));
            if let Some(location) = &discovery.location {
                lines.push(Line::from(format!("   Where: {location}")));
            }
            if !discovery.discoverers.is_empty() {
                lines.push(Line::from(format!("   Who: {}", discovery.discoverers.join(", "))));
            }
            if let Some(goal) = &discovery.original_goal {
                lines.push(Line::from(format!("   Trying to: {goal}")));
            }
            lines.push(Line::from(format!("   What happened: {}", discovery.actual_outcome)));
            lines.push(Line::from(format!("   Why it mattered: {}", discovery.significance)));
            lines.push(Line::from(""));
        }
    }

    if !analysis.connections.is_empty() {
        lines.push(section_title("The Hidden Web"));
        for connection in &analysis.connections {
            lines.push(Line::from(vec![
                Span::styled(
                    connection.relationship_type.clone(),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(format!(
                    ": {} → {}",
                    analysis.endpoint_label(&connection.from_discovery_id),
                    analysis.endpoint_label(&connection.to_discovery_id)
                )),
            ]));
            lines.push(Line::from(format!("   {}", connection.description)));
        }
        lines.push(Line::from(""));
    }

    if !analysis.key_lesson.is_empty() {
        lines.push(section_title("The Real Lesson"));
        lines.push(Line::from(analysis.key_lesson.as_str()));
    }

    lines
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        "",
        " Navigation:",
        "   j / ↓    Move down",
        "   k / ↑    Move up",
        "   < / >    Top / bottom",
        "   Enter    Open analysis",
        "   h / Esc  Home",
        "",
        " Screens:",
        "   i        All inventions",
        "   p        Innovation patterns",
        "   t        Timeline",
        "",
        " Actions:",
        "   a        Analyze an invention (home)",
        "   /        Search current list",
        "   Tab      Next suggestion (while typing)",
        "   s        Toggle timeline order",
        "",
        " General:",
        "   ?        Toggle this help",
        "   q        Quit",
        "",
        " Press any key to close",
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text.join("\n"))
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(ratatui::widgets::Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
