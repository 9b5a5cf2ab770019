//! Main event loop: keyboard-driven navigation, collapse/expand, and path entry.

use crate::recent::RecentTracker;
use crate::render::{
    help_bar_line, input_bar_line, rows_to_lines, status_bar_line, RenderConfig,
};
use crate::terminal::Term;
use crate::tree::{insert_path, visible_rows, PathNode, TreeConfig, TreeRow, PATH_JOIN};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::{Duration, Instant};

/// Holds mutable state for the interactive session.
pub struct App {
    root: PathNode,
    tree_config: TreeConfig,
    render_config: RenderConfig,
    rows: Vec<TreeRow>,
    selected: usize,
    scroll: usize,
    viewport: usize,
    input: Option<String>,
    recent: RecentTracker,
    status: Option<String>,
    source_label: String,
}

impl App {
    pub fn new(
        root: PathNode,
        tree_config: TreeConfig,
        render_config: RenderConfig,
        source_label: String,
    ) -> Self {
        let rows = visible_rows(&root);
        App {
            root,
            tree_config,
            render_config,
            rows,
            selected: 0,
            scroll: 0,
            viewport: 0,
            input: None,
            recent: RecentTracker::new(),
            status: None,
            source_label,
        }
    }

    /// The currently visible rows.
    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the add-path prompt is open.
    pub fn is_inserting(&self) -> bool {
        self.input.is_some()
    }

    /// Rebuild the visible rows after any tree mutation.
    fn refresh_rows(&mut self) {
        self.rows = visible_rows(&self.root);
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        let step = self.viewport.saturating_sub(1).max(1);
        self.selected = (self.selected + step).min(self.rows.len().saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        let step = self.viewport.saturating_sub(1).max(1);
        self.selected = self.selected.saturating_sub(step);
    }

    /// Flip the collapsed/expanded state of the selected node's subtree.
    pub fn toggle_selected(&mut self) {
        let Some(row) = self.rows.get(self.selected) else {
            return;
        };
        if !row.has_children {
            self.status = Some(format!("{} has no children", row.name));
            return;
        }
        let index_path = row.index_path.clone();
        let full_path = row.full_path.clone();
        if let Some(node) = node_at_mut(&mut self.root, &index_path) {
            let affected = node.toggle_children();
            let verb = if node.hide_children {
                "collapsed"
            } else {
                "expanded"
            };
            self.status = Some(format!("{} {} ({} nodes)", verb, full_path, affected.len()));
            self.recent.insert(full_path, Instant::now());
            self.refresh_rows();
        }
    }

    /// Left arrow: collapse an open branch, otherwise jump to the parent row.
    pub fn collapse_or_ascend(&mut self) {
        let Some(row) = self.rows.get(self.selected) else {
            return;
        };
        if row.has_children && !row.is_collapsed {
            self.toggle_selected();
            return;
        }
        if row.index_path.len() > 1 {
            let parent_path = &row.index_path[..row.index_path.len() - 1];
            if let Some(i) = self.rows.iter().position(|r| r.index_path == parent_path) {
                self.selected = i;
            }
        }
    }

    /// Right arrow: expand a collapsed branch.
    pub fn expand_selected(&mut self) {
        if self.rows.get(self.selected).is_some_and(|r| r.is_collapsed) {
            self.toggle_selected();
        }
    }

    pub fn expand_all(&mut self) {
        self.root.expand_all();
        self.refresh_rows();
        self.status = Some("expanded all".to_string());
    }

    pub fn collapse_all(&mut self) {
        self.root.collapse_all();
        self.refresh_rows();
        self.status = Some("collapsed all".to_string());
    }

    pub fn begin_insert(&mut self) {
        self.input = Some(String::new());
    }

    pub fn cancel_insert(&mut self) {
        self.input = None;
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(buf) = self.input.as_mut() {
            buf.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(buf) = self.input.as_mut() {
            buf.pop();
        }
    }

    /// Insert the typed path into the tree, expand its ancestors so the new
    /// node is visible, and select it.
    pub fn commit_insert(&mut self) {
        let Some(buffer) = self.input.take() else {
            return;
        };
        let trimmed = buffer.trim().to_string();
        let mut segments: Vec<String> = trimmed
            .split(self.tree_config.delimiter)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if let Some(max) = self.tree_config.max_depth {
            segments.truncate(max);
        }
        if segments.is_empty() {
            self.status = Some("nothing to add".to_string());
            return;
        }

        insert_path(&mut self.root, &trimmed, &self.tree_config);

        // Expand the chain so the inserted node is not hidden under a
        // collapsed ancestor. If the path was ignored the lookup stops early.
        let mut node = &mut self.root;
        for segment in &segments {
            node.hide_children = false;
            let Some(i) = node.descendants.iter().position(|c| &c.name == segment) else {
                break;
            };
            node = &mut node.descendants[i];
        }

        let key = segments.join(&PATH_JOIN.to_string());
        self.recent.insert(key.clone(), Instant::now());
        self.refresh_rows();
        match self.rows.iter().position(|r| r.full_path == key) {
            Some(i) => {
                self.selected = i;
                self.status = Some(format!("added {}", key));
            }
            None => {
                self.status = Some(format!("{}: not added (ignored)", trimmed));
            }
        }
    }

    /// Keep the selected row inside the viewport.
    fn clamp_scroll(&mut self, height: usize) {
        self.viewport = height;
        if height == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
    }
}

/// Walk the tree along a child-index path.
fn node_at_mut<'a>(root: &'a mut PathNode, index_path: &[usize]) -> Option<&'a mut PathNode> {
    let mut node = root;
    for &i in index_path {
        node = node.descendants.get_mut(i)?;
    }
    Some(node)
}

/// Run the interactive loop. Blocks until the user quits.
pub fn run(term: &mut Term, app: &mut App) -> Result<()> {
    loop {
        term.draw(|frame| draw(frame, app))?;

        // Poll with a timeout so expired highlights fade on the next frame.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(app, key) {
                    break;
                }
            }
            // Redrawn at the top of the loop with the new size.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    app.clamp_scroll(chunks[0].height as usize);

    let recent = app.recent.active_set(Instant::now());
    let lines = rows_to_lines(&app.rows, &app.render_config, Some(app.selected), &recent);
    let tree = Paragraph::new(Text::from(lines)).scroll((app.scroll as u16, 0));
    frame.render_widget(tree, chunks[0]);

    let info = format!("{} shown / {} nodes", app.rows.len(), app.root.descendant_count());
    let status = status_bar_line(&app.source_label, &info, app.status.as_deref());
    frame.render_widget(Paragraph::new(status), chunks[1]);

    let bottom = match app.input.as_deref() {
        Some(buffer) => input_bar_line(buffer),
        None => help_bar_line(),
    };
    frame.render_widget(Paragraph::new(bottom), chunks[2]);
}

/// Handle one key event. Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.is_inserting() {
        match key.code {
            KeyCode::Esc => app.cancel_insert(),
            KeyCode::Enter => app.commit_insert(),
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Char(c) => app.input_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Left | KeyCode::Char('h') => app.collapse_or_ascend(),
        KeyCode::Right | KeyCode::Char('l') => app.expand_selected(),
        KeyCode::Char('E') => app.expand_all(),
        KeyCode::Char('C') => app.collapse_all(),
        KeyCode::Char('a') => app.begin_insert(),
        _ => {}
    }
    false
}
