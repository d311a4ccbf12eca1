//! Pure rendering of the session state into styled text lines.

use super::state::SessionState;

pub const TITLE: &str = "Hyprland Setup Assistant for FreeBSD";
const CURSOR_MARKER: &str = ">";
const EXITING_NOTICE: &str = "Exiting...";

/// How a line should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    MenuEntry,
    SelectedMenuEntry,
    Plain,
    Progress,
    Log,
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub style: LineStyle,
}

impl ViewLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Plain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub lines: Vec<ViewLine>,
}

impl View {
    /// The view without styling, one line per row.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The last `max_rows` lines, or all of them if they fit.
    #[must_use]
    pub fn visible_lines(&self, max_rows: usize) -> &[ViewLine] {
        let skip = self.lines.len().saturating_sub(max_rows);
        &self.lines[skip..]
    }
}

/// Renders `state`; the same state always renders the same view.
#[must_use]
pub fn render(state: &SessionState) -> View {
    let mut lines = vec![ViewLine::new(TITLE, LineStyle::Title), ViewLine::blank()];

    for (i, entry) in state.menu.iter().enumerate() {
        if i == state.cursor {
            lines.push(ViewLine::new(
                format!("{CURSOR_MARKER} {entry}"),
                LineStyle::SelectedMenuEntry,
            ));
        } else {
            lines.push(ViewLine::new(format!("  {entry}"), LineStyle::MenuEntry));
        }
    }

    if let Some(selected) = state.selected {
        lines.push(ViewLine::blank());
        lines.push(ViewLine::new(format!("Selected: {selected}"), LineStyle::Plain));

        if state.busy {
            lines.push(ViewLine::new(
                format!("Processing{}", ".".repeat(state.tick % 4)),
                LineStyle::Progress,
            ));
        }

        // Command output can span several rows
        lines.extend(
            state
                .logs
                .iter()
                .flat_map(|log| log.split('\n'))
                .map(|row| ViewLine::new(row.trim_end_matches('\r'), LineStyle::Log)),
        );
    }

    if state.exiting {
        lines.push(ViewLine::blank());
        lines.push(ViewLine::new(EXITING_NOTICE, LineStyle::Notice));
    }

    View { lines }
}
