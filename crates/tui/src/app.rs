//! Main application struct and run loop.
//!
//! The [`App`] owns the active [`Screen`] and routes every message to it.
//! Fetches requested by the screens are spawned on the Tokio runtime and
//! their results come back through a channel that the loop drains between
//! terminal events.

use projboard_github::GitHubClient;
use projboard_protocol::Message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info};

use crate::{
    command::Command,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, Viewport},
    screen::{BOARD_HINTS, BoardScreen, PICKER_HINTS, PickerScreen},
    terminal::AppTerminal,
    widgets::render_status_bar,
};

/// The screen currently on display.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Choosing a project.
    Picker(PickerScreen),
    /// Viewing the board of the chosen project.
    Board(BoardScreen),
}

impl Screen {
    /// The viewport the active screen renders into.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Picker(picker) => picker.viewport(),
            Self::Board(board) => board.viewport(),
        }
    }
}

/// The main application struct.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    client: GitHubClient,
    should_quit: bool,
}

impl App {
    /// Creates an application that starts on the picker for
    /// `organization`.
    ///
    /// # Examples
    ///
    /// ```
    /// use projboard_github::GitHubClient;
    /// use projboard_tui::App;
    ///
    /// let app = App::new("zeltenlabs", GitHubClient::new());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(organization: impl Into<String>, client: GitHubClient) -> Self {
        Self {
            screen: Screen::Picker(PickerScreen::new(organization)),
            client,
            should_quit: false,
        }
    }

    /// The active screen.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Whether a quit was requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The fetch to schedule at startup.
    #[must_use]
    pub fn init(&self) -> Option<Command> {
        match &self.screen {
            Screen::Picker(picker) => Some(picker.init()),
            Screen::Board(_) => None,
        }
    }

    /// Updates the application based on a message.
    ///
    /// Returns the fetch to schedule, if the message caused one. Selecting a
    /// project on the picker replaces it with a board for that project and
    /// returns the board's item fetch.
    pub fn update(&mut self, msg: Message) -> Option<Command> {
        if msg.is_terminating() {
            self.should_quit = true;
            return None;
        }

        let handoff = match &self.screen {
            Screen::Picker(picker) if msg == Message::Select => picker.handoff(),
            Screen::Picker(_) | Screen::Board(_) => None,
        };
        if let Some((project, viewport)) = handoff {
            info!(project = %project.id, title = %project.title, "opening board");
            let board = BoardScreen::new(project, viewport);
            let command = board.init();
            self.screen = Screen::Board(board);
            return Some(command);
        }

        match &mut self.screen {
            Screen::Picker(picker) => picker.update(msg),
            Screen::Board(board) => board.update(msg),
        }
        None
    }

    /// Renders the application UI to the given frame.
    ///
    /// Everything is drawn inside the active screen's viewport, centered in
    /// the frame: a header, the screen body and a status bar.
    pub fn view(&self, frame: &mut Frame) {
        let viewport = self.screen.viewport();
        if viewport.is_empty() {
            return;
        }
        let area = viewport.area_within(frame.area());

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let buf = frame.buffer_mut();
        match &self.screen {
            Screen::Picker(picker) => {
                picker.render(body_area, buf);
                render_status_bar(PICKER_HINTS, footer_area, buf);
            }
            Screen::Board(board) => {
                board.render(body_area, buf);
                render_status_bar(BOARD_HINTS, footer_area, buf);
            }
        }
    }

    /// Renders the header bar: the application name and what is on display.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (label, subject) = match &self.screen {
            Screen::Picker(picker) => ("Projects of ", picker.organization()),
            Screen::Board(board) => ("Board ", board.project().title.as_str()),
        };

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "projboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(subject, Style::default().fg(Color::White)),
        ]))
        .alignment(Alignment::Left);
        frame.render_widget(title, inner);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Each iteration draws, waits up to 100 ms for a terminal event, then
    /// applies every fetch result that has arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use projboard_github::GitHubClient;
    /// use projboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new("zeltenlabs", GitHubClient::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let size = terminal.size()?;
        self.update(Message::Resize {
            width: size.width,
            height: size.height,
        });
        if let Some(command) = self.init() {
            self.dispatch(command, &tx);
        }

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message)
                && let Some(command) = self.update(msg)
            {
                self.dispatch(command, &tx);
            }

            while let Ok(msg) = rx.try_recv() {
                if let Some(command) = self.update(msg) {
                    self.dispatch(command, &tx);
                }
            }

            if self.should_quit {
                break;
            }
        }

        debug!("leaving event loop");
        Ok(())
    }

    fn dispatch(&self, command: Command, tx: &UnboundedSender<Message>) {
        debug!(?command, "scheduling fetch");
        command.spawn(self.client.clone(), tx.clone());
    }
}
