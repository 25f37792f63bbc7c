//! The wallet panel: connect control, balance display, and transfer form.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, domain::state::PanelState, tui::Frame};

use super::Component;

/// Control focus within the connected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Destination,
    Send,
}

/// The single panel of the application.
///
/// Disconnected it renders only a connect control; connected it renders the
/// address, two unit-labeled balance lines, the destination input, the send
/// control, and the last transaction message. Errors are surfaced through a
/// blocking notice that captures all input until dismissed.
pub struct WalletPanel {
    action_tx: UnboundedSender<Action>,
    pub state: PanelState,
    pub destination: String,
    pub focused_field: PanelField,
    pub is_editing: bool,
    notice: Option<String>,
}

impl WalletPanel {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            state: PanelState::default(),
            destination: String::new(),
            focused_field: PanelField::Destination,
            is_editing: false,
            notice: None,
        }
    }

    /// The send control is enabled exactly when an address is present.
    pub fn send_enabled(&self) -> bool {
        self.state.is_connected()
    }

    /// Show a blocking notice. All input is captured until it is dismissed.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    /// Append pasted text to the destination field.
    pub fn paste(&mut self, text: &str) {
        if self.state.is_connected() && self.notice.is_none() {
            self.destination.push_str(text);
        }
    }

    fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            PanelField::Destination => PanelField::Send,
            PanelField::Send => PanelField::Destination,
        };
    }

    fn submit_focused(&mut self) -> Result<()> {
        match self.focused_field {
            PanelField::Destination => {
                self.is_editing = !self.is_editing;
            }
            PanelField::Send => {
                if self.send_enabled() {
                    self.action_tx.send(Action::SendTransfer)?;
                }
            }
        }
        Ok(())
    }

    fn draw_disconnected(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(area);

        let connect = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  [ Connect Wallet ]  ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
        ])
        .block(
            Block::default()
                .title("> Connect")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(connect, chunks[0]);

        let help = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No wallet connected. [Enter] Connect  [q] Quit",
                Style::default().fg(Color::DarkGray),
            )]),
        ])
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(help, chunks[1]);
    }

    fn draw_connected(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Address
            Constraint::Length(4), // Balances
            Constraint::Length(3), // Destination
            Constraint::Length(3), // Send control
            Constraint::Min(0),    // Message / help
        ])
        .split(area);

        let address = Paragraph::new(Line::from(vec![Span::styled(
            self.state.address.as_deref().unwrap_or(""),
            Style::default().fg(Color::White),
        )]))
        .block(
            Block::default()
                .title("Address")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(address, chunks[0]);

        let balances = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Balance (ETH): ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.state.balance_line("homestead", "ETH"),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(vec![
                Span::styled("Balance (BNB): ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.state.balance_line("bsc-mainnet", "BNB"),
                    Style::default().fg(Color::Green),
                ),
            ]),
        ])
        .block(
            Block::default()
                .title("Balances")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(balances, chunks[1]);

        let focused = self.focused_field == PanelField::Destination;
        let destination_style = if focused {
            if self.is_editing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Cyan)
            }
        } else {
            Style::default().fg(Color::White)
        };

        let mut destination_display = if self.destination.is_empty() && !focused {
            "Enter destination address".to_string()
        } else {
            self.destination.clone()
        };
        if self.is_editing && focused {
            destination_display.push('│');
        }

        let destination = Paragraph::new(Line::from(vec![Span::styled(
            destination_display,
            destination_style,
        )]))
        .block(
            Block::default()
                .title(if focused {
                    "> Destination Address"
                } else {
                    "  Destination Address"
                })
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        f.render_widget(destination, chunks[2]);

        let send_focused = self.focused_field == PanelField::Send;
        let send_style = if !self.send_enabled() {
            Style::default().fg(Color::DarkGray)
        } else if send_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };

        let send = Paragraph::new(Line::from(vec![Span::styled(
            "  [ Send 0.01 ]  ",
            send_style,
        )]))
        .block(
            Block::default()
                .title(if send_focused { "> Send" } else { "  Send" })
                .borders(Borders::ALL)
                .border_style(if send_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        f.render_widget(send, chunks[3]);

        let mut status_lines = vec![];
        if !self.state.message.is_empty() {
            status_lines.push(Line::from(vec![Span::styled(
                self.state.message.clone(),
                Style::default().fg(Color::Cyan),
            )]));
        }
        status_lines.push(Line::from(""));
        status_lines.push(Line::from(vec![Span::styled(
            if self.is_editing {
                "[Esc] Stop editing  [Tab/↓] Next field  [Backspace] Delete"
            } else {
                "[Enter/e] Edit field  [Tab/↓] Next field  [c] Clear  [Enter on Send] Send"
            },
            Style::default().fg(Color::DarkGray),
        )]));

        let status = Paragraph::new(status_lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title("Status")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(status, chunks[4]);
    }

    fn draw_notice(&self, f: &mut Frame, area: Rect, message: &str) {
        let popup = centered_rect(area, 60, 30);
        f.render_widget(Clear, popup);
        let notice = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "[Enter] Dismiss",
                Style::default().fg(Color::DarkGray),
            )]),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Notice")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(notice, popup);
    }
}

impl Component for WalletPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // A notice blocks everything else until dismissed.
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return Ok(());
        }

        if !self.state.is_connected() {
            if key.code == KeyCode::Enter {
                self.action_tx.send(Action::Connect)?;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                self.is_editing = false;
                self.next_field();
            }
            KeyCode::Esc => {
                self.is_editing = false;
            }
            KeyCode::Enter => {
                self.submit_focused()?;
            }
            KeyCode::Char(c) => {
                if self.is_editing && self.focused_field == PanelField::Destination {
                    self.destination.push(c);
                } else if !self.is_editing {
                    match c {
                        'j' | 'k' => self.next_field(),
                        'c' => self.destination.clear(),
                        'e' if self.focused_field == PanelField::Destination => {
                            self.is_editing = true;
                        }
                        _ => {}
                    }
                }
            }
            KeyCode::Backspace => {
                if self.is_editing && self.focused_field == PanelField::Destination {
                    self.destination.pop();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        if self.state.is_connected() {
            self.draw_connected(f, area);
        } else {
            self.draw_disconnected(f, area);
        }

        if let Some(message) = self.notice.clone() {
            self.draw_notice(f, area, &message);
        }
    }
}

/// Centered popup rect covering the given percentages of `area`.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
