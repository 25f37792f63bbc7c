use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::{
    action::Action,
    cli::Args,
    components::{Component, panel::WalletPanel},
    config::Config,
    domain::actions,
    infra::{provider::WalletProvider, rpc::RpcProvider},
    tui::{Event, Tui},
};

pub struct App {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub config: Config,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
    pub tui: Tui,
    /// The injected wallet provider; `None` when the environment has none.
    pub provider: Option<Box<dyn WalletProvider>>,
    pub panel: WalletPanel,
    pub status_message: String,
}

impl App {
    pub fn new(args: &Args) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let config = Config::new(args.network.as_deref(), args.rpc_url.as_deref());
        let provider =
            RpcProvider::detect(&config).map(|p| Box::new(p) as Box<dyn WalletProvider>);
        let panel = WalletPanel::new(action_tx.clone());

        let tui = Tui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate)
            .paste(true);

        Ok(Self {
            should_quit: false,
            should_suspend: false,
            config,
            action_tx,
            action_rx,
            tui,
            provider,
            panel,
            status_message: "Ready".to_string(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            // Handle events
            if let Some(event) = self.tui.next().await {
                self.handle_event(event).await?;
            }

            // Handle actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.handle_action(action).await?;
            }

            if self.should_suspend {
                self.tui.suspend()?;
                self.should_suspend = false;
                self.tui.resume()?;
            }

            if self.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Tick => {
                self.action_tx.send(Action::Tick)?;
            }
            Event::Render => {
                self.draw_ui()?;
            }
            Event::Key(key_event) => {
                self.handle_key_event(key_event)?;
            }
            Event::Paste(text) => {
                self.panel.paste(&text);
            }
            Event::Resize(w, h) => {
                self.action_tx.send(Action::Resize(w, h))?;
            }
            Event::Init => {
                info!("Application initialized");
            }
            Event::Quit => {
                self.should_quit = true;
            }
            Event::Error => {
                self.status_message = "Input error".to_string();
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.action_tx.send(Action::Quit)?;
            return Ok(());
        }

        // A blocking notice or an active input field owns the keyboard.
        if self.panel.has_notice() || self.panel.is_editing {
            self.panel.handle_key_event(key)?;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.action_tx.send(Action::Quit)?;
            }
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.action_tx.send(Action::Suspend)?;
            }
            KeyCode::Char('?') if key.modifiers.is_empty() => {
                self.action_tx.send(Action::Help)?;
            }
            _ => {
                self.panel.handle_key_event(key)?;
            }
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Action) -> Result<()> {
        debug!("Handling action: {:?}", action);
        match action {
            Action::Tick => {}
            Action::Render | Action::Resize(_, _) => {
                self.draw_ui()?;
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Suspend => {
                self.should_suspend = true;
            }
            Action::Resume => {}
            Action::Help => {
                self.status_message =
                    "[Enter] Connect/Send  [Tab] Next field  [e] Edit  [q] Quit".to_string();
            }
            Action::Error(message) => {
                self.panel.show_notice(message);
            }
            Action::Connect => {
                match actions::connect(self.provider.as_deref()).await {
                    Ok(conn) => {
                        self.status_message = format!("Connected to {}", conn.network);
                        self.panel.state.apply_connection(conn);
                    }
                    Err(e) => {
                        self.status_message = "Connect failed".to_string();
                        self.panel.show_notice(e.to_string());
                    }
                }
            }
            Action::SendTransfer => {
                let to = self.panel.destination.trim().to_string();
                let connected = self.panel.state.is_connected();
                match actions::transfer(self.provider.as_deref(), connected, &to).await {
                    Ok(pending) => {
                        self.panel.state.message =
                            format!("Transaction sent: {}", pending.hash);
                        self.status_message = "Transaction sent".to_string();
                    }
                    Err(e) => {
                        self.status_message = "Send failed".to_string();
                        self.panel.show_notice(e.to_string());
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_ui(&mut self) -> Result<()> {
        let status = format!(" {} | {}", self.config.network.name, self.status_message);
        let panel = &mut self.panel;
        self.tui.draw(|f| {
            let chunks = Layout::vertical([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Panel
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

            let title = Paragraph::new(Line::from(vec![
                Span::styled(
                    "ethpanel",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  wallet provider panel"),
            ]))
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(title, chunks[0]);

            panel.draw(f, chunks[1]);

            let status_bar = Paragraph::new(Line::from(vec![Span::styled(
                status,
                Style::default().fg(Color::DarkGray),
            )]));
            f.render_widget(status_bar, chunks[2]);
        })?;
        Ok(())
    }
}
