//! Line-oriented terminal front end for the games list.

use color_eyre::eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::commands::{Command, HELP};
use super::list_view_model::{GameListViewModel, ListState};
use super::render::ListRenderer;

const PROMPT: &str = "> ";

/// Terminal application driving a [`GameListViewModel`].
pub struct App {
    view_model: GameListViewModel,
    renderer: ListRenderer,
}

impl App {
    /// Creates app around `view_model`.
    #[must_use]
    pub fn new(view_model: GameListViewModel) -> Self {
        Self {
            view_model,
            renderer: ListRenderer::default(),
        }
    }

    /// Runs the command loop until `quit` or end of input.
    ///
    /// # Errors
    /// Returns error if reading input or writing output fails.
    pub async fn run<R, W>(self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting games list");

        output
            .write_all(self.renderer.render(&self.view_model.state()).as_bytes())
            .await?;
        self.view_model.load().await;
        self.draw(&mut output).await?;

        let mut lines = input.lines();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let Some(command) = Command::parse(&line) else {
                output
                    .write_all(format!("Unknown command: {}\n", line.trim()).as_bytes())
                    .await?;
                continue;
            };

            debug!(?command, "Handling command");

            match command {
                Command::Quit => break,
                Command::Help => output.write_all(format!("{HELP}\n").as_bytes()).await?,
                Command::List => self.draw(&mut output).await?,
                Command::Reload => {
                    self.view_model.reload().await;
                    self.draw(&mut output).await?;
                }
                Command::LoadMore => self.load_more(&mut output).await?,
                Command::Details(position) => self.show_details(position, &mut output).await?,
            }
        }

        info!("Leaving games list");
        output.flush().await?;
        Ok(())
    }

    async fn draw<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        let text = self.renderer.render(&self.view_model.state());
        output.write_all(text.as_bytes()).await?;
        Ok(())
    }

    async fn load_more<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        let action = self
            .view_model
            .state()
            .loaded()
            .and_then(|games| games.load_more().cloned());

        let Some(action) = action else {
            output.write_all(b"No more games to load.\n").await?;
            return Ok(());
        };

        match action.invoke().await {
            Ok(()) => self.draw(output).await,
            Err(e) => {
                output
                    .write_all(format!("Couldn't load more games: {e}\n").as_bytes())
                    .await?;
                Ok(())
            }
        }
    }

    async fn show_details<W: AsyncWrite + Unpin>(
        &self,
        position: usize,
        output: &mut W,
    ) -> Result<()> {
        let state = self.view_model.state();
        let game = match &state {
            ListState::Loaded(games) => games.items().get(position - 1),
            ListState::Loading | ListState::Error => None,
        };

        match game {
            Some(game) => {
                output
                    .write_all(self.renderer.render_details(game).as_bytes())
                    .await?;
            }
            None => {
                output
                    .write_all(format!("No game at position {position}.\n").as_bytes())
                    .await?;
            }
        }
        Ok(())
    }
}
