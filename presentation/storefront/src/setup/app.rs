use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use business::domain::product::use_cases::get_catalog::GetCatalogUseCase;

use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::command::Command;
use crate::ui::render::{self, HELP, LOADING_MESSAGE};
use crate::ui::spinner;
use crate::ui::state::{AppState, CatalogState, Outcome};

const PROMPT: &str = "> ";

pub struct App;

impl App {
    /// Fetches the catalog once, then serves commands from stdin until
    /// `quit` or end of input.
    pub async fn run(container: DependencyContainer) -> anyhow::Result<()> {
        let spinner = spinner::loading(LOADING_MESSAGE);
        let catalog = Self::load_catalog(container.get_catalog_use_case.as_ref()).await;
        spinner.finish_and_clear();

        let stdin = BufReader::new(tokio::io::stdin());
        Self::event_loop(AppState::new(catalog), stdin, std::io::stdout()).await?;
        Ok(())
    }

    pub async fn load_catalog(use_case: &dyn GetCatalogUseCase) -> CatalogState {
        match use_case.execute().await {
            Ok(products) => CatalogState::Loaded(products),
            Err(e) => {
                tracing::error!(error = %e, "Catalog could not be loaded");
                CatalogState::Failed
            }
        }
    }

    /// Render, read one line, apply it, repeat. Returns the final state.
    pub async fn event_loop<R, W>(
        mut state: AppState,
        input: R,
        mut output: W,
    ) -> anyhow::Result<AppState>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        writeln!(output, "{}", render::render(&state))?;

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(output)?;
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}", e.to_string().yellow())?;
                    continue;
                }
            };

            match state.apply(command) {
                Outcome::Changed => writeln!(output, "{}", render::render(&state))?,
                Outcome::Rejected(notice) => writeln!(output, "{}", notice.to_string().yellow())?,
                Outcome::ShowHelp => writeln!(output, "{}", HELP)?,
                Outcome::Quit => break,
            }
        }

        Ok(state)
    }
}
