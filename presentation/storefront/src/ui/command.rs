use business::domain::product::value_objects::ProductId;

/// A single user interaction, typed as one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add(ProductId),
    Remove(ProductId),
    ToggleCart,
    OpenCart,
    CloseCart,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Type a command, or `help` to list them.")]
    Empty,
    #[error("Unknown command `{0}`. Type `help` to list commands.")]
    Unknown(String),
    #[error("`{0}` needs a product id, e.g. `{0} 1`.")]
    MissingId(String),
    #[error("`{0}` is not a product id.")]
    InvalidId(String),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        match verb.as_str() {
            "add" | "+" => parse_id(&verb, words.next()).map(Command::Add),
            "remove" | "rm" | "-" => parse_id(&verb, words.next()).map(Command::Remove),
            "cart" => Ok(Command::ToggleCart),
            "open" => Ok(Command::OpenCart),
            "close" => Ok(Command::CloseCart),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.clone())),
        }
    }
}

fn parse_id(verb: &str, arg: Option<&str>) -> Result<ProductId, CommandError> {
    let raw = arg.ok_or_else(|| CommandError::MissingId(verb.to_string()))?;
    raw.parse::<ProductId>()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
