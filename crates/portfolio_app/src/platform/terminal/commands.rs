use portfolio_core::{ContactField, ProjectId};

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleTheme,
    OpenProject(ProjectId),
    CloseModal,
    ClickBackdrop,
    ScrollBy(f64),
    ScrollTo(f64),
    Edit(ContactField, String),
    Submit,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  theme                   toggle light/dark
  open <id>               show project details (1-3)
  close | backdrop        close the project modal
  scroll <px>             scroll by px (negative scrolls up)
  goto <px>               scroll to an absolute offset
  field <name> <value>    edit name|email|subject|message|honeypot
  submit                  send the contact form
  help | quit";

pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "theme" => Command::ToggleTheme,
        "open" => {
            let id = rest
                .parse::<u32>()
                .map_err(|_| format!("open expects a project number, got {rest:?}"))?;
            Command::OpenProject(ProjectId(id))
        }
        "close" => Command::CloseModal,
        "backdrop" => Command::ClickBackdrop,
        "scroll" => Command::ScrollBy(parse_px(rest)?),
        "goto" => Command::ScrollTo(parse_px(rest)?),
        "field" => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = ContactField::parse(name)
                .ok_or_else(|| format!("unknown field {name:?}"))?;
            Command::Edit(field, value.trim().to_string())
        }
        "submit" | "send" => Command::Submit,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(Some(command))
}

fn parse_px(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .ok()
        .filter(|px| px.is_finite())
        .ok_or_else(|| format!("expected a pixel amount, got {raw:?}"))
}
