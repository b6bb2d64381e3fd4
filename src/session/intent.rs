// src/session/intent.rs
// =============================================================================
// What the user can ask the session to do, and how prompt lines map onto it.
//
// Prompt commands:
//   user <name> | <name>    look up a profile
//   page <n>                jump to page n
//   next | n                next page
//   prev | p                previous page
//   size <n>                change repositories per page
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit(String),
    GoToPage(u32),
    NextPage,
    PreviousPage,
    SetPageSize(u32),
}

/// A line from the prompt, after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
    /// Nothing typed
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Empty);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("Too many arguments in '{}'", line.trim()));
        }

        let command = match (head.to_ascii_lowercase().as_str(), arg) {
            ("quit" | "q" | "exit", None) => Command::Quit,
            ("help" | "h" | "?", None) => Command::Help,
            ("next" | "n", None) => Command::Intent(Intent::NextPage),
            ("prev" | "p", None) => Command::Intent(Intent::PreviousPage),
            ("user" | "u", Some(name)) => Command::Intent(Intent::Submit(name.to_string())),
            ("page", Some(n)) => Command::Intent(Intent::GoToPage(number(n, "page")?)),
            ("size", Some(n)) => Command::Intent(Intent::SetPageSize(number(n, "page size")?)),
            ("user" | "u" | "page" | "size", None) => {
                return Err(format!("'{head}' needs a value"));
            }
            (_, None) => Command::Intent(Intent::Submit(head.to_string())),
            (_, Some(_)) => return Err(format!("Unknown command '{head}'")),
        };
        Ok(command)
    }
}

fn number(text: &str, what: &str) -> Result<u32, String> {
    text.parse()
        .map_err(|_| format!("'{text}' is not a valid {what} number"))
}

pub const HELP: &str = "\
Commands:
  user <name>   look up a GitHub profile (or just type the name)
  page <n>      jump to page n
  next, n       next page
  prev, p       previous page
  size <n>      repositories per page (10-100)
  help          show this help
  quit, q       leave";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user octocat", Command::Intent(Intent::Submit("octocat".into())))]
    #[case("octocat", Command::Intent(Intent::Submit("octocat".into())))]
    #[case("page 2", Command::Intent(Intent::GoToPage(2)))]
    #[case("next", Command::Intent(Intent::NextPage))]
    #[case("p", Command::Intent(Intent::PreviousPage))]
    #[case("size 25", Command::Intent(Intent::SetPageSize(25)))]
    #[case("size 500", Command::Intent(Intent::SetPageSize(500)))]
    #[case("  QUIT ", Command::Quit)]
    #[case("?", Command::Help)]
    #[case("   ", Command::Empty)]
    fn test_parse(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line), Ok(expected));
    }

    #[rstest]
    #[case("page two")]
    #[case("size lots")]
    #[case("size -5")]
    #[case("page")]
    #[case("user")]
    #[case("frobnicate 3")]
    #[case("user a b")]
    fn test_parse_rejects(#[case] line: &str) {
        assert!(Command::parse(line).is_err());
    }
}
