/// A line typed at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(String),
    List,
    Read(usize),
    Copy(usize),
    Delete(usize),
    DeleteAll,
    Discard,
    Clear,
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

impl Command {
    /// Parses a line. List positions are 1-based, as shown by `:list`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Nothing;
        }
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Generate(line.to_owned());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let position = parts
            .next()
            .and_then(|arg| arg.parse::<usize>().ok())
            .filter(|&n| n > 0);

        match (name, position) {
            ("list" | "ls", _) => Command::List,
            ("read", Some(n)) => Command::Read(n),
            ("copy", Some(n)) => Command::Copy(n),
            ("delete" | "rm", Some(n)) => Command::Delete(n),
            ("delete-all", _) => Command::DeleteAll,
            ("discard", _) => Command::Discard,
            ("clear", _) => Command::Clear,
            ("help" | "?", _) => Command::Help,
            ("quit" | "q" | "exit", _) => Command::Quit,
            _ => Command::Unknown(line.to_owned()),
        }
    }
}

pub const HELP: &str = "\
Type a topic and press enter to generate an article.

  :list            show your recent articles
  :read <n>        read article <n> from the list
  :copy <n>        print article <n> as plain text for copying
  :delete <n>      delete article <n>
  :delete-all      delete every saved article
  :discard         delete the article just generated
  :clear           dismiss the article on screen
  :quit            leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("  "), Command::Nothing);
        assert_eq!(
            Command::parse(" coffee brewing "),
            Command::Generate("coffee brewing".to_owned())
        );
        assert_eq!(Command::parse(":list"), Command::List);
        assert_eq!(Command::parse(":read 2"), Command::Read(2));
        assert_eq!(Command::parse(":copy 1"), Command::Copy(1));
        assert_eq!(Command::parse(":rm 3"), Command::Delete(3));
        assert_eq!(Command::parse(":delete-all"), Command::DeleteAll);
        assert_eq!(Command::parse(":discard"), Command::Discard);
        assert_eq!(Command::parse(":q"), Command::Quit);
    }

    #[test]
    fn test_parse_bad_positions() {
        assert_eq!(
            Command::parse(":read"),
            Command::Unknown(":read".to_owned())
        );
        assert_eq!(
            Command::parse(":delete 0"),
            Command::Unknown(":delete 0".to_owned())
        );
        assert_eq!(
            Command::parse(":copy x"),
            Command::Unknown(":copy x".to_owned())
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        for cmd in [
            ":list", ":read", ":copy", ":delete", ":delete-all", ":discard",
            ":clear", ":quit",
        ] {
            assert!(HELP.contains(cmd), "{cmd} missing from help");
        }
        // Nothing is put on a clipboard, the text is printed.
        assert!(HELP.contains("print article <n> as plain text for copying"));
        assert!(!HELP.contains("clipboard"));
    }
}
