//! Interactive browse session
//!
//! Reads one command per line and runs one interaction per search. Every
//! interaction shares the same client, so repeated calls are answered from
//! its memoization cache.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::collection::CollectionApi;
use crate::config::{self, FetchFailurePolicy, Settings};
use crate::error::ExploreError;
use crate::query::{validate_limit, SearchQuery};
use crate::render::{build_detail_view, build_search_page, render_search_page};
use crate::{log_info, log_warn};

use super::inspect::write_detail;
use super::OutputFormat;

const MODULE: &str = "commands::browse";

const START_HINT: &str = "Type a search term to start (e.g., 'flower', 'van gogh').";

const HELP: &str = "\
Commands:
  <text> | search <text>   search the collection
                           (use 'search <text>' when the text starts
                           with a command word, e.g. 'search limit')
  limit <1-12>             how many results to show
  images on|off            only show objects with images
  inspect <id>             show one of the listed objects in detail
  help                     show this help
  quit | exit              leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Blank,
    Search(String),
    Limit(u8),
    Images(bool),
    Inspect(u64),
    Help,
    Quit,
}

/// Parse a line typed into the session
pub fn parse_command(line: &str) -> Result<BrowseCommand, ExploreError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(BrowseCommand::Blank);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "quit" | "exit" if rest.is_empty() => Ok(BrowseCommand::Quit),
        "help" if rest.is_empty() => Ok(BrowseCommand::Help),
        "search" => {
            if rest.is_empty() {
                Err(ExploreError::InvalidQuery(
                    "search text must not be empty".to_string(),
                ))
            } else {
                Ok(BrowseCommand::Search(rest.to_string()))
            }
        }
        "limit" => match rest.parse::<u64>() {
            Ok(n) => {
                let limit = u8::try_from(n).unwrap_or(u8::MAX);
                validate_limit(limit)
                    .map(BrowseCommand::Limit)
                    .map_err(|_| out_of_range(n))
            }
            Err(_) => Ok(BrowseCommand::Search(line.to_string())),
        },
        "images" => match rest.to_lowercase().as_str() {
            "on" | "true" | "yes" => Ok(BrowseCommand::Images(true)),
            "off" | "false" | "no" => Ok(BrowseCommand::Images(false)),
            _ => Ok(BrowseCommand::Search(line.to_string())),
        },
        "inspect" => Ok(rest
            .parse::<u64>()
            .map(BrowseCommand::Inspect)
            .unwrap_or_else(|_| BrowseCommand::Search(line.to_string()))),
        _ => Ok(BrowseCommand::Search(line.to_string())),
    }
}

fn out_of_range(limit: u64) -> ExploreError {
    ExploreError::InvalidQuery(format!(
        "limit must be between {} and {}, got {}",
        config::query::MIN_LIMIT,
        config::query::MAX_LIMIT,
        limit
    ))
}

/// Options that persist between interactions
#[derive(Debug, Clone)]
pub struct BrowseSession {
    pub limit: u8,
    pub images_only: bool,
    pub policy: FetchFailurePolicy,
    /// Identifiers shown by the last search, offered for inspection
    pub last_ids: Vec<u64>,
}

impl BrowseSession {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            limit: settings.default_limit,
            images_only: settings.images_only,
            policy: settings.on_fetch_error,
            last_ids: Vec::new(),
        }
    }

    /// Run one command; returns false when the session should end
    ///
    /// Interaction errors are written to `out` and the session goes on.
    /// Only I/O failures are returned.
    pub async fn handle<A, W>(
        &mut self,
        api: &A,
        command: BrowseCommand,
        out: &mut W,
    ) -> Result<bool, ExploreError>
    where
        A: CollectionApi + ?Sized,
        W: Write,
    {
        match self.interact(api, command, out).await {
            Ok(keep_going) => Ok(keep_going),
            Err(e @ ExploreError::Io(_)) => Err(e),
            Err(e) => {
                log_warn!(MODULE, "{}", e);
                writeln!(out, "Error: {}", e)?;
                Ok(true)
            }
        }
    }

    async fn interact<A, W>(
        &mut self,
        api: &A,
        command: BrowseCommand,
        out: &mut W,
    ) -> Result<bool, ExploreError>
    where
        A: CollectionApi + ?Sized,
        W: Write,
    {
        match command {
            BrowseCommand::Quit => return Ok(false),
            BrowseCommand::Blank => writeln!(out, "{}", START_HINT)?,
            BrowseCommand::Help => writeln!(out, "{}", HELP)?,
            BrowseCommand::Limit(limit) => {
                self.limit = limit;
                writeln!(out, "Showing up to {} results", limit)?;
            }
            BrowseCommand::Images(images_only) => {
                self.images_only = images_only;
                writeln!(
                    out,
                    "Only with images: {}",
                    if images_only { "on" } else { "off" }
                )?;
            }
            BrowseCommand::Search(text) => {
                let query = SearchQuery::new(&text, self.images_only, self.limit)?;
                self.last_ids.clear();
                let page = build_search_page(api, &query, self.policy).await?;
                self.last_ids = page.object_ids().to_vec();
                out.write_all(render_search_page(&page).as_bytes())?;
                if !self.last_ids.is_empty() {
                    writeln!(out, "Use 'inspect <id>' to see one of these in detail.")?;
                }
            }
            BrowseCommand::Inspect(id) => {
                if !self.last_ids.contains(&id) {
                    return Err(ExploreError::InvalidSelection(id));
                }
                let view = build_detail_view(api, id).await?;
                write_detail(&view, OutputFormat::Text, out)?;
            }
        }
        Ok(true)
    }
}

/// Run the session until `quit` or end of input
pub async fn run_browse<A, R, W>(
    api: &A,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<(), ExploreError>
where
    A: CollectionApi + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = BrowseSession::from_settings(settings);
    log_info!(
        MODULE,
        "Browse session started (limit: {}, images_only: {})",
        session.limit,
        session.images_only
    );

    writeln!(
        out,
        "{} - built with the MET Collection API: {}",
        config::app::DISPLAY_NAME,
        config::urls::COLLECTION_API_HOME
    )?;
    writeln!(out, "{}", START_HINT)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let keep_going = match parse_command(&line) {
            Ok(command) => session.handle(api, command, out).await?,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                true
            }
        };
        if !keep_going {
            break;
        }
    }

    log_info!(MODULE, "Browse session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fake::FakeCollection;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), BrowseCommand::Blank);
        assert_eq!(parse_command("quit").unwrap(), BrowseCommand::Quit);
        assert_eq!(parse_command("EXIT").unwrap(), BrowseCommand::Quit);
        assert_eq!(parse_command("limit 12").unwrap(), BrowseCommand::Limit(12));
        assert_eq!(parse_command("images off").unwrap(), BrowseCommand::Images(false));
        assert_eq!(parse_command("inspect 436535").unwrap(), BrowseCommand::Inspect(436535));
        assert_eq!(
            parse_command("search exit strategy").unwrap(),
            BrowseCommand::Search("exit strategy".to_string())
        );
        assert_eq!(
            parse_command("van gogh").unwrap(),
            BrowseCommand::Search("van gogh".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert!(parse_command("limit 0").is_err());
        assert!(parse_command("limit 13").is_err());
        assert!(parse_command("limit 300").is_err());
        assert!(parse_command("search").is_err());
    }

    #[test]
    fn test_command_word_with_free_text_is_a_search() {
        assert_eq!(
            parse_command("images of war").unwrap(),
            BrowseCommand::Search("images of war".to_string())
        );
        assert_eq!(
            parse_command("limit of the known world").unwrap(),
            BrowseCommand::Search("limit of the known world".to_string())
        );
        assert_eq!(
            parse_command("inspect the canvas").unwrap(),
            BrowseCommand::Search("inspect the canvas".to_string())
        );
        assert_eq!(
            parse_command("images").unwrap(),
            BrowseCommand::Search("images".to_string())
        );
    }

    #[tokio::test]
    async fn test_session_search_then_inspect() {
        let api = FakeCollection::new()
            .with_search("flower", 2, vec![1, 2])
            .with_titled(&[1, 2]);
        let input: &[u8] = b"limit 3\nimages off\nflower\ninspect 2\nquit\nflower\n";

        let mut out = Vec::new();
        run_browse(&api, &Settings::default(), input, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Showing up to 3 results"));
        assert!(text.contains("Found 2 results for \"flower\" (showing up to 3)"));
        assert!(text.contains("Artwork 2\n========="));
        assert_eq!(
            api.calls(),
            vec![
                "search:flower:false".to_string(),
                "object:1".to_string(),
                "object:2".to_string(),
                "object:2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_session_survives_errors() {
        let api = FakeCollection::new().failing_search();
        let input: &[u8] = b"flower\ninspect 5\nlimit 40\n\n";

        let mut out = Vec::new();
        run_browse(&api, &Settings::default(), input, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: Search failed"));
        assert!(text.contains("Error: Object 5 is not among the displayed results"));
        assert!(text.contains("Error: Invalid query: limit must be between 1 and 12, got 40"));
        assert!(text.matches(START_HINT).count() >= 2);
    }

    #[tokio::test]
    async fn test_empty_search_clears_inspectable_ids() {
        let api = FakeCollection::new()
            .with_search("flower", 1, vec![1])
            .with_search("qwxz", 0, vec![])
            .with_titled(&[1]);
        let mut session = BrowseSession::from_settings(&Settings::default());

        let mut out = Vec::new();
        session
            .handle(&api, BrowseCommand::Search("flower".to_string()), &mut out)
            .await
            .unwrap();
        assert_eq!(session.last_ids, vec![1]);

        session
            .handle(&api, BrowseCommand::Search("qwxz".to_string()), &mut out)
            .await
            .unwrap();
        assert!(session.last_ids.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("No object IDs returned"));
    }
}
