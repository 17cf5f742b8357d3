//! An interactive terminal front end for the article generator.

#[macro_use]
extern crate tracing;

mod command;
mod render;

use std::env;
use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use quill_core::store::JsonFileStore;
use quill_core::{
    Confirm, GeneratedItem, GenerationSession, GenerationSessionBuilder,
    ItemList, ItemStore, PREVIEW_LIMIT, Stage,
};
use quill_http_provider::{HttpConfigBuilder, HttpProvider};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use command::{Command, HELP};

const DEFAULT_DATA_DIR: &str = ".quill";

/// Line input shared by the prompt loop and confirmations.
///
/// Stdin is buffered once for the whole run, so lines that arrive together
/// (piped or pasted) are all delivered in order.
struct Terminal<R = BufReader<Stdin>> {
    lines: Mutex<Lines<R>>,
}

impl Terminal {
    fn new() -> Self {
        Self::with_reader(BufReader::new(io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Terminal<R> {
    fn with_reader(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    async fn read_line(&self) -> Option<String> {
        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(err) => {
                error!("error reading input: {}", err);
                None
            }
        }
    }
}

/// Asks on the terminal, defaulting to no.
#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Confirm for Terminal<R> {
    async fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt.bright_yellow());
        std::io::stdout().flush().ok();

        let Some(line) = self.read_line().await else {
            return false;
        };
        let line = line.trim();
        line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes")
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = HttpConfigBuilder::new();
    if let Ok(endpoint) = env::var("QUILL_ENDPOINT") {
        config = config.with_endpoint(endpoint);
    }
    let config = config.build();
    let data_dir = env::var("QUILL_DATA_DIR")
        .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    debug!("endpoint: {}, data dir: {data_dir}", config.endpoint());

    let store: Arc<dyn ItemStore> = Arc::new(JsonFileStore::new(&data_dir));
    let session = GenerationSessionBuilder::with_provider(HttpProvider::new(
        config,
    ))
    .with_store(Arc::clone(&store))
    .build();
    let mut list = ItemList::new(store);
    let terminal = Terminal::new();

    let saved = list.load_preview(PREVIEW_LIMIT).len();
    println!("{}", "Type a topic to generate an article, :help for more.".dimmed());
    if saved > 0 {
        println!("{}", "You have saved articles, see them with :list.".dimmed());
    }

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = terminal.read_line().await else {
            break;
        };

        match Command::parse(&line) {
            Command::Generate(topic) => {
                generate(&session, topic).await;
                list.load_preview(PREVIEW_LIMIT);
            }
            Command::List => {
                let items = list.load_preview(PREVIEW_LIMIT);
                if items.is_empty() {
                    println!("No saved articles yet.");
                }
                for (idx, item) in items.iter().enumerate() {
                    println!("{}\n", render::card(idx + 1, item));
                }
            }
            Command::Read(position) => {
                if let Some(item) = item_at(&list, position) {
                    println!("{}", render::read_view(item));
                }
            }
            Command::Copy(position) => {
                if let Some(item) = item_at(&list, position) {
                    println!("{}", item.content);
                }
            }
            Command::Delete(position) => {
                let Some(id) = item_at(&list, position).map(|i| i.id.clone())
                else {
                    continue;
                };
                match list.delete_one(&id, &terminal).await {
                    Ok(true) => println!("Deleted."),
                    Ok(false) => {}
                    Err(err) => eprintln!("{}", err.bright_red()),
                }
            }
            Command::DeleteAll => {
                match list.delete_all(&terminal).await {
                    Ok(true) => println!("All saved articles deleted."),
                    Ok(false) => {}
                    Err(err) => eprintln!("{}", err.bright_red()),
                }
            }
            Command::Discard => match session.delete_saved().await {
                Ok(true) => {
                    list.load_preview(PREVIEW_LIMIT);
                    println!("Deleted from saved articles.");
                }
                Ok(false) => println!("No saved article on screen."),
                Err(err) => eprintln!("{}", err.bright_red()),
            },
            Command::Clear => session.clear(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Nothing => {}
            Command::Unknown(line) => {
                println!("Unknown command {line:?}, try :help.");
            }
        }
    }
}

async fn generate(session: &GenerationSession, topic: String) {
    session.submit(topic);
    if !session.snapshot().await.is_submitting() {
        return;
    }

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_style);
    progress_bar.set_message("Creating your blog post...");
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let stage = session.settled().await;
    progress_bar.finish_and_clear();

    match stage {
        Stage::Success(item) => println!("{}", render::result(&item, false)),
        Stage::Failed { record, .. } => {
            println!("{}", render::result(&record, true));
        }
        stage => warn!("unexpected stage after generation: {stage:?}"),
    }
}

fn item_at(list: &ItemList, position: usize) -> Option<&GeneratedItem> {
    let item = list.items().get(position.saturating_sub(1));
    if item.is_none() {
        println!("No article [{position}], see :list.");
    }
    item
}
