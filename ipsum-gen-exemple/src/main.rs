use clap::Parser;
use rand::Rng;

use ipsum_gen_core::api::{GenerateQuery, Output};
use ipsum_gen_core::model::theme::themes;
use ipsum_gen_core::preferences::{PreferenceStore, decode_preferences, encode_preferences};

#[derive(Parser, Debug)]
#[command(version, about = "Print deterministic placeholder text")]
struct Args {
    /// Theme id (lorem, dog, cat, baked, bbq)
    #[arg(long)]
    theme: Option<String>,

    /// Number of blocks, 1-20
    #[arg(long)]
    blocks: Option<String>,

    /// Seed; a random one is picked when omitted
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,

    /// markdown, json, text or html
    #[arg(long)]
    format: Option<String>,

    /// Markdown elements: headers,code,quotes,lists,links
    #[arg(long)]
    md: Option<String>,

    /// Lowercase everything
    #[arg(long)]
    lower: bool,

    /// Single-line output
    #[arg(long)]
    nowrap: bool,

    /// Start from the settings of a share link query (e.g. "theme=dog&md=headers")
    #[arg(long)]
    share: Option<String>,

    /// Remember theme, blocks and options in this file
    #[arg(long)]
    store: Option<String>,

    /// List the available themes and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.list_themes {
        for theme in themes() {
            println!("{:<6} {}", theme.id, theme.label);
        }
        return Ok(());
    }

    // Saved preferences first, then the share link, then explicit flags
    let store = args.store.as_deref().map(PreferenceStore::new);
    let mut preferences = store.as_ref().map(PreferenceStore::load).unwrap_or_default();
    if let Some(share) = &args.share {
        preferences = decode_preferences(share, &preferences).apply(preferences);
    }

    let seed = args.seed.clone().unwrap_or_else(|| {
        let seed: u32 = rand::rng().random_range(0..233_280);
        log::info!("Using random seed {seed}");
        seed.to_string()
    });

    let mut query = GenerateQuery {
        theme: Some(args.theme.clone().unwrap_or_else(|| preferences.theme.clone())),
        blocks: Some(args.blocks.clone().unwrap_or_else(|| preferences.blocks.to_string())),
        seed: Some(seed),
        format: args.format.clone(),
        md: Some(args.md.clone().unwrap_or_else(|| preferences.options.markdown_tokens().join(","))),
        lower: None,
        nowrap: None,
    };
    if args.lower || !preferences.options.capitalize {
        query.lower = Some("1".to_owned());
    }
    if args.nowrap || preferences.options.no_wrap {
        query.nowrap = Some("1".to_owned());
    }

    // Same validation as the HTTP API
    let request = query.validate()?;

    preferences.theme = request.theme.id.to_owned();
    preferences.blocks = request.blocks;
    preferences.options = request.options;
    if let Some(store) = &store {
        store.save(&preferences)?;
        log::info!("Preferences saved to {}", store.path().display());
    }

    let response = request.render();
    match &response.output {
        Output::Text(text) => println!("{text}"),
        Output::Blocks(_) => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    eprintln!("share: ?{}", encode_preferences(&preferences));
    Ok(())
}
