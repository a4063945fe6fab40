use dogdeck::cli::{parse_args, BrowseOptions, CliCommand};
use dogdeck::directory::DogApiClient;
use dogdeck::images::ImageStore;
use dogdeck::models::{Breed, Item, SectionType};
use dogdeck::resolver::{category_list, SectionResolver};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dogdeck=info")),
        )
        .init();

    let options = match parse_args(std::env::args()).map_err(|e| eyre!(e))? {
        CliCommand::Version => {
            println!("dogdeck {VERSION}");
            return Ok(());
        }
        CliCommand::Browse(options) => options,
    };

    browse(options).await
}

async fn browse(options: BrowseOptions) -> Result<()> {
    let mut resolver = SectionResolver::new(DogApiClient::new());

    // First resolve loads the breed list and establishes the default
    // selection; later mutations re-resolve against the cached data.
    resolver.resolve().await?;

    if let Some(category) = &options.category {
        if !category_list().iter().any(|c| &c.name == category) {
            return Err(eyre!("unknown category '{category}'"));
        }
        resolver.select_category(category);
    }
    for breed in &options.toggles {
        resolver.toggle_breed(breed);
    }

    let sections = resolver.resolve().await?;

    for (section, items) in &sections {
        match section.kind {
            SectionType::Category => println!("Categories:"),
            SectionType::Breed => println!("\nBreeds in {}:", resolver.selected_category()),
            SectionType::Images => println!("\nImages for {}:", section.id),
        }
        for item in items {
            match item {
                Item::Category(category) => {
                    let marker = if category.is_selected { "*" } else { " " };
                    println!("  {marker} {}", category.name);
                }
                Item::Breed(breed) => {
                    let marker = if breed.is_selected { "*" } else { " " };
                    println!("  {marker} {}", breed.name);
                }
                Item::Image(image) => println!("    {}", image.url),
            }
        }
    }

    if options.random {
        let selected: Vec<Breed> = resolver
            .selected_breeds()
            .iter()
            .filter_map(|name| resolver.breed(name).cloned())
            .collect();
        println!("\nRandom images:");
        for breed in &selected {
            match resolver.random_image_url(breed).await? {
                Some(url) => println!("  {}: {url}", breed.name),
                None => println!("  {}: (no usable image)", breed.name),
            }
        }
    }

    if options.fetch {
        let mut store = ImageStore::new();
        println!("\nFetched image sizes:");
        for item in sections.values().flatten() {
            if let Some(image) = item.as_image() {
                let bytes = store.get(&image.url).await?;
                println!("  {} ({} bytes)", image.url, bytes.len());
            }
        }
    }

    Ok(())
}
