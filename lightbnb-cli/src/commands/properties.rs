//! Properties command - search listings and add new ones
//!
//! `create` reads a JSON object with the property fields:
//!   lightbnb properties create --file property.json
//!   cat property.json | lightbnb properties create --file -

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{Database, NewProperty, PropertySearch, DEFAULT_LIMIT};

use super::print_json;

#[derive(Parser, Debug)]
#[command(about = "Search or create properties")]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommand {
    /// Search reviewed properties, cheapest first
    Search {
        /// City substring (case-sensitive)
        #[arg(long)]
        city: Option<String>,

        /// Only properties owned by this user id
        #[arg(long)]
        owner_id: Option<i32>,

        /// Exclusive lower bound on cost per night
        #[arg(long, requires = "max_price")]
        min_price: Option<i32>,

        /// Exclusive upper bound on cost per night
        #[arg(long, requires = "min_price")]
        max_price: Option<i32>,

        /// Minimum average rating (exclusive)
        #[arg(long)]
        min_rating: Option<f64>,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,
    },
    /// Create a property from a JSON file ("-" reads stdin)
    Create {
        /// Path to the property JSON
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
    },
}

impl PropertiesArgs {
    /// Filters of a `search` invocation.
    pub fn search_filters(&self) -> Option<PropertySearch> {
        match &self.command {
            PropertiesCommand::Search {
                city,
                owner_id,
                min_price,
                max_price,
                min_rating,
                ..
            } => Some(PropertySearch {
                city: city.clone(),
                owner_id: *owner_id,
                minimum_price_per_night: *min_price,
                maximum_price_per_night: *max_price,
                minimum_rating: *min_rating,
            }),
            PropertiesCommand::Create { .. } => None,
        }
    }
}

fn read_new_property(path: &Path) -> Result<NewProperty> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read property JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&contents).context("Invalid property JSON")
}

pub async fn run(db: &Database, args: PropertiesArgs) -> Result<()> {
    let search = args.search_filters();
    match args.command {
        PropertiesCommand::Search { limit, .. } => {
            let search = search.unwrap_or_default();
            let listings = db.properties().search(&search, limit).await?;
            print_json(&listings)
        }
        PropertiesCommand::Create { file } => {
            let new = read_new_property(&file)?;
            let property = db.properties().create(&new).await?;
            print_json(&property)
        }
    }
}
