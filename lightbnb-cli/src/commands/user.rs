//! User command - look up and create users

use anyhow::Result;
use clap::{Parser, Subcommand};
use lightbnb_db::{Database, NewUser};

use super::print_json;

#[derive(Parser, Debug)]
#[command(about = "Look up or create users")]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show a single user by email (case-insensitive) or id
    Show {
        /// Email address of the user
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        email: Option<String>,

        /// Database id of the user
        #[arg(long)]
        id: Option<i32>,
    },
    /// Create a user and print the stored row
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address (must be unique)
        #[arg(long)]
        email: String,

        /// Password, stored as given
        #[arg(long)]
        password: String,
    },
}

pub async fn run(db: &Database, args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Show { email, id } => {
            let user = match (email, id) {
                (Some(email), _) => db.users().get_by_email(&email).await?,
                (None, Some(id)) => db.users().get_by_id(id).await?,
                (None, None) => anyhow::bail!("pass --email or --id"),
            };
            print_json(&user)
        }
        UserCommand::Create {
            name,
            email,
            password,
        } => {
            let user = db
                .users()
                .create(&NewUser {
                    name,
                    email,
                    password,
                })
                .await?;
            print_json(&user)
        }
    }
}
